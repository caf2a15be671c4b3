use std::time::Duration;

/// The statistics service every request goes to unless the config overrides it.
pub const BASE_URL: &str = "https://api.islanddefense.info";

/// API version prefix shared by all read endpoints.
pub const API_VERSION: &str = "v1";

/// Map slug the service keys its data by.
pub const MAP_SLUG: &str = "island-defense";

/// Query parameter carrying the player name on the player endpoint.
pub const PLAYER_NAME_PARAM: &str = "name";

/// Request timeout used by the native HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT: &str = concat!("idstats/", env!("CARGO_PKG_VERSION"));
