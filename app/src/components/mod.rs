mod layout;
mod player_card;
mod status;

pub use layout::Layout;
pub use player_card::PlayerCard;
pub use status::{EmptyState, ErrorPanel, Loading, RawJson};
