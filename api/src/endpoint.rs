use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    consts::{API_VERSION, MAP_SLUG, PLAYER_NAME_PARAM},
    error::UsernameError,
    snapshot::{LeaderBoardSnapshot, LobbySnapshot, PlayerRecord},
};

/// A read endpoint of the statistics service.
pub trait ReadRequest {
    type Response: TryFrom<String, Error = serde_json::Error>;

    /// Resource segment between the API version and the map slug.
    fn resource(&self) -> &'static str;

    fn query(&self) -> Option<(&'static str, &str)> {
        None
    }

    fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([API_VERSION, self.resource(), MAP_SLUG]);
        }
        if let Some((key, value)) = self.query() {
            url.query_pairs_mut().append_pair(key, value);
        }
        url
    }
}

pub struct LobbyRequest;

impl ReadRequest for LobbyRequest {
    type Response = LobbySnapshot;

    fn resource(&self) -> &'static str {
        "lobby"
    }
}

pub struct LeaderBoardRequest;

impl ReadRequest for LeaderBoardRequest {
    type Response = LeaderBoardSnapshot;

    fn resource(&self) -> &'static str {
        "leaderBoard"
    }
}

pub struct PlayerRequest<'a>(&'a Username);

impl<'a> PlayerRequest<'a> {
    pub fn new(username: &'a Username) -> Self {
        Self(username)
    }
}

impl ReadRequest for PlayerRequest<'_> {
    type Response = PlayerRecord;

    fn resource(&self) -> &'static str {
        "player"
    }

    fn query(&self) -> Option<(&'static str, &str)> {
        Some((PLAYER_NAME_PARAM, self.0.as_str()))
    }
}

/// Player name as typed by the user, trimmed and guaranteed non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(name: &str) -> Result<Self, UsernameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl Deref for Username {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
