use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::state::{LeaderBoard, Lobby, PlayerStats};

/// Declares an opaque payload type holding the JSON body a read endpoint
/// returned, with a typed view the pages may decode it into.
///
/// The body is kept byte for byte next to its parsed form. Parsing keeps
/// object key order and number text as sent.
macro_rules! snapshot {
    ($(#[$meta:meta])* $name:ident => $model:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            raw: String,
            value: Value,
        }

        impl $name {
            /// Accepts a response body, failing when it is not JSON.
            pub fn parse(raw: String) -> Result<Self, serde_json::Error> {
                let value = serde_json::from_str(&raw)?;
                Ok(Self { raw, value })
            }

            /// The body exactly as the service sent it.
            pub fn as_str(&self) -> &str {
                &self.raw
            }

            pub fn as_value(&self) -> &Value {
                &self.value
            }

            pub fn into_value(self) -> Value {
                self.value
            }

            /// Decodes the payload into an arbitrary shape.
            pub fn decode_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
                T::deserialize(&self.value)
            }

            /// Decodes the payload into the shape the service documents.
            pub fn decode(&self) -> Result<$model, serde_json::Error> {
                self.decode_as()
            }

            pub fn is_empty(&self) -> bool {
                match &self.value {
                    Value::Null => true,
                    Value::Array(items) => items.is_empty(),
                    Value::Object(fields) => fields.is_empty(),
                    _ => false,
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = serde_json::Error;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::parse(raw)
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self {
                    raw: value.to_string(),
                    value,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.value.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Value::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

snapshot!(
    /// Open games as last reported by the service.
    LobbySnapshot => Lobby
);

snapshot!(
    /// Ranked player standings.
    LeaderBoardSnapshot => LeaderBoard
);

snapshot!(
    /// Statistics of a single player.
    PlayerRecord => PlayerStats
);
