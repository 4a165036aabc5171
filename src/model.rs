use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier value as the caller supplied it. Numeric ids serialize as JSON
/// numbers, everything else as strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(u64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Num(n) => write!(f, "{n}"),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RawId);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl $name {
            pub fn to_json(&self) -> Value {
                match &self.0 {
                    RawId::Num(n) => Value::from(*n),
                    RawId::Text(s) => Value::String(s.clone()),
                }
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(RawId::Num(n))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(RawId::Text(s.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(RawId::Text(s))
            }
        }
    };
}

id_type!(
    /// A board on the account.
    BoardId
);
id_type!(
    /// A card, as numbered by the service.
    CardId
);
id_type!(
    /// A lane (column or swimlane) within a board.
    LaneId
);
id_type!(
    /// Card id assigned by an external system.
    ExternalId
);

/// Slot within a lane, 0 is the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub u32);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Position {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// Board revision, bumped by the service on every change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardVersion(pub u64);

impl fmt::Display for BoardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BoardVersion {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

/// Card fields keyed by the service's names (`Title`, `TypeId`, `LaneId`...).
pub type CardPayload = Map<String, Value>;

pub type CardBatch = Vec<CardPayload>;

/// Envelope the service wraps around every reply.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reply {
    pub reply_code: i64,
    #[serde(default)]
    pub reply_text: String,
    #[serde(default)]
    pub reply_data: Vec<Value>,
}

impl Reply {
    /// First `ReplyData` entry, where the service puts the payload.
    pub fn data(&self) -> Option<&Value> {
        self.reply_data.first()
    }

    /// 2xx reply codes; failures still arrive with HTTP 200.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.reply_code)
    }
}
