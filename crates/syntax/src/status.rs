//! Reading status enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How far a reviewer has got with a declaration.
///
/// Status is advanced by hand: `Unread → Reading → Read`, with `Notice`
/// usable at any point to flag a declaration for special attention.
/// Nothing enforces the order; a mark may move backwards or skip states.
///
/// In source the four states are spelled with their tokens:
///
/// | Variant   | Token       |
/// |-----------|-------------|
/// | `Unread`  | `UN_READ`   |
/// | `Reading` | `READING`   |
/// | `Read`    | `HAVE_READ` |
/// | `Notice`  | `NOTICE`    |
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    /// Not yet examined
    #[default]
    #[serde(rename = "UN_READ")]
    Unread,

    /// Examination in progress
    #[serde(rename = "READING")]
    Reading,

    /// Examination complete
    #[serde(rename = "HAVE_READ")]
    Read,

    /// Flagged for special attention regardless of read completion
    #[serde(rename = "NOTICE")]
    Notice,
}

impl Status {
    /// All statuses, in progress order.
    pub const ALL: [Status; 4] = [
        Status::Unread,
        Status::Reading,
        Status::Read,
        Status::Notice,
    ];

    /// The source token for this status.
    pub fn token(self) -> &'static str {
        match self {
            Status::Unread => "UN_READ",
            Status::Reading => "READING",
            Status::Read => "HAVE_READ",
            Status::Notice => "NOTICE",
        }
    }

    /// Look up a status by its source token.
    ///
    /// Only the four exact tokens are accepted.
    pub fn from_token(token: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.token() == token)
    }

    /// Whether the reviewer has finished with the declaration.
    pub fn is_read(self) -> bool {
        self == Status::Read
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when a string is not one of the four status tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown reading status `{0}`, expected one of UN_READ, READING, HAVE_READ, NOTICE")]
pub struct StatusParseError(pub String);

impl FromStr for Status {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::from_token(s).ok_or_else(|| StatusParseError(s.to_string()))
    }
}
