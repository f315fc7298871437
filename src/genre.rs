use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("genre must be a Genre, got {0:?}")]
    InvalidGenre(String),
}

/// Category tag attached to every [`crate::Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Fiction,
    NonFiction,
    Science,
    History,
    Biography,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Science,
        Genre::History,
        Genre::Biography,
    ];

    /// Ordinal code, starting at 1 in declaration order.
    pub fn code(self) -> u8 {
        match self {
            Genre::Fiction => 1,
            Genre::NonFiction => 2,
            Genre::Science => 3,
            Genre::History => 4,
            Genre::Biography => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Genre::Fiction => "FICTION",
            Genre::NonFiction => "NON_FICTION",
            Genre::Science => "SCIENCE",
            Genre::History => "HISTORY",
            Genre::Biography => "BIOGRAPHY",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Genre {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.name() == value)
            .ok_or_else(|| ValidationError::InvalidGenre(value.to_owned()))
    }
}

impl TryFrom<String> for Genre {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Genre::try_from(value.as_str())
    }
}

impl TryFrom<u8> for Genre {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.code() == code)
            .ok_or_else(|| ValidationError::InvalidGenre(code.to_string()))
    }
}

impl FromStr for Genre {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::try_from(s)
    }
}
