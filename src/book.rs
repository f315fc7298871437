use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::genre::{Genre, ValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BorrowError {
    #[error("book {0:?} is not available for borrowing")]
    BookNotAvailable(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReturnError {
    #[error("book {0:?} returned late")]
    LateReturn(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    genre: Genre,
    is_available: bool,
}

impl Book {
    pub fn new<S>(title: S, genre: Genre, is_available: bool) -> Self
    where
        S: Into<String>,
    {
        Self {
            title: title.into(),
            genre,
            is_available,
        }
    }

    /// Build a book from a genre name read from user input, e.g. `"SCIENCE"`.
    /// Fails before the book exists if the name is not a [`Genre`].
    pub fn try_new<S>(title: S, genre: &str, is_available: bool) -> Result<Self, ValidationError>
    where
        S: Into<String>,
    {
        let genre = genre.parse::<Genre>()?;

        Ok(Self::new(title, genre, is_available))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn borrow(&mut self) -> Result<(), BorrowError> {
        if !self.is_available {
            tracing::debug!(title = %self.title, "borrow refused, book not available");
            return Err(BorrowError::BookNotAvailable(self.title.clone()));
        }

        self.is_available = false;
        tracing::debug!(title = %self.title, "book borrowed");

        Ok(())
    }

    /// Mark the book as available again.
    ///
    /// A late return is rejected and the book stays unavailable.
    pub fn return_book(&mut self, is_late: bool) -> Result<(), ReturnError> {
        if is_late {
            tracing::warn!(title = %self.title, "late return rejected");
            return Err(ReturnError::LateReturn(self.title.clone()));
        }

        self.is_available = true;
        tracing::debug!(title = %self.title, "book returned");

        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.genre)
    }
}
