//! In-memory model of a library's books and members.

pub mod book;
pub mod error;
pub mod genre;
pub mod member;
pub mod membership;

pub use book::{Book, BorrowError, ReturnError};
pub use error::{LibraryError, Result};
pub use genre::{Genre, ValidationError};
pub use member::{Member, MembershipLevel};
pub use membership::{FeeError, MembershipTier};

