use thiserror::Error;

use crate::{
    book::{BorrowError, ReturnError},
    genre::ValidationError,
    membership::FeeError,
};

pub type Result<T, E = LibraryError> = std::result::Result<T, E>;

/// Any error raised by the model, for callers that chain operations with `?`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Borrow(#[from] BorrowError),

    #[error(transparent)]
    Return(#[from] ReturnError),

    #[error(transparent)]
    Fee(#[from] FeeError),
}

#[cfg(test)]
mod tests {
    use crate::{Book, Genre, Member, MembershipTier};

    use super::{LibraryError, Result};

    fn checkout(title: &str, genre: &str, member: &Member) -> Result<u32> {
        let mut book = Book::try_new(title, genre, true)?;
        book.borrow()?;
        book.return_book(false)?;

        Ok(member.get_fee()?)
    }

    #[test]
    fn test_chain_operations() -> Result<()> {
        let member = Member::new("Grace", MembershipTier::Premium);

        assert_eq!(200, checkout("Cosmos", "SCIENCE", &member)?);

        Ok(())
    }

    #[test]
    fn test_errors_convert() {
        let member = Member::new("Grace", "NONE");

        assert!(matches!(
            checkout("Cosmos", "POETRY", &member),
            Err(LibraryError::Validation(_))
        ));
        assert!(matches!(
            checkout("Cosmos", "SCIENCE", &member),
            Err(LibraryError::Fee(_))
        ));

        let mut book = Book::new("Cosmos", Genre::Science, false);
        let err = LibraryError::from(book.borrow().unwrap_err());
        assert_eq!(r#"book "Cosmos" is not available for borrowing"#, err.to_string());

        let err = LibraryError::from(book.return_book(true).unwrap_err());
        assert!(matches!(err, LibraryError::Return(_)));
    }
}
