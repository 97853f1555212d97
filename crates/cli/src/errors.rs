use showroom_core::DomainError;
use thiserror::Error;

/// Fatal session failure. Domain rejections never end up here.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Text shown to the user for a rejected input.
pub fn user_message(err: &DomainError) -> &'static str {
    match err {
        DomainError::InvalidPrice(_) => "Invalid price.\n",
        DomainError::InvalidInput(_) => "Invalid input.\n",
        DomainError::InvalidOption { .. } => "Invalid option.\n\n",
        DomainError::EmptyCatalog => "No flooring options available.\n",
        DomainError::InvalidChoice(_) => "Invalid choice. Try again.\n\n",
    }
}
