//! Pre-submission validation for file attribute edits.
//!
//! These checks are cheap, synchronous gatekeeping run before a submit is
//! allowed. The server's own write path validates again; nothing here
//! substitutes for that.

mod reference;
mod upload;

pub use reference::{validate_ref, MAX_REF_LENGTH};
pub use upload::validate_file;

use thiserror::Error;

/// Why an edit state is not submittable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Reference cannot be empty")]
    EmptyRef,

    #[error("Reference exceeds maximum length of 255 characters")]
    RefTooLong,

    #[error("Reference '{0}' contains invalid characters. Allowed: letters (a-z, A-Z), digits (0-9), underscore (_), hyphen (-), dot (.), colon (:)")]
    MalformedRef(String),

    #[error("Selected file failed client-side constraints")]
    InvalidSnapshot,

    #[error("Invalid file descriptor: {0}")]
    InvalidDescriptor(String),
}
