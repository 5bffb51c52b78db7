//! File-valued attribute editing.
//!
//! This crate implements the file field for record-editing hosts: the
//! [`FileValue`] edit-state model, the two-tier pre-submission validation,
//! and the [`FileFieldController`] that maps between read-query results,
//! edit states, and mutation payloads.
//!
//! Storage, transport, and upload progress belong to collaborators; nothing
//! here performs I/O.

pub mod controller;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use controller::{FileFieldController, FILE_SELECTION};
pub use models::{
    FileData, FileUpdate, FileValue, PriorValue, RefData, SelectedFile, UploadData, Validity,
};
pub use validation::{validate_file, validate_ref, ValidationError};
