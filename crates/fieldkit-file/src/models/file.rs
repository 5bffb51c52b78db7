//! Data carried by file edit states.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Server-confirmed file attribute data, as returned by the read query.
///
/// Fields are copied verbatim from the persistence layer. The server's write
/// path is trusted to have validated them, so nothing here is checked again
/// on load; missing sub-fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FileData {
    /// Fetchable location of the stored file.
    pub url: String,
    /// Stable opaque identifier for the stored file.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Size in bytes.
    pub filesize: u64,
    /// Storage-assigned name.
    pub filename: String,
    /// The user's original name at upload time, absent if unknown.
    pub original_filename: Option<String>,
}

/// User-entered reference to an already-stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefData {
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Descriptor of a locally selected file.
///
/// The binary itself travels out-of-band with whatever transport the host
/// uses; payloads carry only this descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Filename must be between 1 and 255 characters"
    ))]
    pub filename: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Content type must be between 1 and 255 characters"
    ))]
    pub content_type: String,
    /// File size in bytes.
    #[validate(range(min = 1, message = "File size must be at least 1 byte"))]
    pub size: u64,
}

/// Client-side validity snapshot captured when the file was selected.
///
/// A pre-submission indicator of whether the selection satisfied the input's
/// basic constraints at the moment it was made. It is never re-derived here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    pub valid: bool,
}

impl Validity {
    /// Snapshot reporting no constraint violation.
    pub fn ok() -> Self {
        Self { valid: true }
    }

    /// Snapshot reporting a constraint violation.
    pub fn invalid() -> Self {
        Self { valid: false }
    }
}

/// Payload of a pending upload: the selected file plus the validity snapshot
/// taken at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadData {
    pub file: SelectedFile,
    pub validity: Validity,
}
