//! File-level validation.

use validator::Validate;

use super::ValidationError;
use crate::models::UploadData;

/// Validate a pending upload.
///
/// The validity snapshot is checked first: whatever the descriptor looks
/// like, a selection the client already flagged is not submittable. The
/// descriptor then runs through the declarative constraints on
/// [`SelectedFile`](crate::models::SelectedFile): filename and content type
/// lengths, minimum size.
pub fn validate_file(data: &UploadData) -> Result<(), ValidationError> {
    if !data.validity.valid {
        return Err(ValidationError::InvalidSnapshot);
    }

    data.file
        .validate()
        .map_err(|errors| ValidationError::InvalidDescriptor(errors.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SelectedFile, Validity};

    fn upload(filename: &str, size: u64, validity: Validity) -> UploadData {
        UploadData {
            file: SelectedFile {
                filename: filename.to_owned(),
                content_type: "application/pdf".to_owned(),
                size,
            },
            validity,
        }
    }

    #[test]
    fn test_validate_file_valid() {
        assert!(validate_file(&upload("report.pdf", 42, Validity::ok())).is_ok());
    }

    #[test]
    fn test_validate_file_invalid_snapshot_wins() {
        // A perfectly good descriptor does not rescue a flagged selection.
        assert_eq!(
            validate_file(&upload("report.pdf", 42, Validity::invalid())),
            Err(ValidationError::InvalidSnapshot)
        );
    }

    #[test]
    fn test_validate_file_empty_filename() {
        assert!(matches!(
            validate_file(&upload("", 42, Validity::ok())),
            Err(ValidationError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn test_validate_file_zero_size() {
        assert!(matches!(
            validate_file(&upload("report.pdf", 0, Validity::ok())),
            Err(ValidationError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn test_validate_file_filename_too_long() {
        let long_name = "a".repeat(256);
        assert!(matches!(
            validate_file(&upload(&long_name, 42, Validity::ok())),
            Err(ValidationError::InvalidDescriptor(_))
        ));
    }
}
