//! Wire shapes for the file attribute's mutation input.

use serde::Serialize;
use serde_json::Value;

use super::file::SelectedFile;

/// Mutation input for a file attribute: exactly one of a new binary payload
/// or a reference to an already-stored file.
///
/// Clearing is expressed as an explicit `null` at the attribute path and "no
/// change" as omission of the path entirely, so neither is representable
/// here; both are handled by the caller around this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileUpdate {
    /// Replace with this new binary payload.
    Upload { upload: SelectedFile },
    /// Point at this existing stored file, no new bytes.
    Ref {
        #[serde(rename = "ref")]
        reference: String,
    },
}

impl FileUpdate {
    /// Serialize for embedding at the attribute path of a mutation payload.
    pub fn to_json_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Parse the value found at an attribute path of an incoming mutation
    /// payload. `None` when the value is not a recognized update shape;
    /// explicit `null` (clearing) is the caller's case to handle first.
    ///
    /// An update object carries exactly one key. Anything else, including an
    /// object naming both `upload` and `ref`, is not an update.
    pub fn from_json_value(v: &Value) -> Option<FileUpdate> {
        let object = v.as_object()?;
        if object.len() != 1 {
            return None;
        }
        if let Some(upload) = object.get("upload") {
            let upload = serde_json::from_value(upload.clone()).ok()?;
            return Some(FileUpdate::Upload { upload });
        }
        object.get("ref").and_then(Value::as_str).map(|reference| {
            FileUpdate::Ref {
                reference: reference.to_owned(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> SelectedFile {
        SelectedFile {
            filename: "new.pdf".to_owned(),
            content_type: "application/pdf".to_owned(),
            size: 42,
        }
    }

    #[test]
    fn test_upload_wire_shape() {
        let update = FileUpdate::Upload {
            upload: descriptor(),
        };
        assert_eq!(
            update.to_json_value(),
            json!({
                "upload": {
                    "filename": "new.pdf",
                    "contentType": "application/pdf",
                    "size": 42,
                }
            })
        );
    }

    #[test]
    fn test_ref_wire_shape() {
        let update = FileUpdate::Ref {
            reference: "r1".to_owned(),
        };
        assert_eq!(update.to_json_value(), json!({ "ref": "r1" }));
    }

    #[test]
    fn test_parse_round_trips() {
        for update in [
            FileUpdate::Upload {
                upload: descriptor(),
            },
            FileUpdate::Ref {
                reference: "r1".to_owned(),
            },
        ] {
            let parsed = FileUpdate::from_json_value(&update.to_json_value());
            assert_eq!(parsed, Some(update));
        }
    }

    #[test]
    fn test_parse_rejects_ambiguous_and_null() {
        let both = json!({
            "upload": { "filename": "a", "contentType": "b", "size": 1 },
            "ref": "r1",
        });
        assert_eq!(FileUpdate::from_json_value(&both), None);
        assert_eq!(FileUpdate::from_json_value(&Value::Null), None);
        assert_eq!(FileUpdate::from_json_value(&json!({})), None);
        assert_eq!(FileUpdate::from_json_value(&json!({ "ref": 5 })), None);
    }
}
