//! The file field controller.

use serde_json::Value;

use fieldkit_core::{FieldConfig, FieldController, UpdatePayload};

use crate::models::{FileData, FileUpdate, FileValue};
use crate::validation::{validate_file, validate_ref};

/// Sub-fields the read query must project for a file attribute.
pub const FILE_SELECTION: [&str; 5] = ["url", "filename", "ref", "filesize", "originalFilename"];

/// Controller for a file-valued attribute.
///
/// A pure mapping layer around host-owned state: it never holds or mutates a
/// [`FileValue`] itself, and every operation is independent of every other
/// call.
#[derive(Debug, Clone)]
pub struct FileFieldController {
    config: FieldConfig,
}

impl FileFieldController {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }
}

impl FieldController for FileFieldController {
    type Value = FileValue;

    fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn selection(&self) -> &[&str] {
        &FILE_SELECTION
    }

    fn default_value(&self) -> FileValue {
        FileValue::Empty
    }

    fn deserialize(&self, item: &Value) -> FileValue {
        let value = match item.get(self.path()) {
            None | Some(Value::Null) => return FileValue::Empty,
            Some(value) => value,
        };
        match serde_json::from_value::<FileData>(value.clone()) {
            Ok(data) => FileValue::FromServer { data },
            Err(error) => {
                tracing::debug!(
                    path = self.path(),
                    %error,
                    "discarding malformed file value from read query"
                );
                FileValue::Empty
            }
        }
    }

    fn validate(&self, value: &FileValue) -> bool {
        match value {
            FileValue::Ref { data, .. } => validate_ref(data).is_ok(),
            FileValue::Upload { data, .. } => validate_file(data).is_ok(),
            // Nothing to check: no new user-supplied payload exists.
            _ => true,
        }
    }

    fn serialize(&self, value: &FileValue) -> UpdatePayload {
        let mut payload = UpdatePayload::new();
        match value {
            FileValue::Upload { data, .. } => {
                let update = FileUpdate::Upload {
                    upload: data.file.clone(),
                };
                payload.insert(self.path().to_owned(), update.to_json_value());
            }
            FileValue::Ref { data, .. } => {
                let update = FileUpdate::Ref {
                    reference: data.reference.clone(),
                };
                payload.insert(self.path().to_owned(), update.to_json_value());
            }
            FileValue::Remove { .. } => {
                payload.insert(self.path().to_owned(), Value::Null);
            }
            // No change: the attribute stays out of the payload entirely.
            FileValue::Empty | FileValue::FromServer { .. } => {}
        }
        tracing::trace!(path = self.path(), kind = value.kind(), "serialized file field");
        payload
    }
}
