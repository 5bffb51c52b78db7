//! Per-attribute field configuration.

use serde::{Deserialize, Serialize};

/// Configuration a host binds a field controller to.
///
/// `path` is the key identifying the attribute within the record: it selects
/// the value in read-query results and keys the attribute's entry in update
/// payloads. `label` exists for labeled presentation collaborators and is
/// never interpreted by a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub path: String,
    pub label: String,
}

impl FieldConfig {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_config_new() {
        let config = FieldConfig::new("attachment", "Attachment");
        assert_eq!(config.path, "attachment");
        assert_eq!(config.label, "Attachment");
    }
}
