//! The host-facing field controller contract.

use serde_json::Value;

use crate::config::FieldConfig;
use crate::update::UpdatePayload;

/// Contract between a record-editing host and a field implementation.
///
/// The host owns the editing session and holds the current value in its own
/// state; a controller is a pure mapping layer around that state and never
/// mutates it. The host calls `deserialize` once when loading a record,
/// `validate` on every change before allowing submission, and `serialize` at
/// submission time to build the outgoing mutation.
///
/// Every operation is synchronous, stateless between calls, and total over
/// its declared input domain: absent or malformed inputs map to the default
/// value, validation failures surface as `false`, and unrecognized states
/// serialize to an empty payload. Nothing here returns an error.
pub trait FieldController {
    /// The edit-state type this controller mediates.
    type Value;

    /// Configuration of the attribute this controller is bound to.
    fn config(&self) -> &FieldConfig;

    /// Attribute path within the record.
    fn path(&self) -> &str {
        &self.config().path
    }

    /// Field label for labeled displays.
    fn label(&self) -> &str {
        &self.config().label
    }

    /// Sub-fields the read query must project at this attribute's path.
    /// Collaborators executing reads on behalf of the field must request
    /// exactly this projection.
    fn selection(&self) -> &[&str];

    /// Value used by the host when creating a new record with no prior
    /// value.
    fn default_value(&self) -> Self::Value;

    /// Map a read-query result onto an edit state.
    fn deserialize(&self, item: &Value) -> Self::Value;

    /// Whether the current edit state is submittable. Cheap, synchronous,
    /// pre-submission gatekeeping only; weaker than server-side validation
    /// and never a substitute for it.
    fn validate(&self, value: &Self::Value) -> bool;

    /// Build the partial update for the outgoing mutation. Pure and
    /// read-only; does not re-validate. Callers are expected to gate on
    /// [`validate`](Self::validate) first: a payload is produced even from
    /// an edit state that would not have validated.
    fn serialize(&self, value: &Self::Value) -> UpdatePayload;
}
