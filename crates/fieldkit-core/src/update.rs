//! Partial update payloads for record mutations.

use serde_json::{Map, Value};

/// A partial update keyed by attribute path, suitable for merging into a
/// larger mutation payload.
///
/// An empty payload means "no change": the attribute is left untouched by the
/// mutation. A path mapped to `Value::Null` means "clear the attribute". The
/// persistence layer distinguishes the two, so an absent key must never be
/// collapsed into an explicit null.
pub type UpdatePayload = Map<String, Value>;

/// Merge `patch` into `target`. Entries in `patch` win per path; paths absent
/// from `patch` stay untouched in `target`.
pub fn merge_updates(target: &mut UpdatePayload, patch: UpdatePayload) {
    target.extend(patch);
}
