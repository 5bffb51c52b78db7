//! Edit states of a file attribute.

use serde::{Deserialize, Serialize};

use super::file::{FileData, RefData, SelectedFile, UploadData, Validity};

/// The closed set of states a file attribute's edit session can be in.
///
/// The host owns a `FileValue` for the duration of an editing session and
/// moves between states through the transition constructors below; the
/// controller only ever reads it. Exactly one variant is active at a time,
/// and the payload each variant carries exists only on that variant.
///
/// `from-server` is produced solely by deserialization: it is the ground
/// truth snapshot of what the persistence layer holds and is never built by
/// user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FileValue {
    /// No file present and none pending.
    #[default]
    Empty,
    /// Canonical server-confirmed state after load.
    FromServer { data: FileData },
    /// The attribute points at an existing stored file, no new bytes.
    Ref {
        data: RefData,
        previous: Box<PriorValue>,
    },
    /// A new local file has been selected for upload.
    Upload {
        data: UploadData,
        previous: Box<PriorValue>,
    },
    /// Clearing of the attribute has been requested.
    Remove {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous: Option<Box<PriorValue>>,
    },
}

/// States a pending edit can fall back to when it is discarded.
///
/// Structurally identical to [`FileValue`] minus `remove`: a removal chains
/// back to the last non-remove state, so a removal held as a fallback is
/// unrepresentable rather than checked at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PriorValue {
    #[default]
    Empty,
    FromServer {
        data: FileData,
    },
    Ref {
        data: RefData,
        previous: Box<PriorValue>,
    },
    Upload {
        data: UploadData,
        previous: Box<PriorValue>,
    },
}

impl FileValue {
    /// Select a new local file for upload.
    ///
    /// A pending edit is replaced in place: its data is swapped out and its
    /// fallback carries over, so undo still returns to the state the edit
    /// session started from.
    pub fn select_upload(self, file: SelectedFile, validity: Validity) -> FileValue {
        FileValue::Upload {
            data: UploadData { file, validity },
            previous: self.replace_edge(),
        }
    }

    /// Point the attribute at an already-stored file.
    pub fn select_ref(self, reference: impl Into<String>) -> FileValue {
        FileValue::Ref {
            data: RefData {
                reference: reference.into(),
            },
            previous: self.replace_edge(),
        }
    }

    /// Request clearing of the attribute.
    ///
    /// The current non-remove state is retained for undo. Removing while
    /// already removed keeps the original fallback; removing an empty
    /// attribute retains nothing.
    pub fn request_remove(self) -> FileValue {
        match self {
            FileValue::Empty => FileValue::Remove { previous: None },
            FileValue::Remove { previous } => FileValue::Remove { previous },
            FileValue::FromServer { data } => FileValue::Remove {
                previous: Some(Box::new(PriorValue::FromServer { data })),
            },
            FileValue::Ref { data, previous } => FileValue::Remove {
                previous: Some(Box::new(PriorValue::Ref { data, previous })),
            },
            FileValue::Upload { data, previous } => FileValue::Remove {
                previous: Some(Box::new(PriorValue::Upload { data, previous })),
            },
        }
    }

    /// Discard the pending edit and fall back to the prior state.
    ///
    /// Identity on `empty` and `from-server`; a removal with nothing
    /// retained falls back to `empty`.
    pub fn restore(self) -> FileValue {
        match self {
            FileValue::Ref { previous, .. } | FileValue::Upload { previous, .. } => {
                (*previous).into()
            }
            FileValue::Remove { previous } => previous
                .map(|prior| (*prior).into())
                .unwrap_or(FileValue::Empty),
            keep => keep,
        }
    }

    /// Filename for display purposes. Only server-confirmed data carries
    /// one; displays render nothing otherwise.
    pub fn filename(&self) -> Option<&str> {
        match self {
            FileValue::FromServer { data } => Some(&data.filename),
            _ => None,
        }
    }

    /// Discriminator string, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            FileValue::Empty => "empty",
            FileValue::FromServer { .. } => "from-server",
            FileValue::Ref { .. } => "ref",
            FileValue::Upload { .. } => "upload",
            FileValue::Remove { .. } => "remove",
        }
    }

    /// Fallback for a newly created pending edit. A pending edit hands over
    /// its own fallback (it is being replaced, not stacked); a removal hands
    /// over what it retained; a base state becomes the fallback itself.
    fn replace_edge(self) -> Box<PriorValue> {
        match self {
            FileValue::Empty => Box::new(PriorValue::Empty),
            FileValue::FromServer { data } => Box::new(PriorValue::FromServer { data }),
            FileValue::Ref { previous, .. } | FileValue::Upload { previous, .. } => previous,
            FileValue::Remove { previous } => previous.unwrap_or_default(),
        }
    }
}

impl From<PriorValue> for FileValue {
    fn from(prior: PriorValue) -> FileValue {
        match prior {
            PriorValue::Empty => FileValue::Empty,
            PriorValue::FromServer { data } => FileValue::FromServer { data },
            PriorValue::Ref { data, previous } => FileValue::Ref { data, previous },
            PriorValue::Upload { data, previous } => FileValue::Upload { data, previous },
        }
    }
}
