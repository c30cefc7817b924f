//! Asset upload: the per-type contract table, the column mapping, the form
//! state machine, and the file picker seam.

pub mod asset;
pub mod form;
pub mod mapping;
pub mod picker;

pub use asset::{AssetContract, AssetType, SlotKind};
pub use form::{
    compute_readiness, DropEffect, DropOutcome, FileHandle, FormError, Slot, SubmitState,
    UploadForm, UploadRequest,
};
pub use mapping::{ColumnMapping, EventLogField};
pub use picker::{FilePicker, HiddenFileInput, HiddenFilePicker};
