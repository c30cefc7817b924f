//! Upload form state machine.
//!
//! Holds one [`Slot`] per [`SlotKind`], the event-log column mapping and the
//! submission state. Every slot moves between `Empty` and `Filled`
//! independently; the whole form is either `Idle` or `Submitting`, and
//! nothing can change while a submission is in flight.
//!
//! The form is generic over the file handle so the transitions can be
//! exercised without a browser; the app uses `web_sys::File`.

use thiserror::Error;

use super::asset::{AssetType, SlotKind};
use super::mapping::ColumnMapping;

/// A file the user picked or dropped.
pub trait FileHandle: Clone {
    fn file_name(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

// =============================================================================
// Slot
// =============================================================================

/// Client-side holder for one pending file.
#[derive(Clone, Debug)]
pub struct Slot<F> {
    file: Option<F>,
    drag_active: bool,
}

impl<F> Slot<F> {
    fn empty() -> Self {
        Self {
            file: None,
            drag_active: false,
        }
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn is_filled(&self) -> bool {
        self.file.is_some()
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }
}

/// Drop effect the drop area should advertise while hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropEffect {
    Copy,
    None,
}

impl DropEffect {
    /// Value for `DataTransfer.dropEffect`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DropEffect::Copy => "copy",
            DropEffect::None => "none",
        }
    }
}

/// Result of dropping something onto a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The slot was empty and now holds the dropped file.
    Accepted,
    /// The slot already held a file; it was kept.
    Rejected,
    /// The drop carried no file.
    NoFile,
}

// =============================================================================
// Submission
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Transitions the form refuses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("an upload is already in progress")]
    Submitting,

    #[error("the form is not ready to be submitted")]
    NotReady,

    #[error("failed to serialize column mapping: {0}")]
    Mapping(String),
}

/// Everything the backend receives for one upload.
#[derive(Clone, Debug)]
pub struct UploadRequest<F> {
    pub asset_type: AssetType,
    /// Files keyed by slot, only for the slots the asset type uses.
    pub files: Vec<(SlotKind, F)>,
    /// Serialized column mapping, event logs only.
    pub column_mapping: Option<String>,
}

impl<F> UploadRequest<F> {
    /// Non-file multipart fields.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("assetType", self.asset_type.as_str().to_string())];
        if let Some(mapping) = &self.column_mapping {
            fields.push(("eventLogColumnMapping", mapping.clone()));
        }
        fields
    }
}

// =============================================================================
// Readiness
// =============================================================================

/// Whether an upload of `asset_type` may be submitted.
pub fn compute_readiness(
    asset_type: AssetType,
    is_filled: impl Fn(SlotKind) -> bool,
    mapping_filled_in: bool,
    submitting: bool,
) -> bool {
    if submitting {
        return false;
    }
    let contract = asset_type.contract();
    contract.slots.iter().all(|slot| is_filled(*slot))
        && (!contract.requires_column_mapping || mapping_filled_in)
}

// =============================================================================
// Form
// =============================================================================

#[derive(Clone, Debug)]
pub struct UploadForm<F> {
    asset_type: AssetType,
    slots: [Slot<F>; 3],
    column_mapping: ColumnMapping,
    mapping_filled_in: bool,
    state: SubmitState,
}

impl<F: FileHandle> UploadForm<F> {
    pub fn new(asset_type: AssetType) -> Self {
        Self {
            asset_type,
            slots: [Slot::empty(), Slot::empty(), Slot::empty()],
            column_mapping: ColumnMapping::default(),
            mapping_filled_in: false,
            state: SubmitState::Idle,
        }
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    /// Switch the asset type. Files picked for other types stay in their
    /// slots until [`submit`](Self::submit) prunes them.
    pub fn set_asset_type(&mut self, asset_type: AssetType) -> Result<(), FormError> {
        self.ensure_idle()?;
        self.asset_type = asset_type;
        Ok(())
    }

    pub fn slot(&self, kind: SlotKind) -> &Slot<F> {
        &self.slots[kind.index()]
    }

    pub fn file_name(&self, kind: SlotKind) -> Option<String> {
        self.slot(kind).file().map(FileHandle::file_name)
    }

    /// File picker change: replaces whatever the slot held.
    pub fn select_file(&mut self, kind: SlotKind, file: F) -> Result<(), FormError> {
        self.ensure_idle()?;
        log::debug!("slot {:?} <- {}", kind, file.file_name());
        self.slots[kind.index()].file = Some(file);
        Ok(())
    }

    pub fn clear_slot(&mut self, kind: SlotKind) -> Result<(), FormError> {
        self.ensure_idle()?;
        self.slots[kind.index()].file = None;
        Ok(())
    }

    /// Record drag hover on a slot.
    ///
    /// Hover is tracked for styling even on filled slots, which advertise
    /// [`DropEffect::None`]. Leaving a slot is always allowed.
    pub fn set_drag_active(&mut self, kind: SlotKind, active: bool) -> Result<DropEffect, FormError> {
        if active {
            self.ensure_idle()?;
        }
        let slot = &mut self.slots[kind.index()];
        slot.drag_active = active;
        Ok(if slot.is_filled() {
            DropEffect::None
        } else {
            DropEffect::Copy
        })
    }

    /// Drop onto a slot. Hover is reset whatever the outcome; an occupied
    /// slot keeps its file.
    pub fn drop_file(&mut self, kind: SlotKind, file: Option<F>) -> Result<DropOutcome, FormError> {
        self.slots[kind.index()].drag_active = false;
        self.ensure_idle()?;

        let Some(file) = file else {
            return Ok(DropOutcome::NoFile);
        };
        let slot = &mut self.slots[kind.index()];
        if slot.is_filled() {
            log::debug!("slot {:?} occupied, drop of {} rejected", kind, file.file_name());
            return Ok(DropOutcome::Rejected);
        }
        log::debug!("slot {:?} <- {} (dropped)", kind, file.file_name());
        slot.file = Some(file);
        Ok(DropOutcome::Accepted)
    }

    pub fn column_mapping(&self) -> &ColumnMapping {
        &self.column_mapping
    }

    pub fn mapping_filled_in(&self) -> bool {
        self.mapping_filled_in
    }

    pub fn update_column_mapping(&mut self, mapping: ColumnMapping, filled_in: bool) -> Result<(), FormError> {
        self.ensure_idle()?;
        self.column_mapping = mapping;
        self.mapping_filled_in = filled_in;
        Ok(())
    }

    /// The mapping dialog only opens once an event log is chosen.
    pub fn column_mapping_enabled(&self) -> bool {
        self.asset_type.contract().requires_column_mapping
            && self
                .asset_type
                .contract()
                .slots
                .iter()
                .all(|slot| self.slot(*slot).is_filled())
    }

    pub fn is_ready(&self) -> bool {
        compute_readiness(
            self.asset_type,
            |kind| self.slot(kind).is_filled(),
            self.mapping_filled_in,
            self.is_submitting(),
        )
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self.state {
            SubmitState::Idle => "Upload",
            SubmitState::Submitting => "Uploading...",
        }
    }

    /// Start a submission.
    ///
    /// Slots the current asset type does not use are emptied first so stale
    /// files from an earlier selection never reach the backend.
    pub fn submit(&mut self) -> Result<UploadRequest<F>, FormError> {
        self.ensure_idle()?;
        if !self.is_ready() {
            return Err(FormError::NotReady);
        }

        let contract = self.asset_type.contract();
        for kind in SlotKind::ALL {
            if !contract.uses(kind) {
                self.slots[kind.index()].file = None;
            }
        }

        let column_mapping = if contract.requires_column_mapping {
            let value = self
                .column_mapping
                .to_form_value()
                .map_err(|e| FormError::Mapping(e.to_string()))?;
            Some(value)
        } else {
            None
        };

        let files = contract
            .slots
            .iter()
            .filter_map(|kind| self.slot(*kind).file().cloned().map(|f| (*kind, f)))
            .collect();

        self.state = SubmitState::Submitting;
        log::info!("submitting {} upload", self.asset_type);

        Ok(UploadRequest {
            asset_type: self.asset_type,
            files,
            column_mapping,
        })
    }

    /// Settle the in-flight submission. A successful upload discards the
    /// form state; a failed one leaves it for the user to retry.
    pub fn finish_submission(&mut self, success: bool) {
        self.state = SubmitState::Idle;
        if success {
            *self = Self::new(self.asset_type);
        }
    }

    fn ensure_idle(&self) -> Result<(), FormError> {
        match self.state {
            SubmitState::Idle => Ok(()),
            SubmitState::Submitting => Err(FormError::Submitting),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::mapping::EventLogField;

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile(&'static str);

    impl FileHandle for TestFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn complete_mapping() -> ColumnMapping {
        let mut mapping = ColumnMapping::default();
        for field in EventLogField::ALL {
            mapping.set(field, field.label());
        }
        mapping
    }

    #[test]
    fn test_event_log_requires_file_and_mapping() {
        let mut form = UploadForm::new(AssetType::EventLog);
        assert!(!form.is_ready());
        assert!(!form.column_mapping_enabled());

        form.select_file(SlotKind::EventLog, TestFile("events.csv")).unwrap();
        assert!(form.column_mapping_enabled());
        assert!(!form.is_ready());

        form.update_column_mapping(complete_mapping(), true).unwrap();
        assert!(form.is_ready());
        assert_eq!(form.submit_label(), "Upload");

        let request = form.submit().unwrap();
        assert_eq!(form.submit_label(), "Uploading...");
        assert!(!form.is_ready());
        assert_eq!(request.files, vec![(SlotKind::EventLog, TestFile("events.csv"))]);
        assert!(request.column_mapping.is_some());
    }

    #[test]
    fn test_mapping_flag_is_authoritative() {
        let mut form = UploadForm::new(AssetType::EventLog);
        form.select_file(SlotKind::EventLog, TestFile("events.csv.gz")).unwrap();
        form.update_column_mapping(complete_mapping(), false).unwrap();
        assert!(!form.is_ready());
    }

    #[test]
    fn test_process_model_requires_file() {
        let mut form = UploadForm::new(AssetType::ProcessModel);
        assert!(!form.is_ready());
        form.select_file(SlotKind::ProcessModel, TestFile("model.bpmn")).unwrap();
        assert!(form.is_ready());
        assert!(!form.column_mapping_enabled());
    }

    #[test]
    fn test_simulation_model_requires_both_slots() {
        let mut form = UploadForm::new(AssetType::SimulationModel);
        form.select_file(SlotKind::ProcessModel, TestFile("model.bpmn")).unwrap();
        assert!(!form.is_ready());
        form.select_file(SlotKind::SimulationModel, TestFile("params.json")).unwrap();
        assert!(form.is_ready());

        form.clear_slot(SlotKind::ProcessModel).unwrap();
        assert!(!form.is_ready());
    }

    #[test]
    fn test_remove_resets_readiness() {
        let mut form = UploadForm::new(AssetType::ProcessModel);
        form.select_file(SlotKind::ProcessModel, TestFile("model.bpmn")).unwrap();
        form.clear_slot(SlotKind::ProcessModel).unwrap();
        assert!(!form.is_ready());
        assert!(form.file_name(SlotKind::ProcessModel).is_none());
    }

    #[test]
    fn test_select_replaces_existing_file() {
        let mut form = UploadForm::new(AssetType::ProcessModel);
        form.select_file(SlotKind::ProcessModel, TestFile("a.bpmn")).unwrap();
        form.select_file(SlotKind::ProcessModel, TestFile("b.bpmn")).unwrap();
        assert_eq!(form.file_name(SlotKind::ProcessModel).as_deref(), Some("b.bpmn"));
    }

    #[test]
    fn test_drop_onto_filled_slot_is_rejected() {
        let mut form = UploadForm::new(AssetType::ProcessModel);
        assert_eq!(
            form.drop_file(SlotKind::ProcessModel, Some(TestFile("first.bpmn"))),
            Ok(DropOutcome::Accepted)
        );

        assert_eq!(
            form.set_drag_active(SlotKind::ProcessModel, true),
            Ok(DropEffect::None)
        );
        assert!(form.slot(SlotKind::ProcessModel).is_drag_active());

        assert_eq!(
            form.drop_file(SlotKind::ProcessModel, Some(TestFile("second.bpmn"))),
            Ok(DropOutcome::Rejected)
        );
        assert_eq!(form.file_name(SlotKind::ProcessModel).as_deref(), Some("first.bpmn"));
        assert!(!form.slot(SlotKind::ProcessModel).is_drag_active());
    }

    #[test]
    fn test_drag_hover_on_empty_slot() {
        let mut form: UploadForm<TestFile> = UploadForm::new(AssetType::EventLog);
        assert_eq!(form.set_drag_active(SlotKind::EventLog, true), Ok(DropEffect::Copy));
        assert!(form.slot(SlotKind::EventLog).is_drag_active());
        form.set_drag_active(SlotKind::EventLog, false).unwrap();
        assert!(!form.slot(SlotKind::EventLog).is_drag_active());

        assert_eq!(form.drop_file(SlotKind::EventLog, None), Ok(DropOutcome::NoFile));
    }

    #[test]
    fn test_submitting_freezes_form() {
        let mut form = UploadForm::new(AssetType::ProcessModel);
        form.select_file(SlotKind::ProcessModel, TestFile("model.bpmn")).unwrap();
        form.submit().unwrap();

        assert!(form.is_submitting());
        assert_eq!(form.submit().unwrap_err(), FormError::Submitting);
        assert_eq!(
            form.select_file(SlotKind::ProcessModel, TestFile("other.bpmn")),
            Err(FormError::Submitting)
        );
        assert_eq!(form.clear_slot(SlotKind::ProcessModel), Err(FormError::Submitting));
        assert_eq!(form.set_asset_type(AssetType::EventLog), Err(FormError::Submitting));
        assert_eq!(
            form.set_drag_active(SlotKind::ProcessModel, true),
            Err(FormError::Submitting)
        );
        assert_eq!(
            form.drop_file(SlotKind::SimulationModel, Some(TestFile("params.json"))),
            Err(FormError::Submitting)
        );
        assert!(!form.slot(SlotKind::SimulationModel).is_filled());
        assert!(!form.slot(SlotKind::SimulationModel).is_drag_active());
        assert_eq!(
            form.update_column_mapping(complete_mapping(), true),
            Err(FormError::Submitting)
        );
        assert!(!form.mapping_filled_in());
        assert_eq!(form.column_mapping(), &ColumnMapping::default());
        assert!(!form.is_ready());
    }

    #[test]
    fn test_event_log_multipart_fields() {
        let mut form = UploadForm::new(AssetType::EventLog);
        form.select_file(SlotKind::EventLog, TestFile("events.csv")).unwrap();
        form.update_column_mapping(complete_mapping(), true).unwrap();

        let request = form.submit().unwrap();
        let fields = request.text_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], ("assetType", "event_log".to_string()));
        assert_eq!(fields[1].0, "eventLogColumnMapping");

        let mapping: serde_json::Value = serde_json::from_str(&fields[1].1).unwrap();
        assert_eq!(mapping["case"], EventLogField::CaseId.label());
        assert_eq!(mapping["activity"], EventLogField::Activity.label());
        assert_eq!(mapping["resource"], EventLogField::Resource.label());
        assert_eq!(mapping["start_time"], EventLogField::StartTimestamp.label());
        assert_eq!(mapping["end_time"], EventLogField::EndTimestamp.label());

        let names: Vec<_> = request.files.iter().map(|(kind, _)| kind.field_name()).collect();
        assert_eq!(names, vec!["eventLogFile"]);
    }

    #[test]
    fn test_simulation_model_multipart_fields() {
        let mut form = UploadForm::new(AssetType::SimulationModel);
        form.select_file(SlotKind::ProcessModel, TestFile("model.bpmn")).unwrap();
        form.select_file(SlotKind::SimulationModel, TestFile("params.json")).unwrap();

        let request = form.submit().unwrap();
        assert_eq!(request.text_fields(), vec![("assetType", "simulation_model".to_string())]);
        let names: Vec<_> = request.files.iter().map(|(kind, _)| kind.field_name()).collect();
        assert_eq!(names, vec!["processModelFile", "simulationModelFile"]);
    }

    #[test]
    fn test_submit_when_not_ready() {
        let mut form: UploadForm<TestFile> = UploadForm::new(AssetType::SimulationModel);
        assert_eq!(form.submit().unwrap_err(), FormError::NotReady);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submit_prunes_unused_slots() {
        let mut form = UploadForm::new(AssetType::EventLog);
        form.select_file(SlotKind::EventLog, TestFile("events.csv")).unwrap();
        form.select_file(SlotKind::SimulationModel, TestFile("params.json")).unwrap();
        form.set_asset_type(AssetType::ProcessModel).unwrap();
        form.select_file(SlotKind::ProcessModel, TestFile("model.bpmn")).unwrap();

        let request = form.submit().unwrap();
        assert_eq!(request.files, vec![(SlotKind::ProcessModel, TestFile("model.bpmn"))]);
        assert!(request.column_mapping.is_none());
        assert!(!form.slot(SlotKind::EventLog).is_filled());
        assert!(!form.slot(SlotKind::SimulationModel).is_filled());
        assert_eq!(request.text_fields(), vec![("assetType", "process_model".to_string())]);
    }

    #[test]
    fn test_failed_submission_keeps_state() {
        let mut form = UploadForm::new(AssetType::SimulationModel);
        form.select_file(SlotKind::ProcessModel, TestFile("model.bpmn")).unwrap();
        form.select_file(SlotKind::SimulationModel, TestFile("params.json")).unwrap();
        form.submit().unwrap();

        form.finish_submission(false);
        assert!(!form.is_submitting());
        assert!(form.is_ready());
    }

    #[test]
    fn test_successful_submission_resets_form() {
        let mut form = UploadForm::new(AssetType::EventLog);
        form.select_file(SlotKind::EventLog, TestFile("events.csv")).unwrap();
        form.update_column_mapping(complete_mapping(), true).unwrap();
        form.submit().unwrap();

        form.finish_submission(true);
        assert_eq!(form.asset_type(), AssetType::EventLog);
        assert!(!form.slot(SlotKind::EventLog).is_filled());
        assert!(!form.mapping_filled_in());
        assert_eq!(form.column_mapping(), &ColumnMapping::default());
    }

    #[test]
    fn test_compute_readiness_is_pure() {
        let all = |_: SlotKind| true;
        let none = |_: SlotKind| false;
        assert!(compute_readiness(AssetType::SimulationModel, all, false, false));
        assert!(!compute_readiness(AssetType::SimulationModel, all, false, true));
        assert!(!compute_readiness(AssetType::EventLog, all, false, false));
        assert!(compute_readiness(AssetType::EventLog, all, true, false));
        assert!(!compute_readiness(AssetType::ProcessModel, none, true, false));
    }
}
