//! Asset types and the per-type upload contract.
//!
//! Every asset type maps to exactly one [`AssetContract`], which lists the
//! file slots the type needs and whether an event-log column mapping must
//! accompany the upload. All per-type behavior of the upload form is read
//! from this table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Asset Type
// =============================================================================

/// Kind of asset a project can hold.
///
/// Serialized with the backend's snake_case names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    EventLog,
    ProcessModel,
    SimulationModel,
}

impl AssetType {
    /// All asset types, in the order the upload dialog offers them.
    pub const ALL: [AssetType; 3] = [
        AssetType::EventLog,
        AssetType::ProcessModel,
        AssetType::SimulationModel,
    ];

    /// Wire name sent in the `assetType` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::EventLog => "event_log",
            AssetType::ProcessModel => "process_model",
            AssetType::SimulationModel => "simulation_model",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::EventLog => "Event Log",
            AssetType::ProcessModel => "Process Model",
            AssetType::SimulationModel => "Simulation Model",
        }
    }

    /// Upload contract for this asset type.
    pub fn contract(&self) -> &'static AssetContract {
        match self {
            AssetType::EventLog => &EVENT_LOG_CONTRACT,
            AssetType::ProcessModel => &PROCESS_MODEL_CONTRACT,
            AssetType::SimulationModel => &SIMULATION_MODEL_CONTRACT,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown asset type: {}", s))
    }
}

// =============================================================================
// Slots
// =============================================================================

/// A file slot of the upload form.
///
/// Each slot backs one multipart file field. A simulation model upload
/// fills two slots (process model + simulation parameters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    EventLog,
    ProcessModel,
    SimulationModel,
}

impl SlotKind {
    pub const ALL: [SlotKind; 3] = [
        SlotKind::EventLog,
        SlotKind::ProcessModel,
        SlotKind::SimulationModel,
    ];

    /// Multipart field name carrying this slot's file.
    pub fn field_name(&self) -> &'static str {
        match self {
            SlotKind::EventLog => "eventLogFile",
            SlotKind::ProcessModel => "processModelFile",
            SlotKind::SimulationModel => "simulationModelFile",
        }
    }

    /// Value for the file input's `accept` attribute.
    ///
    /// Browsers only match the last suffix, hence `.gz` rather than `.csv.gz`.
    pub fn accept(&self) -> &'static str {
        match self {
            SlotKind::EventLog => ".csv, .gz",
            SlotKind::ProcessModel => ".bpmn",
            SlotKind::SimulationModel => ".json",
        }
    }

    /// Title shown on the drop area.
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::EventLog => "Event Log",
            SlotKind::ProcessModel => "Process Model",
            SlotKind::SimulationModel => "Simulation Parameters",
        }
    }

    /// DOM id of the hidden file input.
    pub fn input_id(&self) -> &'static str {
        match self {
            SlotKind::EventLog => "eventLogInput",
            SlotKind::ProcessModel => "processModelInput",
            SlotKind::SimulationModel => "simulationModelInput",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            SlotKind::EventLog => 0,
            SlotKind::ProcessModel => 1,
            SlotKind::SimulationModel => 2,
        }
    }
}

// =============================================================================
// Contract
// =============================================================================

/// What an asset type needs before it can be uploaded.
#[derive(Debug, PartialEq, Eq)]
pub struct AssetContract {
    /// Slots that must all be filled, in display order.
    pub slots: &'static [SlotKind],
    /// Whether a completed column mapping is required.
    pub requires_column_mapping: bool,
}

impl AssetContract {
    /// Whether `slot` takes part in this upload.
    pub fn uses(&self, slot: SlotKind) -> bool {
        self.slots.contains(&slot)
    }
}

static EVENT_LOG_CONTRACT: AssetContract = AssetContract {
    slots: &[SlotKind::EventLog],
    requires_column_mapping: true,
};

static PROCESS_MODEL_CONTRACT: AssetContract = AssetContract {
    slots: &[SlotKind::ProcessModel],
    requires_column_mapping: false,
};

static SIMULATION_MODEL_CONTRACT: AssetContract = AssetContract {
    slots: &[SlotKind::ProcessModel, SlotKind::SimulationModel],
    requires_column_mapping: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_slots() {
        assert_eq!(AssetType::EventLog.contract().slots, &[SlotKind::EventLog]);
        assert_eq!(AssetType::ProcessModel.contract().slots, &[SlotKind::ProcessModel]);
        assert_eq!(
            AssetType::SimulationModel.contract().slots,
            &[SlotKind::ProcessModel, SlotKind::SimulationModel]
        );
        assert!(AssetType::EventLog.contract().requires_column_mapping);
        assert!(!AssetType::SimulationModel.contract().requires_column_mapping);
    }

    #[test]
    fn test_accepted_extensions() {
        assert_eq!(SlotKind::EventLog.accept(), ".csv, .gz");
        assert_eq!(SlotKind::ProcessModel.accept(), ".bpmn");
        assert_eq!(SlotKind::SimulationModel.accept(), ".json");
    }

    #[test]
    fn test_multipart_field_names() {
        assert_eq!(SlotKind::EventLog.field_name(), "eventLogFile");
        assert_eq!(SlotKind::ProcessModel.field_name(), "processModelFile");
        assert_eq!(SlotKind::SimulationModel.field_name(), "simulationModelFile");
    }

    #[test]
    fn test_asset_type_wire_names() {
        assert_eq!("process_model".parse::<AssetType>(), Ok(AssetType::ProcessModel));
        assert!("bpmn".parse::<AssetType>().is_err());

        let json = serde_json::to_string(&AssetType::SimulationModel).unwrap();
        assert_eq!(json, "\"simulation_model\"");
    }
}
