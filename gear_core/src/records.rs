//! # Computation Records
//!
//! The `Registry` struct is the root container for persisted computation
//! results. Registries serialize to `.gcd` (gear contact design) files as
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Registry
//! ├── meta: RegistryMetadata (version, engineer, job info, timestamps)
//! └── assemblies: HashMap<Uuid, AssemblyRecord>
//!     └── subassembly: SubassemblyRecord (the transmission, coefficients)
//!         └── details: Vec<DetailRecord> (pinion and wheel, stresses)
//! ```
//!
//! One computation maps to one assembly: a gearbox whose single
//! subassembly is the cylindrical transmission and whose details are the
//! two gears. The record stores both the selections that drove the
//! computation and every derived value, so a stored run can be reviewed
//! without re-executing it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{
    DetailPurpose, DetailType, GearLocation, LoadKind, LoadType, MaterialCombination, MaterialSpec,
    PsiBd, ShaftRigidity,
};
use crate::transmission::{DetailStress, TransmissionInput, TransmissionResult};

/// Current schema version for .gcd files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Assembly name for recorded computations
pub const ASSEMBLY_NAME: &str = "Редуктор";

/// Assembly purpose for recorded computations
pub const ASSEMBLY_PURPOSE: &str = "Специальное";

/// Subassembly name for recorded computations
pub const SUBASSEMBLY_NAME: &str = "Передача";

/// Subassembly kind for recorded computations
pub const SUBASSEMBLY_KIND: &str = "Цилиндрическая";

/// Root registry container.
///
/// This is the top-level struct that gets serialized to `.gcd` files.
/// Assemblies are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// Registry metadata (version, engineer, job info)
    pub meta: RegistryMetadata,

    /// All recorded assemblies, keyed by UUID
    pub assemblies: HashMap<Uuid, AssemblyRecord>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Registry {
            meta: RegistryMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                created: now,
                modified: now,
            },
            assemblies: HashMap::new(),
        }
    }

    /// Record one completed computation as a new assembly.
    ///
    /// Returns the UUID assigned to the assembly. Nothing is written for
    /// a failed computation; the caller only reaches this with a
    /// successful result in hand.
    pub fn record(&mut self, input: &TransmissionInput, result: &TransmissionResult) -> Uuid {
        let id = Uuid::new_v4();
        self.assemblies
            .insert(id, AssemblyRecord::from_computation(input, result));
        self.touch();
        id
    }

    /// Remove a recorded assembly by UUID.
    ///
    /// Returns the removed record if it existed.
    pub fn remove(&mut self, id: &Uuid) -> Option<AssemblyRecord> {
        let record = self.assemblies.remove(id);
        if record.is_some() {
            self.touch();
        }
        record
    }

    /// Get a recorded assembly by UUID.
    pub fn get(&self, id: &Uuid) -> Option<&AssemblyRecord> {
        self.assemblies.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn assembly_count(&self) -> usize {
        self.assemblies.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new("", "")
    }
}

/// Registry metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// When the registry was created
    pub created: DateTime<Utc>,

    /// When the registry was last modified
    pub modified: DateTime<Utc>,
}

/// One recorded gearbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyRecord {
    pub name: String,
    pub purpose: String,
    pub subassembly: SubassemblyRecord,
}

impl AssemblyRecord {
    fn from_computation(input: &TransmissionInput, result: &TransmissionResult) -> Self {
        AssemblyRecord {
            name: ASSEMBLY_NAME.to_string(),
            purpose: ASSEMBLY_PURPOSE.to_string(),
            subassembly: SubassemblyRecord::from_computation(input, result),
        }
    }
}

/// The transmission inside a recorded gearbox: the shared selections and
/// the transmission-level coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubassemblyRecord {
    pub id: Uuid,
    pub name: String,
    pub kind: String,

    /// Gear ratio u
    pub u: f64,
    pub shaft_rigidity: ShaftRigidity,
    pub load_type: LoadType,
    /// Reversing or non-reversing duty; not an input of the
    /// contact-strength computation, kept for the record schema
    pub load_kind: Option<LoadKind>,
    pub material_combination: MaterialCombination,

    /// Auxiliary coefficient (table 6.4)
    #[serde(rename = "K_d")]
    pub k_d: f64,
    /// Load-distribution coefficient (table 6.3)
    #[serde(rename = "K_Hbeta")]
    pub k_hbeta: f64,
    /// Governing allowable contact stress, MPa
    #[serde(rename = "sigma_HP")]
    pub sigma_hp: f64,

    /// The two gears, driving first
    pub details: Vec<DetailRecord>,
}

impl SubassemblyRecord {
    fn from_computation(input: &TransmissionInput, result: &TransmissionResult) -> Self {
        SubassemblyRecord {
            id: Uuid::new_v4(),
            name: SUBASSEMBLY_NAME.to_string(),
            kind: SUBASSEMBLY_KIND.to_string(),
            u: input.gear_ratio,
            shaft_rigidity: input.shaft_rigidity,
            load_type: input.load_type,
            load_kind: None,
            material_combination: input.material_combination,
            k_d: result.k_d,
            k_hbeta: result.k_hbeta,
            sigma_hp: result.sigma_hp,
            details: vec![
                DetailRecord::pinion(input, result),
                DetailRecord::wheel(input, result),
            ],
        }
    }
}

/// One recorded gear.
///
/// Pinion-only fields (ψ_bd, torque, location, design diameter) are
/// `None` on the driven detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub detail_type: DetailType,
    pub detail_purpose: DetailPurpose,
    #[serde(flatten)]
    pub material: MaterialSpec,
    pub load_type: LoadType,

    #[serde(flatten)]
    pub stress: DetailStress,

    pub psi_bd: Option<PsiBd>,
    /// Torque, N·m
    #[serde(rename = "T")]
    pub torque: Option<f64>,
    pub gear_location: Option<GearLocation>,
    /// Design pitch diameter, mm
    pub d_w1: Option<f64>,
}

impl DetailRecord {
    fn pinion(input: &TransmissionInput, result: &TransmissionResult) -> Self {
        DetailRecord {
            detail_type: input.pinion.detail_type,
            detail_purpose: input.pinion.detail_purpose,
            material: input.pinion.material,
            load_type: input.pinion.load_type,
            stress: result.pinion.stress,
            psi_bd: Some(input.pinion.psi_bd),
            torque: Some(input.pinion.torque),
            gear_location: Some(input.pinion.gear_location),
            d_w1: Some(result.pinion.d_w1),
        }
    }

    fn wheel(input: &TransmissionInput, result: &TransmissionResult) -> Self {
        DetailRecord {
            detail_type: input.wheel.detail_type,
            detail_purpose: input.wheel.detail_purpose,
            material: input.wheel.material,
            load_type: input.wheel.load_type,
            stress: result.wheel,
            psi_bd: None,
            torque: None,
            gear_location: None,
            d_w1: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{HeatType, Material, MaterialBrand};
    use crate::transmission::{execute, PinionInput, WheelInput};

    fn sample_computation() -> (TransmissionInput, TransmissionResult) {
        let material = MaterialSpec::new(
            Material::Steel,
            MaterialBrand::Steel45,
            HeatType::Improvement,
        );
        let input = TransmissionInput {
            material_combination: MaterialCombination::SteelSteel,
            shaft_rigidity: ShaftRigidity::Unspecified,
            gear_location: GearLocation::Symmetric,
            service_hours: 10_000.0,
            rpm: 500.0,
            gear_ratio: 4.0,
            load_type: LoadType::Constant,
            pinion: PinionInput {
                detail_type: DetailType::StraightTooth,
                detail_purpose: DetailPurpose::Driving,
                material,
                load_type: LoadType::Constant,
                psi_bd: PsiBd::R0_4,
                torque: 500.0,
                gear_location: GearLocation::Symmetric,
            },
            wheel: WheelInput {
                detail_type: DetailType::StraightTooth,
                detail_purpose: DetailPurpose::Driven,
                material,
                load_type: LoadType::Constant,
            },
        };
        let result = execute(&input).unwrap();
        (input, result)
    }

    #[test]
    fn test_registry_creation() {
        let registry = Registry::new("И. Петров", "25-001");
        assert_eq!(registry.meta.engineer, "И. Петров");
        assert_eq!(registry.meta.job_id, "25-001");
        assert_eq!(registry.meta.version, SCHEMA_VERSION);
        assert_eq!(registry.assembly_count(), 0);
    }

    #[test]
    fn test_record_builds_full_hierarchy() {
        let (input, result) = sample_computation();
        let mut registry = Registry::new("Engineer", "25-001");

        let id = registry.record(&input, &result);
        assert_eq!(registry.assembly_count(), 1);

        let assembly = registry.get(&id).unwrap();
        assert_eq!(assembly.name, "Редуктор");
        assert_eq!(assembly.purpose, "Специальное");

        let sub = &assembly.subassembly;
        assert_eq!(sub.name, "Передача");
        assert_eq!(sub.kind, "Цилиндрическая");
        assert_eq!(sub.u, 4.0);
        assert_eq!(sub.k_d, 770.0);
        assert_eq!(sub.k_hbeta, 1.00);
        assert_eq!(sub.sigma_hp, 600.0);
        assert_eq!(sub.details.len(), 2);
    }

    #[test]
    fn test_pinion_and_wheel_records() {
        let (input, result) = sample_computation();
        let mut registry = Registry::new("Engineer", "25-001");
        let id = registry.record(&input, &result);

        let details = &registry.get(&id).unwrap().subassembly.details;
        let pinion = &details[0];
        let wheel = &details[1];

        assert_eq!(pinion.detail_purpose, DetailPurpose::Driving);
        assert_eq!(pinion.psi_bd, Some(PsiBd::R0_4));
        assert_eq!(pinion.torque, Some(500.0));
        assert_eq!(pinion.gear_location, Some(GearLocation::Symmetric));
        assert!(pinion.d_w1.is_some());

        assert_eq!(wheel.detail_purpose, DetailPurpose::Driven);
        assert_eq!(wheel.psi_bd, None);
        assert_eq!(wheel.torque, None);
        assert_eq!(wheel.gear_location, None);
        assert_eq!(wheel.d_w1, None);
        assert_eq!(wheel.stress.sigma_hp, 600.0);
    }

    #[test]
    fn test_remove_record() {
        let (input, result) = sample_computation();
        let mut registry = Registry::new("Engineer", "25-001");
        let id = registry.record(&input, &result);

        let removed = registry.remove(&id);
        assert!(removed.is_some());
        assert_eq!(registry.assembly_count(), 0);
        assert!(registry.remove(&id).is_none());
    }

    #[test]
    fn test_registry_serialization() {
        let (input, result) = sample_computation();
        let mut registry = Registry::new("И. Петров", "25-042");
        registry.record(&input, &result);

        let json = serde_json::to_string_pretty(&registry).unwrap();
        assert!(json.contains("И. Петров"));
        assert!(json.contains("Редуктор"));
        assert!(json.contains("Цилиндрическая"));
        assert!(json.contains("\"сталь\""));

        let roundtrip: Registry = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "И. Петров");
        assert_eq!(roundtrip.assembly_count(), 1);
    }
}
