//! # Transmission Solver
//!
//! Top-level orchestration of the contact-strength computation: validates
//! the declared material combination against the two details, resolves
//! the K_Hβ and K_d coefficients, derives each detail's allowable contact
//! stress, takes the governing minimum and computes the pinion design
//! diameter.
//!
//! The whole pipeline is a pure function of its input; identical inputs
//! produce bit-identical results and a failed call leaves nothing behind.

use serde::{Deserialize, Serialize};

use crate::catalog::{
    DetailPurpose, DetailType, GearLocation, LoadType, MaterialCombination, MaterialSpec, PsiBd,
    ShaftRigidity,
};
use crate::cycles::durability_factor;
use crate::errors::{GearError, GearResult};
use crate::tables::{lookup_k_d, lookup_k_hbeta, lookup_material};

/// Hardness probe for the K_Hβ lookup. The method resolves K_Hβ before
/// the detail hardness is known and fixes the band with this value.
pub const K_HBETA_PROBE_HB: u32 = 349;

/// Input for the driving detail (the pinion).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinionInput {
    pub detail_type: DetailType,
    pub detail_purpose: DetailPurpose,
    #[serde(flatten)]
    pub material: MaterialSpec,
    pub load_type: LoadType,
    /// Relative rim-width ratio ψ_bd
    pub psi_bd: PsiBd,
    /// Torque on the pinion T₁, N·m
    #[serde(rename = "T")]
    pub torque: f64,
    pub gear_location: GearLocation,
}

/// Input for the driven detail (the wheel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelInput {
    pub detail_type: DetailType,
    pub detail_purpose: DetailPurpose,
    #[serde(flatten)]
    pub material: MaterialSpec,
    pub load_type: LoadType,
}

/// Complete input of one contact-strength computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransmissionInput {
    pub material_combination: MaterialCombination,
    pub shaft_rigidity: ShaftRigidity,
    pub gear_location: GearLocation,
    /// Service life, hours
    #[serde(rename = "t_hours")]
    pub service_hours: f64,
    /// Rotational speed, rpm
    #[serde(rename = "n")]
    pub rpm: f64,
    /// Gear ratio u
    #[serde(rename = "u")]
    pub gear_ratio: f64,
    pub load_type: LoadType,
    #[serde(rename = "detail_1")]
    pub pinion: PinionInput,
    #[serde(rename = "detail_2")]
    pub wheel: WheelInput,
}

impl TransmissionInput {
    /// Validate the input before any table work.
    ///
    /// The declared material combination must name exactly the two detail
    /// materials, driving side first; the scalar parameters must be
    /// positive; the detail purposes must match their slots.
    pub fn validate(&self) -> GearResult<()> {
        if !self
            .material_combination
            .matches(self.pinion.material.material, self.wheel.material.material)
        {
            return Err(GearError::inconsistent_input(
                "material_combination",
                self.material_combination.to_string(),
                format!(
                    "{} - {}",
                    self.pinion.material.material, self.wheel.material.material
                ),
            ));
        }
        if self.pinion.gear_location != self.gear_location {
            return Err(GearError::inconsistent_input(
                "gear_location",
                self.gear_location.to_string(),
                self.pinion.gear_location.to_string(),
            ));
        }
        if self.pinion.detail_purpose != DetailPurpose::Driving {
            return Err(GearError::invalid_input(
                "detail_1.detail_purpose",
                self.pinion.detail_purpose.to_string(),
                "The first detail must be the driving one",
            ));
        }
        if self.wheel.detail_purpose != DetailPurpose::Driven {
            return Err(GearError::invalid_input(
                "detail_2.detail_purpose",
                self.wheel.detail_purpose.to_string(),
                "The second detail must be the driven one",
            ));
        }
        if self.service_hours <= 0.0 {
            return Err(GearError::invalid_input(
                "t_hours",
                self.service_hours.to_string(),
                "Service life must be positive",
            ));
        }
        if self.rpm <= 0.0 {
            return Err(GearError::invalid_input(
                "n",
                self.rpm.to_string(),
                "Rotational speed must be positive",
            ));
        }
        if self.gear_ratio <= 0.0 {
            return Err(GearError::invalid_input(
                "u",
                self.gear_ratio.to_string(),
                "Gear ratio must be positive",
            ));
        }
        if self.pinion.torque <= 0.0 {
            return Err(GearError::invalid_input(
                "detail_1.T",
                self.pinion.torque.to_string(),
                "Torque must be positive",
            ));
        }
        Ok(())
    }
}

/// Derived allowable-stress data for one detail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailStress {
    /// Tooth surface hardness (Brinell)
    #[serde(rename = "HB")]
    pub hb: u32,
    /// Allowable contact stress at the base cycle count, MPa
    #[serde(rename = "sigma_ap_HP")]
    pub sigma_ap_hp: f64,
    /// Base stress-cycle count; absent for non-metallic materials
    #[serde(rename = "N_H_0")]
    pub n_h_0: Option<f64>,
    /// Equivalent number of stress cycles
    #[serde(rename = "N_HE")]
    pub n_he: f64,
    /// Total number of loading cycles
    #[serde(rename = "N_Sum")]
    pub n_sum: f64,
    /// Durability coefficient
    #[serde(rename = "K_HL")]
    pub k_hl: f64,
    /// Allowable contact stress for this detail, MPa
    #[serde(rename = "sigma_HP")]
    pub sigma_hp: f64,
}

/// Resolve one detail's allowable contact stress:
/// `σ_HP = σ'_HP / K_HL`.
///
/// Composes the table 6.5 lookup with the durability model and adds no
/// failure modes of its own.
pub fn resolve_detail(
    service_hours: f64,
    rpm: f64,
    load_type: LoadType,
    material: &MaterialSpec,
) -> GearResult<DetailStress> {
    let record = lookup_material(material)?;
    let durability = durability_factor(
        record.n_h_0,
        load_type,
        service_hours,
        rpm,
        material.material,
        material.heat_type,
    )?;

    Ok(DetailStress {
        hb: record.hb,
        sigma_ap_hp: record.sigma_ap_hp,
        n_h_0: record.n_h_0,
        n_he: durability.n_he,
        n_sum: durability.n_sum,
        k_hl: durability.k_hl,
        sigma_hp: record.sigma_ap_hp / durability.k_hl,
    })
}

/// Stress data of the driving detail, including its design diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinionStress {
    #[serde(flatten)]
    pub stress: DetailStress,
    /// Design pitch diameter of the pinion, mm
    pub d_w1: f64,
}

/// Result of one contact-strength computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransmissionResult {
    #[serde(rename = "detail_1")]
    pub pinion: PinionStress,
    #[serde(rename = "detail_2")]
    pub wheel: DetailStress,
    /// Auxiliary coefficient (table 6.4)
    #[serde(rename = "K_d")]
    pub k_d: f64,
    /// Load-distribution coefficient (table 6.3)
    #[serde(rename = "K_Hbeta")]
    pub k_hbeta: f64,
    /// Governing allowable contact stress: the weaker detail, MPa
    #[serde(rename = "sigma_HP")]
    pub sigma_hp: f64,
}

/// Run the full contact-strength computation.
pub fn execute(input: &TransmissionInput) -> GearResult<TransmissionResult> {
    input.validate()?;

    let k_hbeta = lookup_k_hbeta(
        input.pinion.psi_bd,
        input.gear_location,
        input.shaft_rigidity,
        input.material_combination,
        K_HBETA_PROBE_HB,
    )?;
    let k_d = lookup_k_d(input.pinion.detail_type, input.material_combination)?;

    let pinion_stress = resolve_detail(
        input.service_hours,
        input.rpm,
        input.pinion.load_type,
        &input.pinion.material,
    )?;
    let wheel_stress = resolve_detail(
        input.service_hours,
        input.rpm,
        input.wheel.load_type,
        &input.wheel.material,
    )?;

    // The weaker detail sets the design limit
    let sigma_hp = pinion_stress.sigma_hp.min(wheel_stress.sigma_hp);

    let u = input.gear_ratio;
    let psi_bd = input.pinion.psi_bd.value();
    let d_w1 = k_d
        * (input.pinion.torque * k_hbeta * (u + 1.0) / (u * psi_bd * sigma_hp.powi(2))).cbrt();

    Ok(TransmissionResult {
        pinion: PinionStress {
            stress: pinion_stress,
            d_w1,
        },
        wheel: wheel_stress,
        k_d,
        k_hbeta,
        sigma_hp,
    })
}
