//! # Cycle and Durability Model
//!
//! Converts operating hours and rotational speed into stress-cycle counts
//! and derives the durability (life) coefficient K_HL with the
//! material-specific caps of the method.

use serde::{Deserialize, Serialize};

use crate::catalog::{HeatType, LoadType, Material};
use crate::errors::{GearError, GearResult};

/// Cumulative and equivalent stress-cycle counts over the service life.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleCounts {
    /// Equivalent number of stress cycles N_HE
    pub n_he: f64,
    /// Total number of loading cycles N_Σ
    pub n_sum: f64,
}

/// Compute the stress-cycle counts for a loading regime.
///
/// Under constant loading every cycle counts equally:
/// `N_Σ = N_HE = 60 · t · n`. Stepped loading needs an equivalence
/// integration the engine does not implement; it is rejected, never
/// approximated.
pub fn stress_cycles(
    load_type: LoadType,
    service_hours: f64,
    rpm: f64,
) -> GearResult<CycleCounts> {
    match load_type {
        LoadType::Constant => {
            let n_sum = 60.0 * service_hours * rpm;
            Ok(CycleCounts { n_he: n_sum, n_sum })
        }
        LoadType::Stepped => Err(GearError::unimplemented("stepped loading")),
    }
}

/// Durability coefficient together with the cycle counts it was derived
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurabilityFactor {
    /// Equivalent number of stress cycles N_HE
    pub n_he: f64,
    /// Total number of loading cycles N_Σ
    pub n_sum: f64,
    /// Durability (life) coefficient K_HL
    pub k_hl: f64,
}

/// Compute the durability coefficient K_HL.
///
/// Base value `K_HL = (N_H_0 / N_HE)^(1/6)`; an absent base cycle count
/// (non-metallic rows of table 6.5) forces the coefficient to 1. The
/// caps apply in precedence order, first match wins:
///
/// 1. steel, volumetric-hardening family: at most 2.6
/// 2. steel, surface-hardening family: at most 1.8
/// 3. cast iron: clamped to [1.0, 1.4]
/// 4. textolite or polyamide: exactly 1
/// 5. N_HE beyond the base cycle count: exactly 1
/// 6. otherwise the uncapped base value
pub fn durability_factor(
    n_h_0: Option<f64>,
    load_type: LoadType,
    service_hours: f64,
    rpm: f64,
    material: Material,
    heat_type: HeatType,
) -> GearResult<DurabilityFactor> {
    let counts = stress_cycles(load_type, service_hours, rpm)?;

    let base = match n_h_0 {
        Some(n0) => (n0 / counts.n_he).powf(1.0 / 6.0),
        None => 1.0,
    };

    let k_hl = if material == Material::Steel && heat_type.is_volumetric_hardening() {
        base.min(2.6)
    } else if material == Material::Steel && heat_type.is_surface_hardening() {
        base.min(1.8)
    } else if material == Material::CastIron {
        base.clamp(1.0, 1.4)
    } else if matches!(material, Material::Textolite | Material::PolyamideCaprolon) {
        1.0
    } else if n_h_0.map_or(true, |n0| counts.n_he > n0) {
        1.0
    } else {
        base
    };

    Ok(DurabilityFactor {
        n_he: counts.n_he,
        n_sum: counts.n_sum,
        k_hl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_loading_cycles() {
        let counts = stress_cycles(LoadType::Constant, 10_000.0, 500.0).unwrap();
        assert_eq!(counts.n_sum, 3.0e8);
        assert_eq!(counts.n_he, 3.0e8);
    }

    #[test]
    fn test_stepped_loading_rejected() {
        let result = stress_cycles(LoadType::Stepped, 10_000.0, 500.0);
        assert!(matches!(result, Err(GearError::Unimplemented { .. })));
    }

    #[test]
    fn test_base_value_monotonic_in_cycles() {
        // Uncapped region: normalized steel, N_HE below N_H_0
        let n_h_0 = Some(1.0e7);
        let mut last = f64::INFINITY;
        for hours in [10.0, 50.0, 100.0, 500.0, 1000.0] {
            let factor = durability_factor(
                n_h_0,
                LoadType::Constant,
                hours,
                100.0,
                Material::Steel,
                HeatType::Normalization,
            )
            .unwrap();
            assert!(factor.k_hl <= last);
            last = factor.k_hl;
        }
    }

    #[test]
    fn test_volumetric_hardening_cap() {
        // Tiny N_HE drives the base value far above 2.6
        let factor = durability_factor(
            Some(2.5e7),
            LoadType::Constant,
            1.0,
            1.0,
            Material::Steel,
            HeatType::QuenchHighTemper,
        )
        .unwrap();
        assert_eq!(factor.k_hl, 2.6);
    }

    #[test]
    fn test_surface_hardening_cap() {
        let factor = durability_factor(
            Some(6.0e7),
            LoadType::Constant,
            1.0,
            1.0,
            Material::Steel,
            HeatType::SurfaceInductionQuench,
        )
        .unwrap();
        assert_eq!(factor.k_hl, 1.8);
    }

    #[test]
    fn test_surface_cap_leaves_small_values_alone() {
        // N_HE far beyond N_H_0: base below 1 survives under the 1.8 cap,
        // the long-life rule does not apply to the hardening families
        let factor = durability_factor(
            Some(6.0e7),
            LoadType::Constant,
            10_000.0,
            1000.0,
            Material::Steel,
            HeatType::SurfaceInductionQuench,
        )
        .unwrap();
        let expected = (6.0e7_f64 / 6.0e8).powf(1.0 / 6.0);
        assert!((factor.k_hl - expected).abs() < 1e-12);
        assert!(factor.k_hl < 1.0);
    }

    #[test]
    fn test_cast_iron_clamp() {
        // Lower end: huge N_HE would push the base value below 1
        let low = durability_factor(
            Some(1.0e7),
            LoadType::Constant,
            50_000.0,
            1000.0,
            Material::CastIron,
            HeatType::None,
        )
        .unwrap();
        assert_eq!(low.k_hl, 1.0);

        // Upper end: tiny N_HE would push it far above 1.4
        let high = durability_factor(
            Some(1.0e7),
            LoadType::Constant,
            1.0,
            1.0,
            Material::CastIron,
            HeatType::None,
        )
        .unwrap();
        assert_eq!(high.k_hl, 1.4);
    }

    #[test]
    fn test_non_metallic_forced_to_one() {
        for material in [Material::Textolite, Material::PolyamideCaprolon] {
            let factor = durability_factor(
                None,
                LoadType::Constant,
                10_000.0,
                500.0,
                material,
                HeatType::None,
            )
            .unwrap();
            assert_eq!(factor.k_hl, 1.0);
        }
    }

    #[test]
    fn test_long_life_forces_one() {
        // Improved steel, N_HE = 3e8 > N_H_0 = 1.5e7: neither hardening
        // family applies, so the long-life rule wins
        let factor = durability_factor(
            Some(1.5e7),
            LoadType::Constant,
            10_000.0,
            500.0,
            Material::Steel,
            HeatType::Improvement,
        )
        .unwrap();
        assert_eq!(factor.n_he, 3.0e8);
        assert_eq!(factor.n_sum, 3.0e8);
        assert_eq!(factor.k_hl, 1.0);
    }

    #[test]
    fn test_short_life_keeps_base_value() {
        // Improved steel, N_HE below N_H_0: the uncapped base survives
        let factor = durability_factor(
            Some(1.5e7),
            LoadType::Constant,
            100.0,
            500.0,
            Material::Steel,
            HeatType::Improvement,
        )
        .unwrap();
        let expected = (1.5e7_f64 / 3.0e6).powf(1.0 / 6.0);
        assert!((factor.k_hl - expected).abs() < 1e-12);
        assert!(factor.k_hl > 1.0);
    }
}
