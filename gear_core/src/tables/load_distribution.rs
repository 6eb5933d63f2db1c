//! Load-Distribution Coefficient K_Hβ (Table 6.3)
//!
//! K_Hβ accounts for uneven load distribution across the rim width. The
//! table is a grid over the eight ψ_bd columns with row families selected
//! by the pinion location (the asymmetric family splits further by shaft
//! rigidity) and the hardness band (HB above or below 350).
//!
//! Extreme (ψ_bd, location) pairings are not tabulated; those cells are
//! `None` and selecting one is a hard failure, never zero. Combinations
//! with a non-metallic material bypass the grid entirely: K_Hβ = 1.

use crate::catalog::{GearLocation, MaterialCombination, PsiBd, ShaftRigidity};
use crate::errors::{GearError, GearResult};

/// Table name used in error context
const TABLE: &str = "table 6.3";

/// Hardness threshold splitting each row family into two sub-rows
const HARDNESS_BAND_HB: u32 = 350;

type GridRow = [Option<f64>; 8];

const SYMMETRIC_OVER_350: GridRow = [
    Some(1.00),
    Some(1.01),
    Some(1.03),
    Some(1.06),
    Some(1.10),
    Some(1.12),
    Some(1.15),
    Some(1.20),
];
const SYMMETRIC_UNDER_350: GridRow = [
    Some(1.00),
    Some(1.00),
    Some(1.01),
    Some(1.03),
    Some(1.04),
    Some(1.05),
    Some(1.07),
    Some(1.08),
];
const ASYMMETRIC_STIFF_OVER_350: GridRow = [
    Some(1.01),
    Some(1.05),
    Some(1.09),
    Some(1.14),
    Some(1.18),
    Some(1.25),
    Some(1.32),
    Some(1.40),
];
const ASYMMETRIC_STIFF_UNDER_350: GridRow = [
    Some(1.00),
    Some(1.02),
    Some(1.04),
    Some(1.06),
    Some(1.08),
    Some(1.10),
    Some(1.13),
    Some(1.16),
];
const ASYMMETRIC_LESS_STIFF_OVER_350: GridRow = [
    Some(1.06),
    Some(1.12),
    Some(1.20),
    Some(1.27),
    Some(1.37),
    Some(1.50),
    Some(1.60),
    None,
];
const ASYMMETRIC_LESS_STIFF_UNDER_350: GridRow = [
    Some(1.02),
    Some(1.05),
    Some(1.08),
    Some(1.12),
    Some(1.15),
    Some(1.18),
    Some(1.23),
    Some(1.28),
];
const CANTILEVERED_OVER_350: GridRow = [
    Some(1.15),
    Some(1.35),
    Some(1.60),
    Some(1.85),
    None,
    None,
    None,
    None,
];
const CANTILEVERED_UNDER_350: GridRow = [
    Some(1.07),
    Some(1.15),
    Some(1.24),
    Some(1.35),
    None,
    None,
    None,
    None,
];

/// Select the grid row for a location, rigidity and hardness band.
fn grid_row(
    gear_location: GearLocation,
    shaft_rigidity: ShaftRigidity,
    hb: u32,
) -> GearResult<&'static GridRow> {
    let over = hb > HARDNESS_BAND_HB;
    match gear_location {
        GearLocation::Symmetric => Ok(if over {
            &SYMMETRIC_OVER_350
        } else {
            &SYMMETRIC_UNDER_350
        }),
        GearLocation::Asymmetric => match shaft_rigidity {
            ShaftRigidity::Stiff => Ok(if over {
                &ASYMMETRIC_STIFF_OVER_350
            } else {
                &ASYMMETRIC_STIFF_UNDER_350
            }),
            ShaftRigidity::LessStiff => Ok(if over {
                &ASYMMETRIC_LESS_STIFF_OVER_350
            } else {
                &ASYMMETRIC_LESS_STIFF_UNDER_350
            }),
            ShaftRigidity::Unspecified => Err(GearError::invalid_selection(
                TABLE,
                "shaft rigidity must be specified for an asymmetric gear location",
            )),
        },
        GearLocation::Cantilevered => Ok(if over {
            &CANTILEVERED_OVER_350
        } else {
            &CANTILEVERED_UNDER_350
        }),
    }
}

/// Look up the load-distribution coefficient K_Hβ.
///
/// `hb` is the hardness used for band selection; the transmission solver
/// passes a fixed probe value because K_Hβ is resolved before the true
/// hardness is known.
pub fn lookup_k_hbeta(
    psi_bd: PsiBd,
    gear_location: GearLocation,
    shaft_rigidity: ShaftRigidity,
    material_combination: MaterialCombination,
    hb: u32,
) -> GearResult<f64> {
    if material_combination.has_non_metallic() {
        return Ok(1.0);
    }

    let row = grid_row(gear_location, shaft_rigidity, hb)?;
    row[psi_bd.index()].ok_or_else(|| {
        GearError::invalid_selection(
            TABLE,
            format!(
                "no tabulated K_Hbeta for psi_bd = {} with '{}'",
                psi_bd, gear_location
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_rows() {
        let k = lookup_k_hbeta(
            PsiBd::R0_4,
            GearLocation::Symmetric,
            ShaftRigidity::Unspecified,
            MaterialCombination::SteelSteel,
            260,
        )
        .unwrap();
        assert_eq!(k, 1.00);

        let k = lookup_k_hbeta(
            PsiBd::R1_6,
            GearLocation::Symmetric,
            ShaftRigidity::Unspecified,
            MaterialCombination::SteelSteel,
            400,
        )
        .unwrap();
        assert_eq!(k, 1.20);
    }

    #[test]
    fn test_asymmetric_splits_by_rigidity() {
        let stiff = lookup_k_hbeta(
            PsiBd::R0_8,
            GearLocation::Asymmetric,
            ShaftRigidity::Stiff,
            MaterialCombination::SteelSteel,
            300,
        )
        .unwrap();
        let less_stiff = lookup_k_hbeta(
            PsiBd::R0_8,
            GearLocation::Asymmetric,
            ShaftRigidity::LessStiff,
            MaterialCombination::SteelSteel,
            300,
        )
        .unwrap();
        assert_eq!(stiff, 1.06);
        assert_eq!(less_stiff, 1.12);
        assert!(less_stiff > stiff);
    }

    #[test]
    fn test_asymmetric_requires_rigidity() {
        let result = lookup_k_hbeta(
            PsiBd::R0_4,
            GearLocation::Asymmetric,
            ShaftRigidity::Unspecified,
            MaterialCombination::SteelSteel,
            300,
        );
        assert!(matches!(result, Err(GearError::InvalidSelection { .. })));
    }

    #[test]
    fn test_hardness_band_boundary() {
        // 350 itself belongs to the lower band; 351 to the upper
        let under = lookup_k_hbeta(
            PsiBd::R1_0,
            GearLocation::Symmetric,
            ShaftRigidity::Unspecified,
            MaterialCombination::SteelSteel,
            350,
        )
        .unwrap();
        let over = lookup_k_hbeta(
            PsiBd::R1_0,
            GearLocation::Symmetric,
            ShaftRigidity::Unspecified,
            MaterialCombination::SteelSteel,
            351,
        )
        .unwrap();
        assert_eq!(under, 1.04);
        assert_eq!(over, 1.10);
    }

    #[test]
    fn test_empty_cells_are_hard_failures() {
        // Cantilevered location is only tabulated up to psi_bd = 0.8
        let result = lookup_k_hbeta(
            PsiBd::R1_6,
            GearLocation::Cantilevered,
            ShaftRigidity::Unspecified,
            MaterialCombination::SteelSteel,
            400,
        );
        assert!(matches!(result, Err(GearError::InvalidSelection { .. })));

        let result = lookup_k_hbeta(
            PsiBd::R1_6,
            GearLocation::Asymmetric,
            ShaftRigidity::LessStiff,
            MaterialCombination::SteelSteel,
            400,
        );
        assert!(matches!(result, Err(GearError::InvalidSelection { .. })));
    }

    #[test]
    fn test_non_metallic_override() {
        // Any combination with a non-metallic side short-circuits to 1,
        // even where the grid cell would be empty
        for combo in [
            MaterialCombination::TextoliteSteel,
            MaterialCombination::FiberboardSteel,
            MaterialCombination::PolyamideSteel,
        ] {
            let k = lookup_k_hbeta(
                PsiBd::R1_6,
                GearLocation::Cantilevered,
                ShaftRigidity::Unspecified,
                combo,
                500,
            )
            .unwrap();
            assert_eq!(k, 1.0);
        }
    }
}
