//! Material Data (Table 6.5)
//!
//! Baseline contact-strength data per material, brand and heat treatment:
//! tooth surface hardness HB, the allowable contact stress σ'_HP at the
//! base cycle count, and the base cycle count N_H_0 itself.
//!
//! The key is the exact 3-tuple; there is no fallback between brands or
//! heat treatments. Non-metallic rows (textolite, fiberboard, polyamide)
//! have no base cycle count: their durability coefficient is fixed at 1,
//! so `n_h_0` is `None` there rather than a sentinel number.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::catalog::{HeatType, Material, MaterialBrand, MaterialSpec};
use crate::errors::{GearError, GearResult};

/// Table name used in error context
const TABLE: &str = "table 6.5";

/// One row of table 6.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialRecord {
    /// Tooth surface hardness (Brinell)
    pub hb: u32,
    /// Allowable contact stress at the base cycle count, MPa
    pub sigma_ap_hp: f64,
    /// Base stress-cycle count; absent for non-metallic materials
    pub n_h_0: Option<f64>,
}

impl MaterialRecord {
    /// The base cycle count, for contexts that require a numeric value.
    ///
    /// The stress resolver treats an absent N_H_0 as "durability
    /// coefficient forced to 1"; anything else must fail loudly.
    pub fn n_h_0_required(&self, key: &MaterialSpec) -> GearResult<f64> {
        self.n_h_0
            .ok_or_else(|| GearError::missing_value(TABLE, key.to_string(), "N_H_0"))
    }
}

type Row = (Material, MaterialBrand, HeatType, u32, f64, Option<f64>);

/// Curated rows. Steel 45 and 40Х carry the values of the source method;
/// the remaining enumerated brands are filled in from the same table so
/// every catalog brand resolves.
const ROWS: &[Row] = &[
    // Improved / normalized steels (HB <= 350)
    (
        Material::Steel,
        MaterialBrand::Steel45,
        HeatType::Improvement,
        250,
        600.0,
        Some(1.5e7),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel45,
        HeatType::SurfaceInductionQuench,
        250,
        800.0,
        Some(6.0e7),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel40Kh,
        HeatType::Normalization,
        220,
        550.0,
        Some(1.0e7),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel40Kh,
        HeatType::Improvement,
        270,
        630.0,
        Some(1.8e7),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel50G,
        HeatType::Improvement,
        260,
        620.0,
        Some(1.6e7),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel40KhN,
        HeatType::Improvement,
        280,
        650.0,
        Some(2.0e7),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel40KhN,
        HeatType::QuenchHighTemper,
        300,
        700.0,
        Some(2.5e7),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel40KhFA,
        HeatType::QuenchHighTemper,
        310,
        720.0,
        Some(2.6e7),
    ),
    // Surface-hardened alloy steels (HB > 350)
    (
        Material::Steel,
        MaterialBrand::Steel20Kh20KhF,
        HeatType::SurfaceInductionQuench,
        450,
        950.0,
        Some(1.2e8),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel12KhN3A,
        HeatType::SurfaceInductionQuench,
        400,
        900.0,
        Some(1.2e8),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel18KhGT,
        HeatType::SurfaceInductionQuench,
        520,
        1050.0,
        Some(1.2e8),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel20Kh40Kh,
        HeatType::SurfaceInductionQuench,
        480,
        1000.0,
        Some(1.2e8),
    ),
    (
        Material::Steel,
        MaterialBrand::Steel30KhGT,
        HeatType::SurfaceInductionQuench,
        470,
        980.0,
        Some(1.2e8),
    ),
    (
        Material::Steel,
        MaterialBrand::CastSteel40KhL40GL,
        HeatType::Normalization,
        200,
        500.0,
        Some(1.0e7),
    ),
    // Cast irons, untreated
    (
        Material::CastIron,
        MaterialBrand::GreyIron30_52,
        HeatType::None,
        260,
        560.0,
        Some(1.0e7),
    ),
    (
        Material::CastIron,
        MaterialBrand::DuctileIron30_2,
        HeatType::None,
        250,
        500.0,
        Some(1.0e7),
    ),
    // Non-metallic materials: no base cycle count
    (
        Material::Textolite,
        MaterialBrand::TextolitePtPtk,
        HeatType::None,
        35,
        55.0,
        None,
    ),
    (
        Material::Fiberboard,
        MaterialBrand::FiberboardBV,
        HeatType::None,
        30,
        60.0,
        None,
    ),
    (
        Material::PolyamideCaprolon,
        MaterialBrand::None,
        HeatType::None,
        14,
        42.0,
        None,
    ),
];

static DATA: Lazy<HashMap<MaterialSpec, MaterialRecord>> = Lazy::new(|| {
    ROWS.iter()
        .map(|&(material, brand, heat, hb, sigma_ap_hp, n_h_0)| {
            (
                MaterialSpec::new(material, brand, heat),
                MaterialRecord {
                    hb,
                    sigma_ap_hp,
                    n_h_0,
                },
            )
        })
        .collect()
});

/// Look up the table 6.5 row for a material spec.
///
/// Exact 3-tuple key; an unmatched combination is invalid input, not a
/// silent default.
pub fn lookup_material(spec: &MaterialSpec) -> GearResult<MaterialRecord> {
    DATA.get(spec)
        .copied()
        .ok_or_else(|| GearError::not_found(TABLE, spec.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel_45_improved() -> MaterialSpec {
        MaterialSpec::new(
            Material::Steel,
            MaterialBrand::Steel45,
            HeatType::Improvement,
        )
    }

    #[test]
    fn test_lookup_returns_exact_row() {
        let record = lookup_material(&steel_45_improved()).unwrap();
        assert_eq!(record.hb, 250);
        assert_eq!(record.sigma_ap_hp, 600.0);
        assert_eq!(record.n_h_0, Some(1.5e7));
    }

    #[test]
    fn test_lookup_distinguishes_heat_type() {
        let quenched = lookup_material(&MaterialSpec::new(
            Material::Steel,
            MaterialBrand::Steel45,
            HeatType::SurfaceInductionQuench,
        ))
        .unwrap();
        assert_eq!(quenched.sigma_ap_hp, 800.0);
        assert_eq!(quenched.n_h_0, Some(6.0e7));
    }

    #[test]
    fn test_all_rows_resolve() {
        for &(material, brand, heat, hb, sigma, n0) in ROWS {
            let record = lookup_material(&MaterialSpec::new(material, brand, heat)).unwrap();
            assert_eq!(record.hb, hb);
            assert_eq!(record.sigma_ap_hp, sigma);
            assert_eq!(record.n_h_0, n0);
        }
    }

    #[test]
    fn test_absent_key_is_not_found() {
        // Steel 45 is not tabulated as normalized
        let result = lookup_material(&MaterialSpec::new(
            Material::Steel,
            MaterialBrand::Steel45,
            HeatType::Normalization,
        ));
        assert!(matches!(result, Err(GearError::NotFound { .. })));
    }

    #[test]
    fn test_non_metallic_rows_have_no_base_cycles() {
        let key = MaterialSpec::new(
            Material::Textolite,
            MaterialBrand::TextolitePtPtk,
            HeatType::None,
        );
        let record = lookup_material(&key).unwrap();
        assert_eq!(record.n_h_0, None);

        let result = record.n_h_0_required(&key);
        assert!(matches!(result, Err(GearError::MissingValue { .. })));
    }

    #[test]
    fn test_required_base_cycles_for_steel() {
        let key = steel_45_improved();
        let record = lookup_material(&key).unwrap();
        assert_eq!(record.n_h_0_required(&key).unwrap(), 1.5e7);
    }

    #[test]
    fn test_no_duplicate_keys() {
        assert_eq!(DATA.len(), ROWS.len());
    }
}
