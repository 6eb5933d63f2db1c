//! # Domain Catalog
//!
//! Closed enumerations for every selection the design method tabulates:
//! materials, brands, heat treatments, gear locations, shaft rigidity,
//! load types and the discrete rim-width ratios. The display names are the
//! literals of the Russian design standard the tables come from; JSON
//! serialization uses the same literals so payloads read like the method.
//!
//! Keeping these closed means an out-of-catalog value is a parse failure
//! at the boundary, never a silent default inside the engine.

use serde::{Deserialize, Serialize};

/// Gear detail material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "сталь")]
    Steel,
    #[serde(rename = "чугун")]
    CastIron,
    #[serde(rename = "текстолит")]
    Textolite,
    #[serde(rename = "ДСП")]
    Fiberboard,
    #[serde(rename = "полиамид-капралон")]
    PolyamideCaprolon,
}

impl Material {
    /// All materials for UI selection
    pub const ALL: [Material; 5] = [
        Material::Steel,
        Material::CastIron,
        Material::Textolite,
        Material::Fiberboard,
        Material::PolyamideCaprolon,
    ];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Steel => "сталь",
            Material::CastIron => "чугун",
            Material::Textolite => "текстолит",
            Material::Fiberboard => "ДСП",
            Material::PolyamideCaprolon => "полиамид-капралон",
        }
    }

    /// Non-metallic materials get fixed coefficients in several tables:
    /// K_Hβ is 1 for any combination containing one, and K_HL is forced
    /// to 1 for textolite and polyamide.
    pub fn is_non_metallic(&self) -> bool {
        matches!(
            self,
            Material::Textolite | Material::Fiberboard | Material::PolyamideCaprolon
        )
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Material brand (grade designation within a material)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialBrand {
    /// No brand (materials the table lists without one)
    #[serde(rename = "<ничего>")]
    None,
    #[serde(rename = "45")]
    Steel45,
    #[serde(rename = "50Г")]
    Steel50G,
    #[serde(rename = "40Х")]
    Steel40Kh,
    #[serde(rename = "40ХН")]
    Steel40KhN,
    #[serde(rename = "20Х и 20ХФ")]
    Steel20Kh20KhF,
    #[serde(rename = "12ХН3А")]
    Steel12KhN3A,
    #[serde(rename = "18ХГТ")]
    Steel18KhGT,
    #[serde(rename = "20Х и 40Х")]
    Steel20Kh40Kh,
    #[serde(rename = "30ХГТ")]
    Steel30KhGT,
    #[serde(rename = "40ХФА")]
    Steel40KhFA,
    #[serde(rename = "СЧ 30-52")]
    GreyIron30_52,
    #[serde(rename = "ВЧ 30-2")]
    DuctileIron30_2,
    #[serde(rename = "40ХЛ-40ГЛ")]
    CastSteel40KhL40GL,
    #[serde(rename = "ПТ и ПТК")]
    TextolitePtPtk,
    #[serde(rename = "Б и В")]
    FiberboardBV,
}

impl MaterialBrand {
    /// All brands for UI selection
    pub const ALL: [MaterialBrand; 16] = [
        MaterialBrand::None,
        MaterialBrand::Steel45,
        MaterialBrand::Steel50G,
        MaterialBrand::Steel40Kh,
        MaterialBrand::Steel40KhN,
        MaterialBrand::Steel20Kh20KhF,
        MaterialBrand::Steel12KhN3A,
        MaterialBrand::Steel18KhGT,
        MaterialBrand::Steel20Kh40Kh,
        MaterialBrand::Steel30KhGT,
        MaterialBrand::Steel40KhFA,
        MaterialBrand::GreyIron30_52,
        MaterialBrand::DuctileIron30_2,
        MaterialBrand::CastSteel40KhL40GL,
        MaterialBrand::TextolitePtPtk,
        MaterialBrand::FiberboardBV,
    ];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialBrand::None => "<ничего>",
            MaterialBrand::Steel45 => "45",
            MaterialBrand::Steel50G => "50Г",
            MaterialBrand::Steel40Kh => "40Х",
            MaterialBrand::Steel40KhN => "40ХН",
            MaterialBrand::Steel20Kh20KhF => "20Х и 20ХФ",
            MaterialBrand::Steel12KhN3A => "12ХН3А",
            MaterialBrand::Steel18KhGT => "18ХГТ",
            MaterialBrand::Steel20Kh40Kh => "20Х и 40Х",
            MaterialBrand::Steel30KhGT => "30ХГТ",
            MaterialBrand::Steel40KhFA => "40ХФА",
            MaterialBrand::GreyIron30_52 => "СЧ 30-52",
            MaterialBrand::DuctileIron30_2 => "ВЧ 30-2",
            MaterialBrand::CastSteel40KhL40GL => "40ХЛ-40ГЛ",
            MaterialBrand::TextolitePtPtk => "ПТ и ПТК",
            MaterialBrand::FiberboardBV => "Б и В",
        }
    }
}

impl std::fmt::Display for MaterialBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Heat treatment applied to the detail material.
///
/// The durability caps of the method apply per hardening *family*, not per
/// literal label: both quenching treatments belong to a hardening family,
/// split by whether only the surface is hardened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatType {
    /// No heat treatment (cast irons, non-metallic materials)
    #[serde(rename = "<ничего>")]
    None,
    #[serde(rename = "Улучшение")]
    Improvement,
    #[serde(rename = "Закалка ТВЧ поверхностная с охватом дна впадины")]
    SurfaceInductionQuench,
    #[serde(rename = "Нормализация")]
    Normalization,
    #[serde(rename = "Закалка с высоким отпуском")]
    QuenchHighTemper,
}

impl HeatType {
    /// All heat treatments for UI selection
    pub const ALL: [HeatType; 5] = [
        HeatType::None,
        HeatType::Improvement,
        HeatType::SurfaceInductionQuench,
        HeatType::Normalization,
        HeatType::QuenchHighTemper,
    ];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            HeatType::None => "<ничего>",
            HeatType::Improvement => "Улучшение",
            HeatType::SurfaceInductionQuench => {
                "Закалка ТВЧ поверхностная с охватом дна впадины"
            }
            HeatType::Normalization => "Нормализация",
            HeatType::QuenchHighTemper => "Закалка с высоким отпуском",
        }
    }

    /// Volumetric (through) hardening family: quenching treatments that
    /// harden the whole section. Caps K_HL at 2.6 for steel.
    pub fn is_volumetric_hardening(&self) -> bool {
        matches!(self, HeatType::QuenchHighTemper)
    }

    /// Surface hardening family: quenching limited to the tooth surface.
    /// Caps K_HL at 1.8 for steel.
    pub fn is_surface_hardening(&self) -> bool {
        matches!(self, HeatType::SurfaceInductionQuench)
    }
}

impl std::fmt::Display for HeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The exactly seven material pairings Table 6.4 tabulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialCombination {
    #[serde(rename = "сталь - сталь")]
    SteelSteel,
    #[serde(rename = "сталь - бронза")]
    SteelBronze,
    #[serde(rename = "сталь - чугун")]
    SteelCastIron,
    #[serde(rename = "чугун - чугун")]
    CastIronCastIron,
    #[serde(rename = "текстолит - сталь")]
    TextoliteSteel,
    #[serde(rename = "ДСП - сталь")]
    FiberboardSteel,
    #[serde(rename = "полиамид-капралон - сталь")]
    PolyamideSteel,
}

impl MaterialCombination {
    /// All combinations for UI selection
    pub const ALL: [MaterialCombination; 7] = [
        MaterialCombination::SteelSteel,
        MaterialCombination::SteelBronze,
        MaterialCombination::SteelCastIron,
        MaterialCombination::CastIronCastIron,
        MaterialCombination::TextoliteSteel,
        MaterialCombination::FiberboardSteel,
        MaterialCombination::PolyamideSteel,
    ];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialCombination::SteelSteel => "сталь - сталь",
            MaterialCombination::SteelBronze => "сталь - бронза",
            MaterialCombination::SteelCastIron => "сталь - чугун",
            MaterialCombination::CastIronCastIron => "чугун - чугун",
            MaterialCombination::TextoliteSteel => "текстолит - сталь",
            MaterialCombination::FiberboardSteel => "ДСП - сталь",
            MaterialCombination::PolyamideSteel => "полиамид-капралон - сталь",
        }
    }

    /// The (driving, driven) materials this combination declares.
    ///
    /// Bronze is a tabulated wheel material for K_d but has no rows in
    /// table 6.5, so "сталь - бронза" has no enumerable component pair.
    pub fn components(&self) -> Option<(Material, Material)> {
        match self {
            MaterialCombination::SteelSteel => Some((Material::Steel, Material::Steel)),
            MaterialCombination::SteelBronze => None,
            MaterialCombination::SteelCastIron => Some((Material::Steel, Material::CastIron)),
            MaterialCombination::CastIronCastIron => {
                Some((Material::CastIron, Material::CastIron))
            }
            MaterialCombination::TextoliteSteel => Some((Material::Textolite, Material::Steel)),
            MaterialCombination::FiberboardSteel => {
                Some((Material::Fiberboard, Material::Steel))
            }
            MaterialCombination::PolyamideSteel => {
                Some((Material::PolyamideCaprolon, Material::Steel))
            }
        }
    }

    /// Check the declared combination against the two detail materials.
    pub fn matches(&self, driving: Material, driven: Material) -> bool {
        self.components() == Some((driving, driven))
    }

    /// True when either side of the pairing is a non-metallic material
    /// (triggers the fixed K_Hβ = 1 override).
    pub fn has_non_metallic(&self) -> bool {
        match self.components() {
            Some((a, b)) => a.is_non_metallic() || b.is_non_metallic(),
            None => false,
        }
    }
}

impl std::fmt::Display for MaterialCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pinion position relative to the shaft supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GearLocation {
    #[serde(rename = "Симметричное расположение шестерни относительно опор")]
    Symmetric,
    #[serde(rename = "Шестерня расположена несимметрично относительно опор")]
    Asymmetric,
    #[serde(rename = "Консольное расположение одного из колёс")]
    Cantilevered,
}

impl GearLocation {
    /// All gear locations for UI selection
    pub const ALL: [GearLocation; 3] = [
        GearLocation::Symmetric,
        GearLocation::Asymmetric,
        GearLocation::Cantilevered,
    ];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            GearLocation::Symmetric => {
                "Симметричное расположение шестерни относительно опор"
            }
            GearLocation::Asymmetric => {
                "Шестерня расположена несимметрично относительно опор"
            }
            GearLocation::Cantilevered => "Консольное расположение одного из колёс",
        }
    }
}

impl std::fmt::Display for GearLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Shaft rigidity, only consulted for the asymmetric gear location.
///
/// Unspecified is a legal selection everywhere except the asymmetric
/// branch of table 6.3, where rigidity picks the row family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaftRigidity {
    #[serde(rename = "<ничего>")]
    Unspecified,
    #[serde(rename = "весьма жёсткий вал")]
    Stiff,
    #[serde(rename = "менее жёсткий вал")]
    LessStiff,
}

impl ShaftRigidity {
    /// All rigidity selections for UI selection
    pub const ALL: [ShaftRigidity; 3] = [
        ShaftRigidity::Unspecified,
        ShaftRigidity::Stiff,
        ShaftRigidity::LessStiff,
    ];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            ShaftRigidity::Unspecified => "<ничего>",
            ShaftRigidity::Stiff => "весьма жёсткий вал",
            ShaftRigidity::LessStiff => "менее жёсткий вал",
        }
    }
}

impl std::fmt::Display for ShaftRigidity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Loading regime over the service life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    #[serde(rename = "Постоянная")]
    Constant,
    /// Tabulated by the method but not implemented by this engine
    #[serde(rename = "Ступенчатая")]
    Stepped,
}

impl LoadType {
    /// All load types for UI selection
    pub const ALL: [LoadType; 2] = [LoadType::Constant, LoadType::Stepped];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadType::Constant => "Постоянная",
            LoadType::Stepped => "Ступенчатая",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Load direction kind, carried on subassembly records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadKind {
    #[serde(rename = "Нереверсивная")]
    NonReversing,
    #[serde(rename = "Реверсивная")]
    Reversing,
}

impl LoadKind {
    /// All load kinds for UI selection
    pub const ALL: [LoadKind; 2] = [LoadKind::NonReversing, LoadKind::Reversing];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::NonReversing => "Нереверсивная",
            LoadKind::Reversing => "Реверсивная",
        }
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tooth geometry category. Only straight teeth are tabulated; the enum
/// stays closed so future categories become explicit variants rather than
/// free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailType {
    #[serde(rename = "Прямозубое")]
    StraightTooth,
}

impl DetailType {
    /// All detail types for UI selection
    pub const ALL: [DetailType; 1] = [DetailType::StraightTooth];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            DetailType::StraightTooth => "Прямозубое",
        }
    }
}

impl std::fmt::Display for DetailType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Role of a detail in the transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailPurpose {
    #[serde(rename = "Ведущее")]
    Driving,
    #[serde(rename = "Ведомое")]
    Driven,
}

impl DetailPurpose {
    /// All purposes for UI selection
    pub const ALL: [DetailPurpose; 2] = [DetailPurpose::Driving, DetailPurpose::Driven];

    /// Display name (literal of the source method)
    pub fn display_name(&self) -> &'static str {
        match self {
            DetailPurpose::Driving => "Ведущее",
            DetailPurpose::Driven => "Ведомое",
        }
    }
}

impl std::fmt::Display for DetailPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Relative rim-width ratio ψ_bd, restricted to the eight grid columns of
/// table 6.3. Because the set is closed, the column index (ψ_bd / 0.2) − 1
/// always lands on an integer in 0..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PsiBd {
    #[serde(rename = "0.2")]
    R0_2,
    #[serde(rename = "0.4")]
    R0_4,
    #[serde(rename = "0.6")]
    R0_6,
    #[serde(rename = "0.8")]
    R0_8,
    #[serde(rename = "1.0")]
    R1_0,
    #[serde(rename = "1.2")]
    R1_2,
    #[serde(rename = "1.4")]
    R1_4,
    #[serde(rename = "1.6")]
    R1_6,
}

impl PsiBd {
    /// All rim-width ratios, in grid order
    pub const ALL: [PsiBd; 8] = [
        PsiBd::R0_2,
        PsiBd::R0_4,
        PsiBd::R0_6,
        PsiBd::R0_8,
        PsiBd::R1_0,
        PsiBd::R1_2,
        PsiBd::R1_4,
        PsiBd::R1_6,
    ];

    /// Numeric value of the ratio
    pub fn value(&self) -> f64 {
        match self {
            PsiBd::R0_2 => 0.2,
            PsiBd::R0_4 => 0.4,
            PsiBd::R0_6 => 0.6,
            PsiBd::R0_8 => 0.8,
            PsiBd::R1_0 => 1.0,
            PsiBd::R1_2 => 1.2,
            PsiBd::R1_4 => 1.4,
            PsiBd::R1_6 => 1.6,
        }
    }

    /// Column index in the table 6.3 grid (0..8)
    pub fn index(&self) -> usize {
        match self {
            PsiBd::R0_2 => 0,
            PsiBd::R0_4 => 1,
            PsiBd::R0_6 => 2,
            PsiBd::R0_8 => 3,
            PsiBd::R1_0 => 4,
            PsiBd::R1_2 => 5,
            PsiBd::R1_4 => 6,
            PsiBd::R1_6 => 7,
        }
    }

    /// Map a numeric value back to its grid column, if it is one of the
    /// eight tabulated ratios.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| (p.value() - value).abs() < 1e-9)
    }
}

impl std::fmt::Display for PsiBd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The three-part key of table 6.5: what a detail is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub material: Material,
    pub material_brand: MaterialBrand,
    pub heat_type: HeatType,
}

impl MaterialSpec {
    pub fn new(material: Material, material_brand: MaterialBrand, heat_type: HeatType) -> Self {
        MaterialSpec {
            material,
            material_brand,
            heat_type,
        }
    }
}

impl std::fmt::Display for MaterialSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.material, self.material_brand, self.heat_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_serialization_uses_method_literals() {
        let json = serde_json::to_string(&Material::Steel).unwrap();
        assert_eq!(json, "\"сталь\"");
        let parsed: Material = serde_json::from_str("\"полиамид-капралон\"").unwrap();
        assert_eq!(parsed, Material::PolyamideCaprolon);
    }

    #[test]
    fn test_non_metallic_materials() {
        assert!(Material::Textolite.is_non_metallic());
        assert!(Material::Fiberboard.is_non_metallic());
        assert!(Material::PolyamideCaprolon.is_non_metallic());
        assert!(!Material::Steel.is_non_metallic());
        assert!(!Material::CastIron.is_non_metallic());
    }

    #[test]
    fn test_hardening_families() {
        assert!(HeatType::QuenchHighTemper.is_volumetric_hardening());
        assert!(HeatType::SurfaceInductionQuench.is_surface_hardening());
        // Improvement is tempering, not a quench family member
        assert!(!HeatType::Improvement.is_volumetric_hardening());
        assert!(!HeatType::Improvement.is_surface_hardening());
        assert!(!HeatType::Normalization.is_volumetric_hardening());
    }

    #[test]
    fn test_combination_components() {
        assert_eq!(
            MaterialCombination::SteelCastIron.components(),
            Some((Material::Steel, Material::CastIron))
        );
        // Bronze is not an enumerable detail material
        assert_eq!(MaterialCombination::SteelBronze.components(), None);
    }

    #[test]
    fn test_combination_matches() {
        assert!(MaterialCombination::SteelSteel.matches(Material::Steel, Material::Steel));
        assert!(!MaterialCombination::SteelSteel.matches(Material::Steel, Material::CastIron));
        // Order matters: the driving material is named first
        assert!(!MaterialCombination::SteelCastIron.matches(Material::CastIron, Material::Steel));
        assert!(!MaterialCombination::SteelBronze.matches(Material::Steel, Material::Steel));
    }

    #[test]
    fn test_combination_non_metallic() {
        assert!(MaterialCombination::TextoliteSteel.has_non_metallic());
        assert!(MaterialCombination::FiberboardSteel.has_non_metallic());
        assert!(MaterialCombination::PolyamideSteel.has_non_metallic());
        assert!(!MaterialCombination::SteelSteel.has_non_metallic());
        assert!(!MaterialCombination::CastIronCastIron.has_non_metallic());
    }

    #[test]
    fn test_psi_bd_grid_index() {
        for (i, psi) in PsiBd::ALL.iter().enumerate() {
            assert_eq!(psi.index(), i);
            // columns step by 0.2, so index = (psi/0.2) - 1
            assert_eq!(((psi.value() / 0.2) - 1.0).round() as usize, i);
        }
    }

    #[test]
    fn test_psi_bd_from_value() {
        assert_eq!(PsiBd::from_value(0.4), Some(PsiBd::R0_4));
        assert_eq!(PsiBd::from_value(1.6), Some(PsiBd::R1_6));
        assert_eq!(PsiBd::from_value(0.5), None);
    }

    #[test]
    fn test_combination_display_roundtrip() {
        for combo in MaterialCombination::ALL {
            let json = serde_json::to_string(&combo).unwrap();
            assert_eq!(json, format!("\"{}\"", combo.display_name()));
            let parsed: MaterialCombination = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, combo);
        }
    }

    #[test]
    fn test_material_spec_display() {
        let spec = MaterialSpec::new(
            Material::Steel,
            MaterialBrand::Steel45,
            HeatType::Improvement,
        );
        assert_eq!(spec.to_string(), "сталь / 45 / Улучшение");
    }
}
