//! Auxiliary Coefficient K_d (Table 6.4)
//!
//! K_d folds the elastic and geometric constants of the design-diameter
//! formula into one number per material pairing. The table covers
//! straight-tooth details only.

use crate::catalog::{DetailType, MaterialCombination};
use crate::errors::{GearError, GearResult};

/// Look up the auxiliary coefficient for a detail type and material
/// combination.
///
/// Any detail type other than straight-tooth is an unsupported-input
/// error; the seven combinations are fully tabulated.
pub fn lookup_k_d(
    detail_type: DetailType,
    material_combination: MaterialCombination,
) -> GearResult<f64> {
    if detail_type != DetailType::StraightTooth {
        return Err(GearError::unsupported_detail_type(
            detail_type.display_name(),
        ));
    }

    let k_d = match material_combination {
        MaterialCombination::SteelSteel => 770.0,
        MaterialCombination::SteelCastIron => 700.0,
        MaterialCombination::SteelBronze => 680.0,
        MaterialCombination::CastIronCastIron => 645.0,
        MaterialCombination::TextoliteSteel => 310.0,
        MaterialCombination::FiberboardSteel => 360.0,
        MaterialCombination::PolyamideSteel => 240.0,
    };
    Ok(k_d)
}
