//! # Reference Tables
//!
//! Hand-curated static data of the contact-strength method:
//!
//! - [`material_data`] - Table 6.5: material/brand/heat treatment to
//!   surface hardness, base allowable contact stress and base cycle count
//! - [`auxiliary_factor`] - Table 6.4: auxiliary coefficient K_d per
//!   detail type and material combination
//! - [`load_distribution`] - Table 6.3: load-distribution coefficient
//!   K_Hβ over the ψ_bd grid
//!
//! All lookups are exact and pure; absent keys and empty cells are typed
//! errors, never defaults.

pub mod auxiliary_factor;
pub mod load_distribution;
pub mod material_data;

pub use auxiliary_factor::lookup_k_d;
pub use load_distribution::lookup_k_hbeta;
pub use material_data::{lookup_material, MaterialRecord};
