//! # gear_core - Contact-Strength Design Engine
//!
//! `gear_core` computes the design diameter of a cylindrical gear
//! transmission from the contact-strength condition, following the
//! tabulated design method (tables 6.3, 6.4 and 6.5). All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the solver is a pure function of its input
//! - **JSON-First**: all types implement Serialize/Deserialize, field
//!   names follow the method's notation (`K_Hbeta`, `sigma_HP`, ...)
//! - **Rich Errors**: structured error types, not just strings
//! - **Fail loudly**: absent table cells and inconsistent selections are
//!   hard errors, never silent defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use gear_core::catalog::{
//!     DetailPurpose, DetailType, GearLocation, HeatType, LoadType, Material,
//!     MaterialBrand, MaterialCombination, MaterialSpec, PsiBd, ShaftRigidity,
//! };
//! use gear_core::transmission::{execute, PinionInput, TransmissionInput, WheelInput};
//!
//! let material = MaterialSpec::new(
//!     Material::Steel,
//!     MaterialBrand::Steel45,
//!     HeatType::Improvement,
//! );
//! let input = TransmissionInput {
//!     material_combination: MaterialCombination::SteelSteel,
//!     shaft_rigidity: ShaftRigidity::Unspecified,
//!     gear_location: GearLocation::Symmetric,
//!     service_hours: 10_000.0,
//!     rpm: 500.0,
//!     gear_ratio: 4.0,
//!     load_type: LoadType::Constant,
//!     pinion: PinionInput {
//!         detail_type: DetailType::StraightTooth,
//!         detail_purpose: DetailPurpose::Driving,
//!         material,
//!         load_type: LoadType::Constant,
//!         psi_bd: PsiBd::R0_4,
//!         torque: 500.0,
//!         gear_location: GearLocation::Symmetric,
//!     },
//!     wheel: WheelInput {
//!         detail_type: DetailType::StraightTooth,
//!         detail_purpose: DetailPurpose::Driven,
//!         material,
//!         load_type: LoadType::Constant,
//!     },
//! };
//!
//! let result = execute(&input).unwrap();
//! assert!((result.pinion.d_w1 - 125.6).abs() < 0.1);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Enumerated materials, brands, heat treatments and selections
//! - [`tables`] - The reference tables (6.3, 6.4, 6.5)
//! - [`cycles`] - Stress-cycle counts and the durability coefficient
//! - [`transmission`] - The top-level solver
//! - [`records`] - Persisted computation records
//! - [`store`] - Registry file operations with atomic saves and locking
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod cycles;
pub mod errors;
pub mod records;
pub mod store;
pub mod tables;
pub mod transmission;

// Re-export commonly used types at crate root for convenience
pub use errors::{GearError, GearResult};
pub use records::{Registry, RegistryMetadata};
pub use store::{load_registry, save_registry, FileLock};
pub use transmission::{execute, TransmissionInput, TransmissionResult};
