//! # cost_core - Steel Member Cost Calculation Engine
//!
//! `cost_core` computes material weight and tax-inclusive price for
//! structural steel members (shafts, plates, angles, channels, joists) from
//! their dimensions and a cost per kg. All inputs and outputs are
//! JSON-serializable, so the same API serves interactive callers and
//! stored order rows alike.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Closed member set**: Member types are a tagged enum with one volume
//!   formula per variant; an unknown type fails to parse instead of
//!   silently pricing at zero
//!
//! ## Quick Start
//!
//! ```rust
//! use cost_core::calculations::member_cost::{calculate, MemberCostInput};
//! use cost_core::materials::MaterialConstants;
//! use cost_core::members::{Dimension, DimensionSet, MemberType};
//!
//! let constants = MaterialConstants::default();
//! let input = MemberCostInput {
//!     member_type: MemberType::Plate,
//!     dimensions: DimensionSet::new()
//!         .with(Dimension::Length, 1000.0)
//!         .with(Dimension::Breadth, 500.0)
//!         .with(Dimension::Thickness, 10.0),
//!     cost_per_kg: constants.default_cost_per_kg(MemberType::Plate),
//! };
//!
//! let result = calculate(&input, &constants).unwrap();
//! assert!((result.weight_kg.0 - 39.25).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`members`] - Member types, dimension sets, and volume geometry
//! - [`calculations`] - The weight/cost calculation
//! - [`materials`] - Density, tax rate, and the default rate card
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod members;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationResult, MemberCostInput};
pub use errors::{CostError, CostResult};
pub use materials::MaterialConstants;
pub use members::{Dimension, DimensionSet, MemberGeometry, MemberType};
