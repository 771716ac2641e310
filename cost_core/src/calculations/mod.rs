//! # Calculations
//!
//! Calculation types. Each submodule follows the same shape: an input
//! struct with a `validate()` method, a free `calculate()` function, and a
//! rich result struct, all JSON-serializable.

pub mod member_cost;

pub use member_cost::{calculate, CalculationResult, MemberCostInput};
