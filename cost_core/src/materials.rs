//! # Material Constants
//!
//! Process-wide constants for mild steel pricing: density, tax rate, and the
//! default cost-per-kg table. Gathered into one immutable value that is
//! constructed once and passed explicitly to the calculator, so there is no
//! hidden global state to mutate or to diverge between call sites.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::materials::MaterialConstants;
//! use cost_core::members::MemberType;
//!
//! let constants = MaterialConstants::default();
//! assert_eq!(constants.density_kg_m3, 7850.0);
//! assert_eq!(constants.default_cost_per_kg(MemberType::Shaft), 70.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::members::MemberType;

/// Density of mild steel in kg/m³
pub const STEEL_DENSITY_KG_M3: f64 = 7850.0;

/// Tax rate applied to the base material cost (18% GST)
pub const TAX_RATE: f64 = 0.18;

/// Immutable pricing configuration for the calculator.
///
/// The defaults are the standard rate card; a caller with a different
/// supplier quote constructs its own value.
///
/// ## JSON Example
///
/// ```json
/// {
///   "density_kg_m3": 7850.0,
///   "tax_rate": 0.18,
///   "cost_per_kg": [
///     ["Shaft", 70.0],
///     ["Plate", 61.0]
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConstants {
    /// Material density in kg/m³
    pub density_kg_m3: f64,

    /// Tax multiplier applied on top of the base cost
    pub tax_rate: f64,

    /// Default rate card: cost per kg by member type
    pub cost_per_kg: Vec<(MemberType, f64)>,
}

impl MaterialConstants {
    /// Look up the default cost per kg for a member type.
    ///
    /// Falls back to 0.0 for a type missing from the rate card, matching a
    /// blank price field the user is expected to fill in.
    pub fn default_cost_per_kg(&self, member_type: MemberType) -> f64 {
        self.cost_per_kg
            .iter()
            .find(|(m, _)| *m == member_type)
            .map(|(_, cost)| *cost)
            .unwrap_or(0.0)
    }
}

impl Default for MaterialConstants {
    fn default() -> Self {
        MaterialConstants {
            density_kg_m3: STEEL_DENSITY_KG_M3,
            tax_rate: TAX_RATE,
            cost_per_kg: vec![
                (MemberType::Shaft, 70.0),
                (MemberType::Plate, 61.0),
                (MemberType::RoundPlate, 65.0),
                (MemberType::SquareAngle, 75.0),
                (MemberType::CChannel, 80.0),
                (MemberType::IJoist, 85.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_card_covers_all_members() {
        let constants = MaterialConstants::default();
        for member in MemberType::ALL {
            assert!(
                constants.default_cost_per_kg(member) > 0.0,
                "no default rate for {}",
                member
            );
        }
    }

    #[test]
    fn test_reference_rates() {
        let constants = MaterialConstants::default();
        assert_eq!(constants.default_cost_per_kg(MemberType::Plate), 61.0);
        assert_eq!(constants.default_cost_per_kg(MemberType::IJoist), 85.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let constants = MaterialConstants::default();
        let json = serde_json::to_string(&constants).unwrap();
        let roundtrip: MaterialConstants = serde_json::from_str(&json).unwrap();
        assert_eq!(constants, roundtrip);
    }
}
