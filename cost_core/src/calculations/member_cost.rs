//! # Member Cost Calculation
//!
//! Computes material weight and tax-inclusive price for a structural steel
//! member from its geometry and a cost per kg.
//!
//! The calculation is a stateless, side-effect-free transformation:
//!
//! 1. Convert each dimension mm→m and compute volume per the member type's
//!    closed-form formula (see [`crate::members::MemberGeometry`])
//! 2. weight = volume × density
//! 3. base cost = weight × cost per kg
//! 4. total cost = base cost × (1 + tax rate)
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::member_cost::{calculate, MemberCostInput};
//! use cost_core::materials::MaterialConstants;
//! use cost_core::members::{Dimension, DimensionSet, MemberType};
//!
//! let input = MemberCostInput {
//!     member_type: MemberType::Shaft,
//!     dimensions: DimensionSet::new()
//!         .with(Dimension::Diameter, 100.0)
//!         .with(Dimension::Length, 1000.0),
//!     cost_per_kg: 70.0,
//! };
//!
//! let result = calculate(&input, &MaterialConstants::default()).unwrap();
//! assert!((result.weight_kg.0 - 61.6539).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CostError, CostResult};
use crate::materials::MaterialConstants;
use crate::members::{DimensionSet, MemberGeometry, MemberType};
use crate::units::{CubicMeters, Kilograms};

/// Input parameters for a member cost quote.
///
/// ## JSON Example
///
/// ```json
/// {
///   "member_type": "Shaft",
///   "dimensions": { "Diameter": 100.0, "Length": 1000.0 },
///   "cost_per_kg": 70.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCostInput {
    /// Cross-section category being quoted
    pub member_type: MemberType,

    /// Named dimensions in millimeters; which ones are required depends
    /// on the member type
    pub dimensions: DimensionSet,

    /// Price per kilogram of material (currency per kg)
    pub cost_per_kg: f64,
}

impl MemberCostInput {
    /// Validate input parameters.
    ///
    /// Every dimension the member type requires must be present and
    /// positive, and the cost per kg must be a finite non-negative number.
    pub fn validate(&self) -> CostResult<()> {
        self.dimensions.validate(self.member_type)?;
        if !self.cost_per_kg.is_finite() || self.cost_per_kg < 0.0 {
            return Err(CostError::invalid_cost(
                self.cost_per_kg.to_string(),
                "Cost per kg must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Results from a member cost calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume_m3": 0.007854,
///   "weight_kg": 61.6539,
///   "base_cost": 4315.77,
///   "total_cost": 5092.61
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Material volume in m³
    pub volume_m3: CubicMeters,

    /// Material weight in kg (volume × density)
    pub weight_kg: Kilograms,

    /// Cost before tax (weight × cost per kg)
    pub base_cost: f64,

    /// Tax-inclusive price (base cost × (1 + tax rate))
    pub total_cost: f64,
}

/// Calculate weight and tax-inclusive cost for a member.
///
/// # Arguments
///
/// * `input` - Member type, dimensions in mm, and cost per kg
/// * `constants` - Density, tax rate and rate card to price against
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Volume, weight and costs, all finite and
///   non-negative
/// * `Err(CostError)` - If a required dimension is missing or non-positive,
///   or the cost per kg is invalid
pub fn calculate(
    input: &MemberCostInput,
    constants: &MaterialConstants,
) -> CostResult<CalculationResult> {
    input.validate()?;

    let geometry = MemberGeometry::from_dimensions(input.member_type, &input.dimensions)?;
    let volume = geometry.volume_m3();
    let weight = Kilograms(volume.0 * constants.density_kg_m3);
    let base_cost = weight.0 * input.cost_per_kg;
    let total_cost = base_cost * (1.0 + constants.tax_rate);

    Ok(CalculationResult {
        volume_m3: volume,
        weight_kg: weight,
        base_cost,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::members::Dimension;

    fn shaft_input() -> MemberCostInput {
        MemberCostInput {
            member_type: MemberType::Shaft,
            dimensions: DimensionSet::new()
                .with(Dimension::Diameter, 100.0)
                .with(Dimension::Length, 1000.0),
            cost_per_kg: 70.0,
        }
    }

    /// Consistent dimensions for any member type: thickness-like fields
    /// get a tenth of the base value so no cross-section check trips.
    fn dims_of(member_type: MemberType, value_mm: f64) -> DimensionSet {
        let mut dims = DimensionSet::new();
        for &dimension in member_type.required_dimensions() {
            let value = match dimension {
                Dimension::Thickness
                | Dimension::WebThickness
                | Dimension::FlangeThickness => value_mm / 10.0,
                _ => value_mm,
            };
            dims.insert(dimension, value);
        }
        dims
    }

    #[test]
    fn test_shaft_known_values() {
        // d=100mm, L=1000mm, 70/kg:
        // V = 3.1416 * 0.05^2 * 1.0 = 0.007854 m³
        // W = 0.007854 * 7850 = 61.6539 kg
        // base = 4315.773, total = base * 1.18 = 5092.61 (2 dp)
        let result = calculate(&shaft_input(), &MaterialConstants::default()).unwrap();
        assert!((result.weight_kg.0 - 61.6539).abs() < 1e-4);
        assert!((result.base_cost - 4315.773).abs() < 1e-3);
        assert!((result.total_cost - 5092.61).abs() < 0.005);
    }

    #[test]
    fn test_plate_known_values() {
        // 1000 x 500 x 10 mm: V = 0.005 m³, W = 39.25 kg
        let input = MemberCostInput {
            member_type: MemberType::Plate,
            dimensions: DimensionSet::new()
                .with(Dimension::Length, 1000.0)
                .with(Dimension::Breadth, 500.0)
                .with(Dimension::Thickness, 10.0),
            cost_per_kg: 61.0,
        };
        let result = calculate(&input, &MaterialConstants::default()).unwrap();
        assert!((result.weight_kg.0 - 39.25).abs() < 1e-9);
    }

    #[test]
    fn test_tax_invariant() {
        for member_type in MemberType::ALL {
            let input = MemberCostInput {
                member_type,
                dimensions: dims_of(member_type, 40.0),
                cost_per_kg: 72.5,
            };
            let result = calculate(&input, &MaterialConstants::default()).unwrap();
            assert_eq!(result.total_cost, result.base_cost * 1.18);
            assert!((result.base_cost - result.weight_kg.0 * 72.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_length_scaling_doubles_weight_and_cost() {
        for member_type in MemberType::ALL {
            // RoundPlate's axial dimension is Thickness, not Length
            let axial = if member_type == MemberType::RoundPlate {
                Dimension::Thickness
            } else {
                Dimension::Length
            };

            let mut dims = dims_of(member_type, 40.0);
            let base = calculate(
                &MemberCostInput {
                    member_type,
                    dimensions: dims.clone(),
                    cost_per_kg: 70.0,
                },
                &MaterialConstants::default(),
            )
            .unwrap();

            let axial_mm = dims.get(axial).unwrap().0;
            dims.insert(axial, 2.0 * axial_mm);
            let doubled = calculate(
                &MemberCostInput {
                    member_type,
                    dimensions: dims,
                    cost_per_kg: 70.0,
                },
                &MaterialConstants::default(),
            )
            .unwrap();

            assert!(
                (doubled.weight_kg.0 - 2.0 * base.weight_kg.0).abs() < 1e-9,
                "{} weight not linear",
                member_type
            );
            assert!(
                (doubled.total_cost - 2.0 * base.total_cost).abs() < 1e-6,
                "{} cost not linear",
                member_type
            );
        }
    }

    #[test]
    fn test_outputs_finite_and_non_negative() {
        for member_type in MemberType::ALL {
            let input = MemberCostInput {
                member_type,
                dimensions: dims_of(member_type, 25.0),
                cost_per_kg: 0.0,
            };
            let result = calculate(&input, &MaterialConstants::default()).unwrap();
            assert!(result.volume_m3.0.is_finite() && result.volume_m3.0 > 0.0);
            assert!(result.weight_kg.0.is_finite() && result.weight_kg.0 > 0.0);
            // Zero cost per kg is allowed and yields a zero price
            assert_eq!(result.base_cost, 0.0);
            assert_eq!(result.total_cost, 0.0);
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        for member_type in MemberType::ALL {
            let input = MemberCostInput {
                member_type,
                dimensions: dims_of(member_type, 0.0),
                cost_per_kg: 70.0,
            };
            let err = calculate(&input, &MaterialConstants::default()).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_DIMENSION");
        }
    }

    #[test]
    fn test_degenerate_square_angle_rejected() {
        // All-positive dimensions, but thickness swallows both legs; the
        // formula alone would quote a negative weight and cost.
        let input = MemberCostInput {
            member_type: MemberType::SquareAngle,
            dimensions: DimensionSet::new()
                .with(Dimension::Length, 1000.0)
                .with(Dimension::Leg1, 5.0)
                .with(Dimension::Leg2, 5.0)
                .with(Dimension::Thickness, 20.0),
            cost_per_kg: 70.0,
        };
        let err = calculate(&input, &MaterialConstants::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_thick_flanged_c_channel_rejected() {
        let input = MemberCostInput {
            member_type: MemberType::CChannel,
            dimensions: DimensionSet::new()
                .with(Dimension::Length, 1000.0)
                .with(Dimension::WebHeight, 10.0)
                .with(Dimension::FlangeWidth, 50.0)
                .with(Dimension::WebThickness, 5.0)
                .with(Dimension::FlangeThickness, 8.0),
            cost_per_kg: 80.0,
        };
        let err = calculate(&input, &MaterialConstants::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut input = shaft_input();
        input.cost_per_kg = -1.0;
        let err = calculate(&input, &MaterialConstants::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_COST");
    }

    #[test]
    fn test_custom_constants() {
        // Doubling density doubles weight; zero tax makes total == base.
        let constants = MaterialConstants {
            density_kg_m3: 15700.0,
            tax_rate: 0.0,
            ..MaterialConstants::default()
        };
        let result = calculate(&shaft_input(), &constants).unwrap();
        assert!((result.weight_kg.0 - 2.0 * 61.6539).abs() < 1e-3);
        assert_eq!(result.total_cost, result.base_cost);
    }

    #[test]
    fn test_input_serialization() {
        let input = shaft_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("\"Shaft\""));
        assert!(json.contains("\"Diameter\""));
        let roundtrip: MemberCostInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
