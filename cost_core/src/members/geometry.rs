//! # Member Geometry
//!
//! Dimension collection and the per-member-type volume formulas.
//!
//! Form input arrives as a named map of millimeter values ([`DimensionSet`]).
//! Before any formula runs, the map is converted into a [`MemberGeometry`]
//! variant whose fields are exactly the dimensions that member type needs.
//! Adding a new member type therefore forces both a constructor arm and a
//! formula arm; a type cannot exist in the selector without a formula.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::members::{Dimension, DimensionSet, MemberGeometry, MemberType};
//!
//! let mut dims = DimensionSet::new();
//! dims.insert(Dimension::Diameter, 100.0);
//! dims.insert(Dimension::Length, 1000.0);
//!
//! let geometry = MemberGeometry::from_dimensions(MemberType::Shaft, &dims).unwrap();
//! let volume = geometry.volume_m3();
//! assert!((volume.0 - 0.007854).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CostError, CostResult};
use crate::members::{Dimension, MemberType};
use crate::units::{CubicMeters, Meters, Millimeters};

/// π as used in every stored quote. A higher-precision constant would
/// shift recomputed weights away from saved order rows.
pub const PI: f64 = 3.1416;

/// Named dimension values in millimeters, as collected from a form.
///
/// Keys are ordered so the summary string on an order row is stable.
///
/// ## JSON Example
///
/// ```json
/// { "Diameter": 100.0, "Length": 1000.0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionSet {
    values: BTreeMap<Dimension, f64>,
}

impl DimensionSet {
    /// Create an empty dimension set
    pub fn new() -> Self {
        DimensionSet {
            values: BTreeMap::new(),
        }
    }

    /// Set a dimension value in millimeters
    pub fn insert(&mut self, dimension: Dimension, value_mm: f64) -> &mut Self {
        self.values.insert(dimension, value_mm);
        self
    }

    /// Builder-style insert for constructing sets inline
    pub fn with(mut self, dimension: Dimension, value_mm: f64) -> Self {
        self.values.insert(dimension, value_mm);
        self
    }

    /// Get a dimension value in millimeters, if present
    pub fn get(&self, dimension: Dimension) -> Option<Millimeters> {
        self.values.get(&dimension).copied().map(Millimeters)
    }

    /// Number of dimensions present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no dimensions have been entered
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Validate this set against a member type's requirements.
    ///
    /// Every required dimension must be present and strictly positive.
    /// This is the pre-check a caller runs before asking for a quote.
    ///
    /// Beyond per-field positivity, the angle and channel sections have
    /// cross-field constraints: all-positive dimensions can still describe
    /// an impossible cross-section whose volume formula turns negative.
    pub fn validate(&self, member_type: MemberType) -> CostResult<()> {
        for &dimension in member_type.required_dimensions() {
            let value = self
                .get(dimension)
                .ok_or_else(|| CostError::missing_dimension(dimension.label()))?;
            if !value.0.is_finite() || value.0 <= 0.0 {
                return Err(CostError::invalid_dimension(
                    dimension.label(),
                    value.0.to_string(),
                    "Dimension must be a positive number of millimeters",
                ));
            }
        }

        match member_type {
            MemberType::SquareAngle => {
                let thickness = self.require(Dimension::Thickness)?;
                let leg1 = self.require(Dimension::Leg1)?;
                let leg2 = self.require(Dimension::Leg2)?;
                if thickness.0 >= leg1.0 + leg2.0 {
                    return Err(CostError::invalid_dimension(
                        Dimension::Thickness.label(),
                        thickness.0.to_string(),
                        "Thickness must be less than Leg 1 + Leg 2",
                    ));
                }
            }
            MemberType::CChannel => {
                let flange_thickness = self.require(Dimension::FlangeThickness)?;
                let web_height = self.require(Dimension::WebHeight)?;
                if 2.0 * flange_thickness.0 >= web_height.0 {
                    return Err(CostError::invalid_dimension(
                        Dimension::FlangeThickness.label(),
                        flange_thickness.0.to_string(),
                        "Twice the flange thickness must be less than the web height",
                    ));
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Human-readable summary recorded on order rows,
    /// e.g. `"Diameter: 100 mm, Length: 1000 mm"`.
    pub fn summary(&self) -> String {
        self.values
            .iter()
            .map(|(dimension, value)| format!("{}: {} mm", dimension.label(), value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Fetch a required dimension in millimeters.
    fn require(&self, dimension: Dimension) -> CostResult<Millimeters> {
        self.get(dimension)
            .ok_or_else(|| CostError::missing_dimension(dimension.label()))
    }

    /// Fetch a required dimension converted to meters.
    fn meters(&self, dimension: Dimension) -> CostResult<Meters> {
        self.require(dimension).map(Meters::from)
    }
}

/// Validated member geometry with one variant per member type.
///
/// All fields are in meters. Construction via [`MemberGeometry::from_dimensions`]
/// is the only path from form input to a formula, so an invalid or
/// incomplete dimension set can never reach `volume_m3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MemberGeometry {
    Shaft {
        diameter: Meters,
        length: Meters,
    },
    Plate {
        length: Meters,
        breadth: Meters,
        thickness: Meters,
    },
    RoundPlate {
        diameter: Meters,
        thickness: Meters,
    },
    SquareAngle {
        length: Meters,
        leg1: Meters,
        leg2: Meters,
        thickness: Meters,
    },
    CChannel {
        length: Meters,
        web_height: Meters,
        flange_width: Meters,
        web_thickness: Meters,
        flange_thickness: Meters,
    },
    IJoist {
        length: Meters,
        flange_width: Meters,
        flange_thickness: Meters,
        web_height: Meters,
        web_thickness: Meters,
    },
}

impl MemberGeometry {
    /// Build geometry for `member_type` from a dimension set.
    ///
    /// Validates the set first: every dimension the member type requires
    /// must be present and positive, and the cross-section must be
    /// geometrically consistent. A constructed geometry therefore always
    /// has strictly positive volume.
    ///
    /// # Returns
    ///
    /// * `Ok(MemberGeometry)` - All required dimensions present and positive
    /// * `Err(CostError::MissingDimension)` - A required dimension is absent
    /// * `Err(CostError::InvalidDimension)` - A value is zero or negative,
    ///   or the section is impossible (angle thickness swallowing both legs,
    ///   channel flanges taller than the web)
    pub fn from_dimensions(
        member_type: MemberType,
        dimensions: &DimensionSet,
    ) -> CostResult<Self> {
        dimensions.validate(member_type)?;

        let geometry = match member_type {
            MemberType::Shaft => MemberGeometry::Shaft {
                diameter: dimensions.meters(Dimension::Diameter)?,
                length: dimensions.meters(Dimension::Length)?,
            },
            MemberType::Plate => MemberGeometry::Plate {
                length: dimensions.meters(Dimension::Length)?,
                breadth: dimensions.meters(Dimension::Breadth)?,
                thickness: dimensions.meters(Dimension::Thickness)?,
            },
            MemberType::RoundPlate => MemberGeometry::RoundPlate {
                diameter: dimensions.meters(Dimension::Diameter)?,
                thickness: dimensions.meters(Dimension::Thickness)?,
            },
            MemberType::SquareAngle => MemberGeometry::SquareAngle {
                length: dimensions.meters(Dimension::Length)?,
                leg1: dimensions.meters(Dimension::Leg1)?,
                leg2: dimensions.meters(Dimension::Leg2)?,
                thickness: dimensions.meters(Dimension::Thickness)?,
            },
            MemberType::CChannel => MemberGeometry::CChannel {
                length: dimensions.meters(Dimension::Length)?,
                web_height: dimensions.meters(Dimension::WebHeight)?,
                flange_width: dimensions.meters(Dimension::FlangeWidth)?,
                web_thickness: dimensions.meters(Dimension::WebThickness)?,
                flange_thickness: dimensions.meters(Dimension::FlangeThickness)?,
            },
            MemberType::IJoist => MemberGeometry::IJoist {
                length: dimensions.meters(Dimension::Length)?,
                flange_width: dimensions.meters(Dimension::FlangeWidth)?,
                flange_thickness: dimensions.meters(Dimension::FlangeThickness)?,
                web_height: dimensions.meters(Dimension::WebHeight)?,
                web_thickness: dimensions.meters(Dimension::WebThickness)?,
            },
        };

        Ok(geometry)
    }

    /// The member type this geometry belongs to
    pub fn member_type(&self) -> MemberType {
        match self {
            MemberGeometry::Shaft { .. } => MemberType::Shaft,
            MemberGeometry::Plate { .. } => MemberType::Plate,
            MemberGeometry::RoundPlate { .. } => MemberType::RoundPlate,
            MemberGeometry::SquareAngle { .. } => MemberType::SquareAngle,
            MemberGeometry::CChannel { .. } => MemberType::CChannel,
            MemberGeometry::IJoist { .. } => MemberType::IJoist,
        }
    }

    /// Material volume in cubic meters, one closed-form formula per variant.
    pub fn volume_m3(&self) -> CubicMeters {
        let volume = match *self {
            MemberGeometry::Shaft { diameter, length } => {
                let radius = diameter.0 / 2.0;
                PI * radius * radius * length.0
            }
            MemberGeometry::Plate {
                length,
                breadth,
                thickness,
            } => length.0 * breadth.0 * thickness.0,
            MemberGeometry::RoundPlate {
                diameter,
                thickness,
            } => {
                let radius = diameter.0 / 2.0;
                PI * radius * radius * thickness.0
            }
            MemberGeometry::SquareAngle {
                length,
                leg1,
                leg2,
                thickness,
            } => length.0 * (leg1.0 + leg2.0 - thickness.0) * thickness.0,
            MemberGeometry::CChannel {
                length,
                web_height,
                flange_width,
                web_thickness,
                flange_thickness,
            } => {
                let flanges = 2.0 * flange_width.0 * flange_thickness.0;
                let web = (web_height.0 - 2.0 * flange_thickness.0) * web_thickness.0;
                length.0 * (flanges + web)
            }
            MemberGeometry::IJoist {
                length,
                flange_width,
                flange_thickness,
                web_height,
                web_thickness,
            } => {
                let flanges = 2.0 * flange_width.0 * flange_thickness.0;
                let web = web_height.0 * web_thickness.0;
                length.0 * (flanges + web)
            }
        };
        CubicMeters(volume)
    }
}
