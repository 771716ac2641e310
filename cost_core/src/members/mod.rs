//! # Member Types
//!
//! Structural steel cross-section categories and the named dimensions each
//! one requires. The six supported member types mirror what a steel yard
//! quotes: solid shafts, flat and round plates, angles, channels and joists.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::members::{Dimension, MemberType};
//!
//! let member: MemberType = "C-type Channel".parse().unwrap();
//! assert_eq!(member, MemberType::CChannel);
//! assert!(member.required_dimensions().contains(&Dimension::WebHeight));
//! ```

pub mod geometry;

pub use geometry::{DimensionSet, MemberGeometry};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CostError;

/// Structural member cross-section category.
///
/// Determines which dimensions are required and which volume formula
/// applies. Serializes with the human-facing names used on order rows:
///
/// ```json
/// "Round Plate"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberType {
    /// Solid circular bar
    Shaft,
    /// Rectangular flat plate
    Plate,
    /// Circular flat plate
    #[serde(rename = "Round Plate")]
    RoundPlate,
    /// L-section angle with two legs
    #[serde(rename = "Square Angle")]
    SquareAngle,
    /// C-section channel (web plus two flanges)
    #[serde(rename = "C-type Channel")]
    CChannel,
    /// I-section joist (web plus two flanges)
    #[serde(rename = "I-joist")]
    IJoist,
}

impl MemberType {
    /// All supported member types, in menu order.
    pub const ALL: [MemberType; 6] = [
        MemberType::Shaft,
        MemberType::Plate,
        MemberType::RoundPlate,
        MemberType::SquareAngle,
        MemberType::CChannel,
        MemberType::IJoist,
    ];

    /// Get the human-facing name for this member type
    pub fn name(&self) -> &'static str {
        match self {
            MemberType::Shaft => "Shaft",
            MemberType::Plate => "Plate",
            MemberType::RoundPlate => "Round Plate",
            MemberType::SquareAngle => "Square Angle",
            MemberType::CChannel => "C-type Channel",
            MemberType::IJoist => "I-joist",
        }
    }

    /// The dimensions this member type requires, in entry order.
    pub fn required_dimensions(&self) -> &'static [Dimension] {
        match self {
            MemberType::Shaft => &[Dimension::Diameter, Dimension::Length],
            MemberType::Plate => &[Dimension::Length, Dimension::Breadth, Dimension::Thickness],
            MemberType::RoundPlate => &[Dimension::Diameter, Dimension::Thickness],
            MemberType::SquareAngle => &[
                Dimension::Length,
                Dimension::Leg1,
                Dimension::Leg2,
                Dimension::Thickness,
            ],
            MemberType::CChannel => &[
                Dimension::Length,
                Dimension::WebHeight,
                Dimension::FlangeWidth,
                Dimension::WebThickness,
                Dimension::FlangeThickness,
            ],
            MemberType::IJoist => &[
                Dimension::Length,
                Dimension::FlangeWidth,
                Dimension::FlangeThickness,
                Dimension::WebHeight,
                Dimension::WebThickness,
            ],
        }
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MemberType {
    type Err = CostError;

    /// Parse a member type from its human-facing name.
    ///
    /// Any name outside the six supported variants fails with
    /// `UnknownMemberType`; no silent zero-volume fallback exists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberType::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s.trim())
            .ok_or_else(|| CostError::unknown_member_type(s.trim()))
    }
}

/// A named linear measurement, always entered in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Diameter,
    Length,
    Breadth,
    Thickness,
    #[serde(rename = "Leg 1")]
    Leg1,
    #[serde(rename = "Leg 2")]
    Leg2,
    #[serde(rename = "Web Height")]
    WebHeight,
    #[serde(rename = "Flange Width")]
    FlangeWidth,
    #[serde(rename = "Web Thickness")]
    WebThickness,
    #[serde(rename = "Flange Thickness")]
    FlangeThickness,
}

impl Dimension {
    /// Get the human-facing field label for this dimension
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Diameter => "Diameter",
            Dimension::Length => "Length",
            Dimension::Breadth => "Breadth",
            Dimension::Thickness => "Thickness",
            Dimension::Leg1 => "Leg 1",
            Dimension::Leg2 => "Leg 2",
            Dimension::WebHeight => "Web Height",
            Dimension::FlangeWidth => "Flange Width",
            Dimension::WebThickness => "Web Thickness",
            Dimension::FlangeThickness => "Flange Thickness",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
