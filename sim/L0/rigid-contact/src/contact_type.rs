//! Contact types and their constraint dimension.

use std::fmt;
use std::str::FromStr;

use crate::ContactError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of rigid contact.
///
/// The set is closed; the number of constrained directions is a pure function
/// of the variant (see [`ContactType::dim`]).
///
/// # Example
///
/// ```
/// use sim_rigid_contact::ContactType;
///
/// assert_eq!(ContactType::Point3D.dim(), 3);
/// assert_eq!(ContactType::Frame6D.dim(), 6);
/// assert_eq!(ContactType::default().dim(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ContactType {
    /// Point contact: constrains the 3 translational directions.
    #[cfg_attr(feature = "serde", serde(rename = "POINT_3D"))]
    Point3D = 0,
    /// Frame contact: constrains translation and rotation (full attachment).
    #[cfg_attr(feature = "serde", serde(rename = "FRAME_6D"))]
    Frame6D = 1,
    /// Placeholder contact with no constrained direction.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "UNDEFINED"))]
    Undefined = 2,
}

impl ContactType {
    /// All contact types.
    pub const ALL: [Self; 3] = [Self::Point3D, Self::Frame6D, Self::Undefined];

    /// Number of constrained directions.
    #[must_use]
    pub const fn dim(self) -> usize {
        match self {
            Self::Point3D => 3,
            Self::Frame6D => 6,
            Self::Undefined => 0,
        }
    }

    /// Whether this type constrains the rotational directions too.
    #[must_use]
    pub const fn constrains_rotation(self) -> bool {
        matches!(self, Self::Frame6D)
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Point3D => "POINT_3D",
            Self::Frame6D => "FRAME_6D",
            Self::Undefined => "UNDEFINED",
        }
    }
}

impl From<ContactType> for u8 {
    fn from(contact_type: ContactType) -> Self {
        contact_type as Self
    }
}

impl TryFrom<u8> for ContactType {
    type Error = ContactError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Point3D),
            1 => Ok(Self::Frame6D),
            2 => Ok(Self::Undefined),
            _ => Err(ContactError::InvalidContactType(raw)),
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactType {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POINT_3D" | "CONTACT_3D" | "3D" => Ok(Self::Point3D),
            "FRAME_6D" | "CONTACT_6D" | "6D" => Ok(Self::Frame6D),
            "UNDEFINED" | "CONTACT_UNDEFINED" => Ok(Self::Undefined),
            _ => Err(ContactError::unknown_contact_type(s)),
        }
    }
}

/// Static contact dimension, for code that picks the contact type at compile
/// time.
///
/// ```
/// use sim_rigid_contact::{ContactDim, ContactType, marker};
///
/// fn rows<C: ContactDim>() -> usize {
///     C::DIM
/// }
///
/// assert_eq!(rows::<marker::Frame6D>(), 6);
/// assert_eq!(marker::Point3D::TYPE, ContactType::Point3D);
/// ```
pub trait ContactDim {
    /// The runtime contact type this marker stands for.
    const TYPE: ContactType;
    /// Number of constrained directions.
    const DIM: usize = Self::TYPE.dim();
}

/// Zero-sized markers implementing [`ContactDim`].
pub mod marker {
    use super::{ContactDim, ContactType};

    /// Marker for [`ContactType::Point3D`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Point3D;

    /// Marker for [`ContactType::Frame6D`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Frame6D;

    /// Marker for [`ContactType::Undefined`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Undefined;

    impl ContactDim for Point3D {
        const TYPE: ContactType = ContactType::Point3D;
    }

    impl ContactDim for Frame6D {
        const TYPE: ContactType = ContactType::Frame6D;
    }

    impl ContactDim for Undefined {
        const TYPE: ContactType = ContactType::Undefined;
    }
}
