//! Frame identifiers and reference frame conventions.
//!
//! Frames belong to the kinematic model. A contact only remembers which frame
//! it is attached to and in which convention its spatial quantities are
//! expressed.

use std::fmt;
use std::str::FromStr;

use crate::ContactError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a frame in the kinematic model's frame table.
///
/// [`FrameIndex::UNSET`] (the largest representable index) marks a contact
/// that has not been attached to a frame yet.
///
/// # Example
///
/// ```
/// use sim_rigid_contact::FrameIndex;
///
/// assert!(!FrameIndex::default().is_set());
/// assert!(FrameIndex::new(7).is_set());
/// assert_eq!(FrameIndex::UNSET.raw(), usize::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// Sentinel for "no frame attached".
    pub const UNSET: Self = Self(usize::MAX);

    /// Create a new frame index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }

    /// Whether this index refers to an actual frame.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != usize::MAX
    }
}

impl Default for FrameIndex {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<usize> for FrameIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "Frame({})", self.0)
        } else {
            f.write_str("Frame(unset)")
        }
    }
}

/// Frame in which the spatial quantities of a contact are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReferenceFrame {
    /// The world (inertial) frame.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "WORLD"))]
    World,
    /// The contact frame itself.
    #[cfg_attr(feature = "serde", serde(rename = "LOCAL"))]
    Local,
    /// Origin at the contact frame, axes aligned with the world frame.
    #[cfg_attr(feature = "serde", serde(rename = "LOCAL_WORLD_ALIGNED"))]
    LocalWorldAligned,
}

impl ReferenceFrame {
    /// All reference frame conventions.
    pub const ALL: [Self; 3] = [Self::World, Self::Local, Self::LocalWorldAligned];

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::World => "WORLD",
            Self::Local => "LOCAL",
            Self::LocalWorldAligned => "LOCAL_WORLD_ALIGNED",
        }
    }

    /// Whether quantities in this convention are expressed along world axes.
    #[must_use]
    pub const fn is_world_aligned(self) -> bool {
        matches!(self, Self::World | Self::LocalWorldAligned)
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceFrame {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WORLD" => Ok(Self::World),
            "LOCAL" => Ok(Self::Local),
            "LOCAL_WORLD_ALIGNED" => Ok(Self::LocalWorldAligned),
            _ => Err(ContactError::unknown_reference_frame(s)),
        }
    }
}
