//! Runtime state of a rigid contact.

use nalgebra::{RealField, Scalar};

use crate::spatial::{Force, Motion};
use crate::ContactDescriptor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quantities computed for one contact by the solver.
///
/// All fields are full 6D quantities whatever the contact type; for a point
/// contact the solver decides what goes in the rotational components
/// (usually zero). The solver overwrites every field each step. Equality is
/// exact over all five fields.
///
/// # Example
///
/// ```
/// use sim_rigid_contact::{ContactDescriptor, ContactState, ContactType, FrameIndex};
/// use nalgebra::Vector3;
///
/// let contact = ContactDescriptor::<f64>::world(ContactType::Point3D, FrameIndex::new(2));
/// let mut state = ContactState::new(&contact);
/// assert_eq!(state, ContactState::new(&contact));
///
/// state.force.linear = Vector3::new(0.0, 0.0, 9.81);
/// assert_ne!(state, ContactState::new(&contact));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactState<T: Scalar> {
    /// Resulting contact force.
    pub force: Force<T>,
    /// Current contact spatial velocity.
    pub velocity: Motion<T>,
    /// Current contact spatial acceleration.
    pub acceleration: Motion<T>,
    /// Acceleration due only to Coriolis and centrifugal effects.
    pub drift_acceleration: Motion<T>,
    /// Deviation from the desired acceleration.
    pub acceleration_deviation: Motion<T>,
}

impl<T: RealField + Copy> Default for ContactState<T> {
    fn default() -> Self {
        Self::new(&ContactDescriptor::default())
    }
}

impl<T: RealField + Copy> ContactState<T> {
    /// Create a zeroed state for `descriptor`.
    ///
    /// The descriptor is not retained.
    #[must_use]
    pub fn new(_descriptor: &ContactDescriptor<T>) -> Self {
        Self {
            force: Force::zero(),
            velocity: Motion::zero(),
            acceleration: Motion::zero(),
            drift_acceleration: Motion::zero(),
            acceleration_deviation: Motion::zero(),
        }
    }

    /// Check if any field contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.force.is_finite()
            && self.velocity.is_finite()
            && self.acceleration.is_finite()
            && self.drift_acceleration.is_finite()
            && self.acceleration_deviation.is_finite()
    }
}
