//! Rigid contact descriptors.
//!
//! A [`ContactDescriptor`] declares which constraint exists: its type, the
//! frame it is attached to, the convention its quantities are expressed in,
//! and the reference (desired) placement, velocity and acceleration. It is
//! created once per active contact and is read-only during a solve.

use nalgebra::{RealField, Scalar};
use simba::scalar::SupersetOf;
use tracing::warn;

use crate::spatial::{cast_placement, Motion, Placement};
use crate::{ContactError, ContactType, FrameIndex, ReferenceFrame, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Description of a rigid contact constraint.
///
/// Two descriptors are equal when they have the same type, frame and
/// reference frame. The desired placement, velocity and acceleration are not
/// compared: the same physical contact with a different setpoint is still the
/// same contact.
///
/// # Example
///
/// ```
/// use sim_rigid_contact::{ContactDescriptor, ContactType, FrameIndex, Motion, ReferenceFrame};
/// use nalgebra::Vector3;
///
/// let foot = ContactDescriptor::<f64>::new(
///     ContactType::Frame6D,
///     FrameIndex::new(7),
///     ReferenceFrame::Local,
/// );
/// assert_eq!(foot.size(), 6);
///
/// let moving = foot.with_desired_velocity(Motion::from_linear(Vector3::x()));
/// assert_eq!(foot, moving);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactDescriptor<T: Scalar> {
    /// Type of the contact.
    pub contact_type: ContactType,
    /// Frame the contact is attached to.
    pub frame_id: FrameIndex,
    /// Frame in which the constraint is expressed.
    pub reference_frame: ReferenceFrame,
    /// Desired contact placement.
    pub desired_placement: Placement<T>,
    /// Desired contact spatial velocity.
    pub desired_velocity: Motion<T>,
    /// Desired contact spatial acceleration.
    pub desired_acceleration: Motion<T>,
}

impl<T: RealField + Copy> Default for ContactDescriptor<T> {
    fn default() -> Self {
        Self::new(ContactType::Undefined, FrameIndex::UNSET, ReferenceFrame::World)
    }
}

impl<T: RealField + Copy> ContactDescriptor<T> {
    /// Create a contact with identity placement and zero motion targets.
    #[must_use]
    pub fn new(
        contact_type: ContactType,
        frame_id: FrameIndex,
        reference_frame: ReferenceFrame,
    ) -> Self {
        Self {
            contact_type,
            frame_id,
            reference_frame,
            desired_placement: Placement::identity(),
            desired_velocity: Motion::zero(),
            desired_acceleration: Motion::zero(),
        }
    }

    /// Create a contact expressed in the world frame.
    #[must_use]
    pub fn world(contact_type: ContactType, frame_id: FrameIndex) -> Self {
        Self::new(contact_type, frame_id, ReferenceFrame::World)
    }

    /// Set the desired placement.
    #[must_use]
    pub fn with_desired_placement(mut self, placement: Placement<T>) -> Self {
        self.desired_placement = placement;
        self
    }

    /// Set the desired velocity.
    #[must_use]
    pub fn with_desired_velocity(mut self, velocity: Motion<T>) -> Self {
        self.desired_velocity = velocity;
        self
    }

    /// Set the desired acceleration.
    #[must_use]
    pub fn with_desired_acceleration(mut self, acceleration: Motion<T>) -> Self {
        self.desired_acceleration = acceleration;
        self
    }

    /// Set the reference frame.
    #[must_use]
    pub fn with_reference_frame(mut self, reference_frame: ReferenceFrame) -> Self {
        self.reference_frame = reference_frame;
        self
    }

    /// Number of constraint rows this contact contributes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.contact_type.dim()
    }

    /// Whether the contact contributes no constraint rows.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.size() == 0
    }

    /// Whether the contact is attached to a frame.
    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame_id.is_set()
    }

    /// Deviation of `acceleration` from the desired acceleration, restricted
    /// to the constrained directions.
    ///
    /// Point contacts only constrain translation, so the angular part of the
    /// result is zero. Undefined contacts constrain nothing.
    #[must_use]
    pub fn constraint_error(&self, acceleration: &Motion<T>) -> Motion<T> {
        let error = *acceleration - self.desired_acceleration;
        match self.contact_type {
            ContactType::Frame6D => error,
            ContactType::Point3D => error.translational(),
            ContactType::Undefined => Motion::zero(),
        }
    }

    /// Check that the contact can be handed to a solver for a model with
    /// `num_frames` frames.
    ///
    /// Inert contacts always pass. A standalone descriptor has no position,
    /// so a [`ContactError::UnsetFrame`] error carries `contact: None`.
    pub fn validate(&self, num_frames: usize) -> Result<()> {
        self.validate_at(None, num_frames)
    }

    pub(crate) fn validate_at(&self, index: Option<usize>, num_frames: usize) -> Result<()> {
        if self.is_inert() {
            return Ok(());
        }

        if !self.has_frame() {
            warn!(contact = ?index, "contact has no frame attached");
            return Err(ContactError::UnsetFrame { contact: index });
        }

        if self.frame_id.raw() >= num_frames {
            warn!(
                contact = ?index,
                frame = self.frame_id.raw(),
                num_frames,
                "contact frame out of range"
            );
            return Err(ContactError::FrameOutOfRange {
                frame: self.frame_id,
                num_frames,
            });
        }

        Ok(())
    }

    /// Convert the spatial targets to another scalar type.
    ///
    /// Type, frame and reference frame are copied unchanged.
    #[must_use]
    pub fn cast<U>(&self) -> ContactDescriptor<U>
    where
        U: RealField + Copy + SupersetOf<T>,
    {
        ContactDescriptor {
            contact_type: self.contact_type,
            frame_id: self.frame_id,
            reference_frame: self.reference_frame,
            desired_placement: cast_placement(&self.desired_placement),
            desired_velocity: self.desired_velocity.cast(),
            desired_acceleration: self.desired_acceleration.cast(),
        }
    }
}

impl<T: Scalar> PartialEq for ContactDescriptor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.contact_type == other.contact_type
            && self.frame_id == other.frame_id
            && self.reference_frame == other.reference_frame
    }
}

impl<T: Scalar> Eq for ContactDescriptor<T> {}
