//! Spatial algebra for contact quantities.
//!
//! Spatial vectors are 6D quantities split into a linear and an angular part.
//! Packed as a [`Vector6`], the linear components come first:
//!
//! ```text
//! motion = [v_x, v_y, v_z, ω_x, ω_y, ω_z]
//! force  = [f_x, f_y, f_z, τ_x, τ_y, τ_z]
//! ```
//!
//! Placements are rigid transforms ([`Isometry3`]). A placement `m = (R, p)`
//! mapping frame B into frame A acts on motions and forces expressed in B:
//!
//! ```text
//! ω_A = R ω_B            v_A = R v_B + p × ω_A
//! f_A = R f_B            τ_A = R τ_B + p × f_A
//! ```
//!
//! Every type is generic over the scalar so the whole contact pipeline can be
//! re-run at a different precision with [`Motion::cast`], [`Force::cast`] and
//! [`cast_placement`].

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use nalgebra::{Isometry3, RealField, Scalar, Vector3, Vector6};
use simba::scalar::SupersetOf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rigid placement of a frame.
pub type Placement<T> = Isometry3<T>;

/// Convert a placement to another scalar type.
///
/// Identity conversions are exact.
#[must_use]
pub fn cast_placement<T, U>(placement: &Placement<T>) -> Placement<U>
where
    T: RealField + Copy,
    U: RealField + Copy + SupersetOf<T>,
{
    nalgebra::convert(*placement)
}

/// Spatial motion: a velocity or acceleration twist.
///
/// # Example
///
/// ```
/// use sim_rigid_contact::Motion;
/// use nalgebra::Vector3;
///
/// let m = Motion::new(Vector3::new(1.0, 0.0, 0.0), Vector3::zeros());
/// assert_eq!(m.to_vector()[0], 1.0);
/// assert_eq!(Motion::<f64>::zero(), Motion::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Motion<T: Scalar> {
    /// Linear part.
    pub linear: Vector3<T>,
    /// Angular part.
    pub angular: Vector3<T>,
}

impl<T: RealField + Copy> Default for Motion<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RealField + Copy> Motion<T> {
    /// Create a motion from its linear and angular parts.
    #[must_use]
    pub const fn new(linear: Vector3<T>, angular: Vector3<T>) -> Self {
        Self { linear, angular }
    }

    /// The zero motion.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }

    /// Motion with a linear part only.
    #[must_use]
    pub fn from_linear(linear: Vector3<T>) -> Self {
        Self::new(linear, Vector3::zeros())
    }

    /// Motion with an angular part only.
    #[must_use]
    pub fn from_angular(angular: Vector3<T>) -> Self {
        Self::new(Vector3::zeros(), angular)
    }

    /// Build from a packed vector (linear first).
    #[must_use]
    pub fn from_vector(v: &Vector6<T>) -> Self {
        Self::new(
            v.fixed_rows::<3>(0).into_owned(),
            v.fixed_rows::<3>(3).into_owned(),
        )
    }

    /// Pack into a vector (linear first).
    #[must_use]
    pub fn to_vector(&self) -> Vector6<T> {
        let mut v = Vector6::zeros();
        v.fixed_rows_mut::<3>(0).copy_from(&self.linear);
        v.fixed_rows_mut::<3>(3).copy_from(&self.angular);
        v
    }

    /// Whether both parts are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.linear.iter().chain(self.angular.iter()).all(|x| x.is_zero())
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.linear
            .iter()
            .chain(self.angular.iter())
            .all(|x| x.is_finite())
    }

    /// Keep the linear part, zero the angular part.
    #[must_use]
    pub fn translational(&self) -> Self {
        Self::from_linear(self.linear)
    }

    /// Express this motion in the parent frame of `placement`.
    #[must_use]
    pub fn act(&self, placement: &Placement<T>) -> Self {
        let angular = placement.rotation * self.angular;
        let linear = placement.rotation * self.linear
            + placement.translation.vector.cross(&angular);
        Self::new(linear, angular)
    }

    /// Inverse of [`Motion::act`].
    #[must_use]
    pub fn act_inv(&self, placement: &Placement<T>) -> Self {
        let p = &placement.translation.vector;
        let angular = placement.rotation.inverse_transform_vector(&self.angular);
        let linear = placement
            .rotation
            .inverse_transform_vector(&(self.linear - p.cross(&self.angular)));
        Self::new(linear, angular)
    }

    /// Spatial cross product `self × other` (Lie bracket of motions).
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.angular.cross(&other.linear) + self.linear.cross(&other.angular),
            self.angular.cross(&other.angular),
        )
    }

    /// Dual cross product `self ×* force`.
    #[must_use]
    pub fn cross_force(&self, force: &Force<T>) -> Force<T> {
        Force::new(
            self.angular.cross(&force.linear),
            self.angular.cross(&force.angular) + self.linear.cross(&force.linear),
        )
    }

    /// Power of `force` along this motion.
    #[must_use]
    pub fn dot(&self, force: &Force<T>) -> T {
        self.linear.dot(&force.linear) + self.angular.dot(&force.angular)
    }

    /// Convert to another scalar type.
    #[must_use]
    pub fn cast<U>(self) -> Motion<U>
    where
        U: RealField + Copy + SupersetOf<T>,
    {
        Motion::new(self.linear.cast::<U>(), self.angular.cast::<U>())
    }
}

/// Spatial force: a force and a torque.
///
/// The linear part is the force, the angular part the torque.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Force<T: Scalar> {
    /// Linear part (force).
    pub linear: Vector3<T>,
    /// Angular part (torque).
    pub angular: Vector3<T>,
}

impl<T: RealField + Copy> Default for Force<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RealField + Copy> Force<T> {
    /// Create a force from its linear and angular parts.
    #[must_use]
    pub const fn new(linear: Vector3<T>, angular: Vector3<T>) -> Self {
        Self { linear, angular }
    }

    /// The zero force.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }

    /// Pure force, no torque.
    #[must_use]
    pub fn from_linear(linear: Vector3<T>) -> Self {
        Self::new(linear, Vector3::zeros())
    }

    /// Pure torque.
    #[must_use]
    pub fn from_angular(angular: Vector3<T>) -> Self {
        Self::new(Vector3::zeros(), angular)
    }

    /// Build from a packed vector (linear first).
    #[must_use]
    pub fn from_vector(v: &Vector6<T>) -> Self {
        Self::new(
            v.fixed_rows::<3>(0).into_owned(),
            v.fixed_rows::<3>(3).into_owned(),
        )
    }

    /// Pack into a vector (linear first).
    #[must_use]
    pub fn to_vector(&self) -> Vector6<T> {
        let mut v = Vector6::zeros();
        v.fixed_rows_mut::<3>(0).copy_from(&self.linear);
        v.fixed_rows_mut::<3>(3).copy_from(&self.angular);
        v
    }

    /// Whether both parts are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.linear.iter().chain(self.angular.iter()).all(|x| x.is_zero())
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.linear
            .iter()
            .chain(self.angular.iter())
            .all(|x| x.is_finite())
    }

    /// Express this force in the parent frame of `placement`.
    #[must_use]
    pub fn act(&self, placement: &Placement<T>) -> Self {
        let linear = placement.rotation * self.linear;
        let angular = placement.rotation * self.angular
            + placement.translation.vector.cross(&linear);
        Self::new(linear, angular)
    }

    /// Inverse of [`Force::act`].
    #[must_use]
    pub fn act_inv(&self, placement: &Placement<T>) -> Self {
        let p = &placement.translation.vector;
        let linear = placement.rotation.inverse_transform_vector(&self.linear);
        let angular = placement
            .rotation
            .inverse_transform_vector(&(self.angular - p.cross(&self.linear)));
        Self::new(linear, angular)
    }

    /// Convert to another scalar type.
    #[must_use]
    pub fn cast<U>(self) -> Force<U>
    where
        U: RealField + Copy + SupersetOf<T>,
    {
        Force::new(self.linear.cast::<U>(), self.angular.cast::<U>())
    }
}

macro_rules! impl_spatial_ops {
    ($ty:ident) => {
        impl<T: RealField + Copy> Add for $ty<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(self.linear + rhs.linear, self.angular + rhs.angular)
            }
        }

        impl<T: RealField + Copy> AddAssign for $ty<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                self.linear += rhs.linear;
                self.angular += rhs.angular;
            }
        }

        impl<T: RealField + Copy> Sub for $ty<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.linear - rhs.linear, self.angular - rhs.angular)
            }
        }

        impl<T: RealField + Copy> SubAssign for $ty<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.linear -= rhs.linear;
                self.angular -= rhs.angular;
            }
        }

        impl<T: RealField + Copy> Neg for $ty<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.linear, -self.angular)
            }
        }

        impl<T: RealField + Copy> Mul<T> for $ty<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self::new(self.linear * rhs, self.angular * rhs)
            }
        }
    };
}

impl_spatial_ops!(Motion);
impl_spatial_ops!(Force);
