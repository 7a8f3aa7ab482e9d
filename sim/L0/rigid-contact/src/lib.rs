//! Rigid contact constraints for multibody contact dynamics.
//!
//! This crate provides the data model shared by every constrained-dynamics
//! algorithm that enforces rigid contacts:
//!
//! - [`ContactDescriptor`] - Which constraint exists: type, frame, reference
//!   frame convention and desired placement/velocity/acceleration
//! - [`ContactState`] - What the solver computed for it: force, velocity,
//!   acceleration, drift acceleration and deviation from the target
//! - [`ContactSet`] - Descriptors and states of the active contacts, indexed
//!   in parallel
//!
//! # Contact Types
//!
//! | Type | Constrained directions | Rows |
//! |------|------------------------|------|
//! | [`ContactType::Point3D`] | translation | 3 |
//! | [`ContactType::Frame6D`] | translation + rotation | 6 |
//! | [`ContactType::Undefined`] | none | 0 |
//!
//! # Design Philosophy
//!
//! These types are **pure data**. Nothing here resolves frames,
//! computes kinematics or solves for forces. The kinematic model owns the
//! frames a [`FrameIndex`] points to; the solver reads descriptors and
//! overwrites states once per step.
//!
//! All spatial quantities are generic over the scalar type so a whole
//! contact pipeline can be re-run in another precision with
//! [`ContactDescriptor::cast`].
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Example
//!
//! ```
//! use sim_rigid_contact::{
//!     ContactDescriptor, ContactState, ContactType, FrameIndex, ReferenceFrame,
//! };
//! use nalgebra::Vector3;
//!
//! let foot = ContactDescriptor::<f64>::new(
//!     ContactType::Frame6D,
//!     FrameIndex::new(7),
//!     ReferenceFrame::Local,
//! );
//! assert_eq!(foot.size(), 6);
//!
//! let mut state = ContactState::new(&foot);
//! state.force.linear = Vector3::new(0.0, 0.0, 350.0);
//! assert_ne!(state, ContactState::new(&foot));
//! ```

#![doc(html_root_url = "https://docs.rs/sim-rigid-contact/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::missing_errors_doc,        // Error docs added where non-obvious
)]

mod contact_type;
mod descriptor;
mod error;
mod frame;
mod set;
pub mod spatial;
mod state;

pub use contact_type::{marker, ContactDim, ContactType};
pub use descriptor::ContactDescriptor;
pub use error::ContactError;
pub use frame::{FrameIndex, ReferenceFrame};
pub use set::ContactSet;
pub use spatial::{Force, Motion, Placement};
pub use state::ContactState;

/// Result type for contact operations.
pub type Result<T> = std::result::Result<T, ContactError>;

/// Descriptor in double precision.
pub type RigidContactDescriptor = ContactDescriptor<f64>;

/// State in double precision.
pub type RigidContactState = ContactState<f64>;
