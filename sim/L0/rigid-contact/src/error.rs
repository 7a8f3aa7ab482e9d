//! Error types for contact bookkeeping.
//!
//! The contact data types themselves never fail. Errors only show up at the
//! boundary: when raw values are converted into the closed enumerations, and
//! when a consumer checks that a contact is ready to be handed to a solver.

use thiserror::Error;

use crate::FrameIndex;

/// Errors that can occur when building or validating contacts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Raw discriminant outside the closed set of contact types.
    #[error("invalid contact type discriminant: {0}")]
    InvalidContactType(u8),

    /// Contact type name that does not match any known type.
    #[error("unknown contact type: {name}")]
    UnknownContactType {
        /// The name that failed to parse.
        name: String,
    },

    /// Reference frame name that does not match any known convention.
    #[error("unknown reference frame: {name}")]
    UnknownReferenceFrame {
        /// The name that failed to parse.
        name: String,
    },

    /// A contact with constraint rows still carries the unset frame sentinel.
    #[error("{} has no frame attached", contact_label(.contact))]
    UnsetFrame {
        /// Position of the contact in its set, `None` for a standalone
        /// descriptor.
        contact: Option<usize>,
    },

    /// Frame index does not exist in the kinematic model.
    #[error("frame {frame} out of range (model has {num_frames} frames)")]
    FrameOutOfRange {
        /// The offending frame index.
        frame: FrameIndex,
        /// Number of frames in the model.
        num_frames: usize,
    },

    /// Contact index past the end of a contact set.
    #[error("contact {index} not found (set holds {len} contacts)")]
    ContactNotFound {
        /// Requested index.
        index: usize,
        /// Number of contacts in the set.
        len: usize,
    },
}

fn contact_label(contact: &Option<usize>) -> String {
    match contact {
        Some(index) => format!("contact {index}"),
        None => "contact".to_string(),
    }
}

impl ContactError {
    /// Create an unknown contact type error.
    #[must_use]
    pub fn unknown_contact_type(name: impl Into<String>) -> Self {
        Self::UnknownContactType { name: name.into() }
    }

    /// Create an unknown reference frame error.
    #[must_use]
    pub fn unknown_reference_frame(name: impl Into<String>) -> Self {
        Self::UnknownReferenceFrame { name: name.into() }
    }

    /// Check if this error comes from parsing or converting raw input.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidContactType(_)
                | Self::UnknownContactType { .. }
                | Self::UnknownReferenceFrame { .. }
        )
    }

    /// Check if this error means the contact is not attached to a usable frame.
    #[must_use]
    pub fn is_frame_error(&self) -> bool {
        matches!(self, Self::UnsetFrame { .. } | Self::FrameOutOfRange { .. })
    }
}
