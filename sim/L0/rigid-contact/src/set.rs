//! Ordered collections of active contacts.
//!
//! A [`ContactSet`] keeps descriptors and states in two parallel sequences:
//! contact `i` is described by `descriptors()[i]` and its solver output lives
//! in `states()[i]`. Constraint rows are stacked in the same order, see
//! [`ContactSet::row_offsets`].
//!
//! Contacts are matched across steps with descriptor equality, so a contact
//! whose setpoint changed keeps its previous state (useful for warm starting).

use nalgebra::RealField;
use tracing::{debug, warn};

use crate::{ContactDescriptor, ContactError, ContactState, Result};

/// Descriptors and states of the active contacts, indexed in parallel.
///
/// # Example
///
/// ```
/// use sim_rigid_contact::{ContactDescriptor, ContactSet, ContactType, FrameIndex};
///
/// let mut contacts = ContactSet::<f64>::new();
/// contacts.push(ContactDescriptor::world(ContactType::Frame6D, FrameIndex::new(3)));
/// contacts.push(ContactDescriptor::world(ContactType::Point3D, FrameIndex::new(5)));
///
/// assert_eq!(contacts.total_dim(), 9);
/// assert_eq!(contacts.row_offsets(), vec![0, 6]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSet<T: RealField + Copy> {
    descriptors: Vec<ContactDescriptor<T>>,
    states: Vec<ContactState<T>>,
}

impl<T: RealField + Copy> Default for ContactSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealField + Copy> ContactSet<T> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Create an empty set with room for `capacity` contacts.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            descriptors: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
        }
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the set holds no contact.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Append a contact with a zeroed state and return its index.
    pub fn push(&mut self, descriptor: ContactDescriptor<T>) -> usize {
        self.append_new(descriptor)
    }

    /// Insert a contact, or update the targets of the matching one.
    ///
    /// When an equal descriptor is already present its desired placement,
    /// velocity and acceleration are replaced and its state is kept.
    pub fn upsert(&mut self, descriptor: ContactDescriptor<T>) -> usize {
        match self.find(&descriptor) {
            Some(index) => {
                self.descriptors[index] = descriptor;
                index
            }
            None => self.push(descriptor),
        }
    }

    /// Remove a contact and return it with its state.
    ///
    /// Later contacts shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<(ContactDescriptor<T>, ContactState<T>)> {
        if index >= self.len() {
            return Err(ContactError::ContactNotFound {
                index,
                len: self.len(),
            });
        }

        let descriptor = self.descriptors.remove(index);
        let state = self.states.remove(index);
        debug!(contact = index, frame = %descriptor.frame_id, "Removed contact");
        Ok((descriptor, state))
    }

    /// Remove every contact.
    pub fn clear(&mut self) {
        self.descriptors.clear();
        self.states.clear();
    }

    /// Replace the contacts with `next`, keeping the state of every contact
    /// that was already present.
    ///
    /// New contacts start from a zeroed state. Contacts missing from `next`
    /// are dropped.
    pub fn update_contacts<I>(&mut self, next: I)
    where
        I: IntoIterator<Item = ContactDescriptor<T>>,
    {
        let mut previous: Vec<Option<(ContactDescriptor<T>, ContactState<T>)>> = self
            .descriptors
            .drain(..)
            .zip(self.states.drain(..))
            .map(Some)
            .collect();

        let mut kept = 0;
        for descriptor in next {
            let carried = previous
                .iter_mut()
                .find(|slot| matches!(slot, Some((old, _)) if *old == descriptor))
                .and_then(Option::take);

            match carried {
                Some((_, state)) => {
                    kept += 1;
                    self.descriptors.push(descriptor);
                    self.states.push(state);
                }
                None => {
                    self.append_new(descriptor);
                }
            }
        }

        let dropped = previous.iter().filter(|slot| slot.is_some()).count();
        debug!(
            contacts = self.len(),
            kept,
            added = self.len() - kept,
            dropped,
            "Updated contact set"
        );
    }

    /// Index of the contact equal to `descriptor`.
    #[must_use]
    pub fn find(&self, descriptor: &ContactDescriptor<T>) -> Option<usize> {
        self.descriptors.iter().position(|d| d == descriptor)
    }

    /// Whether a contact equal to `descriptor` is present.
    #[must_use]
    pub fn contains(&self, descriptor: &ContactDescriptor<T>) -> bool {
        self.find(descriptor).is_some()
    }

    /// All descriptors, in contact order.
    #[must_use]
    pub fn descriptors(&self) -> &[ContactDescriptor<T>] {
        &self.descriptors
    }

    /// All states, in contact order.
    #[must_use]
    pub fn states(&self) -> &[ContactState<T>] {
        &self.states
    }

    /// All states, mutably. Descriptors stay read-only.
    pub fn states_mut(&mut self) -> &mut [ContactState<T>] {
        &mut self.states
    }

    /// Descriptor and state of contact `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&ContactDescriptor<T>, &ContactState<T>)> {
        Some((self.descriptors.get(index)?, self.states.get(index)?))
    }

    /// Descriptor and mutable state of contact `index`.
    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<(&ContactDescriptor<T>, &mut ContactState<T>)> {
        Some((self.descriptors.get(index)?, self.states.get_mut(index)?))
    }

    /// State of contact `index`, or an error if there is no such contact.
    pub fn state(&self, index: usize) -> Result<&ContactState<T>> {
        self.states.get(index).ok_or(ContactError::ContactNotFound {
            index,
            len: self.len(),
        })
    }

    /// Iterate over `(descriptor, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&ContactDescriptor<T>, &ContactState<T>)> {
        self.descriptors.iter().zip(self.states.iter())
    }

    /// Iterate over `(descriptor, state)` pairs with mutable states.
    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (&ContactDescriptor<T>, &mut ContactState<T>)> {
        self.descriptors.iter().zip(self.states.iter_mut())
    }

    /// Iterate over `(index, descriptor, state)` for contacts that contribute
    /// constraint rows.
    pub fn active(&self) -> impl Iterator<Item = (usize, &ContactDescriptor<T>, &ContactState<T>)> {
        self.iter()
            .enumerate()
            .filter(|(_, (d, _))| !d.is_inert())
            .map(|(i, (d, s))| (i, d, s))
    }

    /// Total number of constraint rows.
    #[must_use]
    pub fn total_dim(&self) -> usize {
        self.descriptors.iter().map(ContactDescriptor::size).sum()
    }

    /// First constraint row of each contact in the stacked constraint vector.
    #[must_use]
    pub fn row_offsets(&self) -> Vec<usize> {
        self.descriptors
            .iter()
            .scan(0, |row, d| {
                let start = *row;
                *row += d.size();
                Some(start)
            })
            .collect()
    }

    /// Zero every state.
    pub fn reset_states(&mut self) {
        for (descriptor, state) in self.descriptors.iter().zip(self.states.iter_mut()) {
            *state = ContactState::new(descriptor);
        }
    }

    /// Check every contact against a model with `num_frames` frames.
    ///
    /// Stops at the first contact that is not ready.
    pub fn validate(&self, num_frames: usize) -> Result<()> {
        self.descriptors
            .iter()
            .enumerate()
            .try_for_each(|(index, d)| d.validate_at(Some(index), num_frames))
    }

    fn append_new(&mut self, descriptor: ContactDescriptor<T>) -> usize {
        let index = self.descriptors.len();

        // Undefined contacts are inert placeholders and only show up at debug level.
        if !descriptor.is_inert() && !descriptor.has_frame() {
            warn!(contact = index, "adding a contact without frame");
        }

        debug!(
            contact = index,
            contact_type = %descriptor.contact_type,
            frame = %descriptor.frame_id,
            reference_frame = %descriptor.reference_frame,
            "Added contact"
        );

        self.states.push(ContactState::new(&descriptor));
        self.descriptors.push(descriptor);
        index
    }
}

impl<T: RealField + Copy> FromIterator<ContactDescriptor<T>> for ContactSet<T> {
    fn from_iter<I: IntoIterator<Item = ContactDescriptor<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        for descriptor in iter {
            set.push(descriptor);
        }
        set
    }
}
