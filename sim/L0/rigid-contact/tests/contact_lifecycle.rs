//! Integration tests: contact descriptors and states across solver steps.
//!
//! Tests cover:
//! - Descriptor defaults, sizes and identity equality
//! - State zero-initialisation and exact equality
//! - Scalar casts of whole contact sets
//! - A mock solver step writing states in place, with setpoint changes and
//!   contacts activating/deactivating between steps

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use sim_rigid_contact::{
    ContactDescriptor, ContactSet, ContactState, ContactType, FrameIndex, Force, Motion,
    ReferenceFrame,
};

const NUM_FRAMES: usize = 32;

/// Stand-in for a contact solver: writes every field of every active state.
///
/// The drift is a fixed bias per frame and the applied force is whatever
/// cancels the constraint error with unit apparent mass.
fn mock_solve(contacts: &mut ContactSet<f64>) {
    for (descriptor, state) in contacts.iter_mut() {
        if descriptor.is_inert() {
            continue;
        }
        let bias = descriptor.frame_id.raw() as f64;
        state.velocity = Motion::from_linear(Vector3::new(0.0, 0.0, -0.01 * bias));
        state.drift_acceleration = Motion::new(
            Vector3::new(0.0, 0.0, -bias),
            Vector3::new(0.1 * bias, 0.0, 0.0),
        );

        let correction = -descriptor.constraint_error(&state.drift_acceleration);
        state.force = Force::new(correction.linear, correction.angular);
        state.acceleration = state.drift_acceleration + correction;
        state.acceleration_deviation = descriptor.constraint_error(&state.acceleration);
    }
}

mod descriptor {
    use super::*;

    #[test]
    fn default_descriptor_is_a_placeholder() {
        let d = ContactDescriptor::<f64>::default();
        assert_eq!(d.contact_type, ContactType::Undefined);
        assert_eq!(d.frame_id.raw(), usize::MAX);
        assert_eq!(d.reference_frame, ReferenceFrame::World);
        assert_eq!(d.desired_placement, Isometry3::identity());
        assert_eq!(d.desired_velocity, Motion::zero());
        assert_eq!(d.desired_acceleration, Motion::zero());
        assert_eq!(d.size(), 0);
    }

    #[test]
    fn size_depends_only_on_type() {
        for contact_type in ContactType::ALL {
            for reference_frame in ReferenceFrame::ALL {
                for frame in [FrameIndex::new(0), FrameIndex::new(7), FrameIndex::UNSET] {
                    let d = ContactDescriptor::<f32>::new(contact_type, frame, reference_frame);
                    let expected = match contact_type {
                        ContactType::Point3D => 3,
                        ContactType::Frame6D => 6,
                        ContactType::Undefined => 0,
                    };
                    assert_eq!(d.size(), expected);
                }
            }
        }
    }

    #[test]
    fn equality_is_an_equivalence_on_identity_fields() {
        let a = ContactDescriptor::<f64>::world(ContactType::Point3D, FrameIndex::new(2));
        let b = a.with_desired_placement(Isometry3::translation(0.0, 0.0, 1.0));
        let c = b.with_desired_acceleration(Motion::from_linear(Vector3::z()));

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
    }
}

mod state {
    use super::*;

    #[test]
    fn fresh_states_are_zero_and_equal() {
        for contact_type in ContactType::ALL {
            let d = ContactDescriptor::<f64>::world(contact_type, FrameIndex::new(1));
            let s = ContactState::new(&d);
            assert_eq!(s.force, Force::zero());
            assert_eq!(s.velocity, Motion::zero());
            assert_eq!(s.acceleration, Motion::zero());
            assert_eq!(s.drift_acceleration, Motion::zero());
            assert_eq!(s.acceleration_deviation, Motion::zero());
            assert_eq!(s, ContactState::new(&d));
        }
    }

    #[test]
    fn frame_contact_scenario() {
        let d = ContactDescriptor::<f64>::new(
            ContactType::Frame6D,
            FrameIndex::new(7),
            ReferenceFrame::Local,
        );
        assert_eq!(d.size(), 6);

        let mut s = ContactState::new(&d);
        assert_eq!(s, ContactState::default());

        s.force = Force::from_angular(Vector3::new(0.0, 0.5, 0.0));
        assert_ne!(s, ContactState::new(&d));
        assert_eq!(
            d,
            ContactDescriptor::new(ContactType::Frame6D, FrameIndex::new(7), ReferenceFrame::Local)
        );
    }
}

mod cast {
    use super::*;

    fn target() -> ContactDescriptor<f64> {
        ContactDescriptor::new(
            ContactType::Frame6D,
            FrameIndex::new(4),
            ReferenceFrame::LocalWorldAligned,
        )
        .with_desired_placement(Isometry3::from_parts(
            Translation3::new(0.25, -0.5, 0.125),
            UnitQuaternion::from_euler_angles(0.3, 0.0, -0.6),
        ))
        .with_desired_velocity(Motion::new(
            Vector3::new(0.1, 0.2, 0.3),
            Vector3::new(-0.3, 0.2, -0.1),
        ))
        .with_desired_acceleration(Motion::from_linear(Vector3::new(0.0, 0.0, -9.81)))
    }

    #[test]
    fn round_trip_through_single_precision() {
        let d = target();
        let back: ContactDescriptor<f64> = d.cast::<f32>().cast();

        assert_eq!(back.contact_type, d.contact_type);
        assert_eq!(back.frame_id, d.frame_id);
        assert_eq!(back.reference_frame, d.reference_frame);
        assert_eq!(back.size(), d.size());

        let eps = f64::from(f32::EPSILON) * 16.0;
        assert_relative_eq!(
            back.desired_placement.translation.vector,
            d.desired_placement.translation.vector,
            epsilon = eps
        );
        assert_relative_eq!(
            back.desired_placement.rotation.coords,
            d.desired_placement.rotation.coords,
            epsilon = eps
        );
        assert_relative_eq!(
            back.desired_velocity.to_vector(),
            d.desired_velocity.to_vector(),
            epsilon = eps
        );
        assert_relative_eq!(
            back.desired_acceleration.to_vector(),
            d.desired_acceleration.to_vector(),
            epsilon = eps
        );
    }

    #[test]
    fn identity_cast_is_exact() {
        let d = target();
        let same = d.cast::<f64>();
        assert_eq!(same.desired_placement, d.desired_placement);
        assert_eq!(same.desired_velocity, d.desired_velocity);
        assert_eq!(same.desired_acceleration, d.desired_acceleration);
    }

    #[test]
    fn whole_set_can_be_recast() {
        let set: ContactSet<f64> = [target(), ContactDescriptor::default()].into_iter().collect();
        let single: ContactSet<f32> = set.descriptors().iter().map(|d| d.cast()).collect();

        assert_eq!(single.len(), 2);
        assert_eq!(single.total_dim(), set.total_dim());
        assert_eq!(single.row_offsets(), set.row_offsets());
    }
}

mod solver_step {
    use super::*;

    fn scene() -> ContactSet<f64> {
        [
            ContactDescriptor::world(ContactType::Frame6D, FrameIndex::new(10)),
            ContactDescriptor::world(ContactType::Point3D, FrameIndex::new(20)),
            ContactDescriptor::default(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn states_go_from_zero_to_populated() {
        let mut contacts = scene();
        contacts.validate(NUM_FRAMES).unwrap();
        assert!(contacts.states().iter().all(|s| *s == ContactState::default()));

        mock_solve(&mut contacts);

        let (frame, frame_state) = contacts.get(0).unwrap();
        assert_eq!(frame.size(), 6);
        assert_relative_eq!(frame_state.drift_acceleration.linear.z, -10.0);
        assert_relative_eq!(frame_state.force.linear.z, 10.0);
        assert_relative_eq!(frame_state.force.angular.x, -1.0);
        assert!(frame_state.acceleration_deviation.is_zero());
        // Power of the contact force along the contact velocity.
        assert_relative_eq!(frame_state.velocity.dot(&frame_state.force), -1.0);

        // Only translation is constrained: the rotational drift survives.
        let (_, point_state) = contacts.get(1).unwrap();
        assert_relative_eq!(point_state.force.linear.z, 20.0);
        assert_eq!(point_state.force.angular, Vector3::zeros());
        assert_relative_eq!(point_state.acceleration.angular.x, 2.0);
        assert!(point_state.acceleration_deviation.is_zero());

        // The undefined contact is left untouched.
        assert_eq!(contacts.states()[2], ContactState::default());
        assert!(contacts.states().iter().all(ContactState::is_finite));
    }

    #[test]
    fn states_are_overwritten_each_step() {
        let mut contacts = scene();
        mock_solve(&mut contacts);
        let first = contacts.states().to_vec();

        mock_solve(&mut contacts);
        assert_eq!(contacts.states(), first.as_slice());

        let target = Motion::from_linear(Vector3::new(0.0, 0.0, 1.0));
        contacts.upsert(
            ContactDescriptor::world(ContactType::Point3D, FrameIndex::new(20))
                .with_desired_acceleration(target),
        );
        mock_solve(&mut contacts);

        assert_eq!(contacts.len(), 3);
        assert_relative_eq!(contacts.states()[1].acceleration.linear.z, 1.0);
        assert_relative_eq!(contacts.states()[1].force.linear.z, 21.0);
        assert_eq!(contacts.states()[0], first[0]);
    }

    #[test]
    fn contacts_activate_and_deactivate_between_steps() {
        let mut contacts = scene();
        mock_solve(&mut contacts);
        let frame_state = contacts.states()[0];

        contacts.update_contacts([
            ContactDescriptor::world(ContactType::Frame6D, FrameIndex::new(10)),
            ContactDescriptor::world(ContactType::Point3D, FrameIndex::new(30)),
        ]);

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts.total_dim(), 9);
        assert_eq!(contacts.states()[0], frame_state);
        assert_eq!(contacts.states()[1], ContactState::default());

        mock_solve(&mut contacts);
        assert_relative_eq!(contacts.states()[1].force.linear.z, 30.0);
    }

    #[test]
    fn unattached_contact_is_rejected_before_solving() {
        let mut contacts = scene();
        contacts.push(ContactDescriptor::world(ContactType::Frame6D, FrameIndex::UNSET));

        let err = contacts.validate(NUM_FRAMES).unwrap_err();
        assert!(err.is_frame_error());
        assert!(err.to_string().contains('3'));
    }
}
