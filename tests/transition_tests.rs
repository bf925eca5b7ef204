use std::time::Duration;

use glam::Vec3;
use cad_viewer::camera::PerspectiveCamera;
use cad_viewer::core::clock::{ManualClock, TimeSource};
use cad_viewer::math::{ease_out_cubic, lerp};
use cad_viewer::orbit::OrbitSettings;
use cad_viewer::rig::CameraRig;
use cad_viewer::transition::{CameraTransitionController, TransitionPhase, TransitionUpdate};
use cad_viewer::viewpoint::Viewpoint;

const P0: Vec3 = Vec3::new(0.0, 0.0, 5.0);
const P1: Vec3 = Vec3::new(0.0, 10.0, 0.0);

fn rig_at(position: Vec3) -> CameraRig {
    let mut camera = PerspectiveCamera::new(position, 50.0, 0.1, 1000.0);
    camera.look_at(Vec3::ZERO);
    CameraRig::new(camera, OrbitSettings::default())
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[cfg(test)]
mod interpolation_tests {
    use super::*;

    #[test]
    fn test_start_pose_is_exact_at_zero_elapsed() {
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(ms(1000));
        controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, ms(0));

        assert_eq!(controller.update(ms(0), &mut rig), TransitionUpdate::InProgress);
        assert_eq!(rig.camera.position, P0);
    }

    #[test]
    fn test_half_duration_is_eased() {
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(ms(1000));
        controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, ms(0));

        controller.update(ms(500), &mut rig);
        assert_eq!(rig.camera.position, lerp(P0, P1, 0.875));
    }

    #[test]
    fn test_end_pose_is_bit_exact() {
        // Awkward values that would not survive lerp at t = 1 unchanged
        let start = Vec3::new(0.1, 0.7, 3.3);
        let end = Vec3::new(-7.77, 0.3, 1e-3);
        let target = Vec3::new(0.2, -0.1, 0.05);

        for finish in [1000, 1001, 5000] {
            let mut rig = rig_at(start);
            let mut controller = CameraTransitionController::new(ms(1000));
            controller.begin(Viewpoint::new(end, target), &rig, ms(0));
            controller.update(ms(999), &mut rig);

            assert_eq!(controller.update(ms(finish), &mut rig), TransitionUpdate::Completed);
            assert_eq!(rig.camera.position, end);
            assert_eq!(rig.camera.target, target);
            assert_eq!(rig.target(), target);
            assert_eq!(controller.phase(), TransitionPhase::Idle);
        }
    }

    #[test]
    fn test_completes_after_single_late_frame() {
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(ms(1000));
        controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, ms(0));

        assert_eq!(controller.update(ms(3000), &mut rig), TransitionUpdate::Completed);
        assert_eq!(rig.camera.position, P1);
        assert_eq!(controller.update(ms(3016), &mut rig), TransitionUpdate::Idle);
    }

    #[test]
    fn test_frame_rate_does_not_change_the_path() {
        let sample_at = |frames: &[u64]| {
            let mut rig = rig_at(P0);
            let mut controller = CameraTransitionController::new(ms(1000));
            controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, ms(0));
            for &t in frames {
                controller.update(ms(t), &mut rig);
            }
            rig.camera.position
        };

        let smooth: Vec<u64> = (1..=25).map(|i| i * 16).collect();
        let choppy = [7, 150, 400];
        assert_eq!(sample_at(&smooth), sample_at(&choppy));
    }

    #[test]
    fn test_path_is_monotonic_towards_end() {
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(ms(1000));
        controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, ms(0));

        let mut last = rig.camera.position.distance(P1);
        for t in (0..=1000).step_by(50) {
            controller.update(ms(t), &mut rig);
            let remaining = rig.camera.position.distance(P1);
            assert!(remaining <= last + 1e-6);
            last = remaining;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn test_target_is_interpolated_with_position() {
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(ms(1000));
        let new_target = Vec3::new(2.0, 0.0, 0.0);
        controller.begin(Viewpoint::new(P1, new_target), &rig, ms(0));

        controller.update(ms(500), &mut rig);
        assert_eq!(rig.target(), lerp(Vec3::ZERO, new_target, ease_out_cubic(0.5)));
        assert_eq!(rig.camera.target, rig.target());
    }
}

#[cfg(test)]
mod redirect_tests {
    use super::*;

    #[test]
    fn test_redirect_starts_from_current_pose() {
        let clock = ManualClock::new();
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(ms(1000));

        controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, clock.now());
        clock.advance(ms(300));
        controller.update(clock.now(), &mut rig);
        let mid_flight = rig.camera.position;

        let v2 = Viewpoint::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        controller.begin(v2, &rig, clock.now());
        let state = *controller.state().unwrap();
        assert_eq!(state.start_position, mid_flight);
        assert_eq!(state.start_time, ms(300));

        // No jump at the moment of redirection
        controller.update(clock.now(), &mut rig);
        assert_eq!(rig.camera.position, mid_flight);

        clock.advance(ms(1000));
        controller.update(clock.now(), &mut rig);
        assert_eq!(rig.camera.position, v2.position());
    }

    #[test]
    fn test_redirect_duration_restarts() {
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(ms(1000));
        controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, ms(0));
        controller.update(ms(900), &mut rig);

        controller.begin(Viewpoint::new(-P1, Vec3::ZERO), &rig, ms(900));
        assert_eq!(controller.update(ms(1000), &mut rig), TransitionUpdate::InProgress);
        assert_eq!(controller.update(ms(1900), &mut rig), TransitionUpdate::Completed);
    }

    #[test]
    fn test_settled_request_does_not_move_camera() {
        let mut rig = rig_at(P1);
        let mut controller = CameraTransitionController::new(ms(1000));
        let before = rig.camera;

        controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, ms(0));
        for t in [0, 16, 500, 999, 1000] {
            controller.update(ms(t), &mut rig);
            assert_eq!(rig.camera, before, "moved at {}ms", t);
        }
        assert!(!controller.is_active());
    }

    #[test]
    fn test_degenerate_viewpoint_is_accepted() {
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(ms(1000));
        let point = Vec3::new(1.0, 1.0, 1.0);

        controller.begin(Viewpoint::new(point, point), &rig, ms(0));
        assert!(controller.is_active());
        assert_eq!(controller.update(ms(1000), &mut rig), TransitionUpdate::Completed);
        assert_eq!(rig.camera.position, point);
        assert_eq!(rig.camera.forward(), Vec3::ZERO);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut rig = rig_at(P0);
        let mut controller = CameraTransitionController::new(Duration::ZERO);
        controller.begin(Viewpoint::new(P1, Vec3::ZERO), &rig, ms(10));
        assert_eq!(controller.update(ms(10), &mut rig), TransitionUpdate::Completed);
        assert_eq!(rig.camera.position, P1);
    }
}
