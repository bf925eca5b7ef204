use std::time::Duration;

use glam::Vec3;
use cad_viewer::config::ViewerConfig;
use cad_viewer::navigation::CanvasRect;
use cad_viewer::orbit::OrbitSettings;
use cad_viewer::viewer::{PoseWriter, Viewer};
use cad_viewer::viewpoint::Viewpoint;

const WIDGET: CanvasRect = CanvasRect {
    left: 0.0,
    top: 0.0,
    width: 120.0,
    height: 120.0,
};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn undamped_viewer() -> Viewer {
    let config = ViewerConfig {
        orbit: OrbitSettings {
            enable_damping: false,
            ..OrbitSettings::default()
        },
        ..ViewerConfig::default()
    };
    Viewer::new(&config)
}

#[cfg(test)]
mod single_writer_tests {
    use super::*;

    #[test]
    fn test_idle_frame_writes_nothing() {
        let mut viewer = Viewer::new(&ViewerConfig::default());
        let before = *viewer.camera();
        assert_eq!(viewer.frame(ms(16)), PoseWriter::None);
        assert_eq!(*viewer.camera(), before);
    }

    #[test]
    fn test_orbit_writes_when_idle() {
        let mut viewer = undamped_viewer();
        viewer.rotate(50.0, 0.0, 600.0);
        assert_eq!(viewer.frame(ms(16)), PoseWriter::Orbit);
        assert_ne!(viewer.camera().position, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_transition_is_sole_writer() {
        let mut viewer = undamped_viewer();
        viewer.request_view(Viewpoint::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO), ms(0));

        viewer.rotate(300.0, 100.0, 600.0);
        viewer.pan(40.0, 40.0, 600.0);
        viewer.zoom(5.0);
        assert_eq!(viewer.frame(ms(500)), PoseWriter::Transition);

        let expected = cad_viewer::math::lerp(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(10.0, 0.0, 0.0),
            0.875,
        );
        assert_eq!(viewer.camera().position, expected);
    }

    #[test]
    fn test_input_during_transition_is_dropped_not_queued() {
        let mut viewer = undamped_viewer();
        viewer.request_view(Viewpoint::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO), ms(0));
        viewer.rotate(300.0, 0.0, 600.0);
        viewer.zoom(-3.0);

        assert_eq!(viewer.frame(ms(1000)), PoseWriter::Transition);
        assert_eq!(viewer.camera().position, Vec3::new(0.0, 0.0, 10.0));

        // Nothing left over once the orbit controller is back in charge
        assert_eq!(viewer.frame(ms(1016)), PoseWriter::None);
        assert_eq!(viewer.camera().position, Vec3::new(0.0, 0.0, 10.0));
    }
}

#[cfg(test)]
mod hand_off_tests {
    use super::*;

    #[test]
    fn test_drag_after_transition_starts_from_animated_pose() {
        let mut viewer = undamped_viewer();
        let end = Vec3::new(10.0, 0.0, 0.0);
        viewer.request_view(Viewpoint::new(end, Vec3::ZERO), ms(0));
        viewer.frame(ms(1000));
        assert!(!viewer.is_transitioning());

        // A small drag moves the camera a little from `end`, not from the old pose
        viewer.rotate(1.0, 0.0, 600.0);
        assert_eq!(viewer.frame(ms(1016)), PoseWriter::Orbit);
        let position = viewer.camera().position;
        assert!(position.distance(end) < 0.1);
        assert!((position.length() - 10.0).abs() < 1e-3);
        assert_eq!(viewer.rig().target(), Vec3::ZERO);
    }

    #[test]
    fn test_damped_momentum_is_dropped_on_transition() {
        let mut viewer = Viewer::new(&ViewerConfig::default());
        viewer.rotate(200.0, 0.0, 600.0);
        viewer.frame(ms(0));
        assert!(viewer.rig().orbit.has_pending_motion());

        let end = Vec3::new(0.0, 10.0, 0.0);
        viewer.request_view(Viewpoint::new(end, Vec3::ZERO), ms(16));
        viewer.frame(ms(1016));
        assert!(!viewer.rig().orbit.has_pending_motion());
        assert_eq!(viewer.frame(ms(1032)), PoseWriter::None);
        assert_eq!(viewer.camera().position, end);
    }

    #[test]
    fn test_widget_click_starts_transition_to_top() {
        let mut viewer = Viewer::new(&ViewerConfig::default());
        let view = viewer.click_widget(60.0, 40.0, &WIDGET, ms(0));

        assert_eq!(view, Some(Viewpoint::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO)));
        assert!(viewer.is_transitioning());
        viewer.frame(ms(1000));
        assert_eq!(viewer.camera().position, Vec3::new(0.0, 10.0, 0.0));
        assert!(viewer.camera().view_matrix().is_finite());
    }

    #[test]
    fn test_missed_widget_click_changes_nothing() {
        let mut viewer = Viewer::new(&ViewerConfig::default());
        assert!(viewer.click_widget(1.0, 1.0, &WIDGET, ms(0)).is_none());
        assert!(!viewer.is_transitioning());
    }

    #[test]
    fn test_reset_cancels_transition() {
        let mut viewer = Viewer::new(&ViewerConfig::default());
        viewer.request_view(Viewpoint::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO), ms(0));
        viewer.frame(ms(200));

        viewer.reset(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO);
        assert!(!viewer.is_transitioning());
        assert_eq!(viewer.frame(ms(400)), PoseWriter::None);
        assert_eq!(viewer.camera().position, Vec3::new(0.0, 0.0, 3.0));
    }
}
