pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod loaders;
pub mod math;
pub mod navigation;
pub mod orbit;
pub mod projects;
pub mod renderer;
pub mod rig;
pub mod transition;
pub mod ui;
pub mod viewer;
pub mod viewpoint;

pub use camera::PerspectiveCamera;
pub use config::ViewerConfig;
pub use navigation::{CanvasRect, CubeFace, NavigationCube, NavigationWidget};
pub use rig::CameraRig;
pub use transition::{CameraTransitionController, TransitionPhase, TransitionUpdate};
pub use viewer::{PoseWriter, Viewer};
pub use viewpoint::Viewpoint;
