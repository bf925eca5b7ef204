//! Navigation cube widget: a miniature scene used only for input.
//!
//! A fixed camera looks at a labeled cube. Clicking a face casts a pick ray into
//! that scene and yields a [`Viewpoint`](crate::viewpoint::Viewpoint) on the
//! face's outward axis at a fixed standoff distance, looking at the origin.

mod cube;
mod widget;

pub use cube::{CubeFace, CubeHit, FaceLabel, NavigationCube};
pub use widget::{CanvasRect, NavigationSettings, NavigationWidget};
