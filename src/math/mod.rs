mod aabb;
pub mod easing;
mod ray;

pub use aabb::AABB;
pub use easing::{ease_out_cubic, lerp};
pub use ray::{intersect_aabb, AabbHit, Ray};
