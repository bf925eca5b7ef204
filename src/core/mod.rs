pub mod clock;
pub mod input;
pub mod triangle_intersection;
