use glam::Vec3;

/// Requested camera placement: where the camera goes and what it looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    position: Vec3,
    target: Vec3,
}

impl Viewpoint {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Position and target coincide, so there is no look direction
    pub fn is_degenerate(&self) -> bool {
        self.position == self.target
    }
}
