use glam::Vec3;

/// Fast start, slow settle. Input is clamped to [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// `a + (b - a) * t`; returns `a` exactly when `t == 0` or `a == b`
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}
