use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Pixels of trackpad scroll that count as one wheel notch
const PIXELS_PER_LINE: f32 = 50.0;

/// Pointer buttons the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Orbit
    Primary,
    /// Pan
    Secondary,
}

/// Accumulated pointer motion since the last `take_motion`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerMotion {
    pub rotate: (f32, f32),
    pub pan: (f32, f32),
    /// Wheel notches, positive away from the user
    pub wheel: f32,
}

impl PointerMotion {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Bridges winit pointer events to drag and wheel deltas for the orbit controls.
///
/// Only events that the UI overlay did not consume should be fed in, so a drag
/// that starts on the navigation cube never turns into an orbit.
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    primary_down: bool,
    secondary_down: bool,
    /// Current cursor position (relative to window)
    position: Option<(f32, f32)>,
    motion: PointerMotion,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::map_button(*button) {
                    self.set_button(button, *state == ElementState::Pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.position = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.wheel(notches);
            }
            // Focus loss can swallow the release event
            WindowEvent::Focused(false) => {
                self.primary_down = false;
                self.secondary_down = false;
            }
            _ => {}
        }
    }

    pub fn set_button(&mut self, button: PointerButton, pressed: bool) {
        match button {
            PointerButton::Primary => self.primary_down = pressed,
            PointerButton::Secondary => self.secondary_down = pressed,
        }
    }

    pub fn is_down(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary_down,
            PointerButton::Secondary => self.secondary_down,
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((old_x, old_y)) = self.position {
            let delta = (x - old_x, y - old_y);
            if self.primary_down {
                self.motion.rotate.0 += delta.0;
                self.motion.rotate.1 += delta.1;
            } else if self.secondary_down {
                self.motion.pan.0 += delta.0;
                self.motion.pan.1 += delta.1;
            }
        }
        self.position = Some((x, y));
    }

    pub fn wheel(&mut self, notches: f32) {
        self.motion.wheel += notches;
    }

    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    /// Drain motion gathered since the previous call.
    /// Call this once per frame after processing input.
    pub fn take_motion(&mut self) -> PointerMotion {
        std::mem::take(&mut self.motion)
    }

    fn map_button(button: MouseButton) -> Option<PointerButton> {
        match button {
            MouseButton::Left => Some(PointerButton::Primary),
            MouseButton::Right => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_drag_rotates() {
        let mut input = PointerInput::new();
        input.cursor_moved(10.0, 10.0);
        input.set_button(PointerButton::Primary, true);
        input.cursor_moved(15.0, 8.0);
        input.cursor_moved(20.0, 8.0);

        let motion = input.take_motion();
        assert_eq!(motion.rotate, (10.0, -2.0));
        assert_eq!(motion.pan, (0.0, 0.0));
    }

    #[test]
    fn test_secondary_drag_pans() {
        let mut input = PointerInput::new();
        input.cursor_moved(0.0, 0.0);
        input.set_button(PointerButton::Secondary, true);
        input.cursor_moved(-4.0, 3.0);
        assert_eq!(input.take_motion().pan, (-4.0, 3.0));
    }

    #[test]
    fn test_hover_without_buttons_is_no_motion() {
        let mut input = PointerInput::new();
        input.cursor_moved(0.0, 0.0);
        input.cursor_moved(50.0, 50.0);
        assert!(input.take_motion().is_empty());
        assert_eq!(input.position(), Some((50.0, 50.0)));
    }

    #[test]
    fn test_first_move_has_no_delta() {
        let mut input = PointerInput::new();
        input.set_button(PointerButton::Primary, true);
        input.cursor_moved(100.0, 100.0);
        assert!(input.take_motion().is_empty());
    }

    #[test]
    fn test_take_motion_resets() {
        let mut input = PointerInput::new();
        input.wheel(1.0);
        input.wheel(0.5);
        assert_eq!(input.take_motion().wheel, 1.5);
        assert!(input.take_motion().is_empty());
    }

    #[test]
    fn test_release_stops_drag() {
        let mut input = PointerInput::new();
        input.cursor_moved(0.0, 0.0);
        input.set_button(PointerButton::Primary, true);
        input.set_button(PointerButton::Primary, false);
        input.cursor_moved(10.0, 0.0);
        assert!(!input.is_down(PointerButton::Primary));
        assert!(input.take_motion().is_empty());
    }
}
