use glam::Vec3;
use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// A single discrete movement step, for callers that translate the camera
/// per input event rather than per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Default)]
pub struct AxesState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Stores the held-key state of the camera's continuous movement.
#[derive(Debug)]
pub struct MovementState {
    normal_speed: f32,
    boost_multiplier: f32,
    pub is_boosted: bool,
    pub axes: AxesState,
}

impl MovementState {
    pub fn new(normal_speed: f32, boost_multiplier: f32) -> Self {
        Self {
            normal_speed,
            boost_multiplier,
            is_boosted: false,
            axes: AxesState::default(),
        }
    }

    /// Combines the held axes into a velocity in the given camera basis.
    /// Diagonal input is normalized so it is no faster than a single axis.
    pub fn velocity(&self, front: Vec3, right: Vec3, up: Vec3) -> Vec3 {
        let mut velocity = Vec3::ZERO;
        if self.axes.forward {
            velocity += front;
        }
        if self.axes.backward {
            velocity -= front;
        }
        if self.axes.left {
            velocity -= right;
        }
        if self.axes.right {
            velocity += right;
        }
        if self.axes.up {
            velocity += up;
        }
        if self.axes.down {
            velocity -= up;
        }
        velocity.normalize_or_zero() * self.current_speed()
    }

    pub fn current_speed(&self) -> f32 {
        if self.is_boosted {
            self.normal_speed * self.boost_multiplier
        } else {
            self.normal_speed
        }
    }

    /// Updates the held-key state from a window keyboard event.
    pub fn handle_keyboard(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(code) = key_event.physical_key {
            if key_event.repeat {
                return;
            }

            match key_event.state {
                ElementState::Pressed => match code {
                    KeyCode::ShiftLeft => self.is_boosted = true,
                    KeyCode::KeyW => self.axes.forward = true,
                    KeyCode::KeyS => self.axes.backward = true,
                    KeyCode::KeyA => self.axes.left = true,
                    KeyCode::KeyD => self.axes.right = true,
                    KeyCode::Space => self.axes.up = true,
                    KeyCode::ControlLeft => self.axes.down = true,
                    _ => {}
                },
                ElementState::Released => match code {
                    KeyCode::ShiftLeft => self.is_boosted = false,
                    KeyCode::KeyW => self.axes.forward = false,
                    KeyCode::KeyS => self.axes.backward = false,
                    KeyCode::KeyA => self.axes.left = false,
                    KeyCode::KeyD => self.axes.right = false,
                    KeyCode::Space => self.axes.up = false,
                    KeyCode::ControlLeft => self.axes.down = false,
                    _ => {}
                },
            }
        }
    }
}
