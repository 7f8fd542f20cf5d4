use super::{
    movement::MovementState,
    vectors::CameraVectors,
    CameraDesc,
    CameraMovement,
};
use glam::{Mat4, Vec3};
use winit::{dpi::PhysicalSize, event::KeyEvent};

/// Default yaw in degrees; -90° faces down -Z.
const DEFAULT_YAW: f32 = -90.0;
const DEFAULT_PITCH: f32 = 0.0;

/// Default vertical field of view in degrees.
const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch limit in degrees. Keeps the front vector away from the poles, where
/// the basis would degenerate against a vertical world-up.
const PITCH_LIMIT: f32 = 89.0;

const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 75.0;

/// A free-fly camera driven by keyboard translation and mouse-look rotation.
///
/// Orientation is stored as yaw/pitch Euler angles in degrees; the
/// front/right/up basis is re-derived from them after every rotation, so it
/// is always orthonormal and never stale.
pub struct Camera {
    position: Vec3,

    /// Yaw in degrees. Unbounded; a full turn simply wraps the angle past
    /// ±360.
    yaw: f32,

    /// Pitch in degrees, clamped to ±89 by the mouse-look path.
    pitch: f32,

    /// Fixed world-up reference used to re-derive right and up from front.
    world_up: Vec3,

    /// Vertical field of view in degrees, adjusted by scroll input and
    /// clamped to [1, 75].
    zoom: f32,

    vectors: CameraVectors,
    movement_state: MovementState,
    desc: CameraDesc,
    aspect_ratio: f32,
}

impl Camera {
    /// Creates a camera with default tuning. Yaw and pitch are in degrees.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::with_desc(position, world_up, yaw, pitch, CameraDesc::default())
    }

    /// Creates a camera with explicit tuning parameters.
    pub fn with_desc(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
        desc: CameraDesc,
    ) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch,
            world_up,
            zoom: DEFAULT_ZOOM,
            vectors: CameraVectors::new(),
            movement_state: MovementState::new(
                desc.movement.speed,
                desc.movement.boost_multiplier,
            ),
            desc,
            aspect_ratio: 16.0 / 9.0,
        };

        camera.vectors.update(camera.yaw, camera.pitch, camera.world_up);
        log::debug!(
            "Camera created at {:?}, yaw {}°, pitch {}°",
            camera.position,
            camera.yaw,
            camera.pitch
        );
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// The current vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn front(&self) -> Vec3 {
        self.vectors.front
    }

    pub fn right(&self) -> Vec3 {
        self.vectors.right
    }

    pub fn up(&self) -> Vec3 {
        self.vectors.up
    }

    /// The right-handed look-at transform from world space into camera space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.vectors.front,
            self.vectors.up,
        )
    }

    /// A right-handed perspective projection using [`Self::zoom`] as the
    /// vertical field of view.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.zoom.to_radians(),
            self.aspect_ratio,
            self.desc.projection.z_near,
            self.desc.projection.z_far,
        )
    }

    pub fn on_resize(&mut self, size: PhysicalSize<u32>) {
        self.aspect_ratio = size.width as f32 / size.height as f32;
    }

    /// Translates the camera one discrete step along its front or right
    /// axis, scaled by the movement speed and `delta_time` seconds.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.desc.movement.speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.vectors.front * velocity,
            CameraMovement::Backward => self.position -= self.vectors.front * velocity,
            CameraMovement::Left => self.position -= self.vectors.right * velocity,
            CameraMovement::Right => self.position += self.vectors.right * velocity,
        }
    }

    /// Applies a mouse-look delta. Offsets are scaled by the mouse
    /// sensitivity and added to yaw and pitch; a positive `y_offset` pitches
    /// up. With `constrain_pitch` the pitch is clamped to ±89° so the view
    /// cannot flip over the poles.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.desc.movement.mouse_sensitivity;
        self.pitch += y_offset * self.desc.movement.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.vectors.update(self.yaw, self.pitch, self.world_up);
    }

    /// Applies a scroll delta to the field-of-view zoom. Scrolling up
    /// (positive `y_offset`) zooms in by narrowing the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Only updates the held-key movement state based on the key event.
    pub fn handle_keyboard(&mut self, key_event: &KeyEvent) {
        self.movement_state.handle_keyboard(key_event);
    }

    /// Integrates the held-key movement state over `delta_time` seconds,
    /// moving in the camera's local axes (front/right/up).
    pub fn update(&mut self, delta_time: f32) {
        self.position += self.movement_state.velocity(
            self.vectors.front,
            self.vectors.right,
            self.vectors.up,
        ) * delta_time;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}
