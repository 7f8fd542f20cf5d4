//! A free-fly camera for real-time 3D rendering applications.
//!
//! [`Camera`] tracks a position and yaw/pitch orientation, derives an
//! orthonormal front/right/up basis from the angles, and answers "where am I
//! looking" with a right-handed view matrix. Input is mapped to motion either
//! per event ([`Camera::process_keyboard`], [`Camera::process_mouse_movement`],
//! [`Camera::process_mouse_scroll`]) or per frame by feeding winit key events
//! into [`Camera::handle_keyboard`] and integrating with [`Camera::update`].
//!
//! The camera is a plain single-threaded value, owned and mutated by the
//! render/input loop. It does no I/O and holds no GPU resources; callers
//! upload [`Camera::view_matrix`] and [`Camera::projection_matrix`] themselves.

pub mod camera;

pub use camera::{Camera, CameraDesc, CameraMovement, CameraMovementDesc, CameraProjectionDesc};
