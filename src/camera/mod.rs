mod desc;
pub use desc::*;

mod camera;
pub use camera::*;

mod movement;
pub use movement::CameraMovement;

mod vectors;
// pub use vectors::*;
