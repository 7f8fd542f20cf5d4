#[derive(Debug)]
pub struct CameraMovementDesc {
    /// Translation speed in world units per second.
    pub speed: f32,
    /// Speed multiplier applied while boost is held.
    pub boost_multiplier: f32,
    /// Degrees of rotation per unit of mouse movement.
    pub mouse_sensitivity: f32,
}

impl Default for CameraMovementDesc {
    fn default() -> Self {
        Self {
            speed: 2.5,
            boost_multiplier: 4.0,
            mouse_sensitivity: 0.1,
        }
    }
}

#[derive(Debug)]
pub struct CameraProjectionDesc {
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for CameraProjectionDesc {
    fn default() -> Self {
        Self {
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct CameraDesc {
    pub movement: CameraMovementDesc,
    pub projection: CameraProjectionDesc,
}
