use glam::{Mat4, Vec2, Vec3};

/// Camera uniform uploaded to the GPU: the combined view-projection matrix.
///
/// Layout is column-major, matching WGSL `mat4x4<f32>`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Column-major 4×4 view-projection matrix sent to the vertex shader.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Plain orthographic projection (no camera transform).
    /// Maps world coords [0..w] × [0..h] (y up) directly to clip space.
    /// Used as the initial buffer contents before the first camera push.
    pub fn identity_ortho(width: f32, height: f32) -> Self {
        let sx = 2.0 / width;
        let sy = 2.0 / height;
        Self {
            view_proj: [
                [sx,   0.0,  0.0, 0.0], // col0
                [0.0,  sy,   0.0, 0.0], // col1
                [0.0,  0.0,  1.0, 0.0], // col2
                [-1.0, -1.0, 0.0, 1.0], // col3
            ],
        }
    }

    fn from_matrix(m: Mat4) -> Self {
        Self { view_proj: m.to_cols_array_2d() }
    }

    /// Back to a `glam` matrix, mostly for projecting points in tests and tooling.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view_proj)
    }
}

/// Smallest zoom the projection will use; below this the matrix degenerates.
const PROJECTION_MIN_ZOOM: f32 = 0.01;

/// 2D orthographic camera over a y-up world.
///
/// All mutators only touch the raw fields and mark the camera dirty; the
/// combined transform is recomputed by [`Camera::update`].
#[derive(Clone, Debug)]
pub struct Camera {
    /// World-space position the camera is centred on.
    pub position: Vec2,
    /// Visible-area multiplier (1.0 = 1:1, >1 shows more of the world, i.e. zooms out).
    pub zoom: f32,
    /// Rotation in degrees. Positive values turn the camera counter-clockwise,
    /// so the world appears to turn clockwise.
    pub rotation: f32,
    viewport_width: f32,
    viewport_height: f32,
    combined: CameraUniform,
    dirty: bool,
}

impl Camera {
    /// Camera centred on the viewport, so world `(0, 0)` sits at the
    /// bottom-left corner of the screen.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position: Vec2::new(viewport_width / 2.0, viewport_height / 2.0),
            zoom: 1.0,
            rotation: 0.0,
            viewport_width,
            viewport_height,
            combined: CameraUniform::identity_ortho(viewport_width, viewport_height),
            dirty: true,
        };
        camera.update();
        camera
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        self.dirty = true;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position += Vec2::new(dx, dy);
        self.dirty = true;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.dirty = true;
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
        self.dirty = true;
    }

    /// Adjust zoom by `delta`. Never goes below zero.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).max(0.0);
        self.dirty = true;
    }

    /// True when a mutation happened since the last [`Camera::update`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The transform computed by the most recent [`Camera::update`].
    pub fn combined(&self) -> CameraUniform {
        self.combined
    }

    /// Recompute the combined view-projection and clear the dirty flag.
    ///
    /// ```text
    /// combined = ortho(w·z, h·z) · Rz(-rotation) · T(-position)
    /// ```
    /// Calling this repeatedly without mutating the camera yields the same matrix.
    pub fn update(&mut self) -> CameraUniform {
        let z = self.zoom.max(PROJECTION_MIN_ZOOM);
        let half_w = self.viewport_width * z / 2.0;
        let half_h = self.viewport_height * z / 2.0;

        let projection = Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, -1.0, 1.0);
        let view = Mat4::from_rotation_z(-self.rotation.to_radians())
            * Mat4::from_translation(-Vec3::new(self.position.x, self.position.y, 0.0));

        self.combined = CameraUniform::from_matrix(projection * view);
        self.dirty = false;
        self.combined
    }

    /// Map a world-space point to normalised device coordinates using the
    /// last computed transform.
    pub fn world_to_ndc(&self, world: Vec2) -> Vec2 {
        let p = self.combined.matrix().project_point3(Vec3::new(world.x, world.y, 0.0));
        Vec2::new(p.x, p.y)
    }
}
