use glam::Vec2;

/// Everything the renderer needs to draw the image as one rotated quad.
///
/// `position` is the bottom-left corner before rotation; the quad rotates
/// about `position + origin`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageQuad {
    pub position: Vec2,
    pub origin: Vec2,
    pub size: Vec2,
    pub scale: Vec2,
    /// Degrees, counter-clockwise.
    pub rotation: f32,
}

/// World placement of the displayed image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageTransform {
    pub position: Vec2,
    /// Degrees, counter-clockwise.
    pub angle: f32,
    origin: Vec2,
    size: Vec2,
}

impl ImageTransform {
    /// Image at the world origin, rotating about its centre.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
            origin: Vec2::new(width / 2.0, height / 2.0),
            size: Vec2::new(width, height),
        }
    }

    pub fn origin(&self) -> Vec2 { self.origin }
    pub fn size(&self) -> Vec2 { self.size }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position += Vec2::new(dx, dy);
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.angle += degrees;
    }

    pub fn quad(&self) -> ImageQuad {
        ImageQuad {
            position: self.position,
            origin: self.origin,
            size: self.size,
            scale: Vec2::ONE,
            rotation: self.angle,
        }
    }
}
