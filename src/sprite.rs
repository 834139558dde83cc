use crate::assets::AssetRegistry;
use crate::engine::{Point, Rect, Renderer, Size};

/// A drawable entity : named image asset + position + size
/// - holds the asset id, not the element, and resolves it through the
/// registry on every draw (the page owns the element, not the sprite)
/// - lives for the page's lifetime; there is no despawn
#[derive(Clone, Debug)]
pub struct Sprite {
    image: String,
    position: Point,
    size: Size,
}

impl Sprite {
    pub fn new(image: impl Into<String>) -> Self {
        Sprite {
            image: image.into(),
            position: Point::default(),
            size: Size::default(),
        }
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point { x, y };
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size { width, height };
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The exact destination rect the next draw call will use
    pub fn destination(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Blit the referenced image at the current position/size
    /// - one draw call per frame with exactly (x, y, width, height)
    /// - a missing or non-image asset is a skipped frame, not a panic
    pub fn draw(&self, renderer: &Renderer, assets: &AssetRegistry) {
        match assets.image(&self.image) {
            Ok(image) => renderer.draw_image(&image, &self.destination()),
            Err(err) => log!("Skipping draw for '{}' : {:#?}", self.image, err),
        }
    }
}
