//! Rotating GIF carousel on the proposal card

/// Carousel frames, shown in order
pub const CAROUSEL_IMAGES: [&str; 7] = ["1.gif", "2.gif", "3.gif", "4.gif", "5.gif", "6.gif", "7.gif"];

/// Time each image stays up
pub const CAROUSEL_INTERVAL_MS: i32 = 3000;

#[derive(Debug, Clone, Default)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        CAROUSEL_IMAGES[self.index]
    }

    /// Step to the next image, wrapping around
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % CAROUSEL_IMAGES.len();
        self.current()
    }
}
