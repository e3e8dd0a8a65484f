/// Pixel output seam between the rasterizer and a concrete canvas
///
/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Anything that can receive single pixels.
///
/// The rasterizer never bounds-checks, so implementations must ignore
/// coordinates that fall outside their surface.
pub trait PixelSink {
    fn plot(&mut self, x: i32, y: i32, color: Color);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        (**self).plot(x, y, color);
    }
}

/// Records every plotted pixel in order, duplicates included
impl PixelSink for Vec<(i32, i32)> {
    fn plot(&mut self, x: i32, y: i32, _color: Color) {
        self.push((x, y));
    }
}
