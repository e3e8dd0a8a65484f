/// Character-cell canvas for terminal output
use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{Color, PixelSink};

/// Glyph used for every lit cell
const PIXEL_GLYPH: char = '*';

/// A grid of terminal cells that receives pixels from the rasterizer.
///
/// Pixel `(0, 0)` is the bottom-left cell; y grows upward.
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![None; width * height];
    }

    /// Color of pixel `(x, y)`, if anything was plotted there
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.index(x as i32, y as i32).and_then(|i| self.cells[i])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        let row = self.height - 1 - y as usize;
        Some(row * self.width + x as usize)
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                match cell {
                    Some(color) => {
                        writer.queue(SetForegroundColor(TermColor::Rgb {
                            r: color.r,
                            g: color.g,
                            b: color.b,
                        }))?;
                        writer.queue(Print(PIXEL_GLYPH))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl PixelSink for AsciiCanvas {
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(color);
        }
    }
}
