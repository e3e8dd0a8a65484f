/// wire3d Core Library - Geometry generation and wireframe rasterization
///
/// This library builds point clouds, edge lists and triangle lists in a
/// growable point buffer, and draws them into any pixel sink with an integer
/// line rasterizer and a backface cull.

pub mod buffer;
pub mod curve;
pub mod error;
pub mod grid;
pub mod line;
pub mod mesh;
pub mod render;
pub mod sink;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use buffer::PointBuffer;
pub use curve::{add_circle, add_curve, curve_coefficients, CurveKind};
pub use error::{Error, Result};
pub use grid::SurfaceGrid;
pub use line::{draw_line, line_pixels};
pub use mesh::{add_box, add_sphere, add_torus};
pub use render::{triangle_normal, Renderer};
pub use sink::{Color, PixelSink};
pub use surface::{generate_sphere, generate_torus};
pub use transform::{RotationState, Transform};
