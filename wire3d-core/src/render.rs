/// Edge-list and backface-culled polygon drawing
use nalgebra::{Point3, Vector3};

use crate::buffer::PointBuffer;
use crate::error::{Error, Result};
use crate::line::draw_line;
use crate::sink::{Color, PixelSink};

/// Face normal of the triangle `(a, b, c)`, not normalized.
///
/// Points toward the side from which the vertices appear counter-clockwise.
pub fn triangle_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    (b - a).cross(&(c - a))
}

/// Draws point buffers into a [`PixelSink`] under a fixed orthographic view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    /// Direction from the scene toward the viewer
    pub view: Vector3<f64>,
}

impl Renderer {
    pub fn new(view: Vector3<f64>) -> Self {
        Self { view }
    }

    /// A face is visible only when its normal points strictly toward the
    /// viewer; faces seen edge-on are culled.
    pub fn is_visible(&self, normal: &Vector3<f64>) -> bool {
        normal.dot(&self.view) > 0.0
    }

    /// Draw every visible triangle of `polygons` as three edges, dropping z.
    /// Returns the number of triangles drawn.
    pub fn draw_polygons<S: PixelSink + ?Sized>(
        &self,
        polygons: &PointBuffer,
        sink: &mut S,
        color: Color,
    ) -> usize {
        let mut drawn = 0;
        let mut culled = 0;

        for [a, b, c] in polygons.triangles() {
            if !self.is_visible(&triangle_normal(&a, &b, &c)) {
                culled += 1;
                continue;
            }

            let (x0, y0) = project(&a);
            let (x1, y1) = project(&b);
            let (x2, y2) = project(&c);
            draw_line(sink, color, x0, y0, x1, y1);
            draw_line(sink, color, x1, y1, x2, y2);
            draw_line(sink, color, x2, y2, x0, y0);
            drawn += 1;
        }

        log::debug!("drew {} triangles, culled {}", drawn, culled);
        drawn
    }

    /// Draw every consecutive pair of points in `edges` as a line.
    ///
    /// Fails without drawing anything when there is not a single full pair.
    pub fn draw_lines<S: PixelSink + ?Sized>(
        &self,
        edges: &PointBuffer,
        sink: &mut S,
        color: Color,
    ) -> Result<()> {
        if edges.len() < 2 {
            log::warn!("need at least 2 points to draw a line, found {}", edges.len());
            return Err(Error::NotEnoughPoints { found: edges.len() });
        }

        for [p0, p1] in edges.edges() {
            let (x0, y0) = project(&p0);
            let (x1, y1) = project(&p1);
            draw_line(sink, color, x0, y0, x1, y1);
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 0.0, 1.0))
    }
}

/// Orthographic projection onto the pixel grid, truncating toward zero
fn project(point: &Point3<f64>) -> (i32, i32) {
    (point.x as i32, point.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::add_box;

    fn triangle(points: [(f64, f64, f64); 3]) -> PointBuffer {
        let mut buffer = PointBuffer::new(3);
        let [a, b, c] = points.map(|(x, y, z)| Point3::new(x, y, z));
        buffer.add_polygon(a, b, c);
        buffer
    }

    #[test]
    fn test_counter_clockwise_triangle_is_drawn() {
        let polygons = triangle([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 0.0)]);
        let mut plotted: Vec<(i32, i32)> = Vec::new();

        let drawn = Renderer::default().draw_polygons(&polygons, &mut plotted, Color::WHITE);
        assert_eq!(drawn, 1);
        assert!(plotted.contains(&(0, 0)));
        assert!(plotted.contains(&(4, 0)));
        assert!(plotted.contains(&(0, 4)));
        assert!(plotted.contains(&(2, 2)));
    }

    #[test]
    fn test_clockwise_triangle_is_culled() {
        let polygons = triangle([(0.0, 0.0, 0.0), (0.0, 4.0, 0.0), (4.0, 0.0, 0.0)]);
        let mut plotted: Vec<(i32, i32)> = Vec::new();

        let drawn = Renderer::default().draw_polygons(&polygons, &mut plotted, Color::WHITE);
        assert_eq!(drawn, 0);
        assert!(plotted.is_empty());
    }

    #[test]
    fn test_edge_on_triangle_is_culled() {
        // lies in the xz plane, normal is perpendicular to the view
        let polygons = triangle([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 0.0, 4.0)]);
        let mut plotted: Vec<(i32, i32)> = Vec::new();

        assert_eq!(Renderer::default().draw_polygons(&polygons, &mut plotted, Color::WHITE), 0);
        assert!(plotted.is_empty());
    }

    #[test]
    fn test_view_direction_is_configurable() {
        let polygons = triangle([(0.0, 0.0, 0.0), (0.0, 4.0, 0.0), (4.0, 0.0, 0.0)]);
        let mut plotted: Vec<(i32, i32)> = Vec::new();

        let renderer = Renderer::new(Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(renderer.draw_polygons(&polygons, &mut plotted, Color::WHITE), 1);
    }

    #[test]
    #[rustfmt::skip]
    fn test_edges_drawn_in_order() {
        let polygons = triangle([(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (0.0, 2.0, 0.0)]);
        let mut plotted: Vec<(i32, i32)> = Vec::new();
        Renderer::default().draw_polygons(&polygons, &mut plotted, Color::WHITE);

        assert_eq!(
            plotted,
            vec![
                (0, 0), (1, 0), (2, 0),
                (0, 2), (1, 1), (2, 0),
                (0, 2), (0, 1), (0, 0),
            ]
        );
    }

    #[test]
    fn test_box_front_view_draws_half_the_faces() {
        let mut polygons = PointBuffer::new(0);
        add_box(&mut polygons, Point3::new(10.0, 50.0, 10.0), 20.0, 20.0, 20.0);
        let mut plotted: Vec<(i32, i32)> = Vec::new();

        // only the two front triangles face +z
        let drawn = Renderer::default().draw_polygons(&polygons, &mut plotted, Color::WHITE);
        assert_eq!(drawn, 2);
    }

    #[test]
    fn test_draw_lines_needs_two_points() {
        let mut edges = PointBuffer::new(0);
        let mut plotted: Vec<(i32, i32)> = Vec::new();
        let renderer = Renderer::default();

        assert_eq!(
            renderer.draw_lines(&edges, &mut plotted, Color::WHITE),
            Err(Error::NotEnoughPoints { found: 0 })
        );
        edges.add_point(1.0, 1.0, 0.0);
        assert_eq!(
            renderer.draw_lines(&edges, &mut plotted, Color::WHITE),
            Err(Error::NotEnoughPoints { found: 1 })
        );
        assert!(plotted.is_empty());
    }

    #[test]
    fn test_draw_lines_ignores_cull() {
        let mut edges = PointBuffer::new(0);
        edges.add_edge(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0));
        edges.add_edge(Point3::new(0.0, 5.0, -9.0), Point3::new(0.0, 7.0, 9.0));
        let mut plotted: Vec<(i32, i32)> = Vec::new();

        Renderer::default()
            .draw_lines(&edges, &mut plotted, Color::WHITE)
            .unwrap();
        assert_eq!(
            plotted,
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (0, 5), (0, 6), (0, 7)]
        );
    }

    #[test]
    fn test_projection_truncates_toward_zero() {
        assert_eq!(project(&Point3::new(2.9, -2.9, 100.0)), (2, -2));
    }
}
