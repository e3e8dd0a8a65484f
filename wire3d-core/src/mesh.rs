/// Triangle stitching for spheres, tori and boxes
use nalgebra::Point3;

use crate::buffer::PointBuffer;
use crate::grid::SurfaceGrid;
use crate::surface::{generate_sphere, generate_torus};

/// Append the triangles of a sphere to `polygons`.
///
/// Each grid cell between two neighbouring rings becomes up to two triangles.
/// The first triangle is skipped on the first column and the second one on
/// the last column, where the cell collapses onto a pole.
pub fn add_sphere(polygons: &mut PointBuffer, center: Point3<f64>, r: f64, steps: usize) {
    let points = generate_sphere(center, r, steps);
    let grid = SurfaceGrid::sphere(steps);

    for lat in 0..steps {
        for longt in 0..steps {
            let index = grid.at(lat, longt);

            let p0 = index;
            let p1 = index + 1;
            let p2 = grid.wrap(index + grid.stride());
            let p3 = grid.wrap(index + grid.stride() + 1);

            if longt != 0 {
                polygons.add_polygon(points.point(p0), points.point(p3), points.point(p2));
            }
            if longt != steps - 1 {
                polygons.add_polygon(points.point(p0), points.point(p1), points.point(p3));
            }
        }
    }
}

/// Append the triangles of a torus to `polygons`.
///
/// Both parameter directions wrap: the last ring connects to the first, and
/// the last sample of a ring connects back to the first sample of that ring.
pub fn add_torus(polygons: &mut PointBuffer, center: Point3<f64>, r1: f64, r2: f64, steps: usize) {
    let points = generate_torus(center, r1, r2, steps);
    let grid = SurfaceGrid::torus(steps);

    for lat in 0..steps {
        for longt in 0..steps {
            let index = grid.at(lat, longt);

            let p0 = index;
            let p1 = grid.wrap(index + grid.stride());
            let p2 = grid.wrap(index + grid.stride() + 1);
            let p3 = index + 1;
            let p4 = grid.wrap(p3);
            let p5 = grid.wrap(index - longt);

            if longt == steps - 1 {
                polygons.add_polygon(points.point(p0), points.point(p1), points.point(p4));
                polygons.add_polygon(points.point(p0), points.point(p4), points.point(p5));
            } else {
                polygons.add_polygon(points.point(p0), points.point(p1), points.point(p2));
                polygons.add_polygon(points.point(p0), points.point(p2), points.point(p3));
            }
        }
    }
}

/// Append the 12 triangles of a box whose upper-left-front corner is
/// `corner`. The box extends `width` along +x, `height` along -y and `depth`
/// along -z.
pub fn add_box(
    polygons: &mut PointBuffer,
    corner: Point3<f64>,
    width: f64,
    height: f64,
    depth: f64,
) {
    let (x0, y0, z0) = (corner.x, corner.y, corner.z);
    let x1 = x0 + width;
    let y1 = y0 - height;
    let z1 = z0 - depth;
    let p = Point3::new;

    // left
    polygons.add_polygon(p(x0, y0, z1), p(x0, y1, z1), p(x0, y0, z0));
    polygons.add_polygon(p(x0, y0, z0), p(x0, y1, z1), p(x0, y1, z0));
    // right
    polygons.add_polygon(p(x1, y0, z0), p(x1, y1, z0), p(x1, y0, z1));
    polygons.add_polygon(p(x1, y0, z1), p(x1, y1, z0), p(x1, y1, z1));

    // front
    polygons.add_polygon(p(x0, y0, z0), p(x0, y1, z0), p(x1, y0, z0));
    polygons.add_polygon(p(x1, y0, z0), p(x0, y1, z0), p(x1, y1, z0));
    // back
    polygons.add_polygon(p(x1, y0, z1), p(x1, y1, z1), p(x0, y0, z1));
    polygons.add_polygon(p(x0, y0, z1), p(x1, y1, z1), p(x0, y1, z1));

    // top
    polygons.add_polygon(p(x0, y0, z1), p(x0, y0, z0), p(x1, y0, z1));
    polygons.add_polygon(p(x1, y0, z1), p(x0, y0, z0), p(x1, y0, z0));
    // bottom
    polygons.add_polygon(p(x0, y1, z0), p(x0, y1, z1), p(x1, y1, z0));
    polygons.add_polygon(p(x1, y1, z0), p(x0, y1, z1), p(x1, y1, z1));
}
