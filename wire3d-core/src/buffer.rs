/// Growable column buffer of homogeneous points
use nalgebra::{Matrix4, Point3, Vector4};

/// One column of the buffer: `[x, y, z, w]`
pub type Column = [f64; 4];

/// Append-only table of homogeneous points `(x, y, z, 1)`.
///
/// The buffer keeps an allocated `capacity` separate from the number of
/// occupied columns. The same container serves three purposes depending on
/// how callers read it back: a point cloud, an edge list (every 2 columns form
/// a segment) or a polygon list (every 3 columns form a triangle).
#[derive(Debug, Clone, PartialEq)]
pub struct PointBuffer {
    columns: Vec<Column>,
    used: usize,
}

impl PointBuffer {
    /// Number of columns added each time a full buffer grows
    pub const GROWTH_STEP: usize = 100;

    /// Create an empty buffer with room for `capacity` columns
    pub fn new(capacity: usize) -> Self {
        Self {
            columns: vec![[0.0; 4]; capacity],
            used: 0,
        }
    }

    /// Number of occupied columns
    pub fn len(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Number of allocated columns
    pub fn capacity(&self) -> usize {
        self.columns.len()
    }

    /// Forget every point but keep the allocation
    pub fn clear(&mut self) {
        self.used = 0;
    }

    /// Append the point `(x, y, z, 1)`, growing by [`Self::GROWTH_STEP`]
    /// columns when the buffer is full
    pub fn add_point(&mut self, x: f64, y: f64, z: f64) {
        if self.used == self.capacity() {
            self.grow(self.used + Self::GROWTH_STEP);
        }

        self.columns[self.used] = [x, y, z, 1.0];
        self.used += 1;
    }

    /// Append the segment from `p0` to `p1`
    pub fn add_edge(&mut self, p0: Point3<f64>, p1: Point3<f64>) {
        self.add_point(p0.x, p0.y, p0.z);
        self.add_point(p1.x, p1.y, p1.z);
    }

    /// Append the triangle `(p0, p1, p2)` in that winding order
    pub fn add_polygon(&mut self, p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) {
        self.add_point(p0.x, p0.y, p0.z);
        self.add_point(p1.x, p1.y, p1.z);
        self.add_point(p2.x, p2.y, p2.z);
    }

    /// Raw column `index`. Panics if `index >= len()`.
    pub fn column(&self, index: usize) -> Column {
        self.occupied()[index]
    }

    /// Column `index` as a cartesian point
    pub fn point(&self, index: usize) -> Point3<f64> {
        let [x, y, z, _] = self.column(index);
        Point3::new(x, y, z)
    }

    pub fn points(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.occupied()
            .iter()
            .map(|&[x, y, z, _]| Point3::new(x, y, z))
    }

    /// Consecutive column pairs; a trailing unpaired point is skipped
    pub fn edges(&self) -> impl Iterator<Item = [Point3<f64>; 2]> + '_ {
        self.occupied()
            .chunks_exact(2)
            .map(|pair| [to_point(&pair[0]), to_point(&pair[1])])
    }

    /// Consecutive column triples; trailing partial triangles are skipped
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        self.occupied()
            .chunks_exact(3)
            .map(|tri| [to_point(&tri[0]), to_point(&tri[1]), to_point(&tri[2])])
    }

    /// Multiply every occupied column by `matrix`
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        let used = self.used;
        for column in &mut self.columns[..used] {
            let v = matrix * Vector4::from(*column);
            *column = [v.x, v.y, v.z, v.w];
        }
    }

    fn occupied(&self) -> &[Column] {
        &self.columns[..self.used]
    }

    fn grow(&mut self, new_capacity: usize) {
        log::trace!(
            "growing point buffer from {} to {} columns",
            self.capacity(),
            new_capacity
        );
        self.columns.resize(new_capacity, [0.0; 4]);
    }
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}

fn to_point(column: &Column) -> Point3<f64> {
    Point3::new(column[0], column[1], column[2])
}
