/// Index arithmetic over a sampled parametric surface
///
/// A rotation-major grid of surface samples.
///
/// Samples are stored ring by ring: `rings` rows of `stride` points each.
/// Indices that run past the last ring wrap back to the first one, which
/// closes the surface around its axis of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGrid {
    rings: usize,
    stride: usize,
}

impl SurfaceGrid {
    pub fn new(rings: usize, stride: usize) -> Self {
        Self { rings, stride }
    }

    /// Grid of a sphere sampled with `steps` rotations. Each semicircle keeps
    /// both poles, so rows hold `steps + 1` samples.
    pub fn sphere(steps: usize) -> Self {
        Self::new(steps, steps + 1)
    }

    /// Grid of a torus sampled with `steps` rotations of `steps` samples
    pub fn torus(steps: usize) -> Self {
        Self::new(steps, steps)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.rings * self.stride
    }

    /// Flat index of sample `col` on ring `ring`, without wrapping
    pub fn at(&self, ring: usize, col: usize) -> usize {
        ring * self.stride + col
    }

    /// Wrap a flat index back into the grid
    pub fn wrap(&self, index: usize) -> usize {
        index % self.total()
    }
}
