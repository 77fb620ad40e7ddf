// crate modules
use crate::error::{Error, Result};
use crate::precision::Precision;

/// Axes of a three-dimensional grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First dimension, varies fastest in file
    I,
    /// Second dimension
    J,
    /// Third dimension, varies slowest in file
    K,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::I => write!(f, "i"),
            Self::J => write!(f, "j"),
            Self::K => write!(f, "k"),
        }
    }
}

/// Logical dimensions of a decoded grid
///
/// All three dimensions are guaranteed to be non-zero, and the total byte
/// length of a grid with this shape is guaranteed to fit in a `usize` for
/// either [Precision].
///
/// The layout is Fortran column-major, so `i` varies fastest:
///
/// ```text
///     flat index = i + nx * (j + ny * k)
/// ```
///
/// ```rust
/// # use f90tools_binary::GridShape;
/// let shape = GridShape::new(2, 3, 4).unwrap();
///
/// assert_eq!(shape.number_of_elements(), 24);
/// assert_eq!(shape.flat_index(1, 0, 0), 1);
/// assert_eq!(shape.flat_index(0, 1, 0), 2);
/// assert_eq!(shape.flat_index(0, 0, 1), 6);
/// assert_eq!(shape.coordinates(23), (1, 2, 3));
///
/// // zero dimensions are not a grid
/// assert!(GridShape::new(2, 0, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridShape {
    /// Create a new shape from the three grid dimensions
    ///
    /// Fails with [Error::InvalidShape] if any dimension is zero or the grid
    /// could not be addressed in memory.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self> {
        let invalid = Error::InvalidShape { nx, ny, nz };

        if nx == 0 || ny == 0 || nz == 0 {
            return Err(invalid);
        }

        nx.checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .and_then(|n| n.checked_mul(Precision::MAX_WIDTH))
            .ok_or(invalid)?;

        Ok(Self { nx, ny, nz })
    }

    /// Number of points in i
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of points in j
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Number of points in k
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Number of points along any axis
    pub fn length(&self, axis: Axis) -> usize {
        match axis {
            Axis::I => self.nx,
            Axis::J => self.ny,
            Axis::K => self.nz,
        }
    }

    /// Total number of values in the grid
    pub fn number_of_elements(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Expected size of a file holding the full grid at `precision`
    pub fn byte_length(&self, precision: Precision) -> usize {
        self.number_of_elements() * precision.width()
    }

    /// True if (i,j,k) lies inside the grid
    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.nx && j < self.ny && k < self.nz
    }

    /// Column-major flat index for (i,j,k)
    ///
    /// No bounds checks are made, see [GridShape::contains()]. An index out of
    /// range on one axis silently wraps into the next.
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.nx * (j + self.ny * k)
    }

    /// Find the (i,j,k) indices for a column-major flat index
    ///
    /// The reverse of [GridShape::flat_index()].
    pub fn coordinates(&self, index: usize) -> (usize, usize, usize) {
        let i = index % self.nx;
        let j = (index / self.nx) % self.ny;
        let k = index / (self.nx * self.ny);
        (i, j, k)
    }

    /// Dimensions of the plane normal to `axis`, in (fast, slow) order
    pub(crate) fn plane_dimensions(&self, axis: Axis) -> (usize, usize) {
        match axis {
            Axis::I => (self.ny, self.nz),
            Axis::J => (self.nx, self.nz),
            Axis::K => (self.nx, self.ny),
        }
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}
