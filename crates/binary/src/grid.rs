// standard library
use std::ops::Index;

// crate modules
use crate::element::Element;
use crate::error::{Error, Result};
use crate::precision::Precision;
use crate::shape::{Axis, GridShape};

// f90tools modules
use f90tools_utils::{SliceExt, ValueExt};

// external crates
use itertools::iproduct;

/// Decoded three-dimensional grid of floating point values
///
/// Values are kept in the column-major order they were stored in, and every
/// (i,j,k) accessor maps through [GridShape::flat_index()]:
///
/// ```text
///     flat index = i + nx * (j + ny * k)
/// ```
///
/// The underlying buffer is therefore **not** in the row-major order that
/// most array types default to. Use the accessors rather than indexing
/// [Grid::values()] with a row-major formula.
///
/// ```rust
/// # use f90tools_binary::{decode, Grid, GridShape};
/// let bytes: Vec<u8> = [1.0_f32, 2.0, 3.0, 4.0]
///     .iter()
///     .flat_map(|v| v.to_ne_bytes())
///     .collect();
///
/// let shape = GridShape::new(2, 2, 1).unwrap();
/// let grid: Grid<f32> = decode(&bytes, shape).unwrap();
///
/// assert_eq!(grid[(0, 0, 0)], 1.0);
/// assert_eq!(grid[(1, 0, 0)], 2.0);
/// assert_eq!(grid[(0, 1, 0)], 3.0);
/// assert_eq!(grid[(1, 1, 0)], 4.0);
/// assert_eq!(grid.get(2, 0, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    shape: GridShape,
    values: Vec<T>,
}

impl<T: Element> Grid<T> {
    /// Wrap a column-major buffer already checked against `shape`
    pub(crate) fn from_column_major(shape: GridShape, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), shape.number_of_elements());
        Self { shape, values }
    }

    /// Logical dimensions of the grid
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Precision the values were decoded at
    pub fn precision(&self) -> Precision {
        T::PRECISION
    }

    /// Total number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, as a [GridShape] can not have zero dimensions
    ///
    /// Only provided to pair with [Grid::len()].
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flat view of all values in column-major order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Take ownership of the column-major values
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Value at (i,j,k), or `None` if outside of the grid
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<T> {
        if self.shape.contains(i, j, k) {
            self.values.get(self.shape.flat_index(i, j, k)).copied()
        } else {
            None
        }
    }

    /// Iterate over ((i,j,k), value) pairs in storage order
    ///
    /// ```rust
    /// # use f90tools_binary::{decode, Grid, GridShape};
    /// # let bytes: Vec<u8> = (0..6).flat_map(|v| (v as f64).to_ne_bytes()).collect();
    /// # let grid: Grid<f64> = decode(&bytes, GridShape::new(3, 2, 1).unwrap()).unwrap();
    /// let mut entries = grid.iter_indexed();
    /// assert_eq!(entries.next(), Some(((0, 0, 0), 0.0)));
    /// assert_eq!(entries.next(), Some(((1, 0, 0), 1.0)));
    /// ```
    pub fn iter_indexed(&self) -> impl Iterator<Item = ((usize, usize, usize), T)> + '_ {
        let shape = self.shape;
        iproduct!(0..shape.nz(), 0..shape.ny(), 0..shape.nx())
            .map(move |(k, j, i)| ((i, j, k), self.values[shape.flat_index(i, j, k)]))
    }

    /// Extract the 2D plane normal to `axis` at `index`
    ///
    /// The plane keeps the two remaining axes in their original order, e.g. a
    /// plane normal to [Axis::K] is indexed by (i,j). Values in the plane are
    /// column-major as well, so the first remaining axis varies fastest.
    ///
    /// ```rust
    /// # use f90tools_binary::{decode, Axis, Grid, GridShape};
    /// # let bytes: Vec<u8> = (0..8).flat_map(|v| (v as f32).to_ne_bytes()).collect();
    /// let grid: Grid<f32> = decode(&bytes, GridShape::new(2, 2, 2).unwrap()).unwrap();
    ///
    /// let plane = grid.slice(Axis::K, 1).unwrap();
    /// assert_eq!(plane.dimensions(), (2, 2));
    /// assert_eq!(plane.values(), &[4.0_f32, 5.0, 6.0, 7.0]);
    ///
    /// assert!(grid.slice(Axis::K, 2).is_err());
    /// ```
    pub fn slice(&self, axis: Axis, index: usize) -> Result<Plane<T>> {
        let length = self.shape.length(axis);
        if index >= length {
            return Err(Error::IndexOutOfBounds {
                axis,
                index,
                length,
            });
        }

        let (n_fast, n_slow) = self.shape.plane_dimensions(axis);
        let values = iproduct!(0..n_slow, 0..n_fast)
            .map(|(b, a)| {
                let (i, j, k) = match axis {
                    Axis::I => (index, a, b),
                    Axis::J => (a, index, b),
                    Axis::K => (a, b, index),
                };
                self.values[self.shape.flat_index(i, j, k)]
            })
            .collect();

        Ok(Plane {
            axis,
            index,
            n_fast,
            n_slow,
            values,
        })
    }
}

impl<T: Element> Grid<T>
where
    [T]: SliceExt<T>,
{
    /// Smallest value in the grid, failing on NaN or infinite values
    pub fn try_min(&self) -> std::result::Result<T, f90tools_utils::Error> {
        self.values.try_min()
    }

    /// Largest value in the grid, failing on NaN or infinite values
    pub fn try_max(&self) -> std::result::Result<T, f90tools_utils::Error> {
        self.values.try_max()
    }
}

impl<T: Element> Index<(usize, usize, usize)> for Grid<T> {
    type Output = T;

    /// Panics if (i,j,k) is outside of the grid
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &Self::Output {
        assert!(
            self.shape.contains(i, j, k),
            "index ({i}, {j}, {k}) out of bounds for grid of shape {}",
            self.shape
        );
        &self.values[self.shape.flat_index(i, j, k)]
    }
}

impl<T: Element> std::fmt::Display for Grid<T>
where
    [T]: SliceExt<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let extreme = |value: std::result::Result<T, _>| match value {
            Ok(v) => v.sci(5, 2),
            Err(_) => "undefined".to_string(),
        };

        writeln!(f, "Grid {{")?;
        writeln!(f, "    shape: {} ({} values)", self.shape, self.len())?;
        writeln!(f, "    precision: {}", self.precision())?;
        writeln!(f, "    min: {}", extreme(self.try_min()))?;
        writeln!(f, "    max: {}", extreme(self.try_max()))?;
        write!(f, "}}")
    }
}

/// Two-dimensional plane taken from a [Grid]
///
/// Indexed by the two axes remaining after removing the plane normal, in
/// their original order. Values are column-major over (a,b), so `a` varies
/// fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T> {
    axis: Axis,
    index: usize,
    n_fast: usize,
    n_slow: usize,
    values: Vec<T>,
}

impl<T: Element> Plane<T> {
    /// Axis normal to the plane
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Position of the plane along its normal axis
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of points in (a,b)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.n_fast, self.n_slow)
    }

    /// Value at (a,b), or `None` if outside of the plane
    pub fn get(&self, a: usize, b: usize) -> Option<T> {
        if a < self.n_fast && b < self.n_slow {
            self.values.get(a + self.n_fast * b).copied()
        } else {
            None
        }
    }

    /// Flat view of all values, first axis fastest
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// Grid decoded at a precision chosen at runtime
///
/// Returned by [read_f90_bin()](crate::read_f90_bin) where the precision is
/// only known as a 4 or 8 byte selector.
#[derive(Debug, Clone, PartialEq)]
pub enum GridData {
    /// Values stored as 4 byte `real(4)`
    Single(Grid<f32>),
    /// Values stored as 8 byte `real(8)`
    Double(Grid<f64>),
}

impl GridData {
    /// Logical dimensions of the grid
    pub fn shape(&self) -> GridShape {
        match self {
            Self::Single(grid) => grid.shape(),
            Self::Double(grid) => grid.shape(),
        }
    }

    /// Precision the values were decoded at
    pub fn precision(&self) -> Precision {
        match self {
            Self::Single(_) => Precision::Single,
            Self::Double(_) => Precision::Double,
        }
    }

    /// Value at (i,j,k) widened to `f64`, or `None` if outside of the grid
    ///
    /// Widening from `f32` is exact, so no information is lost.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        match self {
            Self::Single(grid) => grid.get(i, j, k).map(Element::to_f64),
            Self::Double(grid) => grid.get(i, j, k),
        }
    }

    /// Borrow the single precision grid, if that is what was decoded
    pub fn as_single(&self) -> Option<&Grid<f32>> {
        match self {
            Self::Single(grid) => Some(grid),
            Self::Double(_) => None,
        }
    }

    /// Borrow the double precision grid, if that is what was decoded
    pub fn as_double(&self) -> Option<&Grid<f64>> {
        match self {
            Self::Single(_) => None,
            Self::Double(grid) => Some(grid),
        }
    }

    /// Convert into a double precision grid regardless of the source
    pub fn into_double(self) -> Grid<f64> {
        match self {
            Self::Single(grid) => {
                let shape = grid.shape();
                let values = grid.into_values().into_iter().map(f64::from).collect();
                Grid::from_column_major(shape, values)
            }
            Self::Double(grid) => grid,
        }
    }
}

impl std::fmt::Display for GridData {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Single(grid) => write!(f, "{grid}"),
            Self::Double(grid) => write!(f, "{grid}"),
        }
    }
}
