//! Read-only view of a two-color bitmap.

/// A rectangular grid of dark/light modules.
///
/// Renderers only ever call `is_dark` with `x < width()` and `y < height()`.
pub trait Grid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Whether the module at column `x`, row `y` is dark.
    fn is_dark(&self, x: usize, y: usize) -> bool;
}

impl<G: Grid + ?Sized> Grid for &G {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn is_dark(&self, x: usize, y: usize) -> bool {
        (**self).is_dark(x, y)
    }
}

/// Owned row-major bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BitGrid {
    /// An all-light grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Build a grid from rows of `'#'` (dark) and any other char (light).
    ///
    /// Returns `None` if the rows differ in length.
    ///
    /// ```
    /// use termqr::{BitGrid, Grid};
    ///
    /// let g = BitGrid::from_rows(&["#.", ".#"]).unwrap();
    /// assert!(g.is_dark(0, 0));
    /// assert!(!g.is_dark(1, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            cells.extend(row.chars().map(|c| c == '#'));
        }
        Some(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        assert!(x < self.width && y < self.height, "({}, {}) out of bounds", x, y);
        self.cells[y * self.width + x] = dark;
    }
}

impl Grid for BitGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_dark(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }
}
