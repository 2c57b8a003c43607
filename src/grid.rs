use rand::Rng;

use crate::error::ConfigError;

/// Grid position in pixel-lattice coordinates.
///
/// Both coordinates are multiples of the grid's cell size while the cell
/// is on the lattice. Positive `y` points up.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this cell shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed-size discrete play-field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridModel {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl GridModel {
    /// Validates the extent and cell size and builds the grid.
    pub fn try_new(width: u32, height: u32, cell_size: u32) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        for extent in [width, height] {
            if extent % cell_size != 0 {
                return Err(ConfigError::Misaligned { extent, cell_size });
            }
        }

        let to_coordinate =
            |extent: u32| i32::try_from(extent).map_err(|_| ConfigError::ExtentTooLarge { extent });

        Ok(Self {
            width: to_coordinate(width)?,
            height: to_coordinate(height)?,
            cell_size: to_coordinate(cell_size)?,
        })
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn cell_size(self) -> i32 {
        self.cell_size
    }

    /// Number of cells along the horizontal axis.
    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells along the vertical axis.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns true iff `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn is_inside(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Returns true when both coordinates sit on the cell lattice.
    #[must_use]
    pub fn is_aligned(self, cell: Cell) -> bool {
        cell.x.rem_euclid(self.cell_size) == 0 && cell.y.rem_euclid(self.cell_size) == 0
    }

    /// Start cell of a new snake.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: self.align_down(self.width / 2),
            y: self.align_down(self.height / 2),
        }
    }

    /// Picks a uniformly random lattice cell inside the grid.
    #[must_use]
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        Cell {
            x: rng.gen_range(0..self.columns()) * self.cell_size,
            y: rng.gen_range(0..self.rows()) * self.cell_size,
        }
    }

    fn align_down(self, value: i32) -> i32 {
        value - value.rem_euclid(self.cell_size)
    }
}
