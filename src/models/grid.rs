/// Bit-packed grid of barcode modules (true = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ModuleGrid {
    /// Create an all-light grid with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height + 7) / 8;
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a grid from nested rows of booleans.
    ///
    /// The grid is as wide as the longest row; cells missing from shorter
    /// rows read as light modules.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &dark) in row.iter().enumerate() {
                grid.set(x, y, dark);
            }
        }
        grid
    }

    /// Grid width in modules
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in modules
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has zero area
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Read the module at (x, y); out-of-range reads are light
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set the module at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        if dark {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Count of dark modules
    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|byte| byte.count_ones() as usize).sum()
    }
}
