use crate::types::Mark;

pub const CELL_COUNT: usize = 9;

/// The 3x3 grid, cells addressed 0..9 row-major (index = row * 3 + col).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn mark(&self, index: usize) -> Mark {
        self.cells[index]
    }

    /// Empty cells in ascending index order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Places a hypothetical mark, runs `f`, and clears the cell again before
    /// returning. All search code routes its trial placements through here so
    /// no exploration path can leave a probe mark behind.
    pub fn with_mark<T>(&mut self, index: usize, mark: Mark, f: impl FnOnce(&mut Board) -> T) -> T {
        debug_assert_eq!(self.cells[index], Mark::Empty);
        self.cells[index] = mark;
        let result = f(self);
        self.cells[index] = Mark::Empty;
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
