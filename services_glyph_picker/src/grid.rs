//! Two-dimensional navigation over the filtered list
//!
//! The filtered list is laid out row-major in rows of `columns` cells. A
//! position is a linear index into that list. Movement clamps at the list
//! edges and never wraps; moving up from the first row leaves the grid.

/// Arrow direction inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Result of one navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStep {
    /// Focus moves to this index
    Focus(usize),
    /// Focus leaves the grid for the search field
    ExitToBuffer,
    /// Nothing to do (edge reached, or no focus for this direction)
    Stay,
}

/// Stateless row/column arithmetic for a fixed row width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridNavigator {
    columns: usize,
}

impl GridNavigator {
    /// Zero columns is treated as one
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    pub fn column_of(&self, index: usize) -> usize {
        index % self.columns
    }

    /// Number of rows needed for `count` cells
    pub fn row_count(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// One step from `current` in a list of `count` cells.
    ///
    /// With no current focus only `Down` does anything: it enters the grid
    /// at index 0.
    pub fn step(&self, current: Option<usize>, count: usize, direction: GridDirection) -> GridStep {
        if count == 0 {
            return match current {
                Some(_) => GridStep::ExitToBuffer,
                None => GridStep::Stay,
            };
        }

        let last = count - 1;
        let Some(index) = current.map(|index| index.min(last)) else {
            return match direction {
                GridDirection::Down => GridStep::Focus(0),
                _ => GridStep::Stay,
            };
        };

        let target = match direction {
            GridDirection::Left => index.saturating_sub(1),
            GridDirection::Right => (index + 1).min(last),
            GridDirection::Down => (index + self.columns).min(last),
            GridDirection::Up => {
                if index < self.columns {
                    return GridStep::ExitToBuffer;
                }
                index - self.columns
            }
        };

        if Some(target) == current {
            GridStep::Stay
        } else {
            GridStep::Focus(target)
        }
    }
}
