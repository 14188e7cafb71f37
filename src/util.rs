//! Core utilities

#[cfg(test)]
mod tests;


use std::convert::{TryFrom, TryInto};


pub const GRID_WIDTH: u8 = 8;
pub const GRID_HEIGHT: u8 = 6;


/// Row index type
///
/// Instances of this type serve as an index for a row in the grid. It
/// represents values from `0` (for the top row) to `5` (for the bottom row).
///
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct RowIndex {
    data: u8,
}

impl RowIndex {
    /// Index of the top row
    ///
    pub const TOP_ROW: Self = Self {data: 0};

    /// Index of the bottom row
    ///
    pub const BOTTOM_ROW: Self = Self {data: GRID_HEIGHT - 1};
}

impl From<RowIndex> for usize {
    fn from(index: RowIndex) -> Self {
        index.data.into()
    }
}

impl TryFrom<usize> for RowIndex {
    type Error = usize;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        value.try_into().ok().filter(|i| *i < GRID_HEIGHT).map(|data| Self {data}).ok_or(value)
    }
}


/// Column index type
///
/// Instances of this type serve as an index for a column in the grid. It
/// represents values from `0` (for the leftmost column) to `7` (for the
/// rightmost column).
///
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ColumnIndex {
    data: u8,
}

impl ColumnIndex {
    /// Index of the leftmost column
    ///
    pub const LEFTMOST_COLUMN: Self = Self {data: 0};

    /// Index of the rightmost column
    ///
    pub const RIGHTMOST_COLUMN: Self = Self {data: GRID_WIDTH - 1};
}

impl From<ColumnIndex> for usize {
    fn from(index: ColumnIndex) -> Self {
        index.data.into()
    }
}

impl TryFrom<usize> for ColumnIndex {
    type Error = usize;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        value.try_into().ok().filter(|i| *i < GRID_WIDTH).map(|data| Self {data}).ok_or(value)
    }
}


/// Position of a single tile, as a row-column pair
///
pub type Position = (RowIndex, ColumnIndex);


/// Range covering all rows, from top to bottom
///
pub const ROWS: RangeInclusive<RowIndex> =
    RangeInclusive::new(RowIndex::TOP_ROW, RowIndex::BOTTOM_ROW);


/// Range covering all columns, from left to right
///
pub const COLUMNS: RangeInclusive<ColumnIndex> =
    RangeInclusive::new(ColumnIndex::LEFTMOST_COLUMN, ColumnIndex::RIGHTMOST_COLUMN);


/// Retrieve an iterator over all positions of a given row
///
/// The iterator will yield the row's positions from left to right.
///
pub fn complete_row(row: RowIndex) -> impl Iterator<Item = Position> + Clone {
    COLUMNS.map(move |col| (row, col))
}


/// Direction of a single-tile step
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Compute the neighbouring position in a given direction
///
/// The addition yields `None` if the resulting position would lie outside
/// the grid, making all neighbour probes total.
///
impl std::ops::Add<Direction> for Position {
    type Output = Option<Position>;

    fn add(self, direction: Direction) -> Self::Output {
        let (row, col) = self;
        match direction {
            Direction::Up    => row.backward_checked(1).map(|row| (row, col)),
            Direction::Down  => row.forward_checked(1).map(|row| (row, col)),
            Direction::Left  => col.backward_checked(1).map(|col| (row, col)),
            Direction::Right => col.forward_checked(1).map(|col| (row, col)),
        }
    }
}


/// Project-specific partial predefinition of `std::iter::Step`
///
pub trait Step: Sized {
    /// Number of successor steps from start to end
    ///
    fn steps_between(start: &Self, end: &Self) -> Option<usize>;

    /// Checked integer addition
    ///
    /// This function returns an index for the `count`'th next row or column. If
    /// the resulting row or column would be outside the grid, the function
    /// returns `None`.
    ///
    fn forward_checked(self, count: usize) -> Option<Self>;

    /// Checked integer substraction
    ///
    /// This function returns an index for the `count`'th previous row or
    /// column. If the resulting row or column would be outside the grid, the
    /// function returns `None`.
    ///
    fn backward_checked(self, count: usize) -> Option<Self>;
}

impl<I> Step for I
    where I: TryFrom<usize> + Into<usize> + Clone
{
    fn steps_between(start: &Self, end: &Self) -> Option<usize> {
        end.clone().into().checked_sub(start.clone().into())
    }

    fn forward_checked(self, count: usize) -> Option<Self> {
        self.into().checked_add(count).and_then(|i| i.try_into().ok())
    }

    fn backward_checked(self, count: usize) -> Option<Self> {
        self.into().checked_sub(count).and_then(|i| i.try_into().ok())
    }
}


/// Inclusive range over index types
///
/// Unlike `std::ops::RangeInclusive`, this range is a double ended iterator
/// for any `Step` type, which allows iterating over rows from the bottom up.
///
#[derive(Copy, Clone, Debug)]
pub struct RangeInclusive<I> {
    start: I,
    end: I,
    exhausted: bool,
}

impl<I> RangeInclusive<I> {
    /// Create a new range from `start` to `end`, both inclusive
    ///
    pub const fn new(start: I, end: I) -> Self {
        Self {start, end, exhausted: false}
    }
}

impl<I: Step + Clone + PartialOrd> Iterator for RangeInclusive<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.start > self.end {
            return None
        }

        let res = self.start.clone();
        match res.clone().forward_checked(1) {
            Some(next) if res < self.end => self.start = next,
            _ => self.exhausted = true,
        }
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<I: Step + Clone + PartialOrd> DoubleEndedIterator for RangeInclusive<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.start > self.end {
            return None
        }

        let res = self.end.clone();
        match res.clone().backward_checked(1) {
            Some(prev) if self.start < res => self.end = prev,
            _ => self.exhausted = true,
        }
        Some(res)
    }
}

impl<I: Step + Clone + PartialOrd> ExactSizeIterator for RangeInclusive<I> {
    fn len(&self) -> usize {
        if self.exhausted {
            0
        } else {
            Step::steps_between(&self.start, &self.end).map(|s| s + 1).unwrap_or(0)
        }
    }
}

impl<I: Step + Clone + PartialOrd> std::iter::FusedIterator for RangeInclusive<I> {}
