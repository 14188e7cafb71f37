//! Utility tests

use std::convert::TryFrom;

use quickcheck::TestResult;

use super::*;


#[test]
fn rows_len() {
    assert_eq!(ROWS.len(), GRID_HEIGHT as usize);
    assert_eq!(ROWS.count(), GRID_HEIGHT as usize);
    assert_eq!(ROWS.rfold(0, |c, _| c + 1), GRID_HEIGHT as usize);
}


#[test]
fn columns_len() {
    assert_eq!(COLUMNS.len(), GRID_WIDTH as usize);
    assert_eq!(COLUMNS.count(), GRID_WIDTH as usize);
    assert_eq!(COLUMNS.rfold(0, |c, _| c + 1), GRID_WIDTH as usize);
}


#[test]
fn complete_row_covers_all_columns() {
    let row = RowIndex::TOP_ROW;
    assert_eq!(complete_row(row).count(), GRID_WIDTH as usize);
    assert!(complete_row(row).all(|(r, _)| r == row));
}


#[quickcheck]
fn rows_forward(first: RowIndex, last: RowIndex) -> TestResult {
    if let Some(steps) = Step::steps_between(&first, &last) {
        let range = RangeInclusive::new(first, last);
        TestResult::from_bool(
            range.clone().nth(0) == Some(first) && range.clone().nth(steps) == Some(last)
        )
    } else {
        TestResult::discard()
    }
}


#[quickcheck]
fn rows_backward(first: RowIndex, last: RowIndex) -> TestResult {
    if let Some(steps) = Step::steps_between(&first, &last) {
        let range = RangeInclusive::new(first, last).rev();
        TestResult::from_bool(
            range.clone().nth(0) == Some(last) && range.clone().nth(steps) == Some(first)
        )
    } else {
        TestResult::discard()
    }
}


#[quickcheck]
fn step_and_back(row: RowIndex, col: ColumnIndex, dir: Direction) -> TestResult {
    let pos = (row, col);
    ((pos + dir).and_then(|p| p + reverse(dir)))
        .map(|back| TestResult::from_bool(back == pos))
        .unwrap_or_else(TestResult::discard)
}


#[quickcheck]
fn top_edge_is_impassable(col: ColumnIndex) -> bool {
    ((RowIndex::TOP_ROW, col) + Direction::Up).is_none()
}


#[quickcheck]
fn bottom_edge_is_impassable(col: ColumnIndex) -> bool {
    ((RowIndex::BOTTOM_ROW, col) + Direction::Down).is_none()
}


#[quickcheck]
fn side_edges_are_impassable(row: RowIndex) -> bool {
    ((row, ColumnIndex::LEFTMOST_COLUMN) + Direction::Left).is_none() &&
        ((row, ColumnIndex::RIGHTMOST_COLUMN) + Direction::Right).is_none()
}


#[test]
fn indexes_are_bounded() {
    assert!(RowIndex::try_from(GRID_HEIGHT as usize).is_err());
    assert!(ColumnIndex::try_from(GRID_WIDTH as usize).is_err());
    assert_eq!(RowIndex::try_from(0).ok(), Some(RowIndex::TOP_ROW));
    assert_eq!(ColumnIndex::try_from(0).ok(), Some(ColumnIndex::LEFTMOST_COLUMN));
}


/// Retrieve the direction opposite to the given one
///
fn reverse(dir: Direction) -> Direction {
    match dir {
        Direction::Up    => Direction::Down,
        Direction::Down  => Direction::Up,
        Direction::Left  => Direction::Right,
        Direction::Right => Direction::Left,
    }
}
