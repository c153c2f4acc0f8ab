//! Collision queries - can the active piece move or turn?
//!
//! All queries are pure: they inspect a piece against a grid and never mutate
//! either. Callers apply the move only when the query allows it.

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::types::MoveStatus;

/// Check if the piece can shift one column left
pub fn can_move_left(piece: &Piece, grid: &Grid) -> bool {
    if piece.col == 0 {
        return false;
    }

    // Any filled sub-cell directly right of a locked cell blocks the move
    !piece
        .cells()
        .any(|(row, col)| grid.is_occupied(row, col - 1))
}

/// Check if the piece can shift one column right
pub fn can_move_right(piece: &Piece, grid: &Grid) -> bool {
    if piece.col + piece.width() >= grid.width() {
        return false;
    }

    !piece
        .cells()
        .any(|(row, col)| grid.is_occupied(row, col + 1))
}

/// Check whether the piece can fall one row
///
/// Reaching the floor is always [`MoveStatus::HitsBottom`]. Resting on a
/// locked cell is [`MoveStatus::HitsTop`] while the piece is still at row 0
/// (it could not leave the spawn row) and [`MoveStatus::HitsBottom`] otherwise.
pub fn can_move_down(piece: &Piece, grid: &Grid) -> MoveStatus {
    if piece.row + piece.height() >= grid.height() {
        return MoveStatus::HitsBottom;
    }

    if piece
        .cells()
        .any(|(row, col)| grid.is_occupied(row + 1, col))
    {
        if piece.row == 0 {
            return MoveStatus::HitsTop;
        }
        return MoveStatus::HitsBottom;
    }

    MoveStatus::CanMove
}

/// Check if the piece can turn clockwise where it stands
///
/// The rotated bounding box has to fit inside the grid from the current anchor
/// and must not overlap locked cells. No kicks are tried.
pub fn can_rotate(piece: &Piece, grid: &Grid) -> bool {
    let rotated = piece.rotated_mask();

    if piece.col + rotated.width() > grid.width() {
        return false;
    }
    if piece.row + rotated.height() > grid.height() {
        return false;
    }

    let blocked = rotated
        .filled_cells()
        .any(|(r, c)| grid.is_occupied(piece.row + r, piece.col + c));
    !blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Color, ShapeKind};

    fn empty() -> Grid {
        Grid::new(10, 20)
    }

    #[test]
    fn left_wall_blocks() {
        let piece = Piece::new(ShapeKind::T, Color::Red).at(5, 0);
        assert!(!can_move_left(&piece, &empty()));
        let piece = piece.at(5, 1);
        assert!(can_move_left(&piece, &empty()));
    }

    #[test]
    fn right_wall_blocks() {
        // T is 3 wide: rightmost valid column is 7
        let piece = Piece::new(ShapeKind::T, Color::Red).at(5, 7);
        assert!(!can_move_right(&piece, &empty()));
        let piece = piece.at(5, 6);
        assert!(can_move_right(&piece, &empty()));
    }

    #[test]
    fn locked_neighbour_blocks_sideways() {
        let mut grid = empty();
        grid.set(6, 3, Cell::Filled(Color::Grey));
        // T bottom row spans columns 4..=6 on row 6
        let piece = Piece::new(ShapeKind::T, Color::Red).at(5, 4);
        assert!(!can_move_left(&piece, &grid));
        assert!(can_move_right(&piece, &grid));
    }

    #[test]
    fn empty_cells_of_mask_do_not_collide() {
        let mut grid = empty();
        // T top row is 010: the cell left of its empty corner is irrelevant
        grid.set(5, 3, Cell::Filled(Color::Grey));
        let piece = Piece::new(ShapeKind::T, Color::Red).at(5, 4);
        assert!(can_move_left(&piece, &grid));
    }

    #[test]
    fn floor_is_hits_bottom() {
        let piece = Piece::new(ShapeKind::O, Color::Red).at(18, 0);
        assert_eq!(can_move_down(&piece, &empty()), MoveStatus::HitsBottom);
        let piece = piece.at(17, 0);
        assert_eq!(can_move_down(&piece, &empty()), MoveStatus::CanMove);
    }

    #[test]
    fn resting_on_stack_away_from_top_is_hits_bottom() {
        let mut grid = empty();
        grid.set(10, 0, Cell::Filled(Color::Grey));
        let piece = Piece::new(ShapeKind::O, Color::Red).at(8, 0);
        assert_eq!(can_move_down(&piece, &grid), MoveStatus::HitsBottom);
    }

    #[test]
    fn resting_on_stack_at_row_zero_is_hits_top() {
        let mut grid = empty();
        grid.set(2, 1, Cell::Filled(Color::Grey));
        let piece = Piece::new(ShapeKind::O, Color::Red).at(0, 0);
        assert_eq!(can_move_down(&piece, &grid), MoveStatus::HitsTop);
    }

    #[test]
    fn floor_wins_over_top_when_grid_is_shallow() {
        let grid = Grid::new(10, 2);
        let piece = Piece::new(ShapeKind::O, Color::Red).at(0, 0);
        assert_eq!(can_move_down(&piece, &grid), MoveStatus::HitsBottom);
    }

    #[test]
    fn rotation_rejected_at_right_wall() {
        // Vertical I at the last column would lie flat across 4 columns
        let piece = Piece::new(ShapeKind::I, Color::Cyan).at(0, 9);
        assert!(!can_rotate(&piece, &empty()));
        let piece = piece.at(0, 6);
        assert!(can_rotate(&piece, &empty()));
    }

    #[test]
    fn rotation_rejected_at_floor() {
        let mut piece = Piece::new(ShapeKind::I, Color::Cyan).at(19, 0);
        piece.rotate();
        // Lying flat on the bottom row; standing up would need 4 rows
        assert!(!can_rotate(&piece, &empty()));
    }

    #[test]
    fn rotation_rejected_on_overlap() {
        let mut grid = empty();
        grid.set(1, 2, Cell::Filled(Color::Grey));
        let piece = Piece::new(ShapeKind::I, Color::Cyan).at(1, 0);
        assert!(!can_rotate(&piece, &grid));
    }

    #[test]
    fn rotate_query_does_not_mutate() {
        let piece = Piece::new(ShapeKind::L, Color::Blue).at(3, 3);
        let before = piece.clone();
        let _ = can_rotate(&piece, &empty());
        assert_eq!(piece, before);
    }
}
