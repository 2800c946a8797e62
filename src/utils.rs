//! Utility functions for building boards from a compact text format.
use crate::engine::{Board, BOARD_SIZE};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row of the board, top to bottom, written as
/// three digit characters: `'1'..='8'` for tiles and `'0'` for the blank.
/// All three rows must be present and exactly three characters wide, and the
/// nine digits together must use every value `0..=8` exactly once.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`), one per row, starting from
///   the top (row 0).
///
/// # Returns
/// * `Ok(Board)` if parsing succeeds.
/// * `Err(String)` if:
///     - The number of rows differs from `BOARD_SIZE`.
///     - Any row's character count differs from `BOARD_SIZE`.
///     - A character outside `'0'..='8'` is encountered.
///     - A tile value appears more than once.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["123", "456", "780"]).unwrap();
/// assert!(board.is_solved());
///
/// assert!(board_from_str_array(&["123", "456"]).is_err());
/// assert!(board_from_str_array(&["123", "456", "78X"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, String> {
    if s.len() != BOARD_SIZE {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            BOARD_SIZE,
            s.len()
        ));
    }

    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];

    for (r, row_str) in s.iter().enumerate() {
        if row_str.chars().count() != BOARD_SIZE {
            return Err(format!(
                "Row {} has {} characters (expected {})",
                r,
                row_str.chars().count(),
                BOARD_SIZE
            ));
        }

        for (c, char_tile) in row_str.chars().enumerate() {
            grid[r][c] = match char_tile.to_digit(10) {
                Some(digit) => digit as u8,
                None => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        char_tile, r, c
                    ))
                }
            };
        }
    }

    // from_grid enforces the each-value-exactly-once invariant.
    Board::from_grid(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["123", "405", "678"]).unwrap();
        assert_eq!(board.get_tile(0, 0), 1);
        assert_eq!(board.get_tile(1, 1), 0);
        assert_eq!(board.blank_position(), (1, 1));
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["123", "456", "78X"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized character 'X'"));
    }

    #[test]
    fn test_board_from_str_array_out_of_range_digit() {
        let result = board_from_str_array(&["123", "456", "789"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("out of range"));
    }

    #[test]
    fn test_board_from_str_array_duplicate_tile() {
        let result = board_from_str_array(&["123", "456", "788"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("more than once"));
    }

    #[test]
    fn test_board_from_str_array_wrong_row_count() {
        let result = board_from_str_array(&["123", "456"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid number of rows"));
    }

    #[test]
    fn test_board_from_str_array_row_too_long() {
        let result = board_from_str_array(&["1234", "567", "80"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 0 has 4 characters"));
    }
}
