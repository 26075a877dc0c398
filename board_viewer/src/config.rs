//! Env parsing for the board source.

use std::path::Path;

use crate::board::{self, Board};

const BOARD_FILE_ENV: &str = "BOARD_FILE";

/// Returns the board named by `BOARD_FILE`, or the built-in demo board when
/// the variable is unset or the file cannot be loaded.
pub fn board_from_env() -> Board {
    if let Ok(path) = std::env::var(BOARD_FILE_ENV) {
        match board::load_board(Path::new(&path)) {
            Ok(board) => return board,
            Err(err) => eprintln!("cuboard: ignoring {BOARD_FILE_ENV}={path:?}: {err}"),
        }
    }
    Board::demo()
}
