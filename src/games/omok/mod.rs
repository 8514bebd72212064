pub use board::*;
pub use io::*;

pub use crate::games::tile::{Tile, MAX_BOARD_SIZE};

mod board;
mod io;
