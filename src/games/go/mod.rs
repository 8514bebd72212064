pub use board::*;
pub use group::*;
pub use io::*;

pub use crate::games::tile::{Direction, Tile, MAX_BOARD_SIZE};

mod board;
mod group;
mod io;
