#[cfg(any(feature = "game_go", feature = "game_omok"))]
pub mod tile;

#[cfg(feature = "game_go")]
pub mod go;

#[cfg(feature = "game_omok")]
pub mod omok;
