//! Test tooling shared by the unit and integration tests.
pub mod board_gen;
pub mod bot_game;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A fixed-seed RNG so randomized tests fail reproducibly.
pub fn consistent_rng() -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(0)
}
