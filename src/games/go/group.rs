use crate::board::Player;
use crate::games::tile::Tile;

/// A maximal set of same-color stones connected through 4-adjacency, together with its
/// liberty count.
///
/// Groups are derived data: they are recomputed from a grid snapshot on demand and never
/// stored, so there is no incremental state that could drift out of sync with the board.
/// The stone order follows the flood fill and is deterministic for a given board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Group {
    pub color: Player,
    pub stones: Vec<Tile>,
    /// The number of distinct empty tiles adjacent to any stone in this group.
    /// A group with zero liberties is dead.
    pub liberties: u16,
}

impl Group {
    pub fn stone_count(&self) -> u16 {
        self.stones.len() as u16
    }
}

/// Flood fill the group containing the stone at `start`.
/// Returns `None` if `start` is empty. Pure function of the grid snapshot.
pub(super) fn compute_group(grid: &[Option<Player>], size: u8, start: Tile) -> Option<Group> {
    let color = grid[start.index(size)]?;

    // two parallel visit maps: one for member stones, one so each empty tile
    // is only counted as a liberty once
    let mut member = vec![false; grid.len()];
    let mut counted = vec![false; grid.len()];

    let mut stones = vec![];
    let mut liberties = 0;
    let mut todo = vec![start];
    member[start.index(size)] = true;

    while let Some(curr) = todo.pop() {
        stones.push(curr);

        for adj in curr.all_adjacent(size) {
            let index = adj.index(size);
            match grid[index] {
                None => {
                    if !counted[index] {
                        counted[index] = true;
                        liberties += 1;
                    }
                }
                Some(adj_color) => {
                    if adj_color == color && !member[index] {
                        member[index] = true;
                        todo.push(adj);
                    }
                }
            }
        }
    }

    Some(Group {
        color,
        stones,
        liberties,
    })
}
