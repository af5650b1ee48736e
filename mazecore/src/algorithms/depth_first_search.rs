use std::time::Instant;

use hashbrown::HashSet;
use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};
use smallvec::SmallVec;

use super::Random;
use crate::{dims::Dims, error::MazeError, grid::Grid, progress::ProgressHandle};

/// Randomized depth-first carving, also known as the recursive backtracker.
///
/// Produces a spanning tree of the grid, so there is exactly one path between any two cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Creates a fully walled grid and carves it.
    ///
    /// Without a seed one is drawn from the thread rng and logged, so the maze can be
    /// regenerated later.
    pub fn generate(
        width: i32,
        height: i32,
        seed: Option<u64>,
        progress: &ProgressHandle,
    ) -> Result<Grid, MazeError> {
        let grid = Grid::new(width, height)?;
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        let start = Instant::now();
        let grid = Self::generate_with_rng(grid, &mut rng, progress);
        log::debug!(
            "generated {}x{} maze with seed {} in {:?}",
            width,
            height,
            seed,
            start.elapsed()
        );

        Ok(grid)
    }

    /// Carves passages into `grid`, starting at the top left cell.
    ///
    /// Walls already missing are left alone, but the result is only guaranteed to be a
    /// perfect maze for a fully walled grid.
    pub fn generate_with_rng(mut grid: Grid, rng: &mut Random, progress: &ProgressHandle) -> Grid {
        let cell_count = grid.cell_count();
        progress.lock().from = cell_count;

        let mut visited = HashSet::with_capacity(cell_count);
        let mut stack: Vec<Dims> = Vec::with_capacity(cell_count);

        let mut current = Dims::ZERO;
        visited.insert(current);

        loop {
            let unvisited_neighbors = grid
                .neighbors(current)
                .into_iter()
                .map(|(_, pos)| pos)
                .filter(|pos| !visited.contains(pos))
                .collect::<SmallVec<[_; 4]>>();

            if let Some(&next) = unvisited_neighbors.choose(rng) {
                stack.push(current);
                let removed = grid.remove_wall_between(current, next);
                debug_assert!(removed.is_ok(), "neighbors always share a wall");
                visited.insert(next);
                current = next;
                progress.lock().done = visited.len();
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }

        progress.lock().finish();

        grid
    }
}
