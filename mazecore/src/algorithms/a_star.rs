use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::{HashMap, HashSet};

use super::Path;
use crate::{dims::Dims, error::MazeError, grid::Grid};

/// A* shortest path search over the open edges of a grid.
///
/// Every edge costs 1 and the heuristic is the Manhattan distance to the goal, which never
/// overestimates, so the returned path is always a shortest one.
///
/// When several frontier cells share the lowest `f`, the one closer to the goal (lower `h`)
/// wins, and after that the one discovered first. The result for a given grid, start and goal
/// is therefore always the same path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Cells moved to the closed set.
    pub expanded: usize,
    /// Cells pushed to the frontier, including repeated pushes.
    pub discovered: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    pos: Dims,
    g: u32,
    h: u32,
    seq: usize,
}

impl Node {
    fn f(&self) -> u32 {
        self.g + self.h
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn heuristic(pos: Dims, goal: Dims) -> u32 {
    (goal - pos).abs_sum() as u32
}

impl AStar {
    /// Finds a shortest path from `start` to `goal`.
    ///
    /// Fails with [`MazeError::InvalidCell`] for cells outside of the grid and with
    /// [`MazeError::NoPathFound`] when the goal isn't reachable.
    pub fn solve(grid: &Grid, start: Dims, goal: Dims) -> Result<Path, MazeError> {
        Self::solve_with_stats(grid, start, goal).map(|(path, _)| path)
    }

    pub fn solve_with_stats(
        grid: &Grid,
        start: Dims,
        goal: Dims,
    ) -> Result<(Path, SolveStats), MazeError> {
        grid.check_cell(start)?;
        grid.check_cell(goal)?;

        let mut stats = SolveStats::default();
        let mut open = BinaryHeap::new();
        let mut closed = HashSet::new();
        let mut g_score = HashMap::new();
        let mut came_from = HashMap::new();

        g_score.insert(start, 0);
        open.push(Node {
            pos: start,
            g: 0,
            h: heuristic(start, goal),
            seq: 0,
        });
        stats.discovered += 1;

        while let Some(current) = open.pop() {
            // stale entry, the cell was already reached more cheaply
            if !closed.insert(current.pos) {
                continue;
            }

            if current.pos == goal {
                let path = reconstruct_path(&came_from, goal);
                log::debug!(
                    "found path {:?} -> {:?} of {} steps, expanded {} cells",
                    start,
                    goal,
                    path.steps(),
                    stats.expanded
                );
                return Ok((path, stats));
            }
            stats.expanded += 1;

            for (_, next) in grid.open_neighbors(current.pos) {
                if closed.contains(&next) {
                    continue;
                }

                let tentative = current.g + 1;
                if g_score.get(&next).map_or(true, |&g| tentative < g) {
                    g_score.insert(next, tentative);
                    came_from.insert(next, current.pos);
                    open.push(Node {
                        pos: next,
                        g: tentative,
                        h: heuristic(next, goal),
                        seq: stats.discovered,
                    });
                    stats.discovered += 1;
                }
            }
        }

        log::debug!(
            "no path {:?} -> {:?}, expanded {} cells",
            start,
            goal,
            stats.expanded
        );
        Err(MazeError::NoPathFound)
    }
}

fn reconstruct_path(came_from: &HashMap<Dims, Dims>, goal: Dims) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        cells.push(previous);
        current = previous;
    }
    cells.reverse();
    Path::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::DepthFirstSearch, progress::ProgressHandle};

    fn corridor(width: i32) -> Grid {
        let mut grid = Grid::new(width, 1).unwrap();
        for x in 1..width {
            grid.remove_wall_between(Dims(x - 1, 0), Dims(x, 0)).unwrap();
        }
        grid
    }

    #[test]
    fn start_is_goal() {
        let grid = DepthFirstSearch::generate(1, 1, Some(0), &ProgressHandle::new()).unwrap();
        let path = AStar::solve(&grid, Dims::ZERO, Dims::ZERO).unwrap();

        assert_eq!(path.cells(), &[Dims::ZERO]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn two_cells() {
        let grid = DepthFirstSearch::generate(2, 1, Some(0), &ProgressHandle::new()).unwrap();
        let path = AStar::solve(&grid, Dims(0, 0), Dims(1, 0)).unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path.cells(), &[Dims(0, 0), Dims(1, 0)]);
    }

    #[test]
    fn corridor_both_ways() {
        let grid = corridor(5);

        let there = AStar::solve(&grid, Dims(0, 0), Dims(4, 0)).unwrap();
        let back = AStar::solve(&grid, Dims(4, 0), Dims(0, 0)).unwrap();

        assert_eq!(there.steps(), 4);
        let mut reversed = back.cells().to_vec();
        reversed.reverse();
        assert_eq!(there.cells(), reversed.as_slice());
    }

    #[test]
    fn disconnected_regions() {
        // two corridors, (0..2, 0) and (0..2, 1), with nothing between them
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall_between(Dims(0, 0), Dims(1, 0)).unwrap();
        grid.remove_wall_between(Dims(0, 1), Dims(1, 1)).unwrap();

        assert_eq!(
            AStar::solve(&grid, Dims(0, 0), Dims(1, 1)),
            Err(MazeError::NoPathFound)
        );
        assert_eq!(AStar::solve(&grid, Dims(1, 1), Dims(0, 1)).unwrap().steps(), 1);
    }

    #[test]
    fn walls_block_the_search() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            AStar::solve(&grid, Dims(0, 0), Dims(0, 1)),
            Err(MazeError::NoPathFound)
        );
    }

    #[test]
    fn invalid_cells() {
        let grid = corridor(3);
        assert_eq!(
            AStar::solve(&grid, Dims(-1, 0), Dims(0, 0)),
            Err(MazeError::InvalidCell(Dims(-1, 0)))
        );
        assert_eq!(
            AStar::solve(&grid, Dims(0, 0), Dims(0, 1)),
            Err(MazeError::InvalidCell(Dims(0, 1)))
        );
    }

    #[test]
    fn tie_break() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall_between(Dims(0, 0), Dims(1, 0)).unwrap();
        grid.remove_wall_between(Dims(0, 0), Dims(0, 1)).unwrap();
        grid.remove_wall_between(Dims(1, 0), Dims(1, 1)).unwrap();
        grid.remove_wall_between(Dims(0, 1), Dims(1, 1)).unwrap();

        // east is discovered before south, both are equally far from the goal
        let path = AStar::solve(&grid, Dims(0, 0), Dims(1, 1)).unwrap();
        assert_eq!(path.cells(), &[Dims(0, 0), Dims(1, 0), Dims(1, 1)]);
    }

    #[test]
    fn repeated_solves_match() {
        let grid = DepthFirstSearch::generate(30, 20, Some(8), &ProgressHandle::new()).unwrap();
        let first = AStar::solve(&grid, Dims(3, 17), Dims(28, 1)).unwrap();
        for _ in 0..5 {
            assert_eq!(AStar::solve(&grid, Dims(3, 17), Dims(28, 1)).unwrap(), first);
        }
    }

    #[test]
    fn stats() {
        let grid = corridor(6);
        let (path, stats) = AStar::solve_with_stats(&grid, Dims(0, 0), Dims(5, 0)).unwrap();

        assert_eq!(path.steps(), 5);
        assert_eq!(stats.expanded, 5);
        assert_eq!(stats.discovered, 6);
    }
}
