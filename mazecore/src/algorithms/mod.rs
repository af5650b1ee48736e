mod a_star;
mod depth_first_search;

use crate::{dims::Dims, grid::Grid, grid::Point};

pub use a_star::{AStar, SolveStats};
pub use depth_first_search::DepthFirstSearch;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Cells from start to goal, both included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<Dims>);

impl Path {
    pub(crate) fn new(cells: Vec<Dims>) -> Self {
        Path(cells)
    }

    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges walked.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Dims> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Dims> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dims> {
        self.0.iter()
    }

    /// Checks every step of the path goes through an open edge of `grid`.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        self.0.iter().all(|&pos| grid.is_in_bounds(pos))
            && self.0.windows(2).all(|step| {
                Grid::which_wall_between(step[0], step[1])
                    .is_some_and(|wall| grid.has_open_edge(step[0], wall))
            })
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0.into_iter().map(Point::from).collect()
    }
}

impl IntoIterator for Path {
    type Item = Dims;
    type IntoIter = std::vec::IntoIter<Dims>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{Rng as _, SeedableRng as _};

    use super::*;
    use crate::{array::Array2D, progress::ProgressHandle};

    /// Plain breadth-first distances from `from`, independent of the solver.
    fn bfs_distances(grid: &Grid, from: Dims) -> Array2D<Option<usize>> {
        let mut dist = Array2D::new_dims(None, grid.size()).unwrap();
        let mut queue = VecDeque::from([from]);
        dist[from] = Some(0);

        while let Some(pos) = queue.pop_front() {
            let d = dist[pos].unwrap();
            for (_, next) in grid.open_neighbors(pos) {
                if dist[next].is_none() {
                    dist[next] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }

        dist
    }

    fn maze(width: i32, height: i32, seed: u64) -> Grid {
        DepthFirstSearch::generate(width, height, Some(seed), &ProgressHandle::new()).unwrap()
    }

    #[test]
    fn generated_mazes_are_perfect() {
        let mut rng = Random::seed_from_u64(7);
        for _ in 0..40 {
            let (w, h) = (rng.gen_range(1..16), rng.gen_range(1..16));
            let grid = maze(w, h, rng.gen());

            assert_eq!(grid.cell_count(), (w * h) as usize);
            assert_eq!(grid.open_edge_count(), grid.cell_count() - 1);
            assert_eq!(grid.first_asymmetric_wall(), None);
            for pos in Dims::iter_fill(Dims::ZERO, grid.size()) {
                assert_eq!(grid.reachable_count(pos), grid.cell_count());
            }
            assert!(grid.is_perfect());
        }
    }

    #[test]
    fn solver_agrees_with_bfs_on_all_pairs() {
        let grid = maze(7, 5, 1234);

        for from in Dims::iter_fill(Dims::ZERO, grid.size()) {
            let dist = bfs_distances(&grid, from);
            for to in Dims::iter_fill(Dims::ZERO, grid.size()) {
                let path = AStar::solve(&grid, from, to).unwrap();
                assert_eq!(Some(path.steps()), dist[to], "{from:?} -> {to:?}");
                assert_eq!(path.start(), Some(from));
                assert_eq!(path.goal(), Some(to));
                assert!(path.is_valid_on(&grid));
            }
        }
    }

    /// Grid with every wall removed, except those between cells `blocked` says no to.
    fn open_grid(width: i32, height: i32, blocked: impl Fn(Dims, Dims) -> bool) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for pos in Dims::iter_fill(Dims::ZERO, grid.size()) {
            for (_, next) in grid.neighbors(pos) {
                if !blocked(pos, next) && !blocked(next, pos) {
                    grid.remove_wall_between(pos, next).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn solver_is_optimal_with_loops() {
        let open = open_grid(6, 4, |_, _| false);
        // barrier between columns 2 and 3, except on the last row
        let barrier = open_grid(6, 4, |a, b| a.0 == 2 && b.0 == 3 && a.1 < 3);

        for grid in [open, barrier] {
            assert!(!grid.is_perfect());
            for from in Dims::iter_fill(Dims::ZERO, grid.size()) {
                let dist = bfs_distances(&grid, from);
                for to in Dims::iter_fill(Dims::ZERO, grid.size()) {
                    let path = AStar::solve(&grid, from, to).unwrap();
                    assert_eq!(Some(path.steps()), dist[to], "{from:?} -> {to:?}");
                    assert!(path.is_valid_on(&grid));
                }
            }
        }

        let barrier = open_grid(6, 4, |a, b| a.0 == 2 && b.0 == 3 && a.1 < 3);
        let detour = AStar::solve(&barrier, Dims(2, 0), Dims(3, 0)).unwrap();
        assert_eq!(detour.steps(), 7);
    }

    #[test]
    fn path_validation() {
        let grid = maze(2, 1, 0);
        assert!(Path::new(vec![Dims(0, 0), Dims(1, 0)]).is_valid_on(&grid));
        assert!(!Path::new(vec![Dims(0, 0), Dims(0, 0)]).is_valid_on(&grid));
        assert!(!Path::new(vec![Dims(1, 0), Dims(2, 0)]).is_valid_on(&grid));

        let closed = Grid::new(2, 1).unwrap();
        assert!(!Path::new(vec![Dims(0, 0), Dims(1, 0)]).is_valid_on(&closed));
    }
}
