use smallvec::SmallVec;

use crate::{array::Array2D, dims::Dims, error::MazeError};

use super::cell::{Cell, CellWall};

/// Neighbors of a single cell, at most one per direction.
pub type Neighbors = SmallVec<[(CellWall, Dims); 4]>;

/// Rectangular grid of cells connected by removable walls.
///
/// Walls always disappear in pairs, so a cell is open towards its neighbor
/// exactly when the neighbor is open back towards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
}

impl Grid {
    /// Creates a fully walled grid.
    pub fn new(width: i32, height: i32) -> Result<Grid, MazeError> {
        let size = Dims(width, height);
        let mut cells = Array2D::new_dims(Cell::new(Dims::ZERO), size)
            .ok_or_else(|| MazeError::invalid_dimension(width, height))?;

        for pos in Dims::iter_fill(Dims::ZERO, size) {
            cells[pos] = Cell::new(pos);
        }

        Ok(Grid { cells })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> i32 {
        self.size().0
    }

    pub fn height(&self) -> i32 {
        self.size().1
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.get(pos).is_some()
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn check_cell(&self, pos: Dims) -> Result<&Cell, MazeError> {
        self.get_cell(pos).ok_or(MazeError::InvalidCell(pos))
    }

    /// Returns the wall of `cell` facing `cell2`, if they are orthogonal neighbors.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        CellWall::from_coord(cell2 - cell)
    }

    /// In-bounds neighbors, walls are not taken into account.
    pub fn neighbors(&self, cell: Dims) -> Neighbors {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| (wall, cell + wall.to_coord()))
            .filter(|&(_, pos)| self.is_in_bounds(cell) && self.is_in_bounds(pos))
            .collect()
    }

    /// Neighbors reachable through an open edge.
    pub fn open_neighbors(&self, cell: Dims) -> Neighbors {
        self.neighbors(cell)
            .into_iter()
            .filter(|&(wall, _)| self.has_open_edge(cell, wall))
            .collect()
    }

    pub fn has_open_edge(&self, cell: Dims, wall: CellWall) -> bool {
        match self.get_cell(cell) {
            Some(c) => c.is_open(wall) && self.is_in_bounds(cell + wall.to_coord()),
            None => false,
        }
    }

    /// Removes the wall between two adjacent cells on both sides.
    ///
    /// Nothing is touched unless both cells exist and share a wall.
    pub fn remove_wall_between(&mut self, cell: Dims, cell2: Dims) -> Result<(), MazeError> {
        self.check_cell(cell)?;
        self.check_cell(cell2)?;
        let wall =
            Self::which_wall_between(cell, cell2).ok_or(MazeError::NotAdjacent(cell, cell2))?;

        self.cells[cell].remove_wall(wall);
        self.cells[cell2].remove_wall(wall.reverse_wall());
        Ok(())
    }

    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) -> Result<(), MazeError> {
        let neighbor = cell + wall.to_coord();
        self.check_cell(cell)?;
        self.check_cell(neighbor)?;
        self.remove_wall_between(cell, neighbor)
    }

    /// Number of open edges, every edge is counted once.
    pub fn open_edge_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [CellWall::East, CellWall::South]
                    .into_iter()
                    .filter(|&wall| self.has_open_edge(pos, wall))
                    .count()
            })
            .sum()
    }

    /// Checks the walls are consistent between every pair of neighbors.
    pub fn first_asymmetric_wall(&self) -> Option<(Dims, CellWall)> {
        self.cells.iter_pos().find_map(|pos| {
            [CellWall::East, CellWall::South]
                .into_iter()
                .filter_map(|wall| {
                    let other = self.get_cell(pos + wall.to_coord())?;
                    (self.cells[pos].is_open(wall) != other.is_open(wall.reverse_wall()))
                        .then_some((pos, wall))
                })
                .next()
        })
    }

    /// Number of cells reachable from `from` through open edges.
    pub fn reachable_count(&self, from: Dims) -> usize {
        if !self.is_in_bounds(from) {
            return 0;
        }

        let Dims(w, h) = self.size();
        let mut seen = Array2D::new(false, w as usize, h as usize);
        let mut stack = vec![from];
        seen[from] = true;
        let mut count = 0;

        while let Some(pos) = stack.pop() {
            count += 1;
            for (_, next) in self.open_neighbors(pos) {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }

        count
    }

    /// A perfect maze has exactly one simple path between every two cells.
    pub fn is_perfect(&self) -> bool {
        self.first_asymmetric_wall().is_none()
            && self.open_edge_count() + 1 == self.cell_count()
            && self.reachable_count(Dims::ZERO) == self.cell_count()
    }
}
