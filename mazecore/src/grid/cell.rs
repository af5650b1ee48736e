use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::dims::Dims;

bitflags! {
    /// Walls still standing around a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const NORTH = 0b0001;
        const EAST = 0b0010;
        const SOUTH = 0b0100;
        const WEST = 0b1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellWall {
    North,
    East,
    South,
    West,
}

impl CellWall {
    /// Offset to the neighbor behind this wall.
    pub const fn to_coord(self) -> Dims {
        match self {
            Self::North => Dims(0, -1),
            Self::East => Dims(1, 0),
            Self::South => Dims(0, 1),
            Self::West => Dims(-1, 0),
        }
    }

    pub const fn reverse_wall(self) -> CellWall {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    pub const fn flag(self) -> Walls {
        match self {
            Self::North => Walls::NORTH,
            Self::East => Walls::EAST,
            Self::South => Walls::SOUTH,
            Self::West => Walls::WEST,
        }
    }

    /// Order used for neighbor enumeration, export and search expansion.
    pub const fn get_in_order() -> [CellWall; 4] {
        [Self::North, Self::East, Self::South, Self::West]
    }

    pub fn from_coord(offset: Dims) -> Option<CellWall> {
        Self::get_in_order()
            .into_iter()
            .find(|wall| wall.to_coord() == offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: Walls,
    coord: Dims,
}

impl Cell {
    /// Fully enclosed cell.
    pub fn new(coord: Dims) -> Cell {
        Cell {
            walls: Walls::all(),
            coord,
        }
    }

    pub(crate) fn with_walls(coord: Dims, walls: Walls) -> Cell {
        Cell { walls, coord }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        self.walls.remove(wall.flag());
    }

    pub fn has_wall(&self, wall: CellWall) -> bool {
        self.walls.contains(wall.flag())
    }

    /// Only says the wall is gone, whether a neighbor exists is up to the grid.
    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.has_wall(wall)
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn wall_list(&self) -> Vec<CellWall> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.has_wall(wall))
            .collect()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.bits().count_ones() as usize
    }

    pub fn coord(&self) -> Dims {
        self.coord
    }
}
