use std::fmt::{self, Write};

use hashbrown::HashSet;

use crate::{algorithms::Path, dims::Dims};

use super::{CellWall, Grid};

const CORNER: char = '+';
const WALL_H: &str = "--";
const WALL_V: char = '|';
const EMPTY: &str = "  ";
const MARK: &str = "**";

/// Draws the grid with ASCII characters, cells on `path` are filled in.
pub fn render(grid: &Grid, path: Option<&Path>) -> String {
    let mut out = String::new();
    let marked: HashSet<Dims> = path
        .map(|p| p.cells().iter().copied().collect())
        .unwrap_or_default();
    // writing into a String can't fail
    let _ = draw(&mut out, grid, &marked);
    out
}

fn draw(out: &mut impl Write, grid: &Grid, marked: &HashSet<Dims>) -> fmt::Result {
    let Dims(w, h) = grid.size();
    let wall_at = |pos: Dims, wall: CellWall| {
        grid.get_cell(pos).map_or(true, |cell| cell.has_wall(wall))
    };

    for y in 0..h {
        for x in 0..w {
            out.write_char(CORNER)?;
            let top = wall_at(Dims(x, y), CellWall::North);
            out.write_str(if top { WALL_H } else { EMPTY })?;
        }
        out.write_char(CORNER)?;
        out.write_char('\n')?;

        for x in 0..w {
            let pos = Dims(x, y);
            let left = wall_at(pos, CellWall::West);
            out.write_char(if left { WALL_V } else { ' ' })?;
            out.write_str(if marked.contains(&pos) { MARK } else { EMPTY })?;
        }
        let right = wall_at(Dims(w - 1, y), CellWall::East);
        out.write_char(if right { WALL_V } else { ' ' })?;
        out.write_char('\n')?;
    }

    for x in 0..w {
        out.write_char(CORNER)?;
        let bottom = wall_at(Dims(x, h - 1), CellWall::South);
        out.write_str(if bottom { WALL_H } else { EMPTY })?;
    }
    out.write_char(CORNER)?;
    out.write_char('\n')
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw(f, self, &HashSet::new())
    }
}
