use std::{fs, io::Read as _, path::Path as FsPath, path::PathBuf};

use mazecore::{
    grid::draw, parse_size, AStar, DepthFirstSearch, Dims, Grid, MazeError, Point,
};
use thiserror::Error;

use crate::{
    cli::{Format, GenerateArgs, SizeArgs, SolveArgs},
    jobs::RunningJob,
    settings::Settings,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Maze(#[from] MazeError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error; {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings in {path:?}; {source}")]
    Config {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("maze of {cells} cells is over the limit of {max} cells")]
    TooLarge { cells: u64, max: u64 },
    #[error("maze generation crashed")]
    GenerationPanicked,
}

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Generates a maze and renders it in the requested format.
    pub fn generate(&self, args: &GenerateArgs) -> Result<String, AppError> {
        let grid = self.build_maze(&args.size)?;

        Ok(match args.format {
            Format::Json => grid.to_json(args.pretty || self.settings.get_pretty())?,
            Format::Text => grid.to_string(),
        })
    }

    /// Solves a loaded or freshly generated maze.
    ///
    /// An unreachable goal isn't an error, the JSON output is just an empty path.
    pub fn solve(&self, args: &SolveArgs) -> Result<String, AppError> {
        let grid = match &args.input {
            Some(input) => load_maze(input)?,
            None => self.build_maze(&args.size)?,
        };

        let start = args.from.unwrap_or(Dims::ZERO);
        let goal = args.to.unwrap_or(grid.size() - Dims(1, 1));
        let path = match AStar::solve(&grid, start, goal) {
            Ok(path) => Some(path),
            Err(MazeError::NoPathFound) => {
                log::warn!("there is no path from {:?} to {:?}", start, goal);
                None
            }
            Err(err) => return Err(err.into()),
        };

        Ok(match args.format {
            Format::Json => {
                let points: Vec<Point> = path.map(|p| p.into_points()).unwrap_or_default();
                if args.pretty || self.settings.get_pretty() {
                    serde_json::to_string_pretty(&points)?
                } else {
                    serde_json::to_string(&points)?
                }
            }
            Format::Text => draw::render(&grid, path.as_ref()),
        })
    }

    fn size(&self, args: &SizeArgs) -> Result<Dims, AppError> {
        let width = args
            .width
            .clone()
            .unwrap_or_else(|| self.settings.get_default_width().to_string());
        let height = args
            .height
            .clone()
            .unwrap_or_else(|| self.settings.get_default_height().to_string());
        let size = parse_size(&width, &height)?;

        let cells = size.0 as u64 * size.1 as u64;
        let max = self.settings.get_max_cells();
        if cells > max {
            return Err(AppError::TooLarge { cells, max });
        }

        Ok(size)
    }

    /// Generates on a worker thread, the grid is handed out only once carving is done.
    fn build_maze(&self, args: &SizeArgs) -> Result<Grid, AppError> {
        let Dims(width, height) = self.size(args)?;
        let seed = args.seed.or(self.settings.get_seed());

        let job = RunningJob::spawn(move |progress| {
            DepthFirstSearch::generate(width, height, seed, &progress)
        });

        let grid = job
            .wait(self.settings.get_progress_interval(), |progress| {
                log::info!("generating: {:.0}%", progress.percent() * 100.0);
            })
            .ok_or(AppError::GenerationPanicked)??;

        log::info!("generated {}x{} maze", width, height);
        Ok(grid)
    }
}

fn load_maze(input: &FsPath) -> Result<Grid, AppError> {
    let json = if input == FsPath::new("-") {
        let mut json = String::new();
        std::io::stdin().read_to_string(&mut json)?;
        json
    } else {
        fs::read_to_string(input)?
    };

    Ok(Grid::from_json(&json)?)
}
