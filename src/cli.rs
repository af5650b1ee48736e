use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use mazecore::Dims;

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazegen")]
pub struct Args {
    #[clap(long, global = true, help = "Use this settings file instead of the default one")]
    pub config: Option<PathBuf>,
    #[clap(long, action, help = "Show config path and quit")]
    pub show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    pub reset_config: bool,
    #[clap(short, long, action = ArgAction::Count, global = true, help = "Log more, can be repeated")]
    pub verbose: u8,
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a perfect maze and print it
    Generate(GenerateArgs),
    /// Find the shortest path through a maze
    Solve(SolveArgs),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Text,
}

#[derive(ClapArgs, Debug, Default)]
pub struct SizeArgs {
    #[clap(help = "Width of the maze in cells")]
    pub width: Option<String>,
    #[clap(help = "Height of the maze in cells")]
    pub height: Option<String>,
    #[clap(short, long, help = "Seed for reproducible mazes")]
    pub seed: Option<u64>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub size: SizeArgs,
    #[clap(short, long, action, help = "Pretty print the JSON")]
    pub pretty: bool,
    #[clap(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

#[derive(ClapArgs, Debug, Default)]
pub struct SolveArgs {
    #[clap(flatten)]
    pub size: SizeArgs,
    #[clap(
        short,
        long,
        conflicts_with_all = ["width", "height", "seed"],
        help = "Exported maze in JSON, `-` reads stdin"
    )]
    pub input: Option<PathBuf>,
    #[clap(long, value_parser = parse_point, help = "Start cell as X,Y [default: 0,0]")]
    pub from: Option<Dims>,
    #[clap(long, value_parser = parse_point, help = "Goal cell as X,Y [default: opposite corner]")]
    pub to: Option<Dims>,
    #[clap(short, long, action, help = "Pretty print the JSON")]
    pub pretty: bool,
    #[clap(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

pub fn parse_point(text: &str) -> Result<Dims, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {:?}", text))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|_| format!("{:?} is not an integer coordinate", v.trim()))
    };

    Ok(Dims(coord(x)?, coord(y)?))
}
