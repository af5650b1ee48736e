use clap::{CommandFactory, Parser};
use mazegen::{
    app::{App, AppError},
    cli::{Args, Command},
    logging,
    settings::Settings,
};

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&config_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = config_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", config_path);
        }
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&config_path)?;
    logging::init(logging::level(args.verbose, settings.get_log_level()));
    log::debug!("settings loaded from {:?}", config_path);

    let app = App::new(settings);
    let output = match &args.command {
        Some(Command::Generate(generate)) => app.generate(generate)?,
        Some(Command::Solve(solve)) => app.solve(solve)?,
        None => {
            Args::command().print_help()?;
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
