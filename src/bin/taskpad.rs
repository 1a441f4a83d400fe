use anyhow::Result;
use chrono::Local;
use clap::Parser;
use taskpad::cli::{self, Cli, Command};
use taskpad::config::Config;
use taskpad::context::{AppContext, StandardContext};
use taskpad::controller::TaskController;
use taskpad::import;

fn main() -> Result<()> {
    let args = Cli::parse();
    let ctx = StandardContext::new(args.root.clone());

    // Answered before touching config or logs so it works with a broken config.
    if args.command == Some(Command::ConfigPath) {
        println!("{}", Config::get_path_string(&ctx)?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_default(&ctx)?,
    };
    if args.lenient {
        config.validation = false;
    }

    if let Err(e) = taskpad::logging::init(&ctx, config.log_level_filter()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    log::debug!("Starting taskpad v{}", env!("CARGO_PKG_VERSION"));

    let mut controller = TaskController::from_config(&config);
    if let Some(path) = args.import.as_ref().or(config.import_file.as_ref()) {
        let report = import::import_file(&mut controller, path, config.default_priority)?;
        for (title, err) in &report.rejected {
            eprintln!("Skipped '{}': {}", title, err);
        }
    }

    match &args.command {
        Some(command) => {
            let today = Local::now().date_naive();
            for line in cli::execute(command, &mut controller, &config, today)? {
                println!("{}", line);
            }
            Ok(())
        }
        None => run_interactive(&ctx, controller, config),
    }
}

#[cfg(feature = "tui")]
fn run_interactive(ctx: &dyn AppContext, controller: TaskController, config: Config) -> Result<()> {
    taskpad::tui::run(ctx, controller, config)
}

#[cfg(not(feature = "tui"))]
fn run_interactive(
    _ctx: &dyn AppContext,
    _controller: TaskController,
    _config: Config,
) -> Result<()> {
    use clap::CommandFactory;
    Cli::command().print_help()?;
    Ok(())
}
