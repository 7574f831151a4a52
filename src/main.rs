#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use chessgame::{init_logging, start_session, Menu, MenuChoice, StdoutSink};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Chess game menu", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Show the interactive menu (default).
    Menu,
    /// Start a game session immediately.
    Start,
    /// Show the rules.
    Rules,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut menu = Menu::new(StdoutSink);
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            log::info!("opening menu");
            let stdin = std::io::stdin();
            menu.run(stdin.lock())?;
        }
        Commands::Start => {
            start_session()?;
        }
        Commands::Rules => {
            menu.select(MenuChoice::Rules)?;
        }
    }
    Ok(())
}
