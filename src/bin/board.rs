//! Standalone board printer: runs the game-start flow without the menu.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use chessgame::{init_logging, BoardState, Session, StdoutSink};
#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Print an initialized chess board", long_about = None)]
#[cfg(feature = "std")]
struct Args {
    /// Print the board state as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    if args.json {
        let board = BoardState::create();
        println!("{}", serde_json::to_string(&board)?);
    } else {
        Session::new(StdoutSink).start()?;
    }
    Ok(())
}
