//! Command-line arguments.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "klondike",
    version,
    about = "Klondike patience on the console",
    after_help = "Type KEY at the prompt for the list of game commands."
)]
pub struct KlondikeCli {
    /// Shuffle seed; a value that is not a number falls back to a time-based seed
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<String>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub show_config: bool,
}
