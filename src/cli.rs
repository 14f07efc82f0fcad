//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the log file from the config
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply moves without a UI and print the result
    Replay {
        /// Cells to play in order, 0-8 row-major (X moves first)
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        cells: Vec<u8>,

        /// Print the full timeline as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["tictactoe_timeline"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["tictactoe_timeline", "replay", "0", "4", "8", "--json"])
            .expect("parses");
        match cli.command {
            Some(Command::Replay { cells, json }) => {
                assert_eq!(cells, vec![0, 4, 8]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_cell_out_of_range() {
        assert!(Cli::try_parse_from(["tictactoe_timeline", "replay", "9"]).is_err());
    }

    #[test]
    fn test_play_config() {
        let cli = Cli::try_parse_from(["tictactoe_timeline", "play", "--config", "ttt.toml"])
            .expect("parses");
        match cli.command {
            Some(Command::Play { config, log_file }) => {
                assert_eq!(config, Some(PathBuf::from("ttt.toml")));
                assert!(log_file.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
