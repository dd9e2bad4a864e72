//! Command-line interface for tictactoe.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe::MAX_SIZE;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play one game of tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// How the board is shown and moves are entered
    #[arg(long, value_enum, default_value_t = Mode::Console)]
    pub mode: Mode,

    /// Side length of the board
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(1..=MAX_SIZE as i64)
    )]
    pub size: u8,

    /// File the result line is appended to
    #[arg(long, default_value = tictactoe::DEFAULT_RESULTS_FILE)]
    pub results: PathBuf,

    /// File log output is written to
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

/// Presentation modes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Type row and column numbers at prompts
    Console,
    /// Full-screen board, click a cell to move
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.mode, Mode::Console);
        assert_eq!(cli.size, 3);
        assert_eq!(cli.results, PathBuf::from("results.txt"));
    }

    #[test]
    fn test_size_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--size", "0"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--size", "33"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--size", "8589934592"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--size", "32"]).is_ok());
    }

    #[test]
    fn test_tui_mode() {
        let cli = Cli::try_parse_from(["tictactoe", "--mode", "tui", "--size", "4"]).unwrap();
        assert_eq!(cli.mode, Mode::Tui);
        assert_eq!(cli.size, 4);
    }
}
