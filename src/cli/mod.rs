pub mod args;
pub mod swap;

use std::path::PathBuf;

use clap::Parser;

pub use args::SwapArgs;

/// palswap - Re-render an image with a different palette
///
/// SOURCE is indexed against palette SOURCE_INDEX (default 0) of the PALETTES
/// table, then drawn with palette TARGET_INDEX and written to DEST. Each
/// column of the table image is one palette.
#[derive(Parser, Debug)]
#[command(name = "palswap")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// SOURCE PALETTES [SOURCE_INDEX] TARGET_INDEX DEST
    #[arg(value_name = "ARGS")]
    pub tokens: Vec<String>,

    /// Suppress status output
    #[arg(long, short)]
    pub quiet: bool,

    /// Config file (default: palswap.yaml in the current directory, if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Run the swap without writing DEST
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_positional() {
        let cli = Cli::try_parse_from(["palswap", "a.png", "p.png", "2", "1", "out.png"]).unwrap();
        assert_eq!(cli.tokens, vec!["a.png", "p.png", "2", "1", "out.png"]);
        assert!(!cli.quiet);
        assert!(!cli.check);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "palswap", "-q", "--check", "-c", "swap.yaml", "a.png", "p.png", "1", "out.png",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert!(cli.check);
        assert_eq!(cli.config, Some(PathBuf::from("swap.yaml")));
        assert_eq!(cli.tokens.len(), 4);
    }

    #[test]
    fn test_cli_negative_index_reaches_parser() {
        let cli = Cli::try_parse_from(["palswap", "a.png", "p.png", "-1", "out.png"]).unwrap();
        assert_eq!(cli.tokens[2], "-1");
        assert!(SwapArgs::parse(&cli.tokens).is_err());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
