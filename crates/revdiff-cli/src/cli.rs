use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "revdiff",
    about = "Side-by-side comparison of two file revisions",
    version,
)]
pub struct Cli {
    /// Path to the older revision
    pub old: PathBuf,

    /// Path to the newer revision
    pub new: PathBuf,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Split lines on CRLF instead of LF
    #[arg(long)]
    pub crlf: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_paths() {
        let cli = Cli::try_parse_from(["revdiff", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.old, PathBuf::from("a.txt"));
        assert_eq!(cli.new, PathBuf::from("b.txt"));
        assert!(!cli.crlf);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["revdiff", "a", "b", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_crlf() {
        let cli = Cli::try_parse_from(["revdiff", "a", "b", "--crlf"]).unwrap();
        assert!(cli.crlf);
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["revdiff", "-v", "a", "b"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn missing_paths_is_an_error() {
        assert!(Cli::try_parse_from(["revdiff", "only-one"]).is_err());
    }
}
