use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "gpm-flatten")]
#[command(about = "Flatten a Google Play Music Takeout export into one CSV per collection")]
#[command(version)]
pub struct Cli {
    /// Location of the Google Takeout export
    #[arg(long, default_value = ".")]
    pub source: PathBuf,

    /// Where to store the flattened files
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["gpm-flatten"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("."));
        assert_eq!(cli.dest, PathBuf::from("."));
    }

    #[test]
    fn accepts_source_and_dest() {
        let cli = Cli::try_parse_from([
            "gpm-flatten",
            "--source",
            "/takeout/Google Play Music",
            "--dest",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.source, PathBuf::from("/takeout/Google Play Music"));
        assert_eq!(cli.dest, PathBuf::from("out"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["gpm-flatten", "--recursive"]).is_err());
    }
}
