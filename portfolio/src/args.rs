//! Command-line arguments for the portfolio walker.
//!
//! The program takes no options of its own. Anything passed, including `--help`, `-V`
//! and non-UTF-8 text, is collected and ignored.
use clap::Parser;
use std::ffi::OsString;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    about = "Prints the constituents of a fixed portfolio",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Extra arguments. Accepted for compatibility and ignored.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub ignored: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_parse() {
        let args = Args::try_parse_from(["portfolio"]).unwrap();
        assert!(args.ignored.is_empty());
    }

    #[test]
    fn stray_arguments_are_collected() {
        let args = Args::try_parse_from(["portfolio", "foo", "--bar", "1"]).unwrap();
        assert_eq!(args.ignored, ["foo", "--bar", "1"]);
    }

    #[test]
    fn help_and_version_flags_are_plain_arguments() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let args = Args::try_parse_from(["portfolio", flag]).unwrap();
            assert_eq!(args.ignored, [flag]);
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_collected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"\xff\xfe");
        let args = Args::try_parse_from([OsStr::new("portfolio"), raw]).unwrap();
        assert_eq!(args.ignored, [raw.to_os_string()]);
    }
}
