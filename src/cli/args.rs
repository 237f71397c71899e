//! Clap argument types.

use clap::Parser;

/// Simple calculator: prints the demo transcript.
///
/// Takes no arguments of its own; `--help` and `--version` are provided
/// by clap.
#[derive(Parser, Debug)]
#[command(
    name = "calculator",
    version = calculator::constants::VERSION,
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn no_arguments_parses() {
        assert!(Cli::try_parse_from(["calculator"]).is_ok());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["calculator", "--num1", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn positional_argument_is_rejected() {
        assert!(Cli::try_parse_from(["calculator", "20"]).is_err());
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = Cli::try_parse_from(["calculator", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn help_flag_short_circuits() {
        let err = Cli::try_parse_from(["calculator", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
