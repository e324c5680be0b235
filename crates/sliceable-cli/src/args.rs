use clap::Parser;
use sliceable_config::OutputFormat;

/// Apply a Python-style index or slice expression such as `2`, `4:`, `::-1`
/// or `-1::-2` to TEXT, or to each line of standard input when TEXT is absent.
///
/// Options left unset fall back to the config file.
#[derive(Debug, Parser)]
#[command(name = "slice", version)]
pub struct Args {
    /// Index or slice expression, e.g. `2`, `4:6` or `-1::-2`
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    pub expr: String,

    /// Text to slice; standard input is read when absent
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Print one JSON object per input
    #[arg(long, conflicts_with = "text_output")]
    pub json: bool,

    /// Print plain text
    #[arg(long = "text", id = "text_output")]
    pub text_output: bool,

    /// Slice standard input as a single text
    #[arg(long)]
    pub whole: bool,

    /// Encoding label attached to the input
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Write the effective options to the config file before slicing
    #[arg(long)]
    pub save_config: bool,
}

impl Args {
    /// The output format requested on the command line, if any.
    pub fn output(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else if self.text_output {
            Some(OutputFormat::Text)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("slice").chain(args.iter().copied()))
    }

    #[test]
    fn expression_and_text() {
        let args = parse(&["::-1", "Fòô Bàř"]).unwrap();
        assert_eq!(args.expr, "::-1");
        assert_eq!(args.text.as_deref(), Some("Fòô Bàř"));
        assert_eq!(args.output(), None);
    }

    #[test]
    fn negative_expression_is_not_an_option() {
        let args = parse(&["-1::-2"]).unwrap();
        assert_eq!(args.expr, "-1::-2");
        assert_eq!(args.text, None);

        let args = parse(&["-2", "-x-"]).unwrap();
        assert_eq!(args.expr, "-2");
        assert_eq!(args.text.as_deref(), Some("-x-"));
    }

    #[test]
    fn options_anywhere() {
        let args = parse(&["--json", "4:", "--encoding", "UTF-8", "--whole"]).unwrap();
        assert_eq!(args.expr, "4:");
        assert_eq!(args.output(), Some(OutputFormat::Json));
        assert_eq!(args.encoding.as_deref(), Some("UTF-8"));
        assert!(args.whole);
    }

    #[test]
    fn option_values_may_use_equals() {
        let args = parse(&["--encoding=LATIN2", "4:", "x"]).unwrap();
        assert_eq!(args.encoding.as_deref(), Some("LATIN2"));
        assert_eq!(args.expr, "4:");
        assert_eq!(args.text.as_deref(), Some("x"));
    }

    #[test]
    fn unknown_long_form_is_text() {
        let args = parse(&["0", "--x"]).unwrap();
        assert_eq!(args.expr, "0");
        assert_eq!(args.text.as_deref(), Some("--x"));
    }

    #[test]
    fn double_dash_ends_options() {
        let args = parse(&["--", "::", "--json"]).unwrap();
        assert_eq!(args.expr, "::");
        assert_eq!(args.text.as_deref(), Some("--json"));
        assert_eq!(args.output(), None);
    }

    #[test]
    fn text_flag_selects_plain_output() {
        assert_eq!(
            parse(&["--text", "1:"]).unwrap().output(),
            Some(OutputFormat::Text)
        );
    }

    #[test]
    fn usage_errors() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["--json", "--text", "1:"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
        assert_eq!(
            parse(&["1:", "a", "b"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse(&["1:", "--encoding"]).is_err());
    }

    #[test]
    fn help_is_not_an_error_exit() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
        assert_eq!(parse(&["1:", "a", "b"]).unwrap_err().exit_code(), 2);
    }
}
