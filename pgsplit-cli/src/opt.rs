use std::{
    fmt::{self, Display},
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};

use crate::error::CliError;

/// Splits files of SQL statements into individual statements.
#[derive(Parser, Debug)]
#[command(name = "pgsplit", version, about)]
pub struct Opt {
    /// SQL files to split. Standard input is read when no file or `-` is given.
    pub inputs: Vec<PathBuf>,

    /// How the statements are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Written after every statement in `plain` format.
    #[arg(long, default_value = ";\n\n")]
    pub separator: String,

    /// Do not load a `.env` file from the current directory.
    #[arg(long)]
    pub no_dotenv: bool,
}

impl Opt {
    pub(crate) fn sources(&self) -> Vec<Source<'_>> {
        if self.inputs.is_empty() {
            return vec![Source::Stdin];
        }

        self.inputs
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Source::Stdin
                } else {
                    Source::File(path)
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Statements followed by the separator.
    Plain,
    /// A JSON document per input.
    Json,
    /// The number of statements per input.
    Count,
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Source<'a> {
    Stdin,
    File(&'a Path),
}

impl Source<'_> {
    /// Reads the whole input, taking [`Source::Stdin`] from `stdin`.
    pub(crate) fn read<R: Read>(self, stdin: R) -> Result<String, CliError> {
        let content = match self {
            Source::Stdin => io::read_to_string(stdin),
            Source::File(path) => fs::read_to_string(path),
        };

        content.map_err(|source| CliError::Read {
            input: self.to_string(),
            source,
        })
    }
}

impl Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_valid() {
        Opt::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let opt = Opt::try_parse_from(["pgsplit"]).unwrap();

        assert!(opt.inputs.is_empty());
        assert_eq!(opt.format, OutputFormat::Plain);
        assert_eq!(opt.separator, ";\n\n");
        assert!(!opt.no_dotenv);
        assert!(matches!(opt.sources().as_slice(), [Source::Stdin]));
    }

    #[test]
    fn test_parse_all() {
        let opt = Opt::try_parse_from([
            "pgsplit",
            "--format",
            "json",
            "--separator",
            "\n",
            "--no-dotenv",
            "a.sql",
            "-",
        ])
        .unwrap();

        assert_eq!(opt.format, OutputFormat::Json);
        assert_eq!(opt.separator, "\n");
        assert!(opt.no_dotenv);

        let sources = opt.sources();
        assert!(matches!(sources.as_slice(), [Source::File(_), Source::Stdin]));
        assert_eq!(sources[0].to_string(), "a.sql");
        assert_eq!(sources[1].to_string(), "<stdin>");
    }

    #[test]
    fn test_invalid_format() {
        assert!(Opt::try_parse_from(["pgsplit", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("this/file/does/not/exist.sql");
        let err = Source::File(&path).read(io::empty()).unwrap_err();

        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().starts_with("could not read this/file/does/not/exist.sql"));
    }

    #[test]
    fn test_read_stdin() {
        let sql = Source::Stdin.read("SELECT 1;".as_bytes()).unwrap();
        assert_eq!(sql, "SELECT 1;");
    }

    #[test]
    fn test_read_stdin_invalid_utf8() {
        let err = Source::Stdin.read(&b"SELECT '\xff';"[..]).unwrap_err();

        assert!(matches!(err, CliError::Read { ref input, .. } if input == "<stdin>"));
    }
}
