//! Command-line input sources.
//!
//! The positional argument is either the text to process or a file whose
//! lines are processed one by one. Without an argument, lines are read from
//! standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Where the text to process comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Literal(String),
    /// A file, processed line by line
    File(PathBuf),
    /// Standard input, processed line by line
    Stdin,
}

impl InputSource {
    /// Resolves the positional argument.
    ///
    /// An argument naming an existing file is read as a file; any other
    /// argument is the text itself.
    pub fn resolve(arg: Option<&str>) -> Self {
        match arg {
            Some(arg) if Path::new(arg).is_file() => InputSource::File(PathBuf::from(arg)),
            Some(arg) => InputSource::Literal(arg.to_string()),
            None => InputSource::Stdin,
        }
    }

    /// Reads every line of the source.
    pub fn read_lines(&self) -> InputResult<Vec<String>> {
        match self {
            InputSource::Literal(text) => Ok(vec![text.clone()]),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| InputError::File {
                    path: path.clone(),
                    source,
                })?;
                read_lines_from(BufReader::new(file)).map_err(|source| InputError::File {
                    path: path.clone(),
                    source,
                })
            }
            InputSource::Stdin => read_lines_from(io::stdin().lock()).map_err(InputError::Stdin),
        }
    }
}

/// Collects the lines of a reader, without their line endings.
pub fn read_lines_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_literal_argument() {
        let source = InputSource::resolve(Some("I love you"));
        assert_eq!(source, InputSource::Literal("I love you".to_string()));
        assert_eq!(source.read_lines().unwrap(), vec!["I love you"]);
    }

    #[test]
    fn test_no_argument_reads_stdin() {
        assert_eq!(InputSource::resolve(None), InputSource::Stdin);
    }

    #[test]
    fn test_file_argument() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "BioRuby is fun").unwrap();
        writeln!(file, "A happy new year").unwrap();

        let path = file.path().to_str().unwrap();
        let source = InputSource::resolve(Some(path));
        assert_eq!(source, InputSource::File(file.path().to_path_buf()));
        assert_eq!(
            source.read_lines().unwrap(),
            vec!["BioRuby is fun", "A happy new year"]
        );
    }

    #[test]
    fn test_directory_is_literal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(
            InputSource::resolve(Some(path)),
            InputSource::Literal(path.to_string())
        );
    }

    #[test]
    fn test_missing_file_error() {
        let source = InputSource::File(PathBuf::from("/nonexistent/helixcode/input.txt"));
        let err = source.read_lines().unwrap_err();
        assert!(matches!(err, InputError::File { .. }));
        assert!(err.to_string().contains("input.txt"));
    }

    #[test]
    fn test_read_lines_from_strips_endings() {
        let lines = read_lines_from("cat\r\ngaa\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["cat", "gaa"]);
    }
}
