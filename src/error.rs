//! Error types for devkit

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for devkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for devkit
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("input is empty")]
    #[diagnostic(code(devkit::empty_input))]
    EmptyInput,

    #[error("{message}")]
    #[diagnostic(code(devkit::limit_exceeded))]
    LimitExceeded { message: String },

    #[error("unknown tool: {name}")]
    #[diagnostic(
        code(devkit::unknown_tool),
        help("run `devkit list` to see the available tools")
    )]
    UnknownTool { name: String },

    #[error("invalid arguments: {message}")]
    #[diagnostic(code(devkit::invalid_arguments))]
    InvalidArguments { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(devkit::io_error))]
    Io(#[from] std::io::Error),
}

/// Calculate line and column number from byte offset
pub fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, c) in input.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}
