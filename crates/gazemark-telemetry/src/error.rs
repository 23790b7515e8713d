use std::fmt;

#[derive(Debug)]
pub enum ParseError {
    Read(String),
    Csv(String),
    MissingColumn(&'static str),
    Value {
        line: usize,
        column: &'static str,
        token: String,
    },
    Record {
        line: usize,
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Read(msg) => write!(f, "read error: {msg}"),
            ParseError::Csv(msg) => write!(f, "csv error: {msg}"),
            ParseError::MissingColumn(name) => write!(f, "missing column: {name}"),
            ParseError::Value {
                line,
                column,
                token,
            } => {
                write!(f, "line {line}: cannot parse {column} value {token:?}")
            }
            ParseError::Record { line, reason } => write!(f, "line {line}: {reason}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        ParseError::Csv(err.to_string())
    }
}
