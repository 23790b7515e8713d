use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    Probe(String),
    Open(String),
    Read(String),
    Write(String),
    Merge(String),
    Transcode(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Probe(msg) => write!(f, "probe error: {msg}"),
            VideoError::Open(msg) => write!(f, "stream open error: {msg}"),
            VideoError::Read(msg) => write!(f, "stream read error: {msg}"),
            VideoError::Write(msg) => write!(f, "stream write error: {msg}"),
            VideoError::Merge(msg) => write!(f, "merge error: {msg}"),
            VideoError::Transcode(msg) => write!(f, "transcode error: {msg}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<serde_json::Error> for VideoError {
    fn from(err: serde_json::Error) -> Self {
        VideoError::Probe(err.to_string())
    }
}
