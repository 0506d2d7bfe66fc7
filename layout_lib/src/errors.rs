#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Str(String),

    #[error("line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    #[error("entry {index}: {msg}")]
    Element { index: usize, msg: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    ChronoParse(#[from] chrono::ParseError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
