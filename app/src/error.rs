use std::fmt;

#[derive(Debug)]
pub enum AreaError {
    Config(String),
    Statistics(String),
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Statistics(msg) => write!(f, "Statistics error: {msg}"),
        }
    }
}

impl std::error::Error for AreaError {}

pub type Result<T> = std::result::Result<T, AreaError>;
