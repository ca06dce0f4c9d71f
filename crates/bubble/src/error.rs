use bcss::BcssError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BubbleError {
    #[error("CSS error: {0}")]
    Css(#[from] BcssError),

    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, BubbleError>;
