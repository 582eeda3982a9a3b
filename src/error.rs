use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    TooShort { len: usize, required: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::TooShort { len, required } => write!(
                f,
                "master keys file too short: {len} bytes, at least {required} required"
            ),
        }
    }
}

impl std::error::Error for FormatError {}
