use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LedGridError {
    InvalidCanvas { width: f64, height: f64 },
    UnknownChannel(String),
    UnknownParam(String),
    Config(String),
}

impl fmt::Display for LedGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedGridError::InvalidCanvas { width, height } => {
                write!(f, "Invalid canvas size {width}x{height}, both sides must be positive")
            }
            LedGridError::UnknownChannel(name) => write!(f, "Unknown channel '{name}'"),
            LedGridError::UnknownParam(key) => write!(f, "Unknown parameter '{key}'"),
            LedGridError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for LedGridError {}

impl From<serde_json::Error> for LedGridError {
    fn from(e: serde_json::Error) -> Self {
        LedGridError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offender() {
        let e = LedGridError::UnknownParam("hz".to_string());
        assert_eq!(e.to_string(), "Unknown parameter 'hz'");
        let e = LedGridError::InvalidCanvas { width: 0.0, height: 10.0 };
        assert!(e.to_string().contains("0x10"));
    }
}
