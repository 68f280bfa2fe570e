use std::path::PathBuf;

/// Errors raised by board construction, generation and bounds-checked queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("board must have a non-zero, even number of cells, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("symbol catalog has {available} unique tiles; need {needed}")]
    InsufficientSymbols { needed: usize, available: usize },

    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("no solvable board found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

/// Errors that can occur when parsing a text board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("board has no rows or an empty first row")]
    Empty,

    #[error("row {row} has {found} cells (expected {expected})")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedChar { ch: char, row: usize, col: usize },

    #[error("symbol '{ch}' appears {count} times; tiles must come in pairs")]
    UnpairedSymbol { ch: char, count: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::InsufficientSymbols {
            needed: 41,
            available: 40,
        };
        assert_eq!(err.to_string(), "symbol catalog has 40 unique tiles; need 41");

        let err = EngineError::OutOfBounds {
            row: 3,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert_eq!(err.to_string(), "position (3, 0) is outside the 2x2 board");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnrecognizedChar {
            ch: '#',
            row: 1,
            col: 2,
        };
        assert_eq!(err.to_string(), "unrecognized character '#' in row 1 col 2");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: rows must be > 0");
    }
}
