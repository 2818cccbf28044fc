//! RON data file loading shared by every module that ships stat tables.

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when loading a data file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("failed to read '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Load and parse a single RON file.
///
/// Callers are expected to log the error and fall back to their built-in
/// defaults, so a broken or missing data file degrades the tuning rather
/// than the game.
pub fn load_ron<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DataLoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    if !path.exists() {
        return Err(DataLoadError::FileNotFound(display));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;

    parse_ron(&contents).map_err(|details| DataLoadError::ParseError {
        path: display,
        details,
    })
}

/// Parse a RON string into a definition type.
fn parse_ron<T: DeserializeOwned>(contents: &str) -> Result<T, String> {
    ron::from_str(contents).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Tuning {
        speed: f32,
        count: u32,
    }

    #[test]
    fn parses_well_formed_ron() {
        let parsed: Tuning = parse_ron("(speed: 4.5, count: 3)").unwrap();
        assert_eq!(
            parsed,
            Tuning {
                speed: 4.5,
                count: 3
            }
        );
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(parse_ron::<Tuning>("(speed: oops)").is_err());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_ron::<Tuning>("assets/data/does_not_exist.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }
}
