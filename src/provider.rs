//! Border provider abstraction.
//!
//! Political border lines are supplied by an external collaborator: the
//! resolver only ever asks for a named line of vertices. Any backing
//! store can implement the trait as long as lookups are read-only and
//! thread-safe.

use std::collections::HashMap;

use geo::LineString;

/// Errors that can occur during border lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// No border is registered under the requested name.
    #[error("unknown border \"{0}\"")]
    UnknownBorder(String),
    /// Provider-specific lookup failure.
    #[error("border lookup failed: {0}")]
    Backend(String),
}

/// Trait for named border line providers.
///
/// A border is a closed contour: the segment resolver treats the vertex
/// sequence as circular, so the first and last vertex need not repeat.
pub trait BorderProvider: Send + Sync {
    /// Returns the border line registered under `name`.
    fn get_border(&self, name: &str) -> Result<LineString<f64>, ProviderError>;
}

/// In-memory border provider backed by a name to line map.
#[derive(Debug, Clone, Default)]
pub struct StaticBorderProvider {
    borders: HashMap<String, LineString<f64>>,
}

impl StaticBorderProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a border line under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, border: LineString<f64>) {
        self.borders.insert(name.into(), border);
    }
}

impl BorderProvider for StaticBorderProvider {
    fn get_border(&self, name: &str) -> Result<LineString<f64>, ProviderError> {
        self.borders
            .get(name)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownBorder(name.to_string()))
    }
}
