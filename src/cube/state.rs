use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of visible stickers on a 3x3x3 cube.
pub const FACELET_COUNT: usize = 54;

/// Opaque facelet string in canonical URFDLB face order, as handed over by
/// the capture collaborator.
///
/// The workflow never inspects the contents; only the solver does. A state
/// is immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState(String);

impl CubeState {
    pub fn from_facelets(facelets: impl Into<String>) -> Self {
        Self(facelets.into())
    }

    pub fn facelets(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
