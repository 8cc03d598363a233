// Core types for the scan -> solve -> format pipeline

use serde::{Deserialize, Serialize};

use crate::cube::CubeState;

/// Capture code for a scan that is incomplete or inconsistent
pub const E_INCORRECTLY_SCANNED: i64 = 1;
/// Capture code for a cube that is already solved
pub const E_ALREADY_SOLVED: i64 = 2;

/// What the capture collaborator hands back: a state, or a status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCapture {
    State(CubeState),
    Code(i64),
}

/// User visible failure conditions; each maps to a process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    IncorrectlyScanned,
    AlreadySolved,
    /// Any other positive code reported by the capture collaborator
    Other(i64),
}

impl ErrorCode {
    pub fn code(self) -> i64 {
        match self {
            ErrorCode::IncorrectlyScanned => E_INCORRECTLY_SCANNED,
            ErrorCode::AlreadySolved => E_ALREADY_SOLVED,
            ErrorCode::Other(code) => code,
        }
    }

    /// Exit status for the process, clamped into the portable 1..=255 range
    pub fn exit_code(self) -> i32 {
        i32::try_from(self.code()).map_or(255, |code| code.clamp(1, 255))
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        match code {
            E_INCORRECTLY_SCANNED => ErrorCode::IncorrectlyScanned,
            E_ALREADY_SOLVED => ErrorCode::AlreadySolved,
            other => ErrorCode::Other(other),
        }
    }
}

/// Result of classifying a capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Valid(CubeState),
    Error(ErrorCode),
}

/// One token of solver output, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveToken(String);

impl MoveToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordered, non-empty solver output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSequence(Vec<MoveToken>);

impl MoveSequence {
    /// Split a space delimited move string, keeping order.
    ///
    /// Returns `None` when there is nothing to split, since a solve that
    /// produced no moves is not a usable solution.
    pub fn tokenize(moves: &str) -> Option<Self> {
        let tokens: Vec<MoveToken> = moves.split_whitespace().map(MoveToken::new).collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self(tokens))
        }
    }

    /// Build from individual tokens.
    ///
    /// Returns `None` for no tokens, or for a token that is empty or holds
    /// whitespace, since `tokenize(join())` could not reproduce it.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<MoveToken> = tokens.into_iter().map(MoveToken::new).collect();
        let well_formed = tokens
            .iter()
            .all(|token| !token.0.is_empty() && !token.0.contains(char::is_whitespace));
        (well_formed && !tokens.is_empty()).then_some(Self(tokens))
    }

    pub fn join(&self) -> String {
        self.0
            .iter()
            .map(MoveToken::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn tokens(&self) -> &[MoveToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(MoveSequence),
    Failed,
}

/// A numbered human readable instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based, contiguous
    pub position: usize,
    pub text: String,
}

impl Step {
    pub fn label(&self) -> String {
        format!("{}. {}", self.position, self.text)
    }
}

/// Everything the screens display, derived once per successful solve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayArtifacts {
    pub move_count: usize,
    pub raw_solution_text: String,
    /// Empty unless normalization was requested
    pub normalized_steps: Vec<Step>,
}
