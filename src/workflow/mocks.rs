// Mock collaborators for testing - no camera, no solver process, no files

use async_trait::async_trait;
use std::sync::Mutex;

use crate::cube::CubeState;
use crate::i18n::{Catalog, Translator};
use crate::workflow::traits::*;
use crate::workflow::types::*;

/// Capture that returns a fixed result
#[derive(Debug)]
pub struct FixedCapture {
    pub result: RawCapture,
}

impl FixedCapture {
    pub fn state(facelets: &str) -> Self {
        Self {
            result: RawCapture::State(CubeState::from_facelets(facelets)),
        }
    }

    pub fn code(code: i64) -> Self {
        Self {
            result: RawCapture::Code(code),
        }
    }
}

#[async_trait]
impl CubeCapture for FixedCapture {
    async fn capture(&self) -> Result<RawCapture, CaptureError> {
        Ok(self.result.clone())
    }
}

/// Solver with a canned answer that records every state it was asked about
#[derive(Debug)]
pub struct RecordingSolver {
    pub answer: Result<String, SolverError>,
    pub received: Mutex<Vec<CubeState>>,
}

impl RecordingSolver {
    pub fn solving(moves: &str) -> Self {
        Self {
            answer: Ok(moves.to_string()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(SolverError::Rejected {
                message: message.to_string(),
            }),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> usize {
        self.received.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl CubeSolver for RecordingSolver {
    async fn solve(&self, state: &CubeState) -> Result<String, SolverError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(state.clone());
        }
        self.answer.clone()
    }
}

/// Translator backed by the embedded catalog that remembers requested keys
#[derive(Debug)]
pub struct RecordingTranslator {
    catalog: Catalog,
    requested: Mutex<Vec<String>>,
}

impl Default for RecordingTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTranslator {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::embedded(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_keys(&self) -> Vec<String> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Translator for RecordingTranslator {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(key.to_string());
        }
        self.catalog.translate(key, params)
    }
}
