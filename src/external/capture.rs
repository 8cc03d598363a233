//! Capture collaborator reading a facelet string instead of a camera
//!
//! The string lists the 54 stickers face by face in URFDLB order, each
//! sticker written as the letter of the face whose center has its color.
//! Validation reports the same codes the camera scanner would.

use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::io;
use tracing::{debug, warn};

use crate::cube::{CubeState, Face, FACELET_COUNT};
use crate::workflow::{CaptureError, CubeCapture, RawCapture, E_ALREADY_SOLVED, E_INCORRECTLY_SCANNED};

static FACELETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[URFDLB]{54}$").expect("facelet pattern is valid"));

/// Where the facelet string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone)]
pub struct FaceletCapture {
    source: CaptureSource,
}

impl FaceletCapture {
    pub fn new(source: CaptureSource) -> Self {
        Self { source }
    }

    async fn read(&self) -> Result<String, CaptureError> {
        match &self.source {
            CaptureSource::Inline(text) => Ok(text.clone()),
            CaptureSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CaptureError::Read {
                        origin: path.display().to_string(),
                        source,
                    })
            }
            // Only the first line; the rest of stdin belongs to the screens
            CaptureSource::Stdin => tokio::task::spawn_blocking(|| {
                let mut line = String::new();
                std::io::stdin().read_line(&mut line).map(|_| line)
            })
            .await
            .map_err(io::Error::other)
            .and_then(|read| read)
            .map_err(|source| CaptureError::Read {
                origin: "stdin".to_string(),
                source,
            }),
        }
    }
}

#[async_trait]
impl CubeCapture for FaceletCapture {
    async fn capture(&self) -> Result<RawCapture, CaptureError> {
        let text = self.read().await?;
        Ok(scan_facelets(&text))
    }
}

/// Validate a facelet string.
///
/// Whitespace is ignored so faces may be given on separate lines.
pub fn scan_facelets(text: &str) -> RawCapture {
    let facelets: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if !FACELETS.is_match(&facelets) {
        warn!(length = facelets.len(), "Scan does not contain 54 known stickers");
        return RawCapture::Code(E_INCORRECTLY_SCANNED);
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in facelets.chars() {
        *counts.entry(c).or_default() += 1;
    }
    if counts.values().any(|&n| n != FACELET_COUNT / 6) {
        warn!(?counts, "Scan has a color that does not appear exactly nine times");
        return RawCapture::Code(E_INCORRECTLY_SCANNED);
    }

    let faces: Vec<&str> = (0..6).map(|i| &facelets[i * 9..(i + 1) * 9]).collect();
    let centers_in_place = faces
        .iter()
        .zip(Face::ALL)
        .all(|(face, expected)| face.as_bytes()[4] == expected.letter() as u8);
    if !centers_in_place {
        warn!("Scan has centers out of URFDLB order");
        return RawCapture::Code(E_INCORRECTLY_SCANNED);
    }

    if faces.iter().all(|face| face.bytes().all(|b| b == face.as_bytes()[4])) {
        debug!("Every face is uniform");
        return RawCapture::Code(E_ALREADY_SOLVED);
    }

    RawCapture::State(CubeState::from_facelets(facelets))
}
