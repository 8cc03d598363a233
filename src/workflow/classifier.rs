use crate::cube::CubeState;
use crate::workflow::types::{ErrorCode, RawCapture, ScanOutcome};

/// Interpret a capture result.
///
/// Only a code strictly greater than zero is an error. Any other code is
/// passed through as an opaque state holding its decimal text, which the
/// solver will then refuse.
pub fn classify(raw: RawCapture) -> ScanOutcome {
    match raw {
        RawCapture::Code(code) if code > 0 => ScanOutcome::Error(ErrorCode::from(code)),
        RawCapture::Code(code) => ScanOutcome::Valid(CubeState::from_facelets(code.to_string())),
        RawCapture::State(state) => ScanOutcome::Valid(state),
    }
}
