// Terminal error messages printed before the process exits

use owo_colors::OwoColorize;

use crate::i18n::Translator;
use crate::workflow::types::ErrorCode;

/// Localized lines describing why the run ended.
///
/// Codes other than the two known ones have no message.
pub fn error_lines(code: ErrorCode, translator: &dyn Translator) -> Vec<String> {
    let label = translator.t("error");
    match code {
        ErrorCode::IncorrectlyScanned => vec![
            format!("[{}] {}", label, translator.t("haventScannedAllSides")),
            translator.t("pleaseTryAgain"),
        ],
        ErrorCode::AlreadySolved => {
            vec![format!("[{}] {}", label, translator.t("cubeAlreadySolved"))]
        }
        ErrorCode::Other(_) => Vec::new(),
    }
}

/// Print the error lines as a yellow warning block on stdout
pub fn print_error(code: ErrorCode, translator: &dyn Translator) {
    for line in error_lines(code, translator) {
        println!("{}", line.yellow());
    }
}
