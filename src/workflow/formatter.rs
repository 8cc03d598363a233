use thiserror::Error;

use crate::cube::{NotationTable, UnknownMove};
use crate::i18n::Translator;
use crate::workflow::types::{DisplayArtifacts, MoveSequence, Step};

/// Solver output that the notation table cannot describe.
///
/// The move alphabet is closed, so this is a solver/vocabulary mismatch and
/// never a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Cannot describe move {position} of the solution: {source}")]
    UnknownMove {
        position: usize,
        #[source]
        source: UnknownMove,
    },
}

/// Derive the display artifacts for a solved cube.
///
/// With `normalize` off no notation lookups happen at all.
pub fn format(
    sequence: &MoveSequence,
    normalize: bool,
    translator: &dyn Translator,
) -> Result<DisplayArtifacts, FormatError> {
    let normalized_steps = if normalize {
        let table = NotationTable::new(translator);
        sequence
            .tokens()
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let position = index + 1;
                table
                    .phrase(token.as_str())
                    .map(|text| Step { position, text })
                    .map_err(|source| FormatError::UnknownMove { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };

    Ok(DisplayArtifacts {
        move_count: sequence.len(),
        raw_solution_text: sequence.join(),
        normalized_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::workflow::mocks::RecordingTranslator;

    fn sequence(moves: &str) -> MoveSequence {
        MoveSequence::tokenize(moves).unwrap()
    }

    #[test]
    fn test_counts_and_raw_text() {
        let catalog = Catalog::embedded();
        let artifacts = format(&sequence("R U R' F2"), false, &catalog).unwrap();

        assert_eq!(artifacts.move_count, 4);
        assert_eq!(artifacts.raw_solution_text, "R U R' F2");
        assert_eq!(
            artifacts.move_count,
            artifacts.raw_solution_text.split(' ').count()
        );
        assert!(artifacts.normalized_steps.is_empty());
    }

    #[test]
    fn test_normalized_steps_are_numbered_from_one() {
        let catalog = Catalog::embedded();
        let artifacts = format(&sequence("R U R' F2"), true, &catalog).unwrap();

        let expected = vec![
            Step { position: 1, text: "Turn the right side clockwise".to_string() },
            Step { position: 2, text: "Turn the top side clockwise".to_string() },
            Step { position: 3, text: "Turn the right side counterclockwise".to_string() },
            Step { position: 4, text: "Turn the front side 180 degrees".to_string() },
        ];
        assert_eq!(artifacts.normalized_steps, expected);
    }

    #[test]
    fn test_positions_are_contiguous_for_long_solutions() {
        let catalog = Catalog::embedded();
        let moves = "D2 R' D' F2 B D R2 D2 R' F2 D' F2 U' B2 L2 U2 D R2 U";
        let artifacts = format(&sequence(moves), true, &catalog).unwrap();

        assert_eq!(artifacts.move_count, 19);
        assert_eq!(artifacts.normalized_steps.len(), artifacts.move_count);
        for (i, step) in artifacts.normalized_steps.iter().enumerate() {
            assert_eq!(step.position, i + 1);
        }
    }

    #[test]
    fn test_unknown_token_is_a_format_error() {
        let catalog = Catalog::embedded();
        let err = format(&sequence("R M U"), true, &catalog).unwrap_err();

        match err {
            FormatError::UnknownMove { position, source } => {
                assert_eq!(position, 2);
                assert_eq!(source.token, "M");
            }
        }
    }

    #[test]
    fn test_unknown_token_is_ignored_without_normalization() {
        let catalog = Catalog::embedded();
        let artifacts = format(&sequence("R M U"), false, &catalog).unwrap();
        assert_eq!(artifacts.move_count, 3);
    }

    #[test]
    fn test_no_lookups_without_normalization() {
        let translator = RecordingTranslator::new();
        format(&sequence("R U R' F2"), false, &translator).unwrap();
        assert!(translator.requested_keys().is_empty());

        format(&sequence("R U"), true, &translator).unwrap();
        assert_eq!(
            translator.requested_keys(),
            vec!["solveManual.R".to_string(), "solveManual.U".to_string()]
        );
    }
}
