use serde::Serialize;

use crate::cube::NotationTable;
use crate::i18n::Translator;
use crate::screens::navigation::{NavAction, Screen};
use crate::workflow::{DisplayArtifacts, Step};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub action: NavAction,
    pub label: String,
}

/// Everything a presenter needs to draw one screen, already localized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenContent {
    pub screen: Screen,
    pub title: String,
    pub lines: Vec<String>,
    pub steps: Vec<Step>,
    pub buttons: Vec<Button>,
    pub prompt: String,
}

impl ScreenContent {
    pub fn action_for(&self, choice: usize) -> Option<NavAction> {
        choice
            .checked_sub(1)
            .and_then(|index| self.buttons.get(index))
            .map(|button| button.action)
    }
}

/// Build the content of `screen` from the solve artifacts
pub fn render(
    screen: Screen,
    artifacts: &DisplayArtifacts,
    offered: &[NavAction],
    translator: &dyn Translator,
) -> ScreenContent {
    let (lines, steps) = match screen {
        Screen::Start => (vec![translator.t("startingPosition")], Vec::new()),
        Screen::Solution => {
            let count = artifacts.move_count.to_string();
            (
                vec![
                    translator.translate("moves", &[("moves", count.as_str())]),
                    translator.translate(
                        "solution",
                        &[("algorithm", artifacts.raw_solution_text.as_str())],
                    ),
                ],
                Vec::new(),
            )
        }
        Screen::HumanReadable => (Vec::new(), artifacts.normalized_steps.clone()),
        Screen::CheatSheet => (
            NotationTable::new(translator)
                .entries()
                .into_iter()
                .map(|(token, phrase)| format!("{token:<3} {phrase}"))
                .collect(),
            Vec::new(),
        ),
    };

    let buttons = offered
        .iter()
        .map(|&action| Button {
            action,
            label: translator.t(button_key(screen, action)),
        })
        .collect();

    ScreenContent {
        screen,
        title: translator.t(screen.title_key()),
        lines,
        steps,
        buttons,
        prompt: translator.t("choose"),
    }
}

fn button_key(screen: Screen, action: NavAction) -> &'static str {
    match (screen, action) {
        (Screen::Start, NavAction::Advance) => "next",
        (Screen::Solution, NavAction::Advance) => "hrs",
        (_, NavAction::Advance) => "cs",
        (_, NavAction::Back) => "back",
        (_, NavAction::Terminate) => "close",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    fn artifacts() -> DisplayArtifacts {
        DisplayArtifacts {
            move_count: 2,
            raw_solution_text: "R U'".to_string(),
            normalized_steps: vec![
                Step { position: 1, text: "Turn the right side clockwise".to_string() },
                Step { position: 2, text: "Turn the top side counterclockwise".to_string() },
            ],
        }
    }

    #[test]
    fn test_solution_screen_shows_count_and_moves() {
        let content = render(
            Screen::Solution,
            &artifacts(),
            &[NavAction::Back, NavAction::Terminate],
            &Catalog::embedded(),
        );

        assert_eq!(content.title, "QBR: Instructions");
        assert_eq!(content.lines, vec!["Moves: 2".to_string(), "Solution: R U'".to_string()]);
        assert!(content.steps.is_empty());
        let labels: Vec<&str> = content.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Back", "Close"]);
    }

    #[test]
    fn test_human_readable_screen_lists_steps() {
        let content = render(
            Screen::HumanReadable,
            &artifacts(),
            &[NavAction::Advance, NavAction::Back, NavAction::Terminate],
            &Catalog::embedded(),
        );

        assert_eq!(content.steps, artifacts().normalized_steps);
        assert_eq!(content.buttons[0].label, "Cheat sheet");
    }

    #[test]
    fn test_cheat_sheet_lists_whole_alphabet() {
        let content = render(
            Screen::CheatSheet,
            &artifacts(),
            &[NavAction::Back, NavAction::Terminate],
            &Catalog::embedded(),
        );

        assert_eq!(content.lines.len(), 18);
        assert_eq!(content.lines[0], "U   Turn the top side clockwise");
        assert_eq!(content.lines[1], "U'  Turn the top side counterclockwise");
    }

    #[test]
    fn test_buttons_are_chosen_by_one_based_number() {
        let content = render(
            Screen::Start,
            &artifacts(),
            &[NavAction::Advance, NavAction::Terminate],
            &Catalog::embedded(),
        );

        assert_eq!(content.buttons[0].label, "-->");
        assert_eq!(content.action_for(1), Some(NavAction::Advance));
        assert_eq!(content.action_for(2), Some(NavAction::Terminate));
        assert_eq!(content.action_for(0), None);
        assert_eq!(content.action_for(3), None);
    }
}
