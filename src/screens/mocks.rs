// Scripted presenter for testing - replays a fixed list of user actions

use std::collections::VecDeque;

use crate::screens::{NavAction, Presenter, PresenterError, Screen, ScreenContent};

#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    pub script: VecDeque<NavAction>,
    pub shown: Vec<ScreenContent>,
    pub hidden: Vec<Screen>,
}

impl ScriptedPresenter {
    pub fn new(actions: Vec<NavAction>) -> Self {
        Self {
            script: actions.into(),
            ..Default::default()
        }
    }
}

impl Presenter for ScriptedPresenter {
    fn show(&mut self, content: &ScreenContent) -> Result<(), PresenterError> {
        self.shown.push(content.clone());
        Ok(())
    }

    fn hide(&mut self, screen: Screen) -> Result<(), PresenterError> {
        self.hidden.push(screen);
        Ok(())
    }

    /// Terminates once the script runs out
    fn next_action(&mut self, _content: &ScreenContent) -> Result<NavAction, PresenterError> {
        Ok(self.script.pop_front().unwrap_or(NavAction::Terminate))
    }
}
