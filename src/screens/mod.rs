// Screens Module - navigation state machine and the presentation boundary
//
// The navigator decides which screen is active; the session renders each
// screen's content once and forwards show/hide updates to a Presenter.

pub mod content;
pub mod navigation;
pub mod terminal;

#[cfg(test)]
pub mod mocks;

use statig::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::i18n::Translator;
use crate::workflow::DisplayArtifacts;

pub use content::{Button, ScreenContent};
pub use navigation::{NavAction, Screen, ScreenChange, ScreenNavigator};
pub use terminal::TerminalPresenter;

#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("Presentation I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Presentation collaborator: draws screens and delivers user actions
pub trait Presenter {
    fn show(&mut self, content: &ScreenContent) -> Result<(), PresenterError>;

    fn hide(&mut self, screen: Screen) -> Result<(), PresenterError>;

    /// Block until the user picks one of the buttons on `content`
    fn next_action(&mut self, content: &ScreenContent) -> Result<NavAction, PresenterError>;
}

/// Drives a presenter through the screen flow for one solved cube
pub struct ScreenSession<'a, P: Presenter> {
    machine: StateMachine<ScreenNavigator>,
    artifacts: Arc<DisplayArtifacts>,
    translator: &'a dyn Translator,
    presenter: P,
    rendered: BTreeMap<Screen, Arc<ScreenContent>>,
}

impl<'a, P: Presenter> ScreenSession<'a, P> {
    pub fn new(
        artifacts: Arc<DisplayArtifacts>,
        normalize: bool,
        translator: &'a dyn Translator,
        presenter: P,
    ) -> Self {
        Self {
            machine: ScreenNavigator::new(true, normalize).state_machine(),
            artifacts,
            translator,
            presenter,
            rendered: BTreeMap::new(),
        }
    }

    /// Content for `screen`, rendered on first request and reused after
    pub fn content(&mut self, screen: Screen) -> Arc<ScreenContent> {
        if let Some(content) = self.rendered.get(&screen) {
            return Arc::clone(content);
        }

        debug!(screen = %screen, "Rendering screen content");
        let offered = self.machine.inner().offered(screen);
        let content = Arc::new(content::render(
            screen,
            &self.artifacts,
            &offered,
            self.translator,
        ));
        self.rendered.insert(screen, Arc::clone(&content));
        content
    }

    /// Show the initial screen
    pub fn open(&mut self) -> Result<(), PresenterError> {
        let content = self.content(self.active_screen());
        self.presenter.show(&content)
    }

    /// Feed one action to the navigator and apply the resulting change
    pub fn dispatch(&mut self, action: NavAction) -> Result<Option<ScreenChange>, PresenterError> {
        let before = self.active_screen();
        self.machine.handle(&action);
        let change = self.machine.inner().change_since(before);

        match change {
            Some(ScreenChange::Switch { from, to }) => {
                let content = self.content(to);
                self.presenter.show(&content)?;
                self.presenter.hide(from)?;
            }
            Some(ScreenChange::Exit { from }) => self.presenter.hide(from)?,
            None => debug!(screen = %before, action = ?action, "Action not offered, ignored"),
        }

        Ok(change)
    }

    /// Run until the user terminates, handing the presenter back
    pub fn run(mut self) -> Result<P, PresenterError> {
        self.open()?;
        loop {
            let content = self.content(self.active_screen());
            let action = self.presenter.next_action(&content)?;
            if let Some(ScreenChange::Exit { .. }) = self.dispatch(action)? {
                return Ok(self.presenter);
            }
        }
    }

    pub fn active_screen(&self) -> Screen {
        self.machine.inner().active_screen()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
