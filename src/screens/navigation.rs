use serde::{Deserialize, Serialize};
use statig::prelude::*;
use std::fmt;

/// Screens in forward order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Screen {
    Start,
    Solution,
    HumanReadable,
    CheatSheet,
}

impl Screen {
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Start => "title.start",
            Screen::Solution => "title.solution",
            Screen::HumanReadable => "title.humanReadable",
            Screen::CheatSheet => "title.cheatSheet",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Start => "start",
            Screen::Solution => "solution",
            Screen::HumanReadable => "human_readable",
            Screen::CheatSheet => "cheat_sheet",
        };
        f.write_str(name)
    }
}

/// User actions delivered by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavAction {
    Advance,
    Back,
    Terminate,
}

/// Presentation update requested by the last handled action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenChange {
    Switch { from: Screen, to: Screen },
    Exit { from: Screen },
}

/// Linear screen flow: Start -> Solution -> HumanReadable -> CheatSheet.
///
/// Actions whose guard fails are never offered and are ignored if they
/// arrive anyway. Terminate is accepted everywhere.
#[derive(Debug)]
pub struct ScreenNavigator {
    normalize: bool,
    has_solution: bool,
    active: Screen,
    terminated: bool,
}

impl ScreenNavigator {
    pub fn new(has_solution: bool, normalize: bool) -> Self {
        Self {
            normalize,
            has_solution,
            active: Screen::Start,
            terminated: false,
        }
    }
}

#[state_machine(initial = "State::start()")]
impl ScreenNavigator {
    #[state]
    fn start(&mut self, event: &NavAction) -> Outcome<State> {
        match event {
            NavAction::Advance if self.has_solution => {
                self.switch(Screen::Solution, State::solution())
            }
            NavAction::Terminate => self.terminate(),
            _ => Handled,
        }
    }

    #[state]
    fn solution(&mut self, event: &NavAction) -> Outcome<State> {
        match event {
            NavAction::Advance if self.normalize => {
                self.switch(Screen::HumanReadable, State::human_readable())
            }
            NavAction::Back => self.switch(Screen::Start, State::start()),
            NavAction::Terminate => self.terminate(),
            _ => Handled,
        }
    }

    #[state]
    fn human_readable(&mut self, event: &NavAction) -> Outcome<State> {
        match event {
            NavAction::Advance => self.switch(Screen::CheatSheet, State::cheat_sheet()),
            NavAction::Back => self.switch(Screen::Solution, State::solution()),
            NavAction::Terminate => self.terminate(),
        }
    }

    #[state]
    fn cheat_sheet(&mut self, event: &NavAction) -> Outcome<State> {
        match event {
            NavAction::Back => self.switch(Screen::HumanReadable, State::human_readable()),
            NavAction::Terminate => self.terminate(),
            _ => Handled,
        }
    }
}

impl ScreenNavigator {
    fn switch(&mut self, to: Screen, target: State) -> Outcome<State> {
        let from = self.active;
        tracing::debug!(from = %from, to = %to, "Screen transition");
        self.active = to;
        Transition(target)
    }

    fn terminate(&mut self) -> Outcome<State> {
        tracing::info!(screen = %self.active, "User closed the application");
        self.terminated = true;
        Handled
    }

    /// Actions whose guards hold on `screen`
    pub fn offered(&self, screen: Screen) -> Vec<NavAction> {
        let advance = match screen {
            Screen::Start => self.has_solution,
            Screen::Solution => self.normalize,
            Screen::HumanReadable => true,
            Screen::CheatSheet => false,
        };

        let mut actions = Vec::with_capacity(3);
        if advance {
            actions.push(NavAction::Advance);
        }
        if screen != Screen::Start {
            actions.push(NavAction::Back);
        }
        actions.push(NavAction::Terminate);
        actions
    }

    /// Presentation update implied by the actions handled since `before`
    /// was the active screen
    pub fn change_since(&self, before: Screen) -> Option<ScreenChange> {
        if self.terminated {
            Some(ScreenChange::Exit { from: self.active })
        } else if self.active != before {
            Some(ScreenChange::Switch {
                from: before,
                to: self.active,
            })
        } else {
            None
        }
    }

    pub fn active_screen(&self) -> Screen {
        self.active
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}
