// Move notation table - closed solver alphabet and its human readable phrases

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::i18n::Translator;

/// Cube face in the solver's URFDLB order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

/// Turn amount and direction applied to a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Turn {
    /// Quarter turn clockwise, written without a modifier
    Clockwise,
    /// Quarter turn counterclockwise, written with `'`
    CounterClockwise,
    /// Half turn, written with `2`
    Half,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];

    pub fn modifier(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// A single token of the solver's output alphabet, e.g. `R`, `U'`, `F2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// All 18 moves in face-major order (U, U', U2, R, ...)
    pub fn alphabet() -> impl Iterator<Item = Move> {
        Face::ALL
            .into_iter()
            .flat_map(|face| Turn::ALL.into_iter().map(move |turn| Move::new(face, turn)))
    }

    /// Localization key of the phrase describing this move
    pub fn phrase_key(&self) -> String {
        format!("solveManual.{self}")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.modifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Move token {token:?} is not part of the solver alphabet")]
pub struct UnknownMove {
    pub token: String,
}

impl FromStr for Move {
    type Err = UnknownMove;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownMove {
            token: token.to_string(),
        };

        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(unknown)?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Half,
            _ => return Err(unknown()),
        };

        Ok(Move::new(face, turn))
    }
}

/// Lookup from move token to the phrase shown on the human readable screen.
///
/// Phrases are resolved through the translator, so the table itself only
/// owns the alphabet; the wording lives in the translation catalogs.
pub struct NotationTable<'a> {
    translator: &'a dyn Translator,
}

impl<'a> NotationTable<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self { translator }
    }

    pub fn phrase(&self, token: &str) -> Result<String, UnknownMove> {
        let mv: Move = token.parse()?;
        Ok(self.translator.t(&mv.phrase_key()))
    }

    /// Every (token, phrase) pair in alphabet order
    pub fn entries(&self) -> Vec<(String, String)> {
        Move::alphabet()
            .map(|mv| (mv.to_string(), self.translator.t(&mv.phrase_key())))
            .collect()
    }
}
