use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[display("blue")]
    #[serde(rename = "blue")]
    Blue,
    #[display("red")]
    #[serde(rename = "red")]
    Red,
    #[display("green")]
    #[serde(rename = "green")]
    Green,
    #[display("purple")]
    #[serde(rename = "purple")]
    Purple,
    #[display("yellow")]
    #[serde(rename = "yellow")]
    Yellow,
}

impl Color {
    /// Wheel order, also the rotation order shown while spinning.
    pub const ALL: [Color; 5] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Purple,
        Color::Yellow,
    ];

    /// Position of this color in [`Color::ALL`].
    pub fn index(self) -> usize {
        match self {
            Color::Blue => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Purple => 3,
            Color::Yellow => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Purple => "Purple",
            Color::Yellow => "Yellow",
        }
    }

    /// Question category bound to this color. Display only.
    pub fn prompt(self) -> &'static str {
        match self {
            Color::Blue => "Name the Artist",
            Color::Red => "Name the Song",
            Color::Green => "Guess the Decade",
            Color::Purple => "Guess the Year (+/- 3 years)",
            Color::Yellow => "Wild - Name Song, Artist, or Exact Year",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[display("idle")]
    #[serde(rename = "idle")]
    Idle,
    #[display("spinning")]
    #[serde(rename = "spinning")]
    Spinning,
    #[display("awaiting_answer")]
    #[serde(rename = "awaiting_answer")]
    AwaitingAnswer,
    #[display("awaiting_selection")]
    #[serde(rename = "awaiting_selection")]
    AwaitingSelection,
}
