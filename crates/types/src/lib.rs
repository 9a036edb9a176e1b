//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic attached, making them usable in
//! any context (core rules, terminal rendering, headless simulation).
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DICE_COUNT` | 5 | Dice per hand |
//! | `ROLLS_PER_TURN` | 3 | Rolls available at the start of a turn |
//! | `MAX_ROUNDS` | 13 | Rounds per game (one per category) |
//! | `UPPER_BONUS_THRESHOLD` | 63 | Upper subtotal that earns the bonus |
//! | `UPPER_BONUS` | 35 | Upper bonus points, awarded once |
//! | `YAHTZEE_BONUS` | 100 | Points per bonus Yahtzee |
//! | `HIGH_SCORE_LIMIT` | 10 | Entries kept in the high-score file |
//!
//! # Examples
//!
//! ```
//! use tui_yahtzee_types::{Category, GameMode, CATEGORY_COUNT};
//!
//! let cat = Category::from_str("full house").unwrap();
//! assert_eq!(cat, Category::FullHouse);
//! assert!(!cat.is_upper());
//!
//! assert_eq!(Category::Fours.face(), Some(4));
//! assert_eq!(Category::Fours.par(), Some(12));
//!
//! assert_eq!(Category::ALL.len(), CATEGORY_COUNT);
//! assert_eq!(GameMode::from_str("bot"), Some(GameMode::HumanVsBot));
//! ```

use serde::{Deserialize, Serialize};

/// Dice per hand.
pub const DICE_COUNT: usize = 5;

/// Number of scoring categories.
pub const CATEGORY_COUNT: usize = 13;

/// Rolls available at the start of every turn.
pub const ROLLS_PER_TURN: u8 = 3;

/// Rounds per game; the game is over once the round counter reaches this.
pub const MAX_ROUNDS: u8 = 13;

/// Upper subtotal (before the bonus) that earns the upper bonus.
pub const UPPER_BONUS_THRESHOLD: u16 = 63;

/// Upper bonus points.
pub const UPPER_BONUS: u16 = 35;

/// Lower-section points added for each bonus Yahtzee.
pub const YAHTZEE_BONUS: u16 = 100;

/// Bonus counter increments per bonus Yahtzee event.
///
/// Each bonus Yahtzee advances the counter by two while adding a single
/// [`YAHTZEE_BONUS`], as the original game did. Views show the bonus points
/// as `count / 2 * 100`.
pub const YAHTZEE_BONUS_INCREMENTS: u8 = 2;

/// Fixed lower-section scores.
pub const FULL_HOUSE_SCORE: u16 = 25;
pub const SMALL_STRAIGHT_SCORE: u16 = 30;
pub const LARGE_STRAIGHT_SCORE: u16 = 40;
pub const YAHTZEE_SCORE: u16 = 50;

/// Entries kept in the persisted high-score list.
pub const HIGH_SCORE_LIMIT: usize = 10;

/// Default high-score file, relative to the working directory.
pub const DEFAULT_HIGH_SCORE_FILE: &str = "high_score.txt";

/// Name given to the computer opponent.
pub const BOT_NAME: &str = "Yahtzee Bot";

/// A full hand of die values, each in `1..=6`.
pub type Dice = [u8; DICE_COUNT];

/// The thirteen scoring categories, in scorecard order.
///
/// Order matters: it is the display order, the upper/lower grouping, and the
/// tie-break order used by the bot when two categories score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    /// All categories in scorecard order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// Upper section (face value × count).
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// Lower section (combinations).
    pub const LOWER: [Category; 7] = [
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Category at a position in [`Category::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// Face value counted by an upper category.
    pub fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// Par for an upper category: three dice of the face.
    ///
    /// Scoring exactly par in every upper category lands on 63.
    pub fn par(self) -> Option<i16> {
        match self {
            Category::Ones => Some(3),
            Category::Twos => Some(6),
            Category::Threes => Some(9),
            Category::Fours => Some(12),
            Category::Fives => Some(15),
            Category::Sixes => Some(18),
            _ => None,
        }
    }

    /// Joker categories: a bonus Yahtzee always satisfies them.
    pub fn is_joker(self) -> bool {
        matches!(
            self,
            Category::FullHouse | Category::SmallStraight | Category::LargeStraight
        )
    }

    /// Scorecard label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }

    /// Snake-case key, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::FullHouse => "full_house",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::Yahtzee => "yahtzee",
            Category::Chance => "chance",
        }
    }

    /// Parse a category tag (case-insensitive).
    ///
    /// Accepts the label ("Full House"), the snake-case key ("full_house"),
    /// or a short alias ("fh"). Unknown tags return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_yahtzee_types::Category;
    ///
    /// assert_eq!(Category::from_str("Small Straight"), Some(Category::SmallStraight));
    /// assert_eq!(Category::from_str("3k"), Some(Category::ThreeOfAKind));
    /// assert_eq!(Category::from_str("Small Strait"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        match key.as_str() {
            "ones" | "1" => Some(Category::Ones),
            "twos" | "2" => Some(Category::Twos),
            "threes" | "3" => Some(Category::Threes),
            "fours" | "4" => Some(Category::Fours),
            "fives" | "5" => Some(Category::Fives),
            "sixes" | "6" => Some(Category::Sixes),
            "three_of_a_kind" | "3k" => Some(Category::ThreeOfAKind),
            "four_of_a_kind" | "4k" => Some(Category::FourOfAKind),
            "full_house" | "fh" => Some(Category::FullHouse),
            "small_straight" | "ss" => Some(Category::SmallStraight),
            "large_straight" | "ls" => Some(Category::LargeStraight),
            "yahtzee" | "y" => Some(Category::Yahtzee),
            "chance" | "c" => Some(Category::Chance),
            _ => None,
        }
    }
}

/// How the two seats are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Solitaire: only player one is seated.
    Practice,
    HumanVsHuman,
    /// Player two is the bot.
    HumanVsBot,
}

impl GameMode {
    /// Parse a mode name (case-insensitive): "practice" | "p",
    /// "human" | "h", "bot" | "b".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "practice" | "p" | "solo" => Some(GameMode::Practice),
            "human" | "h" => Some(GameMode::HumanVsHuman),
            "bot" | "b" => Some(GameMode::HumanVsBot),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Practice => "practice",
            GameMode::HumanVsHuman => "human",
            GameMode::HumanVsBot => "bot",
        }
    }
}

/// Who makes the decisions for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Bot,
}

/// Commands the presentation layer sends to the game.
///
/// Keyboard input maps onto these; the engine applies them to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Roll the unheld dice
    Roll,
    /// Toggle the hold flag of a die (0-based index)
    ToggleHold(u8),
    /// Move the category cursor up
    CursorUp,
    /// Move the category cursor down
    CursorDown,
    /// Score the category under the cursor
    Choose,
    /// Score a specific category
    ChooseCategory(Category),
    /// Let a pending bot turn play out
    Continue,
    /// Start a new game with the same players
    PlayAgain,
    /// Show or hide the high-score list
    ToggleHighScores,
}
