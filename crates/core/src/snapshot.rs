//! Read-only views of a game for presentation and logging.
//!
//! Snapshots are plain serde data. The terminal view renders them, and
//! `simulate` prints summaries derived from them as JSON.

use serde::Serialize;

use crate::highscore::HighScore;
use crate::scorecard::Scorecard;
use crate::scoring::scores_for_dice;
use crate::session::{GameSession, Player, Seat};
use crate::turn::{TurnPhase, TurnResolver};
use crate::types::{Category, Dice, GameMode, PlayerKind, DICE_COUNT, HIGH_SCORE_LIMIT};

/// Which screen the presentation should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Playing,
    GameOver,
    HighScores,
}

/// One scorecard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub category: Category,
    pub label: &'static str,
    pub score: Option<u16>,
    /// Sorted dice the score was taken from.
    pub throw: Option<Dice>,
    /// What the current dice would score here; `None` once used or before
    /// the first roll.
    pub potential: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub seat: Seat,
    pub name: String,
    pub kind: PlayerKind,
    pub rows: Vec<CategoryRow>,
    pub upper_subtotal: u16,
    pub lower_subtotal: u16,
    pub upper_bonus: bool,
    pub plus_minus: String,
    pub yahtzee_bonus_count: u8,
    pub total: u16,
}

impl PlayerSnapshot {
    fn capture(seat: Seat, player: &Player, hand: Option<&Dice>) -> Self {
        let card: &Scorecard = player.card();
        let potentials = hand.map(scores_for_dice);
        let rows = Category::ALL
            .iter()
            .map(|&category| CategoryRow {
                category,
                label: category.label(),
                score: card.score(category),
                throw: card.throw(category),
                potential: match (card.is_used(category), potentials) {
                    (false, Some(p)) => Some(p[category.index()]),
                    _ => None,
                },
            })
            .collect();
        Self {
            seat,
            name: player.name().to_string(),
            kind: player.kind(),
            rows,
            upper_subtotal: card.upper_subtotal(),
            lower_subtotal: card.lower_subtotal(),
            upper_bonus: card.has_upper_bonus(),
            plus_minus: card.plus_minus_label(),
            yahtzee_bonus_count: card.yahtzee_bonus_count(),
            total: card.final_tally(),
        }
    }

    pub fn row(&self, category: Category) -> &CategoryRow {
        &self.rows[category.index()]
    }
}

/// Everything a frame needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub mode: GameMode,
    /// Die faces; 0 before the first roll of a turn.
    pub dice: [u8; DICE_COUNT],
    pub held: [bool; DICE_COUNT],
    pub rolls_left: u8,
    pub phase: TurnPhase,
    pub round: u8,
    /// `None` once the game is over.
    pub active: Option<Seat>,
    pub players: Vec<PlayerSnapshot>,
    pub cursor: Category,
    pub screen: Screen,
    pub status: String,
    pub message: String,
    pub high_scores: Vec<HighScore>,
}

impl GameSnapshot {
    /// Capture the session and the active turn. Cursor, screen and text
    /// lines are left at defaults for the caller to fill.
    pub fn capture(session: &GameSession, turn: &TurnResolver, active: Option<Seat>) -> Self {
        let hand = turn.dice().hand();
        let show_potential = active.is_some() && turn.can_choose();
        let players = session
            .seats()
            .filter_map(|seat| {
                let player = session.player(seat)?;
                let dice = if show_potential && active == Some(seat) {
                    hand.as_ref()
                } else {
                    None
                };
                Some(PlayerSnapshot::capture(seat, player, dice))
            })
            .collect();

        Self {
            mode: session.mode(),
            dice: hand.unwrap_or([0; DICE_COUNT]),
            held: *turn.dice().held(),
            rolls_left: turn.rolls_left(),
            phase: turn.phase(),
            round: session.round(),
            active,
            players,
            cursor: Category::Ones,
            screen: Screen::Playing,
            status: String::new(),
            message: String::new(),
            high_scores: session.high_scores().top(HIGH_SCORE_LIMIT).to_vec(),
        }
    }

    pub fn player(&self, seat: Seat) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.seat == seat)
    }

    pub fn has_rolled(&self) -> bool {
        self.dice[0] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::MemoryStore;
    use crate::rng::ScriptedDice;

    #[test]
    fn test_capture_fresh_game() {
        let mut session = GameSession::new(MemoryStore::with_text("120,a,b\n"));
        session.new_game_mode(GameMode::HumanVsBot, "Ann", "");
        let turn = TurnResolver::new();

        let snap = GameSnapshot::capture(&session, &turn, Some(Seat::One));

        assert_eq!(snap.mode, GameMode::HumanVsBot);
        assert!(!snap.has_rolled());
        assert_eq!(snap.rolls_left, 3);
        assert_eq!(snap.phase, TurnPhase::Fresh);
        assert_eq!(snap.players.len(), 2);
        assert_eq!(snap.player(Seat::Two).unwrap().kind, PlayerKind::Bot);
        assert_eq!(snap.player(Seat::One).unwrap().rows.len(), 13);
        assert_eq!(snap.high_scores, vec![HighScore::new(120, "a", "b")]);
        assert!(snap
            .player(Seat::One)
            .unwrap()
            .rows
            .iter()
            .all(|r| r.potential.is_none()));
    }

    #[test]
    fn test_potentials_only_for_active_seat_and_unused_rows() {
        let mut session = GameSession::new(MemoryStore::new());
        session.new_game_mode(GameMode::HumanVsHuman, "Ann", "Ben");
        session
            .player_mut(Seat::One)
            .unwrap()
            .card_mut()
            .update_score(&[1, 1, 1, 1, 1], Category::Chance);
        let mut turn = TurnResolver::new();
        turn.roll(&mut ScriptedDice::new([2, 3, 4, 5, 6])).unwrap();

        let snap = GameSnapshot::capture(&session, &turn, Some(Seat::One));

        let ann = snap.player(Seat::One).unwrap();
        assert_eq!(ann.row(Category::LargeStraight).potential, Some(40));
        assert_eq!(ann.row(Category::Ones).potential, Some(0));
        assert_eq!(ann.row(Category::Chance).potential, None);
        assert_eq!(ann.row(Category::Chance).score, Some(5));
        assert_eq!(ann.row(Category::Chance).throw, Some([1, 1, 1, 1, 1]));

        let ben = snap.player(Seat::Two).unwrap();
        assert!(ben.rows.iter().all(|r| r.potential.is_none()));
        assert_eq!(snap.dice, [2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = GameSession::new(MemoryStore::new());
        let snap = GameSnapshot::capture(&session, &TurnResolver::new(), Some(Seat::One));
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"screen\":\"playing\""));
        assert!(json.contains("\"plus_minus\":\"even\""));
    }
}
