//! Session module - one game between one or two seated players
//!
//! The session owns the scorecards, the round counter and the high-score
//! list. It does not sequence turns itself; a driver (see the engine crate)
//! plays each seat's turn with a [`crate::turn::TurnResolver`] and calls
//! [`GameSession::advance_round`] once every seat has played.

use serde::Serialize;

use crate::highscore::{HighScore, HighScoreError, HighScoreStore, HighScoreTable};
use crate::scorecard::Scorecard;
use crate::types::{GameMode, PlayerKind, BOT_NAME, HIGH_SCORE_LIMIT, MAX_ROUNDS};

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// A named player and their scorecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    card: Scorecard,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            card: Scorecard::new(),
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    /// The bot, named [`BOT_NAME`].
    pub fn bot() -> Self {
        Self::new(BOT_NAME, PlayerKind::Bot)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }

    pub fn card(&self) -> &Scorecard {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut Scorecard {
        &mut self.card
    }

    fn reset_card(&mut self) {
        self.card = Scorecard::new();
    }
}

/// Players, round counter and high scores for one game.
pub struct GameSession {
    player_one: Player,
    player_two: Option<Player>,
    round: u8,
    high_scores: HighScoreTable,
    store: Box<dyn HighScoreStore>,
    recorded: bool,
}

impl GameSession {
    /// Open a session, loading high scores from `store`.
    ///
    /// A failed load is logged and leaves the list empty. The session starts
    /// with a single seat named "Player 1"; call [`GameSession::new_game`] to
    /// seat the real players.
    pub fn new(store: impl HighScoreStore + 'static) -> Self {
        let high_scores = match store.load() {
            Ok(table) => {
                log::info!("loaded {} high scores", table.len());
                table
            }
            Err(e) => {
                log::warn!("could not read high scores: {}", e);
                HighScoreTable::new()
            }
        };
        Self {
            player_one: Player::human("Player 1"),
            player_two: None,
            round: 0,
            high_scores,
            store: Box::new(store),
            recorded: false,
        }
    }

    /// Seat new players with fresh scorecards at round 0.
    pub fn new_game(&mut self, player_one: Player, player_two: Option<Player>) {
        log::info!(
            "new game: {} vs {}",
            player_one.name(),
            player_two.as_ref().map(Player::name).unwrap_or("-")
        );
        self.player_one = player_one;
        self.player_two = player_two;
        self.round = 0;
        self.recorded = false;
    }

    /// Seat players for a [`GameMode`]. `opponent` is ignored unless both
    /// seats are human.
    pub fn new_game_mode(&mut self, mode: GameMode, player: &str, opponent: &str) {
        let one = Player::human(player);
        let two = match mode {
            GameMode::Practice => None,
            GameMode::HumanVsHuman => Some(Player::human(opponent)),
            GameMode::HumanVsBot => Some(Player::bot()),
        };
        self.new_game(one, two);
    }

    /// Same players, fresh scorecards.
    pub fn restart(&mut self) {
        self.player_one.reset_card();
        if let Some(p) = self.player_two.as_mut() {
            p.reset_card();
        }
        self.round = 0;
        self.recorded = false;
    }

    pub fn mode(&self) -> GameMode {
        match &self.player_two {
            None => GameMode::Practice,
            Some(p) if p.is_bot() => GameMode::HumanVsBot,
            Some(_) => GameMode::HumanVsHuman,
        }
    }

    pub fn is_solitaire(&self) -> bool {
        self.player_two.is_none()
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        match seat {
            Seat::One => Some(&self.player_one),
            Seat::Two => self.player_two.as_ref(),
        }
    }

    pub fn player_mut(&mut self, seat: Seat) -> Option<&mut Player> {
        match seat {
            Seat::One => Some(&mut self.player_one),
            Seat::Two => self.player_two.as_mut(),
        }
    }

    /// Occupied seats in turn order.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        [Seat::One, Seat::Two]
            .into_iter()
            .filter(|s| self.player(*s).is_some())
    }

    /// The seat after `seat` within the round, if any.
    pub fn next_seat(&self, seat: Seat) -> Option<Seat> {
        match seat {
            Seat::One if self.player_two.is_some() => Some(Seat::Two),
            _ => None,
        }
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn is_game_over(&self) -> bool {
        self.round >= MAX_ROUNDS
    }

    /// Count a completed round. Saturates at [`MAX_ROUNDS`].
    pub fn advance_round(&mut self) {
        if self.round < MAX_ROUNDS {
            self.round += 1;
        }
    }

    /// `(winner_name, winning_score, losing_score)`.
    ///
    /// Player one wins only with a strictly higher total; a tie goes to
    /// player two. With no second seat player one always wins, against 0.
    pub fn winner(&self) -> (String, u16, u16) {
        let p1 = self.player_one.card().final_tally();
        let Some(two) = &self.player_two else {
            return (self.player_one.name().to_string(), p1, 0);
        };
        let (p2_name, p2) = (two.name(), two.card().final_tally());
        if p1 > p2 {
            (self.player_one.name().to_string(), p1, p2)
        } else {
            (p2_name.to_string(), p2, p1)
        }
    }

    /// Record this game's scores and persist the top list.
    ///
    /// Adds one entry per seated player (solitaire: player one only, with an
    /// empty opponent), keeps the best [`HIGH_SCORE_LIMIT`], and saves. Runs
    /// once per game; later calls do nothing. A failed save is logged and
    /// returned, the in-memory list keeps the new entries either way.
    pub fn finish_game(&mut self) -> Result<(), HighScoreError> {
        if self.recorded {
            return Ok(());
        }
        self.recorded = true;

        let one = &self.player_one;
        match &self.player_two {
            Some(two) => {
                self.high_scores.push(HighScore::new(
                    one.card().final_tally(),
                    one.name(),
                    two.name(),
                ));
                self.high_scores.push(HighScore::new(
                    two.card().final_tally(),
                    two.name(),
                    one.name(),
                ));
            }
            None => {
                self.high_scores
                    .push(HighScore::new(one.card().final_tally(), one.name(), ""));
            }
        }
        self.high_scores.truncate(HIGH_SCORE_LIMIT);

        let (name, won, lost) = self.winner();
        log::info!("game over: {} {}-{}", name, won, lost);

        self.store.save(&self.high_scores).map_err(|e| {
            log::error!("could not write high scores: {}", e);
            e
        })
    }

    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    /// Best `limit` entries, highest first.
    pub fn sorted_high_scores(&self, limit: usize) -> &[HighScore] {
        self.high_scores.top(limit)
    }
}
