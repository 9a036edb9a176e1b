//! Controller - runs a whole game from [`GameAction`]s
//!
//! Seats play in order (player one, then player two if seated). After the
//! last seat scores, the round advances; after round 13 the game is recorded
//! and the controller switches to [`Screen::GameOver`].

use crate::core::ai::AiStrategy;
use crate::core::rng::DieSource;
use crate::core::session::{GameSession, Player, Seat};
use crate::core::snapshot::{GameSnapshot, Screen};
use crate::core::turn::TurnResolver;
use crate::types::{Category, GameAction, GameMode, CATEGORY_COUNT};

pub struct Controller {
    session: GameSession,
    turn: TurnResolver,
    dice: Box<dyn DieSource>,
    bot: AiStrategy,
    active: Option<Seat>,
    cursor: Category,
    screen: Screen,
    /// Screen to return to when the high-score list is closed.
    underlying: Screen,
    message: String,
}

impl Controller {
    /// Start the first turn of whatever game `session` has seated.
    pub fn new(session: GameSession, dice: impl DieSource + 'static) -> Self {
        let mut ctl = Self {
            session,
            turn: TurnResolver::new(),
            dice: Box::new(dice),
            bot: AiStrategy::new(),
            active: None,
            cursor: Category::Ones,
            screen: Screen::Playing,
            underlying: Screen::Playing,
            message: String::new(),
        };
        ctl.start();
        ctl
    }

    /// Seat new players and start over.
    pub fn new_game(&mut self, mode: GameMode, player: &str, opponent: &str) {
        self.session.new_game_mode(mode, player, opponent);
        self.start();
    }

    /// Same players, fresh scorecards.
    pub fn play_again(&mut self) {
        self.session.restart();
        self.start();
    }

    fn start(&mut self) {
        self.screen = Screen::Playing;
        self.underlying = Screen::Playing;
        self.message.clear();
        self.begin_turn(Seat::One);
    }

    fn begin_turn(&mut self, seat: Seat) {
        self.active = Some(seat);
        self.turn.begin();
        self.cursor = self
            .session
            .player(seat)
            .and_then(|p| p.card().unused().next())
            .unwrap_or(Category::Ones);
    }

    /// Apply one action. Returns `true` if anything changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::ToggleHighScores => {
                self.toggle_high_scores();
                return true;
            }
            _ if self.screen == Screen::HighScores => {
                log::debug!("ignoring {:?} on the high-score screen", action);
                return false;
            }
            GameAction::PlayAgain => {
                if self.screen != Screen::GameOver {
                    return false;
                }
                self.play_again();
                return true;
            }
            GameAction::Continue => return self.step_bot(),
            _ => {}
        }

        if self.screen != Screen::Playing {
            return false;
        }
        if self.is_bot_turn() {
            log::debug!("ignoring {:?} during the bot's turn", action);
            return false;
        }

        match action {
            GameAction::Roll => self.roll(),
            GameAction::ToggleHold(i) => self.toggle_hold(i as usize),
            GameAction::CursorUp => {
                self.move_cursor(CATEGORY_COUNT - 1);
                true
            }
            GameAction::CursorDown => {
                self.move_cursor(1);
                true
            }
            GameAction::Choose => self.choose_category(self.cursor),
            GameAction::ChooseCategory(c) => self.choose_category(c),
            GameAction::Continue | GameAction::PlayAgain | GameAction::ToggleHighScores => false,
        }
    }

    /// Roll for the active human seat.
    pub fn roll(&mut self) -> bool {
        match self.turn.roll(self.dice.as_mut()) {
            Ok(_) => {
                self.message.clear();
                true
            }
            Err(e) => {
                log::debug!("roll rejected: {}", e);
                self.message = e.to_string();
                false
            }
        }
    }

    pub fn toggle_hold(&mut self, index: usize) -> bool {
        if !self.turn.can_choose() {
            return false;
        }
        let before = self.turn.dice().is_held(index);
        self.turn.toggle_hold(index);
        before != self.turn.dice().is_held(index)
    }

    fn move_cursor(&mut self, step: usize) {
        let next = (self.cursor.index() + step) % CATEGORY_COUNT;
        self.cursor = Category::from_index(next).unwrap_or(Category::Ones);
    }

    /// Score the active seat's dice into `category`.
    pub fn choose_category(&mut self, category: Category) -> bool {
        let Some(seat) = self.active else {
            return false;
        };
        let Some(player) = self.session.player_mut(seat) else {
            return false;
        };
        match self.turn.choose(player.card_mut(), category) {
            Ok(result) => {
                self.message = format!(
                    "{} scored {} in {}",
                    player.name(),
                    result.category_score,
                    category.label()
                );
                if result.yahtzee_bonus {
                    self.message.push_str(" + Yahtzee bonus!");
                }
                self.end_turn(seat);
                true
            }
            Err(e) => {
                log::debug!("choose {:?} rejected: {}", category, e);
                self.message = e.to_string();
                false
            }
        }
    }

    fn end_turn(&mut self, seat: Seat) {
        if let Some(next) = self.session.next_seat(seat) {
            self.begin_turn(next);
            return;
        }
        self.session.advance_round();
        if self.session.is_game_over() {
            self.finish();
        } else {
            self.begin_turn(Seat::One);
        }
    }

    fn finish(&mut self) {
        self.active = None;
        self.screen = Screen::GameOver;
        self.underlying = Screen::GameOver;
        if let Err(e) = self.session.finish_game() {
            self.message = format!("could not save high scores: {}", e);
        }
    }

    fn toggle_high_scores(&mut self) {
        self.screen = if self.screen == Screen::HighScores {
            self.underlying
        } else {
            Screen::HighScores
        };
    }

    pub fn is_bot_turn(&self) -> bool {
        self.screen == Screen::Playing && self.active_player().is_some_and(Player::is_bot)
    }

    /// Play the active seat's whole turn if it belongs to the bot.
    pub fn step_bot(&mut self) -> bool {
        if !self.is_bot_turn() {
            return false;
        }
        let Some(seat) = self.active else {
            return false;
        };
        let Some(player) = self.session.player_mut(seat) else {
            return false;
        };

        self.turn.begin();
        let picked = self
            .bot
            .play_turn(&mut self.turn, player.card_mut(), self.dice.as_mut());
        let Some(category) = picked else {
            log::warn!("{} found nothing to score", player.name());
            return false;
        };

        self.message = format!(
            "{} scored {} in {}",
            player.name(),
            player.card().score(category).unwrap_or(0),
            category.label()
        );
        self.end_turn(seat);
        true
    }

    /// Play bot turns until a human is up or the game is over.
    pub fn run_bots(&mut self) {
        while self.step_bot() {}
    }

    pub fn status(&self) -> String {
        match self.screen {
            Screen::HighScores => "High Scores".to_string(),
            Screen::GameOver => {
                let (name, score, _) = self.session.winner();
                if self.session.is_solitaire() {
                    format!("Game Complete! Score: {}", score)
                } else {
                    format!("{} WINS!!!!", name)
                }
            }
            Screen::Playing => match self.active_player() {
                Some(p) => {
                    let n = self.turn.rolls_left();
                    let unit = if n == 1 { "roll" } else { "rolls" };
                    format!("{}'s turn. {} {} left", p.name(), n, unit)
                }
                None => String::new(),
            },
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::capture(&self.session, &self.turn, self.active);
        snap.cursor = self.cursor;
        snap.screen = self.screen;
        snap.status = self.status();
        snap.message = self.message.clone();
        snap
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn turn(&self) -> &TurnResolver {
        &self.turn
    }

    pub fn active_seat(&self) -> Option<Seat> {
        self.active
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.session.player(self.active?)
    }

    pub fn cursor(&self) -> Category {
        self.cursor
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::highscore::MemoryStore;
    use crate::core::rng::{RandomDice, ScriptedDice};
    use crate::core::turn::TurnPhase;

    fn controller(mode: GameMode, dice: impl DieSource + 'static) -> (Controller, MemoryStore) {
        let store = MemoryStore::new();
        let mut session = GameSession::new(store.clone());
        session.new_game_mode(mode, "Ann", "Ben");
        (Controller::new(session, dice), store)
    }

    #[test]
    fn test_status_counts_rolls() {
        let (mut ctl, _) = controller(GameMode::Practice, ScriptedDice::new([1, 2, 3]));
        assert_eq!(ctl.status(), "Ann's turn. 3 rolls left");
        ctl.apply(GameAction::Roll);
        ctl.apply(GameAction::Roll);
        assert_eq!(ctl.status(), "Ann's turn. 1 roll left");
    }

    #[test]
    fn test_actions_before_roll_are_rejected() {
        let (mut ctl, _) = controller(GameMode::Practice, ScriptedDice::new([6]));
        assert!(!ctl.apply(GameAction::ToggleHold(0)));
        assert!(!ctl.apply(GameAction::Choose));
        assert_eq!(ctl.message(), "roll the dice before choosing a category");
        assert_eq!(ctl.session().round(), 0);
    }

    #[test]
    fn test_seats_rotate_and_round_advances() {
        let (mut ctl, _) = controller(GameMode::HumanVsHuman, ScriptedDice::new([5]));
        assert_eq!(ctl.active_seat(), Some(Seat::One));

        ctl.apply(GameAction::Roll);
        assert!(ctl.apply(GameAction::ChooseCategory(Category::Fives)));
        assert_eq!(ctl.active_seat(), Some(Seat::Two));
        assert_eq!(ctl.session().round(), 0);
        assert_eq!(ctl.turn().phase(), TurnPhase::Fresh);
        assert_eq!(ctl.message(), "Ann scored 25 in Fives");

        ctl.apply(GameAction::Roll);
        ctl.apply(GameAction::ChooseCategory(Category::Yahtzee));
        assert_eq!(ctl.active_seat(), Some(Seat::One));
        assert_eq!(ctl.session().round(), 1);
        // Cursor lands on the first open row.
        assert_eq!(ctl.cursor(), Category::Ones);
    }

    #[test]
    fn test_used_category_keeps_turn() {
        let (mut ctl, _) = controller(GameMode::Practice, ScriptedDice::new([2]));
        ctl.apply(GameAction::Roll);
        ctl.apply(GameAction::ChooseCategory(Category::Twos));
        ctl.apply(GameAction::Roll);

        assert!(!ctl.apply(GameAction::ChooseCategory(Category::Twos)));
        assert_eq!(ctl.message(), "Twos is already scored");
        assert_eq!(ctl.turn().phase(), TurnPhase::Rolling);
        assert_eq!(ctl.session().round(), 1);
    }

    #[test]
    fn test_cursor_wraps_and_chooses() {
        let (mut ctl, _) = controller(GameMode::Practice, ScriptedDice::new([1, 2, 3, 4, 5]));
        ctl.apply(GameAction::CursorUp);
        assert_eq!(ctl.cursor(), Category::Chance);
        ctl.apply(GameAction::CursorDown);
        assert_eq!(ctl.cursor(), Category::Ones);

        ctl.apply(GameAction::Roll);
        for _ in 0..10 {
            ctl.apply(GameAction::CursorDown);
        }
        assert_eq!(ctl.cursor(), Category::LargeStraight);
        assert!(ctl.apply(GameAction::Choose));
        let card = ctl.session().player(Seat::One).unwrap().card();
        assert_eq!(card.score(Category::LargeStraight), Some(40));
    }

    #[test]
    fn test_bot_waits_for_step() {
        let (mut ctl, _) = controller(GameMode::HumanVsBot, RandomDice::seeded(3));
        ctl.apply(GameAction::Roll);
        ctl.apply(GameAction::ChooseCategory(Category::Chance));

        assert!(ctl.is_bot_turn());
        assert!(!ctl.apply(GameAction::Roll));

        assert!(ctl.apply(GameAction::Continue));
        assert!(!ctl.is_bot_turn());
        assert_eq!(ctl.active_seat(), Some(Seat::One));
        assert_eq!(ctl.session().round(), 1);
        assert!(ctl.message().starts_with("Yahtzee Bot scored"));
    }

    #[test]
    fn test_full_game_against_bot() {
        let (mut ctl, store) = controller(GameMode::HumanVsBot, RandomDice::seeded(11));
        while !ctl.is_game_over() {
            if ctl.is_bot_turn() {
                ctl.step_bot();
                continue;
            }
            ctl.apply(GameAction::Roll);
            ctl.apply(GameAction::Choose);
        }

        assert_eq!(ctl.screen(), Screen::GameOver);
        assert_eq!(ctl.active_seat(), None);
        assert!(ctl.status().ends_with("WINS!!!!"));
        assert_eq!(store.text().lines().count(), 2);
        for seat in [Seat::One, Seat::Two] {
            assert!(ctl.session().player(seat).unwrap().card().is_complete());
        }

        // Only the high-score toggle and play-again do anything now.
        assert!(!ctl.apply(GameAction::Roll));
        assert!(ctl.apply(GameAction::PlayAgain));
        assert_eq!(ctl.screen(), Screen::Playing);
        assert_eq!(ctl.session().round(), 0);
        assert_eq!(ctl.active_player().unwrap().name(), "Ann");
    }

    #[test]
    fn test_practice_game_over_banner() {
        let (mut ctl, store) = controller(GameMode::Practice, ScriptedDice::new([6]));
        for cat in Category::ALL {
            ctl.apply(GameAction::Roll);
            ctl.apply(GameAction::ChooseCategory(cat));
        }
        let total = ctl.session().player(Seat::One).unwrap().card().final_tally();
        assert_eq!(ctl.status(), format!("Game Complete! Score: {}", total));
        assert_eq!(store.text(), format!("{},Ann,\n", total));
    }

    #[test]
    fn test_high_score_screen_toggles_back() {
        let (mut ctl, _) = controller(GameMode::Practice, ScriptedDice::new([4]));
        ctl.apply(GameAction::ToggleHighScores);
        assert_eq!(ctl.screen(), Screen::HighScores);
        assert!(!ctl.apply(GameAction::Roll));

        ctl.apply(GameAction::ToggleHighScores);
        assert_eq!(ctl.screen(), Screen::Playing);
        assert!(ctl.apply(GameAction::Roll));
    }

    #[test]
    fn test_snapshot_carries_controller_state() {
        let (mut ctl, _) = controller(GameMode::Practice, ScriptedDice::new([3]));
        ctl.apply(GameAction::Roll);
        ctl.apply(GameAction::ToggleHold(2));
        ctl.apply(GameAction::CursorDown);

        let snap = ctl.snapshot();
        assert_eq!(snap.dice, [3; 5]);
        assert_eq!(snap.held, [false, false, true, false, false]);
        assert_eq!(snap.cursor, Category::Twos);
        assert_eq!(snap.status, "Ann's turn. 2 rolls left");
        assert_eq!(snap.active, Some(Seat::One));
    }
}
