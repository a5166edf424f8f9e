use rand::Rng;
use tracing::debug;

use super::record::{TeamRecord, QUARTERS};
use super::types::{Side, Status, TableRow};

/// Quarter value meaning all four quarters are played and the next advance resets.
pub const ROUND_COMPLETE: usize = QUARTERS + 1;

/// Button captions, indexed by `current_quarter - 1`.
pub const ACTION_LABELS: [&str; ROUND_COMPLETE] = [
    "Roll first quarter",
    "Roll second quarter",
    "Roll third quarter",
    "Roll fourth quarter",
    "Play again",
];

/// Fluent message ids matching `ACTION_LABELS`.
pub const ACTION_MESSAGE_IDS: [&str; ROUND_COMPLETE] = [
    "action-roll-first",
    "action-roll-second",
    "action-roll-third",
    "action-roll-fourth",
    "action-play-again",
];

/// Central game state holding everything needed for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    player: TeamRecord,
    cpu: TeamRecord,
    current_quarter: usize,
    status: Status,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: TeamRecord::default(),
            cpu: TeamRecord::default(),
            current_quarter: 1,
            status: Status::Ready,
        }
    }

    /// Play the next quarter, or start over once the round is complete.
    pub fn advance(&mut self) {
        self.advance_with(&mut rand::thread_rng());
    }

    /// Like [`GameState::advance`], drawing scores from `rng`.
    pub fn advance_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.current_quarter {
            quarter @ 1..=QUARTERS => {
                let player = self.player.roll(quarter, rng);
                let cpu = self.cpu.roll(quarter, rng);
                self.status = self.compute_status(true);
                debug!(quarter, ?player, ?cpu, status = %self.status, "quarter played");
                self.current_quarter += 1;
            }
            ROUND_COMPLETE => {
                self.player = TeamRecord::default();
                self.cpu = TeamRecord::default();
                self.current_quarter = 1;
                self.status = self.compute_status(false);
                debug!("round reset");
            }
            other => unreachable!("quarter {} outside 1..={}", other, ROUND_COMPLETE),
        }
    }

    /// Compare the running totals. The final wording is used while
    /// `current_quarter` still points at the fourth quarter.
    pub fn compute_status(&self, in_progress: bool) -> Status {
        if !in_progress {
            return Status::Ready;
        }
        let player = self.player.game_total();
        let cpu = self.cpu.game_total();
        let last = self.current_quarter == QUARTERS;

        let leader = if player > cpu {
            Some((Side::Player, player - cpu))
        } else if cpu > player {
            Some((Side::Cpu, cpu - player))
        } else {
            None
        };

        match (leader, last) {
            (Some((side, margin)), true) => Status::Won { side, margin },
            (Some((side, margin)), false) => Status::Ahead { side, margin },
            (None, true) => Status::Draw,
            (None, false) => Status::Level,
        }
    }

    pub fn current_quarter(&self) -> usize {
        self.current_quarter
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn team(&self, side: Side) -> &TeamRecord {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }

    pub fn quarter_total(&self, side: Side, quarter: usize) -> u32 {
        self.team(side).quarter_total(quarter)
    }

    pub fn game_total(&self, side: Side) -> u32 {
        self.team(side).game_total()
    }

    /// Score table for `side`, derived from the current records.
    pub fn rows(&self, side: Side) -> Vec<TableRow> {
        self.team(side).rows()
    }

    /// The quarter scored by the most recent advance, if any.
    pub fn last_played_quarter(&self) -> Option<usize> {
        match self.current_quarter {
            1 => None,
            q => Some(q - 1),
        }
    }

    pub fn action_label(&self) -> &'static str {
        ACTION_LABELS[self.action_index()]
    }

    pub fn action_message_id(&self) -> &'static str {
        ACTION_MESSAGE_IDS[self.action_index()]
    }

    fn action_index(&self) -> usize {
        match self.current_quarter {
            q @ 1..=ROUND_COMPLETE => q - 1,
            other => unreachable!("quarter {} outside 1..={}", other, ROUND_COMPLETE),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::QuarterScore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A record holding `scores` (threes, twos) in its first quarters and zero afterwards.
    fn record(scores: &[(u8, u8)]) -> TeamRecord {
        let mut quarters = [QuarterScore::ZERO; QUARTERS];
        for (slot, &(threes, twos)) in quarters.iter_mut().zip(scores) {
            *slot = QuarterScore::new(threes, twos);
        }
        TeamRecord::new(quarters)
    }

    fn state(player: TeamRecord, cpu: TeamRecord, quarter: usize) -> GameState {
        GameState {
            player,
            cpu,
            current_quarter: quarter,
            status: Status::Ready,
        }
    }

    #[test]
    fn new_game_is_ready() {
        let game = GameState::new();
        assert_eq!(game.current_quarter(), 1);
        assert_eq!(game.status().to_string(), "Ready to Roll");
        assert_eq!(game.game_total(Side::Player), 0);
        assert_eq!(game.game_total(Side::Cpu), 0);
        assert_eq!(game.last_played_quarter(), None);
    }

    #[test]
    fn player_wins_after_fourth_quarter() {
        // 20 against 15
        let game = state(record(&[(2, 2), (2, 2)]), record(&[(3, 3)]), 4);
        assert_eq!(game.game_total(Side::Player), 20);
        assert_eq!(game.game_total(Side::Cpu), 15);
        assert_eq!(game.compute_status(true).to_string(), "Player wins by 5");
    }

    #[test]
    fn cpu_wins_after_fourth_quarter() {
        // 6 against 15
        let game = state(record(&[(2, 0)]), record(&[(1, 1), (0, 2), (0, 3)]), 4);
        assert_eq!(game.compute_status(true).to_string(), "CPU wins by 9");
    }

    #[test]
    fn equal_scores_mid_game_are_level() {
        let game = state(record(&[(2, 0)]), record(&[(0, 3)]), 2);
        assert_eq!(game.compute_status(true).to_string(), "Scores level!!!");
    }

    #[test]
    fn equal_scores_at_the_end_are_a_draw() {
        let game = state(record(&[(1, 1), (1, 1)]), record(&[(2, 2)]), 4);
        assert_eq!(game.compute_status(true), Status::Draw);
        assert_eq!(game.compute_status(true).to_string(), "It's a draw!!!");
    }

    #[test]
    fn leads_before_the_last_quarter_use_ahead_wording() {
        let game = state(record(&[(4, 4)]), record(&[(2, 4), (1, 0)]), 3);
        assert_eq!(game.compute_status(true).to_string(), "Player ahead by 3");
        let game = state(record(&[(1, 0)]), record(&[(2, 4)]), 1);
        assert_eq!(game.compute_status(true).to_string(), "CPU ahead by 11");
    }

    #[test]
    fn not_in_progress_is_ready() {
        let game = state(record(&[(6, 6)]), record(&[(0, 1)]), 4);
        assert_eq!(game.compute_status(false), Status::Ready);
    }

    #[test]
    fn advance_plays_first_quarter() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = GameState::new();
        game.advance_with(&mut rng);

        assert_eq!(game.current_quarter(), 2);
        assert_eq!(game.last_played_quarter(), Some(1));
        assert_ne!(game.status(), Status::Ready);
        assert!(!game.status().is_final());
        // Only the first quarter may hold points.
        for side in Side::ALL {
            for q in 2..=QUARTERS {
                assert_eq!(*game.team(side).get(q), QuarterScore::ZERO);
            }
        }
        let expected = state(game.player, game.cpu, 1);
        assert_eq!(game.status(), expected.compute_status(true));
    }

    #[test]
    fn four_advances_finish_the_round() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = GameState::new();
        for _ in 0..QUARTERS {
            game.advance_with(&mut rng);
        }
        assert_eq!(game.current_quarter(), ROUND_COMPLETE);
        assert!(game.status().is_final());
        assert_eq!(game.action_label(), "Play again");
        assert_eq!(game.last_played_quarter(), Some(QUARTERS));
    }

    #[test]
    fn advance_after_round_resets() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = GameState::new();
        for _ in 0..QUARTERS {
            game.advance_with(&mut rng);
        }
        game.advance_with(&mut rng);

        assert_eq!(game, GameState::new());
        assert_eq!(game.status().to_string(), "Ready to Roll");
    }

    #[test]
    fn seeded_games_repeat() {
        let play = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new();
            for _ in 0..QUARTERS {
                game.advance_with(&mut rng);
            }
            game
        };
        assert_eq!(play(11), play(11));
    }

    #[test]
    fn action_label_follows_quarter() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = GameState::new();
        let mut labels = vec![game.action_label()];
        for _ in 0..ROUND_COMPLETE {
            game.advance_with(&mut rng);
            labels.push(game.action_label());
        }
        assert_eq!(
            labels,
            vec![
                "Roll first quarter",
                "Roll second quarter",
                "Roll third quarter",
                "Roll fourth quarter",
                "Play again",
                "Roll first quarter",
            ]
        );
    }

    #[test]
    fn rows_reflect_played_quarters() {
        let game = state(record(&[(4, 4)]), TeamRecord::default(), 2);
        let rows = game.rows(Side::Player);
        assert_eq!(rows.last(), Some(&TableRow::Footer { total: 20 }));
        assert_eq!(game.quarter_total(Side::Player, 1), 20);
        assert_eq!(game.rows(Side::Cpu)[5], TableRow::Footer { total: 0 });
    }
}
