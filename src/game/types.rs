use std::fmt;

use rand::Rng;

/// Highest number of baskets of one kind a team can score in a quarter.
pub const MAX_BASKETS: u8 = 6;

/// Baskets scored by one team in one quarter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuarterScore {
    pub threes: u8,
    pub twos: u8,
}

impl QuarterScore {
    pub const ZERO: Self = Self { threes: 0, twos: 0 };

    pub fn new(threes: u8, twos: u8) -> Self {
        Self { threes, twos }
    }

    /// Sample both basket counts independently and uniformly from `0..=MAX_BASKETS`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            threes: rng.gen_range(0..=MAX_BASKETS),
            twos: rng.gen_range(0..=MAX_BASKETS),
        }
    }

    /// Points for this quarter: 3 per three-pointer, 2 per two-pointer.
    pub fn total(&self) -> u32 {
        3 * u32::from(self.threes) + 2 * u32::from(self.twos)
    }
}

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Cpu,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Cpu];

    /// Fluent message id of the side's caption.
    pub fn message_id(self) -> &'static str {
        match self {
            Side::Player => "team-player",
            Side::Cpu => "team-cpu",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Cpu => f.write_str("CPU"),
        }
    }
}

/// Summary of the score comparison shown above the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No quarter played yet.
    Ready,
    /// `side` leads by `margin` points after an intermediate quarter.
    Ahead { side: Side, margin: u32 },
    /// `side` won by `margin` points after the fourth quarter.
    Won { side: Side, margin: u32 },
    /// Scores are equal after an intermediate quarter.
    Level,
    /// Scores are equal after the fourth quarter.
    Draw,
}

impl Status {
    /// Whether the status reports the result of a finished game.
    pub fn is_final(&self) -> bool {
        matches!(self, Status::Won { .. } | Status::Draw)
    }

    /// Fluent message id and the point margin argument, if any.
    pub fn message(&self) -> (&'static str, Option<u32>) {
        match *self {
            Status::Ready => ("status-ready", None),
            Status::Ahead { side: Side::Player, margin } => ("status-player-ahead", Some(margin)),
            Status::Ahead { side: Side::Cpu, margin } => ("status-cpu-ahead", Some(margin)),
            Status::Won { side: Side::Player, margin } => ("status-player-wins", Some(margin)),
            Status::Won { side: Side::Cpu, margin } => ("status-cpu-wins", Some(margin)),
            Status::Level => ("status-level", None),
            Status::Draw => ("status-draw", None),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Ready
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => f.write_str("Ready to Roll"),
            Status::Ahead { side, margin } => write!(f, "{} ahead by {}", side, margin),
            Status::Won { side, margin } => write!(f, "{} wins by {}", side, margin),
            Status::Level => f.write_str("Scores level!!!"),
            Status::Draw => f.write_str("It's a draw!!!"),
        }
    }
}

/// One row of a team's score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRow {
    Header,
    Quarter {
        number: usize,
        threes: u8,
        twos: u8,
        total: u32,
    },
    Footer {
        total: u32,
    },
}

impl TableRow {
    pub const HEADER: [&'static str; 4] = ["Quarter", "3pts", "2pts", "Total"];
    pub const FOOTER_LABEL: &'static str = "Score";

    /// The four cells of the row as displayed text.
    pub fn cells(&self) -> [String; 4] {
        match *self {
            TableRow::Header => Self::HEADER.map(str::to_string),
            TableRow::Quarter {
                number,
                threes,
                twos,
                total,
            } => [
                number.to_string(),
                threes.to_string(),
                twos.to_string(),
                total.to_string(),
            ],
            TableRow::Footer { total } => [
                Self::FOOTER_LABEL.to_string(),
                String::new(),
                String::new(),
                total.to_string(),
            ],
        }
    }

    /// Header and footer are rendered in bold.
    pub fn is_emphasized(&self) -> bool {
        !matches!(self, TableRow::Quarter { .. })
    }
}
