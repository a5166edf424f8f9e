pub mod logic;
pub mod record;
pub mod types;

pub use logic::GameState;
pub use record::TeamRecord;
pub use types::{QuarterScore, Side, Status, TableRow};
