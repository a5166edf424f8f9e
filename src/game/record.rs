use rand::Rng;

use super::types::{QuarterScore, TableRow};

pub const QUARTERS: usize = 4;

/// The four-quarter score history of one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    quarters: [QuarterScore; QUARTERS],
}

impl TeamRecord {
    pub fn new(quarters: [QuarterScore; QUARTERS]) -> Self {
        Self { quarters }
    }

    /// Score of `quarter` (1-based).
    pub fn get(&self, quarter: usize) -> &QuarterScore {
        &self.quarters[Self::slot(quarter)]
    }

    /// Roll a fresh score for `quarter` (1-based) and store it.
    pub fn roll<R: Rng + ?Sized>(&mut self, quarter: usize, rng: &mut R) -> QuarterScore {
        let score = QuarterScore::roll(rng);
        self.quarters[Self::slot(quarter)] = score;
        score
    }

    fn slot(quarter: usize) -> usize {
        assert!(
            (1..=QUARTERS).contains(&quarter),
            "quarter {} outside 1..={}",
            quarter,
            QUARTERS
        );
        quarter - 1
    }

    pub fn quarter_total(&self, quarter: usize) -> u32 {
        self.get(quarter).total()
    }

    pub fn game_total(&self) -> u32 {
        self.quarters.iter().map(QuarterScore::total).sum()
    }

    /// Header, one row per quarter and a footer with the game total.
    pub fn rows(&self) -> Vec<TableRow> {
        let mut rows = Vec::with_capacity(QUARTERS + 2);
        rows.push(TableRow::Header);
        for (i, q) in self.quarters.iter().enumerate() {
            rows.push(TableRow::Quarter {
                number: i + 1,
                threes: q.threes,
                twos: q.twos,
                total: q.total(),
            });
        }
        rows.push(TableRow::Footer {
            total: self.game_total(),
        });
        rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuarterScore> {
        self.quarters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TeamRecord {
        // Quarter totals 5, 7, 0, 3.
        TeamRecord::new([
            QuarterScore::new(1, 1),
            QuarterScore::new(1, 2),
            QuarterScore::ZERO,
            QuarterScore::new(1, 0),
        ])
    }

    #[test]
    fn game_total_sums_quarters() {
        let record = sample();
        let totals: Vec<u32> = (1..=QUARTERS).map(|q| record.quarter_total(q)).collect();
        assert_eq!(totals, vec![5, 7, 0, 3]);
        assert_eq!(record.game_total(), 15);
    }

    #[test]
    fn default_record_is_all_zero() {
        let record = TeamRecord::default();
        assert_eq!(record.iter().count(), QUARTERS);
        assert!(record.iter().all(|q| *q == QuarterScore::ZERO));
        assert_eq!(record.game_total(), 0);
    }

    #[test]
    #[should_panic(expected = "quarter 0 outside 1..=4")]
    fn quarter_zero_is_rejected() {
        sample().quarter_total(0);
    }

    #[test]
    #[should_panic(expected = "quarter 5 outside 1..=4")]
    fn quarter_past_the_end_is_rejected() {
        TeamRecord::default().get(5);
    }

    #[test]
    fn rows_have_header_quarters_and_footer() {
        let rows = sample().rows();
        assert_eq!(rows.len(), QUARTERS + 2);
        assert_eq!(rows[0], TableRow::Header);
        assert_eq!(
            rows[2],
            TableRow::Quarter {
                number: 2,
                threes: 1,
                twos: 2,
                total: 7
            }
        );
        assert_eq!(rows[5], TableRow::Footer { total: 15 });
        assert_eq!(rows[1].cells(), ["1", "1", "1", "5"].map(String::from));
    }
}
