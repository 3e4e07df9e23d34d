//! Summary statistics over a filtered set of plays.

use super::format;
use super::play::{PassResult, PlayRecord};

/// Plays per result, used by the donut chart. Plays without a recorded
/// result are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCounts {
    pub complete: usize,
    pub incomplete: usize,
    pub interception: usize,
}

impl ResultCounts {
    pub fn total(&self) -> usize {
        self.complete + self.incomplete + self.interception
    }

    pub fn get(&self, result: PassResult) -> usize {
        match result {
            PassResult::Complete => self.complete,
            PassResult::Incomplete => self.incomplete,
            PassResult::Interception => self.interception,
        }
    }

    fn record(&mut self, result: PassResult) {
        match result {
            PassResult::Complete => self.complete += 1,
            PassResult::Incomplete => self.incomplete += 1,
            PassResult::Interception => self.interception += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub count: usize,
    /// Percent of plays completed; `None` when nothing matched.
    pub completion_pct: Option<f64>,
    pub avg_yards_gained: Option<f64>,
    /// Mean over every matching play, unset lengths counting as zero.
    pub avg_pass_length: Option<f64>,
    /// Mean over the plays that carry an EPA value only.
    pub avg_epa: Option<f64>,
    pub results: ResultCounts,
}

/// Aggregate the given plays in a single pass.
pub fn summarize<'a, I>(plays: I) -> Stats
where
    I: IntoIterator<Item = &'a PlayRecord>,
{
    let mut count = 0usize;
    let mut results = ResultCounts::default();
    let mut yards_sum = 0.0;
    let mut length_sum = 0.0;
    let mut epa_sum = 0.0;
    let mut epa_count = 0usize;

    for play in plays {
        count += 1;
        yards_sum += play.yards_gained;
        length_sum += play.pass_length.unwrap_or(0.0);
        if let Some(epa) = play.epa {
            epa_sum += epa;
            epa_count += 1;
        }
        if let Some(result) = play.pass_result {
            results.record(result);
        }
    }

    Stats {
        count,
        completion_pct: ratio(results.complete as f64 * 100.0, count),
        avg_yards_gained: ratio(yards_sum, count),
        avg_pass_length: ratio(length_sum, count),
        avg_epa: ratio(epa_sum, epa_count),
        results,
    }
}

fn ratio(sum: f64, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(sum / denominator as f64)
    }
}

/// The five summary strings shown above the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDisplay {
    pub plays: String,
    pub completion: String,
    pub avg_yards: String,
    pub avg_length: String,
    pub avg_epa: String,
}

impl From<&Stats> for StatsDisplay {
    fn from(stats: &Stats) -> Self {
        Self {
            plays: format::format_count(stats.count),
            completion: format::format_percent(stats.completion_pct),
            avg_yards: format::format_yards(stats.avg_yards_gained),
            avg_length: format::format_yards(stats.avg_pass_length),
            avg_epa: format::format_number(stats.avg_epa, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::play::tests::play;
    use crate::core::{filter, FilterCriteria};

    #[test]
    fn summarizing_same_matches_twice_is_identical() {
        let plays = [
            PlayRecord {
                down: 3,
                epa: Some(0.8),
                ..play()
            },
            PlayRecord {
                down: 3,
                pass_result: Some(PassResult::Incomplete),
                pass_length: None,
                epa: None,
                ..play()
            },
            PlayRecord { down: 1, ..play() },
        ];
        let criteria = FilterCriteria {
            down: Some(3),
            ..FilterCriteria::default()
        };

        let first = summarize(filter(&plays, &criteria));
        let second = summarize(filter(&plays, &criteria));
        assert_eq!(first.count, 2);
        assert_eq!(first, second);
        assert_eq!(StatsDisplay::from(&first), StatsDisplay::from(&second));
    }

    #[test]
    fn empty_input_yields_placeholders() {
        let stats = summarize(std::iter::empty());
        assert_eq!(stats, Stats::default());

        let display = StatsDisplay::from(&stats);
        assert_eq!(display.plays, "0");
        assert_eq!(display.completion, "--%");
        assert_eq!(display.avg_yards, "-- yds");
        assert_eq!(display.avg_length, "-- yds");
        assert_eq!(display.avg_epa, "--");
    }

    #[test]
    fn epa_average_skips_missing_values() {
        let plays = [
            PlayRecord {
                epa: Some(0.5),
                ..play()
            },
            PlayRecord { epa: None, ..play() },
            PlayRecord {
                epa: Some(1.5),
                ..play()
            },
        ];
        let stats = summarize(&plays);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.avg_epa, Some(1.0));
        assert_eq!(StatsDisplay::from(&stats).avg_epa, "1.00");
    }

    #[test]
    fn epa_placeholder_when_no_play_has_epa() {
        let plays = [PlayRecord { epa: None, ..play() }];
        let stats = summarize(&plays);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.avg_epa, None);
        assert!(stats.avg_yards_gained.is_some());
    }

    #[test]
    fn unset_results_are_left_out_of_chart_counts() {
        let plays = [
            PlayRecord {
                pass_result: Some(PassResult::Complete),
                ..play()
            },
            PlayRecord {
                pass_result: Some(PassResult::Interception),
                ..play()
            },
            PlayRecord {
                pass_result: None,
                ..play()
            },
        ];
        let stats = summarize(&plays);
        assert_eq!(
            stats.results,
            ResultCounts {
                complete: 1,
                incomplete: 0,
                interception: 1,
            }
        );
        assert_eq!(stats.results.total(), 2);
        let pct = stats.completion_pct.unwrap();
        assert!((pct - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn averages_cover_all_matches() {
        let plays = [
            PlayRecord {
                yards_gained: 12.0,
                pass_length: Some(15.0),
                ..play()
            },
            PlayRecord {
                yards_gained: -2.0,
                pass_length: Some(5.0),
                ..play()
            },
        ];
        let stats = summarize(&plays);
        assert_eq!(stats.avg_yards_gained, Some(5.0));
        assert_eq!(stats.avg_pass_length, Some(10.0));
    }
}
