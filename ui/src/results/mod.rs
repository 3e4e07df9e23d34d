mod summary;
pub use summary::StatsSummary;

mod chart;
pub use chart::{ChartSlot, DonutChart, DonutSegment, ResultsChart};

mod list;
pub use list::{PlayList, PlayListView, PlaySummary};

mod utils;
pub(crate) use utils::*;

use crate::controls::{FilterCommand, FilterControls};
use crate::core::{filter, summarize, Dataset, Stats, StatsDisplay};

/// Everything the dashboard shows for the current filters. Rebuilt in full by
/// [`DashboardState::refresh`]; the filtered plays themselves are not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub controls: FilterControls,
    pub stats: Stats,
    pub list: PlayListView,
    pub chart: ChartSlot,
    sample_size: usize,
}

impl DashboardState {
    /// Initial state: default controls, rendered against the full dataset.
    pub fn new(dataset: &Dataset, sample_size: usize) -> Self {
        let mut state = Self {
            controls: FilterControls::default(),
            stats: Stats::default(),
            list: PlayListView::default(),
            chart: ChartSlot::default(),
            sample_size,
        };
        state.refresh(dataset);
        state
    }

    /// Apply a control change and re-run the pipeline.
    pub fn handle(&mut self, dataset: &Dataset, command: FilterCommand) {
        self.controls.apply(command);
        self.refresh(dataset);
    }

    /// read -> filter -> aggregate -> render.
    pub fn refresh(&mut self, dataset: &Dataset) {
        let criteria = self.controls.read();
        let matches = filter(dataset.plays(), &criteria);

        self.stats = summarize(matches.iter().copied());
        self.chart.replace(self.stats.results);
        self.list = PlayListView::from_matches(&matches, self.sample_size);
    }

    pub fn display(&self) -> StatsDisplay {
        StatsDisplay::from(&self.stats)
    }
}
