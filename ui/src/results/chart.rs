//! Donut chart of pass results.
//!
//! The ring is drawn with one SVG circle per result on a circumference of 100,
//! so a segment's dash length is its percentage. The chart is rebuilt from
//! scratch on every filter change; [`ChartSlot`] holds the single live
//! instance and its generation is used as the node key so the previous SVG is
//! dropped rather than patched.

use dioxus::prelude::*;

use crate::core::{format, PassResult, ResultCounts};

/// Radius giving the ring a circumference of exactly 100.
const RING_RADIUS: f64 = 15.915_494_309_189_533;
/// Segments start at twelve o'clock.
const START_OFFSET: f64 = 25.0;

const RESULT_ORDER: [PassResult; 3] = [
    PassResult::Complete,
    PassResult::Incomplete,
    PassResult::Interception,
];

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub result: PassResult,
    pub count: usize,
    /// Share of the displayed plays, 0-100. Zero when nothing is displayed.
    pub percent: f64,
    /// Stroke dash offset placing the segment after the previous ones.
    pub offset: f64,
}

impl DonutSegment {
    pub fn color(&self) -> &'static str {
        match self.result {
            PassResult::Complete => "rgba(0, 212, 255, 0.8)",
            PassResult::Incomplete => "rgba(123, 47, 255, 0.8)",
            PassResult::Interception => "rgba(255, 68, 102, 0.8)",
        }
    }

    /// e.g. `Complete: 1,234 plays (45.6%)`
    pub fn tooltip(&self) -> String {
        format!(
            "{}: {} plays ({:.1}%)",
            self.result.label(),
            format::format_count(self.count),
            self.percent
        )
    }

    fn dash_array(&self) -> String {
        format!("{:.3} {:.3}", self.percent, 100.0 - self.percent)
    }

    fn dash_offset(&self) -> String {
        format!("{:.3}", self.offset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub total: usize,
    pub segments: Vec<DonutSegment>,
}

impl DonutChart {
    pub fn from_counts(counts: ResultCounts) -> Self {
        let total = counts.total();
        let mut drawn = 0.0;
        let segments = RESULT_ORDER
            .iter()
            .map(|&result| {
                let count = counts.get(result);
                let percent = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                let segment = DonutSegment {
                    result,
                    count,
                    percent,
                    offset: START_OFFSET - drawn,
                };
                drawn += percent;
                segment
            })
            .collect();

        Self { total, segments }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// The one chart instance owned by the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSlot {
    generation: u64,
    chart: Option<DonutChart>,
}

impl ChartSlot {
    /// Drop the current chart and build a new one from `counts`.
    pub fn replace(&mut self, counts: ResultCounts) -> &DonutChart {
        self.generation = self.generation.wrapping_add(1);
        self.chart.insert(DonutChart::from_counts(counts))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn chart(&self) -> Option<&DonutChart> {
        self.chart.as_ref()
    }
}

#[component]
pub fn ResultsChart(chart: DonutChart, generation: u64) -> Element {
    let total_label = format::format_count(chart.total);

    rsx! {
        section { class: "dashboard-card results-chart",
            div { class: "dashboard-card__header",
                h2 { "Pass results" }
            }

            div { class: "results-chart__body",
                svg {
                    key: "{generation}",
                    id: "resultsChart",
                    class: "results-chart__donut",
                    view_box: "0 0 42 42",
                    circle {
                        class: "results-chart__track",
                        cx: "21",
                        cy: "21",
                        r: "{RING_RADIUS}",
                        fill: "transparent",
                        stroke: "#1b2033",
                        stroke_width: "6",
                    }
                    for segment in chart.segments.iter().filter(|s| s.count > 0) {
                        circle {
                            key: "{segment.result.code()}",
                            class: "results-chart__segment",
                            cx: "21",
                            cy: "21",
                            r: "{RING_RADIUS}",
                            fill: "transparent",
                            stroke: segment.color(),
                            stroke_width: "6",
                            stroke_dasharray: segment.dash_array(),
                            stroke_dashoffset: segment.dash_offset(),
                        }
                    }
                    text {
                        class: "results-chart__total",
                        x: "21",
                        y: "22.5",
                        text_anchor: "middle",
                        "{total_label}"
                    }
                }

                ul { class: "results-chart__legend",
                    for segment in chart.segments.iter() {
                        li {
                            key: "{segment.result.code()}",
                            class: "results-chart__legend-item",
                            title: segment.tooltip(),
                            span {
                                class: "results-chart__legend-swatch",
                                style: "background: {segment.color()}",
                            }
                            span { class: "results-chart__legend-label", "{segment.tooltip()}" }
                        }
                    }
                }
            }
        }
    }
}
