use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;

use crate::controls::{FilterCommand, FilterPanel};
use crate::core::{self, DashboardConfig, Dataset};
use crate::results::{DashboardState, PlayList, ResultsChart, StatsSummary};

/// Loads the dataset once, then hands it to [`DashboardBody`].
#[component]
pub fn Dashboard() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    let source = config.source.clone();

    let dataset = use_resource(move || {
        let source = source.clone();
        async move {
            core::load(&source).await.inspect_err(|err| {
                error!("dataset load failed: {err}");
            })
        }
    });

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Passing plays" }
            p { "Filter by coverage, down, distance and formation to see how passes turned out." }

            match &*dataset.read_unchecked() {
                None => rsx! {
                    p { class: "dashboard-card__placeholder", "Loading plays…" }
                },
                Some(Err(err)) => rsx! {
                    p { id: "plays-list", class: "no-results",
                        "Error loading data. Make sure the play dataset is available."
                    }
                    p { class: "dashboard-card__meta", "{err}" }
                },
                Some(Ok(data)) => rsx! {
                    DashboardBody { dataset: data.clone(), sample_size: config.sample_size }
                },
            }
        }
    }
}

/// Owns the filter state and chart for a loaded dataset.
#[component]
fn DashboardBody(dataset: Dataset, sample_size: usize) -> Element {
    let mut state = {
        let dataset = dataset.clone();
        use_signal(move || DashboardState::new(&dataset, sample_size))
    };
    let options = use_hook({
        let dataset = dataset.clone();
        move || dataset.options()
    });

    let on_command = move |command: FilterCommand| {
        debug!("filter command: {command:?}");
        state.with_mut(|s| s.handle(&dataset, command));
    };

    let current = state.read();
    let chart = current.chart.chart().cloned();
    let generation = current.chart.generation();

    rsx! {
        FilterPanel {
            controls: current.controls.clone(),
            options,
            on_command,
        }

        StatsSummary { stats: current.display() }

        div { class: "dashboard__panels",
            if let Some(chart) = chart {
                ResultsChart { chart, generation }
            }
            PlayList { view: current.list.clone() }
        }
    }
}
