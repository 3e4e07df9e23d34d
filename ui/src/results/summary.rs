use dioxus::prelude::*;

use crate::core::StatsDisplay;

#[component]
pub fn StatsSummary(stats: StatsDisplay) -> Element {
    rsx! {
        section { class: "dashboard-card stats",
            div { class: "stats__grid",
                div { class: "stat",
                    span { class: "stat__label", "Plays" }
                    strong { id: "stat-plays", class: "stat__value", "{stats.plays}" }
                }
                div { class: "stat",
                    span { class: "stat__label", "Completion" }
                    strong { id: "stat-comp", class: "stat__value", "{stats.completion}" }
                }
                div { class: "stat",
                    span { class: "stat__label", "Avg yards gained" }
                    strong { id: "stat-yards", class: "stat__value", "{stats.avg_yards}" }
                }
                div { class: "stat",
                    span { class: "stat__label", "Avg pass length" }
                    strong { id: "stat-length", class: "stat__value", "{stats.avg_length}" }
                }
                div { class: "stat",
                    span { class: "stat__label", "Avg EPA" }
                    strong { id: "stat-epa", class: "stat__value", "{stats.avg_epa}" }
                }
            }
        }
    }
}
