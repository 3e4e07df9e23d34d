use crate::{
    core::{format, PassResult, PlayRecord},
    results::{coverage_label, display_result, format_pass_length, result_class},
};
use dioxus::prelude::*;

/// One formatted row of the plays list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySummary {
    pub result: PassResult,
    pub team: String,
    pub down: u8,
    pub coverage: String,
    pub length: String,
    pub red_zone: bool,
    pub play_action: bool,
    pub description: String,
}

impl From<&PlayRecord> for PlaySummary {
    fn from(play: &PlayRecord) -> Self {
        Self {
            result: display_result(play),
            team: play.possession_team.clone(),
            down: play.down,
            coverage: coverage_label(&play.coverage_type),
            length: format_pass_length(play.pass_length),
            red_zone: play.is_red_zone,
            play_action: play.play_action,
            description: play.description.clone(),
        }
    }
}

/// The capped sample of matches plus the true match count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayListView {
    pub total: usize,
    pub rows: Vec<PlaySummary>,
}

impl PlayListView {
    /// Keep the first `cap` matches in dataset order.
    pub fn from_matches(matches: &[&PlayRecord], cap: usize) -> Self {
        Self {
            total: matches.len(),
            rows: matches
                .iter()
                .take(cap)
                .map(|play| PlaySummary::from(*play))
                .collect(),
        }
    }

    /// `None` when nothing matched.
    pub fn count_label(&self) -> Option<String> {
        if self.total == 0 {
            None
        } else {
            Some(format!(
                "showing {} of {}",
                format::format_count(self.rows.len()),
                format::format_count(self.total)
            ))
        }
    }
}

#[component]
pub fn PlayList(view: PlayListView) -> Element {
    let label = view.count_label();

    rsx! {
        section { class: "dashboard-card plays",
            div { class: "dashboard-card__header",
                h2 { "Sample plays" }
                if let Some(label) = label {
                    span { id: "plays-count-label", class: "dashboard-card__meta", "({label})" }
                }
            }

            div { id: "plays-list", class: "plays__items",
                if view.rows.is_empty() {
                    p { class: "no-results", "No plays match your filters. Try adjusting them." }
                } else {
                    for (idx, row) in view.rows.into_iter().enumerate() {
                        {render_play(idx, row)}
                    }
                }
            }
        }
    }
}

fn render_play(idx: usize, row: PlaySummary) -> Element {
    let PlaySummary {
        result,
        team,
        down,
        coverage,
        length,
        red_zone,
        play_action,
        description,
    } = row;

    rsx! {
        div { key: "{idx}", class: "play-item",
            div { class: "play-meta",
                span { class: result_class(result), "{result.label()}" }
                span { strong { "{team}" } }
                span { "Down: " strong { "{down}" } }
                span { "Coverage: " strong { "{coverage}" } }
                span { "Length: " strong { "{length}" } }
                if red_zone {
                    span { class: "play-meta__flag", "🔴 Red Zone" }
                }
                if play_action {
                    span { class: "play-meta__flag", "🎭 Play Action" }
                }
            }
            p { class: "play-description", "{description}" }
        }
    }
}
