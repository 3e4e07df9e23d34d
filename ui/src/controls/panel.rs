use dioxus::prelude::*;

use super::{FilterCommand, FilterControls, ALL};
use crate::core::{DistanceBucket, FilterOptions};

#[component]
pub fn FilterPanel(
    controls: FilterControls,
    options: FilterOptions,
    on_command: EventHandler<FilterCommand>,
) -> Element {
    let downs: Vec<String> = options.downs.iter().map(u8::to_string).collect();
    let distances: Vec<(String, String)> = DistanceBucket::ALL
        .iter()
        .map(|bucket| (bucket.key().to_string(), bucket.label().to_string()))
        .collect();

    rsx! {
        section { class: "dashboard-card filters",
            div { class: "filters__pickers",
                label { class: "filters__field",
                    span { class: "filters__label", "Coverage" }
                    select {
                        id: "coverage",
                        onchange: move |evt: FormEvent| on_command.call(FilterCommand::SetCoverage(evt.value())),
                        option { value: ALL, selected: controls.coverage == ALL, "All coverages" }
                        for code in options.coverages.iter() {
                            option {
                                key: "{code}",
                                value: "{code}",
                                selected: controls.coverage == *code,
                                "{code}"
                            }
                        }
                    }
                }

                label { class: "filters__field",
                    span { class: "filters__label", "Down" }
                    select {
                        id: "down",
                        onchange: move |evt: FormEvent| on_command.call(FilterCommand::SetDown(evt.value())),
                        option { value: ALL, selected: controls.down == ALL, "All downs" }
                        for down in downs.iter() {
                            option {
                                key: "{down}",
                                value: "{down}",
                                selected: controls.down == *down,
                                "{down}"
                            }
                        }
                    }
                }

                label { class: "filters__field",
                    span { class: "filters__label", "Distance" }
                    select {
                        id: "distance",
                        onchange: move |evt: FormEvent| on_command.call(FilterCommand::SetDistance(evt.value())),
                        option { value: ALL, selected: controls.distance == ALL, "All distances" }
                        for (key, label) in distances.iter() {
                            option {
                                key: "{key}",
                                value: "{key}",
                                selected: controls.distance == *key,
                                "{label}"
                            }
                        }
                    }
                }

                label { class: "filters__field",
                    span { class: "filters__label", "Formation" }
                    select {
                        id: "formation",
                        onchange: move |evt: FormEvent| on_command.call(FilterCommand::SetFormation(evt.value())),
                        option { value: ALL, selected: controls.formation == ALL, "All formations" }
                        for code in options.formations.iter() {
                            option {
                                key: "{code}",
                                value: "{code}",
                                selected: controls.formation == *code,
                                "{code}"
                            }
                        }
                    }
                }
            }

            div { class: "filters__toggles",
                button {
                    r#type: "button",
                    id: "btn-redzone",
                    class: toggle_class(controls.red_zone),
                    aria_pressed: "{controls.red_zone}",
                    onclick: move |_| on_command.call(FilterCommand::ToggleRedZone),
                    "🔴 Red Zone"
                }
                button {
                    r#type: "button",
                    id: "btn-playaction",
                    class: toggle_class(controls.play_action),
                    aria_pressed: "{controls.play_action}",
                    onclick: move |_| on_command.call(FilterCommand::TogglePlayAction),
                    "🎭 Play Action"
                }
                button {
                    r#type: "button",
                    id: "reset",
                    class: "button button--ghost",
                    onclick: move |_| on_command.call(FilterCommand::Reset),
                    "Reset filters"
                }
            }
        }
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "button filters__toggle filters__toggle--active"
    } else {
        "button filters__toggle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn RedZoneActive() -> Element {
        rsx! {
            FilterPanel {
                controls: FilterControls {
                    red_zone: true,
                    ..FilterControls::default()
                },
                options: FilterOptions {
                    coverages: vec!["COVER_3_ZONE".into()],
                    downs: vec![1, 3],
                    formations: vec!["SHOTGUN".into()],
                },
                on_command: move |_| {},
            }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn active_toggle_is_pressed() {
        let html = render(RedZoneActive);

        assert!(html.contains("filters__toggle--active"));
        assert_eq!(html.matches("filters__toggle--active").count(), 1);
        assert!(html.contains("Short (1-10 yds)"));
        assert!(html.contains("Deep (20+ yds)"));
        assert!(html.contains("COVER_3_ZONE"));
        assert!(html.contains("SHOTGUN"));
    }
}
