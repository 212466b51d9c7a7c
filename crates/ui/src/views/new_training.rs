use dioxus::prelude::*;
use dioxus_router::use_navigator;
use trainer_core::model::Difficulty;

use crate::routes::Route;
use crate::vm::{NewTrainingForm, difficulty_options, time_options};

#[component]
pub fn NewTrainingView() -> Element {
    let navigator = use_navigator();
    let mut form = use_signal(NewTrainingForm::default);

    let form_value = form.read().clone();
    let selected_difficulty = form_value.difficulty.label();

    rsx! {
        div { class: "page new-training-page",
            h2 { "New Training" }

            div { class: "form-row",
                label { r#for: "difficulty", "Difficulty" }
                select {
                    id: "difficulty",
                    value: "{selected_difficulty}",
                    onchange: move |evt| {
                        if let Ok(difficulty) = evt.value().parse::<Difficulty>() {
                            form.write().difficulty = difficulty;
                        }
                    },
                    for label in difficulty_options() {
                        option {
                            value: "{label}",
                            selected: label == selected_difficulty,
                            "{label}"
                        }
                    }
                }
            }

            div { class: "form-row",
                label { r#for: "time-per-question", "Time per question" }
                select {
                    id: "time-per-question",
                    value: "{form_value.time_label}",
                    onchange: move |evt| form.write().time_label = evt.value(),
                    for label in time_options() {
                        option {
                            value: "{label}",
                            selected: label == form_value.time_label,
                            "{label}"
                        }
                    }
                }
            }

            if form_value.shows_custom_range() {
                div { class: "form-row custom-range",
                    label { r#for: "custom-min", "Min" }
                    input {
                        id: "custom-min",
                        r#type: "number",
                        value: "{form_value.custom_min}",
                        oninput: move |evt| form.write().custom_min = evt.value(),
                    }
                    label { r#for: "custom-max", "Max" }
                    input {
                        id: "custom-max",
                        r#type: "number",
                        value: "{form_value.custom_max}",
                        oninput: move |evt| form.write().custom_max = evt.value(),
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "primary",
                    r#type: "button",
                    onclick: move |_| {
                        let config = form.read().to_config();
                        navigator.push(Route::training(&config));
                    },
                    "Start"
                }
                button {
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "Back"
                }
            }
        }
    }
}
