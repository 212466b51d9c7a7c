use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::{TrainingConfig, TrainingRun};
use trainer_core::model::{Difficulty, OperandRange, TimeLimit};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorPanel, ViewError};
use crate::vm::TrainingScreenVm;

const TICK: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrainingIntent {
    Submit,
    Next,
    End,
}

#[component]
pub fn TrainingView(difficulty: Difficulty, secs: u32, min: u32, max: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let training = ctx.training();
    let config = TrainingConfig::new(
        difficulty,
        OperandRange::from_bounds(min, max),
        TimeLimit::from_secs(secs),
    );

    let mut run = use_signal(|| None::<TrainingRun>);
    let mut answer = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);
    let mut ending = use_signal(|| false);

    let mut starter = {
        let training = training.clone();
        use_resource(move || {
            let training = training.clone();
            async move {
                match training.start(config).await {
                    Ok(started) => {
                        run.set(Some(started));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to start training");
                        error.set(Some(ViewError::Storage));
                    }
                }
            }
        })
    };

    let question_seq = use_memo(move || {
        run.read()
            .as_ref()
            .map(|active| active.session().question_seq())
    });

    // Restarted for every new question; dropped with the component.
    {
        let training = training.clone();
        use_resource(move || {
            let training = training.clone();
            let seq = question_seq();
            async move {
                if seq.is_none() {
                    return;
                }
                loop {
                    tokio::time::sleep(TICK).await;
                    let mut guard = run.write();
                    if let Some(active) = guard.as_mut() {
                        training.tick(active);
                    }
                }
            }
        });
    }

    let vm = run.read().as_ref().map(TrainingScreenVm::from_run);

    use_effect(move || {
        let focus_answer = run
            .read()
            .as_ref()
            .map(TrainingScreenVm::from_run)
            .is_some_and(|vm| vm.awaiting_answer());
        let target = if focus_answer {
            "training-answer"
        } else {
            "training-next"
        };
        let _ = eval(&format!("document.getElementById({target:?})?.focus();"));
    });

    let dispatch = {
        let training = training.clone();
        use_callback(move |intent: TrainingIntent| {
            match intent {
                TrainingIntent::Submit => {
                    let input = answer.read().clone();
                    if let Some(active) = run.write().as_mut() {
                        if training.submit(active, &input).is_ok() {
                            answer.set(String::new());
                        }
                    }
                }
                TrainingIntent::Next => {
                    if let Some(active) = run.write().as_mut() {
                        if let Err(err) = training.next_question(active) {
                            tracing::debug!(error = %err, "next question ignored");
                        }
                    }
                }
                TrainingIntent::End => {
                    if ending() {
                        return;
                    }
                    let training = training.clone();
                    spawn(async move {
                        ending.set(true);
                        let taken = run.write().take();
                        let Some(mut active) = taken else {
                            navigator.push(Route::Home {});
                            return;
                        };
                        match training.end(&mut active).await {
                            Ok(_) => {
                                navigator.push(Route::Home {});
                            }
                            Err(err) => {
                                tracing::warn!(error = %err, "failed to save training session");
                                error.set(Some(ViewError::Storage));
                                run.set(Some(active));
                                ending.set(false);
                            }
                        }
                    });
                }
            }
        })
    };

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let awaiting = run
            .read()
            .as_ref()
            .map(TrainingScreenVm::from_run)
            .is_some_and(|vm| vm.awaiting_answer());
        match evt.data.key() {
            Key::Enter => {
                evt.prevent_default();
                dispatch.call(if awaiting {
                    TrainingIntent::Submit
                } else {
                    TrainingIntent::Next
                });
            }
            Key::Escape => {
                evt.prevent_default();
                dispatch.call(TrainingIntent::End);
            }
            _ => {}
        }
    });

    rsx! {
        div { class: "page training-page", id: "training-root", tabindex: "0", onkeydown: on_key,
            h2 { "Training" }

            if let Some(err) = error() {
                ErrorPanel {
                    error: err,
                    on_retry: move |()| {
                        error.set(None);
                        let unsaved = run.read().as_ref().is_some_and(TrainingRun::has_unsaved_record);
                        if unsaved {
                            dispatch.call(TrainingIntent::End);
                        } else if run.read().is_none() {
                            starter.restart();
                        }
                    },
                }
            }

            match vm {
                None => rsx! {
                    p { "Loading..." }
                },
                Some(vm) => rsx! {
                    div { class: "training-header",
                        span { class: "training-difficulty", "{vm.difficulty}" }
                        span { class: "training-timer", "{vm.timer}" }
                        span { class: "training-score", "{vm.score}" }
                    }

                    p { class: "training-question", "{vm.question}" }

                    if vm.save_pending {
                        p { class: "save-status error", "This session has not been saved yet." }
                    } else if let Some(feedback) = vm.feedback.clone() {
                        div { class: "feedback-panel",
                            if vm.timed_out {
                                p { class: "feedback-title", "Time's up!" }
                            }
                            p { class: "feedback-message", "{feedback}" }
                            div { class: "feedback-actions",
                                button {
                                    id: "training-next",
                                    class: "primary",
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(TrainingIntent::Next),
                                    "Next Question (Enter)"
                                }
                                button {
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(TrainingIntent::End),
                                    "End Training (Esc)"
                                }
                            }
                        }
                    } else {
                        div { class: "answer-row",
                            input {
                                id: "training-answer",
                                r#type: "text",
                                placeholder: "Your answer",
                                value: "{answer}",
                                oninput: move |evt| answer.set(evt.value()),
                            }
                            button {
                                class: "primary",
                                r#type: "button",
                                onclick: move |_| dispatch.call(TrainingIntent::Submit),
                                "Submit"
                            }
                        }
                    }

                    button {
                        class: "end-training",
                        r#type: "button",
                        disabled: ending(),
                        onclick: move |_| dispatch.call(TrainingIntent::End),
                        "End Training"
                    }
                },
            }
        }
    }
}
