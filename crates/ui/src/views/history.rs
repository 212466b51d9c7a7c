use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ErrorPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionCardVm, map_session_cards};

const HISTORY_LIMIT: u32 = 50;

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    cards: Vec<SessionCardVm>,
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let stats = ctx.stats();

    let mut resource = use_resource(move || {
        let stats = stats.clone();
        async move {
            let items = stats
                .recent_sessions(HISTORY_LIMIT)
                .await
                .map_err(|_| ViewError::Storage)?;
            Ok(HistoryData {
                cards: map_session_cards(&items),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "History" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { "No training sessions yet." }
                    } else {
                        ul { class: "session-list",
                            for card in data.cards {
                                SessionCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    ErrorPanel { error: err, on_retry: move |()| resource.restart() }
                },
            }
        }
    }
}

#[component]
fn SessionCard(card: SessionCardVm) -> Element {
    rsx! {
        li { class: "session-card",
            span { class: "session-date", "{card.date_str}" }
            span { class: "session-difficulty", "{card.difficulty}" }
            p {
                "Score: {card.score} | Accuracy: {card.accuracy} | Time: {card.time_limit}"
            }
        }
    }
}
