use dioxus::prelude::*;
use dioxus_router::Link;
use services::DEFAULT_RECENT_LIMIT;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionCardVm, StatsVm, map_session_cards};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    stats: StatsVm,
    recent: Vec<SessionCardVm>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let stats = ctx.stats();

    let mut resource = use_resource(move || {
        let stats = stats.clone();
        async move {
            let overview = stats
                .overview(DEFAULT_RECENT_LIMIT)
                .await
                .map_err(|_| ViewError::Storage)?;
            Ok(HomeData {
                stats: StatsVm::from(&overview.stats),
                recent: map_session_cards(&overview.recent),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page home-page",
            h2 { "Multiplication Trainer" }

            Link { class: "primary-cta", to: Route::NewTraining {}, "Start New Training" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    section { class: "stats-block",
                        h3 { "Statistics" }
                        p { "{data.stats.sessions}" }
                        p { "{data.stats.questions}" }
                        p { "{data.stats.correct}" }
                        p { class: "stats-accuracy", "{data.stats.accuracy}" }
                    }
                    section { class: "recent-block",
                        h3 { "Recent Sessions" }
                        if data.stats.is_empty {
                            p { "No training sessions yet." }
                        } else {
                            ul { class: "session-list",
                                for card in data.recent {
                                    li { key: "{card.id}",
                                        span { class: "session-date", "{card.date_str}" }
                                        span { class: "session-difficulty", "{card.difficulty}" }
                                        span { class: "session-score", "{card.score}" }
                                    }
                                }
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
