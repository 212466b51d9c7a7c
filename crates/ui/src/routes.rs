use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use services::TrainingConfig;
use trainer_core::model::Difficulty;

use crate::views::{HistoryView, HomeView, NewTrainingView, SettingsView, TrainingView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/new", NewTrainingView)] NewTraining {},
        #[route("/training/:difficulty/:secs/:min/:max", TrainingView)]
        Training { difficulty: Difficulty, secs: u32, min: u32, max: u32 },
        #[route("/history", HistoryView)] History {},
        #[route("/settings", SettingsView)] Settings {},
}

impl Route {
    /// Training screen route carrying the chosen config.
    #[must_use]
    pub fn training(config: &TrainingConfig) -> Self {
        Route::Training {
            difficulty: config.difficulty(),
            secs: config.time_limit().as_secs(),
            min: config.range().min(),
            max: config.range().max(),
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Brain Trainer" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::NewTraining {}, "New Training" } }
                li { Link { to: Route::History {}, "History" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
        }
    }
}
