use dioxus::prelude::*;
use dioxus_router::Router;
use trainer_core::model::ThemeMode;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut theme = use_context_provider(|| Signal::new(ThemeMode::default()));

    let app_settings = ctx.app_settings();
    use_future(move || {
        let app_settings = app_settings.clone();
        async move {
            match app_settings.load().await {
                Ok(settings) => theme.set(settings.theme()),
                Err(err) => tracing::warn!(error = %err, "failed to load settings"),
            }
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Brain Trainer" }

        // Root container; the theme class switches the palette.
        div { class: "app-root theme-{theme}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
