use dioxus::prelude::*;
use trainer_core::model::{AppSettings, ThemeMode};

use crate::context::AppContext;
use crate::views::{ErrorPanel, ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Error(ViewError),
}

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let app_settings = ctx.app_settings();
    let mut theme = use_context::<Signal<ThemeMode>>();
    let mut current = use_signal(|| None::<AppSettings>);
    let mut save_state = use_signal(|| SaveState::Idle);

    let mut resource = {
        let app_settings = app_settings.clone();
        use_resource(move || {
            let app_settings = app_settings.clone();
            async move {
                let loaded = app_settings
                    .load()
                    .await
                    .map_err(|_| ViewError::Storage)?;
                current.set(Some(loaded));
                Ok(loaded)
            }
        })
    };

    let save = use_callback(move |next: AppSettings| {
        let app_settings = app_settings.clone();
        spawn(async move {
            save_state.set(SaveState::Saving);
            match app_settings.save(next).await {
                Ok(saved) => {
                    current.set(Some(saved));
                    theme.set(saved.theme());
                    save_state.set(SaveState::Saved);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to save settings");
                    save_state.set(SaveState::Error(ViewError::Storage));
                }
            }
        });
    });

    let state = match current() {
        Some(settings) => ViewState::Ready(settings),
        None => view_state_from_resource(resource),
    };

    rsx! {
        div { class: "page settings-page",
            h2 { "Settings" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(settings) => rsx! {
                    div { class: "settings-row",
                        div { class: "settings-row__label",
                            label { "Voice (read questions aloud)" }
                        }
                        div { class: "settings-row__field settings-row__field--toggle",
                            button {
                                id: "settings-voice",
                                class: "settings-toggle",
                                r#type: "button",
                                role: "switch",
                                aria_checked: "{settings.voice_enabled()}",
                                onclick: move |_| {
                                    save.call(settings.with_voice_enabled(!settings.voice_enabled()));
                                },
                            }
                        }
                    }
                    div { class: "settings-row",
                        div { class: "settings-row__label",
                            label { "Dark theme" }
                        }
                        div { class: "settings-row__field settings-row__field--toggle",
                            button {
                                id: "settings-theme",
                                class: "settings-toggle",
                                r#type: "button",
                                role: "switch",
                                aria_checked: "{settings.theme() == ThemeMode::Dark}",
                                onclick: move |_| {
                                    save.call(settings.with_theme(settings.theme().toggled()));
                                },
                            }
                            span { class: "settings-row__value", "Theme: {settings.theme()}" }
                        }
                    }
                    match save_state() {
                        SaveState::Idle => rsx! {},
                        SaveState::Saving => rsx! { p { class: "save-status", "Saving..." } },
                        SaveState::Saved => rsx! { p { class: "save-status", "Saved" } },
                        SaveState::Error(err) => rsx! { p { class: "save-status error", "{err.message()}" } },
                    }
                },
                ViewState::Error(err) => rsx! {
                    ErrorPanel { error: err, on_retry: move |()| resource.restart() }
                },
            }
        }
    }
}
