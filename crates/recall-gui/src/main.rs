mod components;
mod gate;
mod persistence;
mod state;

use dioxus::prelude::*;
use recall_models::{ConsentState, OpenConversationRequest, Tab, Theme};
use recall_sdk::RecallClient;

use components::consent_gate::{ConsentForm, LoadingView};
use components::conversation_view::{ConversationView, RetroConversationView};
use components::highlights_view::{HighlightsView, RetroHighlightsView};
use components::home_view::{HomeView, RetroHomeView};
use components::memory_view::{MemoryView, RetroMemoryView};
use components::tab_bar::{RetroTabBar, TabBar};
use components::upload_view::{RetroUploadView, UploadView};
use persistence::FileConsentStore;
use state::AppState;

const DEFAULT_API_URL: &str = "http://localhost:3000";

fn main() {
    dioxus::launch(App);
}

fn api_base_url() -> String {
    std::env::var("RECALL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

#[component]
fn App() -> Element {
    let mut app_state = use_signal(AppState::new);
    let store = use_context_provider(FileConsentStore::from_config_dir);
    use_context_provider(|| RecallClient::new(api_base_url()));

    // One-shot agreement check at App scope; resolving it is the only
    // thing that ends the loading view, and it happens exactly once.
    use_effect(move || {
        let store = store.clone();
        spawn(async move {
            let resolved = gate::check_agreement_status(&store).await;
            app_state.write().consent = resolved;
        });
    });

    let consent = app_state.read().consent;

    rsx! {
        style { {include_str!("style.css")} }
        {match consent {
            ConsentState::Checking => rsx! { LoadingView {} },
            ConsentState::AwaitingConsent { .. } => rsx! { ConsentForm { app_state } },
            ConsentState::Accepted => rsx! { Shell { app_state } },
        }}
    }
}

/// The navigation shell: resolves the coordinator state to exactly one
/// screen implementation per (theme, screen) pair and mounts the themed
/// chrome underneath it. Screens for inactive tabs are not mounted at
/// all, so any expensive local state they hold is torn down on switch.
#[component]
fn Shell(app_state: Signal<AppState>) -> Element {
    let (theme, active_tab, target, screen_kind) = {
        let s = app_state.read();
        (
            s.nav.theme(),
            s.nav.active_tab(),
            s.nav.active_conversation().cloned(),
            s.nav.active_screen(),
        )
    };

    let root_class = match theme {
        Theme::Standard => "app-root",
        Theme::Retro => "app-root retro",
    };

    let on_open = move |request: OpenConversationRequest| {
        app_state.write().nav.open_conversation(request);
    };
    let on_back = move |()| {
        app_state.write().nav.close_conversation();
    };
    let on_tab = move |tab: Tab| {
        app_state.write().nav.navigate_tab(tab);
    };
    let on_toggle = move |()| {
        app_state.write().nav.toggle_theme();
    };

    let screen = match (theme, target) {
        (Theme::Standard, Some(target)) => rsx! {
            ConversationView { target, on_back }
        },
        (Theme::Retro, Some(target)) => rsx! {
            RetroConversationView { target, on_back }
        },
        (Theme::Standard, None) => match active_tab {
            Tab::Home => rsx! {
                HomeView {
                    on_open_conversation: on_open,
                    on_navigate_tab: on_tab,
                    on_toggle_theme: on_toggle,
                }
            },
            Tab::Upload => rsx! { UploadView { on_open_conversation: on_open } },
            Tab::Highlights => rsx! { HighlightsView { on_open_conversation: on_open } },
            Tab::Memory => rsx! { MemoryView { on_open_conversation: on_open } },
        },
        (Theme::Retro, None) => match active_tab {
            Tab::Home => rsx! {
                RetroHomeView {
                    on_open_conversation: on_open,
                    on_navigate_tab: on_tab,
                    on_toggle_theme: on_toggle,
                }
            },
            Tab::Upload => rsx! { RetroUploadView { on_open_conversation: on_open } },
            Tab::Highlights => rsx! { RetroHighlightsView { on_open_conversation: on_open } },
            Tab::Memory => rsx! { RetroMemoryView { on_open_conversation: on_open } },
        },
    };

    let chrome = match theme {
        Theme::Standard => rsx! { TabBar { active_tab, on_select: on_tab } },
        Theme::Retro => rsx! { RetroTabBar { active_tab, on_select: on_tab } },
    };

    rsx! {
        div { class: "{root_class}", "data-screen": "{screen_kind}",
            div { class: "screen-area", {screen} }
            {chrome}
        }
    }
}
