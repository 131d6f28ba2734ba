use dioxus::prelude::*;
use recall_models::{OpenConversationRequest, Person, Tab};

use crate::components::shared::{use_people, ErrorNote, Fetch, LoadingNote, PersonCard};

#[component]
pub fn HomeView(
    on_open_conversation: EventHandler<OpenConversationRequest>,
    on_navigate_tab: EventHandler<Tab>,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let people = use_people();

    rsx! {
        div { class: "home",
            div { class: "home-header",
                h1 { class: "home-title", "Recall" }
                // The theme switch lives here and only here.
                button {
                    class: "theme-toggle",
                    onclick: move |_| on_toggle_theme.call(()),
                    "Retro mode"
                }
            }
            p { class: "home-tagline", "Remember everyone you talk to." }

            section { class: "home-recent",
                h2 { class: "section-title", "Recent people" }
                {match &*people.read() {
                    Fetch::Loading => rsx! { LoadingNote { label: "Loading people…" } },
                    Fetch::Failed(_) => rsx! { ErrorNote { message: "Could not load people." } },
                    Fetch::Ready(list) if list.is_empty() => rsx! {
                        p { class: "placeholder", "No one enrolled yet — record a conversation to get started." }
                    },
                    Fetch::Ready(list) => rsx! {
                        div { class: "person-strip",
                            for person in list.iter().take(6) {
                                PersonCard {
                                    person: person.clone(),
                                    on_open: move |p: Person| {
                                        on_open_conversation.call(OpenConversationRequest::from(&p));
                                    },
                                }
                            }
                        }
                    },
                }}
            }

            button {
                class: "link-btn",
                onclick: move |_| on_navigate_tab.call(Tab::Memory),
                "See all people →"
            }
        }
    }
}

#[component]
pub fn RetroHomeView(
    on_open_conversation: EventHandler<OpenConversationRequest>,
    on_navigate_tab: EventHandler<Tab>,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let people = use_people();

    rsx! {
        div { class: "crt-screen",
            div { class: "crt-titlebar",
                span { class: "crt-title", "RECALL/86 — PERSONAL MEMORY TERMINAL" }
                span { class: "crt-blink", "█" }
            }
            pre { class: "crt-banner",
                "  ┌─────────────────────────────┐\n"
                "  │  WHO DID YOU TALK TO TODAY? │\n"
                "  └─────────────────────────────┘"
            }

            div { class: "crt-list",
                {match &*people.read() {
                    Fetch::Loading => rsx! { p { class: "crt-line", "READING TAPE…" } },
                    Fetch::Failed(_) => rsx! { p { class: "crt-line crt-alert", "!! BACKEND LINK DOWN !!" } },
                    Fetch::Ready(list) if list.is_empty() => rsx! {
                        p { class: "crt-line", "NO RECORDS ON FILE." }
                    },
                    Fetch::Ready(list) => rsx! {
                        for (idx, person) in list.iter().take(6).enumerate() {
                            button {
                                class: "crt-row",
                                onclick: {
                                    let person = person.clone();
                                    move |_| on_open_conversation.call(OpenConversationRequest::from(&person))
                                },
                                {format!("{idx:02} ▸ {}", person.name.to_uppercase())}
                            }
                        }
                    },
                }}
            }

            div { class: "crt-actions",
                button {
                    class: "crt-btn",
                    onclick: move |_| on_navigate_tab.call(Tab::Memory),
                    "[ ALL RECORDS ]"
                }
                button {
                    class: "crt-btn",
                    onclick: move |_| on_toggle_theme.call(()),
                    "[ EXIT RETRO ]"
                }
            }
        }
    }
}
