use dioxus::prelude::*;
use recall_models::{OpenConversationRequest, Person};

use crate::components::shared::{use_people, ErrorNote, Fetch, LoadingNote, PersonCard};

/// The per-person memory list. Tapping a card asks the coordinator to
/// focus that person's conversation.
#[component]
pub fn MemoryView(on_open_conversation: EventHandler<OpenConversationRequest>) -> Element {
    let people = use_people();

    rsx! {
        div { class: "memory",
            h1 { class: "screen-title", "People" }
            {match &*people.read() {
                Fetch::Loading => rsx! { LoadingNote { label: "Loading people…" } },
                Fetch::Failed(_) => rsx! { ErrorNote { message: "Could not load people." } },
                Fetch::Ready(list) if list.is_empty() => rsx! {
                    p { class: "placeholder", "No one enrolled yet." }
                },
                Fetch::Ready(list) => rsx! {
                    div { class: "memory-grid",
                        for person in list.iter() {
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
    }
}

#[component]
pub fn RetroMemoryView(on_open_conversation: EventHandler<OpenConversationRequest>) -> Element {
    let people = use_people();

    rsx! {
        div { class: "crt-screen",
            div { class: "crt-titlebar",
                span { class: "crt-title", "RECORDS ON FILE" }
            }
            div { class: "crt-list",
                {match &*people.read() {
                    Fetch::Loading => rsx! { p { class: "crt-line", "READING TAPE…" } },
                    Fetch::Failed(_) => rsx! { p { class: "crt-line crt-alert", "!! BACKEND LINK DOWN !!" } },
                    Fetch::Ready(list) if list.is_empty() => rsx! {
                        p { class: "crt-line", "NO RECORDS ON FILE." }
                    },
                    Fetch::Ready(list) => rsx! {
                        for (idx, person) in list.iter().enumerate() {
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
        }
    }
}
