use dioxus::prelude::*;
use recall_models::{ConversationLog, ConversationTarget};
use recall_sdk::RecallClient;

use crate::components::shared::{ErrorNote, Fetch, LoadingNote};

/// Fetch the target's log once on mount. The component is torn down and
/// remounted for every newly focused conversation, so there is no
/// refetch path to manage.
fn use_conversation(target: &ConversationTarget) -> Signal<Fetch<ConversationLog>> {
    let client = use_context::<RecallClient>();
    let name = target.name.clone();
    let mut log = use_signal(|| Fetch::Loading);
    use_effect(move || {
        let client = client.clone();
        let name = name.clone();
        spawn(async move {
            match client.conversation(name.as_str()).await {
                Ok(fetched) => log.set(Fetch::Ready(fetched)),
                Err(e) => {
                    eprintln!("[conversation] Failed to fetch log for {name}: {e}");
                    log.set(Fetch::Failed(e.to_string()));
                }
            }
        });
    });
    log
}

fn is_highlighted(target: &ConversationTarget, session_ts: i64, utterance_idx: usize) -> bool {
    target.highlight_timestamp == Some(session_ts) && target.highlight_index == Some(utterance_idx)
}

#[component]
pub fn ConversationView(target: ConversationTarget, on_back: EventHandler<()>) -> Element {
    let log = use_conversation(&target);

    rsx! {
        div { class: "conversation",
            div { class: "conversation-header",
                button { class: "back-btn", onclick: move |_| on_back.call(()), "← Back" }
                if let Some(ref url) = target.avatar_url {
                    img { class: "person-avatar", src: "{url}", alt: "{target.name}" }
                }
                div { class: "conversation-ident",
                    h1 { class: "conversation-name", "{target.name}" }
                    if let Some(ref headline) = target.headline {
                        p { class: "conversation-headline", "{headline}" }
                    }
                }
            }

            {match &*log.read() {
                Fetch::Loading => rsx! { LoadingNote { label: "Loading conversation…" } },
                Fetch::Failed(_) => rsx! { ErrorNote { message: "Could not load this conversation." } },
                Fetch::Ready(log) if log.conversation.is_empty() => rsx! {
                    p { class: "placeholder", "No conversations recorded with {target.name} yet." }
                },
                Fetch::Ready(log) => rsx! {
                    div { class: "session-list",
                        for session in log.conversation.iter().rev() {
                            div { class: "session",
                                h3 { class: "session-header",
                                    {session.timestamp.format("%b %e, %Y · %H:%M").to_string()}
                                }
                                for (idx, utterance) in session.conversation.iter().enumerate() {
                                    div {
                                        class: {
                                            let mut class = String::from("utterance");
                                            if utterance.is_me() {
                                                class.push_str(" me");
                                            }
                                            if is_highlighted(&target, session.timestamp.timestamp(), idx) {
                                                class.push_str(" highlighted");
                                            }
                                            class
                                        },
                                        span { class: "utterance-speaker", "{utterance.speaker}" }
                                        p { class: "utterance-text", "{utterance.text}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
pub fn RetroConversationView(target: ConversationTarget, on_back: EventHandler<()>) -> Element {
    let log = use_conversation(&target);

    rsx! {
        div { class: "crt-screen",
            div { class: "crt-titlebar",
                button { class: "crt-btn", onclick: move |_| on_back.call(()), "[ ESC ]" }
                span { class: "crt-title", {format!("TRANSCRIPT :: {}", target.name.as_str().to_uppercase())} }
            }
            if let Some(ref headline) = target.headline {
                pre { class: "crt-banner", "{headline}" }
            }

            div { class: "crt-list",
                {match &*log.read() {
                    Fetch::Loading => rsx! { p { class: "crt-line", "SPOOLING TRANSCRIPT…" } },
                    Fetch::Failed(_) => rsx! { p { class: "crt-line crt-alert", "!! BACKEND LINK DOWN !!" } },
                    Fetch::Ready(log) if log.conversation.is_empty() => rsx! {
                        p { class: "crt-line", "NO TRANSCRIPT ON FILE." }
                    },
                    Fetch::Ready(log) => rsx! {
                        for session in log.conversation.iter().rev() {
                            div { class: "crt-session",
                                p { class: "crt-meta",
                                    {format!("=== {} ===", session.timestamp.format("%Y-%m-%d %H:%M"))}
                                }
                                for (idx, utterance) in session.conversation.iter().enumerate() {
                                    p {
                                        class: if is_highlighted(&target, session.timestamp.timestamp(), idx) {
                                            "crt-line crt-highlight"
                                        } else {
                                            "crt-line"
                                        },
                                        {format!("{}> {}", utterance.speaker.to_uppercase(), utterance.text)}
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
