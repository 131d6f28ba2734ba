use dioxus::prelude::*;
use futures::future::join_all;
use recall_models::{Highlight, OpenConversationRequest};
use recall_sdk::{RecallClient, SdkError};

use crate::components::shared::{ErrorNote, Fetch, LoadingNote};

/// Gather one highlight per person: fetch the people list, then every
/// conversation log concurrently, and derive each log's latest moment.
/// People whose log fails to load are skipped (and logged), so one bad
/// fetch does not blank the whole screen.
async fn load_highlights(client: &RecallClient) -> Result<Vec<Highlight>, SdkError> {
    let people = client.people().await?;

    let logs = join_all(people.iter().map(|person| {
        let client = client.clone();
        let name = person.name.clone();
        async move { client.conversation(&name).await }
    }))
    .await;

    let mut highlights: Vec<Highlight> = Vec::new();
    for (person, log) in people.iter().zip(logs) {
        match log {
            Ok(log) => {
                if let Some(mut highlight) = log.latest_highlight() {
                    highlight.avatar_url = Some(person.image_url.clone());
                    highlights.push(highlight);
                }
            }
            Err(e) => eprintln!("[highlights] Skipping {}: {e}", person.name),
        }
    }
    highlights.sort_by_key(|h| std::cmp::Reverse(h.timestamp));
    Ok(highlights)
}

fn use_highlights() -> Signal<Fetch<Vec<Highlight>>> {
    let client = use_context::<RecallClient>();
    let mut highlights = use_signal(|| Fetch::Loading);
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            match load_highlights(&client).await {
                Ok(list) => highlights.set(Fetch::Ready(list)),
                Err(e) => {
                    eprintln!("[highlights] Failed to load highlights: {e}");
                    highlights.set(Fetch::Failed(e.to_string()));
                }
            }
        });
    });
    highlights
}

#[component]
pub fn HighlightsView(on_open_conversation: EventHandler<OpenConversationRequest>) -> Element {
    let highlights = use_highlights();

    rsx! {
        div { class: "highlights",
            h1 { class: "screen-title", "Highlights" }
            {match &*highlights.read() {
                Fetch::Loading => rsx! { LoadingNote { label: "Collecting moments…" } },
                Fetch::Failed(_) => rsx! { ErrorNote { message: "Could not load highlights." } },
                Fetch::Ready(list) if list.is_empty() => rsx! {
                    p { class: "placeholder", "Nothing memorable yet — record a conversation first." }
                },
                Fetch::Ready(list) => rsx! {
                    div { class: "highlight-list",
                        for highlight in list.iter() {
                            button {
                                class: "highlight-card",
                                onclick: {
                                    let highlight = highlight.clone();
                                    move |_| on_open_conversation.call(OpenConversationRequest::from(&highlight))
                                },
                                blockquote { class: "highlight-quote", "“{highlight.quote}”" }
                                span { class: "highlight-meta",
                                    {format!("{} · {}", highlight.person, highlight.timestamp.format("%b %e, %Y"))}
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
pub fn RetroHighlightsView(on_open_conversation: EventHandler<OpenConversationRequest>) -> Element {
    let highlights = use_highlights();

    rsx! {
        div { class: "crt-screen",
            div { class: "crt-titlebar",
                span { class: "crt-title", "MEMORABLE MOMENTS" }
            }
            div { class: "crt-list",
                {match &*highlights.read() {
                    Fetch::Loading => rsx! { p { class: "crt-line", "SCANNING ARCHIVES…" } },
                    Fetch::Failed(_) => rsx! { p { class: "crt-line crt-alert", "!! BACKEND LINK DOWN !!" } },
                    Fetch::Ready(list) if list.is_empty() => rsx! {
                        p { class: "crt-line", "ARCHIVE EMPTY." }
                    },
                    Fetch::Ready(list) => rsx! {
                        for highlight in list.iter() {
                            button {
                                class: "crt-row crt-row-tall",
                                onclick: {
                                    let highlight = highlight.clone();
                                    move |_| on_open_conversation.call(OpenConversationRequest::from(&highlight))
                                },
                                span { class: "crt-quote", "\"{highlight.quote}\"" }
                                span { class: "crt-meta",
                                    {format!("— {} @ {}", highlight.person.to_uppercase(), highlight.timestamp.format("%Y-%m-%d"))}
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
