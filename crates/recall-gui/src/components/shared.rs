use dioxus::prelude::*;
use recall_models::Person;
use recall_sdk::RecallClient;

/// Load lifecycle for screen-local fetches.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Fetch the enrolled-people list once on mount.
///
/// Both themes' home/memory screens share this; failures are logged and
/// surfaced as a placeholder, never as a hard error.
pub fn use_people() -> Signal<Fetch<Vec<Person>>> {
    let client = use_context::<RecallClient>();
    let mut people = use_signal(|| Fetch::Loading);
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            match client.people().await {
                Ok(list) => people.set(Fetch::Ready(list)),
                Err(e) => {
                    eprintln!("[people] Failed to fetch people: {e}");
                    people.set(Fetch::Failed(e.to_string()));
                }
            }
        });
    });
    people
}

/// Reusable in-flight placeholder
#[component]
pub fn LoadingNote(label: String) -> Element {
    rsx! {
        p { class: "loading-note", "{label}" }
    }
}

/// Reusable failure placeholder
#[component]
pub fn ErrorNote(message: String) -> Element {
    rsx! {
        p { class: "error-note", "{message}" }
    }
}

/// A tappable person card with avatar and name (standard theme).
#[component]
pub fn PersonCard(person: Person, on_open: EventHandler<Person>) -> Element {
    let payload = person.clone();
    rsx! {
        button {
            class: "person-card",
            onclick: move |_| on_open.call(payload.clone()),
            img {
                class: "person-avatar",
                src: "{person.image_url}",
                alt: "{person.name}",
            }
            span { class: "person-name", "{person.name}" }
        }
    }
}
