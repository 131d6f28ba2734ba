use dioxus::prelude::*;
use recall_models::ConsentState;

use crate::gate;
use crate::persistence::FileConsentStore;
use crate::state::AppState;

/// Shown while the boot-time agreement check is in flight.
#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading-mark", "◌" }
            p { class: "loading-text", "Checking agreement…" }
        }
    }
}

/// The blocking consent form. Submit stays disabled until the checkbox
/// is ticked and while a write is in flight; a failed write keeps the
/// form up with a retry note.
#[component]
pub fn ConsentForm(app_state: Signal<AppState>) -> Element {
    let store = use_context::<FileConsentStore>();
    let mut write_failed = use_signal(|| false);

    let (ticked, in_flight) = match app_state.read().consent {
        ConsentState::AwaitingConsent {
            checkbox_ticked,
            submit_in_flight,
        } => (checkbox_ticked, submit_in_flight),
        _ => (false, false),
    };

    rsx! {
        div { class: "consent",
            h1 { class: "consent-title", "Before we start" }
            p { class: "consent-text",
                "Recall records your conversations and recognizes the people "
                "in them so you can look back on what was said. Only continue "
                "if everyone you record has agreed to it, and you accept the "
                "terms of use."
            }
            label { class: "consent-tick",
                input {
                    r#type: "checkbox",
                    checked: ticked,
                    disabled: in_flight,
                    oninput: move |evt: Event<FormData>| {
                        app_state.write().consent.set_checkbox(evt.checked());
                    },
                }
                "I have read and accept the terms of use"
            }
            if *write_failed.read() {
                p { class: "consent-error",
                    "Your acceptance could not be saved. Check that the app can "
                    "write to its settings and try again."
                }
            }
            button {
                class: "consent-submit",
                disabled: !ticked || in_flight,
                onclick: move |_| {
                    if !app_state.write().consent.begin_submit() {
                        return;
                    }
                    write_failed.set(false);
                    let store = store.clone();
                    spawn(async move {
                        let recorded = gate::accept_agreement(&store).await;
                        if !recorded {
                            write_failed.set(true);
                        }
                        app_state.write().consent.finish_submit(recorded);
                    });
                },
                if in_flight { "Saving…" } else { "Agree and continue" }
            }
        }
    }
}
