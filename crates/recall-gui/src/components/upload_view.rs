use std::path::Path;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use recall_models::{FaceStatus, OpenConversationRequest, ProcessOutcome};
use recall_sdk::RecallClient;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
enum UploadPhase {
    InFlight,
    Done(ProcessOutcome),
    Failed(String),
}

/// One submitted video, kept in a session-local log so earlier results
/// stay visible while new ones process.
#[derive(Debug, Clone, PartialEq)]
struct UploadEntry {
    id: Uuid,
    file_name: String,
    submitted_at: DateTime<Utc>,
    phase: UploadPhase,
}

fn face_status_label(status: FaceStatus) -> &'static str {
    match status {
        FaceStatus::New => "new person",
        FaceStatus::Old => "recognized",
        FaceStatus::NoFace => "no face found",
        FaceStatus::Error => "analyzer error",
        FaceStatus::Unknown => "unclear result",
    }
}

fn set_phase(mut entries: Signal<Vec<UploadEntry>>, id: Uuid, phase: UploadPhase) {
    if let Some(entry) = entries.write().iter_mut().find(|e| e.id == id) {
        entry.phase = phase;
    }
}

async fn run_upload(
    client: RecallClient,
    entries: Signal<Vec<UploadEntry>>,
    id: Uuid,
    path: String,
    file_name: String,
) {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("[upload] Could not read {path}: {e}");
            set_phase(entries, id, UploadPhase::Failed(format!("could not read file: {e}")));
            return;
        }
    };

    match client.process_video(&file_name, bytes).await {
        Ok(outcome) => set_phase(entries, id, UploadPhase::Done(outcome)),
        Err(e) => {
            eprintln!("[upload] Processing failed for {file_name}: {e}");
            set_phase(entries, id, UploadPhase::Failed(e.to_string()));
        }
    }
}

fn submit(
    client: &RecallClient,
    mut entries: Signal<Vec<UploadEntry>>,
    mut path_input: Signal<String>,
) {
    let path = path_input.read().trim().to_string();
    if path.is_empty() {
        return;
    }
    let file_name = Path::new(&path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload.mp4".to_string());

    let id = Uuid::new_v4();
    entries.write().push(UploadEntry {
        id,
        file_name: file_name.clone(),
        submitted_at: Utc::now(),
        phase: UploadPhase::InFlight,
    });
    path_input.set(String::new());

    let client = client.clone();
    spawn(async move {
        run_upload(client, entries, id, path, file_name).await;
    });
}

#[component]
pub fn UploadView(on_open_conversation: EventHandler<OpenConversationRequest>) -> Element {
    let client = use_context::<RecallClient>();
    let mut path_input = use_signal(String::new);
    let entries = use_signal(Vec::<UploadEntry>::new);

    let current = path_input.read().clone();
    let submit_client = client.clone();

    rsx! {
        div { class: "upload",
            h1 { class: "screen-title", "Add a conversation" }
            p { class: "upload-hint",
                "Point Recall at a recorded video. It will transcribe the "
                "conversation and match the face against people you know."
            }
            div { class: "upload-form",
                input {
                    r#type: "text",
                    class: "upload-path",
                    placeholder: "/path/to/video.mp4",
                    value: "{current}",
                    oninput: move |evt: Event<FormData>| path_input.set(evt.value()),
                }
                button {
                    class: "upload-submit",
                    disabled: current.trim().is_empty(),
                    onclick: move |_| submit(&submit_client, entries, path_input),
                    "Process"
                }
            }

            div { class: "upload-log",
                for entry in entries.read().iter().rev() {
                    div { class: "upload-entry",
                        span { class: "upload-time", {entry.submitted_at.format("%H:%M:%S").to_string()} }
                        span { class: "upload-file", "{entry.file_name}" }
                        {match &entry.phase {
                            UploadPhase::InFlight => rsx! {
                                span { class: "upload-status", "processing…" }
                            },
                            UploadPhase::Failed(reason) => rsx! {
                                span { class: "upload-status upload-failed", "failed — {reason}" }
                            },
                            UploadPhase::Done(outcome) => rsx! {
                                span { class: "upload-status", {face_status_label(outcome.face_status)} }
                                if let Some(name) = outcome.recognized_name() {
                                    button {
                                        class: "link-btn",
                                        onclick: {
                                            let name = name.to_string();
                                            move |_| on_open_conversation.call(OpenConversationRequest::Name(name.clone()))
                                        },
                                        {format!("Open {name}'s conversation →")}
                                    }
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}

#[component]
pub fn RetroUploadView(on_open_conversation: EventHandler<OpenConversationRequest>) -> Element {
    let client = use_context::<RecallClient>();
    let mut path_input = use_signal(String::new);
    let entries = use_signal(Vec::<UploadEntry>::new);

    let current = path_input.read().clone();
    let submit_client = client.clone();

    rsx! {
        div { class: "crt-screen",
            div { class: "crt-titlebar",
                span { class: "crt-title", "TAPE INTAKE" }
            }
            pre { class: "crt-banner", "INSERT TAPE PATH AND PRESS RUN" }
            div { class: "crt-form",
                span { class: "crt-prompt", "> " }
                input {
                    r#type: "text",
                    class: "crt-input",
                    placeholder: "/path/to/video.mp4",
                    value: "{current}",
                    oninput: move |evt: Event<FormData>| path_input.set(evt.value()),
                }
                button {
                    class: "crt-btn",
                    disabled: current.trim().is_empty(),
                    onclick: move |_| submit(&submit_client, entries, path_input),
                    "[ RUN ]"
                }
            }

            div { class: "crt-list",
                for entry in entries.read().iter().rev() {
                    div { class: "crt-line",
                        {match &entry.phase {
                            UploadPhase::InFlight => rsx! {
                                span { {format!("{} … PROCESSING", entry.file_name.to_uppercase())} }
                            },
                            UploadPhase::Failed(reason) => rsx! {
                                span { class: "crt-alert", {format!("{} !! {reason}", entry.file_name.to_uppercase())} }
                            },
                            UploadPhase::Done(outcome) => rsx! {
                                span { {format!("{} :: {}", entry.file_name.to_uppercase(), face_status_label(outcome.face_status).to_uppercase())} }
                                if let Some(name) = outcome.recognized_name() {
                                    button {
                                        class: "crt-row",
                                        onclick: {
                                            let name = name.to_string();
                                            move |_| on_open_conversation.call(OpenConversationRequest::Name(name.clone()))
                                        },
                                        {format!("▸ OPEN {}", name.to_uppercase())}
                                    }
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}
