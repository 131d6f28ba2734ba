use dioxus::prelude::*;
use recall_models::{IntoEnumIterator, Tab};

fn label(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "Home",
        Tab::Upload => "Upload",
        Tab::Highlights => "Highlights",
        Tab::Memory => "Memory",
    }
}

fn icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "⌂",
        Tab::Upload => "⇪",
        Tab::Highlights => "✦",
        Tab::Memory => "☺",
    }
}

#[component]
pub fn TabBar(active_tab: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        nav { class: "tab-bar",
            for tab in Tab::iter() {
                button {
                    class: if tab == active_tab { "tab active" } else { "tab" },
                    onclick: move |_| on_select.call(tab),
                    span { class: "tab-icon", {icon(tab)} }
                    span { class: "tab-label", {label(tab)} }
                }
            }
        }
    }
}

/// Function-key styled chrome for the retro theme.
#[component]
pub fn RetroTabBar(active_tab: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        nav { class: "crt-keyrow",
            for (idx, tab) in Tab::iter().enumerate() {
                button {
                    class: if tab == active_tab { "crt-key crt-key-active" } else { "crt-key" },
                    onclick: move |_| on_select.call(tab),
                    {format!("[F{}] ", idx + 1)}
                    span { class: "crt-key-name", {label(tab).to_uppercase()} }
                }
            }
        }
    }
}
