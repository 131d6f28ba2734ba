//! The navigation coordinator: the single authority for what is on
//! screen.
//!
//! [`NavigationState`] owns the active tab, the optional focused
//! conversation, and the theme. Its fields are private and mutated only
//! through the named operations, so every invariant lives in one place:
//! a focused conversation always suppresses tab content, and switching
//! tabs always drops the focused conversation first, so the two can
//! never render simultaneously.

use serde::{Deserialize, Serialize};

use crate::conversation::{ConversationTarget, OpenConversationRequest};
use crate::tab::Tab;
use crate::theme::Theme;

/// What the rendering layer should mount, resolved from the coordinator
/// state. Exactly one screen is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScreenKind {
    /// The home dashboard.
    Home,
    /// The upload flow.
    Upload,
    /// The highlights list.
    Highlights,
    /// The per-person memory list.
    Memory,
    /// A focused conversation (suppresses whatever tab is active).
    Conversation,
}

/// Serializable coordinator state.
///
/// # Examples
///
/// ```
/// use recall_models::{NavigationState, ScreenKind, Tab};
///
/// let mut nav = NavigationState::new();
/// assert_eq!(nav.active_tab(), Tab::Home);
///
/// nav.open_conversation("Alex".into());
/// assert_eq!(nav.active_tab(), Tab::Memory);
/// assert_eq!(nav.active_screen(), ScreenKind::Conversation);
///
/// nav.navigate_tab(Tab::Highlights);
/// assert!(nav.active_conversation().is_none());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavigationState {
    active_tab: Tab,
    active_conversation: Option<ConversationTarget>,
    theme: Theme,
}

impl NavigationState {
    /// Fresh launch state: home tab, nothing focused, standard theme.
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Home,
            active_conversation: None,
            theme: Theme::Standard,
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Focus a person's conversation.
    ///
    /// The request is normalized at this boundary; a payload without a
    /// resolvable non-empty name leaves the state untouched. On success
    /// the active tab is forced to [`Tab::Memory`] no matter where the
    /// request came from, so opening a conversation always lands in the
    /// people context.
    pub fn open_conversation(&mut self, request: OpenConversationRequest) {
        let Some(target) = request.normalize() else {
            return;
        };
        self.active_conversation = Some(target);
        self.active_tab = Tab::Memory;
    }

    /// Switch to a tab.
    ///
    /// Always drops the focused conversation first, so returning to any
    /// tab (including memory) starts from its list view.
    pub fn navigate_tab(&mut self, tab: Tab) {
        self.active_conversation = None;
        self.active_tab = tab;
    }

    /// Leave the focused conversation, staying on the current tab.
    pub fn close_conversation(&mut self) {
        self.active_conversation = None;
    }

    /// Flip the theme. Tab and conversation are untouched.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // ------------------------------------------------------------------
    // Projections
    // ------------------------------------------------------------------

    /// The active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// The focused conversation, if any.
    pub fn active_conversation(&self) -> Option<&ConversationTarget> {
        self.active_conversation.as_ref()
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Resolve the single screen to render. A focused conversation
    /// always wins over the active tab.
    pub fn active_screen(&self) -> ScreenKind {
        if self.active_conversation.is_some() {
            return ScreenKind::Conversation;
        }
        match self.active_tab {
            Tab::Home => ScreenKind::Home,
            Tab::Upload => ScreenKind::Upload,
            Tab::Highlights => ScreenKind::Highlights,
            Tab::Memory => ScreenKind::Memory,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationDraft;

    fn open(nav: &mut NavigationState, name: &str) {
        nav.open_conversation(name.into());
    }

    #[test]
    fn launch_state() {
        let nav = NavigationState::new();
        assert_eq!(nav.active_tab(), Tab::Home);
        assert!(nav.active_conversation().is_none());
        assert_eq!(nav.theme(), Theme::Standard);
        assert_eq!(nav.active_screen(), ScreenKind::Home);
    }

    #[test]
    fn opening_forces_the_memory_tab() {
        let mut nav = NavigationState::new();
        nav.navigate_tab(Tab::Upload);

        nav.open_conversation(OpenConversationRequest::Target(ConversationDraft {
            name: Some("Alex".into()),
            ..ConversationDraft::default()
        }));

        assert_eq!(nav.active_tab(), Tab::Memory);
        assert_eq!(nav.active_conversation().unwrap().name.as_str(), "Alex");
        assert_eq!(nav.active_screen(), ScreenKind::Conversation);
    }

    #[test]
    fn malformed_requests_change_nothing() {
        let mut nav = NavigationState::new();
        nav.navigate_tab(Tab::Highlights);
        let before = nav.clone();

        nav.open_conversation("".into());
        nav.open_conversation(OpenConversationRequest::Target(ConversationDraft::default()));
        nav.open_conversation(OpenConversationRequest::Target(ConversationDraft {
            highlight_index: Some(2),
            ..ConversationDraft::default()
        }));

        assert_eq!(nav, before);
    }

    #[test]
    fn tab_and_conversation_never_render_together() {
        // Exercise an arbitrary interleaving of operations and check the
        // exclusivity invariant after every step.
        let mut nav = NavigationState::new();
        let steps: Vec<Box<dyn Fn(&mut NavigationState)>> = vec![
            Box::new(|n| open(n, "tim")),
            Box::new(|n| n.navigate_tab(Tab::Upload)),
            Box::new(|n| open(n, "parker")),
            Box::new(|n| open(n, "nicko")),
            Box::new(|n| n.toggle_theme()),
            Box::new(|n| n.navigate_tab(Tab::Memory)),
            Box::new(|n| n.close_conversation()),
            Box::new(|n| open(n, "tim")),
            Box::new(|n| n.navigate_tab(Tab::Home)),
        ];

        for step in steps {
            step(&mut nav);
            let conversation_shown = nav.active_screen() == ScreenKind::Conversation;
            assert_eq!(conversation_shown, nav.active_conversation().is_some());
            if conversation_shown {
                assert_eq!(nav.active_tab(), Tab::Memory);
            }
        }
    }

    #[test]
    fn switching_tabs_clears_the_conversation() {
        let mut nav = NavigationState::new();
        open(&mut nav, "tim");

        nav.navigate_tab(Tab::Memory);
        assert!(nav.active_conversation().is_none());
        assert_eq!(nav.active_screen(), ScreenKind::Memory);
    }

    #[test]
    fn closing_keeps_the_tab() {
        let mut nav = NavigationState::new();
        open(&mut nav, "tim");
        nav.close_conversation();

        assert!(nav.active_conversation().is_none());
        assert_eq!(nav.active_tab(), Tab::Memory);
        assert_eq!(nav.active_screen(), ScreenKind::Memory);
    }

    #[test]
    fn theme_does_not_leak_into_navigation() {
        let mut nav = NavigationState::new();
        nav.navigate_tab(Tab::Memory);
        open(&mut nav, "parker");
        let tab_before = nav.active_tab();
        let conversation_before = nav.active_conversation().cloned();

        nav.toggle_theme();
        nav.toggle_theme();

        assert_eq!(nav.active_tab(), tab_before);
        assert_eq!(nav.active_conversation().cloned(), conversation_before);
        assert_eq!(nav.theme(), Theme::Standard);
    }

    #[test]
    fn state_is_serializable() {
        let mut nav = NavigationState::new();
        open(&mut nav, "tim");
        nav.toggle_theme();

        let json = serde_json::to_string(&nav).unwrap();
        let back: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nav);
    }
}
