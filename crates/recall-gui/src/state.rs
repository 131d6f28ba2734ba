use recall_models::{ConsentState, NavigationState};

// ── Global app state ──────────────────────────────────────────────────

/// Everything the app renders from: the agreement gate's phase and the
/// navigation coordinator. Mutated only through the typed operations on
/// the two machines.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub consent: ConsentState,
    pub nav: NavigationState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            consent: ConsentState::new(),
            nav: NavigationState::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
