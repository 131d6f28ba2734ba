//! The one-time legal-consent gate.
//!
//! On startup the application reads a single flag from its consent
//! store; until the exact acceptance marker is found, every screen is
//! withheld behind the consent form. The machine here is purely
//! synchronous; the async store reads/writes live with the UI layer,
//! which feeds their outcomes back in through the transition methods.

/// Storage key under which the acceptance flag is persisted.
pub const CONSENT_STORAGE_KEY: &str = "recall.consent.accepted";

/// The exact stored value that counts as recorded acceptance.
///
/// Anything else (absence, `"false"`, `"1"`, a truncated write) is
/// treated as "not accepted".
pub const CONSENT_ACCEPTED: &str = "true";

/// State of the agreement gate.
///
/// Lifecycle: `Checking → AwaitingConsent → Accepted`, or
/// `Checking → Accepted` directly when the store already holds the
/// marker. `Accepted` is terminal for the process lifetime; there is no
/// way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    /// The store read is still in flight; the app shows a loading view.
    Checking,
    /// No recorded acceptance; the consent form is shown.
    AwaitingConsent {
        /// Whether the user has ticked the agreement checkbox.
        checkbox_ticked: bool,
        /// Whether an acceptance write is currently in flight. While
        /// set, the form refuses a second submit.
        submit_in_flight: bool,
    },
    /// Acceptance has been recorded; the app proper is reachable.
    Accepted,
}

impl ConsentState {
    /// The boot state.
    pub fn new() -> Self {
        ConsentState::Checking
    }

    /// Resolve the boot check from the stored value.
    ///
    /// Only the exact [`CONSENT_ACCEPTED`] marker opens the app; any
    /// other value fails closed to the consent form. Read failures are
    /// mapped to `None` by the caller before reaching this point.
    pub fn from_stored(stored: Option<&str>) -> Self {
        if stored == Some(CONSENT_ACCEPTED) {
            ConsentState::Accepted
        } else {
            ConsentState::AwaitingConsent {
                checkbox_ticked: false,
                submit_in_flight: false,
            }
        }
    }

    /// Whether the boot check is still unresolved.
    pub fn is_checking(&self) -> bool {
        matches!(self, ConsentState::Checking)
    }

    /// Whether acceptance has been recorded.
    pub fn has_accepted(&self) -> bool {
        matches!(self, ConsentState::Accepted)
    }

    /// Whether the submit action is currently available.
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            ConsentState::AwaitingConsent {
                checkbox_ticked: true,
                submit_in_flight: false,
            },
        )
    }

    /// Tick or untick the agreement checkbox.
    ///
    /// Ignored outside the consent form and while a submit is in
    /// flight.
    pub fn set_checkbox(&mut self, ticked: bool) {
        if let ConsentState::AwaitingConsent {
            checkbox_ticked,
            submit_in_flight: false,
        } = self
        {
            *checkbox_ticked = ticked;
        }
    }

    /// Try to start the acceptance write.
    ///
    /// Returns `true` and marks the write in flight when the checkbox
    /// is ticked and no write is already pending; returns `false`
    /// otherwise (unticked form, double-tap, wrong phase). The caller
    /// only performs the store write on `true`.
    pub fn begin_submit(&mut self) -> bool {
        match self {
            ConsentState::AwaitingConsent {
                checkbox_ticked: true,
                submit_in_flight: in_flight @ false,
            } => {
                *in_flight = true;
                true
            }
            _ => false,
        }
    }

    /// Commit the outcome of the acceptance write.
    ///
    /// `recorded == true` means the store durably holds the marker, so
    /// the gate opens. A failed write returns to an editable form: the
    /// checkbox stays ticked and the user may simply press submit
    /// again. In-memory acceptance is never set ahead of the store, so
    /// the two cannot diverge.
    pub fn finish_submit(&mut self, recorded: bool) {
        if let ConsentState::AwaitingConsent {
            checkbox_ticked,
            submit_in_flight: true,
        } = *self
        {
            *self = if recorded {
                ConsentState::Accepted
            } else {
                ConsentState::AwaitingConsent {
                    checkbox_ticked,
                    submit_in_flight: false,
                }
            };
        }
    }
}

impl Default for ConsentState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awaiting(ticked: bool, in_flight: bool) -> ConsentState {
        ConsentState::AwaitingConsent {
            checkbox_ticked: ticked,
            submit_in_flight: in_flight,
        }
    }

    #[test]
    fn boot_starts_checking() {
        assert!(ConsentState::new().is_checking());
        assert!(!ConsentState::new().has_accepted());
    }

    #[test]
    fn only_the_exact_marker_opens_the_gate() {
        assert!(ConsentState::from_stored(Some("true")).has_accepted());

        for stored in [None, Some(""), Some("false"), Some("1"), Some("TRUE"), Some(" true")] {
            let state = ConsentState::from_stored(stored);
            assert_eq!(state, awaiting(false, false), "stored = {stored:?}");
        }
    }

    #[test]
    fn submit_requires_a_ticked_checkbox() {
        let mut state = ConsentState::from_stored(None);
        assert!(!state.begin_submit());
        assert_eq!(state, awaiting(false, false));

        state.set_checkbox(true);
        assert!(state.can_submit());
        assert!(state.begin_submit());
        assert_eq!(state, awaiting(true, true));
    }

    #[test]
    fn double_submit_is_refused_while_in_flight() {
        let mut state = awaiting(true, false);
        assert!(state.begin_submit());
        assert!(!state.begin_submit());
        assert!(!state.can_submit());
    }

    #[test]
    fn checkbox_is_frozen_while_in_flight() {
        let mut state = awaiting(true, true);
        state.set_checkbox(false);
        assert_eq!(state, awaiting(true, true));
    }

    #[test]
    fn successful_write_is_terminal() {
        let mut state = awaiting(true, true);
        state.finish_submit(true);
        assert!(state.has_accepted());

        // No transition leaves Accepted.
        state.set_checkbox(false);
        assert!(!state.begin_submit());
        state.finish_submit(false);
        assert!(state.has_accepted());
    }

    #[test]
    fn failed_write_returns_to_an_editable_ticked_form() {
        let mut state = awaiting(true, true);
        state.finish_submit(false);
        assert_eq!(state, awaiting(true, false));
        // Retry is just submitting again.
        assert!(state.begin_submit());
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut state = awaiting(true, false);
        state.finish_submit(true);
        assert_eq!(state, awaiting(true, false));

        let mut checking = ConsentState::Checking;
        checking.finish_submit(true);
        assert!(checking.is_checking());
    }
}
