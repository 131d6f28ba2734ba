//! Async glue between the consent state machine and the store.
//!
//! Store failures never reach the UI as errors: a failed read resolves
//! to "not accepted" (the gate fails open to the consent form, never to
//! the app) and a failed write leaves the form up for a retry. Both are
//! logged and swallowed here.

use recall_models::consent::{ConsentState, CONSENT_ACCEPTED, CONSENT_STORAGE_KEY};
use recall_sdk::ConsentStore;

/// Resolve the boot-time agreement check.
///
/// Always returns a post-`Checking` state, so the loading view ends
/// exactly once no matter how the read went.
pub async fn check_agreement_status<S: ConsentStore>(store: &S) -> ConsentState {
    match store.get(CONSENT_STORAGE_KEY).await {
        Ok(stored) => ConsentState::from_stored(stored.as_deref()),
        Err(e) => {
            eprintln!("[consent] Agreement status check failed: {e}");
            ConsentState::from_stored(None)
        }
    }
}

/// Write the acceptance marker; `true` means it is durably recorded.
///
/// On `false` the caller keeps the gate closed; in-memory acceptance
/// must never run ahead of the store.
pub async fn accept_agreement<S: ConsentStore>(store: &S) -> bool {
    match store.set(CONSENT_STORAGE_KEY, CONSENT_ACCEPTED).await {
        Ok(()) => true,
        Err(e) => {
            eprintln!("[consent] Could not record acceptance: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recall_sdk::{MemoryConsentStore, StoreError};
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Store whose operations always fail.
    struct OfflineStore;

    impl ConsentStore for OfflineStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Backend("store offline".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("store offline".into()))
        }
    }

    /// Store whose first `n` writes fail, then behave normally.
    struct FlakyStore {
        inner: MemoryConsentStore,
        failures_left: AtomicU32,
    }

    impl FlakyStore {
        fn failing_once() -> Self {
            Self {
                inner: MemoryConsentStore::new(),
                failures_left: AtomicU32::new(1),
            }
        }
    }

    impl ConsentStore for FlakyStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.failures_left.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1)).is_ok() {
                return Err(StoreError::Backend("transient write failure".into()));
            }
            self.inner.set(key, value).await
        }
    }

    #[tokio::test]
    async fn fresh_store_requires_consent() {
        let store = MemoryConsentStore::new();
        let state = check_agreement_status(&store).await;
        assert!(!state.is_checking());
        assert!(!state.has_accepted());
    }

    #[tokio::test]
    async fn only_the_sentinel_opens_the_gate() {
        for value in ["", "false", "1", "yes"] {
            let store = MemoryConsentStore::new();
            store.set(CONSENT_STORAGE_KEY, value).await.unwrap();
            let state = check_agreement_status(&store).await;
            assert!(!state.has_accepted(), "value = {value:?}");
        }
    }

    #[tokio::test]
    async fn read_failure_fails_open_to_the_consent_form() {
        let state = check_agreement_status(&OfflineStore).await;
        assert!(!state.is_checking());
        assert!(!state.has_accepted());
    }

    #[tokio::test]
    async fn acceptance_is_idempotent_across_launches() {
        let store = MemoryConsentStore::new();
        assert!(accept_agreement(&store).await);

        // Every subsequent boot resolves straight to accepted.
        for _ in 0..3 {
            assert!(check_agreement_status(&store).await.has_accepted());
        }
    }

    #[tokio::test]
    async fn write_failure_reports_not_recorded() {
        assert!(!accept_agreement(&OfflineStore).await);
    }

    #[tokio::test]
    async fn first_and_second_launch_end_to_end() {
        let store = MemoryConsentStore::new();

        // First launch: loading → consent form.
        let mut state = ConsentState::new();
        assert!(state.is_checking());
        state = check_agreement_status(&store).await;
        assert!(!state.has_accepted());

        // Tick the checkbox, press accept.
        state.set_checkbox(true);
        assert!(state.begin_submit());
        let recorded = accept_agreement(&store).await;
        state.finish_submit(recorded);
        assert!(state.has_accepted());
        assert_eq!(
            store.get(CONSENT_STORAGE_KEY).await.unwrap().as_deref(),
            Some("true"),
        );

        // Second launch: no consent form.
        let relaunch = check_agreement_status(&store).await;
        assert!(relaunch.has_accepted());
    }

    #[tokio::test]
    async fn failed_write_leaves_the_form_up_and_retry_succeeds() {
        let store = FlakyStore::failing_once();

        let mut state = check_agreement_status(&store).await;
        state.set_checkbox(true);

        // First attempt: the write fails, the gate stays closed.
        assert!(state.begin_submit());
        let recorded = accept_agreement(&store).await;
        assert!(!recorded);
        state.finish_submit(recorded);
        assert!(!state.has_accepted());
        assert_eq!(store.get(CONSENT_STORAGE_KEY).await.unwrap(), None);

        // Retry: pressing submit again is the whole recovery path.
        assert!(state.begin_submit());
        let recorded = accept_agreement(&store).await;
        assert!(recorded);
        state.finish_submit(recorded);
        assert!(state.has_accepted());
    }
}
