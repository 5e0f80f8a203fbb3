//! Session guard and credential lifecycle.
//!
//! The stored bearer token is external state behind [`CredentialStore`].
//! [`SessionGuard`] walks the per-mount state machine
//!
//! ```text
//! Unchecked ──▶ Checking ──▶ Resolved
//!     │             │
//!     └─────────────┴──────▶ Redirecting
//! ```
//!
//! and is the only writer that clears the store on a failed verification.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;

use crate::error::{StatusError, StorageError};

// =============================================================================
// Credential
// =============================================================================

/// Opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. Blank tokens count as absent.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Durable home of the current credential. Absence means "logged out".
pub trait CredentialStore {
    fn load(&self) -> Option<Credential>;
    fn save(&self, credential: &Credential) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Process-local store, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }

    /// Raw stored value, bypassing [`Credential::new`].
    pub fn raw(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<Credential> {
        self.token.borrow().clone().and_then(Credential::new)
    }

    fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(credential.as_str().to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Persist a freshly issued credential (login, registration).
pub fn sign_in(store: &impl CredentialStore, credential: &Credential) -> Result<(), StorageError> {
    store.save(credential)?;
    log::info!("session stored");
    Ok(())
}

/// Drop the stored credential (logout, unauthorized, delete-self).
///
/// Storage failures are logged; the session is considered over either way.
pub fn invalidate(store: &impl CredentialStore) -> SessionPhase {
    if let Err(err) = store.clear() {
        log::warn!("could not clear credential: {err}");
    }
    SessionPhase::Redirecting
}

// =============================================================================
// Verification
// =============================================================================

/// Checks a credential against the backend.
pub trait Verifier {
    fn verify(&self, credential: &Credential) -> impl Future<Output = Result<(), StatusError>>;
}

/// Whether a stored credential is confirmed remotely before it is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verification {
    #[default]
    Remote,
    /// Trust any stored credential.
    Skip,
}

// =============================================================================
// State machine
// =============================================================================

/// Per-mount session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Unchecked,
    /// Verification in flight.
    Checking,
    /// A verified credential is available to descendants.
    Resolved(Credential),
    /// No usable credential; navigating to login.
    Redirecting,
}

impl SessionPhase {
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Resolved(credential) => Some(credential),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn is_redirecting(&self) -> bool {
        matches!(self, Self::Redirecting)
    }
}

/// Drives [`SessionPhase`] for one protected view tree.
#[derive(Debug, Default)]
pub struct SessionGuard {
    phase: SessionPhase,
    verification: Verification,
    pending: Option<Credential>,
}

impl SessionGuard {
    pub fn new(verification: Verification) -> Self {
        Self {
            verification,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Read the store and decide the next step.
    ///
    /// Returns the credential that still needs verification; `None` means
    /// the phase is already final or a check for the same credential is in
    /// flight. A guard already resolved for the stored credential stays
    /// resolved without another round trip.
    pub fn begin(&mut self, store: &impl CredentialStore) -> Option<Credential> {
        let Some(credential) = store.load() else {
            log::debug!("no stored credential");
            self.pending = None;
            self.phase = SessionPhase::Redirecting;
            return None;
        };

        if self.phase.credential() == Some(&credential) || self.pending.as_ref() == Some(&credential)
        {
            return None;
        }

        match self.verification {
            Verification::Skip => {
                self.phase = SessionPhase::Resolved(credential);
                None
            }
            Verification::Remote => {
                self.pending = Some(credential.clone());
                self.phase = SessionPhase::Checking;
                Some(credential)
            }
        }
    }

    /// Apply a verification outcome.
    ///
    /// Outcomes for a credential other than the one being checked are stale
    /// and ignored.
    pub fn settle(
        &mut self,
        store: &impl CredentialStore,
        credential: &Credential,
        outcome: Result<(), StatusError>,
    ) -> &SessionPhase {
        if self.pending.as_ref() != Some(credential) {
            log::debug!("ignoring stale verification result");
            return &self.phase;
        }
        self.pending = None;

        self.phase = match outcome {
            Ok(()) => SessionPhase::Resolved(credential.clone()),
            Err(err) => {
                log::info!("session rejected: {err}");
                invalidate(store)
            }
        };
        &self.phase
    }

    /// [`begin`](Self::begin), verify, [`settle`](Self::settle).
    pub async fn resolve(
        &mut self,
        store: &impl CredentialStore,
        verifier: &impl Verifier,
    ) -> &SessionPhase {
        if let Some(credential) = self.begin(store) {
            let outcome = verifier.verify(&credential).await;
            self.settle(store, &credential, outcome);
        }
        &self.phase
    }

    /// End the session after a privileged call came back unauthorized.
    pub fn invalidate(&mut self, store: &impl CredentialStore) -> &SessionPhase {
        self.pending = None;
        self.phase = invalidate(store);
        &self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Verifier answering with a fixed outcome and counting calls.
    struct Fixed {
        outcome: Result<(), StatusError>,
        calls: Cell<usize>,
    }

    impl Fixed {
        fn ok() -> Self {
            Self {
                outcome: Ok(()),
                calls: Cell::new(0),
            }
        }

        fn err(status: u16) -> Self {
            Self {
                outcome: Err(StatusError::new("Unauthenticated.", status)),
                calls: Cell::new(0),
            }
        }
    }

    impl Verifier for Fixed {
        async fn verify(&self, _credential: &Credential) -> Result<(), StatusError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn cred(token: &str) -> Credential {
        Credential::new(token).unwrap()
    }

    #[test]
    fn test_blank_credential_is_absent() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
        assert!(MemoryStore::with_token("").load().is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let shown = format!("{:?}", cred("secret-token"));
        assert!(!shown.contains("secret-token"));
        let shown = format!("{:?}", SessionPhase::Resolved(cred("secret-token")));
        assert!(!shown.contains("secret-token"));
    }

    #[test]
    fn test_bearer_value() {
        assert_eq!(cred("abc").bearer(), "Bearer abc");
    }

    #[test]
    fn test_starts_unchecked() {
        let guard = SessionGuard::new(Verification::Remote);
        assert_eq!(guard.phase(), &SessionPhase::Unchecked);
        assert!(guard.phase().credential().is_none());
    }

    #[test]
    fn test_begin_without_credential_redirects() {
        let store = MemoryStore::new();
        let mut guard = SessionGuard::new(Verification::Remote);
        assert_eq!(guard.begin(&store), None);
        assert!(guard.phase().is_redirecting());
    }

    #[test]
    fn test_pending_verification_stays_checking() {
        let store = MemoryStore::with_token("abc");
        let mut guard = SessionGuard::new(Verification::Remote);
        assert_eq!(guard.begin(&store), Some(cred("abc")));
        assert_eq!(guard.phase(), &SessionPhase::Checking);
        assert!(guard.phase().credential().is_none());
    }

    #[test]
    fn test_skip_verification_resolves_directly() {
        let store = MemoryStore::with_token("abc");
        let mut guard = SessionGuard::new(Verification::Skip);
        assert_eq!(guard.begin(&store), None);
        assert_eq!(guard.phase(), &SessionPhase::Resolved(cred("abc")));
    }

    #[test]
    fn test_stale_outcome_ignored() {
        let store = MemoryStore::with_token("new");
        let mut guard = SessionGuard::new(Verification::Remote);
        guard.begin(&store);

        let phase = guard.settle(&store, &cred("old"), Err(StatusError::new("x", 401)));
        assert_eq!(phase, &SessionPhase::Checking);
        assert_eq!(store.raw().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_valid_credential_resolves() {
        let store = MemoryStore::with_token("abc");
        let verifier = Fixed::ok();
        let mut guard = SessionGuard::new(Verification::Remote);

        let phase = guard.resolve(&store, &verifier).await;
        assert_eq!(phase, &SessionPhase::Resolved(cred("abc")));
        assert_eq!(verifier.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_rejected_credential_cleared() {
        for status in [401, 403, 500] {
            let store = MemoryStore::with_token("abc");
            let mut guard = SessionGuard::new(Verification::Remote);

            let phase = guard.resolve(&store, &Fixed::err(status)).await;
            assert!(phase.is_redirecting());
            assert_eq!(store.raw(), None);
        }
    }

    #[tokio::test]
    async fn test_resolve_twice_is_idempotent() {
        let store = MemoryStore::with_token("abc");
        let verifier = Fixed::ok();
        let mut guard = SessionGuard::new(Verification::Remote);

        guard.resolve(&store, &verifier).await;
        let phase = guard.resolve(&store, &verifier).await;
        assert_eq!(phase, &SessionPhase::Resolved(cred("abc")));
        assert_eq!(verifier.calls.get(), 1);

        let mut fresh = SessionGuard::new(Verification::Remote);
        let phase = fresh.resolve(&store, &verifier).await;
        assert_eq!(phase, &SessionPhase::Resolved(cred("abc")));
        assert_eq!(store.raw().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_invalidate_after_resolve() {
        let store = MemoryStore::with_token("abc");
        let mut guard = SessionGuard::new(Verification::Remote);
        guard.resolve(&store, &Fixed::ok()).await;

        assert!(guard.invalidate(&store).is_redirecting());
        assert_eq!(store.raw(), None);

        let mut next = SessionGuard::new(Verification::Remote);
        assert!(next.resolve(&store, &Fixed::ok()).await.is_redirecting());
    }

    #[test]
    fn test_sign_in_persists() {
        let store = MemoryStore::new();
        sign_in(&store, &cred("fresh")).unwrap();
        assert_eq!(store.load(), Some(cred("fresh")));
    }
}
