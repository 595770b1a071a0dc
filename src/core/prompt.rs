//! One-time location consent prompt.
//!
//! The two states and their transitions are explicit so the dismiss/retry
//! semantics stay auditable. Once dismissed the prompt never re-opens within
//! a session.

use crate::core::permission_store::PermissionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Shown,
    Hidden,
}

pub struct PermissionPrompt {
    state: PromptState,
}

impl PermissionPrompt {
    /// `Shown` on mount iff permission has not been proven yet.
    pub fn mount(store: &PermissionStore) -> Self {
        let state = if store.state().has_permission {
            PromptState::Hidden
        } else {
            PromptState::Shown
        };
        Self { state }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == PromptState::Shown
    }

    /// "Not now": hide for the rest of the session.
    pub fn dismiss(&mut self) {
        self.state = PromptState::Hidden;
    }

    /// Feed back the result of the acquisition the user consented to. Only a
    /// successful acquisition hides the prompt; a denied or failed fix leaves
    /// it up so the user can retry manually (no automatic loop).
    pub fn on_consent_result(&mut self, acquired: bool) {
        if acquired {
            self.state = PromptState::Hidden;
        }
    }
}
