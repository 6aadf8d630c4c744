//! Registration-draft state for the register view.
//!
//! DESIGN
//! ======
//! The draft is an explicit typed structure instead of loose per-field
//! strings, so the submission boundary has one place to validate and one
//! conversion into the wire request.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::net::types::RegisterRequest;

/// Message shown when validation rejects an incomplete draft.
pub const INCOMPLETE_DRAFT_MESSAGE: &str = "Enter both username and password.";

/// Transient registration input, alive only while the register view is
/// mounted. Field edits are last-write-wins and stored verbatim: no
/// trimming, no length limit, no transformation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub username: String,
    pub password: String,
}

impl RegistrationDraft {
    /// Replace the username with the latest input value.
    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    /// Replace the password with the latest input value.
    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Validate the draft at the submission boundary. Both fields must be
    /// non-empty; values are otherwise passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when either field is empty.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(INCOMPLETE_DRAFT_MESSAGE);
        }
        Ok(RegisterRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}
