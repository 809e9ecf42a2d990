//! Compose-form state.

use facts::{FactDraft, remaining_chars};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub draft: FactDraft,
    /// An insert request is in flight; inputs are disabled.
    pub uploading: bool,
    pub error: Option<String>,
}

impl FormState {
    /// Characters left in the text field (negative once over the limit).
    #[must_use]
    pub fn remaining(&self) -> i64 {
        remaining_chars(&self.draft.text)
    }

    /// Select element value; the empty placeholder clears the category.
    pub fn set_category(&mut self, raw: &str) {
        self.draft.category = if raw.is_empty() { None } else { Some(raw.to_owned()) };
    }

    /// Validate the draft and, if it passes, mark the form as uploading and
    /// hand back the payload to send. On failure the error is kept for display
    /// and the draft is left as typed. Returns `None` while an upload is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<FactDraft> {
        if self.uploading {
            return None;
        }
        match self.draft.validate(0) {
            Ok(_) => {
                self.uploading = true;
                self.error = None;
                Some(self.draft.clone())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// The insert was rejected or the request failed; keep the draft for a retry.
    pub fn fail_submit(&mut self, error: String) {
        self.uploading = false;
        self.error = Some(error);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
