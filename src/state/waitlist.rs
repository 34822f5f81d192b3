#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

/// State for the waitlist signup form.
///
/// `email` mirrors the input field on every keystroke; `submitted` flips to
/// true on the first accepted submit and there is no path back within a
/// session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistState {
    pub email: String,
    pub submitted: bool,
}

impl WaitlistState {
    /// Replace the stored email unconditionally. Format checking is left to
    /// the browser's native `type="email"` validation.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Accept the submission when the email is non-empty.
    ///
    /// An empty-string submit is a silent no-op — the native required/email
    /// input checks stop malformed text before this runs, so there is no
    /// error to surface.
    pub fn submit(&mut self) -> bool {
        if self.email.is_empty() {
            return false;
        }
        self.submitted = true;
        true
    }
}
