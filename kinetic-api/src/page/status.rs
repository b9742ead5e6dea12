/// Waitlist form state machine
///
/// ```text
/// Idle ──submit──> Submitting ──finish(Ok)──> Success
///                      │
///                      └──finish(Err)──> Error ──submit──> Submitting
/// ```
///
/// Once `Success` is reached the form is replaced by a confirmation, so
/// there is no way back to `Submitting`.

/// Form status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet
    #[default]
    Idle,

    /// A submission is in flight
    Submitting,

    /// The visitor is on the list
    Success,

    /// The last submission failed with this message
    Error(String),
}

impl FormStatus {
    /// Starts a submission
    ///
    /// Only `Idle` and `Error` can submit; other states are returned as-is.
    pub fn submit(self) -> Self {
        match self {
            FormStatus::Idle | FormStatus::Error(_) => FormStatus::Submitting,
            other => other,
        }
    }

    /// Resolves an in-flight submission
    ///
    /// Has no effect unless the form is `Submitting`.
    pub fn finish(self, outcome: Result<(), String>) -> Self {
        match (self, outcome) {
            (FormStatus::Submitting, Ok(())) => FormStatus::Success,
            (FormStatus::Submitting, Err(message)) => FormStatus::Error(message),
            (other, _) => other,
        }
    }

    /// Whether the form should still be shown
    pub fn shows_form(&self) -> bool {
        !matches!(self, FormStatus::Success)
    }

    /// Error message to display, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let status = FormStatus::default().submit();
        assert_eq!(status, FormStatus::Submitting);
        assert!(status.shows_form());

        let status = status.finish(Ok(()));
        assert_eq!(status, FormStatus::Success);
        assert!(!status.shows_form());
    }

    #[test]
    fn test_error_then_retry() {
        let status = FormStatus::Idle
            .submit()
            .finish(Err("Please enter a valid email address.".to_string()));
        assert_eq!(status.error_message(), Some("Please enter a valid email address."));

        let status = status.submit();
        assert_eq!(status, FormStatus::Submitting);
        assert_eq!(status.error_message(), None);
    }

    #[test]
    fn test_invalid_transitions_are_ignored() {
        assert_eq!(FormStatus::Success.submit(), FormStatus::Success);
        assert_eq!(FormStatus::Submitting.submit(), FormStatus::Submitting);
        assert_eq!(FormStatus::Idle.finish(Ok(())), FormStatus::Idle);
        assert_eq!(
            FormStatus::Success.finish(Err("late".to_string())),
            FormStatus::Success
        );
    }
}
