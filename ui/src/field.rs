//! Pure state transitions for the login form's input fields.
//!
//! Each field is a tiny state machine: a value plus a tri-state validity
//! flag that stays `None` until the field has been evaluated at least once.
//! The transition functions are pure so they can be tested without a
//! running app.

/// Validation state for a single input field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    /// `None` until first evaluated, then `Some(valid)`.
    pub is_valid: Option<bool>,
}

/// Action dispatched to a field reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// The user typed; carries the full new value.
    Input(String),
    /// The field lost focus; re-validate the stored value.
    Blur,
}

/// An email is accepted when it contains an `@`.
pub fn is_valid_email(value: &str) -> bool {
    value.contains('@')
}

/// A password is accepted when its trimmed length exceeds 6 characters.
pub fn is_valid_password(value: &str) -> bool {
    value.trim().chars().count() > 6
}

impl FieldState {
    fn apply(&self, action: FieldAction, valid: impl Fn(&str) -> bool) -> FieldState {
        match action {
            FieldAction::Input(value) => {
                let is_valid = Some(valid(&value));
                FieldState { value, is_valid }
            }
            FieldAction::Blur => FieldState {
                value: self.value.clone(),
                is_valid: Some(valid(&self.value)),
            },
        }
    }
}

/// Reducer for the email field.
pub fn reduce_email(state: &FieldState, action: FieldAction) -> FieldState {
    state.apply(action, is_valid_email)
}

/// Reducer for the password field.
pub fn reduce_password(state: &FieldState, action: FieldAction) -> FieldState {
    state.apply(action, is_valid_password)
}

/// Overall form validity. Both flags must be strictly `Some(true)`;
/// a not-yet-evaluated field counts as invalid.
pub fn form_is_valid(email: Option<bool>, password: Option<bool>) -> bool {
    email == Some(true) && password == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_predicate() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("@"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_predicate_boundary() {
        assert!(!is_valid_password("abcdef")); // 6 chars
        assert!(is_valid_password("abcdefg")); // 7 chars
    }

    #[test]
    fn test_password_predicate_trims_whitespace() {
        assert!(!is_valid_password("   abcdef   "));
        assert!(is_valid_password("  abcdefg  "));
        assert!(!is_valid_password("          "));
    }

    #[test]
    fn test_input_replaces_value_and_revalidates() {
        let state = FieldState::default();
        let state = reduce_email(&state, FieldAction::Input("abc".to_string()));
        assert_eq!(state.value, "abc");
        assert_eq!(state.is_valid, Some(false));

        let state = reduce_email(&state, FieldAction::Input("a@b.com".to_string()));
        assert_eq!(state.value, "a@b.com");
        assert_eq!(state.is_valid, Some(true));
    }

    #[test]
    fn test_blur_after_input_is_a_noop() {
        let typed = reduce_password(&FieldState::default(), FieldAction::Input("abcdefg".to_string()));
        let blurred = reduce_password(&typed, FieldAction::Blur);
        assert_eq!(blurred, typed);
    }

    #[test]
    fn test_double_blur_is_idempotent() {
        let typed = reduce_email(&FieldState::default(), FieldAction::Input("abc".to_string()));
        let once = reduce_email(&typed, FieldAction::Blur);
        let twice = reduce_email(&once, FieldAction::Blur);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_blur_on_pristine_field_marks_invalid() {
        // An untouched field has never been evaluated; blurring it
        // evaluates the empty value.
        let state = FieldState::default();
        assert_eq!(state.is_valid, None);

        let blurred = reduce_email(&state, FieldAction::Blur);
        assert_eq!(blurred.value, "");
        assert_eq!(blurred.is_valid, Some(false));
    }

    #[test]
    fn test_form_is_valid_truth_table() {
        assert!(form_is_valid(Some(true), Some(true)));
        assert!(!form_is_valid(Some(true), Some(false)));
        assert!(!form_is_valid(Some(false), Some(true)));
        assert!(!form_is_valid(Some(true), None));
        assert!(!form_is_valid(None, Some(true)));
        assert!(!form_is_valid(None, None));
    }

    #[test]
    fn test_valid_credentials_scenario() {
        let email = reduce_email(&FieldState::default(), FieldAction::Input("a@b.com".to_string()));
        let pass = reduce_password(&FieldState::default(), FieldAction::Input("abcdefg".to_string()));
        assert!(form_is_valid(email.is_valid, pass.is_valid));
    }

    #[test]
    fn test_bad_email_scenario() {
        let email = reduce_email(&FieldState::default(), FieldAction::Input("abc".to_string()));
        let email = reduce_email(&email, FieldAction::Blur);
        let pass = reduce_password(&FieldState::default(), FieldAction::Input("abcdefg".to_string()));

        assert_eq!(email.is_valid, Some(false));
        assert!(!form_is_valid(email.is_valid, pass.is_valid));
    }
}
