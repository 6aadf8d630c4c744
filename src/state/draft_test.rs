use super::*;
use crate::net::types::RegisterRequest;

#[test]
fn draft_starts_empty() {
    let draft = RegistrationDraft::default();
    assert_eq!(draft.username, "");
    assert_eq!(draft.password, "");
}

#[test]
fn field_edits_are_last_write_wins_and_verbatim() {
    let mut draft = RegistrationDraft::default();
    draft.set_username("al".to_owned());
    draft.set_username("  alice  ".to_owned());
    draft.set_password("secret".to_owned());
    assert_eq!(draft.username, "  alice  ");
    assert_eq!(draft.password, "secret");
}

#[test]
fn validate_passes_fields_through_verbatim() {
    let draft = RegistrationDraft {
        username: " alice ".to_owned(),
        password: "secret".to_owned(),
    };
    assert_eq!(
        draft.validate(),
        Ok(RegisterRequest {
            username: " alice ".to_owned(),
            password: "secret".to_owned(),
        })
    );
}

#[test]
fn validate_rejects_empty_fields() {
    let missing_username = RegistrationDraft {
        username: String::new(),
        password: "secret".to_owned(),
    };
    let missing_password = RegistrationDraft {
        username: "alice".to_owned(),
        password: String::new(),
    };
    assert_eq!(missing_username.validate(), Err(INCOMPLETE_DRAFT_MESSAGE));
    assert_eq!(missing_password.validate(), Err(INCOMPLETE_DRAFT_MESSAGE));
}
