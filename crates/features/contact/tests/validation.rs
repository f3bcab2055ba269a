use folio_contact::{ContactMessage, ContactSubmission};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,!?'-]{0,40}"
}

fn blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,6}"
}

fn email() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9._+-]{0,15}[a-z0-9]", "[a-z][a-z0-9-]{0,10}[a-z0-9]", "[a-z]{2,6}")
        .prop_map(|(local, host, tld)| format!("{local}@{host}.{tld}"))
        .prop_filter("no consecutive dots", |email| !email.contains(".."))
}

proptest! {
    #[test]
    fn well_formed_submissions_are_echoed(
        name in text(),
        email in email(),
        subject in text(),
        message in text(),
    ) {
        let submission = ContactSubmission { name, email, subject, message };
        let stored = ContactMessage::new(submission.clone().validate().expect("valid submission"));

        prop_assert_eq!(stored.name, submission.name);
        prop_assert_eq!(stored.email, submission.email);
        prop_assert_eq!(stored.subject, submission.subject);
        prop_assert_eq!(stored.message, submission.message);
    }

    #[test]
    fn blank_fields_are_always_reported(
        name in blank(),
        email in email(),
        subject in text(),
        message in blank(),
    ) {
        let violations = ContactSubmission { name, email, subject, message }
            .validate()
            .expect_err("blank fields must be rejected");

        let fields: Vec<_> = violations.iter().map(|v| v.field.as_ref()).collect();
        prop_assert_eq!(fields, vec!["name", "message"]);
    }

    #[test]
    fn addresses_without_at_sign_are_rejected(local in "[a-z0-9.]{1,20}") {
        let submission = ContactSubmission {
            name: "n".to_owned(),
            email: local,
            subject: "s".to_owned(),
            message: "m".to_owned(),
        };
        let violations = submission.validate().expect_err("missing @ must be rejected");
        prop_assert_eq!(violations.len(), 1);
        prop_assert_eq!(violations[0].field.as_ref(), "email");
    }
}
