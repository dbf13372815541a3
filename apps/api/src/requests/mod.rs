//! Job-application-request form: payload validation and the notification
//! email relayed to the service operator.

pub mod handlers;

use chrono::Utc;
use serde::Deserialize;

use crate::directory::render::escape_html;
use crate::mailer::OutboundEmail;

/// Raw form payload as posted by the front-end. Every field is optional at
/// the wire level; `validate` decides what is actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestPayload {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub notes: String,
}

/// A validated, trimmed submission. Phone and notes stay optional.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub notes: Option<String>,
}

/// Trims every field, checks required-field presence and email shape.
/// Error strings are user-facing.
pub fn validate(payload: &RequestPayload) -> Result<RequestSubmission, String> {
    let first_name = payload.first_name.trim();
    let last_name = payload.last_name.trim();
    let email = payload.email.trim();
    let phone = payload.phone.trim();
    let street = payload.street.trim();
    let city = payload.city.trim();
    let state = payload.state.trim();
    let zip = payload.zip.trim();
    let notes = payload.notes.trim();

    if first_name.is_empty()
        || last_name.is_empty()
        || email.is_empty()
        || street.is_empty()
        || city.is_empty()
        || state.is_empty()
        || zip.is_empty()
    {
        return Err("Please fill out all required fields.".to_string());
    }
    if !is_email(email) {
        return Err("Please enter a valid email.".to_string());
    }

    Ok(RequestSubmission {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    })
}

/// Basic `local@domain.tld` shape check: no whitespace, exactly one `@`,
/// non-empty local part, and a domain whose final label is at least 2 chars.
///
/// Deliberately stricter than a dot-anywhere-in-domain check: the 2-char
/// minimum applies to the last label, so `a@b.cd.e` is rejected even though
/// it has an interior label of 2+ chars. No real TLD is a single character.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

/// Formats the operator notification for a validated submission.
pub fn notification_email(
    submission: &RequestSubmission,
    from: &str,
    to: &str,
) -> OutboundEmail {
    let subject = format!(
        "New JobAppID Request — {} {}",
        submission.first_name, submission.last_name
    );

    let html = format!(
        "<div style=\"font-family:Arial,sans-serif;line-height:1.4\">\
         <h2>New JobAppID Request</h2>\
         <p><strong>Submitted:</strong> {submitted}</p>\
         <h3>Contact</h3>\
         <p><strong>Name:</strong> {first} {last}<br/>\
         <strong>Email:</strong> {email}<br/>\
         <strong>Phone:</strong> {phone}</p>\
         <h3>Mailing Address</h3>\
         <p>{street}<br/>{city}, {state} {zip}</p>\
         <h3>Notes</h3>\
         <p>{notes}</p>\
         <hr/>\
         <p style=\"color:#666;font-size:12px\">This request was submitted from jobappid.com</p>\
         </div>",
        submitted = escape_html(&Utc::now().to_rfc3339()),
        first = escape_html(&submission.first_name),
        last = escape_html(&submission.last_name),
        email = escape_html(&submission.email),
        phone = escape_html(submission.phone.as_deref().unwrap_or("(not provided)")),
        street = escape_html(&submission.street),
        city = escape_html(&submission.city),
        state = escape_html(&submission.state),
        zip = escape_html(&submission.zip),
        notes = escape_html(submission.notes.as_deref().unwrap_or("(none)")),
    );

    OutboundEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject,
        html,
        reply_to: Some(submission.email.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> RequestPayload {
        RequestPayload {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            street: "1 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "OH".to_string(),
            zip: "43140".to_string(),
            notes: "".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_full_payload_and_trims() {
        let submission = validate(&full_payload()).unwrap();
        assert_eq!(submission.first_name, "Ada");
        assert_eq!(submission.phone.as_deref(), Some("555-0100"));
        assert_eq!(submission.notes, None);
    }

    #[test]
    fn test_validate_requires_each_required_field() {
        let strips: [fn(&mut RequestPayload); 7] = [
            |p| p.first_name.clear(),
            |p| p.last_name.clear(),
            |p| p.email.clear(),
            |p| p.street.clear(),
            |p| p.city.clear(),
            |p| p.state.clear(),
            |p| p.zip.clear(),
        ];
        for strip in strips {
            let mut payload = full_payload();
            strip(&mut payload);
            assert_eq!(
                validate(&payload).unwrap_err(),
                "Please fill out all required fields."
            );
        }
    }

    #[test]
    fn test_validate_phone_and_notes_optional() {
        let mut payload = full_payload();
        payload.phone.clear();
        payload.notes.clear();
        let submission = validate(&payload).unwrap();
        assert_eq!(submission.phone, None);
        assert_eq!(submission.notes, None);
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut payload = full_payload();
        payload.email = "not-an-email".to_string();
        assert_eq!(validate(&payload).unwrap_err(), "Please enter a valid email.");
    }

    #[test]
    fn test_is_email_shapes() {
        assert!(is_email("ada@example.com"));
        assert!(is_email("a.b+c@sub.example.co"));
        assert!(!is_email("adaexample.com"));
        assert!(!is_email("ada@example"));
        assert!(!is_email("ada@example.c"));
        assert!(!is_email("ada@@example.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("ada@.com"));
        assert!(!is_email("ada smith@example.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_is_email_final_label_rule() {
        // The 2-char minimum is on the last label specifically; an interior
        // long label does not rescue a single-char ending.
        assert!(is_email("a@b.cd"));
        assert!(!is_email("a@b.cd.e"));
        assert!(is_email("a@b.cd.ef"));
    }

    #[test]
    fn test_notification_email_escapes_and_sets_reply_to() {
        let mut payload = full_payload();
        payload.notes = "<script>alert(1)</script>".to_string();
        let submission = validate(&payload).unwrap();
        let email = notification_email(&submission, "noreply@jobappid.com", "ops@jobappid.com");

        assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
        assert_eq!(email.to, vec!["ops@jobappid.com"]);
        assert_eq!(email.subject, "New JobAppID Request — Ada Lovelace");
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_notification_email_placeholders_for_optional_fields() {
        let mut payload = full_payload();
        payload.phone.clear();
        let submission = validate(&payload).unwrap();
        let email = notification_email(&submission, "noreply@jobappid.com", "ops@jobappid.com");
        assert!(email.html.contains("(not provided)"));
        assert!(email.html.contains("(none)"));
    }
}
