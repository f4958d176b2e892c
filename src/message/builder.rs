use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::Message;

use super::models::DemoRequest;
use super::template::{render_html, render_text};
use super::SUBJECT;
use crate::error::NotifyError;

/// Builds the `multipart/alternative` notification. The plain part goes
/// first; clients render the last part they understand.
pub fn compose
(
    request: &DemoRequest,
    submitted_at: &str,
    from: Mailbox,
    to: Mailbox,
) -> Result<Message, NotifyError>
{
    let body = MultiPart::alternative()
        .singlepart
        (
            SinglePart::builder()
                .header(ContentType::TEXT_PLAIN)
                .body(render_text(request, submitted_at)),
        )
        .singlepart
        (
            SinglePart::builder()
                .header(ContentType::TEXT_HTML)
                .body(render_html(request, submitted_at)),
        );

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(SUBJECT)
        .multipart(body)?;
    Ok(message)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::message::PRODUCT_NAME;
    use mailparse::{parse_mail, MailHeaderMap};

    fn composed() -> Vec<u8>
    {
        let request = DemoRequest::new("Grace Hopper", "grace@example.org", "Care team dashboards");
        compose
        (
            &request,
            "January 05, 2024 at 03:04 PM IST",
            "noreply@example.com".parse().unwrap(),
            "sales@example.com".parse().unwrap(),
        )
        .unwrap()
        .formatted()
    }

    #[test]
    fn subject_names_event_and_product()
    {
        let raw = composed();
        let mail = parse_mail(&raw).unwrap();
        let subject = mail.headers.get_first_value("Subject").unwrap();
        assert!(subject.contains("New Demo Request"));
        assert!(subject.contains(PRODUCT_NAME));
        assert_eq!(mail.headers.get_first_value("From").as_deref(), Some("noreply@example.com"));
        assert_eq!(mail.headers.get_first_value("To").as_deref(), Some("sales@example.com"));
    }

    #[test]
    fn plain_part_precedes_html_part()
    {
        let raw = composed();
        let mail = parse_mail(&raw).unwrap();
        assert_eq!(mail.ctype.mimetype, "multipart/alternative");

        let types: Vec<&str> = mail.subparts.iter().map(|p| p.ctype.mimetype.as_str()).collect();
        assert_eq!(types, ["text/plain", "text/html"]);

        let text = mail.subparts[0].get_body().unwrap();
        let html = mail.subparts[1].get_body().unwrap();
        assert!(text.lines().any(|l| l == "Name: Grace Hopper"));
        assert!(html.contains(r#"<div class="value">Grace Hopper</div>"#));
        assert!(text.contains("Submitted At: January 05, 2024 at 03:04 PM IST"));
        assert!(html.contains("January 05, 2024 at 03:04 PM IST"));
    }

    #[test]
    fn submitter_email_is_not_a_header()
    {
        let raw = composed();
        let mail = parse_mail(&raw).unwrap();
        for header in &mail.headers
        {
            assert!(!header.get_value().contains("grace@example.org"), "{}", header.get_key());
        }
    }
}
