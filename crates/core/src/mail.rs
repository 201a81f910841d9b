//! Subject and body extraction from raw email objects.
//!
//! The stored object is a full RFC 5322 message (headers + body or MIME
//! parts). Only two pieces survive into the outbound alert: the `Subject`
//! header and a plain-text body. The body selection rule is deliberate:
//!
//! - multipart message → the first `text/plain` part in document order;
//!   if none exists (e.g. HTML-only), the body is the empty string.
//! - non-multipart message → the entire payload, decoded to text.

use mail_parser::{MessageParser, PartType};

/// Error type for message parsing failures.
///
/// Absent headers are not errors — a missing `Subject` simply yields
/// [`ParsedMail::subject`] of `None`.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The raw bytes could not be structured as a mail message at all.
    #[error("Malformed mail message")]
    Malformed,
}

/// The subject and plain-text body extracted from one stored email object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMail {
    /// Verbatim `Subject` header value, `None` when the header is absent.
    pub subject: Option<String>,
    /// Body text selected by the content-type preference rule.
    pub body: String,
}

/// Parse a raw message and extract its subject and plain-text body.
pub fn extract(raw: &str) -> Result<ParsedMail, MailError> {
    let message = MessageParser::default()
        .parse(raw.as_bytes())
        .ok_or(MailError::Malformed)?;

    let subject = message.subject().map(str::to_string);

    let root = message.parts.first().ok_or(MailError::Malformed)?;
    let body = match &root.body {
        // Multipart: walk parts in document order, first text/plain wins.
        // No plain-text part leaves the body empty by construction.
        PartType::Multipart(_) => message
            .parts
            .iter()
            .find_map(|part| match &part.body {
                PartType::Text(text) => Some(text.to_string()),
                _ => None,
            })
            .unwrap_or_default(),

        // Single part: the whole payload, decoded to text.
        PartType::Text(text) => text.to_string(),
        PartType::Html(html) => html.to_string(),
        PartType::Binary(bytes) | PartType::InlineBinary(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
        _ => String::new(),
    };

    Ok(ParsedMail { subject, body })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_PART: &str = "From: reports@example.com\r\n\
        To: alerts@example.com\r\n\
        Subject: S\r\n\
        Content-Type: text/plain; charset=utf-8\r\n\
        \r\n\
        B";

    const MULTIPART_TEXT_THEN_HTML: &str = "From: reports@example.com\r\n\
        Subject: Weekly digest\r\n\
        MIME-Version: 1.0\r\n\
        Content-Type: multipart/alternative; boundary=\"sep\"\r\n\
        \r\n\
        --sep\r\n\
        Content-Type: text/plain; charset=utf-8\r\n\
        \r\n\
        B1\r\n\
        --sep\r\n\
        Content-Type: text/html; charset=utf-8\r\n\
        \r\n\
        <p>B2</p>\r\n\
        --sep--\r\n";

    const MULTIPART_HTML_ONLY: &str = "From: reports@example.com\r\n\
        Subject: Rendered only\r\n\
        MIME-Version: 1.0\r\n\
        Content-Type: multipart/alternative; boundary=\"sep\"\r\n\
        \r\n\
        --sep\r\n\
        Content-Type: text/html; charset=utf-8\r\n\
        \r\n\
        <p>no plain part</p>\r\n\
        --sep--\r\n";

    const NO_SUBJECT: &str = "From: reports@example.com\r\n\
        Content-Type: text/plain; charset=utf-8\r\n\
        \r\n\
        body without subject";

    #[test]
    fn single_part_plain_text() {
        let mail = extract(SINGLE_PART).unwrap();
        assert_eq!(mail.subject.as_deref(), Some("S"));
        assert_eq!(mail.body, "B");
    }

    #[test]
    fn multipart_first_plain_part_wins() {
        let mail = extract(MULTIPART_TEXT_THEN_HTML).unwrap();
        assert_eq!(mail.subject.as_deref(), Some("Weekly digest"));
        assert_eq!(mail.body.trim_end(), "B1");
    }

    #[test]
    fn multipart_without_plain_part_yields_empty_body() {
        let mail = extract(MULTIPART_HTML_ONLY).unwrap();
        assert_eq!(mail.body, "");
    }

    #[test]
    fn absent_subject_is_none_not_an_error() {
        let mail = extract(NO_SUBJECT).unwrap();
        assert_eq!(mail.subject, None);
        assert_eq!(mail.body.trim_end(), "body without subject");
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(extract("").is_err());
    }
}
