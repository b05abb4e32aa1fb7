/*
 * Copyright Stalwart Labs Ltd. See the COPYING
 * file at the top-level directory of this distribution.
 *
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 */

use std::{collections::HashMap, fmt::Display, str::FromStr};

/// Message body type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Text,
    Html,
}

/// An e-mail message description. Placeholders written as `{{key}}` in the
/// subject, body and attachment file names are replaced with `values` when the
/// message is composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Email {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub to: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cc: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bcc: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subject: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attachments: Vec<Attachment>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub values: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    pub filename: String,
    pub data: Vec<u8>,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Html => "html",
        }
    }

    /// Content type of the message body.
    pub fn content_type(&self) -> &'static str {
        match self {
            MessageKind::Text => "text/plain",
            MessageKind::Html => "text/html",
        }
    }
}

impl FromStr for MessageKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(MessageKind::Text),
            "html" => Ok(MessageKind::Html),
            _ => Err(crate::Error::InvalidMessageKind(s.to_string())),
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MessageKind> for String {
    fn from(kind: MessageKind) -> Self {
        kind.as_str().to_string()
    }
}

impl Email {
    /// Create a new message of the given kind, `"text"` or `"html"`.
    pub fn new(kind: impl Into<String>) -> Self {
        Email {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Create a new plain text message.
    pub fn text() -> Self {
        Self::new(MessageKind::Text)
    }

    /// Create a new HTML message.
    pub fn html() -> Self {
        Self::new(MessageKind::Html)
    }

    /// Set the message subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the message body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the message recipients.
    pub fn to<T, U>(mut self, to: U) -> Self
    where
        T: Into<String>,
        U: IntoIterator<Item = T>,
    {
        self.to = to.into_iter().map(Into::into).collect();
        self
    }

    /// Set the carbon copy recipients.
    pub fn cc<T, U>(mut self, cc: U) -> Self
    where
        T: Into<String>,
        U: IntoIterator<Item = T>,
    {
        self.cc = cc.into_iter().map(Into::into).collect();
        self
    }

    /// Set the blind carbon copy recipients.
    pub fn bcc<T, U>(mut self, bcc: U) -> Self
    where
        T: Into<String>,
        U: IntoIterator<Item = T>,
    {
        self.bcc = bcc.into_iter().map(Into::into).collect();
        self
    }

    /// Replace all attachments.
    pub fn attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Add an attachment.
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Replace all placeholder values.
    pub fn values<K, V, U>(mut self, values: U) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        U: IntoIterator<Item = (K, V)>,
    {
        self.values = values
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    /// Set the value of a placeholder, overwriting any previous value.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Parsed message kind.
    pub fn message_kind(&self) -> crate::Result<MessageKind> {
        self.kind.parse()
    }
}

impl Attachment {
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Attachment {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Attachment, Email, MessageKind};

    #[test]
    fn build_email() {
        let email = Email::html()
            .subject("Invoice {{number}}")
            .body("<p>Dear {{name}}</p>")
            .to(["a@example.com", "b@example.com", "a@example.com"])
            .cc(vec!["c@example.com".to_string()])
            .bcc(["d@example.com"])
            .attachment(Attachment::new("invoice-{{number}}.pdf", b"%PDF".to_vec()))
            .attachment(Attachment::new("logo.png", [1u8, 2, 3]))
            .value("number", "42")
            .value("name", "Ada")
            .value("number", "43");

        assert_eq!(email.kind, "html");
        assert_eq!(email.message_kind().unwrap(), MessageKind::Html);
        assert_eq!(
            email.to,
            ["a@example.com", "b@example.com", "a@example.com"]
        );
        assert_eq!(email.cc, ["c@example.com"]);
        assert_eq!(email.bcc, ["d@example.com"]);
        assert_eq!(email.attachments.len(), 2);
        assert_eq!(email.attachments[0].filename, "invoice-{{number}}.pdf");
        assert_eq!(email.attachments[1].data, [1, 2, 3]);
        assert_eq!(email.values.len(), 2);
        assert_eq!(email.values["number"], "43");

        // Setters replace previous lists.
        let email = email
            .to(["z@example.com"])
            .attachments([Attachment::new("a.txt", "a")])
            .values([("only", "one")]);
        assert_eq!(email.to, ["z@example.com"]);
        assert_eq!(email.attachments.len(), 1);
        assert_eq!(email.values.len(), 1);
    }

    #[test]
    fn message_kind() {
        assert_eq!("text".parse::<MessageKind>().unwrap(), MessageKind::Text);
        assert_eq!("html".parse::<MessageKind>().unwrap(), MessageKind::Html);
        assert_eq!(MessageKind::Text.content_type(), "text/plain");
        assert_eq!(MessageKind::Html.content_type(), "text/html");
        assert_eq!(MessageKind::Html.to_string(), "html");
        assert_eq!(Email::text().kind, "text");

        for kind in ["", "HTML", "markdown", " text"] {
            assert!(matches!(
                kind.parse::<MessageKind>(),
                Err(crate::Error::InvalidMessageKind(k)) if k == kind
            ));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_email() {
        let email: Email = serde_json::from_str(
            r#"{
                "type": "text",
                "to": ["a@example.com"],
                "subject": "Hi {{name}}",
                "body": "Hello",
                "attachments": [{"filename": "a.txt", "data": [104, 105]}],
                "values": {"name": "Ada"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            email,
            Email::text()
                .to(["a@example.com"])
                .subject("Hi {{name}}")
                .body("Hello")
                .attachment(Attachment::new("a.txt", "hi"))
                .value("name", "Ada")
        );
    }
}
