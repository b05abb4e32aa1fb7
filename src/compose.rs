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

use std::collections::HashMap;

use mail_builder::{headers::address::Address, MessageBuilder};
use mail_send::smtp::message::{IntoMessage, Message};

use crate::{
    email::{Email, MessageKind},
    mime::{Catalog, Convertor, DEFAULT_CONTENT_TYPE},
};

/// A message with all placeholders substituted and all attachment types
/// resolved, ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    /// Value of the `From` header.
    pub from: String,
    pub from_name: Option<String>,
    pub from_address: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub body: String,
    pub kind: MessageKind,
    pub attachments: Vec<ResolvedAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttachment {
    pub filename: String,
    pub data: Vec<u8>,
    pub content_type: &'static str,
}

/// Formats the `From` header for an account, adding the display name when
/// there is one.
pub fn sender(display_name: &str, address: &str) -> String {
    if display_name.is_empty() {
        address.to_string()
    } else {
        format!("{} <{}>", display_name, address)
    }
}

/// Replaces every `{{key}}` token in `template` with its value.
///
/// The template is scanned once, so replacement values are never searched for
/// further tokens. Tokens without a value are kept as they are. When openings
/// nest, as in `{{{{key}}`, the innermost one starts the token.
pub fn substitute(template: &str, values: &HashMap<String, String>) -> String {
    if values.is_empty() {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let token = &rest[start..];
        let end = match token[2..].find("}}") {
            Some(end) => end + 2,
            None => {
                // Nothing past this point can close a token.
                rest = token;
                break;
            }
        };

        if let Some(value) = values.get(&token[2..end]) {
            result.push_str(value);
            rest = &token[end + 2..];
        } else {
            // Retry from the innermost opening that shares these closing braces.
            match token[..end].rfind("{{") {
                Some(inner) if inner > 0 => {
                    result.push_str(&token[..inner]);
                    rest = &token[inner..];
                }
                _ => {
                    result.push_str(&token[..end]);
                    rest = &token[end..];
                }
            }
        }
    }
    result.push_str(rest);

    result
}

/// Composes `email` as sent by `address`, resolving attachment types with the
/// built-in catalog.
pub fn compose<'a>(
    display_name: &str,
    address: &str,
    email: impl Into<Option<&'a Email>>,
) -> crate::Result<ComposedMessage> {
    compose_with(&Catalog, display_name, address, email)
}

/// Composes `email` as sent by `address`, resolving attachment types with
/// `convertor`.
pub fn compose_with<'a>(
    convertor: &impl Convertor,
    display_name: &str,
    address: &str,
    email: impl Into<Option<&'a Email>>,
) -> crate::Result<ComposedMessage> {
    let email = email.into().ok_or(crate::Error::NilInput)?;
    let kind = email.message_kind()?;

    let attachments = email
        .attachments
        .iter()
        .map(|attachment| {
            let filename = substitute(&attachment.filename, &email.values);
            let content_type = convertor.filename_to_mime(&filename).unwrap_or_else(|| {
                log::trace!(
                    "No MIME type known for {:?}, using {}.",
                    filename,
                    DEFAULT_CONTENT_TYPE
                );
                DEFAULT_CONTENT_TYPE
            });
            ResolvedAttachment {
                filename,
                data: attachment.data.clone(),
                content_type,
            }
        })
        .collect::<Vec<_>>();

    log::debug!(
        "Composed {} message for {} recipient(s) with {} attachment(s).",
        kind,
        email.to.len() + email.cc.len() + email.bcc.len(),
        attachments.len()
    );

    Ok(ComposedMessage {
        from: sender(display_name, address),
        from_name: (!display_name.is_empty()).then(|| display_name.to_string()),
        from_address: address.to_string(),
        to: email.to.clone(),
        cc: email.cc.clone(),
        bcc: email.bcc.clone(),
        subject: substitute(&email.subject, &email.values),
        body: substitute(&email.body, &email.values),
        kind,
        attachments,
    })
}

impl ComposedMessage {
    /// Content type of the message body.
    pub fn body_content_type(&self) -> &'static str {
        self.kind.content_type()
    }

    /// Builds the MIME message. Blind carbon copy recipients are left out of
    /// the headers and only reach the SMTP envelope.
    pub fn to_builder(&self) -> MessageBuilder<'_> {
        let from: Address<'_> = match &self.from_name {
            Some(name) => (name.as_str(), self.from_address.as_str()).into(),
            None => self.from_address.as_str().into(),
        };
        let mut builder = MessageBuilder::new()
            .from(from)
            .subject(self.subject.as_str());

        if !self.to.is_empty() {
            builder = builder.to(address_list(&self.to));
        }
        if !self.cc.is_empty() {
            builder = builder.cc(address_list(&self.cc));
        }

        builder = match self.kind {
            MessageKind::Text => builder.text_body(self.body.as_str()),
            MessageKind::Html => builder.html_body(self.body.as_str()),
        };

        for attachment in &self.attachments {
            builder = builder.attachment(
                attachment.content_type,
                attachment.filename.as_str(),
                attachment.data.as_slice(),
            );
        }

        builder
    }

    /// Writes the MIME message.
    pub fn write_to_vec(&self) -> crate::Result<Vec<u8>> {
        self.to_builder().write_to_vec().map_err(crate::Error::Build)
    }
}

fn address_list(addresses: &[String]) -> Vec<Address<'_>> {
    addresses
        .iter()
        .map(|address| Address::from(address.as_str()))
        .collect()
}

impl<'x, 'y> IntoMessage<'x> for &'y ComposedMessage {
    fn into_message(self) -> mail_send::Result<Message<'x>> {
        let mut rcpt_to = Vec::with_capacity(self.to.len() + self.cc.len() + self.bcc.len());
        for address in self.to.iter().chain(&self.cc).chain(&self.bcc) {
            let address = address.trim();
            if !address.is_empty() && !rcpt_to.contains(&address) {
                rcpt_to.push(address);
            }
        }
        if rcpt_to.is_empty() {
            return Err(mail_send::Error::MissingRcptTo);
        }

        let mut message = Message::empty()
            .from(self.from_address.trim().to_string())
            .body(self.to_builder().write_to_vec()?);
        for address in rcpt_to {
            message = message.to(address.to_string());
        }
        Ok(message)
    }
}
