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

//! # mail-compose
//!
//! _mail-compose_ is a Rust library to compose templated e-mail messages and send them via SMTP.
//! It includes the following features:
//!
//! - `{{key}}` placeholders in the subject, body and attachment file names, replaced in a single
//!   pass (values are never expanded recursively).
//! - Plain text and HTML messages with any number of `To`, `Cc` and `Bcc` recipients.
//! - Attachment content types resolved from the file extension, falling back to
//!   `application/octet-stream`.
//! - Delivery through [`mail-send`](https://crates.io/crates/mail-send), with implicit TLS,
//!   required or opportunistic STARTTLS, or clear text, and automatic authentication
//!   mechanism negotiation.
//!
//! ## Usage Example
//!
//! Send a templated message with an attachment:
//!
//! ```rust
//!     let email = Email::html()
//!         .subject("Invoice {{number}}")
//!         .body("<p>Dear {{name}}, please find your invoice attached.</p>")
//!         .to(["jane@example.com"])
//!         .cc(["accounts@example.com"])
//!         .attachment(Attachment::new("invoice-{{number}}.pdf", pdf_bytes))
//!         .value("name", "Jane")
//!         .value("number", "2022-118");
//!
//!     Dialer::new("Billing")
//!         .host("smtp.example.com")
//!         .port(587)
//!         .credentials("billing@example.com", "p4ssw0rd")
//!         .send(&email)
//!         .await
//!         .unwrap();
//! ```
//!
//! Compose a message without sending it:
//!
//! ```rust
//!     let message = compose("Billing", "billing@example.com", &email).unwrap();
//!     assert_eq!(message.subject, "Invoice 2022-118");
//!     assert_eq!(message.attachments[0].content_type, "application/pdf");
//! ```
//!
//! ## License
//!
//! Licensed under either of
//!
//!  * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//!  * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!

pub mod compose;
pub mod dialer;
pub mod email;
pub mod mime;

use std::fmt::Display;

pub use compose::{compose, ComposedMessage, ResolvedAttachment};
pub use dialer::{Dialer, Tls};
pub use email::{Attachment, Email, MessageKind};
pub use mail_builder;
pub use mail_send;

#[derive(Debug)]
pub enum Error {
    /// No message was provided.
    NilInput,

    /// Message type is neither "text" nor "html".
    InvalidMessageKind(String),

    /// Failure writing the MIME message.
    Build(std::io::Error),

    /// SMTP delivery error.
    Transport(mail_send::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NilInput => write!(f, "No message provided"),
            Error::InvalidMessageKind(kind) => write!(f, "Invalid message type {:?}", kind),
            Error::Build(e) => write!(f, "Failed to build message: {}", e),
            Error::Transport(e) => write!(f, "SMTP error: {}", e),
        }
    }
}

impl From<mail_send::Error> for Error {
    fn from(err: mail_send::Error) -> Self {
        Error::Transport(err)
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn error_messages() {
        assert_eq!(Error::NilInput.to_string(), "No message provided");
        assert_eq!(
            Error::InvalidMessageKind("rtf".to_string()).to_string(),
            "Invalid message type \"rtf\""
        );
        assert_eq!(
            Error::from(mail_send::Error::MissingRcptTo).to_string(),
            format!("SMTP error: {}", mail_send::Error::MissingRcptTo)
        );
    }
}
