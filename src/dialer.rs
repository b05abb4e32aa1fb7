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

use std::time::Duration;

use mail_send::{SmtpClient, SmtpClientBuilder};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::{
    compose::{self, ComposedMessage},
    email::Email,
};

/// Port on which implicit TLS is used unless configured otherwise.
const SUBMISSIONS_PORT: u16 = 465;

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Tls {
    /// TLS from the first byte.
    Implicit,
    /// Upgrade with STARTTLS, failing when the server does not offer it.
    Required,
    /// Upgrade with STARTTLS when the server offers it, otherwise continue in
    /// clear text.
    Opportunistic,
    /// Clear text only.
    Plain,
}

/// SMTP account used to send messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialer {
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: String,
    pub host: String,
    pub port: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub username: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub password: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tls: Option<Tls>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub timeout: Option<Duration>,
}

impl Dialer {
    /// Create a new dialer. The display name may be empty.
    pub fn new(display_name: impl Into<String>) -> Self {
        Dialer {
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    /// Sets the SMTP host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the SMTP port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the account name, which is also the sender address.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the account password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Authentication credentials.
    pub fn credentials(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username(username).password(password)
    }

    /// Sets how the connection is secured. Defaults to [`Tls::Implicit`] on
    /// port 465 and [`Tls::Opportunistic`] on any other port.
    pub fn tls(mut self, tls: Tls) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Sets the SMTP connection timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Connection security in effect for this account.
    pub fn tls_mode(&self) -> Tls {
        self.tls.unwrap_or(if self.port == SUBMISSIONS_PORT {
            Tls::Implicit
        } else {
            Tls::Opportunistic
        })
    }

    /// Value of the `From` header of messages sent by this account.
    pub fn sender(&self) -> String {
        compose::sender(&self.display_name, &self.username)
    }

    /// Composes a message as sent by this account.
    pub fn compose<'a>(
        &self,
        email: impl Into<Option<&'a Email>>,
    ) -> crate::Result<ComposedMessage> {
        compose::compose(&self.display_name, &self.username, email)
    }

    /// Composes a message and delivers it to the SMTP server.
    pub async fn send<'a>(&self, email: impl Into<Option<&'a Email>>) -> crate::Result<()> {
        let message = self.compose(email)?;
        let tls = self.tls_mode();

        let mut builder = SmtpClientBuilder::new(self.host.clone(), self.port)
            .implicit_tls(tls == Tls::Implicit);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if !self.username.is_empty() {
            builder = builder.credentials((self.username.clone(), self.password.clone()));
        }

        log::debug!("Connecting to {}:{} ({:?}).", self.host, self.port, tls);
        match tls {
            Tls::Implicit | Tls::Required => {
                self.deliver(builder.connect().await?, &message).await
            }
            Tls::Opportunistic => match builder.connect().await {
                Ok(client) => self.deliver(client, &message).await,
                Err(mail_send::Error::MissingStartTls) => {
                    log::debug!(
                        "{} does not offer STARTTLS, continuing in clear text.",
                        self.host
                    );
                    self.deliver(builder.connect_plain().await?, &message).await
                }
                Err(err) => Err(err.into()),
            },
            Tls::Plain => self.deliver(builder.connect_plain().await?, &message).await,
        }
    }

    async fn deliver<T: AsyncRead + AsyncWrite + Unpin>(
        &self,
        mut client: SmtpClient<T>,
        message: &ComposedMessage,
    ) -> crate::Result<()> {
        client.send(message).await?;
        log::debug!(
            "Delivered message {:?} from {} via {}:{}.",
            message.subject,
            message.from_address,
            self.host,
            self.port
        );

        // The message is already accepted at this point.
        if let Err(err) = client.quit().await {
            log::warn!("Failed to close SMTP session with {}: {}", self.host, err);
        }

        Ok(())
    }
}
