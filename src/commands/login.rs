//! Explicit login command.
//!
//! Unlike the data commands, `login` never reuses an existing session: it
//! always performs a fresh authentication round-trip, prints the full
//! envelope, and reports the stored token pair.

use crate::api::Tracsis;
use crate::libs::{config::Config, messages::Message};
use crate::{msg_bail_anyhow, msg_error, msg_print, msg_success};
use anyhow::Result;

/// Characters of the access token echoed back after a successful login.
const TOKEN_PREVIEW_LEN: usize = 20;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    if !config.has_credentials() {
        msg_bail_anyhow!(Message::CredentialsInvalid);
    }

    let mut api = Tracsis::new();
    msg_print!(Message::LoginAttempt(config.credentials.user.clone()));

    let response = api.login(&config.credentials.user, &config.credentials.password).await;
    println!("{}", response.pretty());

    if response.error || !api.is_authenticated() {
        msg_error!(Message::LoginFailed, true);
        msg_bail_anyhow!(Message::LoginFailed);
    }

    msg_success!(Message::LoginSuccessful, true);
    msg_success!(Message::TokensStored);
    if let Some(token) = api.session().access_token() {
        let preview: String = token.chars().take(TOKEN_PREVIEW_LEN).collect();
        msg_success!(Message::AccessTokenPreview(preview));
    }
    if let Some(token) = api.session().refresh_token() {
        msg_success!(Message::RefreshTokenStored(token.to_string()));
    }

    Ok(())
}
