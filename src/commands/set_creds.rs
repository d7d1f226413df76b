//! Credential capture command: the only writer of the credential store.
//!
//! Prompts for email and a masked password, performs an immediate login to
//! prove them and to obtain the profile data, then overwrites the store
//! with credentials, profile, and the token snapshot.

use crate::api::{ApiResponse, Tracsis, Transport};
use crate::libs::{
    config::{Config, Credentials, ProfileData, Secret},
    messages::Message,
    prompt::{Prompter, Terminal},
};
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;
use serde_json::Value;

pub async fn cmd() -> Result<()> {
    let mut api = Tracsis::new();
    run(&mut api, &mut Terminal).await
}

pub async fn run<T: Transport, P: Prompter>(api: &mut Tracsis<T>, prompter: &mut P) -> Result<()> {
    let email = prompter.input(&Message::PromptEmail.to_string())?.trim().to_string();
    let password = prompter.password(&Message::PromptPassword.to_string())?.trim().to_string();

    let response = api.login(&email, &password).await;
    println!("{}", response.pretty());
    if response.error {
        msg_error!(Message::LoginFailed, true);
        msg_bail_anyhow!(Message::LoginFailed);
    }

    let config = config_from_login(&email, &password, &response)
        .ok_or_else(|| msg_error_anyhow!(Message::CredentialsSaveFailed("incomplete profile data in login response".to_string())))?;
    config
        .save()
        .map_err(|e| msg_error_anyhow!(Message::CredentialsSaveFailed(e.to_string())))?;

    msg_success!(Message::CredentialsSaved, true);
    Ok(())
}

/// Builds the full credential record out of a successful login envelope.
/// Returns `None` when the envelope is missing any profile or token field.
pub fn config_from_login(email: &str, password: &str, response: &ApiResponse) -> Option<Config> {
    let data = response.data.as_ref()?;

    Some(Config {
        credentials: Credentials {
            user: email.to_string(),
            password: password.to_string(),
        },
        profile_data: Some(ProfileData {
            user_id: data.get("user_id").and_then(Value::as_i64)?,
            user_code: data.get("user_code").and_then(Value::as_str)?.to_string(),
            user_name: data.get("user_name").and_then(Value::as_str)?.to_string(),
        }),
        secret: Some(Secret {
            access_token: data.get("access_token").and_then(Value::as_str)?.to_string(),
            refresh_token: data.get("refresh_token").and_then(Value::as_str)?.to_string(),
        }),
    })
}
