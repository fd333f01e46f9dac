use crate::api::{generate_session_code, RankingClient};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;

/// Generates (or reuses) the installation's session code and prints the
/// signed URL that completes the binding in the browser.
pub async fn cmd() -> Result<()> {
    let mut config = Config::read()?;
    let Some(server) = config.server.clone().filter(|server| server.is_configured()) else {
        msg_bail_anyhow!(Message::ServerNotConfigured);
    };

    let session_code = match &config.account.session_code {
        Some(code) => {
            msg_print!(Message::AccountAlreadyBound);
            code.clone()
        }
        None => {
            let code = generate_session_code();
            config.account.session_code = Some(code.clone());
            config.save()?;
            code
        }
    };

    let client = RankingClient::new(&server);
    msg_print!(Message::AccountBindUrl(client.bind_url(&session_code)), true);
    Ok(())
}
