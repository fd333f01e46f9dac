use crate::api::RankingClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success, msg_warning};
use anyhow::Result;

/// Invalidates the remote session (best effort) and switches the account to
/// offline tracking.
pub async fn cmd() -> Result<()> {
    let mut config = Config::read()?;
    let Some(session_code) = config.account.session_code.clone() else {
        msg_bail_anyhow!(Message::AccountNotBound);
    };

    if let Some(server) = config.server.clone().filter(|server| server.is_configured()) {
        let client = RankingClient::new(&server);
        match client.invalidate_session(&session_code).await {
            Ok(response) if response.success => {}
            Ok(response) => msg_warning!(Message::SessionInvalidateFailed(response.message)),
            Err(err) => msg_warning!(Message::SessionInvalidateFailed(err.to_string())),
        }
    }

    config.account.session_code = None;
    config.account.offline = true;
    config.save()?;
    msg_success!(Message::AccountUnbound);
    Ok(())
}
