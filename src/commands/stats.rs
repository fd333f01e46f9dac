use crate::api::RankingClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;

/// Shows the bound account's remote stats, or the locally persisted totals
/// when running offline or unbound.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;

    match (&config.server, &config.account.session_code) {
        (Some(server), Some(session_code)) if server.is_configured() && !config.account.offline => {
            let client = RankingClient::new(server);
            let response = client
                .user_info(session_code)
                .await
                .map_err(|err| crate::msg_error_anyhow!(Message::UserInfoFetchFailed(err.to_string())))?;

            if !response.success {
                msg_bail_anyhow!(Message::UserInfoFetchFailed(response.message));
            }
            let Some(user) = response.data else {
                msg_bail_anyhow!(Message::UserInfoFetchFailed("empty response".to_string()));
            };
            View::user_info(&user);
        }
        _ => {
            msg_print!(Message::TrackerStatusLine(config.account.display_name()));
            msg_print!(Message::OfflineTotalSeconds(config.account.offline_total_seconds));
        }
    }
    Ok(())
}
