use crate::api::RankingClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LeaderboardArgs {
    /// Maximum number of entries to fetch
    #[arg(long, default_value_t = 100)]
    limit: u32,
    /// Offset into the ranking
    #[arg(long, default_value_t = 0)]
    offset: u32,
}

pub async fn cmd(args: LeaderboardArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(server) = config.server.filter(|server| server.is_configured()) else {
        msg_bail_anyhow!(Message::ServerNotConfigured);
    };

    let client = RankingClient::new(&server);
    let response = client
        .leaderboard(args.limit, args.offset)
        .await
        .map_err(|err| crate::msg_error_anyhow!(Message::LeaderboardFetchFailed(err.to_string())))?;

    if !response.success {
        msg_bail_anyhow!(Message::LeaderboardFetchFailed(response.message));
    }
    let Some(data) = response.data else {
        msg_bail_anyhow!(Message::LeaderboardFetchFailed("empty response".to_string()));
    };

    msg_print!(Message::LeaderboardHeader(data.app_name.clone()), true);
    if data.leaderboard.is_empty() {
        msg_print!(Message::LeaderboardEmpty);
    } else {
        View::leaderboard(&data);
    }
    Ok(())
}
