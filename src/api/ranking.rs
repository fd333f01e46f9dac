use super::{session_code_hash, sign_request, ApiResponse};
use crate::libs::config::ServerConfig;
use anyhow::Result;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const REPORT_URL: &str = "plugin/report";
const LEADERBOARD_URL: &str = "plugin/leaderboard";
const USER_INFO_URL: &str = "plugin/user-info";
const INVALIDATE_SESSION_URL: &str = "plugin/invalidate-session";
const BIND_PATH: &str = "ranking/bind";

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    pub total_duration: u64,
    pub rank: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardData {
    pub app_id: i64,
    pub app_name: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    pub total_duration: u64,
    pub rank: u32,
}

/// HTTP client for the ranking service.
pub struct RankingClient {
    client: Client,
    config: ServerConfig,
}

impl RankingClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Reports a delta of active seconds against the bound account.
    pub async fn report_duration(&self, session_code: &str, duration_seconds: u64) -> Result<ApiResponse<bool>> {
        let timestamp = Utc::now().timestamp_millis();
        let signature = sign_request(&self.config.app_id, session_code, timestamp, &self.config.app_secret);

        let body = json!({
            "app_id": self.config.app_id.parse::<i64>()?,
            "session_code": session_code,
            "duration": duration_seconds,
            "timestamp": timestamp,
            "signature": signature,
        });

        let url = format!("{}/{}", self.config.api_url, REPORT_URL);
        let res = self.client.post(url).json(&body).send().await?;
        Ok(res.json::<ApiResponse<bool>>().await?)
    }

    pub async fn leaderboard(&self, limit: u32, offset: u32) -> Result<ApiResponse<LeaderboardData>> {
        let url = format!(
            "{}/{}/{}?limit={}&offset={}",
            self.config.api_url, LEADERBOARD_URL, self.config.app_id, limit, offset
        );
        let res = self.client.get(url).send().await?;
        Ok(res.json::<ApiResponse<LeaderboardData>>().await?)
    }

    /// Fetches the bound user's profile. Only the session code hash goes
    /// over the wire.
    pub async fn user_info(&self, session_code: &str) -> Result<ApiResponse<UserInfo>> {
        let url = format!(
            "{}/{}?app_id={}&session_code_hash={}",
            self.config.api_url,
            USER_INFO_URL,
            self.config.app_id,
            session_code_hash(session_code)
        );
        let res = self.client.get(url).send().await?;
        Ok(res.json::<ApiResponse<UserInfo>>().await?)
    }

    /// Revokes the binding between this installation and the remote account.
    pub async fn invalidate_session(&self, session_code: &str) -> Result<ApiResponse<bool>> {
        let timestamp = Utc::now().timestamp_millis();
        let signature = sign_request(&self.config.app_id, session_code, timestamp, &self.config.app_secret);

        let body = json!({
            "app_id": self.config.app_id.parse::<i64>()?,
            "session_code": session_code,
            "timestamp": timestamp,
            "signature": signature,
        });

        let url = format!("{}/{}", self.config.api_url, INVALIDATE_SESSION_URL);
        let res = self.client.post(url).json(&body).send().await?;
        Ok(res.json::<ApiResponse<bool>>().await?)
    }

    /// Builds the signed URL opened in the browser to bind an account.
    pub fn bind_url(&self, session_code: &str) -> String {
        let timestamp = Utc::now().timestamp_millis();
        let hash = session_code_hash(session_code);
        let signature = sign_request(&self.config.app_id, &hash, timestamp, &self.config.app_secret);

        format!(
            "{}/{}?app_id={}&session_code_hash={}&timestamp={}&signature={}",
            self.config.web_url, BIND_PATH, self.config.app_id, hash, timestamp, signature
        )
    }
}
