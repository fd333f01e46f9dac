//! Display implementation for stint application messages.
//!
//! Central place where structured [`Message`] values become the text shown
//! in the terminal. Keeping every user-facing string here keeps formatting
//! consistent and leaves the door open for localization later.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Leaderboard server settings".to_string(),
            Message::ConfigModuleTracker => "Tracker settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerApiUrl => "Enter the ranking API base URL".to_string(),
            Message::PromptServerWebUrl => "Enter the web origin for account binding".to_string(),
            Message::PromptServerAppId => "Enter your application ID".to_string(),
            Message::PromptServerAppSecret => "Enter your application secret".to_string(),
            Message::PromptOnlineReportInterval => "Online report interval in seconds (min 60)".to_string(),
            Message::PromptOfflineSaveInterval => "Offline save interval in seconds (min 1)".to_string(),
            Message::ServerNotConfigured => "Server is not configured. Run 'stint init' first".to_string(),

            // === TRACKER MESSAGES ===
            Message::TrackerStarted => "Tracker started. Press Ctrl+C to stop".to_string(),
            Message::TrackerStopped => "Tracker stopped".to_string(),
            Message::TrackerStatusLine(status) => format!("Status: {}", status),
            Message::TrackerTotalTime(time) => format!("Active time: {}", time),

            // === ACCOUNT MESSAGES ===
            Message::AccountAlreadyBound => "An account is already bound on this installation".to_string(),
            Message::AccountNotBound => "No account is bound. Run 'stint bind' first".to_string(),
            Message::AccountBindUrl(url) => format!("Open this URL in your browser to bind your account:\n{}", url),
            Message::AccountUnbound => "Account unbound. Durations are now recorded locally".to_string(),
            Message::AccountOfflineMode => "Running in offline mode".to_string(),
            Message::SessionInvalidateFailed(reason) => format!("Could not invalidate the remote session: {}", reason),

            // === REPORT MESSAGES ===
            Message::OfflineTotalSeconds(total) => format!("Offline total: {} s", total),

            // === LEADERBOARD MESSAGES ===
            Message::LeaderboardHeader(app_name) => format!("🏆 {} leaderboard", app_name),
            Message::LeaderboardEmpty => "The leaderboard is empty".to_string(),
            Message::LeaderboardFetchFailed(reason) => format!("Failed to fetch the leaderboard: {}", reason),
            Message::UserInfoFetchFailed(reason) => format!("Failed to fetch user info: {}", reason),

            // === GENERIC ERRORS ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidInput => "Invalid input provided".to_string(),
        };
        write!(f, "{}", text)
    }
}
