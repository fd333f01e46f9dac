#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleTracker,
    PromptSelectModules,
    PromptServerApiUrl,
    PromptServerWebUrl,
    PromptServerAppId,
    PromptServerAppSecret,
    PromptOnlineReportInterval,
    PromptOfflineSaveInterval,
    ServerNotConfigured,

    // === TRACKER MESSAGES ===
    TrackerStarted,
    TrackerStopped,
    TrackerStatusLine(String),
    TrackerTotalTime(String),

    // === ACCOUNT MESSAGES ===
    AccountAlreadyBound,
    AccountNotBound,
    AccountBindUrl(String),
    AccountUnbound,
    AccountOfflineMode,
    SessionInvalidateFailed(String),

    // === REPORT MESSAGES ===
    OfflineTotalSeconds(u64), // total seconds

    // === LEADERBOARD MESSAGES ===
    LeaderboardHeader(String),          // app name
    LeaderboardEmpty,
    LeaderboardFetchFailed(String),     // reason
    UserInfoFetchFailed(String),        // reason

    // === GENERIC ERRORS ===
    OperationCancelled,
    InvalidInput,
}
