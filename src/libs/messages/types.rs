/// Every user-facing message in the application.
///
/// Text lives in the `Display` implementation (`display.rs`); the enum
/// keeps call sites typo-proof and makes message parameters explicit.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigFileNotFound,
    ConfigParseError,
    CredentialsInvalid,
    CredentialsSaved,
    CredentialsSaveFailed(String),
    ProfileDataMissing,

    // === AUTHENTICATION MESSAGES ===
    LoginAttempt(String),
    LoginSuccessful,
    LoginFailed,
    TokensStored,
    AccessTokenPreview(String),
    RefreshTokenStored(String),
    NotAuthenticatedLoggingIn,

    // === TASK MESSAGES ===
    TasksFetchFailed,
    TasksNotFound,
    TaskPagerPrompt,
    TaskCreated,
    TaskCreateFailed,

    // === WORK LOG MESSAGES ===
    LogsFetchFailed,
    LogsNotFound,
    WorkLogged,
    WorkLogFailed,
    InvalidHours(String),

    // === PROJECT MESSAGES ===
    ProjectsFetchFailed,
    AvailableProjects,
    InvalidProjectSelection,

    // === PROMPTS ===
    PromptWorkTitle,
    PromptWorkDate,
    PromptLogHour,
    PromptSelectProject,
    PromptTaskTitle,
    PromptDeliveryDate,
    PromptEstimatedHours,
    PromptEmail,
    PromptPassword,
    InvalidDateFormat,
    InvalidEstimatedHours,

    // === SCREENSHOT MESSAGES ===
    SnapTakingScreenshot(i64),
    SnapOpeningBrowser,
    SnapLoginInProgress,
    SnapLoggedIn,
    SnapTaskPageReached,
    SnapSaved(String),
    SnapFailed(String),

    // === GIT EXPORT MESSAGES ===
    GenlogFetching { username: String, path: String, date: String },
    GenlogPathMissing(String),
    GenlogNoRepos(String),
    GenlogRepoHeader(String),
    GenlogRepoSkipped(String),
    GenlogGitFailed(String),
    GenlogCsvGenerated(String),
}
