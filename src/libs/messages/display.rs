use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigFileNotFound => "config.json not found. Please create it with your credentials.".to_string(),
            Message::ConfigParseError => "config.json is not a valid JSON file.".to_string(),
            Message::CredentialsInvalid => "Invalid or missing credentials in config.json".to_string(),
            Message::CredentialsSaved => "Credentials and profile data saved successfully!".to_string(),
            Message::CredentialsSaveFailed(reason) => format!("Error saving credentials: {}", reason),
            Message::ProfileDataMissing => "No profile data in config.json. Run set-creds first.".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::LoginAttempt(user) => format!("Attempting to login as {}...", user),
            Message::LoginSuccessful => "Login successful!".to_string(),
            Message::LoginFailed => "Login failed!".to_string(),
            Message::TokensStored => "Tokens have been stored for subsequent API calls.".to_string(),
            Message::AccessTokenPreview(preview) => format!("Access token: {}...", preview),
            Message::RefreshTokenStored(token) => format!("Refresh token: {}", token),
            Message::NotAuthenticatedLoggingIn => "Not authenticated. Performing login first...".to_string(),

            // === TASK MESSAGES ===
            Message::TasksFetchFailed => "Error fetching tasks:".to_string(),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TaskPagerPrompt => "Press Enter to continue, q to quit...".to_string(),
            Message::TaskCreated => "Task created successfully!".to_string(),
            Message::TaskCreateFailed => "Error creating task:".to_string(),

            // === WORK LOG MESSAGES ===
            Message::LogsFetchFailed => "Error fetching task logs:".to_string(),
            Message::LogsNotFound => "No work logs found.".to_string(),
            Message::WorkLogged => "Work logged successfully!".to_string(),
            Message::WorkLogFailed => "Error logging task work:".to_string(),
            Message::InvalidHours(input) => format!("Invalid hours: {}", input),

            // === PROJECT MESSAGES ===
            Message::ProjectsFetchFailed => "Error fetching projects:".to_string(),
            Message::AvailableProjects => "Available Projects:".to_string(),
            Message::InvalidProjectSelection => "Invalid selection".to_string(),

            // === PROMPTS ===
            Message::PromptWorkTitle => "title".to_string(),
            Message::PromptWorkDate => "date".to_string(),
            Message::PromptLogHour => "log_hour".to_string(),
            Message::PromptSelectProject => "Select project (number)".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptDeliveryDate => "Delivery date (YYYY-MM-DD)".to_string(),
            Message::PromptEstimatedHours => "Estimated hours".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::InvalidDateFormat => "Invalid date format. Please use YYYY-MM-DD".to_string(),
            Message::InvalidEstimatedHours => "Invalid hours. Please enter a positive number".to_string(),

            // === SCREENSHOT MESSAGES ===
            Message::SnapTakingScreenshot(task_id) => format!("Taking screenshot for task {}...", task_id),
            Message::SnapOpeningBrowser => "Opening browser in headless mode...".to_string(),
            Message::SnapLoginInProgress => "Login in progress...".to_string(),
            Message::SnapLoggedIn => "Successfully navigated to post-login page".to_string(),
            Message::SnapTaskPageReached => "Successfully reached task page".to_string(),
            Message::SnapSaved(path) => format!("Final screenshot saved as: {}", path),
            Message::SnapFailed(reason) => format!("Error during screenshot process: {}", reason),

            // === GIT EXPORT MESSAGES ===
            Message::GenlogFetching { username, path, date } => {
                format!("Fetching git commits for user {} in {} on {}...", username, path, date)
            }
            Message::GenlogPathMissing(path) => format!("Path {} does not exist", path),
            Message::GenlogNoRepos(path) => format!("No git repositories found in {}", path),
            Message::GenlogRepoHeader(path) => format!("Commits in {}:", path),
            Message::GenlogRepoSkipped(path) => format!("Could not access repository at {}", path),
            Message::GenlogGitFailed(reason) => format!("Error fetching git commits: {}", reason),
            Message::GenlogCsvGenerated(file) => format!("CSV file generated: {}", file),
        };
        write!(f, "{}", text)
    }
}
