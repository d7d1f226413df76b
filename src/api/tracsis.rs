use super::{ApiResponse, HttpTransport, Transport};
use crate::msg_debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};

pub const BASE_URL: &str = "https://tracsisapi.apsissolutions.com/api/v1";

const LOGIN_URL: &str = "auth/login";
const GRID_URL: &str = "master-grid/grid-data";
const TASK_LOG_URL: &str = "pts/task/log";
const TASK_CREATE_URL: &str = "pts/task/create";

const TASKS_SLUG: &str = "pts_my_tasks";
const LOGS_SLUG: &str = "pts_my_logs";
const PROJECTS_SLUG: &str = "pts_my_projects";

/// Role carried by every mutating request body.
const ROLE_ID: i64 = 2;
const WORK_TYPE: &str = "Development";

/// Numeric task status codes understood by the backend.
const TASK_STATUS_COMPLETED: i64 = 3;
const TASK_STATUS_IN_PROGRESS: i64 = 4;

/// In-process record of the request headers and the current token pair.
///
/// Created empty, populated exactly once per successful login, and gone at
/// process exit. The token pair is the sole authentication witness: both
/// tokens present or the session counts as unauthenticated. Persistence of
/// tokens is the credential store's job, never this struct's.
pub struct Session {
    base_url: String,
    headers: HeaderMap,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Session {
    fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
            access_token: None,
            refresh_token: None,
        }
    }

    fn set_tokens(&mut self, access_token: &str, refresh_token: &str) {
        self.access_token = Some(access_token.to_string());
        self.refresh_token = Some(refresh_token.to_string());
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", access_token)) {
            self.headers.insert(AUTHORIZATION, value);
        }
    }

    /// Pure read of the token pair; no I/O beyond the debug hook.
    pub fn is_authenticated(&self) -> bool {
        msg_debug!(format!("Access token: {:?}", self.access_token));
        msg_debug!(format!("Refresh token: {:?}", self.refresh_token));
        self.access_token.is_some() && self.refresh_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Client for the Tracsis backend. One method per endpoint; every method
/// resolves to an [`ApiResponse`] and never panics or propagates an error.
pub struct Tracsis<T: Transport = HttpTransport> {
    transport: T,
    session: Session,
}

impl Tracsis<HttpTransport> {
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for Tracsis<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Tracsis<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            session: Session::new(BASE_URL),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Authenticates and, on success, stores the token pair in the session
    /// before the envelope is returned; every subsequent request carries
    /// the bearer header.
    pub async fn login(&mut self, user: &str, password: &str) -> ApiResponse {
        let payload = json!({
            "user": user,
            "password": password,
        });

        let response = self.post(LOGIN_URL, payload).await;
        if !response.error {
            if let Some(data) = response.data.as_ref() {
                if let (Some(access_token), Some(refresh_token)) = (
                    data.get("access_token").and_then(Value::as_str),
                    data.get("refresh_token").and_then(Value::as_str),
                ) {
                    self.session.set_tokens(access_token, refresh_token);
                }
            }
        }
        response
    }

    /// Tasks assigned to `user_id`, paginated. Requires authentication;
    /// short-circuits with a 401-shaped envelope before any network call.
    pub async fn get_task_list(&self, user_id: i64, page: u32, per_page: u32) -> ApiResponse {
        if !self.is_authenticated() {
            return ApiResponse::unauthenticated();
        }

        let payload = json!({
            "slug": TASKS_SLUG,
            "extra": {
                "extra_condition": format!("pts_tasks.assign_user_id = {}", user_id),
            },
            "page": page,
            "per_page": per_page,
            "search_key": {},
            "search_data": [],
        });
        self.post(GRID_URL, payload).await
    }

    /// Work-log listing. The grid endpoint has no per-task filter; the slug
    /// already scopes the listing to the caller's own log entries.
    pub async fn get_task_logs(&self, _task_id: i64, page: u32, per_page: u32) -> ApiResponse {
        if !self.is_authenticated() {
            return ApiResponse::unauthenticated();
        }

        let payload = json!({
            "slug": LOGS_SLUG,
            "extra": {},
            "page": page,
            "per_page": per_page,
            "search_key": {},
            "search_data": [],
        });
        self.post(GRID_URL, payload).await
    }

    /// Sends exactly one work entry. Status `"c"` marks the task completed,
    /// any other value leaves it in progress.
    ///
    /// NOTE: unlike the listing endpoints this method performs no local
    /// authentication check; an unauthenticated call reaches the server and
    /// is rejected there with a 401.
    pub async fn log_task_work(&self, task_id: i64, status: &str, work_title: &str, work_date: &str, log_hour: f64) -> ApiResponse {
        let task_status = match status {
            "c" => TASK_STATUS_COMPLETED,
            _ => TASK_STATUS_IN_PROGRESS,
        };

        let payload = json!({
            "role_id": ROLE_ID,
            "task_status": task_status,
            "task_id": task_id,
            "work": [{
                "key": 0,
                "work_title": work_title,
                "work_date": work_date,
                "work_type": WORK_TYPE,
                "log_hour": log_hour,
                "log_details": null,
            }],
        });
        self.post(TASK_LOG_URL, payload).await
    }

    /// Projects the logged-in user belongs to. A single large page; the
    /// selection prompt needs the whole list at once.
    pub async fn get_my_project_list(&self) -> ApiResponse {
        let payload = json!({
            "slug": PROJECTS_SLUG,
            "extra": {},
            "page": 1,
            "per_page": 100,
            "search_key": {},
            "search_data": [],
        });
        self.post(GRID_URL, payload).await
    }

    pub async fn create_task(&self, title: &str, user_id: i64, delivery_date: &str, estimated_hour: f64, project_id: i64) -> ApiResponse {
        let payload = json!({
            "role_id": ROLE_ID,
            "task_title": title,
            "assign_user_id": user_id,
            "delivery_date": delivery_date,
            "estimated_hour": estimated_hour,
            "project_id": project_id,
        });
        self.post(TASK_CREATE_URL, payload).await
    }

    async fn post(&self, path: &str, payload: Value) -> ApiResponse {
        let url = format!("{}/{}", self.session.base_url, path);
        msg_debug!(format!("POST {}", url));
        msg_debug!(format!("Payload: {}", payload));
        let reply = match self.transport.post_json(&url, self.session.headers(), &payload).await {
            Ok(reply) => reply,
            Err(err) => return ApiResponse::request_failed(&err),
        };

        if !(200..300).contains(&reply.status) {
            return ApiResponse::http_error(reply.status);
        }

        match serde_json::from_str::<ApiResponse>(&reply.body) {
            Ok(parsed) => parsed,
            Err(_) => ApiResponse::invalid_json(reply.status, &reply.body),
        }
    }
}
