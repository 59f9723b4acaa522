use gloo::net::http::Request;
use shared::{
    Child, CreateChildRequest, CreateDonationRequest, CreateGoalRequest, CreateSessionRequest,
    Donation, DonationScope, DonationSummary, Goal, LoginRequest, RecordProgressRequest, Session,
    SignupRequest, User, WeeklyReport,
};

/// Base URL used when no override is baked in at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// API client for communicating with the therapy-center backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client with the base URL from the `THERAPY_API_URL` build
    /// environment variable, falling back to the local default.
    pub fn new() -> Self {
        Self {
            base_url: option_env!("THERAPY_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        }
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub async fn list_children(&self) -> Result<Vec<Child>, String> {
        let url = format!("{}/children", self.base_url);
        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<Child>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse children: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch children: {}", e)),
        }
    }

    pub async fn create_child(&self, request: CreateChildRequest) -> Result<(), String> {
        let url = format!("{}/children", self.base_url);
        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, String> {
        let url = format!("{}/users", self.base_url);
        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<User>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse users: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch users: {}", e)),
        }
    }

    pub async fn list_sessions(&self) -> Result<Vec<Session>, String> {
        let url = format!("{}/sessions", self.base_url);
        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<Session>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse sessions: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch sessions: {}", e)),
        }
    }

    pub async fn create_session(&self, request: CreateSessionRequest) -> Result<(), String> {
        let url = format!("{}/sessions", self.base_url);
        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Append progress items to an existing session.
    pub async fn record_progress(
        &self,
        session_id: &str,
        request: RecordProgressRequest,
    ) -> Result<(), String> {
        let url = format!("{}/sessions/{}/goals-progress", self.base_url, session_id);
        match Request::patch(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn list_goals(&self, child_id: &str) -> Result<Vec<Goal>, String> {
        let url = format!("{}/goals?child_id={}", self.base_url, child_id);
        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<Goal>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse goals: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch goals: {}", e)),
        }
    }

    pub async fn create_goal(&self, request: CreateGoalRequest) -> Result<(), String> {
        let url = format!("{}/goals", self.base_url);
        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn list_donations(&self, scope: &DonationScope) -> Result<Vec<Donation>, String> {
        let url = format!("{}/donations{}", self.base_url, scope.query());
        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<Donation>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse donations: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch donations: {}", e)),
        }
    }

    pub async fn donation_summary(&self, scope: &DonationScope) -> Result<DonationSummary, String> {
        let url = format!("{}/donations/summary{}", self.base_url, scope.query());
        match Request::get(&url).send().await {
            Ok(response) => match response.json::<DonationSummary>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse donation summary: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch donation summary: {}", e)),
        }
    }

    pub async fn create_donation(&self, request: CreateDonationRequest) -> Result<(), String> {
        let url = format!("{}/donations", self.base_url);
        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn weekly_report(&self, parent_id: &str) -> Result<WeeklyReport, String> {
        let url = format!("{}/reports/weekly?parent_id={}", self.base_url, parent_id);
        match Request::get(&url).send().await {
            Ok(response) => match response.json::<WeeklyReport>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse weekly report: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch weekly report: {}", e)),
        }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<User, String> {
        let url = format!("{}/auth/signup", self.base_url);
        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<User>().await {
                        Ok(identity) => Ok(identity),
                        Err(e) => Err(format!("Failed to parse identity: {}", e)),
                    }
                } else {
                    Err("Signup failed".to_string())
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<User, String> {
        let url = format!("{}/auth/login", self.base_url);
        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<User>().await {
                        Ok(identity) => Ok(identity),
                        Err(e) => Err(format!("Failed to parse identity: {}", e)),
                    }
                } else {
                    Err("Login failed".to_string())
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
