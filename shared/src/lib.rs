use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account role, serialized lowercase to match the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Parent,
    Therapist,
    Donor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Parent, Role::Therapist, Role::Donor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Parent => "parent",
            Role::Therapist => "therapist",
            Role::Donor => "donor",
            Role::Admin => "admin",
        }
    }

    /// Parse the lowercase wire/form value back into a role.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "parent" => Some(Role::Parent),
            "therapist" => Some(Role::Therapist),
            "donor" => Some(Role::Donor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// An account in the system (parent, therapist, donor, or admin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Some auth responses omit the email; default keeps deserialization lenient.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    pub role: Role,
}

/// Care recipient record linked to assigned parents and therapists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub diagnosis: Option<String>,
    /// User ids of linked parents; may be absent on older records.
    #[serde(default)]
    pub parent_ids: Vec<String>,
    /// User ids of assigned therapists; may be absent on older records.
    #[serde(default)]
    pub therapist_ids: Vec<String>,
}

impl Child {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A logged therapy encounter between a child and a therapist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub child_id: String,
    pub therapist_id: String,
    /// ISO 8601 date (YYYY-MM-DD) as delivered by the server.
    pub date: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub goals_progress: Vec<GoalProgressEntry>,
}

/// One progress rating recorded against a goal during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressEntry {
    pub goal_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// A tracked therapeutic objective for a child.
///
/// The status is an opaque server-side string; the client only ever writes
/// "active" when creating a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub child_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_metric: String,
    #[serde(default)]
    pub status: String,
}

/// A monetary contribution, optionally earmarked to a child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub child_id: Option<String>,
    #[serde(default)]
    pub donor_id: Option<String>,
    pub date: String,
}

/// Aggregate donation totals from `/donations/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonationSummary {
    pub total: f64,
    pub count: u64,
}

/// Per-parent weekly aggregate from `/reports/weekly`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub total_sessions: u64,
    #[serde(default)]
    pub total_goals: u64,
    pub total_progress_updates: u64,
    pub children: Vec<ChildWeeklyActivity>,
}

/// One child's row in the weekly report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildWeeklyActivity {
    pub child_id: String,
    pub name: String,
    pub sessions: u64,
    pub goals: u64,
    pub progress_updates: u64,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Request for creating a new child record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChildRequest {
    pub first_name: String,
    pub last_name: String,
    pub diagnosis: String,
    pub parent_ids: Vec<String>,
    pub therapist_ids: Vec<String>,
}

/// Request for logging a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub child_id: String,
    pub therapist_id: String,
    pub date: String,
    pub duration_minutes: u32,
    pub notes: String,
}

/// Request for creating a new goal. New goals always start out active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub child_id: String,
    pub title: String,
    pub description: String,
    pub target_metric: String,
    pub status: String,
}

impl CreateGoalRequest {
    pub fn new(child_id: String, title: String, description: String, target_metric: String) -> Self {
        Self {
            child_id,
            title,
            description,
            target_metric,
            status: "active".to_string(),
        }
    }
}

/// One progress item to append to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub goal_id: String,
    pub rating: u8,
    pub comment: String,
}

/// Body of `PATCH /sessions/{id}/goals-progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordProgressRequest {
    pub items: Vec<ProgressItem>,
}

/// Request for recording a donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDonationRequest {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_id: Option<String>,
    pub date: String,
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Role-based visibility
// ---------------------------------------------------------------------------

/// Children visible to a viewer: therapists see assigned children, parents see
/// linked children, everyone else (including anonymous) sees the full list.
pub fn visible_children(children: &[Child], viewer: Option<&User>) -> Vec<Child> {
    let Some(user) = viewer else {
        return children.to_vec();
    };
    match user.role {
        Role::Therapist => children
            .iter()
            .filter(|c| c.therapist_ids.iter().any(|id| *id == user.id))
            .cloned()
            .collect(),
        Role::Parent => children
            .iter()
            .filter(|c| c.parent_ids.iter().any(|id| *id == user.id))
            .cloned()
            .collect(),
        _ => children.to_vec(),
    }
}

/// Sessions visible to a viewer: therapists see their own sessions, parents see
/// sessions of their linked children, everyone else sees the full list.
pub fn visible_sessions(sessions: &[Session], children: &[Child], viewer: Option<&User>) -> Vec<Session> {
    let Some(user) = viewer else {
        return sessions.to_vec();
    };
    match user.role {
        Role::Therapist => sessions
            .iter()
            .filter(|s| s.therapist_id == user.id)
            .cloned()
            .collect(),
        Role::Parent => {
            let my_children: Vec<&str> = children
                .iter()
                .filter(|c| c.parent_ids.iter().any(|id| *id == user.id))
                .map(|c| c.id.as_str())
                .collect();
            sessions
                .iter()
                .filter(|s| my_children.contains(&s.child_id.as_str()))
                .cloned()
                .collect()
        }
        _ => sessions.to_vec(),
    }
}

/// Users with the therapist role, for session/goal assignment pickers.
pub fn therapists(users: &[User]) -> Vec<User> {
    users.iter().filter(|u| u.role == Role::Therapist).cloned().collect()
}

// ---------------------------------------------------------------------------
// Donation scoping
// ---------------------------------------------------------------------------

/// Scope for the donation list and summary endpoints.
///
/// Donor-role viewers only see their own donations; everyone else gets the
/// unscoped lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationScope {
    All,
    Donor(String),
}

impl DonationScope {
    pub fn for_viewer(viewer: Option<&User>) -> Self {
        match viewer {
            Some(user) if user.role == Role::Donor => DonationScope::Donor(user.id.clone()),
            _ => DonationScope::All,
        }
    }

    /// Query-string suffix for `/donations` and `/donations/summary`.
    pub fn query(&self) -> String {
        match self {
            DonationScope::All => String::new(),
            DonationScope::Donor(id) => format!("?donor_id={}", id),
        }
    }
}

// ---------------------------------------------------------------------------
// Form drafts
// ---------------------------------------------------------------------------

/// Draft state for the child creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildDraft {
    pub first_name: String,
    pub last_name: String,
    pub diagnosis: String,
}

impl ChildDraft {
    /// New children start with no parent or therapist assignments.
    pub fn to_request(&self) -> CreateChildRequest {
        CreateChildRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            diagnosis: self.diagnosis.trim().to_string(),
            parent_ids: Vec::new(),
            therapist_ids: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }
}

/// Draft state for the session logging form.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDraft {
    pub child_id: String,
    pub therapist_id: String,
    pub date: String,
    pub duration_minutes: String,
    pub notes: String,
}

impl Default for SessionDraft {
    fn default() -> Self {
        Self {
            child_id: String::new(),
            therapist_id: String::new(),
            date: String::new(),
            duration_minutes: "60".to_string(),
            notes: String::new(),
        }
    }
}

impl SessionDraft {
    pub fn to_request(&self) -> CreateSessionRequest {
        CreateSessionRequest {
            child_id: self.child_id.clone(),
            therapist_id: self.therapist_id.clone(),
            date: self.date.clone(),
            duration_minutes: self.duration_minutes.trim().parse().unwrap_or(60),
            notes: self.notes.clone(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.child_id.is_empty() && !self.therapist_id.is_empty() && !self.date.is_empty()
    }
}

/// Draft state for the goal creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalDraft {
    pub child_id: String,
    pub title: String,
    pub description: String,
    pub target_metric: String,
}

impl GoalDraft {
    pub fn to_request(&self) -> CreateGoalRequest {
        CreateGoalRequest::new(
            self.child_id.clone(),
            self.title.trim().to_string(),
            self.description.trim().to_string(),
            self.target_metric.trim().to_string(),
        )
    }

    pub fn is_valid(&self) -> bool {
        !self.child_id.is_empty() && !self.title.trim().is_empty()
    }

    /// Reset after a successful create, retaining the selected child.
    pub fn reset_keeping_child(&self) -> Self {
        Self {
            child_id: self.child_id.clone(),
            ..Self::default()
        }
    }
}

/// Draft state for the progress logging form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDraft {
    pub child_id: String,
    pub session_id: String,
    pub goal_id: String,
    pub rating: u8,
    pub comment: String,
}

impl Default for ProgressDraft {
    fn default() -> Self {
        Self {
            child_id: String::new(),
            session_id: String::new(),
            goal_id: String::new(),
            rating: 3,
            comment: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressDraftError {
    #[error("Select session and goal")]
    MissingSelection,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange(u8),
}

impl ProgressDraft {
    /// Local precondition check; no request may be issued unless this passes.
    pub fn validate(&self) -> Result<ProgressItem, ProgressDraftError> {
        if self.session_id.is_empty() || self.goal_id.is_empty() {
            return Err(ProgressDraftError::MissingSelection);
        }
        if !(1..=5).contains(&self.rating) {
            return Err(ProgressDraftError::RatingOutOfRange(self.rating));
        }
        Ok(ProgressItem {
            goal_id: self.goal_id.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
        })
    }

    /// Reset after a successful submit, retaining the selected child.
    pub fn reset_keeping_child(&self) -> Self {
        Self {
            child_id: self.child_id.clone(),
            session_id: self.session_id.clone(),
            ..Self::default()
        }
    }
}

/// Draft state for the donation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationDraft {
    pub amount: String,
    pub message: String,
    pub child_id: String,
}

impl DonationDraft {
    /// Build the request payload. The amount input is coerced to a number,
    /// empty optionals are omitted, and the donor id comes from the current
    /// user (if any).
    pub fn to_request(&self, donor_id: Option<String>, date: String) -> CreateDonationRequest {
        CreateDonationRequest {
            amount: self.amount.trim().parse().unwrap_or(0.0),
            message: some_if_not_empty(&self.message),
            child_id: some_if_not_empty(&self.child_id),
            donor_id,
            date,
        }
    }
}

/// Draft state for the login/signup form.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthDraft {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Default for AuthDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            username: String::new(),
            password: String::new(),
            role: Role::Parent,
        }
    }
}

impl AuthDraft {
    pub fn to_signup_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }

    pub fn to_login_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

fn some_if_not_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
            username: id.to_string(),
            role,
        }
    }

    fn child(id: &str, parents: &[&str], therapists: &[&str]) -> Child {
        Child {
            id: id.to_string(),
            first_name: "First".to_string(),
            last_name: id.to_string(),
            diagnosis: None,
            parent_ids: parents.iter().map(|s| s.to_string()).collect(),
            therapist_ids: therapists.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn session(id: &str, child_id: &str, therapist_id: &str) -> Session {
        Session {
            id: id.to_string(),
            child_id: child_id.to_string(),
            therapist_id: therapist_id.to_string(),
            date: "2026-08-24".to_string(),
            duration_minutes: 60,
            notes: String::new(),
            goals_progress: Vec::new(),
        }
    }

    #[test]
    fn test_therapist_sees_only_assigned_children() {
        let children = vec![
            child("c1", &["p1"], &["t1"]),
            child("c2", &["p1"], &["t2"]),
            child("c3", &[], &["t1", "t2"]),
        ];
        let therapist = user("t1", Role::Therapist);

        let visible = visible_children(&children, Some(&therapist));
        let ids: Vec<&str> = visible.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn test_parent_sees_only_linked_children() {
        let children = vec![
            child("c1", &["p1"], &[]),
            child("c2", &["p2"], &[]),
        ];
        let parent = user("p1", Role::Parent);

        let visible = visible_children(&children, Some(&parent));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "c1");
    }

    #[test]
    fn test_admin_donor_and_anonymous_see_all_children() {
        let children = vec![
            child("c1", &["p1"], &["t1"]),
            child("c2", &[], &[]),
        ];

        assert_eq!(visible_children(&children, Some(&user("a1", Role::Admin))).len(), 2);
        assert_eq!(visible_children(&children, Some(&user("d1", Role::Donor))).len(), 2);
        assert_eq!(visible_children(&children, None).len(), 2);
    }

    #[test]
    fn test_therapist_sees_only_own_sessions() {
        let children = vec![child("c1", &[], &["t1"])];
        let sessions = vec![
            session("s1", "c1", "t1"),
            session("s2", "c1", "t2"),
        ];
        let therapist = user("t1", Role::Therapist);

        let visible = visible_sessions(&sessions, &children, Some(&therapist));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "s1");
    }

    #[test]
    fn test_parent_sees_sessions_of_linked_children() {
        let children = vec![
            child("c1", &["p1"], &[]),
            child("c2", &["p2"], &[]),
        ];
        let sessions = vec![
            session("s1", "c1", "t1"),
            session("s2", "c2", "t1"),
            session("s3", "c1", "t2"),
        ];
        let parent = user("p1", Role::Parent);

        let visible = visible_sessions(&sessions, &children, Some(&parent));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }

    #[test]
    fn test_anonymous_sees_all_sessions() {
        let sessions = vec![session("s1", "c1", "t1"), session("s2", "c2", "t2")];
        assert_eq!(visible_sessions(&sessions, &[], None).len(), 2);
    }

    #[test]
    fn test_therapists_filter() {
        let users = vec![
            user("t1", Role::Therapist),
            user("p1", Role::Parent),
            user("t2", Role::Therapist),
            user("a1", Role::Admin),
        ];
        let result = therapists(&users);
        let ids: Vec<&str> = result.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_donation_scope_for_donor() {
        let donor = user("d1", Role::Donor);
        let scope = DonationScope::for_viewer(Some(&donor));
        assert_eq!(scope, DonationScope::Donor("d1".to_string()));
        assert_eq!(scope.query(), "?donor_id=d1");
    }

    #[test]
    fn test_donation_scope_unscoped_for_other_roles() {
        assert_eq!(DonationScope::for_viewer(Some(&user("a1", Role::Admin))), DonationScope::All);
        assert_eq!(DonationScope::for_viewer(Some(&user("p1", Role::Parent))), DonationScope::All);
        assert_eq!(DonationScope::for_viewer(None), DonationScope::All);
        assert_eq!(DonationScope::All.query(), "");
    }

    #[test]
    fn test_progress_draft_requires_session_and_goal() {
        let mut draft = ProgressDraft::default();
        assert_eq!(draft.validate(), Err(ProgressDraftError::MissingSelection));

        draft.session_id = "s1".to_string();
        assert_eq!(draft.validate(), Err(ProgressDraftError::MissingSelection));

        draft.goal_id = "g1".to_string();
        let item = draft.validate().unwrap();
        assert_eq!(item.goal_id, "g1");
        assert_eq!(item.rating, 3);
    }

    #[test]
    fn test_progress_draft_rejects_out_of_range_rating() {
        let draft = ProgressDraft {
            session_id: "s1".to_string(),
            goal_id: "g1".to_string(),
            rating: 6,
            ..ProgressDraft::default()
        };
        assert_eq!(draft.validate(), Err(ProgressDraftError::RatingOutOfRange(6)));
    }

    #[test]
    fn test_progress_draft_reset_keeps_child_and_session() {
        let draft = ProgressDraft {
            child_id: "c1".to_string(),
            session_id: "s1".to_string(),
            goal_id: "g1".to_string(),
            rating: 5,
            comment: "great".to_string(),
        };
        let reset = draft.reset_keeping_child();
        assert_eq!(reset.child_id, "c1");
        assert_eq!(reset.session_id, "s1");
        assert_eq!(reset.goal_id, "");
        assert_eq!(reset.rating, 3);
        assert_eq!(reset.comment, "");
    }

    #[test]
    fn test_child_draft_request_has_empty_assignments() {
        let draft = ChildDraft {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            diagnosis: String::new(),
        };
        let request = draft.to_request();
        assert_eq!(request.first_name, "Ada");
        assert!(request.parent_ids.is_empty());
        assert!(request.therapist_ids.is_empty());
    }

    #[test]
    fn test_session_draft_duration_coercion() {
        let mut draft = SessionDraft::default();
        assert_eq!(draft.to_request().duration_minutes, 60);

        draft.duration_minutes = "45".to_string();
        assert_eq!(draft.to_request().duration_minutes, 45);

        draft.duration_minutes = "not a number".to_string();
        assert_eq!(draft.to_request().duration_minutes, 60);
    }

    #[test]
    fn test_new_goals_are_active() {
        let request = GoalDraft {
            child_id: "c1".to_string(),
            title: "Eye contact".to_string(),
            description: String::new(),
            target_metric: String::new(),
        }
        .to_request();
        assert_eq!(request.status, "active");
    }

    #[test]
    fn test_goal_draft_reset_keeps_child() {
        let draft = GoalDraft {
            child_id: "c1".to_string(),
            title: "Eye contact".to_string(),
            description: "desc".to_string(),
            target_metric: "5x per session".to_string(),
        };
        let reset = draft.reset_keeping_child();
        assert_eq!(reset.child_id, "c1");
        assert!(reset.title.is_empty());
    }

    #[test]
    fn test_donation_draft_coercion_and_optionals() {
        let draft = DonationDraft {
            amount: "25.50".to_string(),
            message: String::new(),
            child_id: "c1".to_string(),
        };
        let request = draft.to_request(Some("d1".to_string()), "2026-08-27".to_string());
        assert_eq!(request.amount, 25.50);
        assert_eq!(request.message, None);
        assert_eq!(request.child_id, Some("c1".to_string()));
        assert_eq!(request.donor_id, Some("d1".to_string()));

        let blank = DonationDraft::default().to_request(None, "2026-08-27".to_string());
        assert_eq!(blank.amount, 0.0);
        assert_eq!(blank.child_id, None);
    }

    #[test]
    fn test_role_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Therapist).unwrap(), "\"therapist\"");
        let role: Role = serde_json::from_str("\"donor\"").unwrap();
        assert_eq!(role, Role::Donor);
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("unknown"), None);
    }

    #[test]
    fn test_child_without_assignment_fields_deserializes() {
        let json = r#"{"id":"c1","first_name":"Ada","last_name":"L"}"#;
        let child: Child = serde_json::from_str(json).unwrap();
        assert!(child.parent_ids.is_empty());
        assert!(child.therapist_ids.is_empty());
        assert_eq!(child.diagnosis, None);
    }

    #[test]
    fn test_auth_response_without_email_deserializes() {
        let json = r#"{"id":"u1","name":"Pat","role":"parent"}"#;
        let identity: User = serde_json::from_str(json).unwrap();
        assert_eq!(identity.role, Role::Parent);
        assert_eq!(identity.email, "");
        assert_eq!(identity.username, "");
    }
}
