use std::rc::Rc;

use shared::{
    visible_children, Child, Donation, DonationSummary, Goal, Role, Session, User, WeeklyReport,
};
use yew::prelude::*;

/// The seven mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Children,
    Sessions,
    Goals,
    Donor,
    Users,
    Reports,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Children,
        View::Sessions,
        View::Goals,
        View::Donor,
        View::Users,
        View::Reports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Children => "Children",
            View::Sessions => "Sessions",
            View::Goals => "Goals",
            View::Donor => "Donor",
            View::Users => "Users",
            View::Reports => "Reports",
        }
    }

    /// Whether a view appears in the nav for a given role (anonymous = None).
    pub fn visible_for(&self, role: Option<Role>) -> bool {
        match self {
            View::Dashboard => true,
            View::Children | View::Sessions => role != Some(Role::Donor),
            View::Goals => matches!(role, Some(Role::Therapist | Role::Parent | Role::Admin)),
            View::Donor => matches!(role, Some(Role::Donor | Role::Admin)),
            View::Users => role == Some(Role::Admin) || role.is_none(),
            View::Reports => role == Some(Role::Parent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Top-level application state. Mutated only through [`Action`]s; the entity
/// lists are a cache of the server's data, re-fetched after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view: View,
    pub current_user: Option<User>,
    pub children: Vec<Child>,
    pub users: Vec<User>,
    pub sessions: Vec<Session>,
    /// Goals for the currently selected child, if any have been fetched.
    pub goals: Vec<Goal>,
    pub selected_child_id: Option<String>,
    pub donations: Vec<Donation>,
    pub donation_summary: DonationSummary,
    pub weekly_report: Option<WeeklyReport>,
    /// Open auth modal and its mode; None when closed.
    pub auth_modal: Option<AuthMode>,
    /// Most recent background refresh failure, shown in a dismissible banner.
    pub last_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Dashboard,
            current_user: None,
            children: Vec::new(),
            users: Vec::new(),
            sessions: Vec::new(),
            goals: Vec::new(),
            selected_child_id: None,
            donations: Vec::new(),
            donation_summary: DonationSummary::default(),
            weekly_report: None,
            auth_modal: None,
            last_error: None,
        }
    }
}

pub enum Action {
    Navigate(View),
    RosterLoaded {
        children: Vec<Child>,
        users: Vec<User>,
        sessions: Vec<Session>,
    },
    SelectChild(String),
    GoalsLoaded {
        child_id: String,
        goals: Vec<Goal>,
    },
    DonationsLoaded {
        donations: Vec<Donation>,
        summary: DonationSummary,
    },
    ReportLoaded(WeeklyReport),
    LoggedIn(User),
    LoggedOut,
    OpenAuth(AuthMode),
    CloseAuth,
    FetchFailed(String),
    DismissError,
}

/// Pure transition function; all state changes go through here.
fn apply(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::Navigate(view) => {
            next.view = view;
            match view {
                // Entering the goals view selects the first visible child when
                // nothing is selected yet.
                View::Goals => {
                    if next.selected_child_id.is_none() {
                        next.selected_child_id =
                            visible_children(&next.children, next.current_user.as_ref())
                                .first()
                                .map(|c| c.id.clone());
                    }
                }
                // A non-parent has no weekly report; drop any stale one.
                View::Reports => {
                    let is_parent = next
                        .current_user
                        .as_ref()
                        .map(|u| u.role == Role::Parent)
                        .unwrap_or(false);
                    if !is_parent {
                        next.weekly_report = None;
                    }
                }
                _ => {}
            }
        }
        Action::RosterLoaded {
            children,
            users,
            sessions,
        } => {
            next.children = children;
            next.users = users;
            next.sessions = sessions;
        }
        Action::SelectChild(child_id) => {
            next.selected_child_id = Some(child_id);
        }
        Action::GoalsLoaded { child_id, goals } => {
            // Stale responses for a previously selected child are dropped.
            if next.selected_child_id.as_deref() == Some(child_id.as_str()) {
                next.goals = goals;
            }
        }
        Action::DonationsLoaded { donations, summary } => {
            next.donations = donations;
            next.donation_summary = summary;
        }
        Action::ReportLoaded(report) => {
            next.weekly_report = Some(report);
        }
        Action::LoggedIn(user) => {
            next.current_user = Some(user);
            next.auth_modal = None;
        }
        Action::LoggedOut => {
            next.current_user = None;
            next.weekly_report = None;
            next.view = View::Dashboard;
        }
        Action::OpenAuth(mode) => {
            next.auth_modal = Some(mode);
        }
        Action::CloseAuth => {
            next.auth_modal = None;
        }
        Action::FetchFailed(message) => {
            next.last_error = Some(message);
        }
        Action::DismissError => {
            next.last_error = None;
        }
    }
    next
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        apply(&self, action).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: String::new(),
            username: id.to_string(),
            role,
        }
    }

    fn child(id: &str, parents: &[&str]) -> Child {
        Child {
            id: id.to_string(),
            first_name: id.to_string(),
            last_name: "Test".to_string(),
            diagnosis: None,
            parent_ids: parents.iter().map(|s| s.to_string()).collect(),
            therapist_ids: Vec::new(),
        }
    }

    fn goal(id: &str, child_id: &str) -> Goal {
        Goal {
            id: id.to_string(),
            child_id: child_id.to_string(),
            title: "Goal".to_string(),
            description: String::new(),
            target_metric: String::new(),
            status: "active".to_string(),
        }
    }

    fn report() -> WeeklyReport {
        WeeklyReport {
            total_sessions: 3,
            total_goals: 2,
            total_progress_updates: 4,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_initial_view_is_dashboard() {
        assert_eq!(AppState::default().view, View::Dashboard);
    }

    #[test]
    fn test_entering_goals_selects_first_visible_child() {
        let mut state = AppState {
            children: vec![child("c1", &["p1"]), child("c2", &["p2"])],
            current_user: Some(user("p2", Role::Parent)),
            ..AppState::default()
        };
        state = apply(&state, Action::Navigate(View::Goals));
        // p2 only sees c2, so that is what gets seeded.
        assert_eq!(state.selected_child_id, Some("c2".to_string()));
    }

    #[test]
    fn test_entering_goals_keeps_existing_selection() {
        let mut state = AppState {
            children: vec![child("c1", &[]), child("c2", &[])],
            selected_child_id: Some("c2".to_string()),
            ..AppState::default()
        };
        state = apply(&state, Action::Navigate(View::Goals));
        assert_eq!(state.selected_child_id, Some("c2".to_string()));
    }

    #[test]
    fn test_entering_reports_as_non_parent_clears_report() {
        let mut state = AppState {
            current_user: Some(user("a1", Role::Admin)),
            weekly_report: Some(report()),
            ..AppState::default()
        };
        state = apply(&state, Action::Navigate(View::Reports));
        assert_eq!(state.weekly_report, None);
    }

    #[test]
    fn test_entering_reports_as_parent_keeps_report() {
        let mut state = AppState {
            current_user: Some(user("p1", Role::Parent)),
            weekly_report: Some(report()),
            ..AppState::default()
        };
        state = apply(&state, Action::Navigate(View::Reports));
        assert!(state.weekly_report.is_some());
    }

    #[test]
    fn test_stale_goals_response_is_dropped() {
        let mut state = AppState {
            selected_child_id: Some("c2".to_string()),
            goals: vec![goal("g1", "c2")],
            ..AppState::default()
        };
        // Response for c1 arrives after the selection moved to c2.
        state = apply(
            &state,
            Action::GoalsLoaded {
                child_id: "c1".to_string(),
                goals: vec![goal("g9", "c1")],
            },
        );
        assert_eq!(state.goals.len(), 1);
        assert_eq!(state.goals[0].id, "g1");
    }

    #[test]
    fn test_current_goals_response_is_applied() {
        let mut state = AppState {
            selected_child_id: Some("c1".to_string()),
            ..AppState::default()
        };
        state = apply(
            &state,
            Action::GoalsLoaded {
                child_id: "c1".to_string(),
                goals: vec![goal("g1", "c1"), goal("g2", "c1")],
            },
        );
        assert_eq!(state.goals.len(), 2);
    }

    #[test]
    fn test_login_replaces_user_and_closes_modal() {
        let mut state = AppState {
            auth_modal: Some(AuthMode::Login),
            ..AppState::default()
        };
        let identity = user("u1", Role::Therapist);
        state = apply(&state, Action::LoggedIn(identity.clone()));
        assert_eq!(state.current_user, Some(identity));
        assert_eq!(state.auth_modal, None);
    }

    #[test]
    fn test_logout_clears_user_and_returns_to_dashboard() {
        let mut state = AppState {
            view: View::Reports,
            current_user: Some(user("p1", Role::Parent)),
            weekly_report: Some(report()),
            ..AppState::default()
        };
        state = apply(&state, Action::LoggedOut);
        assert_eq!(state.current_user, None);
        assert_eq!(state.weekly_report, None);
        assert_eq!(state.view, View::Dashboard);
    }

    #[test]
    fn test_fetch_failure_sets_and_dismisses_banner() {
        let mut state = apply(
            &AppState::default(),
            Action::FetchFailed("Could not load latest data".to_string()),
        );
        assert!(state.last_error.is_some());
        state = apply(&state, Action::DismissError);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_nav_visibility_per_role() {
        let cases = [
            (None, vec![View::Dashboard, View::Children, View::Sessions, View::Users]),
            (
                Some(Role::Parent),
                vec![View::Dashboard, View::Children, View::Sessions, View::Goals, View::Reports],
            ),
            (
                Some(Role::Therapist),
                vec![View::Dashboard, View::Children, View::Sessions, View::Goals],
            ),
            (Some(Role::Donor), vec![View::Dashboard, View::Donor]),
            (
                Some(Role::Admin),
                vec![
                    View::Dashboard,
                    View::Children,
                    View::Sessions,
                    View::Goals,
                    View::Donor,
                    View::Users,
                ],
            ),
        ];
        for (role, expected) in cases {
            let visible: Vec<View> = View::ALL
                .into_iter()
                .filter(|v| v.visible_for(role))
                .collect();
            assert_eq!(visible, expected, "role {:?}", role);
        }
    }
}
