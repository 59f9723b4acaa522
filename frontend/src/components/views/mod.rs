pub mod children;
pub mod dashboard;
pub mod donor;
pub mod goals;
pub mod reports;
pub mod sessions;
pub mod users;

pub use children::ChildrenView;
pub use dashboard::DashboardView;
pub use donor::DonorView;
pub use goals::GoalsView;
pub use reports::ReportsView;
pub use sessions::SessionsView;
pub use users::UsersView;

use shared::{Child, User};

/// First name of a child, falling back to the raw id for unknown references.
pub(crate) fn child_first_name(children: &[Child], id: &str) -> String {
    children
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.first_name.clone())
        .unwrap_or_else(|| id.to_string())
}

pub(crate) fn user_name(users: &[User], id: &str) -> String {
    users
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| id.to_string())
}
