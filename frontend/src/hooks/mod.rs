pub mod use_donations;
pub mod use_goals;
pub mod use_roster;
pub mod use_weekly_report;

pub use use_donations::use_donations;
pub use use_goals::use_goals;
pub use use_roster::use_roster;
pub use use_weekly_report::use_weekly_report;
