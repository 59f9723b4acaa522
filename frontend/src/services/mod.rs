pub mod api;
pub mod fence;
pub mod logging;
