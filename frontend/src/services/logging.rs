/// Component-tagged console logging for the frontend.
pub struct Logger;

impl Logger {
    pub fn info(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
    }

    pub fn warn(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
    }
}
