use tracing::info;

use crate::domain::Navigator;

/// Navigator for headless use: there is no page to leave, so the target is logged
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn go_to(&self, path: &str) {
        info!(path, "Navigating");
    }
}
