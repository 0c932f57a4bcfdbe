use std::time::Duration;

pub const DEFAULT_NAMESPACE: &str = "default";

/// What to do when the ProgramA watch stream ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatchClosePolicy {
    /// stop the controller
    #[default]
    Exit,
    /// wait, then list and watch again
    Resync { backoff: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub namespace: String,
    pub on_watch_close: WatchClosePolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            on_watch_close: WatchClosePolicy::default(),
        }
    }
}

impl ControllerConfig {
    pub fn with_resync(mut self, backoff: Duration) -> Self {
        self.on_watch_close = WatchClosePolicy::Resync { backoff };
        self
    }
}
