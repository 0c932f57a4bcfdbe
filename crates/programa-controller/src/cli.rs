//!
//! # CLI for ProgramA Controller
//!
//! Parameters are applied over the default configuration.
//!
use std::time::Duration;

use clap::Parser;

use crate::config::{ControllerConfig, DEFAULT_NAMESPACE, WatchClosePolicy};

/// cli options
#[derive(Debug, Parser)]
#[command(name = "programa-controller", about = "ProgramA Controller")]
pub struct ControllerOpt {
    /// k8 namespace to watch ProgramA resources in
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "namespace",
        env = "PROGRAMA_NAMESPACE",
        default_value = DEFAULT_NAMESPACE
    )]
    namespace: String,

    /// list and watch again when the watch stream closes, instead of exiting
    #[arg(long)]
    resync: bool,

    /// wait before resyncing a closed watch
    #[arg(
        long,
        value_name = "duration",
        default_value = "10s",
        value_parser = humantime::parse_duration
    )]
    resync_backoff: Duration,
}

impl ControllerOpt {
    pub fn into_config(self) -> ControllerConfig {
        let config = ControllerConfig {
            namespace: self.namespace,
            on_watch_close: WatchClosePolicy::Exit,
        };

        if self.resync {
            config.with_resync(self.resync_backoff)
        } else {
            config
        }
    }
}
