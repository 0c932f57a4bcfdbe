//!
//! # ProgramA workload
//!
//! Prints the value the controller injected through `MY_ENV_VAR`, forever.
//!
use std::env;
use std::time::Duration;

use clap::Parser;

use fluvio_future::task::run_block_on;
use fluvio_future::timer::sleep;

use programa_metadata::ENV_VAR_NAME;

#[derive(Debug, Parser)]
#[command(name = "programa", about = "Report the ProgramA env value")]
struct WorkerOpt {
    /// time between reports
    #[arg(long, value_name = "duration", default_value = "10s", value_parser = humantime::parse_duration)]
    interval: Duration,
}

fn main() {
    let opt = WorkerOpt::parse();
    run_block_on(report_loop(opt.interval));
}

async fn report_loop(interval: Duration) {
    loop {
        // unset reads as empty
        let value = env::var(ENV_VAR_NAME).unwrap_or_default();
        println!("{}", report_line(&value));
        sleep(interval).await;
    }
}

fn report_line(value: &str) -> String {
    format!("Environment Variable Value: {value}")
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_report_line() {
        assert_eq!(
            report_line("instance-1"),
            "Environment Variable Value: instance-1"
        );
        assert_eq!(report_line(""), "Environment Variable Value: ");
    }

    #[test]
    fn test_default_interval() {
        let opt = WorkerOpt::try_parse_from(["programa"]).expect("parse");
        assert_eq!(opt.interval, Duration::from_secs(10));
    }
}
