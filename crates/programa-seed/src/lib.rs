//!
//! # ProgramA seeding
//!
//! Creates one ProgramA resource per env value, named `programa-<n>`.
//!
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};

use fluvio_future::timer::sleep;
use k8_client::load_and_share;
use k8_client::meta_client::MetadataClient;
use k8_types::{InputK8Obj, InputObjectMeta};

use programa_metadata::ProgramASpec;

const NAME_PREFIX: &str = "programa";

#[derive(Debug, Parser)]
#[command(name = "programa-seed", about = "Create sample ProgramA resources")]
pub struct SeedOpt {
    /// k8 namespace to create ProgramA resources in
    #[arg(short = 'n', long = "namespace", value_name = "namespace", default_value = "default")]
    pub namespace: String,

    /// envVarValue of each instance, one instance per value
    #[arg(
        long = "value",
        value_name = "value",
        value_delimiter = ',',
        default_values = ["instance-1", "instance-2", "instance-3"]
    )]
    pub values: Vec<String>,

    /// wait after each created instance
    #[arg(long, value_name = "duration", default_value = "2s", value_parser = humantime::parse_duration)]
    pub delay: Duration,
}

impl SeedOpt {
    /// (name, envVarValue) of every instance to create
    pub fn instances(&self) -> Vec<(String, &str)> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (format!("{NAME_PREFIX}-{}", index + 1), value.as_str()))
            .collect()
    }
}

pub fn program_input(name: &str, namespace: &str, env_var_value: &str) -> InputK8Obj<ProgramASpec> {
    let metadata = InputObjectMeta {
        name: name.to_owned(),
        namespace: namespace.to_owned(),
        ..Default::default()
    };
    InputK8Obj::new(ProgramASpec::with_env_var_value(env_var_value), metadata)
}

/// Create every instance, moving on when one fails.
/// Returns how many were created.
pub async fn seed_programs(opt: &SeedOpt) -> Result<usize> {
    let client = load_and_share()?;
    let mut created = 0;

    for (name, env_var_value) in opt.instances() {
        let input = program_input(&name, &opt.namespace, env_var_value);
        debug!(?input, "creating ProgramA");

        match client.create_item(input).await {
            Ok(program) => {
                println!(
                    "Created ProgramA instance: {} with env value: {}",
                    program.metadata.name, env_var_value
                );
                created += 1;
            }
            Err(err) => {
                error!(%name, %err, "error creating ProgramA instance");
                continue;
            }
        }

        sleep(opt.delay).await;
    }

    Ok(created)
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_default_instances() {
        let opt = SeedOpt::try_parse_from(["programa-seed"]).expect("parse");
        assert_eq!(opt.namespace, "default");
        assert_eq!(opt.delay, Duration::from_secs(2));
        assert_eq!(
            opt.instances(),
            vec![
                ("programa-1".to_owned(), "instance-1"),
                ("programa-2".to_owned(), "instance-2"),
                ("programa-3".to_owned(), "instance-3"),
            ]
        );
    }

    #[test]
    fn test_custom_values() {
        let opt = SeedOpt::try_parse_from(["programa-seed", "-n", "apps", "--value", "a,b"])
            .expect("parse");
        assert_eq!(opt.namespace, "apps");
        assert_eq!(
            opt.instances(),
            vec![("programa-1".to_owned(), "a"), ("programa-2".to_owned(), "b")]
        );
    }

    #[test]
    fn test_program_input() {
        let input = program_input("programa-1", "default", "instance-1");
        let encoded = serde_json::to_value(&input).expect("encode");
        assert_eq!(encoded["apiVersion"], "crds.example.com/v1");
        assert_eq!(encoded["kind"], "ProgramA");
        assert_eq!(encoded["metadata"]["name"], "programa-1");
        assert_eq!(encoded["metadata"]["namespace"], "default");
        assert_eq!(encoded["spec"]["envVarValue"], "instance-1");
    }
}
