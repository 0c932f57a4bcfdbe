//!
//! # ProgramA Deployment
//!
//! Maps a validated ProgramA object onto the Deployment that runs it.
//! Pure: the same instance always yields the same Deployment.
//!
use std::collections::HashMap;

use k8_types::{
    Env, InputK8Obj, InputObjectMeta, LabelProvider, LabelSelector, TemplateMeta, TemplateSpec,
};
use k8_types::core::pod::{ContainerSpec, ImagePullPolicy, PodSpec};

use programa_metadata::{ENV_VAR_NAME, ProgramInstance};

pub use k8_types::app::deployment::DeploymentSpec as K8DeploymentSpec;

pub const DEPLOYMENT_SUFFIX: &str = "-deployment";
pub const APP_LABEL: &str = "app";
pub const CONTAINER_NAME: &str = "programa";
pub const CONTAINER_IMAGE: &str = "programa:latest";

pub fn deployment_name(program_name: &str) -> String {
    format!("{program_name}{DEPLOYMENT_SUFFIX}")
}

pub fn generate_deployment_spec(instance: &ProgramInstance) -> K8DeploymentSpec {
    let name = instance.name();

    let template = TemplateSpec {
        metadata: Some(TemplateMeta::default().set_labels(vec![(APP_LABEL, name)])),
        spec: PodSpec {
            containers: vec![ContainerSpec {
                name: CONTAINER_NAME.to_owned(),
                image: Some(CONTAINER_IMAGE.to_owned()),
                // image is loaded into the cluster nodes directly
                image_pull_policy: Some(ImagePullPolicy::Never),
                env: vec![Env::key_value(ENV_VAR_NAME, instance.env_var_value())],
                ..Default::default()
            }],
            ..Default::default()
        },
    };

    let mut match_labels = HashMap::new();
    match_labels.insert(APP_LABEL.to_owned(), name.to_owned());

    K8DeploymentSpec {
        replicas: Some(1),
        template,
        selector: LabelSelector { match_labels },
        ..Default::default()
    }
}

/// Deployment ready to be submitted for creation
pub fn generate_deployment(instance: &ProgramInstance) -> InputK8Obj<K8DeploymentSpec> {
    let metadata = InputObjectMeta {
        name: deployment_name(instance.name()),
        namespace: instance.namespace().to_owned(),
        ..Default::default()
    };

    InputK8Obj::new(generate_deployment_spec(instance), metadata)
}
