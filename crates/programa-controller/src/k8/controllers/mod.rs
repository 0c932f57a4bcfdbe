mod programa_deployment;

pub use programa_deployment::ProgramADeploymentController;
pub use programa_deployment::ReconcileStats;
