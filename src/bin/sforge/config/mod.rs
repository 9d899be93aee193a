mod jobs;
mod workflow;

pub use jobs::{build_job_config, build_multiset_config};
pub use workflow::load_workflow_config;
