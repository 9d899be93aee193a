use stoich_forge::{JobConfig, MultisetConfig};

use crate::cli::{JsonArgs, MultisetArgs};

pub fn build_job_config(args: &JsonArgs) -> JobConfig {
    JobConfig {
        uniform_only: args.uniform_copies,
    }
}

pub fn build_multiset_config(args: &MultisetArgs) -> MultisetConfig {
    MultisetConfig {
        min_size: args.min_size,
        max_size: args.max_size,
    }
}
