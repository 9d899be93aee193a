use stoich_forge::TargetPolicy as LibTargetPolicy;

use crate::cli;

impl From<cli::TargetPolicy> for LibTargetPolicy {
    fn from(p: cli::TargetPolicy) -> Self {
        match p {
            cli::TargetPolicy::Disjoint => Self::Disjoint,
            cli::TargetPolicy::Sequential => Self::Sequential,
        }
    }
}

pub fn policy_display_name(policy: cli::TargetPolicy) -> &'static str {
    match policy {
        cli::TargetPolicy::Disjoint => "disjoint (a-z, A-Z minus template letters)",
        cli::TargetPolicy::Sequential => "sequential (A-Z, a-z from A)",
    }
}

pub fn copies_display_name(uniform: bool) -> &'static str {
    if uniform { "uniform only" } else { "all" }
}
