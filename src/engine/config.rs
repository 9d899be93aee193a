/// Settings for stoichiometry-driven job enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobConfig {
    /// Only keep combinations where every entity has the same copy count.
    pub uniform_only: bool,
}

/// Settings for multiset enumeration over sequence ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultisetConfig {
    /// Smallest number of chains in a combination.
    pub min_size: usize,
    /// Largest number of chains in a combination.
    pub max_size: usize,
}

impl Default for MultisetConfig {
    fn default() -> Self {
        Self {
            min_size: 2,
            max_size: 6,
        }
    }
}

/// How target chain identifiers are chosen when matching template chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetPolicy {
    /// Skip every character already used by a template label.
    #[default]
    Disjoint,
    /// Take characters in order from `A`, even if template labels use them.
    Sequential,
}
