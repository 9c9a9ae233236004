//! Edge trait detection
//!
//! A [`TraitPolicy`] decides which [`EdgeTrait`]s a dependency declaration
//! contributes to the edges it produces.

use std::collections::BTreeSet;

use super::types::EdgeTrait;
use crate::project::DependencyDeclaration;

pub trait TraitPolicy {
    fn traits(&self, declaration: &DependencyDeclaration) -> BTreeSet<EdgeTrait>;
}

/// Assigns a trait when the configuration name ends with a suffix, ignoring
/// case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTraitRule {
    suffix: String,
    edge_trait: EdgeTrait,
}

impl SuffixTraitRule {
    pub fn new(suffix: &str, edge_trait: EdgeTrait) -> Self {
        Self {
            suffix: suffix.to_lowercase(),
            edge_trait,
        }
    }

    /// `implementation`, `testImplementation`, `debugImplementation`, ...
    /// are weak
    pub fn implementation() -> Self {
        Self::new("implementation", EdgeTrait::Weak)
    }
}

impl Default for SuffixTraitRule {
    fn default() -> Self {
        Self::implementation()
    }
}

impl TraitPolicy for SuffixTraitRule {
    fn traits(&self, declaration: &DependencyDeclaration) -> BTreeSet<EdgeTrait> {
        let mut traits = BTreeSet::new();
        if declaration
            .configuration()
            .to_lowercase()
            .ends_with(&self.suffix)
        {
            traits.insert(self.edge_trait);
        }
        traits
    }
}

impl<P: TraitPolicy + ?Sized> TraitPolicy for Box<P> {
    fn traits(&self, declaration: &DependencyDeclaration) -> BTreeSet<EdgeTrait> {
        (**self).traits(declaration)
    }
}

/// Union of every policy in the list
impl<P: TraitPolicy> TraitPolicy for Vec<P> {
    fn traits(&self, declaration: &DependencyDeclaration) -> BTreeSet<EdgeTrait> {
        self.iter()
            .flat_map(|policy| policy.traits(declaration))
            .collect()
    }
}
