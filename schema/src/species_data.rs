use crate::{NamedResource, ResourceLink};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

/// Supplementary per-entry record: color, flavor text and the evolution chain link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub color: NamedResource,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: ResourceLink,
}

/// One link of an evolution chain. The wire format allows several successors;
/// all of them are kept even though the pipeline only follows the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// The successor on the primary branch, if any.
    pub fn primary_successor(&self) -> Option<&EvolutionNode> {
        self.evolves_to.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    #[serde(default)]
    pub id: u32,
    pub chain: EvolutionNode,
}
