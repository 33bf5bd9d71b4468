use apollo_compiler::Name;
use indexmap::IndexMap;
use serde::Serialize;

/// One backing service of the supergraph, declared by a `join__Graph` enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subgraph {
    /// The `join__Graph` enum value, e.g. `ASTRONAUTS`.
    #[serde(rename = "graph")]
    pub enum_key: Name,
    /// The subgraph name given by `@join__graph(name:)`.
    pub name: String,
    pub url: String,
}

/// All subgraphs of a supergraph, keyed by enum value in declaration order.
///
/// Empty when the supergraph defines no `join__Graph` enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubgraphRegistry {
    subgraphs: IndexMap<Name, Subgraph>,
}

impl SubgraphRegistry {
    pub(crate) fn new(subgraphs: IndexMap<Name, Subgraph>) -> Self {
        Self { subgraphs }
    }

    pub fn get(&self, enum_key: &str) -> Option<&Subgraph> {
        self.subgraphs.get(enum_key)
    }

    pub fn contains(&self, enum_key: &str) -> bool {
        self.subgraphs.contains_key(enum_key)
    }

    /// Return an iterator over subgraphs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Subgraph> {
        self.subgraphs.values()
    }

    pub fn len(&self) -> usize {
        self.subgraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subgraphs.is_empty()
    }
}

impl Serialize for SubgraphRegistry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.subgraphs.values())
    }
}
