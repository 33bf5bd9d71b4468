//! The static per-entity ownership table produced from a supergraph.

use apollo_compiler::Name;
use indexmap::IndexMap;
use serde::Serialize;

use crate::diagnostics::PlanWarning;
use crate::types::TypeDescriptor;

pub(crate) mod builder;
mod display;

/// One entry per entity, in schema declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    entries: IndexMap<Name, TypePlanEntry>,
    warnings: Vec<PlanWarning>,
}

impl QueryPlan {
    pub fn get(&self, type_name: &str) -> Option<&TypePlanEntry> {
        self.entries.get(type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypePlanEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fields left out of the plan, in the order they were encountered.
    pub fn warnings(&self) -> &[PlanWarning] {
        &self.warnings
    }
}

impl Serialize for QueryPlan {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypePlanEntry {
    pub type_name: Name,
    /// Key field (or field set) of the entity, per subgraph enum value claiming it.
    pub keys_by_subgraph: IndexMap<Name, String>,
    /// Owned fields in declaration order. Key fields are not repeated here.
    pub fields: Vec<FieldPlan>,
}

impl TypePlanEntry {
    pub fn key(&self, graph: &str) -> Option<&str> {
        self.keys_by_subgraph.get(graph).map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&FieldPlan> {
        self.fields.iter().find(|field| field.name.as_str() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPlan {
    pub name: Name,
    #[serde(rename = "renderedType")]
    pub ty: TypeDescriptor,
    /// The `join__Graph` enum value of the subgraph resolving this field.
    pub owning_subgraph: Name,
}
