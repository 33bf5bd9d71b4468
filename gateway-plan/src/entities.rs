use apollo_compiler::Name;
use apollo_compiler::Schema;
use apollo_compiler::schema::ExtendedType;

use crate::join_spec::INTROSPECTION_PREFIX;
use crate::join_spec::ROOT_OPERATION_TYPE_NAMES;

/// The object types tracked by the query plan, in schema declaration order.
///
/// Root operation types and introspection types are never entities. Every other component asks
/// the catalog rather than filtering object types itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityCatalog {
    names: Vec<Name>,
}

impl EntityCatalog {
    pub fn new(schema: &Schema) -> Self {
        let names = schema
            .types
            .iter()
            .filter(|(_, ty)| matches!(ty, ExtendedType::Object(_)))
            .map(|(name, _)| name)
            .filter(|name| is_entity_name(name))
            .cloned()
            .collect();
        Self { names }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.names.iter().any(|name| name.as_str() == type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Name> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn is_entity_name(name: &Name) -> bool {
    !name.starts_with(INTROSPECTION_PREFIX) && !ROOT_OPERATION_TYPE_NAMES.contains(name)
}
