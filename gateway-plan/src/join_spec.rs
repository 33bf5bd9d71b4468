//! Names defined by the join spec (<https://specs.apollo.dev/join>) as they appear in a composed
//! supergraph, plus the handful of GraphQL names the planner treats specially.
//!
//! Every other module reads directive, argument and type names from here instead of spelling
//! them out.

use apollo_compiler::Name;
use apollo_compiler::name;

pub(crate) const JOIN_GRAPH_ENUM_NAME: Name = name!("join__Graph");
pub(crate) const JOIN_GRAPH_DIRECTIVE_NAME: Name = name!("join__graph");
pub(crate) const JOIN_TYPE_DIRECTIVE_NAME: Name = name!("join__type");
pub(crate) const JOIN_FIELD_DIRECTIVE_NAME: Name = name!("join__field");

pub(crate) const JOIN_NAME_ARGUMENT_NAME: Name = name!("name");
pub(crate) const JOIN_URL_ARGUMENT_NAME: Name = name!("url");
pub(crate) const JOIN_GRAPH_ARGUMENT_NAME: Name = name!("graph");
pub(crate) const JOIN_KEY_ARGUMENT_NAME: Name = name!("key");
pub(crate) const JOIN_EXTERNAL_ARGUMENT_NAME: Name = name!("external");
pub(crate) const JOIN_USEROVERRIDDEN_ARGUMENT_NAME: Name = name!("usedOverridden");

pub(crate) const QUERY_TYPE_NAME: Name = name!("Query");
pub(crate) const MUTATION_TYPE_NAME: Name = name!("Mutation");
pub(crate) const SUBSCRIPTION_TYPE_NAME: Name = name!("Subscription");
pub(crate) const ROOT_OPERATION_TYPE_NAMES: [Name; 3] =
    [QUERY_TYPE_NAME, MUTATION_TYPE_NAME, SUBSCRIPTION_TYPE_NAME];

pub(crate) const INTROSPECTION_PREFIX: &str = "__";

pub(crate) const ID_SCALAR_NAME: Name = name!("ID");

pub(crate) const DEPRECATED_DIRECTIVE_NAME: Name = name!("deprecated");
pub(crate) const DEPRECATED_REASON_ARGUMENT_NAME: Name = name!("reason");
pub(crate) const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";
