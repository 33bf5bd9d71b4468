use apollo_compiler::Name;
use displaydoc::Display;
use serde::Serialize;

/// A condition that did not stop plan generation but left something out of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
#[non_exhaustive]
pub enum PlanWarning {
    /// no subgraph owns field `{type_name}.{field_name}`, it is left out of the plan
    UnresolvedFieldOwnership { type_name: Name, field_name: Name },
}

#[cfg(test)]
mod tests {
    use apollo_compiler::name;

    use super::*;

    #[test]
    fn serializes_with_a_kind_tag() {
        let warning = PlanWarning::UnresolvedFieldOwnership {
            type_name: name!("Astronaut"),
            field_name: name!("nickname"),
        };
        insta::assert_json_snapshot!(warning, @r###"
        {
          "kind": "UnresolvedFieldOwnership",
          "typeName": "Astronaut",
          "fieldName": "nickname"
        }
        "###);
        assert_eq!(
            warning.to_string(),
            "no subgraph owns field `Astronaut.nickname`, it is left out of the plan"
        );
    }
}
