use serde::Deserialize;

/// Options controlling how a supergraph is compiled into a query plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Fail when a field of an entity cannot be attributed to any subgraph, instead of leaving
    /// it out of the plan with a warning.
    ///
    /// Federation lets a field go unannotated only when its type has a single owner, so an
    /// unowned field on a multi-owner entity usually means the supergraph was hand-edited.
    ///
    /// Defaults to false.
    pub strict_ownership: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_options_take_their_default() {
        let config: PlannerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert!(!config.strict_ownership);
    }

    #[test]
    fn reads_strict_ownership() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{ "strict_ownership": true }"#).unwrap();
        assert!(config.strict_ownership);
    }

    #[test]
    fn unknown_options_are_rejected() {
        let error = serde_json::from_str::<PlannerConfig>(r#"{ "strict": true }"#).unwrap_err();
        assert!(error.to_string().contains("unknown field `strict`"));
    }
}
