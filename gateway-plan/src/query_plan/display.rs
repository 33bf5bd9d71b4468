use std::fmt;

use super::FieldPlan;
use super::QueryPlan;
use super::TypePlanEntry;
use crate::display_helpers::DisplayList;
use crate::display_helpers::State;
use crate::display_helpers::write_indented_lines;

impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut state = State::new(f);
        state.write("QueryPlan {")?;
        write_indented_lines(&mut state, self.entries.values(), |state, entry| {
            entry.write_indented(state)
        })?;
        state.write("}")
    }
}

impl TypePlanEntry {
    fn write_indented(&self, state: &mut State<'_, '_>) -> fmt::Result {
        let keys = self
            .keys_by_subgraph
            .iter()
            .map(|(graph, key)| format!("{graph}: {key}"));
        write!(state, "{} {}", self.type_name, DisplayList(keys))?;
        if self.fields.is_empty() {
            return Ok(());
        }
        state.write(" {")?;
        write_indented_lines(state, &self.fields, |state, field| state.write(field))?;
        state.write("}")
    }
}

impl fmt::Display for TypePlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(&mut State::new(f))
    }
}

impl fmt::Display for FieldPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} from {}", self.name, self.ty, self.owning_subgraph)
    }
}
