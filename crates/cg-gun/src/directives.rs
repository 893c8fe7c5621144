//! Generator decay-directive groups.
//!
//! Directives are plain command strings of the shape
//! `"<code>:<key> = <value>"`, passed verbatim to the engine. A group is
//! declared by name and stays inert unless referenced from the active set.

use cg_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A named, declarable-but-optional collection of generator commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveGroup {
    /// Group name, referenced from `parameterSets`.
    pub name: String,
    /// Commands applied verbatim when the group is active.
    pub commands: Vec<String>,
}

impl DirectiveGroup {
    /// Create a group from a name and command strings.
    pub fn new(name: impl Into<String>, commands: &[&str]) -> Self {
        Self { name: name.into(), commands: commands.iter().map(|c| c.to_string()).collect() }
    }
}

/// Surface-syntax check for one directive command.
///
/// The head (before `=`) must contain exactly one `:` separating a
/// non-empty object code from a non-empty setting name, and exactly one
/// `=` must precede a non-empty value. Command semantics are the
/// engine's business and are not interpreted here.
pub fn validate_directive(command: &str) -> Result<()> {
    let cmd = command.trim();
    if cmd.is_empty() {
        return Err(Error::Validation("directive command is empty".to_string()));
    }
    if cmd.matches('=').count() != 1 {
        return Err(Error::Validation(format!(
            "directive {:?} must contain exactly one '='",
            command
        )));
    }
    let (head, value) = cmd.split_once('=').expect("one '=' present");
    if head.matches(':').count() != 1 {
        return Err(Error::Validation(format!(
            "directive {:?} must contain exactly one ':' before the '='",
            command
        )));
    }
    let (code, key) = head.split_once(':').expect("one ':' present");
    if code.trim().is_empty() {
        return Err(Error::Validation(format!("directive {:?} has an empty object code", command)));
    }
    if key.trim().is_empty() {
        return Err(Error::Validation(format!("directive {:?} has an empty setting name", command)));
    }
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("directive {:?} has an empty value", command)));
    }
    Ok(())
}

/// Validate a set of declared groups: unique names, well-formed commands.
pub fn validate_groups(groups: &[DirectiveGroup]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for group in groups {
        if group.name.trim().is_empty() {
            return Err(Error::Validation("decay-settings group with empty name".to_string()));
        }
        if !seen.insert(group.name.as_str()) {
            return Err(Error::Validation(format!(
                "duplicate decay-settings group {:?}",
                group.name
            )));
        }
        for command in &group.commands {
            validate_directive(command)?;
        }
    }
    Ok(())
}

/// Resolve the active set against the declared groups.
///
/// Returns the group index for every name in `parameter_sets`, in order.
/// A name that resolves to no declared group is a validation failure,
/// never a silent no-op.
pub fn resolve_active(groups: &[DirectiveGroup], parameter_sets: &[String]) -> Result<Vec<usize>> {
    parameter_sets
        .iter()
        .map(|name| {
            groups.iter().position(|g| &g.name == name).ok_or_else(|| {
                Error::Validation(format!("parameterSets references undeclared group {:?}", name))
            })
        })
        .collect()
}
