//! Declarative rule files.
//!
//! A rule file is JSON:
//!
//! ```json
//! {
//!   "rules": [
//!     {
//!       "description": "Controllers must not reach into repositories",
//!       "that": [{ "reside_in_namespace": "App.Controllers" }],
//!       "should": [{ "not": { "have_dependency_on": "App.Repositories" } }]
//!     }
//!   ]
//! }
//! ```
//!
//! Clauses within `that` (and within `should`) are ANDed. `or_that` and
//! `or_should` add alternative groups.

use std::path::Path;

use archgate_core::catalog::TypeCatalog;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::assertion::{Assertion, Condition};
use crate::predicate::Predicate;
use crate::rule::Rule;
use crate::selector::Selector;
use crate::types::RuleError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Select every type; `that` must then be empty.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub all_types: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub that: Vec<ClauseDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub or_that: Vec<Vec<ClauseDef>>,
    #[serde(default)]
    pub should: Vec<ClauseDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub or_should: Vec<Vec<ClauseDef>>,
}

/// A predicate, or `{"not": predicate}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClauseDef {
    Negated { not: Predicate },
    Plain(Predicate),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Negated {
    not: Predicate,
}

// Dispatch on the `not` key so errors name the offending predicate or field.
impl<'de> Deserialize<'de> for ClauseDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.as_object().is_some_and(|map| map.contains_key("not")) {
            serde_json::from_value::<Negated>(value)
                .map(|negated| ClauseDef::Negated { not: negated.not })
                .map_err(|e| de::Error::custom(format!("negated clause: {e}")))
        } else {
            serde_json::from_value::<Predicate>(value)
                .map(ClauseDef::Plain)
                .map_err(|e| de::Error::custom(format!("clause: {e}")))
        }
    }
}

impl ClauseDef {
    fn into_parts(self) -> (Predicate, bool) {
        match self {
            ClauseDef::Negated { not } => (not, true),
            ClauseDef::Plain(p) => (p, false),
        }
    }
}

impl RuleFile {
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        serde_json::from_str(json).map_err(|e| RuleError::invalid(format!("rule file: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let json = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded rule file");
        Self::from_json(&json)
    }

    /// Compile every definition, stopping at the first invalid one.
    pub fn compile_all(&self, catalog: &TypeCatalog) -> Result<Vec<Rule>, RuleError> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, def)| {
                def.compile(catalog).map_err(|e| match e {
                    RuleError::InvalidRuleDefinition(msg) => {
                        RuleError::invalid(format!("rule #{}: {msg}", i + 1))
                    }
                    other => other,
                })
            })
            .collect()
    }
}

impl RuleDefinition {
    pub fn compile(&self, catalog: &TypeCatalog) -> Result<Rule, RuleError> {
        let selector = self.selector()?;
        let assertion = self.assertion()?;
        Rule::new(catalog, selector, assertion, self.description.clone())
    }

    fn selector(&self) -> Result<Selector, RuleError> {
        if self.all_types {
            if !self.that.is_empty() || !self.or_that.is_empty() {
                return Err(RuleError::invalid("`all_types` cannot be combined with `that`"));
            }
            return Ok(Selector::All);
        }
        if self.that.is_empty() {
            return Err(RuleError::invalid(
                "no `that` clauses; set `all_types: true` to select every type",
            ));
        }
        let groups = std::iter::once(&self.that)
            .chain(&self.or_that)
            .map(|group| {
                group
                    .iter()
                    .cloned()
                    .map(|clause| match clause.into_parts() {
                        (p, true) => Selector::Is(p).not(),
                        (p, false) => Selector::Is(p),
                    })
                    .reduce(Selector::and)
                    .ok_or_else(|| RuleError::invalid("empty `or_that` group"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        groups
            .into_iter()
            .reduce(Selector::or)
            .ok_or_else(|| RuleError::invalid("no `that` clauses"))
    }

    fn assertion(&self) -> Result<Assertion, RuleError> {
        if self.should.is_empty() {
            return Err(RuleError::invalid("no `should` conditions"));
        }
        let groups = std::iter::once(&self.should)
            .chain(&self.or_should)
            .map(|group| {
                group
                    .iter()
                    .cloned()
                    .map(|clause| match clause.into_parts() {
                        (p, true) => Condition::negate(p),
                        (p, false) => Condition::new(p),
                    })
                    .collect()
            })
            .collect();
        Assertion::new(groups)
    }
}
