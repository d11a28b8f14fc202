//! `@supports` rules and boolean feature conditions (CSS 3.0).

use std::hash::{Hash, Hasher};

use super::declaration::Declaration;
use super::stylesheet::TopLevelRule;
use super::SourceLocation;

/// Boolean operator between condition members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupportsOperator {
    And,
    Or,
}

impl SupportsOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            SupportsOperator::And => "and",
            SupportsOperator::Or => "or",
        }
    }
}

/// One member of a supports condition.
///
/// The condition of `@supports not ((a: b) and (c: d))` is
/// `[Negation(Nested([Declaration(a: b), Operator(And), Declaration(c: d)]))]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SupportsConditionMember {
    /// `(prop: value)`
    Declaration(Declaration),
    /// `not <member>`
    Negation(Box<SupportsConditionMember>),
    /// Parenthesized member group.
    Nested(Vec<SupportsConditionMember>),
    Operator(SupportsOperator),
}

/// `@supports <condition> { <rules> }`
#[derive(Clone, Debug, Default, Eq)]
pub struct SupportsRule {
    condition: Vec<SupportsConditionMember>,
    rules: Vec<TopLevelRule>,
    location: Option<SourceLocation>,
}

impl SupportsRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_condition_member(&mut self, member: SupportsConditionMember) -> &mut Self {
        self.condition.push(member);
        self
    }

    pub fn add_rule(&mut self, rule: TopLevelRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn condition(&self) -> &[SupportsConditionMember] {
        &self.condition
    }

    pub fn rules(&self) -> &[TopLevelRule] {
        &self.rules
    }

    pub fn all_rules(&self) -> Vec<TopLevelRule> {
        self.rules.clone()
    }

    pub fn source_location(&self) -> Option<SourceLocation> {
        self.location
    }

    pub fn set_source_location(&mut self, location: SourceLocation) {
        self.location = Some(location);
    }
}

impl PartialEq for SupportsRule {
    fn eq(&self, other: &Self) -> bool {
        self.condition == other.condition && self.rules == other.rules
    }
}

impl Hash for SupportsRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.condition.hash(state);
        self.rules.hash(state);
    }
}
