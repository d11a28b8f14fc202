//! Declarations and the shared declaration container.
//!
//! [`DeclarationContainer`] is the one ordered collection used by every
//! declaration host (style rules, `@page`, `@font-face`, keyframes blocks,
//! `@viewport`), so add/remove/lookup semantics are identical everywhere.

use std::hash::{Hash, Hasher};

use crate::error::AstError;

use super::expression::Expression;
use super::SourceLocation;

/// A single `property: expression [!important]` pair.
///
/// The property name is lower-cased on construction; lookups by property are
/// case-insensitive as a consequence.
#[derive(Clone, Debug, Eq)]
pub struct Declaration {
    property: String,
    expression: Expression,
    important: bool,
    location: Option<SourceLocation>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, expression: Expression) -> Result<Self, AstError> {
        Self::with_importance(property, expression, false)
    }

    pub fn with_importance(
        property: impl Into<String>,
        expression: Expression,
        important: bool,
    ) -> Result<Self, AstError> {
        let property = property.into();
        if property.is_empty() {
            return Err(AstError::EmptyProperty);
        }
        Ok(Self {
            property: property.to_ascii_lowercase(),
            expression,
            important,
            location: None,
        })
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn expression_mut(&mut self) -> &mut Expression {
        &mut self.expression
    }

    pub fn is_important(&self) -> bool {
        self.important
    }

    pub fn set_important(&mut self, important: bool) {
        self.important = important;
    }

    pub fn source_location(&self) -> Option<SourceLocation> {
        self.location
    }

    /// Assigned once by the builder; not part of equality.
    pub fn set_source_location(&mut self, location: SourceLocation) {
        self.location = Some(location);
    }
}

impl PartialEq for Declaration {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property
            && self.expression == other.expression
            && self.important == other.important
    }
}

impl Hash for Declaration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.property.hash(state);
        self.expression.hash(state);
        self.important.hash(state);
    }
}

/// Ordered collection of declarations shared by every declaration host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeclarationContainer {
    declarations: Vec<Declaration>,
}

impl DeclarationContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, declaration: Declaration) -> &mut Self {
        self.declarations.push(declaration);
        self
    }

    /// Insert at a position; the index must be within `0..=len`.
    pub fn add_at(&mut self, index: usize, declaration: Declaration) -> Result<(), AstError> {
        if index > self.declarations.len() {
            return Err(AstError::IndexOutOfBounds {
                index,
                len: self.declarations.len(),
            });
        }
        self.declarations.insert(index, declaration);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Declaration, AstError> {
        if index >= self.declarations.len() {
            return Err(AstError::IndexOutOfBounds {
                index,
                len: self.declarations.len(),
            });
        }
        Ok(self.declarations.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Declaration> {
        self.declarations.get(index)
    }

    /// All declarations whose property matches, case-insensitively.
    pub fn of_property(&self, property: &str) -> Vec<&Declaration> {
        let wanted = property.to_ascii_lowercase();
        self.declarations
            .iter()
            .filter(|d| d.property() == wanted)
            .collect()
    }

    pub fn first_of_property(&self, property: &str) -> Option<&Declaration> {
        let wanted = property.to_ascii_lowercase();
        self.declarations.iter().find(|d| d.property() == wanted)
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Defensive snapshot: mutations after the call are not observable
    /// through the returned vector.
    pub fn all_declarations(&self) -> Vec<Declaration> {
        self.declarations.clone()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
