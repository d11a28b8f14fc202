//! Plain style rules: selectors plus a declaration block.

use std::hash::{Hash, Hasher};

use crate::error::AstError;

use super::declaration::{Declaration, DeclarationContainer};
use super::selector::Selector;
use super::SourceLocation;

/// `sel1, sel2 { declarations }`
#[derive(Clone, Debug, Default, Eq)]
pub struct StyleRule {
    selectors: Vec<Selector>,
    declarations: DeclarationContainer,
    location: Option<SourceLocation>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_selector(&mut self, selector: Selector) -> &mut Self {
        self.selectors.push(selector);
        self
    }

    pub fn remove_selector(&mut self, index: usize) -> Result<Selector, AstError> {
        if index >= self.selectors.len() {
            return Err(AstError::IndexOutOfBounds {
                index,
                len: self.selectors.len(),
            });
        }
        Ok(self.selectors.remove(index))
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn all_selectors(&self) -> Vec<Selector> {
        self.selectors.clone()
    }

    pub fn add_declaration(&mut self, declaration: Declaration) -> &mut Self {
        self.declarations.add(declaration);
        self
    }

    pub fn declarations(&self) -> &DeclarationContainer {
        &self.declarations
    }

    pub fn declarations_mut(&mut self) -> &mut DeclarationContainer {
        &mut self.declarations
    }

    pub fn source_location(&self) -> Option<SourceLocation> {
        self.location
    }

    pub fn set_source_location(&mut self, location: SourceLocation) {
        self.location = Some(location);
    }
}

impl PartialEq for StyleRule {
    fn eq(&self, other: &Self) -> bool {
        self.selectors == other.selectors && self.declarations == other.declarations
    }
}

impl Hash for StyleRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.selectors.hash(state);
        self.declarations.hash(state);
    }
}
