//! `@keyframes` rules (CSS 3.0), vendor prefixes included.

use std::hash::{Hash, Hasher};

use super::declaration::{Declaration, DeclarationContainer};
use super::SourceLocation;

/// One block inside a keyframes rule: `from, 50% { declarations }`.
///
/// Selectors are the raw keywords/percentages (`from`, `to`, `25%`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyframesBlock {
    selectors: Vec<String>,
    declarations: DeclarationContainer,
}

impl KeyframesBlock {
    pub fn new(selectors: Vec<String>) -> Self {
        Self {
            selectors,
            declarations: DeclarationContainer::new(),
        }
    }

    pub fn add_declaration(&mut self, declaration: Declaration) -> &mut Self {
        self.declarations.add(declaration);
        self
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn declarations(&self) -> &DeclarationContainer {
        &self.declarations
    }

    pub fn declarations_mut(&mut self) -> &mut DeclarationContainer {
        &mut self.declarations
    }
}

/// `@keyframes name { blocks }` or a vendor-prefixed variant.
///
/// `declaration` is the at-keyword exactly as written, e.g. `@keyframes`
/// or `@-webkit-keyframes`.
#[derive(Clone, Debug, Eq)]
pub struct KeyframesRule {
    declaration: String,
    name: String,
    blocks: Vec<KeyframesBlock>,
    location: Option<SourceLocation>,
}

impl KeyframesRule {
    pub fn new(declaration: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            name: name.into(),
            blocks: Vec::new(),
            location: None,
        }
    }

    pub fn add_block(&mut self, block: KeyframesBlock) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// The at-keyword as written (`@keyframes`, `@-webkit-keyframes`, ...).
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// The animation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blocks(&self) -> &[KeyframesBlock] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut Vec<KeyframesBlock> {
        &mut self.blocks
    }

    pub fn source_location(&self) -> Option<SourceLocation> {
        self.location
    }

    pub fn set_source_location(&mut self, location: SourceLocation) {
        self.location = Some(location);
    }
}

impl PartialEq for KeyframesRule {
    fn eq(&self, other: &Self) -> bool {
        self.declaration == other.declaration
            && self.name == other.name
            && self.blocks == other.blocks
    }
}

impl Hash for KeyframesRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.declaration.hash(state);
        self.name.hash(state);
        self.blocks.hash(state);
    }
}
