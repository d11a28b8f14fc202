//! `@page`, `@font-face`, `@viewport`, and unknown at-rules.

use std::hash::{Hash, Hasher};

use super::declaration::{Declaration, DeclarationContainer};
use super::SourceLocation;

macro_rules! declaration_block_rule {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Default, Eq)]
        pub struct $name {
            declarations: DeclarationContainer,
            location: Option<SourceLocation>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
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

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.declarations == other.declarations
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.declarations.hash(state);
            }
        }
    };
}

declaration_block_rule!(
    /// `@font-face { declarations }` (CSS 3.0)
    FontFaceRule
);

declaration_block_rule!(
    /// `@viewport { declarations }` (CSS 3.0)
    ViewportRule
);

/// `@page [:pseudo] { declarations }`
///
/// The pseudo page selector is stored as written, colon included
/// (`:first`, `:left`).
#[derive(Clone, Debug, Default, Eq)]
pub struct PageRule {
    pseudo: Option<String>,
    declarations: DeclarationContainer,
    location: Option<SourceLocation>,
}

impl PageRule {
    pub fn new(pseudo: Option<String>) -> Self {
        Self {
            pseudo,
            declarations: DeclarationContainer::new(),
            location: None,
        }
    }

    pub fn pseudo(&self) -> Option<&str> {
        self.pseudo.as_deref()
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

impl PartialEq for PageRule {
    fn eq(&self, other: &Self) -> bool {
        self.pseudo == other.pseudo && self.declarations == other.declarations
    }
}

impl Hash for PageRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pseudo.hash(state);
        self.declarations.hash(state);
    }
}

/// An at-rule the grammar does not recognize, captured structurally so the
/// document stays round-trippable.
///
/// `name` is the at-keyword as written (`@-custom-thing`), `parameter_text`
/// everything between the name and the body, and `body_text` the raw
/// brace-delimited body (empty for `;`-terminated rules).
#[derive(Clone, Debug, Eq)]
pub struct UnknownRule {
    name: String,
    parameter_text: String,
    body_text: String,
    location: Option<SourceLocation>,
}

impl UnknownRule {
    pub fn new(
        name: impl Into<String>,
        parameter_text: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parameter_text: parameter_text.into(),
            body_text: body_text.into(),
            location: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_text(&self) -> &str {
        &self.parameter_text
    }

    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    pub fn source_location(&self) -> Option<SourceLocation> {
        self.location
    }

    pub fn set_source_location(&mut self, location: SourceLocation) {
        self.location = Some(location);
    }
}

impl PartialEq for UnknownRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.parameter_text == other.parameter_text
            && self.body_text == other.body_text
    }
}

impl Hash for UnknownRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.parameter_text.hash(state);
        self.body_text.hash(state);
    }
}
