//! # cssom - CSS parser, object model, and writer
//!
//! A reader/writer for CSS 2.1 and CSS 3.0 stylesheets. Source text is
//! parsed against one of two versioned grammars into a fully typed,
//! mutable object model, which renders back to CSS under configurable
//! [`WriterSettings`]. This crate provides:
//!
//! - **Parsing**: Convert CSS source into a [`Stylesheet`](ast::Stylesheet)
//!   (or a bare [`DeclarationContainer`](ast::DeclarationContainer) for
//!   inline `style="..."` content)
//! - **Object model**: Plain value types with structural equality for every
//!   construct, from selectors down to `calc()` terms
//! - **Writing**: Pretty or minified output with per-category suppression
//!   and CSS-version compatibility checks
//!
//! ## Quick Start
//!
//! ```rust
//! use cssom::{parse_stylesheet, CssVersion, WriterSettings};
//!
//! let source = r#"
//!     h1, .title {
//!         color: #aabbcc;
//!         margin: 0px;
//!     }
//! "#;
//!
//! let sheet = parse_stylesheet(source, CssVersion::Css30).expect("valid CSS");
//! assert_eq!(sheet.rule_count(), 1);
//!
//! let minified = sheet
//!     .to_css_string(&WriterSettings::default().with_optimized_output(true))
//!     .unwrap();
//! assert_eq!(minified, "h1,.title{color:#abc;margin:0}");
//! ```
//!
//! ## Error handling
//!
//! Recoverable syntax errors are routed through a
//! [`ParseErrorHandler`](handler::ParseErrorHandler): the default aborts the
//! parse, a [`LoggingParseErrorHandler`](handler::LoggingParseErrorHandler)
//! skips the broken construct and continues. Unrecoverable failures
//! (unterminated strings, EOF inside a block) always end the parse and
//! surface as `None`.

pub mod ast;
pub mod charset;
pub mod error;
pub mod grammar;
pub mod handler;
pub mod writer;

mod builder;

use std::sync::Arc;

use encoding_rs::Encoding;

use ast::{DeclarationContainer, Stylesheet};
use charset::StreamProvider;
use error::CssParseFatal;
use grammar::{LineMap, ParseNode};
use handler::{
    default_parse_error_handler, LoggingExceptionHandler, ParseErrorHandler,
    ParseExceptionHandler,
};

pub use error::{AstError, CssParseError, WriterError};
pub use grammar::CssVersion;
pub use writer::{WriteCss, WriterSettings};

/// Per-call parsing configuration.
///
/// Both handlers default to `None`, meaning the process-wide default error
/// handler (see [`handler::set_default_parse_error_handler`]) and a logging
/// exception handler.
#[derive(Clone, Default)]
pub struct ReaderSettings {
    pub error_handler: Option<Arc<dyn ParseErrorHandler>>,
    pub exception_handler: Option<Arc<dyn ParseExceptionHandler>>,
}

impl ReaderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_handler(mut self, handler: Arc<dyn ParseErrorHandler>) -> Self {
        self.error_handler = Some(handler);
        self
    }

    pub fn with_exception_handler(mut self, handler: Arc<dyn ParseExceptionHandler>) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    fn error_handler(&self) -> Arc<dyn ParseErrorHandler> {
        self.error_handler
            .clone()
            .unwrap_or_else(default_parse_error_handler)
    }

    fn dispatch_exception(&self, error: &CssParseFatal) {
        match &self.exception_handler {
            Some(handler) => handler.on_exception(error),
            None => LoggingExceptionHandler.on_exception(error),
        }
    }
}

/// Parse a stylesheet with default reader settings.
///
/// Returns `None` when the parse fails unrecoverably (or when the active
/// error handler aborts on the first recoverable error, which the default
/// does).
pub fn parse_stylesheet(source: &str, version: CssVersion) -> Option<Stylesheet> {
    parse_stylesheet_with(source, version, &ReaderSettings::default())
}

/// Parse a stylesheet with explicit reader settings.
pub fn parse_stylesheet_with(
    source: &str,
    version: CssVersion,
    settings: &ReaderSettings,
) -> Option<Stylesheet> {
    let tree = run_parse(settings, || {
        grammar::parse_stylesheet_tree(source, version, settings.error_handler().as_ref())
    })?;
    let map = LineMap::new(source);
    match builder::build_stylesheet(&tree, &map) {
        Ok(sheet) => Some(sheet),
        Err(e) => {
            log::warn!("discarding the parsed stylesheet: {e}");
            None
        }
    }
}

/// Parse a `;`-separated declaration list, the shape of an inline
/// `style="..."` attribute. Rule blocks are not accepted.
pub fn parse_declaration_list(source: &str, version: CssVersion) -> Option<DeclarationContainer> {
    parse_declaration_list_with(source, version, &ReaderSettings::default())
}

/// Parse a declaration list with explicit reader settings.
pub fn parse_declaration_list_with(
    source: &str,
    version: CssVersion,
    settings: &ReaderSettings,
) -> Option<DeclarationContainer> {
    let tree = run_parse(settings, || {
        grammar::parse_declaration_list_tree(source, version, settings.error_handler().as_ref())
    })?;
    let map = LineMap::new(source);
    Some(builder::build_declaration_list(&tree, &map))
}

/// Check whether `source` parses cleanly under `version`: every syntax
/// error, recoverable or not, makes this false.
pub fn is_valid_stylesheet(source: &str, version: CssVersion) -> bool {
    let settings = ReaderSettings::default()
        .with_error_handler(Arc::new(handler::ThrowingParseErrorHandler))
        .with_exception_handler(Arc::new(handler::SilentExceptionHandler));
    parse_stylesheet_with(source, version, &settings).is_some()
}

/// Parse a stylesheet from a byte source, resolving the character set from
/// a BOM or `@charset` declaration before falling back to `fallback`.
pub fn parse_from_provider(
    provider: &dyn StreamProvider,
    fallback: &'static Encoding,
    version: CssVersion,
    settings: &ReaderSettings,
) -> Option<Stylesheet> {
    let source = match charset::resolve_source_text(provider, fallback) {
        Ok(source) => source,
        Err(e) => {
            log::warn!("failed to read the stylesheet source: {e}");
            return None;
        }
    };
    parse_stylesheet_with(&source, version, settings)
}

fn run_parse(
    settings: &ReaderSettings,
    parse: impl FnOnce() -> Result<ParseNode, CssParseFatal>,
) -> Option<ParseNode> {
    match parse() {
        Ok(tree) => Some(tree),
        Err(fatal) => {
            settings.dispatch_exception(&fatal);
            None
        }
    }
}
