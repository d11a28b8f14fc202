//! Recursive-descent productions for both grammar versions.
//!
//! One `Grammar` walker serves CSS 2.1 and CSS 3.0: every production asks
//! [`NodeTag::for_kind`] for its tag, and a `None` answer (the construct
//! does not exist in the selected version) becomes an ordinary recoverable
//! error. Recoverable errors go through the active
//! [`ParseErrorHandler`](crate::handler::ParseErrorHandler) and, unless the
//! handler aborts, the walker skips to the next synchronization point — a
//! `;` at brace depth zero or the matching `}` — and resumes.
//!
//! Leaf tokens come from [`super::tokens`]; the rule-level structure is
//! explicit loops so resynchronization has somewhere to land.

use nom::IResult;

use crate::ast::SourceLocation;
use crate::error::{CssParseError, CssParseFatal};
use crate::handler::ParseErrorHandler;

use super::tokens;
use super::{CssVersion, LineMap, NodeKind, NodeTag, ParseNode};

/// Internal error channel: recoverable errors resynchronize, fatal ones
/// abort the whole parse.
pub(crate) enum ParseFail {
    Recoverable(CssParseError),
    Fatal(CssParseFatal),
}

type PResult<T> = Result<T, ParseFail>;

/// Parse a full stylesheet into a generic parse tree.
pub fn parse_stylesheet_tree(
    source: &str,
    version: CssVersion,
    handler: &dyn ParseErrorHandler,
) -> Result<ParseNode, CssParseFatal> {
    let mut grammar = Grammar::new(source, version, handler);
    match grammar.stylesheet() {
        Ok(node) => Ok(node),
        Err(ParseFail::Fatal(f)) => Err(f),
        Err(ParseFail::Recoverable(e)) => {
            // Recoverable errors that escape to the top were not resumable
            // in context; the parse as a whole has failed.
            Err(CssParseFatal::new(e.message, e.location))
        }
    }
}

/// Parse a `;`-separated declaration list (inline `style="..."` content).
/// No selector or top-level-rule production is reachable from here.
pub fn parse_declaration_list_tree(
    source: &str,
    version: CssVersion,
    handler: &dyn ParseErrorHandler,
) -> Result<ParseNode, CssParseFatal> {
    let mut grammar = Grammar::new(source, version, handler);
    match grammar.declaration_list_root() {
        Ok(node) => Ok(node),
        Err(ParseFail::Fatal(f)) => Err(f),
        Err(ParseFail::Recoverable(e)) => Err(CssParseFatal::new(e.message, e.location)),
    }
}

struct Grammar<'a, 'h> {
    src: &'a str,
    pos: usize,
    version: CssVersion,
    handler: &'h dyn ParseErrorHandler,
    map: LineMap<'a>,
}

impl<'a, 'h> Grammar<'a, 'h> {
    fn new(src: &'a str, version: CssVersion, handler: &'h dyn ParseErrorHandler) -> Self {
        Self {
            src,
            pos: 0,
            version,
            handler,
            map: LineMap::new(src),
        }
    }

    // ---- cursor helpers ----------------------------------------------

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip(&mut self) {
        let rest = tokens::skip_ws_and_comments(self.rest());
        self.pos = self.src.len() - rest.len();
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat_char(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    /// Consume a case-insensitive keyword only when it ends at a word
    /// boundary, so `android` is never read as `and`.
    fn eat_keyword_ci(&mut self, word: &str) -> bool {
        let rest = self.rest();
        // Byte-wise compare: keywords are ASCII, so a match also proves
        // `word.len()` is a char boundary in `rest`.
        let matches = rest
            .as_bytes()
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word.as_bytes()));
        if !matches {
            return false;
        }
        if rest[word.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return false;
        }
        self.pos += word.len();
        true
    }

    /// Run a nom leaf parser at the cursor. `Err::Failure` from the token
    /// layer (unterminated string) becomes a fatal parse failure.
    fn eat<F>(&mut self, parser: F) -> PResult<Option<&'a str>>
    where
        F: Fn(&'a str) -> IResult<&'a str, &'a str>,
    {
        match parser(self.rest()) {
            Ok((rest, out)) => {
                self.pos = self.src.len() - rest.len();
                Ok(Some(out))
            }
            Err(nom::Err::Error(_)) => Ok(None),
            Err(_) => Err(self.fatal("unterminated string literal")),
        }
    }

    fn location_at(&self, offset: usize) -> SourceLocation {
        self.map.location(offset)
    }

    fn recoverable(&self, message: impl Into<String>) -> ParseFail {
        ParseFail::Recoverable(CssParseError::new(message, self.location_at(self.pos)))
    }

    fn fatal(&self, message: impl Into<String>) -> ParseFail {
        ParseFail::Fatal(CssParseFatal::new(message, self.location_at(self.pos)))
    }

    /// Deliver a recoverable error to the handler; an aborting handler
    /// turns it into a fatal failure.
    fn report(&self, error: CssParseError) -> PResult<()> {
        self.handler
            .on_parse_error(&error)
            .map_err(|e| ParseFail::Fatal(CssParseFatal::new(e.message, e.location)))
    }

    /// The tag for `kind` under the active version; a missing tag means the
    /// construct is not part of this grammar version.
    fn tag(&self, kind: NodeKind) -> PResult<NodeTag> {
        NodeTag::for_kind(self.version, kind).ok_or_else(|| {
            self.recoverable(format!("{kind:?} is not supported in {}", self.version))
        })
    }

    fn node(&self, kind: NodeKind) -> PResult<ParseNode> {
        Ok(ParseNode::new(self.tag(kind)?, self.pos))
    }

    fn text_node(&self, kind: NodeKind, offset: usize, text: impl Into<String>) -> PResult<ParseNode> {
        Ok(ParseNode::with_text(self.tag(kind)?, offset, text))
    }

    fn expect_char(&mut self, c: char, context: &str) -> PResult<()> {
        self.skip();
        if self.eat_char(c) {
            Ok(())
        } else {
            Err(self.recoverable(format!("expected `{c}` {context}")))
        }
    }

    // ---- resynchronization -------------------------------------------

    /// Skip to the next `;` at brace depth zero (consumed) or past the
    /// brace block that is currently open. Strings are honored so braces
    /// inside them do not count. Always makes progress.
    fn sync_top_level(&mut self) {
        let mut depth: i32 = 0;
        while let Some(c) = self.peek() {
            match c {
                '"' | '\'' => {
                    if self.eat(tokens::string_lit).is_err() {
                        self.pos = self.src.len();
                        return;
                    }
                    continue;
                }
                ';' if depth == 0 => {
                    self.pos += 1;
                    return;
                }
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth <= 0 {
                        self.pos += 1;
                        return;
                    }
                }
                _ => {}
            }
            self.pos += c.len_utf8();
        }
    }

    /// Skip to the next `;` at depth zero (consumed) or past the brace
    /// block the broken rule opened, stopping in front of a `}` that would
    /// close the enclosing block.
    fn sync_block_member(&mut self) {
        let mut depth: i32 = 0;
        while let Some(c) = self.peek() {
            match c {
                '"' | '\'' => {
                    if self.eat(tokens::string_lit).is_err() {
                        self.pos = self.src.len();
                        return;
                    }
                    continue;
                }
                ';' if depth == 0 => {
                    self.pos += 1;
                    return;
                }
                '}' if depth == 0 => return,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += 1;
                        return;
                    }
                }
                _ => {}
            }
            self.pos += c.len_utf8();
        }
    }

    /// Skip to the next `;` (consumed) or `}` (left in place) at depth
    /// zero, for resuming inside a declaration block.
    fn sync_declaration(&mut self) {
        let mut depth: i32 = 0;
        while let Some(c) = self.peek() {
            match c {
                '"' | '\'' => {
                    if self.eat(tokens::string_lit).is_err() {
                        self.pos = self.src.len();
                        return;
                    }
                    continue;
                }
                ';' if depth == 0 => {
                    self.pos += 1;
                    return;
                }
                '}' if depth == 0 => return,
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            self.pos += c.len_utf8();
        }
    }

    // ---- stylesheet --------------------------------------------------

    fn stylesheet(&mut self) -> PResult<ParseNode> {
        let mut root = self.node(NodeKind::Root)?;
        self.skip();

        // @charset must be the very first construct.
        let has_charset = self
            .rest()
            .as_bytes()
            .get(..8)
            .is_some_and(|head| head.eq_ignore_ascii_case(b"@charset"));
        if has_charset {
            let offset = self.pos;
            self.pos += 8;
            self.skip();
            match self.eat(tokens::string_lit)? {
                Some(name) => {
                    self.expect_char(';', "after @charset")
                        .or_else(|e| self.handle_top_level(e))?;
                    root.push(self.text_node(
                        NodeKind::Charset,
                        offset,
                        tokens::unquote(name),
                    )?);
                }
                None => {
                    let err = self.recoverable("expected a quoted charset name");
                    self.handle_top_level(err)?;
                }
            }
        }

        loop {
            self.skip();
            if self.eof() {
                break;
            }
            match self.top_level_rule() {
                Ok(Some(node)) => root.push(node),
                Ok(None) => {}
                Err(e) => self.handle_top_level(e)?,
            }
        }
        Ok(root)
    }

    /// Report a recoverable error and resynchronize at the top level;
    /// propagate fatal errors.
    fn handle_top_level(&mut self, fail: ParseFail) -> PResult<()> {
        match fail {
            ParseFail::Recoverable(e) => {
                self.report(e)?;
                self.sync_top_level();
                Ok(())
            }
            fatal => Err(fatal),
        }
    }

    /// Recovery for rules nested inside a `@media` / `@supports` block:
    /// the enclosing `}` must stay in place so the block can close itself.
    fn handle_block_member(&mut self, fail: ParseFail) -> PResult<()> {
        match fail {
            ParseFail::Recoverable(e) => {
                self.report(e)?;
                self.sync_block_member();
                Ok(())
            }
            fatal => Err(fatal),
        }
    }

    fn top_level_rule(&mut self) -> PResult<Option<ParseNode>> {
        self.skip();
        if self.eat_char(';') {
            // Stray semicolon between rules; harmless.
            return Ok(None);
        }
        if self.peek() != Some('@') {
            return self.style_rule().map(Some);
        }

        let offset = self.pos;
        let keyword = match self.eat(tokens::at_keyword)? {
            Some(kw) => kw,
            None => return Err(self.recoverable("expected an at-keyword after `@`")),
        };
        let lower = keyword.to_ascii_lowercase();
        let rule = match lower.as_str() {
            "@import" => self.import_rule(offset)?,
            "@namespace" if self.supports(NodeKind::Namespace) => self.namespace_rule(offset)?,
            "@media" => self.media_rule(offset)?,
            "@page" => self.page_rule(offset)?,
            "@font-face" if self.supports(NodeKind::FontFaceRule) => {
                self.declaration_block_rule(NodeKind::FontFaceRule, offset)?
            }
            "@supports" if self.supports(NodeKind::SupportsRule) => self.supports_rule(offset)?,
            "@viewport" | "@-ms-viewport" | "@-o-viewport"
                if self.supports(NodeKind::ViewportRule) =>
            {
                self.declaration_block_rule(NodeKind::ViewportRule, offset)?
            }
            k if k.ends_with("keyframes") && self.supports(NodeKind::KeyframesRule) => {
                self.keyframes_rule(keyword, offset)?
            }
            _ => self.unknown_rule(keyword, offset)?,
        };
        Ok(Some(rule))
    }

    fn supports(&self, kind: NodeKind) -> bool {
        NodeTag::for_kind(self.version, kind).is_some()
    }

    // ---- at-rules ----------------------------------------------------

    /// `@import <string|uri> [media-query-list] ;` — the keyword is
    /// already consumed.
    fn import_rule(&mut self, offset: usize) -> PResult<ParseNode> {
        self.skip();
        let target = if let Some(s) = self.eat(tokens::string_lit)? {
            tokens::unquote(s).to_string()
        } else if let Some(u) = self.eat(tokens::uri)? {
            u.to_string()
        } else {
            return Err(self.recoverable("expected a string or url() after @import"));
        };
        let mut node = self.text_node(NodeKind::Import, offset, target)?;
        self.skip();
        if self.peek() != Some(';') && !self.eof() {
            loop {
                node.push(self.media_query()?);
                self.skip();
                if !self.eat_char(',') {
                    break;
                }
            }
        }
        self.expect_char(';', "after @import")?;
        Ok(node)
    }

    /// `@namespace [prefix] <string|uri> ;`
    fn namespace_rule(&mut self, offset: usize) -> PResult<ParseNode> {
        self.skip();
        let prefix_offset = self.pos;
        let prefix = self.eat(tokens::ident)?.map(str::to_string);
        self.skip();
        let uri = if let Some(s) = self.eat(tokens::string_lit)? {
            tokens::unquote(s).to_string()
        } else if let Some(u) = self.eat(tokens::uri)? {
            u.to_string()
        } else {
            return Err(self.recoverable("expected a string or url() after @namespace"));
        };
        let mut node = self.text_node(NodeKind::Namespace, offset, uri)?;
        if let Some(prefix) = prefix {
            node.push(self.text_node(NodeKind::Term, prefix_offset, prefix)?);
        }
        self.expect_char(';', "after @namespace")?;
        Ok(node)
    }

    /// `@media <query-list> { <rules> }`
    fn media_rule(&mut self, offset: usize) -> PResult<ParseNode> {
        let mut node = ParseNode::new(self.tag(NodeKind::MediaRule)?, offset);
        loop {
            node.push(self.media_query()?);
            self.skip();
            if !self.eat_char(',') {
                break;
            }
        }
        self.expect_char('{', "to open the @media block")?;
        loop {
            self.skip();
            if self.eat_char('}') {
                break;
            }
            if self.eof() {
                return Err(self.fatal("unexpected end of input inside @media block"));
            }
            match self.top_level_rule() {
                Ok(Some(rule)) => node.push(rule),
                Ok(None) => {}
                Err(e) => self.handle_block_member(e)?,
            }
        }
        Ok(node)
    }

    /// `[not|only] [medium] [and (feature[: value])]*` — modifiers and
    /// feature expressions are CSS 3.0 productions.
    fn media_query(&mut self) -> PResult<ParseNode> {
        self.skip();
        let mut node = self.node(NodeKind::MediaQuery)?;

        if self.supports(NodeKind::MediaModifier) {
            let offset = self.pos;
            if self.eat_keyword_ci("not") {
                node.push(self.text_node(NodeKind::MediaModifier, offset, "not")?);
                self.skip();
            } else if self.eat_keyword_ci("only") {
                node.push(self.text_node(NodeKind::MediaModifier, offset, "only")?);
                self.skip();
            }
        }

        if self.peek() == Some('(') {
            node.push(self.media_expression()?);
        } else if let Some(medium) = self.eat(tokens::ident)? {
            node.text = Some(medium.to_string());
        } else if node.children.is_empty() {
            return Err(self.recoverable("expected a medium name"));
        }

        loop {
            self.skip();
            if !self.eat_keyword_ci("and") {
                break;
            }
            self.skip();
            node.push(self.media_expression()?);
        }
        Ok(node)
    }

    /// `( feature [: value] )`
    fn media_expression(&mut self) -> PResult<ParseNode> {
        let offset = self.pos;
        // Existence check first: under CSS 2.1 there is no such production.
        let tag = self.tag(NodeKind::MediaExpression)?;
        self.expect_char('(', "to open a media feature expression")?;
        self.skip();
        let feature = match self.eat(tokens::ident)? {
            Some(f) => f.to_string(),
            None => return Err(self.recoverable("expected a media feature name")),
        };
        let mut node = ParseNode::with_text(tag, offset, feature);
        self.skip();
        if self.eat_char(':') {
            node.push(self.expression(&[')'])?);
        }
        self.expect_char(')', "to close the media feature expression")?;
        Ok(node)
    }

    /// `@page [:pseudo] { declarations }`
    fn page_rule(&mut self, offset: usize) -> PResult<ParseNode> {
        let mut node = ParseNode::new(self.tag(NodeKind::PageRule)?, offset);
        self.skip();
        if self.peek() == Some(':') {
            self.pos += 1;
            match self.eat(tokens::ident)? {
                Some(name) => node.text = Some(format!(":{name}")),
                None => return Err(self.recoverable("expected a pseudo page name after `:`")),
            }
        }
        node.push(self.declaration_block()?);
        Ok(node)
    }

    /// `@font-face`/`@viewport`: nothing but a declaration block.
    fn declaration_block_rule(&mut self, kind: NodeKind, offset: usize) -> PResult<ParseNode> {
        let mut node = ParseNode::new(self.tag(kind)?, offset);
        node.push(self.declaration_block()?);
        Ok(node)
    }

    /// `@keyframes name { <selectors> { declarations } ... }`
    ///
    /// The emitted children are: the animation-name term first, then for
    /// each block one KeyframesSelector node followed by its Declaration
    /// nodes, flat — the builder reassembles blocks from the alternation.
    fn keyframes_rule(&mut self, keyword: &str, offset: usize) -> PResult<ParseNode> {
        let mut node = ParseNode::with_text(self.tag(NodeKind::KeyframesRule)?, offset, keyword);
        self.skip();
        let name_offset = self.pos;
        let name = match self.eat(tokens::ident)? {
            Some(n) => n.to_string(),
            None => return Err(self.recoverable("expected an animation name after @keyframes")),
        };
        node.push(self.text_node(NodeKind::Term, name_offset, name)?);
        self.expect_char('{', "to open the @keyframes block")?;

        loop {
            self.skip();
            if self.eat_char('}') {
                break;
            }
            if self.eof() {
                return Err(self.fatal("unexpected end of input inside @keyframes block"));
            }

            let mut selector = self.node(NodeKind::KeyframesSelector)?;
            loop {
                self.skip();
                let offset = self.pos;
                if let Some(pct) = self.eat(tokens::dimension)? {
                    selector.push(self.text_node(NodeKind::Term, offset, pct)?);
                } else if let Some(word) = self.eat(tokens::ident)? {
                    selector.push(self.text_node(NodeKind::Term, offset, word)?);
                } else {
                    return Err(self.recoverable("expected a keyframes selector"));
                }
                self.skip();
                if !self.eat_char(',') {
                    break;
                }
            }
            node.push(selector);

            let block = self.declaration_block()?;
            for declaration in block.children {
                node.push(declaration);
            }
        }
        Ok(node)
    }

    /// `@supports <condition> { <rules> }`
    fn supports_rule(&mut self, offset: usize) -> PResult<ParseNode> {
        let mut node = ParseNode::new(self.tag(NodeKind::SupportsRule)?, offset);
        self.supports_condition_members(&mut node)?;
        self.expect_char('{', "to open the @supports block")?;
        loop {
            self.skip();
            if self.eat_char('}') {
                break;
            }
            if self.eof() {
                return Err(self.fatal("unexpected end of input inside @supports block"));
            }
            match self.top_level_rule() {
                Ok(Some(rule)) => node.push(rule),
                Ok(None) => {}
                Err(e) => self.handle_block_member(e)?,
            }
        }
        Ok(node)
    }

    fn supports_condition_members(&mut self, parent: &mut ParseNode) -> PResult<()> {
        let mut any = false;
        loop {
            self.skip();
            let offset = self.pos;
            if self.starts_with("(") {
                parent.push(self.supports_in_parens()?);
            } else if self.eat_keyword_ci("not") {
                let mut negation =
                    ParseNode::new(self.tag(NodeKind::SupportsNegation)?, offset);
                self.skip();
                negation.push(self.supports_in_parens()?);
                parent.push(negation);
            } else if self.eat_keyword_ci("and") {
                parent.push(self.text_node(NodeKind::SupportsOperator, offset, "and")?);
            } else if self.eat_keyword_ci("or") {
                parent.push(self.text_node(NodeKind::SupportsOperator, offset, "or")?);
            } else {
                if !any {
                    return Err(self.recoverable("expected a @supports condition"));
                }
                return Ok(());
            }
            any = true;
        }
    }

    /// Either `(prop: value)` or a parenthesized nested condition.
    fn supports_in_parens(&mut self) -> PResult<ParseNode> {
        let offset = self.pos;
        self.expect_char('(', "to open a @supports condition")?;
        self.skip();

        // Peek for `ident :` — that shape is a wrapped declaration,
        // anything else a nested condition group.
        let save = self.pos;
        if let Some(property) = self.eat(tokens::ident)? {
            self.skip();
            if self.peek() == Some(':') && !property.eq_ignore_ascii_case("not") {
                self.pos = save;
                let mut node = ParseNode::new(self.tag(NodeKind::SupportsDeclaration)?, offset);
                node.push(self.declaration(&[')'])?);
                self.expect_char(')', "to close the @supports condition")?;
                return Ok(node);
            }
            self.pos = save;
        }

        let mut node = ParseNode::new(self.tag(NodeKind::SupportsNested)?, offset);
        self.supports_condition_members(&mut node)?;
        self.expect_char(')', "to close the @supports condition")?;
        Ok(node)
    }

    /// Any other at-rule: capture the parameter text and raw body.
    fn unknown_rule(&mut self, keyword: &str, offset: usize) -> PResult<ParseNode> {
        let mut node = ParseNode::with_text(self.tag(NodeKind::UnknownRule)?, offset, keyword);
        self.skip();

        let param_start = self.pos;
        while let Some(c) = self.peek() {
            match c {
                '{' | ';' => break,
                '"' | '\'' => {
                    self.eat(tokens::string_lit)?;
                }
                _ => self.pos += c.len_utf8(),
            }
        }
        let param = self.src[param_start..self.pos].trim().to_string();
        node.push(self.text_node(NodeKind::Term, param_start, param)?);

        let body_offset = self.pos;
        let body = if self.eat_char('{') {
            let body_start = self.pos;
            let mut depth = 1;
            while let Some(c) = self.peek() {
                match c {
                    '"' | '\'' => {
                        self.eat(tokens::string_lit)?;
                        continue;
                    }
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                self.pos += c.len_utf8();
            }
            let body = self.src[body_start..self.pos].trim().to_string();
            self.eat_char('}');
            body
        } else {
            self.eat_char(';');
            String::new()
        };
        node.push(self.text_node(NodeKind::Term, body_offset, body)?);
        Ok(node)
    }

    // ---- style rules and selectors -----------------------------------

    fn style_rule(&mut self) -> PResult<ParseNode> {
        let mut node = self.node(NodeKind::StyleRule)?;
        node.push(self.selector_list()?);
        node.push(self.declaration_block()?);
        Ok(node)
    }

    fn selector_list(&mut self) -> PResult<ParseNode> {
        self.skip();
        let mut node = self.node(NodeKind::SelectorList)?;
        loop {
            node.push(self.selector()?);
            self.skip();
            if !self.eat_char(',') {
                break;
            }
        }
        Ok(node)
    }

    fn selector(&mut self) -> PResult<ParseNode> {
        self.skip();
        let mut node = self.node(NodeKind::Selector)?;
        node.push(self.selector_member()?);

        loop {
            let before_ws = self.pos;
            self.skip();
            let had_ws = self.pos != before_ws;

            match self.peek() {
                Some(c @ ('+' | '>' | '~')) => {
                    let offset = self.pos;
                    if c == '~' && self.version == CssVersion::Css21 {
                        return Err(self.recoverable(
                            "the general-sibling combinator `~` is not supported in CSS 2.1",
                        ));
                    }
                    self.pos += 1;
                    node.push(self.text_node(NodeKind::Combinator, offset, c.to_string())?);
                    self.skip();
                    node.push(self.selector_member()?);
                }
                Some(c) if had_ws && is_member_start(c) => {
                    node.push(self.text_node(NodeKind::Combinator, before_ws, " ")?);
                    node.push(self.selector_member()?);
                }
                Some(c) if !had_ws && is_member_start(c) => {
                    node.push(self.selector_member()?);
                }
                _ => break,
            }
        }
        Ok(node)
    }

    fn selector_member(&mut self) -> PResult<ParseNode> {
        let offset = self.pos;
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                // A `*` may still be namespace-qualified under CSS 3.0.
                let text = self.maybe_namespace_qualified("*".to_string())?;
                self.text_node(NodeKind::SimpleMember, offset, text)
            }
            Some('.') => {
                self.pos += 1;
                match self.eat(tokens::ident)? {
                    Some(name) => {
                        self.text_node(NodeKind::SimpleMember, offset, format!(".{name}"))
                    }
                    None => Err(self.recoverable("expected a class name after `.`")),
                }
            }
            Some('#') => match self.eat(tokens::hash)? {
                Some(id) => self.text_node(NodeKind::SimpleMember, offset, id),
                None => Err(self.recoverable("expected an id after `#`")),
            },
            Some(':') => self.pseudo_member(offset),
            Some('[') => self.attribute_member(offset),
            _ => match self.eat(tokens::ident)? {
                Some(name) => {
                    let text = self.maybe_namespace_qualified(name.to_string())?;
                    self.text_node(NodeKind::SimpleMember, offset, text)
                }
                None => Err(self.recoverable("expected a selector")),
            },
        }
    }

    /// Continue `ns|name` element names under CSS 3.0.
    fn maybe_namespace_qualified(&mut self, prefix: String) -> PResult<String> {
        if self.version == CssVersion::Css30
            && self.starts_with("|")
            && !self.starts_with("|=")
        {
            self.pos += 1;
            if self.eat_char('*') {
                return Ok(format!("{prefix}|*"));
            }
            match self.eat(tokens::ident)? {
                Some(name) => return Ok(format!("{prefix}|{name}")),
                None => return Err(self.recoverable("expected an element name after `|`")),
            }
        }
        Ok(prefix)
    }

    /// `:pseudo`, `::pseudo-element`, `:fn(...)`, `:not(...)`.
    fn pseudo_member(&mut self, offset: usize) -> PResult<ParseNode> {
        self.pos += 1;
        let double = self.eat_char(':');
        let colons = if double { "::" } else { ":" };
        let name = match self.eat(tokens::ident)? {
            Some(n) => n,
            None => return Err(self.recoverable("expected a pseudo-class name after `:`")),
        };

        if !self.starts_with("(") {
            return self.text_node(NodeKind::SimpleMember, offset, format!("{colons}{name}"));
        }

        if !double && name.eq_ignore_ascii_case("not") {
            // CSS 3.0 negation with a full selector list inside.
            let mut node = ParseNode::new(self.tag(NodeKind::Negation)?, offset);
            self.pos += 1;
            loop {
                node.push(self.selector()?);
                self.skip();
                if !self.eat_char(',') {
                    break;
                }
            }
            self.expect_char(')', "to close `:not(`")?;
            return Ok(node);
        }

        let mut node = self.text_node(NodeKind::FunctionalPseudo, offset, format!("{colons}{name}"))?;
        self.pos += 1;
        self.skip();
        if !self.eat_char(')') {
            node.push(self.expression(&[')'])?);
            self.expect_char(')', "to close the functional pseudo")?;
        }
        Ok(node)
    }

    /// `[ns|attr op value]`
    fn attribute_member(&mut self, offset: usize) -> PResult<ParseNode> {
        self.pos += 1;
        self.skip();

        let mut prefix = None;
        let first = match self.eat(tokens::ident)? {
            Some(n) => n.to_string(),
            None => return Err(self.recoverable("expected an attribute name")),
        };
        let name = if self.starts_with("|") && !self.starts_with("|=") {
            self.pos += 1;
            prefix = Some(first);
            match self.eat(tokens::ident)? {
                Some(n) => n.to_string(),
                None => return Err(self.recoverable("expected an attribute name after `|`")),
            }
        } else {
            first
        };

        let mut node = self.text_node(NodeKind::Attribute, offset, name)?;
        if let Some(prefix) = prefix {
            node.push(self.text_node(NodeKind::SimpleMember, offset, prefix)?);
        }

        self.skip();
        let op_offset = self.pos;
        let operator = ["~=", "|=", "^=", "$=", "*=", "="]
            .iter()
            .find(|op| self.starts_with(op))
            .copied();
        if let Some(op) = operator {
            if matches!(op, "^=" | "$=" | "*=") && self.version == CssVersion::Css21 {
                return Err(self.recoverable(format!(
                    "the attribute operator `{op}` is not supported in CSS 2.1"
                )));
            }
            self.pos += op.len();
            node.push(self.text_node(NodeKind::Operator, op_offset, op)?);
            self.skip();
            let value_offset = self.pos;
            let value = if let Some(s) = self.eat(tokens::string_lit)? {
                s.to_string()
            } else if let Some(i) = self.eat(tokens::ident)? {
                i.to_string()
            } else {
                return Err(self.recoverable("expected an attribute value"));
            };
            node.push(self.text_node(NodeKind::Term, value_offset, value)?);
        }
        self.expect_char(']', "to close the attribute selector")?;
        Ok(node)
    }

    // ---- declarations ------------------------------------------------

    /// `{ declaration ; ... }` with per-declaration resynchronization.
    fn declaration_block(&mut self) -> PResult<ParseNode> {
        self.expect_char('{', "to open the declaration block")?;
        let mut node = self.node(NodeKind::DeclarationList)?;
        loop {
            self.skip();
            if self.eat_char('}') {
                break;
            }
            if self.eat_char(';') {
                continue;
            }
            if self.eof() {
                return Err(self.fatal("unexpected end of input inside a declaration block"));
            }
            match self.declaration(&[';', '}']) {
                Ok(declaration) => node.push(declaration),
                Err(ParseFail::Recoverable(e)) => {
                    self.report(e)?;
                    self.sync_declaration();
                }
                Err(fatal) => return Err(fatal),
            }
        }
        Ok(node)
    }

    /// `property : expression [!important]`
    fn declaration(&mut self, closers: &[char]) -> PResult<ParseNode> {
        self.skip();
        let offset = self.pos;
        let property = match self.eat(tokens::ident)? {
            Some(p) => p.to_string(),
            None => return Err(self.recoverable("expected a property name")),
        };
        self.expect_char(':', "after the property name")?;

        let mut node = self.text_node(NodeKind::Declaration, offset, property)?;
        node.push(self.expression(closers)?);

        self.skip();
        let important_offset = self.pos;
        if self.eat(tokens::important)?.is_some() {
            node.push(self.text_node(NodeKind::Important, important_offset, "!important")?);
        }
        self.skip();
        self.eat_char(';');
        Ok(node)
    }

    // ---- expressions -------------------------------------------------

    /// A value expression. Stops (without consuming) at any closer, at `;`,
    /// `}`, or a `!important` marker.
    fn expression(&mut self, closers: &[char]) -> PResult<ParseNode> {
        self.skip();
        let mut node = self.node(NodeKind::Expression)?;
        loop {
            self.skip();
            let offset = self.pos;
            let c = match self.peek() {
                Some(c) => c,
                None => break,
            };
            if closers.contains(&c) || c == ';' || c == '}' || c == '!' {
                break;
            }
            match c {
                '/' | ',' | '=' => {
                    self.pos += 1;
                    node.push(self.text_node(NodeKind::Operator, offset, c.to_string())?);
                }
                '"' | '\'' => match self.eat(tokens::string_lit)? {
                    Some(s) => node.push(self.text_node(NodeKind::Term, offset, s)?),
                    None => return Err(self.recoverable("expected a string value")),
                },
                '#' => match self.eat(tokens::hash)? {
                    Some(h) => node.push(self.text_node(NodeKind::Term, offset, h)?),
                    None => return Err(self.recoverable("expected a hex value after `#`")),
                },
                c if c.is_ascii_digit() || c == '.' || c == '+' || c == '-' => {
                    // `-1px` wins over `-vendor-ident`: numbers first.
                    if let Some(d) = self.eat(tokens::dimension)? {
                        node.push(self.text_node(NodeKind::Term, offset, d)?);
                    } else if let Some(i) = self.eat(tokens::ident)? {
                        node.push(self.text_node(NodeKind::Term, offset, i)?);
                    } else {
                        return Err(self.recoverable(format!("unexpected `{c}` in value")));
                    }
                }
                _ => {
                    if let Some(u) = self.eat(tokens::uri)? {
                        node.push(self.text_node(NodeKind::Uri, offset, u)?);
                    } else if let Some(name) = self.eat(tokens::ident)? {
                        if self.starts_with("(") {
                            if name.to_ascii_lowercase().ends_with("calc") {
                                node.push(self.math_sum(name, offset)?);
                            } else {
                                node.push(self.function_term(name, offset)?);
                            }
                        } else {
                            node.push(self.text_node(NodeKind::Term, offset, name)?);
                        }
                    } else {
                        return Err(self.recoverable(format!("unexpected `{c}` in value")));
                    }
                }
            }
        }
        if node.children.is_empty() {
            return Err(self.recoverable("expected a value"));
        }
        Ok(node)
    }

    /// `name(` args `)` — zero children for `name()`, one argument
    /// expression otherwise.
    fn function_term(&mut self, name: &str, offset: usize) -> PResult<ParseNode> {
        let mut node = self.text_node(NodeKind::Function, offset, name)?;
        self.pos += 1;
        self.skip();
        if !self.eat_char(')') {
            node.push(self.expression(&[')'])?);
            self.expect_char(')', "to close the function call")?;
        }
        Ok(node)
    }

    /// `calc(` product ((`+`|`-`) product)* `)` — CSS 3.0 only.
    fn math_sum(&mut self, name: &str, offset: usize) -> PResult<ParseNode> {
        let mut node = self.text_node(NodeKind::MathSum, offset, name)?;
        self.pos += 1;
        node.push(self.math_product()?);
        loop {
            self.skip();
            let op_offset = self.pos;
            match self.peek() {
                Some(op @ ('+' | '-')) => {
                    self.pos += 1;
                    node.push(self.text_node(NodeKind::Operator, op_offset, op.to_string())?);
                    node.push(self.math_product()?);
                }
                _ => break,
            }
        }
        self.expect_char(')', "to close the calc() expression")?;
        Ok(node)
    }

    /// unit ((`*`|`/`) unit)*
    fn math_product(&mut self) -> PResult<ParseNode> {
        self.skip();
        let mut node = self.node(NodeKind::MathProduct)?;
        node.push(self.math_unit()?);
        loop {
            self.skip();
            let op_offset = self.pos;
            match self.peek() {
                Some(op @ ('*' | '/')) => {
                    self.pos += 1;
                    node.push(self.text_node(NodeKind::Operator, op_offset, op.to_string())?);
                    node.push(self.math_unit()?);
                }
                _ => break,
            }
        }
        Ok(node)
    }

    /// A dimension, or a parenthesized nested product.
    fn math_unit(&mut self) -> PResult<ParseNode> {
        self.skip();
        let offset = self.pos;
        if self.eat_char('(') {
            let mut node = ParseNode::new(self.tag(NodeKind::MathUnit)?, offset);
            node.push(self.math_product()?);
            self.expect_char(')', "to close the parenthesized calc() term")?;
            return Ok(node);
        }
        match self.eat(tokens::dimension)? {
            Some(d) => self.text_node(NodeKind::MathUnit, offset, d),
            None => Err(self.recoverable("expected a value inside calc()")),
        }
    }

    // ---- declaration-list entry --------------------------------------

    fn declaration_list_root(&mut self) -> PResult<ParseNode> {
        let mut node = self.node(NodeKind::DeclarationList)?;
        loop {
            self.skip();
            if self.eof() {
                break;
            }
            if self.eat_char(';') {
                continue;
            }
            if self.peek() == Some('{') {
                let error = CssParseError::new(
                    "a declaration list cannot contain rule blocks",
                    self.location_at(self.pos),
                );
                self.report(error)?;
                self.sync_top_level();
                continue;
            }
            match self.declaration(&[';']) {
                Ok(declaration) => node.push(declaration),
                Err(ParseFail::Recoverable(e)) => {
                    self.report(e)?;
                    self.sync_top_level();
                }
                Err(fatal) => return Err(fatal),
            }
        }
        Ok(node)
    }
}

fn is_member_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '*' | '.' | '#' | ':' | '[' | '_' | '-')
}
