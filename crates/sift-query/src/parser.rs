//! Query parser.
//!
//! Scans the query one character at a time and folds what it finds into a [`Builder`].
//! Groups, quoted field values and field values in general are cut out of the input and
//! parsed by a nested scanner, whose tree is then applied like any other operand.
//!
//! # Syntax
//!
//! ```text
//! foo bar          both terms (implicit and)
//! foo and bar      both terms
//! foo or bar       either term
//! "foo bar"        exact phrase
//! key:value        term scoped to a field
//! key:"a b"        phrase scoped to a field
//! key:(a or b)     expression scoped to a field
//! (a or b) c       grouping
//! ```
//!
//! `and` and `or` have the same precedence and associate to the left, so `a or b and c`
//! means `(a or b) and c`.
//!
//! Two limits keep trees small enough to walk recursively: `max_depth` bounds how far
//! groups and field values nest, `max_height` bounds the height of the finished tree,
//! which grows by one with every operand folded into a chain.

use std::mem;

use tracing::trace;

use crate::{
    ast::Node,
    builder::{Builder, Operator},
    error::ParseError,
    extent::value_extent,
    options::ParseOptions,
};

/// Scanner state for one region of the query.
///
/// A fresh scanner is created for the whole query and for every group or field value
/// inside it; none of the state is shared between them.
struct Scanner<'a> {
    /// Characters of the region being scanned.
    chars: &'a [char],
    /// Offset of `chars[0]` within the top-level query.
    offset: usize,
    /// Nesting depth of this region; the top-level query is at depth zero.
    depth: usize,
    /// Parser settings.
    options: &'a ParseOptions,
    /// Tree built so far.
    builder: Builder,
    /// Height of the tree held by `builder`.
    height: usize,
    /// Text of the term or phrase currently being read.
    token: String,
    /// Index of the first character of `token`.
    token_start: usize,
    /// Index of the opening quote while inside a quoted region.
    quote_start: Option<usize>,
    /// Number of currently open parentheses.
    nesting: usize,
    /// Index of the outermost open parenthesis.
    group_start: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner for a region of the query.
    fn new(chars: &'a [char], offset: usize, depth: usize, options: &'a ParseOptions) -> Self {
        Self {
            chars,
            offset,
            depth,
            options,
            builder: Builder::new(),
            height: 0,
            token: String::new(),
            token_start: 0,
            quote_start: None,
            nesting: 0,
            group_start: 0,
        }
    }

    /// Scans the whole region and returns its tree along with the tree's height.
    fn parse(mut self) -> Result<(Node, usize), ParseError> {
        if self.depth > self.options.max_depth {
            return Err(ParseError::RecursionLimitExceeded {
                limit: self.options.max_depth,
                position: self.offset,
            });
        }
        trace!(depth = self.depth, offset = self.offset, "scanning region");

        let mut i = 0;
        while i < self.chars.len() {
            let ch = self.chars[i];

            if self.nesting > 0 {
                self.scan_grouped(ch, i)?;
            } else if let Some(start) = self.quote_start {
                if ch == '"' {
                    self.close_quote(start)?;
                } else {
                    self.token.push(ch);
                }
            } else {
                match ch {
                    '"' => {
                        self.flush_token()?;
                        self.quote_start = Some(i);
                    }
                    ':' => {
                        i = self.scan_field(i)?;
                        continue;
                    }
                    '(' => {
                        self.flush_token()?;
                        self.nesting = 1;
                        self.group_start = i;
                    }
                    ')' => {
                        return Err(ParseError::UnbalancedParentheses {
                            position: self.position(i),
                        });
                    }
                    c if c.is_whitespace() => self.flush_token()?,
                    c => self.push_char(c, i),
                }
            }
            i += 1;
        }

        self.finish()
    }

    /// Handles a character inside a group, which is parsed as a whole once it closes.
    fn scan_grouped(&mut self, ch: char, i: usize) -> Result<(), ParseError> {
        match ch {
            '"' => {
                self.quote_start = match self.quote_start {
                    Some(_) => None,
                    None => Some(i),
                };
            }
            '(' if self.quote_start.is_none() => self.nesting += 1,
            ')' if self.quote_start.is_none() => {
                self.nesting -= 1;
                if self.nesting == 0 {
                    let (node, height) = self.parse_nested(self.group_start + 1, i)?;
                    self.apply(node, height, self.group_start)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handles a field separator at index `colon` and returns the index to resume at.
    fn scan_field(&mut self, colon: usize) -> Result<usize, ParseError> {
        if self.token.is_empty() {
            return Err(ParseError::EmptyFieldKey {
                position: self.position(colon),
            });
        }
        let key_start = self.token_start;
        let key = mem::take(&mut self.token);
        let value_start = colon + 1;

        let Some(extent) = value_extent(&self.chars[value_start..]) else {
            return Err(ParseError::MalformedFieldValue {
                key,
                position: self.position(colon),
            });
        };

        let (value, height) =
            self.parse_nested(value_start + extent.start, value_start + extent.end)?;
        if value.is_empty() {
            return Err(ParseError::MalformedFieldValue {
                key,
                position: self.position(colon),
            });
        }

        trace!(%key, "field value parsed");
        self.apply(Node::key(key, value), height + 1, key_start)?;
        Ok(value_start + extent.consumed)
    }

    /// Parses `chars[start..end]` with a nested scanner.
    fn parse_nested(&self, start: usize, end: usize) -> Result<(Node, usize), ParseError> {
        Self::new(
            &self.chars[start..end],
            self.offset + start,
            self.depth + 1,
            self.options,
        )
        .parse()
    }

    /// Ends the quoted region opened at `start`, turning its text into an exact phrase.
    fn close_quote(&mut self, start: usize) -> Result<(), ParseError> {
        self.quote_start = None;
        let text = mem::take(&mut self.token);
        self.apply(Node::CompleteMatch(text), 1, start)
    }

    /// Appends an ordinary character to the current term.
    fn push_char(&mut self, ch: char, i: usize) {
        if self.token.is_empty() {
            self.token_start = i;
        }
        self.token.push(ch);
    }

    /// Completes the current term, if any, as a keyword or a value.
    fn flush_token(&mut self) -> Result<(), ParseError> {
        if self.token.is_empty() {
            return Ok(());
        }
        let text = mem::take(&mut self.token);

        match self.keyword(&text) {
            Some(operator) => {
                let position = self.position(self.token_start);
                self.builder = mem::take(&mut self.builder).push_operator(operator, position)?;
            }
            None => {
                trace!(term = %text, "term");
                self.apply(Node::Value(text), 1, self.token_start)?;
            }
        }
        Ok(())
    }

    /// Returns the operator spelled by `token`, if it is a keyword.
    fn keyword(&self, token: &str) -> Option<Operator> {
        [Operator::And, Operator::Or]
            .into_iter()
            .find(|op| self.options.keyword_case.matches(token, op.keyword()))
    }

    /// Folds a node of the given height, found at index `i`, into the tree.
    fn apply(&mut self, node: Node, height: usize, i: usize) -> Result<(), ParseError> {
        if node.is_empty() {
            return Ok(());
        }
        let height = match self.builder {
            Builder::Empty => height,
            Builder::Complete(_) | Builder::Pending { .. } => self.height.max(height) + 1,
        };
        if height > self.options.max_height {
            return Err(ParseError::HeightLimitExceeded {
                limit: self.options.max_height,
                position: self.position(i),
            });
        }
        self.height = height;
        self.builder = mem::take(&mut self.builder).apply(node);
        Ok(())
    }

    /// Converts a region index into an offset in the top-level query.
    fn position(&self, i: usize) -> usize {
        self.offset + i
    }

    /// Checks for unclosed regions, flushes the last term and returns the tree.
    fn finish(mut self) -> Result<(Node, usize), ParseError> {
        if let Some(quote) = self.quote_start {
            return Err(ParseError::UnterminatedQuote {
                position: self.position(quote),
            });
        }
        if self.nesting > 0 {
            return Err(ParseError::UnbalancedParentheses {
                position: self.position(self.group_start),
            });
        }
        self.flush_token()?;
        let height = self.height;
        self.builder.finish().map(|node| (node, height))
    }
}

/// Parses a query string into a tree using the default [`ParseOptions`].
///
/// Returns [`Node::Empty`] for empty or whitespace-only input.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    parse_with(input, &ParseOptions::default())
}

/// Parses a query string into a tree.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Node, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let (node, _) = Scanner::new(&chars, 0, 0, options).parse()?;
    Ok(node)
}
