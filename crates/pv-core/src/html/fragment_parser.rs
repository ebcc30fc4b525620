//! Strict parser for small, already-sanitized HTML fragments.
//!
//! Produces a tree of [`Node`]s. Unlike a browser it does not repair broken
//! markup: a stray end tag, an unterminated tag or an element left open at the
//! end of input is an error, and callers treat the fragment as unusable.

use crate::html::entities;
use crate::html::node::{Element, Node};

use thiserror::Error;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unterminated tag at byte {offset}")]
    UnterminatedTag { offset: usize },

    #[error("unterminated comment at byte {offset}")]
    UnterminatedComment { offset: usize },

    #[error("unterminated attribute value at byte {offset}")]
    UnterminatedAttribute { offset: usize },

    #[error("end tag </{name}> at byte {offset} does not close an open element")]
    UnexpectedEndTag { name: String, offset: usize },

    #[error("empty end tag at byte {offset}")]
    EmptyEndTag { offset: usize },

    #[error("element <{name}> is never closed")]
    UnclosedElement { name: String },
}

pub struct FragmentParser<'a> {
    input: &'a str,
    /// Current position (byte offset)
    pos: usize,
    /// Elements opened but not yet closed, innermost last
    open: Vec<Element>,
    roots: Vec<Node>,
    /// Raw text collected since the last piece of markup
    text: String,
}

impl<'a> FragmentParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            open: Vec::new(),
            roots: Vec::new(),
            text: String::new(),
        }
    }

    /// Parse a fragment into its top-level nodes
    pub fn parse(input: &str) -> Result<Vec<Node>, ParseError> {
        FragmentParser::new(input).run()
    }

    fn run(mut self) -> Result<Vec<Node>, ParseError> {
        while let Some(c) = self.peek() {
            if c == '<' {
                self.markup()?;
            } else {
                self.text.push(c);
                self.pos += c.len_utf8();
            }
        }

        self.flush_text();

        if let Some(element) = self.open.pop() {
            return Err(ParseError::UnclosedElement { name: element.name });
        }

        Ok(self.roots)
    }

    fn markup(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let input = self.input;
        let rest = &input[start..];

        if rest.starts_with("<!--") {
            self.flush_text();
            return self.comment(start);
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            self.flush_text();
            return self.bogus_comment(start);
        }

        match rest[1..].chars().next() {
            Some('/') => {
                self.flush_text();
                self.end_tag(start)
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.flush_text();
                self.start_tag(start)
            }
            _ => {
                // A '<' that cannot open a tag is literal text
                self.text.push('<');
                self.pos += 1;
                Ok(())
            }
        }
    }

    fn start_tag(&mut self, start: usize) -> Result<(), ParseError> {
        self.pos += 1;
        let name = self.read_name();
        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(ParseError::UnterminatedTag { offset: start }),
                Some('>') => {
                    self.pos += 1;
                    break;
                }
                Some('/') => {
                    self.pos += 1;
                    if self.peek() == Some('>') {
                        self.pos += 1;
                        self_closing = true;
                        break;
                    }
                }
                Some(_) => attributes.push(self.attribute()?),
            }
        }

        let element = Element::new(name, attributes);
        if self_closing || VOID_ELEMENTS.contains(&element.name.as_str()) {
            self.append(Node::Element(element));
        } else {
            self.open.push(element);
        }

        Ok(())
    }

    fn end_tag(&mut self, start: usize) -> Result<(), ParseError> {
        self.pos += 2;
        let name = self.read_name();

        // End tags cannot carry attributes; anything up to '>' is ignored
        let input = self.input;
        match input[self.pos..].find('>') {
            Some(close) => self.pos += close + 1,
            None => return Err(ParseError::UnterminatedTag { offset: start }),
        }

        if name.is_empty() {
            return Err(ParseError::EmptyEndTag { offset: start });
        }

        match self.open.pop() {
            Some(element) if element.name == name => {
                self.append(Node::Element(element));
                Ok(())
            }
            _ => Err(ParseError::UnexpectedEndTag {
                name,
                offset: start,
            }),
        }
    }

    fn attribute(&mut self) -> Result<(String, String), ParseError> {
        let input = self.input;
        let name_start = self.pos;

        // The first character is always part of the name, even '='
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '=' | '>' | '/') {
                break;
            }
            self.pos += c.len_utf8();
        }
        let name = input[name_start..self.pos].to_ascii_lowercase();

        self.skip_whitespace();
        if self.peek() != Some('=') {
            return Ok((name, String::new()));
        }
        self.pos += 1;
        self.skip_whitespace();

        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let value_start = self.pos + 1;
                let close = input[value_start..]
                    .find(quote)
                    .ok_or(ParseError::UnterminatedAttribute {
                        offset: name_start,
                    })?;
                self.pos = value_start + close + 1;
                &input[value_start..value_start + close]
            }
            _ => {
                let value_start = self.pos;
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || c == '>' {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
                &input[value_start..self.pos]
            }
        };

        Ok((name, entities::decode(value)))
    }

    fn comment(&mut self, start: usize) -> Result<(), ParseError> {
        let input = self.input;
        let body_start = start + "<!--".len();
        let close = input[body_start..]
            .find("-->")
            .ok_or(ParseError::UnterminatedComment { offset: start })?;
        self.append(Node::Comment(
            input[body_start..body_start + close].to_string(),
        ));
        self.pos = body_start + close + "-->".len();
        Ok(())
    }

    fn bogus_comment(&mut self, start: usize) -> Result<(), ParseError> {
        let input = self.input;
        let body_start = start + 2;
        let close = input[body_start..]
            .find('>')
            .ok_or(ParseError::UnterminatedComment { offset: start })?;
        self.append(Node::Comment(
            input[body_start..body_start + close].to_string(),
        ));
        self.pos = body_start + close + 1;
        Ok(())
    }

    fn read_name(&mut self) -> String {
        let input = self.input;
        let name_start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '/' | '>') {
                break;
            }
            self.pos += c.len_utf8();
        }
        input[name_start..self.pos].to_ascii_lowercase()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let raw = std::mem::take(&mut self.text);
            self.append(Node::Text(entities::decode(&raw)));
        }
    }

    fn append(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}
