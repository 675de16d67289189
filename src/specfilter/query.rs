//! # Query Language
//!
//! A small text syntax for building specifications at runtime, used by the
//! CLI and by anything else that receives filters as strings.
//!
//! ```text
//! expr  := term ('|' term)*
//! term  := unary ('&' unary)*
//! unary := '!' unary | '(' expr ')' | '*' | cond
//! cond  := IDENT ('=' | '!=') VALUE (',' VALUE)*
//! ```
//!
//! `!` binds tighter than `&`, which binds tighter than `|`. `&&` and `||` are
//! accepted as spellings of `&` and `|`. `*` matches every item. Values are
//! bare words or double-quoted strings, where `\"` and `\\` escape a quote
//! and a backslash. Nesting through `!` and parentheses is limited to
//! [`MAX_DEPTH`] levels.
//!
//! Parsing happens in two steps:
//!
//! 1. [`parse`] turns text into a [`Query`] tree (syntax only)
//! 2. [`Query::compile`] checks the tree against an item type's attribute
//!    schema and produces an owned [`BoxedSpec`]
//!
//! On list attributes `=` means "contains" for one value and "contains all"
//! for several; `!=` negates that. An empty query matches everything.

use crate::attributes::{lookup, AttrSpec, AttrValue, AttributeKind, Attributes};
use crate::error::{Result, SpecFilterError};
use crate::specification::{AllOf, AlwaysTrue, AnyOf, BoxedSpec, Not};
use std::fmt;

/// Deepest nesting of `!` and parentheses a query may use.
pub const MAX_DEPTH: usize = 256;

/// Comparison used in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CondOp {
    Eq,
    Ne,
}

impl CondOp {
    fn symbol(&self) -> &'static str {
        match self {
            CondOp::Eq => "=",
            CondOp::Ne => "!=",
        }
    }
}

/// Parsed, not yet validated, query tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The empty query.
    All,
    Cond {
        attr: String,
        op: CondOp,
        values: Vec<String>,
        position: usize,
    },
    Not(Box<Query>),
    And(Vec<Query>),
    Or(Vec<Query>),
}

impl Query {
    /// Validate against `T`'s schema and build the specification.
    pub fn compile<T: Attributes + 'static>(&self) -> Result<BoxedSpec<T>> {
        match self {
            Query::All => Ok(Box::new(AlwaysTrue)),
            Query::Cond {
                attr,
                op,
                values,
                position,
            } => compile_cond::<T>(attr, *op, values, *position),
            Query::Not(inner) => Ok(Box::new(Not::new(inner.compile::<T>()?))),
            Query::And(children) => {
                let specs = children
                    .iter()
                    .map(|q| q.compile::<T>())
                    .collect::<Result<Vec<_>>>()?;
                Ok(Box::new(AllOf::new(specs)))
            }
            Query::Or(children) => {
                let specs = children
                    .iter()
                    .map(|q| q.compile::<T>())
                    .collect::<Result<Vec<_>>>()?;
                Ok(Box::new(AnyOf::new(specs)))
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::All => f.write_str("*"),
            Query::Cond {
                attr, op, values, ..
            } => {
                let rendered: Vec<String> = values.iter().map(|v| quote_if_needed(v)).collect();
                write!(f, "{}{}{}", attr, op.symbol(), rendered.join(","))
            }
            Query::Not(inner) => match inner.as_ref() {
                Query::And(_) | Query::Or(_) => write!(f, "!({})", inner),
                _ => write!(f, "!{}", inner),
            },
            Query::And(children) => write_joined(f, children, " & ", true),
            Query::Or(children) => write_joined(f, children, " | ", false),
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    children: &[Query],
    sep: &str,
    wrap_or: bool,
) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        if wrap_or && matches!(child, Query::Or(_)) {
            write!(f, "({})", child)?;
        } else {
            write!(f, "{}", child)?;
        }
    }
    Ok(())
}

fn quote_if_needed(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_word_char) {
        value.to_string()
    } else {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    }
}

fn compile_cond<T: Attributes + 'static>(
    attr: &str,
    op: CondOp,
    values: &[String],
    position: usize,
) -> Result<BoxedSpec<T>> {
    let def = lookup(T::schema(), attr)
        .ok_or_else(|| SpecFilterError::UnknownAttribute(attr.to_string()))?;
    if !def.filterable {
        return Err(SpecFilterError::NotFilterable(attr.to_string()));
    }
    if let Some(bad) = values.iter().find(|v| !def.accepts(v)) {
        return Err(SpecFilterError::InvalidValue {
            attr: attr.to_string(),
            value: bad.clone(),
        });
    }

    if def.kind == AttributeKind::List {
        let spec = if values.len() == 1 {
            AttrSpec::contains(attr, values[0].clone())
        } else {
            AttrSpec::contains_all(attr, values.to_vec())
        };
        let compiled: BoxedSpec<T> = match op {
            CondOp::Eq => Box::new(spec),
            CondOp::Ne => Box::new(Not::new(spec)),
        };
        return Ok(compiled);
    }

    let [value] = values else {
        return Err(SpecFilterError::Query {
            position,
            message: format!("'{}' takes a single value", attr),
        });
    };
    let value = match def.kind {
        AttributeKind::Enum => AttrValue::Enum(value.to_ascii_lowercase()),
        AttributeKind::Bool => AttrValue::Bool(value == "true"),
        AttributeKind::Text | AttributeKind::List => AttrValue::Text(value.clone()),
    };
    let spec = match op {
        CondOp::Eq => AttrSpec::eq(attr, value),
        CondOp::Ne => AttrSpec::ne(attr, value),
    };
    Ok(Box::new(spec))
}

/// Parse text and compile it for `T` in one step.
pub fn parse_query<T: Attributes + 'static>(input: &str) -> Result<BoxedSpec<T>> {
    parse(input)?.compile::<T>()
}

/// Parse text into a [`Query`] tree.
pub fn parse(input: &str) -> Result<Query> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Ok(Query::All);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        end: input.chars().count() + 1,
    };
    let query = parser.parse_or()?;
    if let Some(token) = parser.peek() {
        return Err(SpecFilterError::Query {
            position: token.position,
            message: format!("unexpected {}", token.kind.describe()),
        });
    }
    Ok(query)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Word(String),
    Quoted(String),
    Eq,
    Ne,
    And,
    Or,
    Not,
    LParen,
    RParen,
    Comma,
    Star,
}

impl TokenKind {
    fn describe(&self) -> String {
        match self {
            TokenKind::Word(w) => format!("'{}'", w),
            TokenKind::Quoted(w) => format!("\"{}\"", w),
            TokenKind::Eq => "'='".to_string(),
            TokenKind::Ne => "'!='".to_string(),
            TokenKind::And => "'&'".to_string(),
            TokenKind::Or => "'|'".to_string(),
            TokenKind::Not => "'!'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Star => "'*'".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    /// 1-based column of the token's first character.
    position: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let position = i + 1;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let (kind, width) = match c {
            '=' => (TokenKind::Eq, 1),
            '!' if chars.get(i + 1) == Some(&'=') => (TokenKind::Ne, 2),
            '!' => (TokenKind::Not, 1),
            '&' if chars.get(i + 1) == Some(&'&') => (TokenKind::And, 2),
            '&' => (TokenKind::And, 1),
            '|' if chars.get(i + 1) == Some(&'|') => (TokenKind::Or, 2),
            '|' => (TokenKind::Or, 1),
            '(' => (TokenKind::LParen, 1),
            ')' => (TokenKind::RParen, 1),
            ',' => (TokenKind::Comma, 1),
            '*' => (TokenKind::Star, 1),
            '"' => {
                let mut value = String::new();
                let mut j = i + 1;
                loop {
                    match chars.get(j) {
                        None => {
                            return Err(SpecFilterError::Query {
                                position,
                                message: "unterminated string".to_string(),
                            })
                        }
                        Some('\\') if matches!(chars.get(j + 1), Some('"') | Some('\\')) => {
                            value.push(chars[j + 1]);
                            j += 2;
                        }
                        Some('"') => break,
                        Some(ch) => {
                            value.push(*ch);
                            j += 1;
                        }
                    }
                }
                (TokenKind::Quoted(value), j + 1 - i)
            }
            c if is_word_char(c) => {
                let word: String = chars[i..].iter().take_while(|c| is_word_char(**c)).collect();
                let width = word.chars().count();
                (TokenKind::Word(word), width)
            }
            other => {
                return Err(SpecFilterError::Query {
                    position,
                    message: format!("unexpected character '{}'", other),
                })
            }
        };

        tokens.push(Token { kind, position });
        i += width;
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Current nesting through `!` and `(`.
    depth: usize,
    /// Column reported for errors at end of input.
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next_if(&mut self, kind: &TokenKind) -> bool {
        if self.peek().map(|t| &t.kind) == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error_here(&self, expected: &str) -> SpecFilterError {
        match self.peek() {
            Some(token) => SpecFilterError::Query {
                position: token.position,
                message: format!("expected {}, found {}", expected, token.kind.describe()),
            },
            None => SpecFilterError::Query {
                position: self.end,
                message: format!("expected {}, found end of query", expected),
            },
        }
    }

    fn parse_or(&mut self) -> Result<Query> {
        let mut children = vec![self.parse_and()?];
        while self.next_if(&TokenKind::Or) {
            children.push(self.parse_and()?);
        }
        Ok(if children.len() == 1 {
            children.remove(0)
        } else {
            Query::Or(children)
        })
    }

    fn parse_and(&mut self) -> Result<Query> {
        let mut children = vec![self.parse_unary()?];
        while self.next_if(&TokenKind::And) {
            children.push(self.parse_unary()?);
        }
        Ok(if children.len() == 1 {
            children.remove(0)
        } else {
            Query::And(children)
        })
    }

    fn parse_unary(&mut self) -> Result<Query> {
        let position = self.peek().map_or(self.end, |t| t.position);
        if self.next_if(&TokenKind::Not) {
            self.descend(position)?;
            let inner = self.parse_unary()?;
            self.depth -= 1;
            return Ok(Query::Not(Box::new(inner)));
        }
        if self.next_if(&TokenKind::LParen) {
            self.descend(position)?;
            let inner = self.parse_or()?;
            if !self.next_if(&TokenKind::RParen) {
                return Err(self.error_here("')'"));
            }
            self.depth -= 1;
            return Ok(inner);
        }
        if self.next_if(&TokenKind::Star) {
            return Ok(Query::All);
        }
        self.parse_cond()
    }

    fn descend(&mut self, position: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(SpecFilterError::Query {
                position,
                message: "query nested too deeply".to_string(),
            });
        }
        Ok(())
    }

    fn parse_cond(&mut self) -> Result<Query> {
        let (attr, position) = match self.peek() {
            Some(Token {
                kind: TokenKind::Word(w),
                position,
            }) => (w.clone(), *position),
            _ => return Err(self.error_here("an attribute name")),
        };
        self.pos += 1;

        let op = if self.next_if(&TokenKind::Eq) {
            CondOp::Eq
        } else if self.next_if(&TokenKind::Ne) {
            CondOp::Ne
        } else {
            return Err(self.error_here("'=' or '!='"));
        };

        let mut values = vec![self.parse_value()?];
        while self.next_if(&TokenKind::Comma) {
            values.push(self.parse_value()?);
        }

        Ok(Query::Cond {
            attr,
            op,
            values,
            position,
        })
    }

    fn parse_value(&mut self) -> Result<String> {
        let value = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Word(v)) | Some(TokenKind::Quoted(v)) => v.clone(),
            _ => return Err(self.error_here("a value")),
        };
        self.pos += 1;
        Ok(value)
    }
}
