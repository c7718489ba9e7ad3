//! Type name patterns used by rules to name a type.
//!
//! Three spellings are accepted:
//! - `A.B.Item`: exactly that non-generic type
//! - `A.B.Repository<A.B.Item>`: exactly that generic instantiation
//! - `A.B.Repository<>` / `A.B.Map<,>`: any instantiation of the generic
//!   definition with that arity (one more than the number of commas)

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypePattern {
    Exact {
        name: String,
        arguments: Vec<TypePattern>,
    },
    OpenGeneric {
        name: String,
        arity: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid type pattern `{input}`: {reason}")]
pub struct PatternError {
    pub input: String,
    pub reason: String,
}

impl TypePattern {
    pub fn parse(input: &str) -> Result<Self, PatternError> {
        let mut parser = Parser { src: input, pos: 0 };
        let pattern = parser.pattern().map_err(|reason| PatternError {
            input: input.to_string(),
            reason,
        })?;
        parser.skip_ws();
        if parser.pos != input.len() {
            return Err(PatternError {
                input: input.to_string(),
                reason: format!("unexpected `{}`", &input[parser.pos..]),
            });
        }
        Ok(pattern)
    }

    /// Fully-qualified name of the definition this pattern names.
    pub fn name(&self) -> &str {
        match self {
            TypePattern::Exact { name, .. } | TypePattern::OpenGeneric { name, .. } => name,
        }
    }

    pub fn simple_name(&self) -> &str {
        crate::simple_name_of(self.name())
    }

    /// Number of generic arguments the pattern expects.
    pub fn arity(&self) -> usize {
        match self {
            TypePattern::Exact { arguments, .. } => arguments.len(),
            TypePattern::OpenGeneric { arity, .. } => *arity,
        }
    }

    pub fn is_open_generic(&self) -> bool {
        matches!(self, TypePattern::OpenGeneric { .. })
    }

    /// Whether `reference` is the type this pattern names.
    pub fn matches(&self, reference: &TypeRef) -> bool {
        match self {
            TypePattern::OpenGeneric { name, arity } => {
                reference.name == *name && reference.arguments.len() == *arity
            }
            TypePattern::Exact { name, arguments } => {
                reference.name == *name
                    && reference.arguments.len() == arguments.len()
                    && arguments
                        .iter()
                        .zip(&reference.arguments)
                        .all(|(p, r)| p.matches(r))
            }
        }
    }
}

impl std::str::FromStr for TypePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypePattern {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TypePattern> for String {
    fn from(pattern: TypePattern) -> Self {
        pattern.to_string()
    }
}

impl std::fmt::Display for TypePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypePattern::OpenGeneric { name, arity } => {
                write!(f, "{name}<{}>", ",".repeat(arity.saturating_sub(1)))
            }
            TypePattern::Exact { name, arguments } => {
                f.write_str(name)?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn pattern(&mut self) -> Result<TypePattern, String> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, '<' | '>' | ',') || c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
        let name = &self.src[start..self.pos];
        if name.is_empty() {
            return Err("expected a type name".to_string());
        }
        if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
            return Err(format!("`{name}` is not a valid qualified name"));
        }
        let name = name.to_string();

        self.skip_ws();
        if self.peek() != Some('<') {
            return Ok(TypePattern::Exact {
                name,
                arguments: vec![],
            });
        }
        self.pos += 1;
        self.skip_ws();

        if matches!(self.peek(), Some('>') | Some(',')) {
            let mut arity = 1;
            loop {
                self.skip_ws();
                match self.peek() {
                    Some(',') => {
                        arity += 1;
                        self.pos += 1;
                    }
                    Some('>') => {
                        self.pos += 1;
                        return Ok(TypePattern::OpenGeneric { name, arity });
                    }
                    Some(c) => {
                        return Err(format!(
                            "open generic argument list may only contain commas, found `{c}`"
                        ))
                    }
                    None => return Err("unterminated `<`".to_string()),
                }
            }
        }

        let mut arguments = vec![self.pattern()?];
        loop {
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                    arguments.push(self.pattern()?);
                }
                Some('>') => {
                    self.pos += 1;
                    return Ok(TypePattern::Exact { name, arguments });
                }
                Some(c) => return Err(format!("unexpected `{c}` in argument list")),
                None => return Err("unterminated `<`".to_string()),
            }
        }
    }
}
