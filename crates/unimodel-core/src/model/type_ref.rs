//! Type references with bracketed generic arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A type as written in source, split into a base name and its type arguments.
///
/// `Dict[str, List[int]]` parses into `Dict` with arguments `str` and
/// `List[int]`. Text that is not well-formed bracket syntax is kept whole as
/// the base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_args: Vec<TypeRef>,
}

impl TypeRef {
    /// A plain (non-generic) type.
    pub fn simple(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    /// Parse a type as written in source.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let Some(open) = text.find('[') else {
            return TypeRef::simple(text);
        };
        if !text.ends_with(']') || open == 0 {
            return TypeRef::simple(text);
        }
        match split_top_level(&text[open + 1..text.len() - 1]) {
            Some(args) => TypeRef {
                name: text[..open].trim().to_string(),
                type_args: args.into_iter().map(TypeRef::parse).collect(),
            },
            None => TypeRef::simple(text),
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.type_args.is_empty()
    }
}

/// Split on commas at bracket depth zero. Returns `None` on unbalanced brackets.
fn split_top_level(inner: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in inner.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    let last = inner[start..].trim();
    if !last.is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    Some(parts)
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.is_generic() {
            write!(f, "[")?;
            for (i, arg) in self.type_args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name() {
        let ty = TypeRef::parse("int");
        assert_eq!(ty.name, "int");
        assert!(!ty.is_generic());
    }

    #[test]
    fn nested_generics() {
        let ty = TypeRef::parse("Dict[str, List[int]]");
        assert_eq!(ty.name, "Dict");
        assert_eq!(ty.type_args.len(), 2);
        assert_eq!(ty.type_args[0], TypeRef::simple("str"));
        assert_eq!(ty.type_args[1].name, "List");
        assert_eq!(ty.type_args[1].type_args, vec![TypeRef::simple("int")]);
        assert_eq!(ty.to_string(), "Dict[str, List[int]]");
    }

    #[test]
    fn unbalanced_brackets_kept_whole() {
        let ty = TypeRef::parse("List[int");
        assert_eq!(ty.name, "List[int");
        let ty = TypeRef::parse("List[int]]");
        assert_eq!(ty.name, "List[int]]");
    }
}
