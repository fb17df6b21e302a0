//! Type descriptor parsing for method signatures such as `(ILjava/lang/String;)[J`.

use serde::{Deserialize, Serialize};

/// Category of a method's return type, as far as body synthesis cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Void,
    Primitive,
    Array,
    Enum,
    Reference,
}

/// A method return type: its qualified source-level name plus its category.
///
/// Names follow source conventions: `int`, `void`, `java.lang.String`,
/// `java.lang.String[][]`, nested classes keep their `$` separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReturnType {
    pub name: String,
    pub kind: TypeKind,
}

impl ReturnType {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Parse the return type out of a method signature.
    /// Returns `None` for malformed signatures.
    pub fn from_signature(signature: &str) -> Option<Self> {
        let (_, ret) = signature.split_once(')')?;
        let (ty, rest) = parse_field_type(ret)?;
        if !rest.is_empty() {
            return None;
        }
        Some(ty)
    }

    /// Same type reclassified as an enumeration. Only reference types can be enums.
    #[must_use]
    pub fn into_enum(self) -> Self {
        match self.kind {
            TypeKind::Reference => Self {
                kind: TypeKind::Enum,
                ..self
            },
            _ => self,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.kind == TypeKind::Reference
    }
}

/// Parse one field type descriptor from the front of `input`, returning the
/// type and the unconsumed remainder.
pub fn parse_field_type(input: &str) -> Option<(ReturnType, &str)> {
    let mut chars = input.char_indices();
    let (_, tag) = chars.next()?;
    let primitive = |name: &str| Some((ReturnType::new(name, TypeKind::Primitive), &input[1..]));
    match tag {
        'V' => Some((ReturnType::new("void", TypeKind::Void), &input[1..])),
        'Z' => primitive("boolean"),
        'B' => primitive("byte"),
        'C' => primitive("char"),
        'S' => primitive("short"),
        'I' => primitive("int"),
        'J' => primitive("long"),
        'F' => primitive("float"),
        'D' => primitive("double"),
        'L' => {
            let end = input.find(';')?;
            let internal = &input[1..end];
            if internal.is_empty() {
                return None;
            }
            Some((
                ReturnType::new(internal.replace('/', "."), TypeKind::Reference),
                &input[end + 1..],
            ))
        }
        '[' => {
            let (component, rest) = parse_field_type(&input[1..])?;
            if component.kind == TypeKind::Void {
                return None;
            }
            Some((
                ReturnType::new(format!("{}[]", component.name), TypeKind::Array),
                rest,
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primitive_and_void_returns() {
        assert_eq!(
            ReturnType::from_signature("()V"),
            Some(ReturnType::new("void", TypeKind::Void))
        );
        assert_eq!(
            ReturnType::from_signature("(ILjava/lang/String;)J"),
            Some(ReturnType::new("long", TypeKind::Primitive))
        );
    }

    #[test]
    fn parses_reference_and_nested_names() {
        let ty = ReturnType::from_signature("()Lcom/acme/Outer$Inner;").unwrap();
        assert_eq!(ty.name, "com.acme.Outer$Inner");
        assert_eq!(ty.kind, TypeKind::Reference);
    }

    #[test]
    fn parses_multi_dimensional_arrays() {
        let ty = ReturnType::from_signature("()[[Ljava/lang/String;").unwrap();
        assert_eq!(ty.name, "java.lang.String[][]");
        assert_eq!(ty.kind, TypeKind::Array);
    }

    #[test]
    fn rejects_malformed_signatures() {
        assert_eq!(ReturnType::from_signature("V"), None);
        assert_eq!(ReturnType::from_signature("()Ljava/lang/String"), None);
        assert_eq!(ReturnType::from_signature("()[V"), None);
        assert_eq!(ReturnType::from_signature("()II"), None);
    }

    #[test]
    fn only_references_become_enums() {
        let prim = ReturnType::new("int", TypeKind::Primitive).into_enum();
        assert_eq!(prim.kind, TypeKind::Primitive);
        let reference = ReturnType::new("com.acme.Color", TypeKind::Reference).into_enum();
        assert_eq!(reference.kind, TypeKind::Enum);
    }
}
