use crate::{Name, Span, TokenKind};

use super::{AnnotationId, TypeRefId};

/// A type as written in source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRef {
    pub kind: TypeRefKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRefKind {
    /// `int`, `@A boolean`, `void`.
    Primitive {
        keyword: PrimitiveType,
        annotations: Vec<AnnotationId>,
    },
    /// Simple, qualified or parameterized class type: `a.b.@A C<D>.E`.
    Named(Vec<TypeSegment>),
    /// Array of `element`. `dims[0]` is the leftmost (outermost) dimension.
    Array {
        element: TypeRefId,
        dims: Vec<Dimension>,
    },
    /// `?`, `? extends T`, `? super T` in a type argument list.
    Wildcard {
        annotations: Vec<AnnotationId>,
        bound: Option<WildcardBound>,
    },
    /// A type was required but nothing parseable was found.
    Missing,
    /// Placeholder for the type name under the completion caret.
    Assist,
}

/// One dotted component of a class type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSegment {
    pub annotations: Vec<AnnotationId>,
    pub name: Name,
    /// `None` for no argument list, `Some(vec![])` for the diamond `<>`.
    pub type_args: Option<Vec<TypeRefId>>,
    pub span: Span,
}

/// One `[]` pair, with any type-use annotations written before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimension {
    pub annotations: Vec<AnnotationId>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WildcardBound {
    pub kind: BoundKind,
    pub ty: TypeRefId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundKind {
    Extends,
    Super,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let prim = match kind {
            TokenKind::Boolean => PrimitiveType::Boolean,
            TokenKind::Byte => PrimitiveType::Byte,
            TokenKind::Char => PrimitiveType::Char,
            TokenKind::Short => PrimitiveType::Short,
            TokenKind::Int => PrimitiveType::Int,
            TokenKind::Long => PrimitiveType::Long,
            TokenKind::Float => PrimitiveType::Float,
            TokenKind::Double => PrimitiveType::Double,
            TokenKind::Void => PrimitiveType::Void,
            _ => return None,
        };
        Some(prim)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }
}

/// A generic type parameter: `@A T extends B & C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParam {
    pub annotations: Vec<AnnotationId>,
    pub name: Name,
    pub bounds: Vec<TypeRefId>,
    pub span: Span,
}
