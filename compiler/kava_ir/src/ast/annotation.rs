use crate::{Name, Span};

use super::ExprId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    /// Dotted annotation type name.
    pub name: Vec<Name>,
    pub kind: AnnotationKind,
    /// The annotation's type name is the completion placeholder.
    pub is_assist: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnnotationKind {
    /// `@A`
    Marker,
    /// `@A(value)`
    SingleMember(ExprId),
    /// `@A(x = 1, y = 2)`
    Normal(Vec<MemberValuePair>),
}

/// `name = value` inside a normal annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberValuePair {
    pub name: Name,
    pub value: ExprId,
    /// The pair's name is the completion placeholder; `value` is then a
    /// missing expression and is not printed.
    pub is_assist: bool,
    pub span: Span,
}
