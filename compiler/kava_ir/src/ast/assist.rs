use crate::{Name, Span};

use super::{AnnotationId, StmtId, TypeDeclId};

/// What kind of completion the caret position asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssistKind {
    Package,
    Import,
    Type,
    /// Member name inside an annotation argument list, before `=`.
    AttributeName,
    /// Any expression or annotation value position.
    Name,
    /// Field or method name after a non-name receiver (`foo().ba|`).
    MemberAccess,
    /// Element of an array initializer outside annotations.
    ArrayInitializerElement,
}

impl AssistKind {
    /// Label used in rendered placeholders.
    pub fn label(self) -> &'static str {
        match self {
            AssistKind::Package => "CompleteOnPackage",
            AssistKind::Import => "CompleteOnImport",
            AssistKind::Type => "CompleteOnType",
            AssistKind::AttributeName => "CompleteOnAttributeName",
            AssistKind::Name => "CompleteOnName",
            AssistKind::MemberAccess => "CompleteOnMemberAccess",
            AssistKind::ArrayInitializerElement => "CompleteOnArrayInitializerElement",
        }
    }
}

/// Smallest complete node that encloses the completion point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssistParent {
    Unit,
    TypeDecl(TypeDeclId),
    /// A member of `type_decl`, by position in its member list.
    Member { type_decl: TypeDeclId, index: usize },
    Annotation(AnnotationId),
    Statement(StmtId),
}

/// The construct under the caret, replaced by a placeholder in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistNode {
    pub kind: AssistKind,
    /// Identifier text from its start up to the caret.
    pub identifier: Name,
    /// Dotted prefix before the identifier (`java.util` in `java.util.Li|`).
    pub qualifier: Vec<Name>,
    /// Span of the whole identifier token, or of the caret when it is empty.
    pub span: Span,
    pub caret: u32,
    pub parent: AssistParent,
    /// Declaration span of `parent`; always touches `caret`.
    pub parent_span: Span,
}
