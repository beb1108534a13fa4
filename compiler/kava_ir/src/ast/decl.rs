use crate::{Name, Span, TokenRange};

use super::{
    AnnotationId, AssistNode, AstArena, Block, ExprId, Modifiers, StmtId, TypeDeclId, TypeParam,
    TypeRefId,
};

/// Root of a parse. Owns nothing directly; nodes live in the [`AstArena`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    pub package: Option<PackageDecl>,
    pub imports: Vec<ImportDecl>,
    pub types: Vec<TypeDeclId>,
    /// Modifiers and annotations left over at end of file.
    pub trailing: Option<Dangling>,
    /// The single completion placeholder, when parsed for assist.
    pub assist: Option<AssistNode>,
    /// Always `0..source_len`.
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageDecl {
    pub annotations: Vec<AnnotationId>,
    pub name: Vec<Name>,
    pub is_assist: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDecl {
    pub name: Vec<Name>,
    pub is_static: bool,
    /// Ends in `.*`.
    pub on_demand: bool,
    pub is_assist: bool,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDeclKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TypeDeclKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeDeclKind::Class => "class",
            TypeDeclKind::Interface => "interface",
            TypeDeclKind::Enum => "enum",
            TypeDeclKind::Annotation => "@interface",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub kind: TypeDeclKind,
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationId>,
    /// Empty for anonymous classes.
    pub name: Name,
    pub name_span: Span,
    pub type_params: Vec<TypeParam>,
    pub superclass: Option<TypeRefId>,
    pub superinterfaces: Vec<TypeRefId>,
    /// Members in declaration order.
    pub members: Vec<Member>,
    pub is_local: bool,
    pub is_anonymous: bool,
    /// From the first modifier or annotation to the closing brace.
    pub declaration_span: Span,
    /// From `{` to `}` (or to where recovery closed the body).
    pub body_span: Span,
}

impl TypeDecl {
    pub fn has_explicit_constructor(&self) -> bool {
        self.members.iter().any(|member| {
            matches!(member, Member::Method(m) if m.is_constructor && !m.is_default_constructor)
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Initializer(Initializer),
    Type(TypeDeclId),
    EnumConstant(EnumConstant),
    /// Modifiers or annotations with no declaration after them.
    Dangling(Dangling),
}

impl Member {
    pub fn declaration_span(&self, arena: &AstArena) -> Span {
        match self {
            Member::Field(field) => field.declaration_span,
            Member::Method(method) => method.declaration_span,
            Member::Initializer(init) => init.declaration_span,
            Member::Type(id) => arena.type_decl(*id).declaration_span,
            Member::EnumConstant(constant) => constant.declaration_span,
            Member::Dangling(dangling) => dangling.span,
        }
    }

    pub fn body(&self) -> Option<&Body> {
        match self {
            Member::Method(method) => Some(&method.body),
            Member::Initializer(init) => Some(&init.body),
            _ => None,
        }
    }
}

/// One field declarator. `int a, b[];` yields two fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationId>,
    /// Declared type with any dimensions written after the name folded in.
    pub ty: TypeRefId,
    pub name: Name,
    pub name_span: Span,
    pub init: Option<ExprId>,
    pub declaration_span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDecl {
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationId>,
    pub type_params: Vec<TypeParam>,
    /// `None` for constructors.
    pub return_type: Option<TypeRefId>,
    pub name: Name,
    pub name_span: Span,
    pub params: Vec<Param>,
    pub throws: Vec<TypeRefId>,
    /// `default` value of an annotation type element.
    pub default_value: Option<ExprId>,
    pub body: Body,
    /// Explicit or implicit `this(...)`/`super(...)`; set once the body is parsed.
    pub constructor_call: Option<StmtId>,
    pub is_constructor: bool,
    /// Synthesized because the class declares no constructor.
    pub is_default_constructor: bool,
    pub declaration_span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationId>,
    pub ty: TypeRefId,
    pub is_varargs: bool,
    /// Annotations written before `...`.
    pub varargs_annotations: Vec<AnnotationId>,
    pub name: Name,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Initializer {
    pub is_static: bool,
    pub body: Body,
    pub declaration_span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumConstant {
    pub annotations: Vec<AnnotationId>,
    pub name: Name,
    /// `None` when no argument list was written.
    pub args: Option<Vec<ExprId>>,
    /// Constant-specific class body.
    pub body: Option<TypeDeclId>,
    pub declaration_span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dangling {
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationId>,
    pub span: Span,
}

/// Executable body of a method or initializer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// `;` (abstract, native, interface methods).
    None,
    /// Skipped by a structure-only parse; holds the tokens from `{` to the end.
    Unparsed(TokenRange),
    Parsed(Block),
    /// Recovery could not close the body; its statements were discarded.
    Dropped,
}

impl Body {
    pub fn is_unparsed(&self) -> bool {
        matches!(self, Body::Unparsed(_))
    }
}
