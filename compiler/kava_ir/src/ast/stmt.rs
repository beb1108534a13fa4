use crate::{Name, Span};

use super::{AnnotationId, ExprId, Modifiers, StmtId, TypeDeclId, TypeRefId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Block {
    pub stmts: Vec<StmtId>,
    pub span: Span,
}

/// One declarator of a local variable declaration. `int a, b;` yields two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalVar {
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationId>,
    pub ty: TypeRefId,
    pub name: Name,
    pub init: Option<ExprId>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    Block(Block),
    LocalVar(LocalVar),
    LocalType(TypeDeclId),
    Expr(ExprId),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    DoWhile {
        body: StmtId,
        cond: ExprId,
    },
    For {
        init: Vec<StmtId>,
        cond: Option<ExprId>,
        update: Vec<ExprId>,
        body: StmtId,
    },
    ForEach {
        var: LocalVar,
        iterable: ExprId,
        body: StmtId,
    },
    Switch {
        selector: ExprId,
        cases: Vec<SwitchCase>,
    },
    Try {
        resources: Vec<Resource>,
        body: Block,
        catches: Vec<CatchClause>,
        finally: Option<Block>,
    },
    Return(Option<ExprId>),
    Break(Option<Name>),
    Continue(Option<Name>),
    Throw(ExprId),
    Synchronized {
        lock: ExprId,
        body: Block,
    },
    Assert {
        cond: ExprId,
        message: Option<ExprId>,
    },
    Labeled {
        label: Name,
        body: StmtId,
    },
    ConstructorCall(ConstructorCall),
    Empty,
}

/// `case a, b:` or `default:` followed by its statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchCase {
    /// Empty for `default`.
    pub labels: Vec<ExprId>,
    pub body: Vec<StmtId>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Var(LocalVar),
    Expr(ExprId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatchClause {
    pub param: CatchParam,
    pub body: Block,
    pub span: Span,
}

/// `final IOException | SQLException e`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatchParam {
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationId>,
    pub types: Vec<TypeRefId>,
    pub name: Name,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CallKind {
    This,
    Super,
}

/// `this(...)` / `super(...)` / `outer.super(...)` at the start of a constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorCall {
    pub kind: CallKind,
    pub qualifier: Option<ExprId>,
    pub args: Vec<ExprId>,
    /// Synthesized `super()` for constructors without an explicit call.
    pub implicit: bool,
}
