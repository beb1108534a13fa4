//! Arena-backed syntax tree.
//!
//! Nodes refer to each other through `u32` ids into an [`AstArena`]. Recovery
//! can therefore replace or drop a subtree by rewriting one slot, and a
//! deferred body parse can fill in a member without touching its siblings.

mod annotation;
mod assist;
mod decl;
mod expr;
mod modifiers;
mod stmt;
mod ty;

pub use annotation::{Annotation, AnnotationKind, MemberValuePair};
pub use assist::{AssistKind, AssistNode, AssistParent};
pub use decl::{
    Body, CompilationUnit, Dangling, EnumConstant, FieldDecl, ImportDecl, Initializer, Member,
    MethodDecl, PackageDecl, Param, TypeDecl, TypeDeclKind,
};
pub use expr::{
    AssignOp, BinaryOp, Expr, ExprKind, LambdaBody, LambdaParam, LiteralKind, PostfixOp, UnaryOp,
};
pub use modifiers::Modifiers;
pub use stmt::{
    Block, CallKind, CatchClause, CatchParam, ConstructorCall, LocalVar, Resource, Stmt,
    StmtKind, SwitchCase,
};
pub use ty::{
    BoundKind, Dimension, PrimitiveType, TypeParam, TypeRef, TypeRefKind, TypeSegment,
    WildcardBound,
};

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_id!(
    /// Index of a type declaration in the arena.
    TypeDeclId
);
define_id!(
    /// Index of an expression in the arena.
    ExprId
);
define_id!(
    /// Index of a statement in the arena.
    StmtId
);
define_id!(
    /// Index of a type reference in the arena.
    TypeRefId
);
define_id!(
    /// Index of an annotation in the arena.
    AnnotationId
);

#[allow(
    clippy::cast_possible_truncation,
    reason = "node counts are bounded by token counts, which fit in u32"
)]
fn next_index<T>(nodes: &[T]) -> u32 {
    nodes.len() as u32
}

/// Owner of every node produced by one parse.
#[derive(Clone, Debug, Default)]
pub struct AstArena {
    types: Vec<TypeDecl>,
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    type_refs: Vec<TypeRef>,
    annotations: Vec<Annotation>,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_type_decl(&mut self, decl: TypeDecl) -> TypeDeclId {
        let id = TypeDeclId::new(next_index(&self.types));
        self.types.push(decl);
        id
    }

    #[inline]
    pub fn type_decl(&self, id: TypeDeclId) -> &TypeDecl {
        &self.types[id.index()]
    }

    #[inline]
    pub fn type_decl_mut(&mut self, id: TypeDeclId) -> &mut TypeDecl {
        &mut self.types[id.index()]
    }

    /// All type declaration ids in allocation order.
    pub fn type_decl_ids(&self) -> impl Iterator<Item = TypeDeclId> {
        (0..next_index(&self.types)).map(TypeDeclId::new)
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(&self.exprs));
        self.exprs.push(expr);
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(&self.stmts));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_mut(&mut self, id: StmtId) -> &mut Stmt {
        &mut self.stmts[id.index()]
    }

    pub fn alloc_type_ref(&mut self, ty: TypeRef) -> TypeRefId {
        let id = TypeRefId::new(next_index(&self.type_refs));
        self.type_refs.push(ty);
        id
    }

    #[inline]
    pub fn type_ref(&self, id: TypeRefId) -> &TypeRef {
        &self.type_refs[id.index()]
    }

    #[inline]
    pub fn type_ref_mut(&mut self, id: TypeRefId) -> &mut TypeRef {
        &mut self.type_refs[id.index()]
    }

    pub fn alloc_annotation(&mut self, annotation: Annotation) -> AnnotationId {
        let id = AnnotationId::new(next_index(&self.annotations));
        self.annotations.push(annotation);
        id
    }

    #[inline]
    pub fn annotation(&self, id: AnnotationId) -> &Annotation {
        &self.annotations[id.index()]
    }

    #[inline]
    pub fn annotation_mut(&mut self, id: AnnotationId) -> &mut Annotation {
        &mut self.annotations[id.index()]
    }

    pub fn type_decl_count(&self) -> usize {
        self.types.len()
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }
}
