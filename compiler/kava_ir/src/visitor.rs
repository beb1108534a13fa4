//! AST Visitor Pattern
//!
//! Generic read-only traversal of the arena-allocated tree. Default
//! implementations call the matching `walk_*` function, which visits every
//! child in source order. Override `visit_*` to act on a node, then call the
//! `walk_*` function to keep descending.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, id: ExprId, expr: &'ast Expr, arena: &'ast AstArena) {
//!         if matches!(expr.kind, ExprKind::MethodCall { .. }) {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, id, expr, arena);
//!     }
//! }
//! ```

use crate::ast::{
    Annotation, AnnotationId, AnnotationKind, AstArena, Block, Body, CompilationUnit, Expr,
    ExprId, ExprKind, LambdaBody, LocalVar, Member, Resource, Stmt, StmtId, StmtKind, TypeDecl,
    TypeDeclId, TypeParam, TypeRef, TypeRefId, TypeRefKind,
};

pub trait Visitor<'ast> {
    fn visit_unit(&mut self, unit: &'ast CompilationUnit, arena: &'ast AstArena) {
        walk_unit(self, unit, arena);
    }

    fn visit_type_decl(&mut self, id: TypeDeclId, decl: &'ast TypeDecl, arena: &'ast AstArena) {
        walk_type_decl(self, id, decl, arena);
    }

    /// Visit the member at `index` of `owner`.
    fn visit_member(
        &mut self,
        owner: TypeDeclId,
        index: usize,
        member: &'ast Member,
        arena: &'ast AstArena,
    ) {
        let _ = (owner, index);
        walk_member(self, member, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, stmt: &'ast Stmt, arena: &'ast AstArena) {
        walk_stmt(self, id, stmt, arena);
    }

    fn visit_expr(&mut self, id: ExprId, expr: &'ast Expr, arena: &'ast AstArena) {
        walk_expr(self, id, expr, arena);
    }

    fn visit_type_ref(&mut self, id: TypeRefId, ty: &'ast TypeRef, arena: &'ast AstArena) {
        walk_type_ref(self, id, ty, arena);
    }

    fn visit_annotation(
        &mut self,
        id: AnnotationId,
        annotation: &'ast Annotation,
        arena: &'ast AstArena,
    ) {
        walk_annotation(self, id, annotation, arena);
    }

    // Id-based convenience helpers

    fn visit_type_decl_id(&mut self, id: TypeDeclId, arena: &'ast AstArena) {
        self.visit_type_decl(id, arena.type_decl(id), arena);
    }

    fn visit_stmt_id(&mut self, id: StmtId, arena: &'ast AstArena) {
        self.visit_stmt(id, arena.stmt(id), arena);
    }

    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast AstArena) {
        self.visit_expr(id, arena.expr(id), arena);
    }

    fn visit_type_ref_id(&mut self, id: TypeRefId, arena: &'ast AstArena) {
        self.visit_type_ref(id, arena.type_ref(id), arena);
    }

    fn visit_annotation_id(&mut self, id: AnnotationId, arena: &'ast AstArena) {
        self.visit_annotation(id, arena.annotation(id), arena);
    }
}

pub fn walk_unit<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    unit: &'ast CompilationUnit,
    arena: &'ast AstArena,
) {
    if let Some(package) = &unit.package {
        walk_annotations(visitor, &package.annotations, arena);
    }
    for &id in &unit.types {
        visitor.visit_type_decl_id(id, arena);
    }
    if let Some(trailing) = &unit.trailing {
        walk_annotations(visitor, &trailing.annotations, arena);
    }
}

pub fn walk_type_decl<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: TypeDeclId,
    decl: &'ast TypeDecl,
    arena: &'ast AstArena,
) {
    walk_annotations(visitor, &decl.annotations, arena);
    walk_type_params(visitor, &decl.type_params, arena);
    if let Some(superclass) = decl.superclass {
        visitor.visit_type_ref_id(superclass, arena);
    }
    for &interface in &decl.superinterfaces {
        visitor.visit_type_ref_id(interface, arena);
    }
    for (index, member) in decl.members.iter().enumerate() {
        visitor.visit_member(id, index, member, arena);
    }
}

pub fn walk_member<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    member: &'ast Member,
    arena: &'ast AstArena,
) {
    match member {
        Member::Field(field) => {
            walk_annotations(visitor, &field.annotations, arena);
            visitor.visit_type_ref_id(field.ty, arena);
            if let Some(init) = field.init {
                visitor.visit_expr_id(init, arena);
            }
        }
        Member::Method(method) => {
            walk_annotations(visitor, &method.annotations, arena);
            walk_type_params(visitor, &method.type_params, arena);
            if let Some(ret) = method.return_type {
                visitor.visit_type_ref_id(ret, arena);
            }
            for param in &method.params {
                walk_annotations(visitor, &param.annotations, arena);
                visitor.visit_type_ref_id(param.ty, arena);
                walk_annotations(visitor, &param.varargs_annotations, arena);
            }
            for &thrown in &method.throws {
                visitor.visit_type_ref_id(thrown, arena);
            }
            if let Some(value) = method.default_value {
                visitor.visit_expr_id(value, arena);
            }
            if let Some(call) = method.constructor_call {
                visitor.visit_stmt_id(call, arena);
            }
            walk_body(visitor, &method.body, arena);
        }
        Member::Initializer(init) => walk_body(visitor, &init.body, arena),
        Member::Type(id) => visitor.visit_type_decl_id(*id, arena),
        Member::EnumConstant(constant) => {
            walk_annotations(visitor, &constant.annotations, arena);
            for &arg in constant.args.iter().flatten() {
                visitor.visit_expr_id(arg, arena);
            }
            if let Some(body) = constant.body {
                visitor.visit_type_decl_id(body, arena);
            }
        }
        Member::Dangling(dangling) => walk_annotations(visitor, &dangling.annotations, arena),
    }
}

pub fn walk_body<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    body: &'ast Body,
    arena: &'ast AstArena,
) {
    if let Body::Parsed(block) = body {
        walk_block(visitor, block, arena);
    }
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    block: &'ast Block,
    arena: &'ast AstArena,
) {
    for &stmt in &block.stmts {
        visitor.visit_stmt_id(stmt, arena);
    }
}

fn walk_local_var<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    var: &'ast LocalVar,
    arena: &'ast AstArena,
) {
    walk_annotations(visitor, &var.annotations, arena);
    visitor.visit_type_ref_id(var.ty, arena);
    if let Some(init) = var.init {
        visitor.visit_expr_id(init, arena);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    _id: StmtId,
    stmt: &'ast Stmt,
    arena: &'ast AstArena,
) {
    match &stmt.kind {
        StmtKind::Block(block) => walk_block(visitor, block, arena),
        StmtKind::LocalVar(var) => walk_local_var(visitor, var, arena),
        StmtKind::LocalType(id) => visitor.visit_type_decl_id(*id, arena),
        StmtKind::Expr(expr) | StmtKind::Throw(expr) => visitor.visit_expr_id(*expr, arena),
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr_id(*cond, arena);
            visitor.visit_stmt_id(*then_branch, arena);
            if let Some(else_branch) = else_branch {
                visitor.visit_stmt_id(*else_branch, arena);
            }
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr_id(*cond, arena);
            visitor.visit_stmt_id(*body, arena);
        }
        StmtKind::DoWhile { body, cond } => {
            visitor.visit_stmt_id(*body, arena);
            visitor.visit_expr_id(*cond, arena);
        }
        StmtKind::For {
            init,
            cond,
            update,
            body,
        } => {
            for &stmt in init {
                visitor.visit_stmt_id(stmt, arena);
            }
            if let Some(cond) = cond {
                visitor.visit_expr_id(*cond, arena);
            }
            for &expr in update {
                visitor.visit_expr_id(expr, arena);
            }
            visitor.visit_stmt_id(*body, arena);
        }
        StmtKind::ForEach {
            var,
            iterable,
            body,
        } => {
            walk_local_var(visitor, var, arena);
            visitor.visit_expr_id(*iterable, arena);
            visitor.visit_stmt_id(*body, arena);
        }
        StmtKind::Switch { selector, cases } => {
            visitor.visit_expr_id(*selector, arena);
            for case in cases {
                for &label in &case.labels {
                    visitor.visit_expr_id(label, arena);
                }
                for &stmt in &case.body {
                    visitor.visit_stmt_id(stmt, arena);
                }
            }
        }
        StmtKind::Try {
            resources,
            body,
            catches,
            finally,
        } => {
            for resource in resources {
                match resource {
                    Resource::Var(var) => walk_local_var(visitor, var, arena),
                    Resource::Expr(expr) => visitor.visit_expr_id(*expr, arena),
                }
            }
            walk_block(visitor, body, arena);
            for catch in catches {
                walk_annotations(visitor, &catch.param.annotations, arena);
                for &ty in &catch.param.types {
                    visitor.visit_type_ref_id(ty, arena);
                }
                walk_block(visitor, &catch.body, arena);
            }
            if let Some(finally) = finally {
                walk_block(visitor, finally, arena);
            }
        }
        StmtKind::Return(expr) => {
            if let Some(expr) = expr {
                visitor.visit_expr_id(*expr, arena);
            }
        }
        StmtKind::Synchronized { lock, body } => {
            visitor.visit_expr_id(*lock, arena);
            walk_block(visitor, body, arena);
        }
        StmtKind::Assert { cond, message } => {
            visitor.visit_expr_id(*cond, arena);
            if let Some(message) = message {
                visitor.visit_expr_id(*message, arena);
            }
        }
        StmtKind::Labeled { body, .. } => visitor.visit_stmt_id(*body, arena),
        StmtKind::ConstructorCall(call) => {
            if let Some(qualifier) = call.qualifier {
                visitor.visit_expr_id(qualifier, arena);
            }
            for &arg in &call.args {
                visitor.visit_expr_id(arg, arena);
            }
        }
        StmtKind::Break(_) | StmtKind::Continue(_) | StmtKind::Empty => {}
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    _id: ExprId,
    expr: &'ast Expr,
    arena: &'ast AstArena,
) {
    match &expr.kind {
        ExprKind::Literal { .. }
        | ExprKind::Name(_)
        | ExprKind::This { .. }
        | ExprKind::Super { .. }
        | ExprKind::Missing => {}
        ExprKind::FieldAccess { receiver, .. } => visitor.visit_expr_id(*receiver, arena),
        ExprKind::MethodCall {
            receiver,
            type_args,
            args,
            ..
        } => {
            if let Some(receiver) = receiver {
                visitor.visit_expr_id(*receiver, arena);
            }
            for &ty in type_args {
                visitor.visit_type_ref_id(ty, arena);
            }
            for &arg in args {
                visitor.visit_expr_id(arg, arena);
            }
        }
        ExprKind::New {
            outer,
            ty,
            args,
            body,
        } => {
            if let Some(outer) = outer {
                visitor.visit_expr_id(*outer, arena);
            }
            visitor.visit_type_ref_id(*ty, arena);
            for &arg in args {
                visitor.visit_expr_id(arg, arena);
            }
            if let Some(body) = body {
                visitor.visit_type_decl_id(*body, arena);
            }
        }
        ExprKind::NewArray {
            element,
            dims,
            init,
        } => {
            visitor.visit_type_ref_id(*element, arena);
            for dim in dims.iter().flatten() {
                visitor.visit_expr_id(*dim, arena);
            }
            if let Some(init) = init {
                visitor.visit_expr_id(*init, arena);
            }
        }
        ExprKind::ArrayInit(elements) => {
            for &element in elements {
                visitor.visit_expr_id(element, arena);
            }
        }
        ExprKind::ArrayAccess { array, index } => {
            visitor.visit_expr_id(*array, arena);
            visitor.visit_expr_id(*index, arena);
        }
        ExprKind::Unary { operand, .. } | ExprKind::Postfix { operand, .. } => {
            visitor.visit_expr_id(*operand, arena);
        }
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr_id(*left, arena);
            visitor.visit_expr_id(*right, arena);
        }
        ExprKind::Assign { target, value, .. } => {
            visitor.visit_expr_id(*target, arena);
            visitor.visit_expr_id(*value, arena);
        }
        ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        } => {
            visitor.visit_expr_id(*cond, arena);
            visitor.visit_expr_id(*then_expr, arena);
            visitor.visit_expr_id(*else_expr, arena);
        }
        ExprKind::InstanceOf { expr, ty } => {
            visitor.visit_expr_id(*expr, arena);
            visitor.visit_type_ref_id(*ty, arena);
        }
        ExprKind::Cast { ty, expr } => {
            visitor.visit_type_ref_id(*ty, arena);
            visitor.visit_expr_id(*expr, arena);
        }
        ExprKind::Lambda { params, body } => {
            for ty in params.iter().filter_map(|param| param.ty) {
                visitor.visit_type_ref_id(ty, arena);
            }
            match body {
                LambdaBody::Expr(expr) => visitor.visit_expr_id(*expr, arena),
                LambdaBody::Block(block) => walk_block(visitor, block, arena),
            }
        }
        ExprKind::MethodRef { target, .. } => visitor.visit_expr_id(*target, arena),
        ExprKind::ClassLiteral(ty) | ExprKind::TypeExpr(ty) => {
            visitor.visit_type_ref_id(*ty, arena);
        }
        ExprKind::Paren(inner) => visitor.visit_expr_id(*inner, arena),
        ExprKind::Annotation(id) => visitor.visit_annotation_id(*id, arena),
        ExprKind::Assist { receiver } => {
            if let Some(receiver) = receiver {
                visitor.visit_expr_id(*receiver, arena);
            }
        }
    }
}

pub fn walk_type_ref<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    _id: TypeRefId,
    ty: &'ast TypeRef,
    arena: &'ast AstArena,
) {
    match &ty.kind {
        TypeRefKind::Primitive { annotations, .. } => walk_annotations(visitor, annotations, arena),
        TypeRefKind::Named(segments) => {
            for segment in segments {
                walk_annotations(visitor, &segment.annotations, arena);
                for &arg in segment.type_args.iter().flatten() {
                    visitor.visit_type_ref_id(arg, arena);
                }
            }
        }
        TypeRefKind::Array { element, dims } => {
            visitor.visit_type_ref_id(*element, arena);
            for dim in dims {
                walk_annotations(visitor, &dim.annotations, arena);
            }
        }
        TypeRefKind::Wildcard { annotations, bound } => {
            walk_annotations(visitor, annotations, arena);
            if let Some(bound) = bound {
                visitor.visit_type_ref_id(bound.ty, arena);
            }
        }
        TypeRefKind::Missing | TypeRefKind::Assist => {}
    }
}

pub fn walk_annotation<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    _id: AnnotationId,
    annotation: &'ast Annotation,
    arena: &'ast AstArena,
) {
    match &annotation.kind {
        AnnotationKind::Marker => {}
        AnnotationKind::SingleMember(value) => visitor.visit_expr_id(*value, arena),
        AnnotationKind::Normal(pairs) => {
            for pair in pairs {
                visitor.visit_expr_id(pair.value, arena);
            }
        }
    }
}

fn walk_annotations<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    annotations: &'ast [AnnotationId],
    arena: &'ast AstArena,
) {
    for &id in annotations {
        visitor.visit_annotation_id(id, arena);
    }
}

fn walk_type_params<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    params: &'ast [TypeParam],
    arena: &'ast AstArena,
) {
    for param in params {
        walk_annotations(visitor, &param.annotations, arena);
        for &bound in &param.bounds {
            visitor.visit_type_ref_id(bound, arena);
        }
    }
}
