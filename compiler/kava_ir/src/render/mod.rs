//! Canonical text rendering of a parsed unit.
//!
//! The output is deterministic: the same tree always prints the same text,
//! regardless of node ids. Layout rules:
//!
//! - two spaces per indentation level;
//! - a type body prints member types, then fields, initializers and enum
//!   constants in source order, then methods, then leftover modifiers;
//! - an unparsed or dropped body prints as an empty block;
//! - placeholders print as `$missing$` and `<CompleteOnType:Foo>`.

use crate::ast::{
    Annotation, AnnotationId, AnnotationKind, AssistNode, AstArena, Block, Body, BoundKind,
    CallKind, CompilationUnit, Dangling, ExprId, ExprKind, LambdaBody, LocalVar, Member,
    MethodDecl, Modifiers, Resource, StmtId, StmtKind, TypeDecl, TypeDeclId, TypeDeclKind,
    TypeParam, TypeRefId, TypeRefKind, WildcardBound,
};
use crate::{Name, StringInterner};

/// Sentinel printed for recovery placeholders.
pub const MISSING: &str = "$missing$";

/// Render a whole compilation unit.
pub fn render_unit(unit: &CompilationUnit, arena: &AstArena, interner: &StringInterner) -> String {
    let mut printer = Printer::new(arena, interner, unit.assist.as_ref());
    printer.unit(unit);
    printer.out
}

/// Render one type reference on a single line.
pub fn render_type_ref(arena: &AstArena, interner: &StringInterner, id: TypeRefId) -> String {
    let mut printer = Printer::new(arena, interner, None);
    printer.type_ref(id);
    printer.out
}

/// Render one annotation on a single line.
pub fn render_annotation(
    arena: &AstArena,
    interner: &StringInterner,
    id: AnnotationId,
) -> String {
    let mut printer = Printer::new(arena, interner, None);
    printer.annotation(id);
    printer.out
}

/// Render a type parameter list, e.g. `<T extends A & B>`; empty when there are none.
pub fn render_type_params(
    arena: &AstArena,
    interner: &StringInterner,
    params: &[TypeParam],
) -> String {
    let mut printer = Printer::new(arena, interner, None);
    printer.type_params(params);
    printer.out
}

struct Printer<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    assist: Option<&'a AssistNode>,
    out: String,
}

impl<'a> Printer<'a> {
    fn new(arena: &'a AstArena, interner: &'a StringInterner, assist: Option<&'a AssistNode>) -> Self {
        Printer {
            arena,
            interner,
            assist,
            out: String::new(),
        }
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str("  ");
        }
    }

    fn name(&mut self, name: Name) {
        self.out.push_str(self.interner.lookup(name));
    }

    fn path(&mut self, names: &[Name]) {
        for (i, &name) in names.iter().enumerate() {
            if i > 0 {
                self.push(".");
            }
            self.name(name);
        }
    }

    fn comma_separated<T: Copy>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, T)) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            each(self, item);
        }
    }

    fn placeholder(&mut self, receiver: Option<ExprId>) {
        let Some(assist) = self.assist else {
            self.push(MISSING);
            return;
        };
        self.push("<");
        self.push(assist.kind.label());
        self.push(":");
        if let Some(receiver) = receiver {
            self.expr(receiver, 0);
            self.push(".");
        }
        for &segment in &assist.qualifier {
            self.name(segment);
            self.push(".");
        }
        self.name(assist.identifier);
        self.push(">");
    }

    // Unit and declarations

    fn unit(&mut self, unit: &CompilationUnit) {
        if let Some(package) = &unit.package {
            self.annotations_prefix(&package.annotations);
            self.push("package ");
            if package.is_assist {
                self.placeholder(None);
            } else {
                self.path(&package.name);
            }
            self.push(";\n");
        }
        for import in &unit.imports {
            self.push("import ");
            if import.is_static {
                self.push("static ");
            }
            if import.is_assist {
                self.placeholder(None);
            } else {
                self.path(&import.name);
                if import.on_demand {
                    self.push(".*");
                }
            }
            self.push(";\n");
        }
        for &id in &unit.types {
            self.type_decl(id, 0);
            self.push("\n");
        }
        if let Some(trailing) = &unit.trailing {
            self.dangling(trailing);
            self.push("\n");
        }
    }

    fn modifiers(&mut self, modifiers: Modifiers) {
        for keyword in modifiers.keywords() {
            self.push(keyword);
            self.push(" ");
        }
    }

    fn annotations_prefix(&mut self, annotations: &[AnnotationId]) {
        for &id in annotations {
            self.annotation(id);
            self.push(" ");
        }
    }

    fn dangling(&mut self, dangling: &Dangling) {
        let start = self.out.len();
        self.modifiers(dangling.modifiers);
        self.annotations_prefix(&dangling.annotations);
        if self.out.len() > start {
            self.out.pop();
        }
    }

    /// Type declaration without leading indentation.
    fn type_decl(&mut self, id: TypeDeclId, level: usize) {
        let arena = self.arena;
        let decl = arena.type_decl(id);
        self.modifiers(decl.modifiers);
        self.annotations_prefix(&decl.annotations);
        self.push(decl.kind.keyword());
        self.push(" ");
        self.name(decl.name);
        self.type_params(&decl.type_params);
        if let Some(superclass) = decl.superclass {
            self.push(" extends ");
            self.type_ref(superclass);
        }
        if !decl.superinterfaces.is_empty() {
            self.push(if decl.kind == TypeDeclKind::Interface {
                " extends "
            } else {
                " implements "
            });
            self.comma_separated(&decl.superinterfaces, |p, ty| p.type_ref(ty));
        }
        self.push(" ");
        self.type_body(decl, level);
    }

    fn type_body(&mut self, decl: &TypeDecl, level: usize) {
        self.push("{");
        let members = &decl.members;
        // Types hoisted by a deferred body parse sit at the end of the list.
        let mut types: Vec<&Member> = members
            .iter()
            .filter(|m| matches!(m, Member::Type(_)))
            .collect();
        types.sort_by_key(|m| m.declaration_span(self.arena).start);
        let fields = members.iter().filter(|m| {
            matches!(
                m,
                Member::Field(_) | Member::Initializer(_) | Member::EnumConstant(_)
            )
        });
        let methods = members.iter().filter(|m| matches!(m, Member::Method(_)));
        let dangling = members.iter().filter(|m| matches!(m, Member::Dangling(_)));
        for member in types.into_iter().chain(fields).chain(methods).chain(dangling) {
            self.push("\n");
            self.indent(level + 1);
            self.member(decl, member, level + 1);
        }
        self.push("\n");
        self.indent(level);
        self.push("}");
    }

    fn member(&mut self, owner: &TypeDecl, member: &Member, level: usize) {
        match member {
            Member::Type(id) => self.type_decl(*id, level),
            Member::Field(field) => {
                self.modifiers(field.modifiers);
                self.annotations_prefix(&field.annotations);
                self.type_ref(field.ty);
                self.push(" ");
                self.name(field.name);
                if let Some(init) = field.init {
                    self.push(" = ");
                    self.expr(init, level);
                }
                self.push(";");
            }
            Member::Initializer(init) => {
                if init.is_static {
                    self.push("static ");
                }
                self.body(&init.body, None, level);
            }
            Member::EnumConstant(constant) => {
                self.annotations_prefix(&constant.annotations);
                self.name(constant.name);
                if let Some(args) = &constant.args {
                    self.push("(");
                    self.comma_separated(args, |p, arg| p.expr(arg, level));
                    self.push(")");
                }
                if let Some(body) = constant.body {
                    let arena = self.arena;
                    self.push(" ");
                    self.type_body(arena.type_decl(body), level);
                }
                self.push(",");
            }
            Member::Method(method) => self.method(owner, method, level),
            Member::Dangling(dangling) => self.dangling(dangling),
        }
    }

    fn method(&mut self, owner: &TypeDecl, method: &MethodDecl, level: usize) {
        self.modifiers(method.modifiers);
        self.annotations_prefix(&method.annotations);
        if !method.type_params.is_empty() {
            self.type_params(&method.type_params);
            self.push(" ");
        }
        if let Some(ret) = method.return_type {
            self.type_ref(ret);
            self.push(" ");
        }
        if method.is_constructor {
            self.name(owner.name);
        } else {
            self.name(method.name);
        }
        self.push("(");
        for (i, param) in method.params.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.modifiers(param.modifiers);
            self.annotations_prefix(&param.annotations);
            self.type_ref(param.ty);
            if param.is_varargs {
                for &id in &param.varargs_annotations {
                    self.push(" ");
                    self.annotation(id);
                }
                self.push("...");
            }
            if !param.name.is_empty() {
                self.push(" ");
                self.name(param.name);
            }
        }
        self.push(")");
        if !method.throws.is_empty() {
            self.push(" throws ");
            self.comma_separated(&method.throws, |p, ty| p.type_ref(ty));
        }
        if let Some(value) = method.default_value {
            self.push(" default ");
            self.expr(value, level);
        }
        if matches!(method.body, Body::None) {
            self.push(";");
        } else {
            self.push(" ");
            self.body(&method.body, method.constructor_call, level);
        }
    }

    fn body(&mut self, body: &Body, call: Option<StmtId>, level: usize) {
        match body {
            Body::None => self.push(";"),
            Body::Unparsed(_) | Body::Dropped => self.block_stmts(call, &[], level),
            Body::Parsed(block) => self.block_stmts(call, &block.stmts, level),
        }
    }

    fn block(&mut self, block: &Block, level: usize) {
        self.block_stmts(None, &block.stmts, level);
    }

    fn block_stmts(&mut self, call: Option<StmtId>, stmts: &[StmtId], level: usize) {
        self.push("{");
        for &stmt in call.iter().chain(stmts) {
            self.push("\n");
            self.indent(level + 1);
            self.stmt(stmt, level + 1);
        }
        self.push("\n");
        self.indent(level);
        self.push("}");
    }

    fn type_params(&mut self, params: &[TypeParam]) {
        if params.is_empty() {
            return;
        }
        self.push("<");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.annotations_prefix(&param.annotations);
            self.name(param.name);
            for (j, &bound) in param.bounds.iter().enumerate() {
                self.push(if j == 0 { " extends " } else { " & " });
                self.type_ref(bound);
            }
        }
        self.push(">");
    }

    // Statements

    fn local_var(&mut self, var: &LocalVar, level: usize) {
        self.modifiers(var.modifiers);
        self.annotations_prefix(&var.annotations);
        self.type_ref(var.ty);
        self.push(" ");
        self.name(var.name);
        if let Some(init) = var.init {
            self.push(" = ");
            self.expr(init, level);
        }
    }

    /// Nested statement of `if`/`while`/`for`: blocks stay on the same line.
    fn sub_stmt(&mut self, id: StmtId, level: usize) {
        if matches!(self.arena.stmt(id).kind, StmtKind::Block(_)) {
            self.push(" ");
            self.stmt(id, level);
        } else {
            self.push("\n");
            self.indent(level + 1);
            self.stmt(id, level + 1);
        }
    }

    fn is_block(&self, id: StmtId) -> bool {
        matches!(self.arena.stmt(id).kind, StmtKind::Block(_))
    }

    /// Statement without leading indentation.
    fn stmt(&mut self, id: StmtId, level: usize) {
        let arena = self.arena;
        match &arena.stmt(id).kind {
            StmtKind::Block(block) => self.block(block, level),
            StmtKind::LocalVar(var) => {
                self.local_var(var, level);
                self.push(";");
            }
            StmtKind::LocalType(decl) => self.type_decl(*decl, level),
            StmtKind::Expr(expr) => {
                self.expr(*expr, level);
                self.push(";");
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.push("if (");
                self.expr(*cond, level);
                self.push(")");
                self.sub_stmt(*then_branch, level);
                if let Some(else_branch) = else_branch {
                    if self.is_block(*then_branch) {
                        self.push(" else");
                    } else {
                        self.push("\n");
                        self.indent(level);
                        self.push("else");
                    }
                    self.sub_stmt(*else_branch, level);
                }
            }
            StmtKind::While { cond, body } => {
                self.push("while (");
                self.expr(*cond, level);
                self.push(")");
                self.sub_stmt(*body, level);
            }
            StmtKind::DoWhile { body, cond } => {
                self.push("do");
                self.sub_stmt(*body, level);
                if self.is_block(*body) {
                    self.push(" ");
                } else {
                    self.push("\n");
                    self.indent(level);
                }
                self.push("while (");
                self.expr(*cond, level);
                self.push(");");
            }
            StmtKind::For {
                init,
                cond,
                update,
                body,
            } => {
                self.push("for (");
                for (i, &stmt) in init.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    match &arena.stmt(stmt).kind {
                        StmtKind::LocalVar(var) => self.local_var(var, level),
                        StmtKind::Expr(expr) => self.expr(*expr, level),
                        _ => self.stmt(stmt, level),
                    }
                }
                self.push("; ");
                if let Some(cond) = cond {
                    self.expr(*cond, level);
                }
                self.push("; ");
                self.comma_separated(update, |p, expr| p.expr(expr, level));
                self.push(")");
                self.sub_stmt(*body, level);
            }
            StmtKind::ForEach {
                var,
                iterable,
                body,
            } => {
                self.push("for (");
                self.local_var(var, level);
                self.push(" : ");
                self.expr(*iterable, level);
                self.push(")");
                self.sub_stmt(*body, level);
            }
            StmtKind::Switch { selector, cases } => {
                self.push("switch (");
                self.expr(*selector, level);
                self.push(") {");
                for case in cases {
                    self.push("\n");
                    self.indent(level + 1);
                    if case.labels.is_empty() {
                        self.push("default:");
                    } else {
                        self.push("case ");
                        self.comma_separated(&case.labels, |p, label| p.expr(label, level));
                        self.push(":");
                    }
                    for &stmt in &case.body {
                        self.push("\n");
                        self.indent(level + 2);
                        self.stmt(stmt, level + 2);
                    }
                }
                self.push("\n");
                self.indent(level);
                self.push("}");
            }
            StmtKind::Try {
                resources,
                body,
                catches,
                finally,
            } => {
                self.push("try ");
                if !resources.is_empty() {
                    self.push("(");
                    for (i, resource) in resources.iter().enumerate() {
                        if i > 0 {
                            self.push("; ");
                        }
                        match resource {
                            Resource::Var(var) => self.local_var(var, level),
                            Resource::Expr(expr) => self.expr(*expr, level),
                        }
                    }
                    self.push(") ");
                }
                self.block(body, level);
                for catch in catches {
                    self.push(" catch (");
                    self.modifiers(catch.param.modifiers);
                    self.annotations_prefix(&catch.param.annotations);
                    for (i, &ty) in catch.param.types.iter().enumerate() {
                        if i > 0 {
                            self.push(" | ");
                        }
                        self.type_ref(ty);
                    }
                    self.push(" ");
                    self.name(catch.param.name);
                    self.push(") ");
                    self.block(&catch.body, level);
                }
                if let Some(finally) = finally {
                    self.push(" finally ");
                    self.block(finally, level);
                }
            }
            StmtKind::Return(expr) => {
                self.push("return");
                if let Some(expr) = expr {
                    self.push(" ");
                    self.expr(*expr, level);
                }
                self.push(";");
            }
            StmtKind::Break(label) | StmtKind::Continue(label) => {
                self.push(if matches!(arena.stmt(id).kind, StmtKind::Break(_)) {
                    "break"
                } else {
                    "continue"
                });
                if let Some(label) = label {
                    self.push(" ");
                    self.name(*label);
                }
                self.push(";");
            }
            StmtKind::Throw(expr) => {
                self.push("throw ");
                self.expr(*expr, level);
                self.push(";");
            }
            StmtKind::Synchronized { lock, body } => {
                self.push("synchronized (");
                self.expr(*lock, level);
                self.push(") ");
                self.block(body, level);
            }
            StmtKind::Assert { cond, message } => {
                self.push("assert ");
                self.expr(*cond, level);
                if let Some(message) = message {
                    self.push(" : ");
                    self.expr(*message, level);
                }
                self.push(";");
            }
            StmtKind::Labeled { label, body } => {
                self.name(*label);
                self.push(": ");
                self.stmt(*body, level);
            }
            StmtKind::ConstructorCall(call) => {
                if let Some(qualifier) = call.qualifier {
                    self.expr(qualifier, level);
                    self.push(".");
                }
                self.push(match call.kind {
                    CallKind::This => "this(",
                    CallKind::Super => "super(",
                });
                self.comma_separated(&call.args, |p, arg| p.expr(arg, level));
                self.push(");");
            }
            StmtKind::Empty => self.push(";"),
        }
    }

    // Expressions

    fn expr(&mut self, id: ExprId, level: usize) {
        let arena = self.arena;
        match &arena.expr(id).kind {
            ExprKind::Literal { text, .. } => self.name(*text),
            ExprKind::Name(path) => self.path(path),
            ExprKind::This { qualifier } => {
                for &segment in qualifier {
                    self.name(segment);
                    self.push(".");
                }
                self.push("this");
            }
            ExprKind::Super { qualifier } => {
                for &segment in qualifier {
                    self.name(segment);
                    self.push(".");
                }
                self.push("super");
            }
            ExprKind::FieldAccess { receiver, name } => {
                self.expr(*receiver, level);
                self.push(".");
                self.name(*name);
            }
            ExprKind::MethodCall {
                receiver,
                type_args,
                name,
                args,
            } => {
                if let Some(receiver) = receiver {
                    self.expr(*receiver, level);
                    self.push(".");
                }
                if !type_args.is_empty() {
                    self.push("<");
                    self.comma_separated(type_args, |p, ty| p.type_ref(ty));
                    self.push(">");
                }
                self.name(*name);
                self.push("(");
                self.comma_separated(args, |p, arg| p.expr(arg, level));
                self.push(")");
            }
            ExprKind::New {
                outer,
                ty,
                args,
                body,
            } => {
                if let Some(outer) = outer {
                    self.expr(*outer, level);
                    self.push(".");
                }
                self.push("new ");
                self.type_ref(*ty);
                self.push("(");
                self.comma_separated(args, |p, arg| p.expr(arg, level));
                self.push(")");
                if let Some(body) = body {
                    self.push(" ");
                    self.type_body(arena.type_decl(*body), level);
                }
            }
            ExprKind::NewArray {
                element,
                dims,
                init,
            } => {
                self.push("new ");
                self.type_ref(*element);
                for dim in dims {
                    self.push("[");
                    if let Some(size) = dim {
                        self.expr(*size, level);
                    }
                    self.push("]");
                }
                if let Some(init) = init {
                    self.expr(*init, level);
                }
            }
            ExprKind::ArrayInit(elements) => {
                self.push("{");
                self.comma_separated(elements, |p, element| p.expr(element, level));
                self.push("}");
            }
            ExprKind::ArrayAccess { array, index } => {
                self.expr(*array, level);
                self.push("[");
                self.expr(*index, level);
                self.push("]");
            }
            ExprKind::Unary { op, operand } => {
                self.push(op.as_str());
                self.expr(*operand, level);
            }
            ExprKind::Postfix { op, operand } => {
                self.expr(*operand, level);
                self.push(op.as_str());
            }
            ExprKind::Binary { op, left, right } => {
                self.expr(*left, level);
                self.push(" ");
                self.push(op.as_str());
                self.push(" ");
                self.expr(*right, level);
            }
            ExprKind::Assign { op, target, value } => {
                self.expr(*target, level);
                self.push(" ");
                self.push(op.as_str());
                self.push(" ");
                self.expr(*value, level);
            }
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                self.expr(*cond, level);
                self.push(" ? ");
                self.expr(*then_expr, level);
                self.push(" : ");
                self.expr(*else_expr, level);
            }
            ExprKind::InstanceOf { expr, ty } => {
                self.expr(*expr, level);
                self.push(" instanceof ");
                self.type_ref(*ty);
            }
            ExprKind::Cast { ty, expr } => {
                self.push("(");
                self.type_ref(*ty);
                self.push(") ");
                self.expr(*expr, level);
            }
            ExprKind::Lambda { params, body } => {
                self.push("(");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    if let Some(ty) = param.ty {
                        self.type_ref(ty);
                        self.push(" ");
                    }
                    self.name(param.name);
                }
                self.push(") -> ");
                match body {
                    LambdaBody::Expr(expr) => self.expr(*expr, level),
                    LambdaBody::Block(block) => self.block(block, level),
                }
            }
            ExprKind::MethodRef { target, name } => {
                self.expr(*target, level);
                self.push("::");
                self.name(*name);
            }
            ExprKind::ClassLiteral(ty) => {
                self.type_ref(*ty);
                self.push(".class");
            }
            ExprKind::TypeExpr(ty) => self.type_ref(*ty),
            ExprKind::Paren(inner) => {
                self.push("(");
                self.expr(*inner, level);
                self.push(")");
            }
            ExprKind::Annotation(annotation) => self.annotation(*annotation),
            ExprKind::Missing => self.push(MISSING),
            ExprKind::Assist { receiver } => self.placeholder(*receiver),
        }
    }

    // Types and annotations

    fn type_ref(&mut self, id: TypeRefId) {
        let arena = self.arena;
        match &arena.type_ref(id).kind {
            TypeRefKind::Primitive {
                keyword,
                annotations,
            } => {
                self.annotations_prefix(annotations);
                self.push(keyword.as_str());
            }
            TypeRefKind::Named(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        self.push(".");
                    }
                    self.annotations_prefix(&segment.annotations);
                    self.name(segment.name);
                    if let Some(args) = &segment.type_args {
                        self.push("<");
                        self.comma_separated(args, |p, arg| p.type_ref(arg));
                        self.push(">");
                    }
                }
            }
            TypeRefKind::Array { element, dims } => {
                self.type_ref(*element);
                for dim in dims {
                    if !dim.annotations.is_empty() {
                        self.push(" ");
                        self.annotations_prefix(&dim.annotations);
                    }
                    self.push("[]");
                }
            }
            TypeRefKind::Wildcard { annotations, bound } => {
                self.annotations_prefix(annotations);
                self.push("?");
                if let Some(WildcardBound { kind, ty }) = bound {
                    self.push(match kind {
                        BoundKind::Extends => " extends ",
                        BoundKind::Super => " super ",
                    });
                    self.type_ref(*ty);
                }
            }
            TypeRefKind::Missing => self.push(MISSING),
            TypeRefKind::Assist => self.placeholder(None),
        }
    }

    fn annotation(&mut self, id: AnnotationId) {
        let arena = self.arena;
        let Annotation {
            name,
            kind,
            is_assist,
            ..
        } = arena.annotation(id);
        self.push("@");
        if *is_assist {
            self.placeholder(None);
        } else {
            self.path(name);
        }
        match kind {
            AnnotationKind::Marker => {}
            AnnotationKind::SingleMember(value) => {
                self.push("(");
                self.expr(*value, 0);
                self.push(")");
            }
            AnnotationKind::Normal(pairs) => {
                self.push("(");
                for (i, pair) in pairs.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    if pair.is_assist {
                        self.placeholder(None);
                    } else {
                        self.name(pair.name);
                        self.push(" = ");
                        self.expr(pair.value, 0);
                    }
                }
                self.push(")");
            }
        }
    }
}

#[cfg(test)]
mod tests;
