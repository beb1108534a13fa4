//! The `locations` command: where each type annotation sits in its type.

use kava_ir::ast::{AnnotationId, AstArena, Member, Stmt, StmtId, StmtKind, TypeDeclId, TypeRefId};
use kava_ir::render::render_type_ref;
use kava_ir::type_annotation::declaration_locations;
use kava_ir::visitor::{walk_member, walk_stmt, Visitor};
use kava_ir::{Name, StringInterner};
use kava_parse::ParseOptions;

use super::{load, report_diagnostics};

/// Collects one line per annotated declaration.
struct LocationPrinter<'a> {
    interner: &'a StringInterner,
    lines: Vec<String>,
}

impl LocationPrinter<'_> {
    fn declaration(
        &mut self,
        arena: &AstArena,
        what: &str,
        name: Name,
        annotations: &[AnnotationId],
        ty: TypeRefId,
    ) {
        let found = declaration_locations(arena, self.interner, annotations, ty);
        if found.is_empty() {
            return;
        }
        self.lines.push(format!(
            "{what}{} : {}",
            self.interner.lookup(name),
            render_type_ref(arena, self.interner, ty)
        ));
        for (id, location) in found {
            let annotation = arena.annotation(id);
            let path: Vec<&str> = annotation
                .name
                .iter()
                .map(|&segment| self.interner.lookup(segment))
                .collect();
            self.lines.push(format!("  @{} {location}", path.join(".")));
        }
    }
}

impl<'ast> Visitor<'ast> for LocationPrinter<'_> {
    fn visit_member(
        &mut self,
        owner: TypeDeclId,
        _index: usize,
        member: &'ast Member,
        arena: &'ast AstArena,
    ) {
        let owner_name = self.interner.lookup(arena.type_decl(owner).name).to_string();
        match member {
            Member::Field(field) => {
                let what = format!("field {owner_name}.");
                self.declaration(arena, &what, field.name, &field.annotations, field.ty);
            }
            Member::Method(method) if !method.is_default_constructor => {
                let method_name = if method.is_constructor {
                    owner_name.clone()
                } else {
                    self.interner.lookup(method.name).to_string()
                };
                if let Some(ret) = method.return_type {
                    let what = format!("method {owner_name}.");
                    self.declaration(arena, &what, method.name, &method.annotations, ret);
                }
                for param in &method.params {
                    let what = format!("parameter {owner_name}.{method_name} ");
                    self.declaration(arena, &what, param.name, &param.annotations, param.ty);
                }
            }
            _ => {}
        }
        walk_member(self, member, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, stmt: &'ast Stmt, arena: &'ast AstArena) {
        if let StmtKind::LocalVar(var) = &stmt.kind {
            self.declaration(arena, "local ", var.name, &var.annotations, var.ty);
        }
        walk_stmt(self, id, stmt, arena);
    }
}

/// Parse a file fully and print the location of every type annotation on
/// its fields, methods, parameters and locals.
pub fn print_locations(path: &str) {
    let loaded = load(path, ParseOptions::full());
    let mut printer = LocationPrinter {
        interner: &loaded.interner,
        lines: Vec::new(),
    };
    printer.visit_unit(&loaded.output.unit, &loaded.output.arena);

    for line in &printer.lines {
        println!("{line}");
    }
    report_diagnostics(path, &loaded);
}
