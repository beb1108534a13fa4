//! Structural events for outline and indexing consumers.
//!
//! [`notify_source_elements`] walks a finished parse and reports each
//! declaration to a [`SourceElementRequestor`]: the package, the imports,
//! then every type with its members in declaration order. Synthesized
//! default constructors are not reported, and neither is anything inside
//! an executable body.

use std::fmt;

use kava_ir::ast::{AstArena, Member, Modifiers, TypeDeclId, TypeDeclKind, TypeRefId};
use kava_ir::render::render_type_ref;
use kava_ir::{Name, Span, StringInterner};

use crate::{source_members, ParseOutput};

/// A type declaration as reported by [`SourceElementRequestor::enter_type`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    pub kind: TypeDeclKind,
    pub name: String,
    pub modifiers: Modifiers,
    pub superclass: Option<String>,
    pub superinterfaces: Vec<String>,
    pub type_params: Vec<String>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    pub modifiers: Modifiers,
    pub is_constructor: bool,
    /// `None` for constructors.
    pub return_type: Option<String>,
    /// Parameter types and names.
    pub params: Vec<(String, String)>,
    pub throws: Vec<String>,
    pub span: Span,
}

/// A field, or an enum constant reported as one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub modifiers: Modifiers,
    /// `None` for enum constants.
    pub ty: Option<String>,
    pub span: Span,
}

/// Receiver of structural events. Every method defaults to doing nothing.
pub trait SourceElementRequestor {
    fn package(&mut self, _name: &str, _span: Span) {}

    fn import(&mut self, _name: &str, _on_demand: bool, _is_static: bool, _span: Span) {}

    fn enter_type(&mut self, _info: &TypeInfo) {}

    fn exit_type(&mut self, _end: u32) {}

    fn enter_method(&mut self, _info: &MethodInfo) {}

    fn exit_method(&mut self, _end: u32) {}

    fn enter_field(&mut self, _info: &FieldInfo) {}

    fn exit_field(&mut self, _end: u32) {}

    fn enter_initializer(&mut self, _is_static: bool, _span: Span) {}

    fn exit_initializer(&mut self, _end: u32) {}
}

/// One recorded event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceElement {
    Package {
        name: String,
        span: Span,
    },
    Import {
        name: String,
        on_demand: bool,
        is_static: bool,
        span: Span,
    },
    EnterType(TypeInfo),
    ExitType(u32),
    EnterMethod(MethodInfo),
    ExitMethod(u32),
    EnterField(FieldInfo),
    ExitField(u32),
    EnterInitializer {
        is_static: bool,
        span: Span,
    },
    ExitInitializer(u32),
}

fn write_modifiers(f: &mut fmt::Formatter<'_>, modifiers: Modifiers) -> fmt::Result {
    for keyword in modifiers.keywords() {
        write!(f, "{keyword} ")?;
    }
    Ok(())
}

impl fmt::Display for SourceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceElement::Package { name, span } => write!(f, "package {name} @ {span}"),
            SourceElement::Import {
                name,
                on_demand,
                is_static,
                span,
            } => {
                f.write_str("import ")?;
                if *is_static {
                    f.write_str("static ")?;
                }
                f.write_str(name)?;
                if *on_demand {
                    f.write_str(".*")?;
                }
                write!(f, " @ {span}")
            }
            SourceElement::EnterType(info) => {
                f.write_str("enter ")?;
                write_modifiers(f, info.modifiers)?;
                write!(f, "{} {}", info.kind.keyword(), info.name)?;
                if !info.type_params.is_empty() {
                    write!(f, "<{}>", info.type_params.join(", "))?;
                }
                if let Some(superclass) = &info.superclass {
                    write!(f, " extends {superclass}")?;
                }
                if !info.superinterfaces.is_empty() {
                    write!(f, " implements {}", info.superinterfaces.join(", "))?;
                }
                write!(f, " @ {}", info.span)
            }
            SourceElement::EnterMethod(info) => {
                f.write_str("enter ")?;
                write_modifiers(f, info.modifiers)?;
                if let Some(return_type) = &info.return_type {
                    write!(f, "{return_type} ")?;
                }
                write!(f, "{}(", info.name)?;
                for (i, (ty, name)) in info.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ty} {name}")?;
                }
                f.write_str(")")?;
                if !info.throws.is_empty() {
                    write!(f, " throws {}", info.throws.join(", "))?;
                }
                write!(f, " @ {}", info.span)
            }
            SourceElement::EnterField(info) => {
                f.write_str("enter ")?;
                write_modifiers(f, info.modifiers)?;
                if let Some(ty) = &info.ty {
                    write!(f, "{ty} ")?;
                }
                write!(f, "{} @ {}", info.name, info.span)
            }
            SourceElement::EnterInitializer { is_static, span } => {
                let keyword = if *is_static { "static " } else { "" };
                write!(f, "enter {keyword}{{}} @ {span}")
            }
            SourceElement::ExitType(end)
            | SourceElement::ExitMethod(end)
            | SourceElement::ExitField(end)
            | SourceElement::ExitInitializer(end) => write!(f, "exit @ {end}"),
        }
    }
}

/// Collects every event in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingRequestor {
    pub events: Vec<SourceElement>,
}

impl RecordingRequestor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SourceElementRequestor for RecordingRequestor {
    fn package(&mut self, name: &str, span: Span) {
        self.events.push(SourceElement::Package {
            name: name.to_string(),
            span,
        });
    }

    fn import(&mut self, name: &str, on_demand: bool, is_static: bool, span: Span) {
        self.events.push(SourceElement::Import {
            name: name.to_string(),
            on_demand,
            is_static,
            span,
        });
    }

    fn enter_type(&mut self, info: &TypeInfo) {
        self.events.push(SourceElement::EnterType(info.clone()));
    }

    fn exit_type(&mut self, end: u32) {
        self.events.push(SourceElement::ExitType(end));
    }

    fn enter_method(&mut self, info: &MethodInfo) {
        self.events.push(SourceElement::EnterMethod(info.clone()));
    }

    fn exit_method(&mut self, end: u32) {
        self.events.push(SourceElement::ExitMethod(end));
    }

    fn enter_field(&mut self, info: &FieldInfo) {
        self.events.push(SourceElement::EnterField(info.clone()));
    }

    fn exit_field(&mut self, end: u32) {
        self.events.push(SourceElement::ExitField(end));
    }

    fn enter_initializer(&mut self, is_static: bool, span: Span) {
        self.events.push(SourceElement::EnterInitializer { is_static, span });
    }

    fn exit_initializer(&mut self, end: u32) {
        self.events.push(SourceElement::ExitInitializer(end));
    }
}

/// Report the declarations of `output` to `requestor`, in source order.
pub fn notify_source_elements(
    output: &ParseOutput,
    interner: &StringInterner,
    requestor: &mut dyn SourceElementRequestor,
) {
    let notifier = Notifier {
        arena: &output.arena,
        interner,
    };
    let unit = &output.unit;
    if let Some(package) = &unit.package {
        requestor.package(&notifier.path(&package.name), package.span);
    }
    for import in &unit.imports {
        requestor.import(
            &notifier.path(&import.name),
            import.on_demand,
            import.is_static,
            import.span,
        );
    }
    for &id in &unit.types {
        notifier.notify_type(id, requestor);
    }
}

struct Notifier<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
}

impl Notifier<'_> {
    fn path(&self, names: &[Name]) -> String {
        names
            .iter()
            .map(|&name| self.interner.lookup(name))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn name(&self, name: Name) -> String {
        self.interner.lookup(name).to_string()
    }

    fn ty(&self, id: TypeRefId) -> String {
        render_type_ref(self.arena, self.interner, id)
    }

    fn notify_type(&self, id: TypeDeclId, requestor: &mut dyn SourceElementRequestor) {
        let decl = self.arena.type_decl(id);
        requestor.enter_type(&TypeInfo {
            kind: decl.kind,
            name: self.name(decl.name),
            modifiers: decl.modifiers,
            superclass: decl.superclass.map(|ty| self.ty(ty)),
            superinterfaces: decl.superinterfaces.iter().map(|&ty| self.ty(ty)).collect(),
            type_params: decl.type_params.iter().map(|p| self.name(p.name)).collect(),
            span: decl.declaration_span,
        });

        for member in source_members(&decl.members, self.arena) {
            match member {
                Member::Field(field) => {
                    requestor.enter_field(&FieldInfo {
                        name: self.name(field.name),
                        modifiers: field.modifiers,
                        ty: Some(self.ty(field.ty)),
                        span: field.declaration_span,
                    });
                    requestor.exit_field(field.declaration_span.end);
                }
                Member::EnumConstant(constant) => {
                    requestor.enter_field(&FieldInfo {
                        name: self.name(constant.name),
                        modifiers: Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
                        ty: None,
                        span: constant.declaration_span,
                    });
                    requestor.exit_field(constant.declaration_span.end);
                }
                Member::Method(method) => {
                    requestor.enter_method(&MethodInfo {
                        name: self.name(method.name),
                        modifiers: method.modifiers,
                        is_constructor: method.is_constructor,
                        return_type: method.return_type.map(|ty| self.ty(ty)),
                        params: method
                            .params
                            .iter()
                            .map(|param| {
                                let mut ty = self.ty(param.ty);
                                if param.is_varargs {
                                    ty.push_str("...");
                                }
                                (ty, self.name(param.name))
                            })
                            .collect(),
                        throws: method.throws.iter().map(|&ty| self.ty(ty)).collect(),
                        span: method.declaration_span,
                    });
                    requestor.exit_method(method.declaration_span.end);
                }
                Member::Initializer(init) => {
                    requestor.enter_initializer(init.is_static, init.declaration_span);
                    requestor.exit_initializer(init.declaration_span.end);
                }
                Member::Type(nested) => self.notify_type(*nested, requestor),
                Member::Dangling(_) => {}
            }
        }
        requestor.exit_type(decl.declaration_span.end);
    }
}

#[cfg(test)]
mod tests;
