use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{
    AssistKind, AssistParent, Expr, FieldDecl, PrimitiveType, TypeRef, TypeSegment,
};
use crate::{Span, TokenRange};

struct Fixture {
    interner: StringInterner,
    arena: AstArena,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            arena: AstArena::new(),
        }
    }

    fn named(&mut self, name: &str) -> TypeRefId {
        let name = self.interner.intern(name);
        self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Named(vec![TypeSegment {
                annotations: Vec::new(),
                name,
                type_args: None,
                span: Span::DUMMY,
            }]),
            span: Span::DUMMY,
        })
    }

    fn int(&mut self) -> TypeRefId {
        self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Primitive {
                keyword: PrimitiveType::Int,
                annotations: Vec::new(),
            },
            span: Span::DUMMY,
        })
    }

    fn class(&mut self, name: &str, members: Vec<Member>) -> TypeDeclId {
        let name = self.interner.intern(name);
        self.arena.alloc_type_decl(TypeDecl {
            kind: TypeDeclKind::Class,
            modifiers: Modifiers::PUBLIC,
            annotations: Vec::new(),
            name,
            name_span: Span::DUMMY,
            type_params: Vec::new(),
            superclass: None,
            superinterfaces: Vec::new(),
            members,
            is_local: false,
            is_anonymous: false,
            declaration_span: Span::DUMMY,
            body_span: Span::DUMMY,
        })
    }

    fn method(&mut self, name: &str, body: Body) -> Member {
        let ret = self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Primitive {
                keyword: PrimitiveType::Void,
                annotations: Vec::new(),
            },
            span: Span::DUMMY,
        });
        Member::Method(MethodDecl {
            modifiers: Modifiers::empty(),
            annotations: Vec::new(),
            type_params: Vec::new(),
            return_type: Some(ret),
            name: self.interner.intern(name),
            name_span: Span::DUMMY,
            params: Vec::new(),
            throws: Vec::new(),
            default_value: None,
            body,
            constructor_call: None,
            is_constructor: false,
            is_default_constructor: false,
            declaration_span: Span::DUMMY,
        })
    }

    fn render(&self, unit: &CompilationUnit) -> String {
        render_unit(unit, &self.arena, &self.interner)
    }
}

#[test]
fn test_members_grouped_by_category() {
    let mut fx = Fixture::new();
    let run = fx.method("run", Body::Unparsed(TokenRange::new(5, 9)));
    let ty = fx.int();
    let field = Member::Field(FieldDecl {
        modifiers: Modifiers::PRIVATE,
        annotations: Vec::new(),
        ty,
        name: fx.interner.intern("count"),
        name_span: Span::DUMMY,
        init: None,
        declaration_span: Span::DUMMY,
    });
    let inner = fx.class("Inner", Vec::new());
    let outer = fx.class("Outer", vec![run, field, Member::Type(inner)]);
    let unit = CompilationUnit {
        types: vec![outer],
        ..CompilationUnit::default()
    };

    assert_eq!(
        fx.render(&unit),
        "public class Outer {\n  public class Inner {\n  }\n  private int count;\n  void run() {\n  }\n}\n"
    );
}

#[test]
fn test_dropped_and_abstract_bodies() {
    let mut fx = Fixture::new();
    let dropped = fx.method("a", Body::Dropped);
    let abstract_method = fx.method("b", Body::None);
    let decl = fx.class("X", vec![dropped, abstract_method]);
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };

    assert_eq!(
        fx.render(&unit),
        "public class X {\n  void a() {\n  }\n  void b();\n}\n"
    );
}

#[test]
fn test_missing_initializer_renders_sentinel() {
    let mut fx = Fixture::new();
    let ty = fx.named("String");
    let missing = fx.arena.alloc_expr(Expr {
        kind: ExprKind::Missing,
        span: Span::DUMMY,
    });
    let field = Member::Field(FieldDecl {
        modifiers: Modifiers::empty(),
        annotations: Vec::new(),
        ty,
        name: fx.interner.intern("s"),
        name_span: Span::DUMMY,
        init: Some(missing),
        declaration_span: Span::DUMMY,
    });
    let decl = fx.class("X", vec![field]);
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };

    assert_eq!(fx.render(&unit), "public class X {\n  String s = $missing$;\n}\n");
}

#[test]
fn test_assist_placeholder_includes_qualifier() {
    let fx = Fixture::new();
    let java = fx.interner.intern("java");
    let util = fx.interner.intern("util");
    let prefix = fx.interner.intern("Li");
    let unit = CompilationUnit {
        imports: vec![crate::ast::ImportDecl {
            name: Vec::new(),
            is_static: false,
            on_demand: false,
            is_assist: true,
            span: Span::DUMMY,
        }],
        assist: Some(AssistNode {
            kind: AssistKind::Import,
            identifier: prefix,
            qualifier: vec![java, util],
            span: Span::new(17, 19),
            caret: 19,
            parent: AssistParent::Unit,
            parent_span: Span::new(0, 20),
        }),
        ..CompilationUnit::default()
    };

    assert_eq!(fx.render(&unit), "import <CompleteOnImport:java.util.Li>;\n");
}

#[test]
fn test_render_type_ref_on_one_line() {
    let mut fx = Fixture::new();
    let element = fx.named("String");
    let list = fx.interner.intern("List");
    let id = fx.arena.alloc_type_ref(TypeRef {
        kind: TypeRefKind::Named(vec![TypeSegment {
            annotations: Vec::new(),
            name: list,
            type_args: Some(vec![element]),
            span: Span::DUMMY,
        }]),
        span: Span::DUMMY,
    });

    assert_eq!(render_type_ref(&fx.arena, &fx.interner, id), "List<String>");
}
