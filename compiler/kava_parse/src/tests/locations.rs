//! Type annotation locations of parsed declarations.

use kava_ir::ast::{Body, Member, StmtKind};
use kava_ir::type_annotation::declaration_locations;
use pretty_assertions::assert_eq;

use super::{parse_source, Parsed};
use crate::ParseOptions;

/// `(annotation name, location)` for the first field of the first type.
fn field_locations(field: &str) -> Vec<(String, String)> {
    let parsed = parse_source(&format!("class X {{ {field} }}"), ParseOptions::structure());
    let output = &parsed.output;
    let decl = output.arena.type_decl(output.unit.types[0]);
    let Some(Member::Field(field)) = decl
        .members
        .iter()
        .find(|member| matches!(member, Member::Field(_)))
    else {
        panic!("no field in {field}");
    };
    describe(&parsed, &field.annotations, field.ty)
}

fn describe(
    parsed: &Parsed,
    annotations: &[kava_ir::ast::AnnotationId],
    ty: kava_ir::ast::TypeRefId,
) -> Vec<(String, String)> {
    let arena = &parsed.output.arena;
    declaration_locations(arena, &parsed.interner, annotations, ty)
        .into_iter()
        .map(|(id, location)| {
            let name = arena.annotation(id).name.last().copied().unwrap_or_default();
            (
                parsed.interner.lookup(name).to_string(),
                location.to_string(),
            )
        })
        .collect()
}

fn arrays(count: usize) -> String {
    format!("[{}]", vec!["ARRAY"; count].join(", "))
}

#[test]
fn test_dimensions_on_both_sides_of_the_name() {
    let locations = field_locations(
        "@Marker String[] @Marker[][] s[] @SingleMember(0)[][] @Normal(Value=0)[][];",
    );
    assert_eq!(
        locations,
        vec![
            ("Marker".to_string(), arrays(8)),
            ("Marker".to_string(), arrays(6)),
            ("SingleMember".to_string(), arrays(1)),
            ("Normal".to_string(), arrays(3)),
        ]
    );
}

#[test]
fn test_plain_declaration_annotation() {
    assert_eq!(
        field_locations("@A String s;"),
        vec![("A".to_string(), "null".to_string())]
    );
}

#[test]
fn test_primitive_array_dimensions() {
    assert_eq!(
        field_locations("int @A [] @B [] a;"),
        vec![
            ("A".to_string(), "null".to_string()),
            ("B".to_string(), "[ARRAY]".to_string()),
        ]
    );
}

#[test]
fn test_type_arguments_and_wildcards() {
    assert_eq!(
        field_locations("Map<@A String, List<@B ? extends @C Number>> m;"),
        vec![
            ("A".to_string(), "[TYPE_ARGUMENT(0)]".to_string()),
            (
                "B".to_string(),
                "[TYPE_ARGUMENT(1), TYPE_ARGUMENT(0)]".to_string()
            ),
            (
                "C".to_string(),
                "[TYPE_ARGUMENT(1), TYPE_ARGUMENT(0), WILDCARD]".to_string()
            ),
        ]
    );
}

#[test]
fn test_inner_types() {
    assert_eq!(
        field_locations("java.util.@A Map.@B Entry<K, V> e;"),
        vec![
            ("A".to_string(), "null".to_string()),
            ("B".to_string(), "[INNER_TYPE]".to_string()),
        ]
    );
    assert_eq!(
        field_locations("@A Outer.@B Inner x;"),
        vec![
            ("A".to_string(), "null".to_string()),
            ("B".to_string(), "[INNER_TYPE]".to_string()),
        ]
    );
}

#[test]
fn test_parameter_and_local_locations() {
    let source = "class X { void m(@A List<@B String> @C [] xs) { @D int @E [] v; } }";
    let parsed = parse_source(source, ParseOptions::full());
    let output = &parsed.output;
    let decl = output.arena.type_decl(output.unit.types[0]);
    let Some(Member::Method(method)) = decl
        .members
        .iter()
        .find(|member| matches!(member, Member::Method(m) if !m.is_default_constructor))
    else {
        panic!("method not found");
    };

    let param = &method.params[0];
    assert_eq!(
        describe(&parsed, &param.annotations, param.ty),
        vec![
            ("A".to_string(), "[ARRAY]".to_string()),
            ("B".to_string(), "[ARRAY, TYPE_ARGUMENT(0)]".to_string()),
            ("C".to_string(), "null".to_string()),
        ]
    );

    let Body::Parsed(block) = &method.body else {
        panic!("body not parsed");
    };
    let StmtKind::LocalVar(var) = &output.arena.stmt(block.stmts[0]).kind else {
        panic!("expected a local variable");
    };
    assert_eq!(
        describe(&parsed, &var.annotations, var.ty),
        vec![
            ("D".to_string(), "[ARRAY]".to_string()),
            ("E".to_string(), "null".to_string()),
        ]
    );
}
