//! Call-site annotations: argument names and omitted default values.

use rstest::rstest;
use sourceinfo::hir::{Declaration, DeclId};
use sourceinfo::{Position, SourceInfoConfig};

use crate::helpers::annotation_assertions::*;
use crate::helpers::source_fixtures::*;

fn notes(fx: &Fixture, config: SourceInfoConfig) -> Vec<(usize, usize, String)> {
    text_notes(provider_for(fx, config).store())
}

fn owned(expected: &[(usize, usize, &str)]) -> Vec<(usize, usize, String)> {
    expected
        .iter()
        .map(|(l, c, t)| (*l, *c, t.to_string()))
        .collect()
}

/// `void f(int a, int b, int c = 0);` followed by `call` on line 1.
fn three_parameter_call(call: &str) -> Fixture {
    let mut fx = Fixture::new(&format!("void f(int a, int b, int c = 0);\n{call}"));
    let f = fx.function(0, "f", &["a", "b", "c"], &["0"]);
    let root = fx.root();
    fx.call(root, 1, "f", f);
    fx
}

// =============================================================================
// ARGUMENT NAMES AND DEFAULTS
// =============================================================================

#[test]
fn test_two_of_three_arguments() {
    let fx = three_parameter_call("f(1, 2);");
    assert_eq!(
        notes(&fx, SourceInfoConfig::default()),
        owned(&[(1, 2, "a:"), (1, 5, "b:"), (1, 6, ", c: 0")])
    );
}

#[test]
fn test_all_arguments_given() {
    let fx = three_parameter_call("f(1, 2, 3);");
    assert_eq!(
        notes(&fx, SourceInfoConfig::default()),
        owned(&[(1, 2, "a:"), (1, 5, "b:"), (1, 8, "c:")])
    );
}

#[test]
fn test_no_arguments_given() {
    // Only `c` has a default; `a` and `b` are skipped.
    let fx = three_parameter_call("f();");
    assert_eq!(
        notes(&fx, SourceInfoConfig::default()),
        owned(&[(1, 2, "c: 0")])
    );
}

#[test]
fn test_space_before_parenthesis() {
    let fx = three_parameter_call("f (1, 2);");
    assert_eq!(
        notes(&fx, SourceInfoConfig::default()),
        owned(&[(1, 3, "a:"), (1, 6, "b:"), (1, 7, ", c: 0")])
    );
}

#[rstest]
#[case::names_only(true, false, &[(1, 2, "a:"), (1, 5, "b:")])]
#[case::defaults_only(false, true, &[(1, 6, ", 0")])]
#[case::neither(false, false, &[])]
fn test_call_site_options(
    #[case] names: bool,
    #[case] defaults: bool,
    #[case] expected: &[(usize, usize, &str)],
) {
    let fx = three_parameter_call("f(1, 2);");
    let config = SourceInfoConfig {
        show_function_argument_names: names,
        show_function_argument_default_values: defaults,
        ..SourceInfoConfig::default()
    };
    assert_eq!(notes(&fx, config), owned(expected));
}

#[test]
fn test_argument_names_have_trailing_space() {
    let fx = three_parameter_call("f(1, 2);");
    let provider = provider_for(&fx, SourceInfoConfig::default());
    let tag = provider
        .annotations_at(Position::new(1, 2))
        .next()
        .and_then(|a| a.as_text())
        .unwrap();
    assert!(tag.space_right());
    assert!(!tag.space_left());
}

// =============================================================================
// SHAPES OF CALLS
// =============================================================================

fn clamp_fixture(source: &str) -> Fixture {
    let mut fx = Fixture::new(source);
    let clamp = fx.function(0, "clamp", &["value", "low", "high"], &["100"]);
    let root = fx.root();
    fx.call(root, 1, "clamp", clamp);
    fx
}

const MULTI_LINE_CALL: &str = "int clamp(int value, int low, int high = 100);
int x = clamp(
    v,
    0);";

#[test]
fn test_multi_line_call() {
    let fx = clamp_fixture(MULTI_LINE_CALL);
    assert_eq!(
        notes(&fx, SourceInfoConfig::default()),
        owned(&[(2, 4, "value:"), (3, 4, "low:"), (3, 5, ", high: 100")])
    );
}

#[test]
fn test_call_lookahead_limits_lines() {
    let fx = clamp_fixture(MULTI_LINE_CALL);
    let config = SourceInfoConfig {
        call_lookahead_lines: 1,
        ..SourceInfoConfig::default()
    };
    assert_eq!(notes(&fx, config), owned(&[(2, 4, "value:")]));
}

#[test]
fn test_nested_calls() {
    let mut fx = Fixture::new(
        "int outer(int p, int q);\nint inner(int x, int y);\nouter(inner(1, 2), 3);",
    );
    let outer = fx.function(0, "outer", &["p", "q"], &[]);
    let inner = fx.function(1, "inner", &["x", "y"], &[]);
    let root = fx.root();
    fx.call(root, 2, "outer", outer);
    fx.call(root, 2, "inner", inner);

    assert_eq!(
        notes(&fx, SourceInfoConfig::default()),
        owned(&[(2, 6, "p:"), (2, 12, "x:"), (2, 15, "y:"), (2, 19, "q:")])
    );
}

#[test]
fn test_function_reference_is_not_a_call() {
    let mut fx = Fixture::new("int outer(int p, int q);\nauto ptr = &outer;");
    let outer = fx.function(0, "outer", &["p", "q"], &[]);
    let root = fx.root();
    fx.call(root, 1, "outer", outer);

    assert!(notes(&fx, SourceInfoConfig::default()).is_empty());
}

#[test]
fn test_later_calls_are_still_annotated() {
    let mut fx = Fixture::new(
        "int outer(int p, int q);\nauto ptr = &outer;\nouter(1, 2);",
    );
    let outer = fx.function(0, "outer", &["p", "q"], &[]);
    let root = fx.root();
    fx.call(root, 1, "outer", outer);
    fx.call(root, 2, "outer", outer);

    assert_eq!(
        notes(&fx, SourceInfoConfig::default()),
        owned(&[(2, 6, "p:"), (2, 9, "q:")])
    );
}

// =============================================================================
// SKIPPED USES
// =============================================================================

#[test]
fn test_unresolved_use() {
    let mut fx = Fixture::new("missing(1, 2);");
    let span = fx.span(0, "missing");
    let root = fx.root();
    fx.model.add_use(root, span, None);

    assert!(notes(&fx, SourceInfoConfig::default()).is_empty());
}

#[test]
fn test_use_of_a_variable() {
    let mut fx = Fixture::new("int value;\nvalue(1, 2);");
    let span = fx.span(0, "value");
    let root = fx.root();
    let value: DeclId = fx.model.add_declaration(
        root,
        Declaration::instance("value", span).with_type("int").explicitly_typed(),
    );
    fx.call(root, 1, "value", value);

    assert!(notes(&fx, SourceInfoConfig::default()).is_empty());
}

#[rstest]
#[case::default_threshold(2, &[])]
#[case::no_threshold(0, &[(1, 2, "x:")])]
fn test_minimum_parameter_count(
    #[case] min_call_parameters: usize,
    #[case] expected: &[(usize, usize, &str)],
) {
    let mut fx = Fixture::new("void g(int x);\ng(5);");
    let g = fx.function(0, "g", &["x"], &[]);
    let root = fx.root();
    fx.call(root, 1, "g", g);

    let config = SourceInfoConfig {
        min_call_parameters,
        ..SourceInfoConfig::default()
    };
    assert_eq!(notes(&fx, config), owned(expected));
}

#[test]
fn test_call_to_definition_uses_linked_defaults() {
    use sourceinfo::hir::FunctionInfo;

    let mut fx = Fixture::new(
        "int scale(int v, int by = 2);\nint scale(int v, int by) { return v * by; }\nscale(3);",
    );
    let decl = fx.function(0, "scale", &["v", "by"], &["2"]);
    let def_args = fx.parameters(1, &["v", "by"]);
    let span = fx.span(1, "scale");
    let root = fx.root();
    let def = fx.model.add_declaration(
        root,
        Declaration::function("scale", span, FunctionInfo::definition(def_args, Some(decl))),
    );
    fx.call(root, 2, "scale", def);

    let config = SourceInfoConfig {
        show_auto_type: false,
        ..SourceInfoConfig::default()
    };
    assert_eq!(
        notes(&fx, config),
        owned(&[(1, 23, " = 2"), (2, 6, "v:"), (2, 7, ", by: 2")])
    );
}
