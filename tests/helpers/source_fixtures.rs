//! Source fixtures with hand-built semantic models.
//!
//! Spans are looked up by text so the fixtures stay readable.

use sourceinfo::hir::{ContextId, ContextKind, DeclId, Declaration, FunctionInfo, SemanticModel};
use sourceinfo::{Position, SourceText, Span};

/// Source text plus the model an analysis would have produced for it.
pub struct Fixture {
    pub text: SourceText,
    pub model: SemanticModel,
}

impl Fixture {
    pub fn new(source: &str) -> Self {
        Self {
            text: SourceText::new(source),
            model: SemanticModel::new(),
        }
    }

    pub fn root(&self) -> ContextId {
        self.model.root()
    }

    /// Span of the first occurrence of `needle` on `line`.
    pub fn span(&self, line: usize, needle: &str) -> Span {
        let text = self
            .text
            .line(line)
            .unwrap_or_else(|| panic!("fixture has no line {line}"));
        let byte_idx = text
            .find(needle)
            .unwrap_or_else(|| panic!("'{needle}' not found on line {line}: {text:?}"));
        let column = text[..byte_idx].chars().count();
        Span::on_line(Position::new(line, column), needle.chars().count())
    }

    /// Span covering whole lines `first..=last`.
    pub fn lines(&self, first: usize, last: usize) -> Span {
        let width = self.text.line(last).map_or(0, |l| l.chars().count());
        Span::from_coords(first, 0, last, width)
    }

    /// Add a parameter context on `line` holding `names`, each typed `int`.
    pub fn parameters(&mut self, line: usize, names: &[&str]) -> ContextId {
        let root = self.root();
        let whole_line = self.lines(line, line);
        let args = self
            .model
            .add_context(root, ContextKind::Function, whole_line);
        for name in names {
            let span = self.span(line, &format!("int {name}"));
            let span = Span::new(
                Position::new(span.start.line, span.start.column + 4),
                span.end,
            );
            self.model.add_declaration(
                args,
                Declaration::instance(*name, span)
                    .with_type("int")
                    .explicitly_typed(),
            );
        }
        args
    }

    /// Declare function `name` on `line` with parameters `names` and the
    /// given trailing defaults.
    pub fn function(
        &mut self,
        line: usize,
        name: &str,
        names: &[&str],
        defaults: &[&str],
    ) -> DeclId {
        let args = self.parameters(line, names);
        let span = self.span(line, name);
        let root = self.root();
        self.model.add_declaration(
            root,
            Declaration::function(
                name,
                span,
                FunctionInfo::declaration(args).with_defaults(defaults.iter().copied()),
            ),
        )
    }

    /// Record a use of `declaration` at the first `needle` on `line`.
    pub fn call(&mut self, context: ContextId, line: usize, needle: &str, declaration: DeclId) {
        let span = self.span(line, needle);
        self.model.add_use(context, span, Some(declaration));
    }
}

pub const SAMPLE_SOURCE: &str = r#"enum Color { RED, GREEN = 5, BLUE };
struct Packet {
    char tag;
    int length;
    double value;
};
int mix(int a, int b, int c = 7);
int mix(int a, int b, int c) {
    auto total = a + b;
    return mix(total, 2);
}"#;

/// A file exercising every rule once.
///
/// Expected annotations with the default config:
/// - ` = 0` at 0:16 and ` = 6` at 0:33
/// - byte grids at 2:18, 3:18 and 4:18
/// - `= int` at 8:9
/// - `a:` at 9:15, `b:` at 9:22 and `, c: 7` at 9:23
/// - ` = 7` at 7:27
pub fn sample_fixture() -> Fixture {
    let mut fx = Fixture::new(SAMPLE_SOURCE);
    let root = fx.root();

    let body = fx.span(0, "{ RED, GREEN = 5, BLUE }");
    let color = fx.model.add_context(root, ContextKind::Enum, body);
    for (name, value) in [("RED", "0"), ("GREEN", "5"), ("BLUE", "6")] {
        let span = fx.span(0, name);
        fx.model
            .add_declaration(color, Declaration::enumerator(name, span, value));
    }

    let packet = fx.lines(1, 5);
    let packet = fx.model.add_context(root, ContextKind::Class, packet);
    let fields = [(2, "tag", 0, 1), (3, "length", 32, 4), (4, "value", 64, 8)];
    for (line, name, bit_offset, size) in fields {
        let span = fx.span(line, name);
        fx.model
            .add_declaration(packet, Declaration::field(name, span, bit_offset, size));
    }

    let mix_decl = fx.function(6, "mix", &["a", "b", "c"], &["7"]);

    let def_args = fx.parameters(7, &["a", "b", "c"]);
    let mix_span = fx.span(7, "mix");
    fx.model.add_declaration(
        root,
        Declaration::function(
            "mix",
            mix_span,
            FunctionInfo::definition(def_args, Some(mix_decl)),
        ),
    );

    let body = fx.lines(7, 10);
    let body = fx.model.add_context(def_args, ContextKind::Function, body);
    let total = fx.span(8, "total");
    fx.model
        .add_declaration(body, Declaration::instance("total", total).with_type("int"));
    fx.call(body, 9, "mix", mix_decl);

    fx
}
