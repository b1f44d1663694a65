//! Annotation rules: turning a semantic model snapshot into annotations.
//!
//! The model is walked depth-first, pre-order. For every context the enabled
//! rules run in a fixed order, then the walk descends into the child
//! contexts in model order:
//!
//! 1. enum constant values (` = 3` after `BLUE`)
//! 2. inferred types (`= int` in front of `auto x`)
//! 3. record field layouts (byte grids behind fields)
//! 4. call sites (`a:` in front of arguments, `, c: 0` for omitted defaults)
//! 5. defaults at definitions (` = 0` after a parameter)
//!
//! Rules that find no type, no declaration or no matching text emit nothing.

use tracing::trace;

use crate::base::{Position, Span, TextWindow};
use crate::hir::{Context, ContextId, ContextKind, Declaration, SemanticModel, Use};
use crate::render::{Annotation, ByteGridAnnotation, Color, TextAnnotation};

use super::SourceInfoConfig;
use super::scanner::scan_call;

const NOTE_CORNER_RADIUS: f64 = 4.0;
const INFERRED_TYPE_MARGIN: f64 = 6.0;

/// Build the full annotation set for `model`.
///
/// The result is ordered by emission, which is deterministic for a given
/// model, text and config.
pub fn collect_annotations(
    model: &SemanticModel,
    text: &dyn TextWindow,
    config: &SourceInfoConfig,
) -> Vec<(Position, Annotation)> {
    let mut collector = Collector {
        model,
        text,
        config,
        annotations: Vec::new(),
    };
    collector.walk_context(model.root());
    collector.annotations
}

struct Collector<'a> {
    model: &'a SemanticModel,
    text: &'a dyn TextWindow,
    config: &'a SourceInfoConfig,
    annotations: Vec<(Position, Annotation)>,
}

impl Collector<'_> {
    fn walk_context(&mut self, id: ContextId) {
        let model = self.model;
        let Some(ctx) = model.context(id) else {
            return;
        };

        if self.config.show_enum_const_values && ctx.kind == ContextKind::Enum {
            self.enum_values(ctx);
        }
        if self.config.show_auto_type {
            self.inferred_types(ctx);
        }
        if self.config.show_struct_field_size && ctx.kind == ContextKind::Class {
            self.field_layouts(ctx);
        }
        if self.config.shows_call_sites() {
            for use_ in ctx.uses() {
                self.call_site(use_);
            }
        }
        if self.config.show_function_argument_default_values {
            self.definition_defaults(ctx);
        }

        for child in ctx.child_contexts() {
            self.walk_context(*child);
        }
    }

    fn emit(&mut self, position: Position, annotation: impl Into<Annotation>) {
        let annotation = annotation.into();
        trace!(
            "annotation at {}:{} -> {:?}",
            position.line, position.column, annotation
        );
        self.annotations.push((position, annotation));
    }

    /// True if the text after `position` starts with `=`, i.e. the value is
    /// already written out in the source.
    fn followed_by_initializer(&self, position: Position) -> bool {
        self.text
            .text_in_range(Span::on_line(position, self.config.enum_lookahead))
            .trim_start()
            .starts_with('=')
    }

    fn enum_values(&mut self, ctx: &Context) {
        let model = self.model;
        for decl in model.local_declarations_of(ctx) {
            let Some(value) = &decl.enumerator_value else {
                continue;
            };
            let end = decl.span.end;
            if self.followed_by_initializer(end) {
                continue;
            }
            self.emit(
                end,
                TextAnnotation::new(end.column, format!(" = {value}"), Color::GRAY),
            );
        }
    }

    fn inferred_types(&mut self, ctx: &Context) {
        let model = self.model;
        for decl in model.local_declarations_of(ctx) {
            if !decl.is_instance() || decl.is_explicitly_typed() {
                continue;
            }
            let Some(ty) = &decl.resolved_type else {
                continue;
            };
            let start = decl.span.start;
            self.emit(
                start,
                note(start.column, format!("= {ty}")).with_margin(INFERRED_TYPE_MARGIN),
            );
        }
    }

    /// One byte grid per data member, all aligned behind the longest member
    /// line of the record.
    fn field_layouts(&mut self, ctx: &Context) {
        let model = self.model;
        let mut grids: Vec<(usize, ByteGridAnnotation)> = Vec::new();
        let mut previous_offset: Option<u64> = None;
        let mut max_column = 0;

        for decl in model.local_declarations_of(ctx) {
            if !decl.is_instance() || decl.is_function_declaration() || decl.is_static {
                continue;
            }
            let Some(layout) = decl.layout else {
                continue;
            };

            let end = decl.span.end;
            let offset = layout.byte_offset();
            if let (Some(prev_offset), Some((_, prev))) = (previous_offset, grids.last_mut()) {
                let padding = offset
                    .saturating_sub(prev_offset)
                    .saturating_sub(prev.size());
                prev.set_padding(padding);
            }
            grids.push((
                end.line,
                ByteGridAnnotation::new(0, layout.size, 0, offset, self.config.byte_grouping),
            ));
            previous_offset = Some(offset);

            let rest_of_line = self
                .text
                .text_in_range(Span::on_line(end, self.config.field_lookahead))
                .chars()
                .count();
            max_column = max_column.max(end.column.saturating_add(rest_of_line).saturating_add(1));
        }

        for (line, mut grid) in grids {
            grid.set_column(grid.column().saturating_add(max_column));
            self.emit(Position::new(line, grid.column()), grid);
        }
    }

    /// Argument names in front of each argument of a call, and the omitted
    /// trailing defaults in front of its closing parenthesis.
    fn call_site(&mut self, use_: &Use) {
        let model = self.model;
        let Some(function) = model.used_declaration(use_) else {
            return;
        };
        if !function.is_function_declaration() {
            return;
        }
        let parameters = model.parameters(function);
        if parameters.is_empty() || parameters.len() < self.config.min_call_parameters {
            return;
        }

        let start = use_.span.end;
        let window = Span::new(
            start,
            Position::new(
                start.line.saturating_add(self.config.call_lookahead_lines),
                start.column.saturating_add(self.config.call_lookahead_columns),
            ),
        );
        let text = self.text.text_in_range(window);
        let Some(scan) = scan_call(&text, start, parameters.len()) else {
            trace!(
                "use of {} at {}:{} is not a call",
                function.identifier, start.line, start.column
            );
            return;
        };

        if self.config.show_function_argument_names {
            for (param, boundary) in parameters.iter().zip(&scan.boundaries) {
                if param.identifier.is_empty() {
                    continue;
                }
                self.emit(
                    *boundary,
                    note(boundary.column, format!("{}:", param.identifier)).with_space_right(true),
                );
            }
        }

        if !self.config.show_function_argument_default_values {
            return;
        }
        let Some(close) = scan.close else {
            return;
        };
        let matched = scan.argument_count();
        if let Some(text) = self.omitted_defaults(function, &parameters, matched) {
            self.emit(close, note(close.column, text));
        }
    }

    /// `", b: 2, c: 3"` for the parameters from `matched` on.
    ///
    /// The leading `", "` is only added when `matched > 0`; an empty call
    /// `f()` gets `"b: 2, c: 3"`.
    fn omitted_defaults(
        &self,
        function: &Declaration,
        parameters: &[&Declaration],
        matched: usize,
    ) -> Option<String> {
        let parts: Vec<String> = (matched..parameters.len())
            .filter_map(|index| {
                let default = self.model.default_parameter_for_argument(function, index)?;
                let name = &parameters[index].identifier;
                Some(if self.config.show_function_argument_names && !name.is_empty() {
                    format!("{name}: {default}")
                } else {
                    default.to_string()
                })
            })
            .collect();

        if parts.is_empty() {
            return None;
        }
        let joined = parts.join(", ");
        Some(if matched > 0 {
            format!(", {joined}")
        } else {
            joined
        })
    }

    /// Default values next to the parameters of out-of-line definitions,
    /// which do not repeat them in the source.
    fn definition_defaults(&mut self, ctx: &Context) {
        let model = self.model;
        for decl in model.local_declarations_of(ctx) {
            if !decl.is_instance() || !decl.is_definition() {
                continue;
            }
            let has_defaults = model
                .defaults_owner(decl)
                .function
                .as_ref()
                .is_some_and(|f| !f.default_parameters.is_empty());
            if !has_defaults {
                continue;
            }

            for (index, param) in model.parameters(decl).into_iter().enumerate() {
                let Some(default) = model.default_parameter_for_argument(decl, index) else {
                    continue;
                };
                let end = param.span.end;
                if self.followed_by_initializer(end) {
                    continue;
                }
                self.emit(end, note(end.column, format!(" = {default}")));
            }
        }
    }
}

/// Style shared by argument names, defaults and inferred types.
fn note(column: usize, text: String) -> TextAnnotation {
    TextAnnotation::new(column, text, Color::NOTE_TEXT)
        .with_background(Color::NOTE_BACKGROUND, NOTE_CORNER_RADIUS)
}
