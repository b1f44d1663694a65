//! The semantic model the annotation rules read from.
//!
//! A file is described as a tree of contexts (scopes). Each context owns an
//! ordered list of local declarations, an ordered list of uses and an ordered
//! list of child contexts. Declarations and contexts live in arenas inside
//! [`SemanticModel`] and are addressed by [`DeclId`] / [`ContextId`], so a
//! use can point at a declaration anywhere in the file.
//!
//! The model is produced by an external analysis and is read-only as far as
//! the rules are concerned.

use smol_str::SmolStr;

use crate::base::Span;

/// Identifier of a declaration inside one [`SemanticModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeclId(u32);

/// Identifier of a context inside one [`SemanticModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextId(u32);

impl DeclId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl ContextId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of lexical region a context is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// The file itself
    Global,
    Namespace,
    /// Class, struct or union body
    Class,
    /// Function parameters or body
    Function,
    /// Enumeration body
    Enum,
    Other,
}

/// Coarse classification of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A type (class, enum, typedef)
    Type,
    /// Something with a value: variable, parameter, field, enumerator, function
    Instance,
    Namespace,
    Alias,
    Import,
}

/// Memory layout of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLayout {
    /// Offset from the start of the record, in bits
    pub bit_offset: u64,
    /// Size in bytes
    pub size: u64,
}

impl FieldLayout {
    pub fn byte_offset(&self) -> u64 {
        self.bit_offset / 8
    }
}

/// Function-specific data of a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionInfo {
    /// Context holding the parameter declarations, in order
    pub argument_context: Option<ContextId>,
    /// Default expressions of the trailing parameters, in order
    pub default_parameters: Vec<SmolStr>,
    /// True for a definition (has a body), false for a bare declaration
    pub is_definition: bool,
    /// For a definition: the declaration carrying the default parameters
    pub declaration: Option<DeclId>,
}

impl FunctionInfo {
    /// A function declaration whose parameters live in `argument_context`.
    pub fn declaration(argument_context: ContextId) -> Self {
        Self {
            argument_context: Some(argument_context),
            ..Self::default()
        }
    }

    /// A function definition, optionally linked to its separate declaration.
    pub fn definition(argument_context: ContextId, declaration: Option<DeclId>) -> Self {
        Self {
            argument_context: Some(argument_context),
            is_definition: true,
            declaration,
            ..Self::default()
        }
    }

    pub fn with_defaults<I, S>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.default_parameters = defaults.into_iter().map(Into::into).collect();
        self
    }
}

/// A named entity declared in a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub identifier: SmolStr,
    /// Resolved type rendered as a string, if the analysis knows it
    pub resolved_type: Option<SmolStr>,
    pub span: Span,
    /// False for declarations whose type was inferred (e.g. `auto x = ...`)
    pub explicitly_typed: bool,
    pub is_static: bool,
    pub layout: Option<FieldLayout>,
    /// Value of an enumerator, as the analysis renders it
    pub enumerator_value: Option<SmolStr>,
    pub function: Option<FunctionInfo>,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, identifier: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            resolved_type: None,
            span,
            explicitly_typed: false,
            is_static: false,
            layout: None,
            enumerator_value: None,
            function: None,
        }
    }

    pub fn instance(identifier: impl Into<SmolStr>, span: Span) -> Self {
        Self::new(DeclarationKind::Instance, identifier, span)
    }

    /// An enumerator with its computed value.
    pub fn enumerator(
        identifier: impl Into<SmolStr>,
        span: Span,
        value: impl Into<SmolStr>,
    ) -> Self {
        Self::instance(identifier, span)
            .explicitly_typed()
            .with_enumerator_value(value)
    }

    /// A non-static record field with a known layout.
    pub fn field(identifier: impl Into<SmolStr>, span: Span, bit_offset: u64, size: u64) -> Self {
        Self::instance(identifier, span)
            .explicitly_typed()
            .with_layout(bit_offset, size)
    }

    pub fn function(identifier: impl Into<SmolStr>, span: Span, info: FunctionInfo) -> Self {
        Self::instance(identifier, span)
            .explicitly_typed()
            .with_function(info)
    }

    pub fn with_type(mut self, ty: impl Into<SmolStr>) -> Self {
        self.resolved_type = Some(ty.into());
        self
    }

    pub fn explicitly_typed(mut self) -> Self {
        self.explicitly_typed = true;
        self
    }

    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_layout(mut self, bit_offset: u64, size: u64) -> Self {
        self.layout = Some(FieldLayout { bit_offset, size });
        self
    }

    pub fn with_enumerator_value(mut self, value: impl Into<SmolStr>) -> Self {
        self.enumerator_value = Some(value.into());
        self
    }

    pub fn with_function(mut self, info: FunctionInfo) -> Self {
        self.function = Some(info);
        self
    }

    pub fn is_instance(&self) -> bool {
        self.kind == DeclarationKind::Instance
    }

    pub fn is_explicitly_typed(&self) -> bool {
        self.explicitly_typed
    }

    pub fn is_function_declaration(&self) -> bool {
        self.function.is_some()
    }

    pub fn is_definition(&self) -> bool {
        self.function.as_ref().is_some_and(|f| f.is_definition)
    }
}

/// A reference at `span` to a previously resolved declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Use {
    pub span: Span,
    pub declaration: Option<DeclId>,
}

/// One node of the context tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub kind: ContextKind,
    pub span: Span,
    pub parent: Option<ContextId>,
    declarations: Vec<DeclId>,
    uses: Vec<Use>,
    children: Vec<ContextId>,
}

impl Context {
    fn new(kind: ContextKind, span: Span, parent: Option<ContextId>) -> Self {
        Self {
            kind,
            span,
            parent,
            declarations: Vec::new(),
            uses: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn local_declaration_ids(&self) -> &[DeclId] {
        &self.declarations
    }

    pub fn uses(&self) -> &[Use] {
        &self.uses
    }

    pub fn child_contexts(&self) -> &[ContextId] {
        &self.children
    }
}

/// Semantic description of a single file.
///
/// A fresh model holds only the [`ContextKind::Global`] root context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticModel {
    contexts: Vec<Context>,
    declarations: Vec<Declaration>,
}

impl Default for SemanticModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticModel {
    pub fn new() -> Self {
        Self {
            contexts: vec![Context::new(ContextKind::Global, Span::default(), None)],
            declarations: Vec::new(),
        }
    }

    pub fn root(&self) -> ContextId {
        ContextId(0)
    }

    /// Add a child context under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this model.
    pub fn add_context(&mut self, parent: ContextId, kind: ContextKind, span: Span) -> ContextId {
        let id = ContextId(self.contexts.len() as u32);
        self.contexts.push(Context::new(kind, span, Some(parent)));
        self.contexts[parent.index()].children.push(id);
        id
    }

    /// Add a local declaration to `context`.
    ///
    /// # Panics
    ///
    /// Panics if `context` does not belong to this model.
    pub fn add_declaration(&mut self, context: ContextId, declaration: Declaration) -> DeclId {
        let id = DeclId(self.declarations.len() as u32);
        self.declarations.push(declaration);
        self.contexts[context.index()].declarations.push(id);
        id
    }

    /// Record a use inside `context`.
    ///
    /// # Panics
    ///
    /// Panics if `context` does not belong to this model.
    pub fn add_use(&mut self, context: ContextId, span: Span, declaration: Option<DeclId>) {
        self.contexts[context.index()]
            .uses
            .push(Use { span, declaration });
    }

    pub fn context(&self, id: ContextId) -> Option<&Context> {
        self.contexts.get(id.index())
    }

    pub fn declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id.index())
    }

    /// Local declarations of a context, in declaration order.
    pub fn local_declarations(&self, id: ContextId) -> impl Iterator<Item = &Declaration> + '_ {
        self.context(id)
            .into_iter()
            .flat_map(|ctx| self.local_declarations_of(ctx))
    }

    /// Local declarations of an already looked-up context.
    pub fn local_declarations_of<'a>(
        &'a self,
        ctx: &'a Context,
    ) -> impl Iterator<Item = &'a Declaration> + 'a {
        ctx.declarations
            .iter()
            .filter_map(|decl| self.declaration(*decl))
    }

    /// The declaration a use resolves to, if any.
    pub fn used_declaration(&self, use_: &Use) -> Option<&Declaration> {
        use_.declaration.and_then(|id| self.declaration(id))
    }

    /// Parameter declarations of a function, in order.
    ///
    /// Empty for anything that is not a function or has no argument context.
    pub fn parameters(&self, function: &Declaration) -> Vec<&Declaration> {
        function
            .function
            .as_ref()
            .and_then(|f| f.argument_context)
            .map(|ctx| {
                self.local_declarations(ctx)
                    .filter(|decl| decl.is_instance())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The declaration that carries the default parameters for `function`.
    ///
    /// For a definition linked to a separate declaration that is the linked
    /// declaration; otherwise `function` itself.
    pub fn defaults_owner<'a>(&'a self, function: &'a Declaration) -> &'a Declaration {
        function
            .function
            .as_ref()
            .and_then(|f| f.declaration)
            .and_then(|id| self.declaration(id))
            .unwrap_or(function)
    }

    /// Default expression of parameter `index` of `function`, if it has one.
    ///
    /// Defaults are stored for the trailing parameters only, so the lookup is
    /// aligned to the end of the owner's parameter list.
    pub fn default_parameter_for_argument<'a>(
        &'a self,
        function: &'a Declaration,
        index: usize,
    ) -> Option<&'a str> {
        let owner = self.defaults_owner(function);
        let defaults = &owner.function.as_ref()?.default_parameters;
        let count = self.parameters(owner).len().max(defaults.len());
        let first_default = count - defaults.len();
        index
            .checked_sub(first_default)
            .and_then(|i| defaults.get(i))
            .map(SmolStr::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }
}
