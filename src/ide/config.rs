//! Source-info options

use super::SourceInfoError;

/// Which annotations to show, and how far rules may look into the text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SourceInfoConfig {
    /// Parameter names in front of call arguments (`f(a: 1, b: 2)`)
    pub show_function_argument_names: bool,
    /// Omitted default arguments at call sites and defaults at definitions
    pub show_function_argument_default_values: bool,
    /// Byte grid behind record fields
    pub show_struct_field_size: bool,
    /// Inferred type of implicitly typed declarations
    pub show_auto_type: bool,
    /// Value of enumerators without an explicit initializer
    pub show_enum_const_values: bool,

    /// Characters read after an enumerator or parameter to look for `=`
    pub enum_lookahead: usize,
    /// Characters read after a field to find the end of its line
    pub field_lookahead: usize,
    /// Lines a call's argument list may span
    pub call_lookahead_lines: usize,
    /// Columns read past the call start on the last scanned line
    pub call_lookahead_columns: usize,
    /// Calls to functions with fewer parameters are not annotated
    pub min_call_parameters: usize,
    /// Bytes per visual group in field grids (0 disables grouping)
    pub byte_grouping: u16,
}

impl Default for SourceInfoConfig {
    fn default() -> Self {
        Self {
            show_function_argument_names: true,
            show_function_argument_default_values: true,
            show_struct_field_size: true,
            show_auto_type: true,
            show_enum_const_values: true,
            enum_lookahead: 100,
            field_lookahead: 500,
            call_lookahead_lines: 10,
            call_lookahead_columns: 500,
            min_call_parameters: 2,
            byte_grouping: 4,
        }
    }
}

impl SourceInfoConfig {
    /// A config with every annotation kind switched off.
    pub fn none() -> Self {
        Self {
            show_function_argument_names: false,
            show_function_argument_default_values: false,
            show_struct_field_size: false,
            show_auto_type: false,
            show_enum_const_values: false,
            ..Self::default()
        }
    }

    /// True if the call-site rule has anything to show.
    pub fn shows_call_sites(&self) -> bool {
        self.show_function_argument_names || self.show_function_argument_default_values
    }

    /// Reject lookahead windows that could never find anything.
    pub fn validate(&self) -> Result<(), SourceInfoError> {
        let windows = [
            ("enum_lookahead", self.enum_lookahead),
            ("field_lookahead", self.field_lookahead),
            ("call_lookahead_columns", self.call_lookahead_columns),
        ];
        match windows.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(SourceInfoError::invalid_config(format!(
                "{name} must be greater than 0"
            ))),
            None => Ok(()),
        }
    }
}
