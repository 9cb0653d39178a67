//! Error types for sqb

use thiserror::Error;

/// Result type alias for rendering a single expression node.
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type alias for building a whole query.
pub type BuildResult<T> = Result<T, BuildError>;

/// Structural validation errors raised by expression nodes while rendering.
///
/// Every variant names the node that failed so callers can tell causes apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A condition was rendered without a column name.
    #[error("unset column in {node}")]
    MissingColumn { node: &'static str },

    /// A condition was rendered without a comparison.
    #[error("unset comparison in {node}")]
    MissingCompare { node: &'static str },

    /// A BETWEEN bound was not set.
    #[error("unset {side} bound in {node}")]
    MissingBound {
        node: &'static str,
        side: &'static str,
    },

    /// A child expression of AND/OR/Paren was not set.
    #[error("unset {side} expression in {node}")]
    MissingOperand {
        node: &'static str,
        side: &'static str,
    },

    /// A column list had no columns.
    #[error("unspecified columns")]
    EmptyColumns,

    /// An IN/NOT IN list had no values after flattening.
    #[error("empty value list in {node}")]
    EmptyList { node: &'static str },

    /// A string literal (table name, keyword) was empty.
    #[error("unspecified string in {node}")]
    EmptyLiteral { node: &'static str },

    /// Error raised by a caller-defined expression.
    #[error("{0}")]
    Custom(String),
}

impl RenderError {
    /// Create an error for a caller-defined expression.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Check if this error reports an unset field.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. }
                | Self::MissingCompare { .. }
                | Self::MissingBound { .. }
                | Self::MissingOperand { .. }
        )
    }

    /// Check if this error reports an empty collection or literal.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyColumns | Self::EmptyList { .. } | Self::EmptyLiteral { .. }
        )
    }
}

/// Errors returned by [`Builder::build`](crate::Builder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The template has more `?` markers than bound expressions.
    #[error("number of bindVars exceeds replaceable statements: {bindings} bound, placeholder #{placeholder} has none")]
    BindingsExhausted {
        /// 1-based position of the placeholder that had no binding.
        placeholder: usize,
        /// Number of expressions that were bound.
        bindings: usize,
    },

    /// A bound expression failed to render.
    #[error("render binding #{index}: {source}")]
    Render {
        /// 0-based binding index of the failing expression.
        index: usize,
        #[source]
        source: RenderError,
    },
}

impl BuildError {
    /// Check if this is a binding-count error.
    pub fn is_bindings_exhausted(&self) -> bool {
        matches!(self, Self::BindingsExhausted { .. })
    }

    /// Get the node-level error, if the build failed while rendering.
    pub fn render_error(&self) -> Option<&RenderError> {
        match self {
            Self::Render { source, .. } => Some(source),
            Self::BindingsExhausted { .. } => None,
        }
    }
}
