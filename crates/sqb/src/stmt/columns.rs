use crate::error::{RenderError, RenderResult};
use crate::render::{Render, Sink};

/// A column list: `col1, col2, col3`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns(pub Vec<String>);

impl Columns {
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Columns(columns.into_iter().map(Into::into).collect())
    }
}

impl Render for Columns {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        let Some((first, rest)) = self.0.split_first() else {
            return Err(RenderError::EmptyColumns);
        };
        sink.push_str(first);
        for column in rest {
            sink.push_str(", ");
            sink.push_str(column);
        }
        Ok(())
    }
}
