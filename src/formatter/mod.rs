//! Rendering of parsed templates against argument lists.

mod date;
mod number;

pub use date::format_date;
pub use number::format_number;

use crate::ast::{ArgSelector, PathStep, Segment, Template};
use crate::culture::Culture;
use crate::error::FormatError;
use crate::value::Value;

impl Template {
    /// Renders the template against `args` using the culture's
    /// conventions for numbers and dates.
    ///
    /// A positional selector beyond the argument list is an error; a path
    /// that resolves to nothing renders as the empty string.
    pub fn format(&self, args: &[Value], culture: &Culture) -> Result<String, FormatError> {
        let mut out = String::new();
        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(item) => {
                    let value = resolve(&item.selector, args)?;
                    let rendered = render_value(value, item.format.as_deref(), culture);
                    push_aligned(&mut out, &rendered, item.alignment);
                }
            }
        }
        Ok(out)
    }
}

fn resolve<'a>(
    selector: &ArgSelector,
    args: &'a [Value],
) -> Result<Option<&'a Value>, FormatError> {
    match selector {
        ArgSelector::Index(index) => {
            if *index >= args.len() {
                return Err(FormatError::MissingArgument {
                    index: *index,
                    supplied: args.len(),
                });
            }
            Ok(Some(&args[*index]))
        }
        // Paths navigate from the first argument. Resolution failures are
        // not errors, only a malformed path is.
        ArgSelector::Path(path) => {
            let steps = crate::parser::parse_path(path)?;
            Ok(walk_path(&steps, args.first()))
        }
    }
}

fn walk_path<'a>(steps: &[PathStep], root: Option<&'a Value>) -> Option<&'a Value> {
    let mut current = root?;
    for step in steps {
        current = match step {
            PathStep::Member(name) => current.member(name)?,
            PathStep::Index(index) => current.element(*index)?,
        };
    }
    Some(current)
}

/// Dispatches the subformat to the value's own formatter. Only numbers,
/// dates, and custom values interpret a subformat; everything else
/// renders its default string.
fn render_value(value: Option<&Value>, spec: Option<&str>, culture: &Culture) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match value {
        Value::Number(n) => number::format_number(*n, spec, culture),
        Value::Date(date) => date::format_date(date, spec.unwrap_or(""), culture),
        Value::Custom(custom) => custom.custom_format(spec, culture),
        other => default_string(other, culture),
    }
}

fn default_string(value: &Value, culture: &Culture) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number::format_number(*n, None, culture),
        Value::Text(text) => text.clone(),
        Value::Date(date) => date::format_date(date, "", culture),
        Value::List(items) => items
            .iter()
            .map(|item| default_string(item, culture))
            .collect::<Vec<_>>()
            .join(","),
        Value::Map(_) => "[object]".to_string(),
        Value::Custom(custom) => custom.custom_format(None, culture),
    }
}

/// Pads the rendered value to the alignment width, measured in
/// characters. Positive widths right-justify, negative left-justify.
fn push_aligned(out: &mut String, rendered: &str, alignment: i32) {
    let width = alignment.unsigned_abs() as usize;
    let padding = width.saturating_sub(rendered.chars().count());
    if alignment > 0 {
        out.extend(std::iter::repeat(' ').take(padding));
        out.push_str(rendered);
    } else {
        out.push_str(rendered);
        out.extend(std::iter::repeat(' ').take(padding));
    }
}
