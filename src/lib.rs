//! Culture-aware composite string formatting.
//!
//! Templates use `{index[,alignment][:format]}` placeholders in the
//! familiar composite style: positional arguments, optional field widths,
//! and per-value subformats for numbers and dates. All culture-dependent
//! output (separators, month names, currency pictures) is driven by an
//! explicit [`Culture`] record rather than process-global state.
//!
//! ```
//! use compfmt::{format, Culture, Value};
//!
//! let en = Culture::lookup("en-US");
//! let args: Vec<Value> = vec!["world".into(), 1234.5.into()];
//!
//! assert_eq!(format("Hello {0}!", &args, &en).unwrap(), "Hello world!");
//! assert_eq!(format("{1:N2}", &args, &en).unwrap(), "1,234.50");
//! ```
//!
//! Placeholders may also navigate into the first argument with an object
//! path, which is convenient with the `json` feature enabled:
//!
//! ```
//! # #[cfg(feature = "json")] {
//! use compfmt::{format, Culture, Value};
//!
//! let user: Value = serde_json::json!({"name": "Ada", "tags": ["admin"]}).into();
//! let en = Culture::lookup("en-GB");
//!
//! assert_eq!(
//!     format("{name} ({tags[0]})", &[user], &en).unwrap(),
//!     "Ada (admin)"
//! );
//! # }
//! ```
//!
//! Parsed templates are cached, so repeated [`format`] calls with the
//! same template string only parse it once. For explicit control, parse a
//! [`Template`] yourself and call [`Template::format`].

pub mod ast;
pub mod culture;
pub mod error;
pub mod parser;
pub mod value;

mod cache;
mod formatter;

pub use ast::Template;
pub use culture::{register_culture, Culture, CultureSpec};
pub use error::FormatError;
pub use value::{CustomFormat, Value};

/// Formats a composite template against an argument list.
///
/// Equivalent to parsing the template and calling [`Template::format`],
/// but consults the process-wide template cache first.
pub fn format(template: &str, args: &[Value], culture: &Culture) -> Result<String, FormatError> {
    cache::get_or_parse(template).format(args, culture)
}

/// Formats a single number with a standard specifier (`N2`, `X8`, `C`,
/// ...) or a custom picture format (`#,##0.00`). `None` or an empty spec
/// applies default formatting.
pub fn format_number(value: f64, spec: Option<&str>, culture: &Culture) -> String {
    formatter::format_number(value, spec, culture)
}

/// Formats a single date with a named pattern letter (`d`, `T`, `G`, ...)
/// or a custom pattern (`yyyy-MM-dd`). An empty spec uses the culture's
/// general pattern.
pub fn format_date(value: &chrono::NaiveDateTime, spec: &str, culture: &Culture) -> String {
    formatter::format_date(value, spec, culture)
}
