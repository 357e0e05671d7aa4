//! Parsed template types.

/// A parsed composite format string.
///
/// Parsing never fails: brace runs that do not form a well-formed
/// placeholder are kept as literal text with escape collapsing applied.
/// A `Template` can be reused to format multiple argument lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Create a Template from parsed segments.
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Template { segments }
    }

    /// Get the segments of this template.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if this template contains at least one placeholder.
    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(_)))
    }

    /// Parse a composite format string into a Template.
    pub fn parse(template: &str) -> Template {
        crate::parser::parse(template)
    }
}

/// A run of literal text or a single placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed `{selector[,align][:format]}` item.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub selector: ArgSelector,
    /// Field width; positive right-justifies, negative left-justifies,
    /// zero disables padding.
    pub alignment: i32,
    /// Subformat passed to the value's formatter, if any.
    pub format: Option<String>,
}

/// How a placeholder selects its argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgSelector {
    /// All-digit selector: positional index into the argument list.
    Index(usize),
    /// Anything else: a dotted/indexed path evaluated against the first
    /// argument. Kept raw; the path grammar is validated at render time
    /// so a bad path raises `InvalidPath` exactly when it is used.
    Path(String),
}

/// One step of a resolved object path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// `.name` member access (or the leading bare name).
    Member(String),
    /// `[n]` index access.
    Index(usize),
}
