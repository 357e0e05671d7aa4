//! Parser for composite format strings.
//!
//! The grammar is `{` selector [`,` alignment] [`:` subformat] `}` with
//! doubled braces as escapes. Brace handling follows the reference
//! behavior exactly: a candidate placeholder is a run of `{`, a body, and
//! a run of `}`. If either run has an even length the whole match renders
//! literally (each run collapsing to half its braces, rounded up); if
//! both are odd, the placeholder is evaluated and each run contributes
//! half its braces rounded down. A brace run not followed by a
//! well-formed body collapses to literal braces on its own.

pub mod lexer;

use crate::ast::{ArgSelector, PathStep, Placeholder, Segment, Template};
use crate::error::FormatError;
use lexer::Scanner;

/// Parse a composite format string into a Template. Never fails.
pub fn parse(template: &str) -> Template {
    let mut parser = Parser::new(template);
    parser.parse();
    Template::from_segments(parser.segments)
}

/// Characters allowed in a selector. Looser than the path grammar; a
/// non-index selector is validated strictly at render time so that a
/// malformed path raises `InvalidPath` instead of silently rendering.
fn is_selector_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '[' | ']')
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    segments: Vec<Segment>,
    /// Pending literal text, flushed when a placeholder or the end of the
    /// input is reached.
    literal: String,
}

impl<'a> Parser<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            scanner: Scanner::new(template),
            segments: Vec::new(),
            literal: String::new(),
        }
    }

    fn parse(&mut self) {
        loop {
            let text = self.scanner.take_until_brace();
            self.literal.push_str(text);

            match self.scanner.peek() {
                None => break,
                Some('}') => {
                    // A close run on its own unescapes to ceil(n/2) braces.
                    let run = self.scanner.count_run(|c| c == '}');
                    self.push_braces('}', run.div_ceil(2));
                }
                Some(_) => self.parse_brace_run(),
            }
        }
        self.flush_literal();
    }

    fn parse_brace_run(&mut self) {
        let open = self.scanner.count_run(|c| c == '{');
        let body_start = self.scanner.position();

        match self.try_parse_item() {
            Some((placeholder, body_end, close)) => {
                if open % 2 == 0 || close % 2 == 0 {
                    // One or both runs escaped out: the whole match is
                    // literal, body verbatim between the collapsed runs.
                    self.push_braces('{', open.div_ceil(2));
                    let body = self.scanner.slice(body_start, body_end).to_string();
                    self.literal.push_str(&body);
                    self.push_braces('}', close.div_ceil(2));
                } else {
                    self.push_braces('{', open / 2);
                    self.flush_literal();
                    self.segments.push(Segment::Placeholder(placeholder));
                    self.push_braces('}', close / 2);
                }
            }
            None => {
                // Not a placeholder; the open run stands alone.
                self.scanner.seek(body_start);
                self.push_braces('{', open.div_ceil(2));
            }
        }
    }

    /// Tries to parse `selector[,align][:format]}+` at the current
    /// position. Returns the placeholder, the byte position just past the
    /// body, and the close-run length. The caller rewinds on failure.
    fn try_parse_item(&mut self) -> Option<(Placeholder, usize, usize)> {
        let selector_text = self.scanner.take_while(is_selector_char);
        if selector_text.is_empty() {
            return None;
        }
        let selector = if selector_text.bytes().all(|b| b.is_ascii_digit()) {
            // An index too large for usize is still a well-formed
            // placeholder; it saturates and resolution reports it missing.
            ArgSelector::Index(selector_text.parse().unwrap_or(usize::MAX))
        } else {
            ArgSelector::Path(selector_text.to_string())
        };

        let mut alignment = 0i32;
        if self.scanner.eat(',') {
            let negative = self.scanner.eat('-');
            let digits = self.scanner.take_while(|c| c.is_ascii_digit());
            // An empty width (`{0,}` or `{0,-}`) means no padding.
            let magnitude: i32 = if digits.is_empty() {
                0
            } else {
                digits.parse().ok()?
            };
            alignment = if negative { -magnitude } else { magnitude };
        }

        let format = if self.scanner.eat(':') {
            // Anything except `}` is allowed in a subformat, `{` included.
            Some(self.scanner.take_while(|c| c != '}').to_string())
        } else {
            None
        };

        let body_end = self.scanner.position();
        let close = self.scanner.count_run(|c| c == '}');
        if close == 0 {
            return None;
        }
        Some((
            Placeholder {
                selector,
                alignment,
                format,
            },
            body_end,
            close,
        ))
    }

    fn push_braces(&mut self, brace: char, count: usize) {
        for _ in 0..count {
            self.literal.push(brace);
        }
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.segments
                .push(Segment::Literal(std::mem::take(&mut self.literal)));
        }
    }
}

/// Parses a path selector against the strict grammar
/// `ident ('.' ident | '[' digits ']')*`.
pub fn parse_path(path: &str) -> Result<Vec<PathStep>, FormatError> {
    let invalid = || FormatError::InvalidPath {
        path: path.to_string(),
    };
    let mut scanner = Scanner::new(path);
    let mut steps = Vec::new();

    let first = take_ident(&mut scanner).ok_or_else(invalid)?;
    steps.push(PathStep::Member(first.to_string()));

    while !scanner.at_end() {
        if scanner.eat('.') {
            let name = take_ident(&mut scanner).ok_or_else(invalid)?;
            steps.push(PathStep::Member(name.to_string()));
        } else if scanner.eat('[') {
            let digits = scanner.take_while(|c| c.is_ascii_digit());
            if digits.is_empty() || !scanner.eat(']') {
                return Err(invalid());
            }
            steps.push(PathStep::Index(digits.parse().map_err(|_| invalid())?));
        } else {
            return Err(invalid());
        }
    }
    Ok(steps)
}

fn take_ident<'a>(scanner: &mut Scanner<'a>) -> Option<&'a str> {
    match scanner.peek() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return None,
    }
    Some(scanner.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(template: &str) -> Placeholder {
        let parsed = parse(template);
        match &parsed.segments()[0] {
            Segment::Placeholder(p) => p.clone(),
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_index() {
        let p = placeholder("{0}");
        assert_eq!(p.selector, ArgSelector::Index(0));
        assert_eq!(p.alignment, 0);
        assert_eq!(p.format, None);
    }

    #[test]
    fn test_full_item() {
        let p = placeholder("{2,-10:N2}");
        assert_eq!(p.selector, ArgSelector::Index(2));
        assert_eq!(p.alignment, -10);
        assert_eq!(p.format.as_deref(), Some("N2"));
    }

    #[test]
    fn test_path_selector_kept_raw() {
        let p = placeholder("{user.address[0].city}");
        assert_eq!(
            p.selector,
            ArgSelector::Path("user.address[0].city".to_string())
        );
    }

    #[test]
    fn test_doubled_braces_collapse() {
        let parsed = parse("{{x}}");
        assert_eq!(
            parsed.segments(),
            &[Segment::Literal("{x}".to_string())]
        );
    }

    #[test]
    fn test_triple_braces_keep_placeholder() {
        let parsed = parse("{{{0}}}");
        assert_eq!(parsed.segments().len(), 3);
        assert_eq!(parsed.segments()[0], Segment::Literal("{".to_string()));
        assert!(matches!(parsed.segments()[1], Segment::Placeholder(_)));
        assert_eq!(parsed.segments()[2], Segment::Literal("}".to_string()));
    }

    #[test]
    fn test_oversized_index_saturates() {
        let p = placeholder("{99999999999999999999999}");
        assert_eq!(p.selector, ArgSelector::Index(usize::MAX));
    }

    #[test]
    fn test_malformed_body_is_literal() {
        let parsed = parse("{not a placeholder}");
        assert_eq!(
            parsed.segments(),
            &[Segment::Literal("{not a placeholder}".to_string())]
        );
    }

    #[test]
    fn test_unterminated_item_is_literal() {
        let parsed = parse("{0:N2");
        assert_eq!(parsed.segments(), &[Segment::Literal("{0:N2".to_string())]);
    }

    #[test]
    fn test_subformat_may_contain_open_brace() {
        let p = placeholder("{0:a{b}");
        assert_eq!(p.format.as_deref(), Some("a{b"));
    }

    #[test]
    fn test_parse_path_steps() {
        let steps = parse_path("user.tags[3].name").unwrap();
        assert_eq!(
            steps,
            vec![
                PathStep::Member("user".to_string()),
                PathStep::Member("tags".to_string()),
                PathStep::Index(3),
                PathStep::Member("name".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_path_rejects_bad_shapes() {
        assert!(parse_path("1abc").is_err());
        assert!(parse_path("a..b").is_err());
        assert!(parse_path("a[b]").is_err());
        assert!(parse_path("a[1").is_err());
        assert!(parse_path("").is_err());
    }
}
