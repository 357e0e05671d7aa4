//! Date and time formatting with culture-aware pattern expansion.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::culture::Culture;

/// Formats a date using a named pattern or a custom picture pattern.
///
/// An empty spec means the culture's general pattern (`G`). A single
/// character is looked up as a named pattern first; unknown single
/// characters are rendered as a one-character custom pattern.
pub fn format_date(value: &NaiveDateTime, spec: &str, culture: &Culture) -> String {
    let mut chars = spec.chars();
    let pattern = match (chars.next(), chars.next()) {
        (None, _) => culture.named_pattern('G').unwrap_or_default(),
        (Some(c), None) => culture.named_pattern(c).unwrap_or_else(|| spec.to_string()),
        _ => spec.to_string(),
    };
    render_pattern(value, &pattern, culture)
}

fn render_pattern(date: &NaiveDateTime, pattern: &str, culture: &Culture) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        match chars[pos] {
            '\'' => match chars[pos + 1..].iter().position(|&c| c == '\'') {
                Some(end) => {
                    out.extend(&chars[pos + 1..pos + 1 + end]);
                    pos += end + 2;
                }
                // An unterminated quote stands for itself.
                None => {
                    out.push('\'');
                    pos += 1;
                }
            },
            token @ ('d' | 'M' | 'y' | 'H' | 'h' | 'm' | 's' | 't') => {
                let mut run = 0;
                while pos + run < chars.len() && chars[pos + run] == token {
                    run += 1;
                }
                pos += run;
                push_token_run(&mut out, token, run, date, culture);
            }
            other => {
                out.push(other);
                pos += 1;
            }
        }
    }

    out
}

/// Emits a run of identical pattern letters. Runs longer than the
/// longest recognized form split greedily, so `ddddd` renders as the full
/// day name followed by the numeric day.
fn push_token_run(out: &mut String, token: char, mut run: usize, date: &NaiveDateTime, culture: &Culture) {
    let longest = match token {
        'd' | 'M' => 4,
        _ => 2,
    };
    while run > 0 {
        // Year runs only recognize yyyy and yy; a lone y is literal.
        if token == 'y' {
            if run >= 4 {
                out.push_str(&date.year().to_string());
                run -= 4;
            } else if run >= 2 {
                out.push_str(&format!("{:02}", date.year().rem_euclid(100)));
                run -= 2;
            } else {
                out.push('y');
                run -= 1;
            }
        } else {
            let take = run.min(longest);
            push_token(out, token, take, date, culture);
            run -= take;
        }
    }
}

fn push_token(out: &mut String, token: char, len: usize, date: &NaiveDateTime, culture: &Culture) {
    let weekday = date.weekday().num_days_from_sunday() as usize;
    let month = date.month() as usize - 1;
    match (token, len) {
        ('d', 4) => out.push_str(&culture.day_names[weekday]),
        ('d', 3) => out.push_str(&culture.day_names_abbr[weekday]),
        ('d', 2) => out.push_str(&format!("{:02}", date.day())),
        ('d', 1) => out.push_str(&date.day().to_string()),

        ('M', 4) => out.push_str(&culture.month_names[month]),
        ('M', 3) => out.push_str(&culture.month_names_abbr[month]),
        ('M', 2) => out.push_str(&format!("{:02}", date.month())),
        ('M', 1) => out.push_str(&date.month().to_string()),

        ('H', 2) => out.push_str(&format!("{:02}", date.hour())),
        ('H', 1) => out.push_str(&date.hour().to_string()),

        ('h', 2) => out.push_str(&format!("{:02}", to_12_hour(date.hour()))),
        ('h', 1) => out.push_str(&to_12_hour(date.hour()).to_string()),

        ('m', 2) => out.push_str(&format!("{:02}", date.minute())),
        ('m', 1) => out.push_str(&date.minute().to_string()),

        ('s', 2) => out.push_str(&format!("{:02}", date.second())),
        ('s', 1) => out.push_str(&date.second().to_string()),

        ('t', 2) => out.push_str(am_pm(date, culture)),
        ('t', 1) => out.extend(am_pm(date, culture).chars().next()),

        _ => unreachable!("token runs are clamped to recognized lengths"),
    }
}

/// Maps a 24-hour value onto the 12-hour clock; midnight is 12.
fn to_12_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn am_pm<'c>(date: &NaiveDateTime, culture: &'c Culture) -> &'c str {
    if date.hour() < 12 {
        &culture.am
    } else {
        &culture.pm
    }
}
