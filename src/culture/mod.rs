//! Culture records and the process-wide culture registry.

mod builtin;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A bundle of locale-specific formatting conventions.
///
/// Records are immutable once registered. All fields are present on every
/// record; registration through [`CultureSpec`] fills omitted fields from
/// the `en-GB` base.
#[derive(Debug, Clone)]
pub struct Culture {
    /// IETF language tag, e.g. `en-GB` or `sv`.
    pub name: String,

    /// Short date pattern (`d`).
    pub short_date: String,
    /// Long date pattern (`D`).
    pub long_date: String,
    /// Short time pattern (`t`).
    pub short_time: String,
    /// Long time pattern (`T`).
    pub long_time: String,
    /// Month/day pattern (`M`).
    pub month_day: String,
    /// Year/month pattern (`Y`).
    pub year_month: String,
    /// Sortable date/time pattern (`s`).
    pub sortable: String,

    pub month_names: [String; 12],
    pub month_names_abbr: [String; 12],
    pub day_names: [String; 7],
    pub day_names_abbr: [String; 7],
    pub am: String,
    pub pm: String,

    /// Radix point for plain numbers.
    pub radix_point: char,
    /// Thousands separator for plain numbers.
    pub thousands_separator: char,
    /// Radix point used by the currency format.
    pub currency_radix_point: char,
    /// Thousands separator used by the currency format.
    pub currency_thousands_separator: char,
    /// Custom picture format applied by the `C` specifier.
    pub currency_format: String,
}

impl Default for Culture {
    fn default() -> Self {
        builtin::en_gb()
    }
}

impl Culture {
    /// Expands a single-letter date format into the culture's named
    /// pattern, if the letter is recognized.
    ///
    /// Composite patterns (`f`, `F`, `g`, `G`) concatenate a date pattern
    /// and a time pattern with a separating space; `m` and `y` alias `M`
    /// and `Y`.
    pub fn named_pattern(&self, spec: char) -> Option<String> {
        match spec {
            'd' => Some(self.short_date.clone()),
            'D' => Some(self.long_date.clone()),
            't' => Some(self.short_time.clone()),
            'T' => Some(self.long_time.clone()),
            'M' | 'm' => Some(self.month_day.clone()),
            'Y' | 'y' => Some(self.year_month.clone()),
            's' => Some(self.sortable.clone()),
            'f' => Some(format!("{} {}", self.long_date, self.short_time)),
            'F' => Some(format!("{} {}", self.long_date, self.long_time)),
            'g' => Some(format!("{} {}", self.short_date, self.short_time)),
            'G' => Some(format!("{} {}", self.short_date, self.long_time)),
            _ => None,
        }
    }

    /// Looks up a culture by language tag.
    ///
    /// Tries a case-insensitive exact match, then the two-letter primary
    /// language, then falls back to `en-US`. Never fails.
    pub fn lookup(tag: &str) -> Arc<Culture> {
        with_registry(|registry| {
            let key = tag.to_uppercase();
            if let Some(culture) = registry.get(&key) {
                return culture.clone();
            }
            let primary: String = key.chars().take(2).collect();
            if let Some(culture) = registry.get(&primary) {
                return culture.clone();
            }
            registry
                .get("EN-US")
                .expect("base cultures are always registered")
                .clone()
        })
    }

    /// Selects a culture from the host environment.
    ///
    /// Reads `LC_ALL`, `LC_MESSAGES`, and `LANG` in that order, strips the
    /// codeset and modifier (`sv_SE.UTF-8@euro` becomes `sv-SE`), and
    /// falls back to `en-US` when nothing usable is set.
    pub fn from_env() -> Arc<Culture> {
        let raw = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()));
        match raw {
            Some(raw) => Culture::lookup(&env_tag(&raw)),
            None => Culture::lookup("en-US"),
        }
    }
}

/// Normalizes a POSIX locale string to an IETF-style tag.
fn env_tag(raw: &str) -> String {
    let tag = raw.split(['.', '@']).next().unwrap_or(raw);
    tag.replace('_', "-")
}

/// A culture registration record. Every field except `name` is optional;
/// omitted fields inherit from the `en-GB` base record.
#[derive(Debug, Clone, Default)]
pub struct CultureSpec {
    pub name: String,
    pub short_date: Option<String>,
    pub long_date: Option<String>,
    pub short_time: Option<String>,
    pub long_time: Option<String>,
    pub month_day: Option<String>,
    pub year_month: Option<String>,
    pub month_names: Option<[String; 12]>,
    pub month_names_abbr: Option<[String; 12]>,
    pub day_names: Option<[String; 7]>,
    pub day_names_abbr: Option<[String; 7]>,
    pub am: Option<String>,
    pub pm: Option<String>,
    pub radix_point: Option<char>,
    pub thousands_separator: Option<char>,
    pub currency_radix_point: Option<char>,
    pub currency_thousands_separator: Option<char>,
    pub currency_format: Option<String>,
}

impl CultureSpec {
    pub fn new(name: &str) -> Self {
        CultureSpec {
            name: name.to_string(),
            ..CultureSpec::default()
        }
    }

    /// Builds a complete record by merging this spec onto the base.
    ///
    /// Abbreviated month and day names default to the first three
    /// characters of the supplied full names.
    pub fn build(self) -> Culture {
        let base = builtin::en_gb();

        let month_names_abbr = self
            .month_names_abbr
            .or_else(|| self.month_names.as_ref().map(|names| abbreviate(names)))
            .unwrap_or(base.month_names_abbr);
        let day_names_abbr = self
            .day_names_abbr
            .or_else(|| self.day_names.as_ref().map(|names| abbreviate(names)))
            .unwrap_or(base.day_names_abbr);

        Culture {
            name: self.name,
            short_date: self.short_date.unwrap_or(base.short_date),
            long_date: self.long_date.unwrap_or(base.long_date),
            short_time: self.short_time.unwrap_or(base.short_time),
            long_time: self.long_time.unwrap_or(base.long_time),
            month_day: self.month_day.unwrap_or(base.month_day),
            year_month: self.year_month.unwrap_or(base.year_month),
            sortable: base.sortable,
            month_names: self.month_names.unwrap_or(base.month_names),
            month_names_abbr,
            day_names: self.day_names.unwrap_or(base.day_names),
            day_names_abbr,
            am: self.am.unwrap_or(base.am),
            pm: self.pm.unwrap_or(base.pm),
            radix_point: self.radix_point.unwrap_or(base.radix_point),
            thousands_separator: self.thousands_separator.unwrap_or(base.thousands_separator),
            currency_radix_point: self.currency_radix_point.unwrap_or(base.currency_radix_point),
            currency_thousands_separator: self
                .currency_thousands_separator
                .unwrap_or(base.currency_thousands_separator),
            currency_format: self.currency_format.unwrap_or(base.currency_format),
        }
    }
}

fn abbreviate<const N: usize>(names: &[String; N]) -> [String; N] {
    let mut abbr: [String; N] = std::array::from_fn(|_| String::new());
    for (i, name) in names.iter().enumerate() {
        abbr[i] = name.chars().take(3).collect();
    }
    abbr
}

/// Registers a culture record, overwriting any record with the same name.
/// Records are never deleted.
pub fn register_culture(spec: CultureSpec) {
    let culture = spec.build();
    let key = culture.name.to_uppercase();
    with_registry(|registry| {
        registry.insert(key, Arc::new(culture));
    });
}

/// Process-wide registry, lazily initialized with the built-in cultures.
static REGISTRY: Mutex<Option<HashMap<String, Arc<Culture>>>> = Mutex::new(None);

fn with_registry<R>(f: impl FnOnce(&mut HashMap<String, Arc<Culture>>) -> R) -> R {
    let mut guard = REGISTRY.lock().unwrap();
    let registry = guard.get_or_insert_with(builtin::registry);
    f(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_tag_strips_codeset_and_modifier() {
        assert_eq!(env_tag("sv_SE.UTF-8"), "sv-SE");
        assert_eq!(env_tag("de_DE@euro"), "de-DE");
        assert_eq!(env_tag("fr"), "fr");
        assert_eq!(env_tag("en_US.iso88591@custom"), "en-US");
    }

    #[test]
    fn test_named_pattern_composites() {
        let en = builtin::en_gb();
        assert_eq!(en.named_pattern('g').unwrap(), "dd/MM/yyyy HH:mm");
        assert_eq!(en.named_pattern('F').unwrap(), "dd MMMM yyyy HH:mm:ss");
        assert_eq!(en.named_pattern('y'), en.named_pattern('Y'));
        assert!(en.named_pattern('q').is_none());
    }

    #[test]
    fn test_spec_abbreviates_supplied_names() {
        let mut spec = CultureSpec::new("xx");
        spec.month_names = Some(builtin::en_gb().month_names);
        let culture = spec.build();
        assert_eq!(culture.month_names_abbr[8], "Sep");
        assert_eq!(culture.month_names_abbr[0], "Jan");
    }
}
