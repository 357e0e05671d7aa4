//! Built-in culture data.
//!
//! The six core cultures are constructed directly; the extra per-locale
//! records (`it`, `uk`, `en-ZA`, `as`) go through the same [`CultureSpec`] merge
//! path that user registrations use.

use std::collections::HashMap;
use std::sync::Arc;

use super::{Culture, CultureSpec};

fn names<const N: usize>(names: [&str; N]) -> [String; N] {
    names.map(String::from)
}

/// British English, the base record every other culture inherits from.
pub fn en_gb() -> Culture {
    let month_names = names([
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]);
    let day_names = names([
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ]);
    Culture {
        name: "en-GB".to_string(),
        short_date: "dd/MM/yyyy".to_string(),
        long_date: "dd MMMM yyyy".to_string(),
        short_time: "HH:mm".to_string(),
        long_time: "HH:mm:ss".to_string(),
        month_day: "d MMMM".to_string(),
        year_month: "MMMM yyyy".to_string(),
        sortable: "yyyy-MM-ddTHH:mm:ss".to_string(),
        month_names_abbr: super::abbreviate(&month_names),
        month_names,
        day_names_abbr: super::abbreviate(&day_names),
        day_names,
        am: "AM".to_string(),
        pm: "PM".to_string(),
        radix_point: '.',
        thousands_separator: ',',
        currency_radix_point: '.',
        currency_thousands_separator: ',',
        currency_format: "£#,0.00".to_string(),
    }
}

/// US English.
pub fn en_us() -> Culture {
    Culture {
        name: "en-US".to_string(),
        short_date: "M/d/yyyy".to_string(),
        long_date: "dddd, MMMM d, yyyy".to_string(),
        short_time: "h:mm tt".to_string(),
        long_time: "h:mm:ss tt".to_string(),
        month_day: "MMMM d".to_string(),
        currency_format: "$#,0.00".to_string(),
        ..en_gb()
    }
}

/// Swedish.
pub fn sv() -> Culture {
    let month_names = names([
        "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september",
        "oktober", "november", "december",
    ]);
    let day_names = names([
        "söndag", "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag",
    ]);
    Culture {
        name: "sv".to_string(),
        short_date: "yyyy-MM-dd".to_string(),
        long_date: "'den 'd MMMM yyyy".to_string(),
        month_names_abbr: super::abbreviate(&month_names),
        month_names,
        day_names_abbr: super::abbreviate(&day_names),
        day_names,
        radix_point: ',',
        thousands_separator: ' ',
        currency_radix_point: ',',
        currency_thousands_separator: '.',
        currency_format: "#,0.00 kr".to_string(),
        ..en_gb()
    }
}

/// German. Uses European number conventions.
pub fn de() -> Culture {
    let month_names = names([
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ]);
    let day_names = names([
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ]);
    Culture {
        name: "de".to_string(),
        short_date: "yyyy-MM-dd".to_string(),
        long_date: "dddd, d. MMMM yyyy".to_string(),
        month_day: "d. MMMM".to_string(),
        month_names_abbr: super::abbreviate(&month_names),
        month_names,
        day_names_abbr: super::abbreviate(&day_names),
        day_names,
        ..european_numbers(en_gb())
    }
}

/// Spanish. Uses European number conventions.
pub fn es() -> Culture {
    let month_names = names([
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ]);
    let day_names = names([
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ]);
    Culture {
        name: "es".to_string(),
        short_date: "dd/MM/yyyy".to_string(),
        long_date: "dddd, d' de 'MMMM' de 'yyyy".to_string(),
        month_day: "d' de 'MMMM".to_string(),
        year_month: "MMMM' de 'yyyy".to_string(),
        month_names_abbr: super::abbreviate(&month_names),
        month_names,
        day_names_abbr: super::abbreviate(&day_names),
        day_names,
        ..european_numbers(en_gb())
    }
}

/// French. Uses European number conventions.
pub fn fr() -> Culture {
    let month_names = names([
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ]);
    let day_names = names([
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ]);
    Culture {
        name: "fr".to_string(),
        short_date: "dd/MM/yyyy".to_string(),
        long_date: "dddd d MMMM yyyy".to_string(),
        month_day: String::new(),
        month_names_abbr: super::abbreviate(&month_names),
        month_names,
        day_names_abbr: super::abbreviate(&day_names),
        day_names,
        ..european_numbers(en_gb())
    }
}

fn european_numbers(base: Culture) -> Culture {
    Culture {
        radix_point: ',',
        currency_radix_point: ',',
        thousands_separator: '.',
        currency_thousands_separator: '.',
        currency_format: "#,0.00 €".to_string(),
        ..base
    }
}

/// Italian locale record.
fn it() -> CultureSpec {
    CultureSpec {
        short_date: Some("dd/MM/yyyy".to_string()),
        long_date: Some("dddd d MMMM yyyy".to_string()),
        month_day: Some("dd MMMM".to_string()),
        year_month: Some("MMMM yyyy".to_string()),
        am: Some("m.".to_string()),
        pm: Some("p.".to_string()),
        radix_point: Some(','),
        thousands_separator: Some('.'),
        currency_format: Some("#,0.00 '€'".to_string()),
        month_names: Some(names([
            "Gennaio",
            "Febbraio",
            "Marzo",
            "Aprile",
            "Maggio",
            "Giugno",
            "Luglio",
            "Agosto",
            "Settembre",
            "Ottobre",
            "Novembre",
            "Dicembre",
        ])),
        month_names_abbr: Some(names([
            "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
        ])),
        day_names: Some(names([
            "domenica",
            "lunedì",
            "martedì",
            "mercoledì",
            "giovedì",
            "venerdì",
            "sabato",
        ])),
        day_names_abbr: Some(names(["dom", "lun", "mar", "mer", "gio", "ven", "sab"])),
        ..CultureSpec::new("it")
    }
}

/// Ukrainian locale record.
fn uk() -> CultureSpec {
    CultureSpec {
        short_date: Some("dd.MM.yyyy".to_string()),
        long_date: Some("d MMMM yyyy' р.'".to_string()),
        short_time: Some("H:mm".to_string()),
        long_time: Some("H:mm:ss".to_string()),
        month_day: Some("d MMMM".to_string()),
        year_month: Some("MMMM yyyy' р.'".to_string()),
        radix_point: Some(','),
        currency_radix_point: Some(','),
        thousands_separator: Some(' '),
        currency_thousands_separator: Some(' '),
        currency_format: Some("#,0.00 '₴'".to_string()),
        month_names: Some(names([
            "Січень",
            "Лютий",
            "Березень",
            "Квітень",
            "Травень",
            "Червень",
            "Липень",
            "Серпень",
            "Вересень",
            "Жовтень",
            "Листопад",
            "Грудень",
        ])),
        month_names_abbr: Some(names([
            "Січ", "Лют", "Бер", "Кві", "Тра", "Чер", "Лип", "Сер", "Вер", "Жов", "Лис", "Гру",
        ])),
        day_names: Some(names([
            "неділя",
            "понеділок",
            "вівторок",
            "середа",
            "четвер",
            "пʼятниця",
            "субота",
        ])),
        day_names_abbr: Some(names(["Нд", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"])),
        ..CultureSpec::new("uk")
    }
}

/// Assamese locale record.
fn r#as() -> CultureSpec {
    CultureSpec {
        short_date: Some("dd-MM-yyyy".to_string()),
        long_date: Some("yyyy,MMMM dd, dddd".to_string()),
        short_time: Some("tt h:mm".to_string()),
        long_time: Some("tt h:mm:ss".to_string()),
        month_day: Some("dd MMMM".to_string()),
        year_month: Some("MMMM,yy".to_string()),
        am: Some("পূৰ্বাহ্ণ".to_string()),
        pm: Some("অপৰাহ্ণ".to_string()),
        radix_point: Some(','),
        currency_format: Some("#,0.00 '₹'".to_string()),
        month_names: Some(names([
            "জানুৱাৰী",
            "ফেব্ৰুৱাৰী",
            "মাৰ্চ",
            "এপ্ৰিল",
            "মে",
            "জুন",
            "জুলাই",
            "আগষ্ট",
            "ছেপ্তেম্বৰ",
            "অক্টোবৰ",
            "নৱেম্বৰ",
            "ডিচেম্বৰ",
        ])),
        month_names_abbr: Some(names([
            "জানু", "ফেব্ৰু", "মাৰ্চ", "এপ্ৰিল", "মে", "জুন", "জুলাই", "আগ", "সেপ্ট", "অক্টো",
            "নভে", "ডিসে",
        ])),
        day_names: Some(names([
            "দেওবাৰ",
            "সোমবাৰ",
            "মঙ্গলবাৰ",
            "বুধবাৰ",
            "বৃহষ্পতিবাৰ",
            "শুক্ৰবাৰ",
            "শনিবাৰ",
        ])),
        day_names_abbr: Some(names([
            "ৰবি", "সোম", "মঙ্গল", "বুধ", "বৃহষ্পতি", "শুক্ৰ", "শনি",
        ])),
        ..CultureSpec::new("as")
    }
}

/// South African English locale record.
fn en_za() -> CultureSpec {
    CultureSpec {
        short_date: Some("yyyy/MM/dd".to_string()),
        long_date: Some("dd MMMM yyyy".to_string()),
        short_time: Some("hh:mm tt".to_string()),
        long_time: Some("hh:mm:ss tt".to_string()),
        month_day: Some("dd MMMM".to_string()),
        year_month: Some("MMMM yyyy".to_string()),
        radix_point: Some(','),
        thousands_separator: Some(' '),
        currency_format: Some("#,0.00 'R'".to_string()),
        ..CultureSpec::new("en-ZA")
    }
}

/// Builds the initial registry contents.
pub fn registry() -> HashMap<String, Arc<Culture>> {
    let mut registry = HashMap::new();
    for culture in [en_gb(), en_us(), sv(), de(), es(), fr()] {
        registry.insert(culture.name.to_uppercase(), Arc::new(culture));
    }
    for spec in [it(), uk(), en_za(), r#as()] {
        let culture = spec.build();
        registry.insert(culture.name.to_uppercase(), Arc::new(culture));
    }
    registry
}
