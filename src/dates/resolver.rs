use chrono::{Datelike, Month, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use voca_rs::manipulate::latinise;

const SPANISH_MONTHS: &[(&str, Month)] = &[
    ("enero", Month::January),
    ("ene", Month::January),
    ("febrero", Month::February),
    ("feb", Month::February),
    ("marzo", Month::March),
    ("mar", Month::March),
    ("abril", Month::April),
    ("abr", Month::April),
    ("mayo", Month::May),
    ("may", Month::May),
    ("junio", Month::June),
    ("jun", Month::June),
    ("julio", Month::July),
    ("jul", Month::July),
    ("agosto", Month::August),
    ("ago", Month::August),
    ("septiembre", Month::September),
    ("setiembre", Month::September),
    ("sept", Month::September),
    ("sep", Month::September),
    ("set", Month::September),
    ("octubre", Month::October),
    ("oct", Month::October),
    ("noviembre", Month::November),
    ("nov", Month::November),
    ("diciembre", Month::December),
    ("dic", Month::December),
];

lazy_static! {
    static ref FULL_DATE: Regex =
        Regex::new(r"\b(\d{1,2})\s+de\s+([a-z]+)\.?\s+de\s+(\d{4})\b").unwrap();
    static ref DAY_AND_MONTH: Regex = Regex::new(r"\b(\d{1,2})\s+(?:de\s+)?([a-z]+)\b").unwrap();
}

/// A date as written in a listing: either complete, or missing its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizedDate {
    Resolved(NaiveDate),
    Partial(PartialDate),
}

impl LocalizedDate {
    pub fn resolve(self, reference_today: NaiveDate) -> Option<NaiveDate> {
        match self {
            LocalizedDate::Resolved(date) => Some(date),
            LocalizedDate::Partial(partial) => resolve_year(partial, reference_today),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    pub day: u32,
    pub month: Month,
}

impl PartialDate {
    pub fn new(day: u32, month: Month) -> Self {
        Self { day, month }
    }
}

/// Lower-cases and strips accents so "Miércoles" and "miercoles" compare equal.
pub fn normalize(text: &str) -> String {
    latinise(&text.to_lowercase())
}

/// Looks up a Spanish month name or abbreviation. Expects normalized input.
pub fn month_from_name(name: &str) -> Option<Month> {
    SPANISH_MONTHS
        .iter()
        .find(|(month_name, _)| *month_name == name)
        .map(|(_, month)| *month)
}

/**
Reads a Spanish date out of free text.

Tries `<day> de <month> de <year>` first, which resolves completely, then
`<day> <month>` (optionally `<day> de <month>`), which leaves the year open.
The first number followed by a known month wins, wherever it is in the text.
*/
pub fn parse_localized_partial_date(text: &str) -> Option<LocalizedDate> {
    let text = normalize(text);

    for captures in FULL_DATE.captures_iter(&text) {
        let Some(month) = month_from_name(&captures[2]) else {
            continue;
        };
        let day = captures[1].parse().ok()?;
        let year = captures[3].parse().ok()?;

        return NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
            .map(LocalizedDate::Resolved);
    }

    for captures in DAY_AND_MONTH.captures_iter(&text) {
        let Some(month) = month_from_name(&captures[2]) else {
            continue;
        };
        let day: u32 = captures[1].parse().ok()?;

        if !(1..=31).contains(&day) {
            return None;
        }

        return Some(LocalizedDate::Partial(PartialDate::new(day, month)));
    }

    None
}

/**
Picks the year for a partial date, relative to `reference_today`.

The current year is used, except a January date seen in December, which
belongs to the next year. Dates in months already gone are left in the
current year. Returns `None` when the day doesn't exist in that month and year
(e.g. 29 February outside a leap year).
*/
pub fn resolve_year(partial: PartialDate, reference_today: NaiveDate) -> Option<NaiveDate> {
    let mut year = reference_today.year();

    if reference_today.month() == Month::December.number_from_month()
        && partial.month == Month::January
    {
        year += 1;
    }

    NaiveDate::from_ymd_opt(year, partial.month.number_from_month(), partial.day)
}
