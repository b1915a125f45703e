//! Rendering of XFA date picture clauses.
//!
//! Supported symbols:
//!
//! | symbol | meaning |
//! |---|---|
//! | `D` / `DD` | day of month, plain / zero-padded |
//! | `J` / `JJJ` | day of year, plain / zero-padded |
//! | `M` / `MM` | month number, plain / zero-padded |
//! | `MMM` / `MMMM` | abbreviated / full month name |
//! | `E` | day of week, 1 = Sunday |
//! | `EEE` / `EEEE` | abbreviated / full day name |
//! | `YY` / `YYYY` | two / four digit year |
//! | `G` | era name |
//!
//! Text in single quotes is literal, `''` is a quote. Other non-letters are
//! copied through.

use chrono::{Datelike, NaiveDate};

use crate::error::{DomError, Result};
use crate::locale::Locale;

/// Render `date` with an XFA date pattern using names from `locale`.
///
/// # Errors
/// `Pattern` for unsupported symbols, an unterminated quote, or names the
/// locale does not define.
pub fn format_date(pattern: &str, date: NaiveDate, locale: &Locale<'_>) -> Result<String> {
    let fail = |reason: String| DomError::Pattern {
        pattern: pattern.to_string(),
        reason,
    };

    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i = copy_literal(&chars, i + 1, &mut out)
                .ok_or_else(|| fail("unterminated quoted literal".to_string()))?;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            out.push(c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        i += run;

        let missing = |what: &str| fail(format!("locale has no {what}"));
        let month0 = date.month0() as usize;
        let weekday = date.weekday().num_days_from_sunday() as usize;

        match (c, run) {
            ('D', 1) => out.push_str(&date.day().to_string()),
            ('D', 2) => out.push_str(&format!("{:02}", date.day())),
            ('J', 1) => out.push_str(&date.ordinal().to_string()),
            ('J', 3) => out.push_str(&format!("{:03}", date.ordinal())),
            ('M', 1) => out.push_str(&date.month().to_string()),
            ('M', 2) => out.push_str(&format!("{:02}", date.month())),
            ('M', 3) => out.push_str(
                locale
                    .month_name(month0, true)
                    .ok_or_else(|| missing("abbreviated month names"))?,
            ),
            ('M', 4) => out.push_str(
                locale
                    .month_name(month0, false)
                    .ok_or_else(|| missing("month names"))?,
            ),
            ('E', 1) => out.push_str(&(weekday + 1).to_string()),
            ('E', 3) => out.push_str(
                locale
                    .day_name(weekday, true)
                    .ok_or_else(|| missing("abbreviated day names"))?,
            ),
            ('E', 4) => out.push_str(
                locale
                    .day_name(weekday, false)
                    .ok_or_else(|| missing("day names"))?,
            ),
            ('Y', 2) => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            ('Y', 4) => out.push_str(&format!("{:04}", date.year())),
            ('G', 1) => out.push_str(
                locale
                    .era_name(date.year() > 0)
                    .ok_or_else(|| missing("era names"))?,
            ),
            _ => {
                let symbol: String = std::iter::repeat(c).take(run).collect();
                return Err(fail(format!("unsupported symbol '{symbol}'")));
            }
        }
    }

    Ok(out)
}

/// Copy a quoted literal starting just after its opening quote.
///
/// `''` inside the literal is a quote. Returns the index after the closing
/// quote, or `None` when the literal is never closed.
fn copy_literal(chars: &[char], start: usize, out: &mut String) -> Option<usize> {
    let mut i = start;
    while i < chars.len() {
        if chars[i] == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            return Some(i + 1);
        }
        out.push(chars[i]);
        i += 1;
    }
    None
}
