//! Sorting
//!
//! Every sort works on a copy of the items and swaps the result in only when
//! the comparator succeeded for every pair. Comparators are fallible: the
//! first error aborts the sort, leaves the store untouched and is returned to
//! the caller. The merge sort below is stable, so equal items keep their
//! relative order.
//!
//! Value sorts keep keys for Map and renumber every other kind. Key sorts
//! always keep keys.

use std::cmp::Ordering;

use typed_arrays_core::{Key, Number, Pairs, Result, Value};

use super::Container;
use crate::collation::{self, CollationGuard, DEFAULT_LOCALE};
use crate::policy::Operation;

/// Comparison mode for [`Container::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortFlags {
    /// Natural ascending order across types ([`Value::compare`])
    #[default]
    Regular,
    /// Numeric order; non-numeric values compare as zero
    Numeric,
    /// Byte-wise order of string forms
    String,
    /// Natural order of string forms (`"img2" < "img10"`)
    Natural,
    /// Natural order ignoring case
    NaturalCaseInsensitive,
    /// String forms compared under the current collation locale
    LocaleString,
}

impl SortFlags {
    /// Compare two values in this mode
    pub fn compare(self, a: &Value, b: &Value) -> Ordering {
        match self {
            SortFlags::Regular => a.compare(b),
            SortFlags::Numeric => numeric(a).compare(numeric(b)),
            SortFlags::String => a.to_text().cmp(&b.to_text()),
            SortFlags::Natural => natural_cmp(&a.to_text(), &b.to_text(), true),
            SortFlags::NaturalCaseInsensitive => natural_cmp(&a.to_text(), &b.to_text(), false),
            SortFlags::LocaleString => collation::compare(&a.to_text(), &b.to_text()),
        }
    }
}

fn numeric(v: &Value) -> Number {
    v.as_number().unwrap_or(Number::Int(0))
}

/// Default key order: integers numerically, then strings byte-wise
pub fn compare_keys(a: &Key, b: &Key) -> Ordering {
    match (a, b) {
        (Key::Int(x), Key::Int(y)) => x.cmp(y),
        (Key::Str(x), Key::Str(y)) => x.cmp(y),
        (Key::Int(_), Key::Str(_)) => Ordering::Less,
        (Key::Str(_), Key::Int(_)) => Ordering::Greater,
    }
}

/// Natural string order: digit runs compare by numeric value, other runs
/// compare as text (case-folded unless `case_sensitive`)
pub fn natural_cmp(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    let (left, right) = if case_sensitive {
        (a.to_string(), b.to_string())
    } else {
        (a.to_lowercase(), b.to_lowercase())
    };
    let mut xs = chunks(&left);
    let mut ys = chunks(&right);
    loop {
        let ord = match (xs.next(), ys.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => compare_chunks(x, y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Split into maximal runs of ASCII digits and non-digits
fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

fn compare_chunks(x: &str, y: &str) -> Ordering {
    let x_digits = x.starts_with(|c: char| c.is_ascii_digit());
    let y_digits = y.starts_with(|c: char| c.is_ascii_digit());
    if x_digits && y_digits {
        let xt = x.trim_start_matches('0');
        let yt = y.trim_start_matches('0');
        xt.len().cmp(&yt.len()).then_with(|| xt.cmp(yt))
    } else {
        x.cmp(y)
    }
}

/// Stable merge sort with a fallible comparator
fn try_sort<T, F>(mut items: Vec<T>, cmp: &mut F) -> Result<Vec<T>>
where
    F: FnMut(&T, &T) -> Result<Ordering>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = try_sort(items, cmp)?;
    let right = try_sort(right, cmp)?;

    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut l = left.into_iter().peekable();
    let mut r = right.into_iter().peekable();
    while let (Some(a), Some(b)) = (l.peek(), r.peek()) {
        let take_right = cmp(b, a)? == Ordering::Less;
        out.extend(if take_right { r.next() } else { l.next() });
    }
    out.extend(l);
    out.extend(r);
    Ok(out)
}

impl Container {
    /// Sort values in the given mode
    pub fn sort(&mut self, flags: SortFlags) -> Result<&mut Self> {
        self.gate(Operation::Sort)?;
        self.sort_items(false, |a, b| Ok(flags.compare(&a.1, &b.1)))
    }

    /// Sort values with a fallible comparator
    pub fn sort_by<F>(&mut self, mut cmp: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Value) -> Result<Ordering>,
    {
        self.gate(Operation::Sort)?;
        self.sort_items(false, |a, b| cmp(&a.1, &b.1))
    }

    /// Sort by key, keeping keys
    pub fn sort_key(&mut self) -> Result<&mut Self> {
        self.sort_key_by(|a, b| Ok(compare_keys(a, b)))
    }

    /// Sort by key with a fallible key comparator, keeping keys
    pub fn sort_key_by<F>(&mut self, mut cmp: F) -> Result<&mut Self>
    where
        F: FnMut(&Key, &Key) -> Result<Ordering>,
    {
        self.gate(Operation::SortKey)?;
        self.sort_items(true, |a, b| cmp(&a.0, &b.0))
    }

    /// Natural-order value sort
    pub fn sort_natural(&mut self, case_sensitive: bool) -> Result<&mut Self> {
        self.gate(Operation::SortNatural)?;
        let flags = if case_sensitive {
            SortFlags::Natural
        } else {
            SortFlags::NaturalCaseInsensitive
        };
        self.sort_items(false, |a, b| Ok(flags.compare(&a.1, &b.1)))
    }

    /// Sort string forms under `locale`
    pub fn sort_locale(&mut self, locale: &str) -> Result<&mut Self> {
        self.sort_locale_by(locale, |a, b| Ok(SortFlags::LocaleString.compare(a, b)))
    }

    /// Sort with `cmp` while `locale` is the installed collation.
    ///
    /// The previous collation is restored before returning, including when
    /// `cmp` fails.
    pub fn sort_locale_by<F>(&mut self, locale: &str, mut cmp: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Value) -> Result<Ordering>,
    {
        self.gate(Operation::SortLocale)?;
        let mut guard = CollationGuard::install(locale);
        let result = self.sort_items(false, |a, b| cmp(&a.1, &b.1));
        if result.is_err() {
            guard.mark_failed();
        }
        drop(guard);
        result
    }

    /// [`sort_locale`](Self::sort_locale) with the configured locale, or
    /// `"C"` when none was configured
    pub fn sort_locale_default(&mut self) -> Result<&mut Self> {
        let locale = self
            .options
            .locale
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        self.sort_locale(&locale)
    }

    fn sort_items<F>(&mut self, preserve_keys: bool, mut cmp: F) -> Result<&mut Self>
    where
        F: FnMut(&(Key, Value), &(Key, Value)) -> Result<Ordering>,
    {
        let sorted: Pairs = try_sort(self.items(), &mut cmp)?;
        let sorted = self.rekey(sorted, preserve_keys);
        self.commit(sorted);
        Ok(self)
    }
}
