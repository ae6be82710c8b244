//! Natural-order string comparison.
//!
//! Digit runs are compared by numeric magnitude, everything else by code
//! point. The comparison walks both strings with two byte cursors and never
//! allocates, so arbitrarily long digit runs compare correctly without being
//! parsed into integers.

use std::cmp::Ordering;

/// Compare two strings in natural order.
///
/// Runs of ASCII digits are compared as unsigned integers of unbounded
/// size. Leading zeros do not contribute to magnitude: they only break a
/// tie between strings that are otherwise equal, where the first digit run
/// with more padding sorts first, so `"pic007"` comes before `"pic7"`.
/// Non-digit characters are compared one at a time, lowercased on both
/// sides first when `case_sensitive` is false. When one string is a prefix
/// of the other, the shorter one sorts first.
///
/// # Examples
///
/// ```
/// use dirload::natsort::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("pic2", "pic10", true), Ordering::Less);
/// assert_eq!(compare("pic007", "pic7", true), Ordering::Less);
/// assert_eq!(compare("pic007a", "pic7", true), Ordering::Greater);
/// assert_eq!(compare("Pic4", "pic4", true), Ordering::Less);
/// assert_eq!(compare("Pic4", "pic4", false), Ordering::Equal);
/// assert_eq!(compare("", "a", true), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    let (a_bytes, b_bytes) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);
    let mut padding = Ordering::Equal;

    loop {
        match (a_bytes.get(i), b_bytes.get(j)) {
            (None, None) => return padding,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let runs = compare_digit_runs(a_bytes, i, b_bytes, j);
                if runs.ordering != Ordering::Equal {
                    return runs.ordering;
                }
                if padding == Ordering::Equal {
                    padding = runs.padding;
                }
                (i, j) = runs.next;
            }
            (Some(_), Some(_)) => {
                // Cursors only ever stop on char boundaries: digits are one
                // byte wide and other chars advance by their UTF-8 length.
                let (Some(x), Some(y)) = (a[i..].chars().next(), b[j..].chars().next()) else {
                    return padding;
                };
                let ordering = compare_chars(x, y, case_sensitive);
                if ordering != Ordering::Equal {
                    return ordering;
                }
                i += x.len_utf8();
                j += y.len_utf8();
            }
        }
    }
}

fn compare_chars(x: char, y: char, case_sensitive: bool) -> Ordering {
    if case_sensitive || x == y {
        x.cmp(&y)
    } else {
        x.to_lowercase().cmp(y.to_lowercase())
    }
}

struct DigitRuns {
    /// Numeric ordering of the two runs.
    ordering: Ordering,
    /// `Less` when the left run carries more leading zeros.
    padding: Ordering,
    /// Cursor positions just past both runs, meaningful only when
    /// `ordering` is `Equal`.
    next: (usize, usize),
}

/// Compare the digit runs starting at `a[start_a]` and `b[start_b]`.
fn compare_digit_runs(a: &[u8], start_a: usize, b: &[u8], start_b: usize) -> DigitRuns {
    let mut i = skip_leading_zeros(a, start_a);
    let mut j = skip_leading_zeros(b, start_b);
    let padding = (j - start_b).cmp(&(i - start_a));
    let mut pending = Ordering::Equal;

    loop {
        let x = a.get(i).filter(|c| c.is_ascii_digit());
        let y = b.get(j).filter(|c| c.is_ascii_digit());
        let ordering = match (x, y) {
            (Some(x), Some(y)) => {
                if pending == Ordering::Equal {
                    pending = x.cmp(y);
                }
                i += 1;
                j += 1;
                continue;
            }
            // More significant digits means a larger number.
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => pending,
        };
        return DigitRuns {
            ordering,
            padding,
            next: (i, j),
        };
    }
}

/// Advance past leading zeros, stopping on the last digit of an all-zero run.
fn skip_leading_zeros(s: &[u8], mut i: usize) -> usize {
    while s.get(i) == Some(&b'0') && s.get(i + 1).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

/// Stable in-place natural sort.
///
/// Elements that compare equal keep their relative input order.
///
/// # Examples
///
/// ```
/// use dirload::natsort::natural_sort;
///
/// let mut files = vec!["ep10.mkv", "ep9.mkv", "ep1.mkv"];
/// natural_sort(&mut files, true);
/// assert_eq!(files, ["ep1.mkv", "ep9.mkv", "ep10.mkv"]);
/// ```
pub fn natural_sort<S: AsRef<str>>(items: &mut [S], case_sensitive: bool) {
    items.sort_by(|a, b| compare(a.as_ref(), b.as_ref(), case_sensitive));
}

/// Return a naturally sorted copy of `items`.
///
/// # Examples
///
/// ```
/// use dirload::natsort::sorted;
///
/// let files = sorted(["B2", "a10", "a2"], false);
/// assert_eq!(files, ["a2", "a10", "B2"]);
/// ```
#[must_use]
pub fn sorted<I, S>(items: I, case_sensitive: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
    natural_sort(&mut items, case_sensitive);
    items
}
