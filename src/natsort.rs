//! Natural filename ordering ("2.png" before "10.png")

use std::cmp::Ordering;
use std::iter::Peekable;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn take_digits<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        run.push(c);
    }
    run
}

/// Compare two digit runs by value without parsing (no overflow on long runs)
fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
}

/// Collation class: punctuation and whitespace sort before digits, digits before letters
fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// Base characters of `s`: decomposed, with accents and other combining marks dropped
fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn accent_count(s: &str) -> usize {
    s.nfd().filter(|c| is_combining_mark(*c)).count()
}

/// Primary-strength comparison: digit runs by value, other characters
/// by class and then by base letter, ignoring case and accents
fn primary_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = base_chars(a).peekable();
    let mut b_chars = base_chars(b).peekable();

    loop {
        let ord = match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let n = take_digits(&mut a_chars);
                let m = take_digits(&mut b_chars);
                compare_numbers(&n, &m)
            }
            (Some(x), Some(y)) => {
                a_chars.next();
                b_chars.next();
                char_class(x)
                    .cmp(&char_class(y))
                    .then_with(|| x.to_lowercase().cmp(y.to_lowercase()))
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Tie-break for names equal at primary strength: unaccented sorts first,
/// then lowercase, then fewer leading zeros, then raw code points so the
/// order stays total.
fn tie_break(a: &str, b: &str) -> Ordering {
    let accents = accent_count(a).cmp(&accent_count(b));
    if accents != Ordering::Equal {
        return accents;
    }
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x != y && x.to_lowercase().eq(y.to_lowercase()) {
            return y.is_lowercase().cmp(&x.is_lowercase());
        }
    }
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two filenames the way a person reads them.
///
/// Digit runs compare by numeric value. Everything else compares by base
/// letter, so case and accents only matter when names are otherwise equal;
/// punctuation sorts before digits, digits before letters.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary_cmp(a, b).then_with(|| tie_break(a, b))
}

/// Sort filenames in place using [`natural_cmp`]
pub fn sort_natural<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

/// First run of ASCII digits in a filename, if any
pub fn first_number(name: &str) -> Option<&str> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let rest = &name[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// True when two digit runs denote the same integer ("02" == "2")
pub fn same_number(a: &str, b: &str) -> bool {
    compare_numbers(a, b) == Ordering::Equal
}
