//! Natural (alphanumeric) ordering.
//!
//! SONiC CLI output sorts "Ethernet2" before "Ethernet10": embedded digit
//! runs compare by numeric value, everything else byte-wise. The same
//! ordering applies to compliance-code names inside an EEPROM dump.

use std::cmp::Ordering;

/// Compares two strings in natural order.
///
/// Digit runs are compared as numbers (leading zeros break ties in favor of
/// the shorter run); all other bytes compare by their ASCII value.
pub fn compare(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (run_a, next_i) = digit_run(a, i);
            let (run_b, next_j) = digit_run(b, j);
            match compare_digit_runs(run_a, run_b) {
                Ordering::Equal => {
                    i = next_i;
                    j = next_j;
                }
                other => return other,
            }
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Sorts a vector of strings in natural order.
pub fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort_by(|a, b| compare(a, b));
    items
}

fn digit_run(s: &[u8], from: usize) -> (&[u8], usize) {
    let mut end = from;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    (&s[from..end], end)
}

fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let trimmed_a = strip_leading_zeros(a);
    let trimmed_b = strip_leading_zeros(b);
    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        .then_with(|| a.len().cmp(&b.len()))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let mut start = 0;
    while start + 1 < s.len() && s[start] == b'0' {
        start += 1;
    }
    &s[start..]
}
