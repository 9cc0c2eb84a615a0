//! Version-aware name comparison used to order directory entries.
//!
//! Compares two names left to right over their encoded bytes. A maximal run
//! of decimal digits compares as an integer magnitude, so `img2` sorts before
//! `img10`. Runs with equal numeric value but different leading-zero padding
//! break the tie by raw run length, shorter first (`7` < `07` < `007`), which
//! keeps the ordering total and deterministic across platforms.

use std::cmp::Ordering;
use std::ffi::OsStr;

/// Compare two entry names with digit runs ordered numerically.
pub fn version_cmp(a: &OsStr, b: &OsStr) -> Ordering {
    let a = a.as_encoded_bytes();
    let b = b.as_encoded_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let end_a = digit_run_end(a, i);
            let end_b = digit_run_end(b, j);
            match compare_digit_runs(&a[i..end_a], &b[j..end_b]) {
                Ordering::Equal => {
                    i = end_a;
                    j = end_b;
                }
                decided => return decided,
            }
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                decided => return decided,
            }
        }
    }

    // One name is a prefix of the other; the shorter one orders first.
    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(s: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Compare two digit runs by numeric magnitude, then by raw length.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let sig_a = strip_leading_zeros(a);
    let sig_b = strip_leading_zeros(b);
    // More significant digits means a larger value; equal widths compare
    // digit-wise, which matches numeric order for equal-length runs.
    sig_a
        .len()
        .cmp(&sig_b.len())
        .then_with(|| sig_a.cmp(sig_b))
        .then_with(|| a.len().cmp(&b.len()))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let mut start = 0;
    while start + 1 < s.len() && s[start] == b'0' {
        start += 1;
    }
    &s[start..]
}
