//! # Checksum Kernels
//!
//! The reducers every document family is built from.
//!
//! ## Weighted mod-11
//!
//! Multiply each digit by its weight, sum, take the remainder mod 11.
//! The Brazilian convention maps remainders 0 and 1 to check digit `0` and
//! everything else to `11 - r`. Weight vectors shorter than the digit
//! sequence are cycled; most callers pass an exact-length vector.
//!
//! ## mod-97
//!
//! The digit string is read as one big integer and reduced incrementally
//! (`r = (r * 10 + d) % 97`), so arbitrarily long inputs never overflow.
//! The check value is `(98 - r) % 97`.
//!
//! ## Luhn
//!
//! Payment-card scheme: starting from the rightmost digit, every second
//! digit is doubled (subtracting 9 when the product exceeds 9). A number is
//! valid when the total is a multiple of 10.

/// Sum of `digit * weight`, cycling `weights` when shorter than `digits`.
///
/// An empty weight vector yields 0.
pub fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights.iter().cycle())
        .map(|(&d, &w)| u32::from(d) * w)
        .sum()
}

/// Remainder of the weighted sum mod 11.
pub fn mod11_remainder(digits: &[u8], weights: &[u32]) -> u32 {
    weighted_sum(digits, weights) % 11
}

/// Weighted mod-11 check digit: `0` when the remainder is below 2, else `11 - r`.
pub fn mod11(digits: &[u8], weights: &[u32]) -> u8 {
    let r = mod11_remainder(digits, weights);
    if r < 2 {
        0
    } else {
        (11 - r) as u8
    }
}

/// Remainder of the digit string, read as a decimal integer, mod 97.
pub fn mod97(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |r, &d| (r * 10 + u32::from(d)) % 97)
}

/// Two-digit mod-97 check value in `0..=96`.
pub fn mod97_check(digits: &[u8]) -> u8 {
    ((98 - mod97(digits)) % 97) as u8
}

/// Luhn total of a complete number (check digit included as the rightmost digit).
pub fn luhn_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

/// Check digit that makes `payload` followed by it pass [`luhn_valid`].
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    let mut padded = Vec::with_capacity(payload.len() + 1);
    padded.extend_from_slice(payload);
    padded.push(0);
    ((10 - luhn_sum(&padded) % 10) % 10) as u8
}

/// Whether a complete number satisfies the Luhn check.
///
/// Empty input is not valid.
pub fn luhn_valid(digits: &[u8]) -> bool {
    !digits.is_empty() && luhn_sum(digits) % 10 == 0
}

/// Whether every element is identical (`"00000000000"`, `"1111"`...).
///
/// Empty and single-element slices count as repeated.
pub fn is_repeated<T: PartialEq>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] == w[1])
}
