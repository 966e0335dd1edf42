//! # Digit Extraction and Modulo-11 Check Digits
//!
//! Shared machinery for the numeric documents. A document is described by a
//! [`CheckDigitScheme`]: its digit count, the two weight tables, and the
//! punctuation inserted by its display form. CPF and CNPJ differ only in
//! their scheme.

/// Weighted modulo-11 layout of a numeric document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDigitScheme {
    /// Total digit count, including the two check digits.
    pub len: usize,
    /// Weights applied to the body to compute the first check digit.
    pub first_weights: &'static [u32],
    /// Weights applied to the body plus first check digit.
    pub second_weights: &'static [u32],
    /// `(position, separator)` pairs, positions in the zero-padded string.
    pub separators: &'static [(usize, char)],
}

impl CheckDigitScheme {
    /// Zero-pad `value` to the scheme's length. Longer values are kept whole.
    pub fn pad(&self, value: u64) -> String {
        format!("{value:0width$}", width = self.len)
    }

    /// Compute the two check digits for the body of `digits`.
    ///
    /// Returns `None` when `digits` is shorter than the body or the body
    /// holds anything but ASCII digits.
    pub fn check_digits(&self, digits: &[u8]) -> Option<[u8; 2]> {
        let body = digits.get(..self.first_weights.len())?;
        if !body.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let first = mod11_digit(weighted_sum(body, self.first_weights));

        let mut extended = body.to_vec();
        extended.push(b'0' + first);
        let second = mod11_digit(weighted_sum(&extended, self.second_weights));

        Some([first, second])
    }

    /// Whether `value` holds exactly `len` digits (ignoring every other
    /// character) and its last two match the computed check digits.
    pub fn verify(&self, value: &str) -> bool {
        let digits = extract_digits(value);
        if digits.len() != self.len {
            return false;
        }
        let bytes = digits.as_bytes();
        match self.check_digits(bytes) {
            Some([first, second]) => {
                bytes[self.len - 2] == b'0' + first && bytes[self.len - 1] == b'0' + second
            }
            None => false,
        }
    }

    /// Insert the scheme's separators into a padded digit string.
    pub fn format(&self, padded: &str) -> String {
        let mut out = String::with_capacity(padded.len() + self.separators.len());
        for (i, c) in padded.chars().enumerate() {
            if let Some((_, sep)) = self.separators.iter().find(|(pos, _)| *pos == i) {
                out.push(*sep);
            }
            out.push(c);
        }
        out
    }
}

/// Collect every ASCII decimal digit of `value`, in order.
pub fn extract_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(d - b'0') * w)
        .sum()
}

/// Remainders below 2 map to 0, everything else to `11 - rest`.
fn mod11_digit(sum: u32) -> u8 {
    let rest = (sum % 11) as u8;
    if rest < 2 {
        0
    } else {
        11 - rest
    }
}
