//! Operand conversion
//!
//! Operands follow C `atoi`: optional sign, then leading decimal digits.
//! Scanning stops at the first non-digit, and a token without digits is 0.
//! The word format has no room for an error marker, so nothing here fails.

use stackvm_spec::Word;

/// Convert an operand token to a word
pub fn parse_operand(token: &str) -> Word {
    let bytes = token.trim_start_matches(is_c_space).as_bytes();

    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    // Accumulate like strtol (saturating at the i64 range), then narrow.
    let mut value: i64 = 0;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value as Word
}

fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}
