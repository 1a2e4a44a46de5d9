//! Eastern Arabic and Persian digit conversion.

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_ZERO: u32 = 0x0660;

fn shift_digits(text: &str, zero: u32) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(zero + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Replace ASCII digits with Persian digits (۰-۹).
pub fn to_persian_digits(text: &str) -> String {
    shift_digits(text, PERSIAN_ZERO)
}

/// Replace ASCII digits with Arabic-Indic digits (٠-٩).
pub fn to_arabic_digits(text: &str) -> String {
    shift_digits(text, ARABIC_ZERO)
}

/// Replace Persian and Arabic-Indic digits with ASCII digits.
pub fn from_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            let zero = if (PERSIAN_ZERO..PERSIAN_ZERO + 10).contains(&code) {
                PERSIAN_ZERO
            } else if (ARABIC_ZERO..ARABIC_ZERO + 10).contains(&code) {
                ARABIC_ZERO
            } else {
                return c;
            };
            char::from_digit(code - zero, 10).unwrap_or(c)
        })
        .collect()
}
