//! Pure display formatting for the result card.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Upper-case the first letter of a catalog name for display.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Format a catalog identifier as `#NNN`, zero-padded to three digits.
/// Identifiers past 999 print in full; nothing is truncated.
pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Convert a tenths-unit measurement to a display value: `7` is `"0.7"`,
/// `70` is `"7"`, `105` is `"10.5"`. Whole results drop the fraction, the
/// same way a floating division would print.
pub fn tenths_to_units(raw: u32) -> String {
    let whole = raw / 10;
    let frac = raw % 10;
    if frac == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{frac}")
    }
}
