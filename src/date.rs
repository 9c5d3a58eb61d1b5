const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Splits `YYYY-MM-DD`, ignoring any time part after it.
pub fn parse_date(value: &str) -> Option<(i32, u32, u32)> {
    let date = value.trim().get(..10)?;
    let mut parts = date.split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// `2025-07-26` -> `July 26, 2025`. Unparseable input is returned as is.
pub fn format_long_date(value: &str) -> String {
    match parse_date(value) {
        Some((year, month, day)) => format!("{} {day}, {year}", MONTHS[(month - 1) as usize]),
        None => value.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    2025
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_long_dates() {
        assert_eq!(format_long_date("2025-07-26"), "July 26, 2025");
        assert_eq!(format_long_date("2025-01-05T18:30:00.000Z"), "January 5, 2025");
    }

    #[test]
    fn leaves_unknown_formats_alone() {
        assert_eq!(format_long_date("next Friday"), "next Friday");
        assert_eq!(format_long_date("2025-13-01"), "2025-13-01");
        assert_eq!(parse_date("2025-7-1"), None);
    }
}
