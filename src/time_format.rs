const SECS_PER_MINUTE: u64 = 60;

/// Zero-pad a clock component to two digits. Wider values are left as-is.
pub fn two_digits(n: u64) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Render a second count as `MM:SS`
pub fn format_clock(total_secs: u64) -> String {
    let minutes = total_secs / SECS_PER_MINUTE;
    let seconds = total_secs % SECS_PER_MINUTE;

    format!("{}:{}", two_digits(minutes), two_digits(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_format_clock_mixed_components() {
        assert_eq!(format_clock(70), "01:10");
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn test_format_clock_wide_minutes() {
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_two_digits_threshold() {
        assert_eq!(two_digits(0), "00");
        assert_eq!(two_digits(9), "09");
        assert_eq!(two_digits(10), "10");
        assert_eq!(two_digits(11), "11");
        assert_eq!(two_digits(59), "59");
    }
}
