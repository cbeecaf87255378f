/// Formats a byte count with dot thousands separators and a unit suffix.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_size(1234567), "1.234.567 B");
/// ```
pub fn format_size(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{} B", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(999), "999 B");
        assert_eq!(format_size(1000), "1.000 B");
        assert_eq!(format_size(1234567), "1.234.567 B");
    }
}
