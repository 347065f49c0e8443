use regex::Regex;

lazy_static::lazy_static! {
    pub static ref PRODUCT_ID_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
    pub static ref TABLE_NUMBER_REGEX: Regex = Regex::new(r"^[A-Z][0-9]{1,2}$").unwrap();
}

/// Exact, case-sensitive membership in one of the fixed option sets.
pub fn is_known_option(options: &[&str], value: &str) -> bool {
    options.iter().any(|option| *option == value)
}

pub fn is_valid_table_number(number: &str) -> bool {
    TABLE_NUMBER_REGEX.is_match(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ids() {
        assert!(PRODUCT_ID_REGEX.is_match("serenity-blend"));
        assert!(PRODUCT_ID_REGEX.is_match("ai-1"));
        assert!(!PRODUCT_ID_REGEX.is_match("Serenity Blend"));
        assert!(!PRODUCT_ID_REGEX.is_match("-blend"));
    }

    #[test]
    fn test_table_numbers() {
        assert!(is_valid_table_number("A1"));
        assert!(is_valid_table_number("D12"));
        assert!(!is_valid_table_number("a1"));
        assert!(!is_valid_table_number("A"));
    }
}
