use phonenumber::{Mode, country};

/// Normalize arbitrary input into a canonical E.164 phone string.
/// `None` means "not a phone number" — malformed input never panics or
/// errors. Numbers without an international prefix are interpreted in
/// `default_region`.
pub fn normalize_phone(raw: &str, default_region: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let region = default_region.parse::<country::Id>().ok();
    let number = phonenumber::parse(region, trimmed).ok()?;
    if !phonenumber::is_valid(&number) {
        return None;
    }

    Some(number.format().mode(Mode::E164).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_format_resolves_via_default_region() {
        assert_eq!(
            normalize_phone("(415) 555-2671", "US").as_deref(),
            Some("+14155552671")
        );
    }

    #[test]
    fn international_prefix_overrides_default_region() {
        assert_eq!(
            normalize_phone("+44 20 7946 0958", "US").as_deref(),
            Some("+442079460958")
        );
    }

    #[test]
    fn garbage_is_not_a_phone_number() {
        assert_eq!(normalize_phone("not a phone", "US"), None);
        assert_eq!(normalize_phone("", "US"), None);
        assert_eq!(normalize_phone("   ", "US"), None);
    }

    #[test]
    fn unknown_default_region_still_accepts_international_input() {
        assert_eq!(
            normalize_phone("+14155552671", "XX").as_deref(),
            Some("+14155552671")
        );
    }
}
