//! Country-name to ISO-code resolution for the country filter.

/// Country selected when the user has not picked one. A filter value equal to
/// this code means "no country filter".
pub const DEFAULT_COUNTRY: &str = "dk";

/// English country names mapped to lowercase ISO 3166-1 alpha-2 codes.
/// The table covers the markets the rank tracker is sold in; anything else
/// falls through to the raw value.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("australia", "au"),
    ("austria", "at"),
    ("belgium", "be"),
    ("brazil", "br"),
    ("canada", "ca"),
    ("denmark", "dk"),
    ("finland", "fi"),
    ("france", "fr"),
    ("germany", "de"),
    ("greenland", "gl"),
    ("iceland", "is"),
    ("india", "in"),
    ("ireland", "ie"),
    ("italy", "it"),
    ("japan", "jp"),
    ("mexico", "mx"),
    ("netherlands", "nl"),
    ("new zealand", "nz"),
    ("norway", "no"),
    ("poland", "pl"),
    ("portugal", "pt"),
    ("spain", "es"),
    ("sweden", "se"),
    ("switzerland", "ch"),
    ("united kingdom", "gb"),
    ("united states", "us"),
];

/// Resolve a country name to its ISO code, falling back to the input itself
/// (lowercased) when the name is unknown — the filter value may already be a
/// code.
pub fn resolve_country_code(name: &str) -> String {
    let needle = name.trim().to_lowercase();
    COUNTRY_CODES
        .iter()
        .find(|(country, _)| *country == needle)
        .map(|(_, code)| code.to_string())
        .unwrap_or(needle)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        assert_eq!(resolve_country_code("Denmark"), "dk");
        assert_eq!(resolve_country_code("united states"), "us");
    }

    #[test]
    fn falls_back_to_raw_value() {
        assert_eq!(resolve_country_code("Atlantis"), "atlantis");
        assert_eq!(resolve_country_code("SE"), "se");
    }
}
