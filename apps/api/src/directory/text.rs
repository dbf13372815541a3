//! Shared text canonicalization. Both the row normalizer and the cities-list
//! endpoint go through `title_case` so the two surfaces can never drift apart.

/// Capitalizes the first letter of each whitespace-separated token and
/// lowercases the rest, rejoining with single spaces.
///
/// Title-casing is a fixed point: applying it twice yields the same string.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonicalizes an upstream city list: trim + title-case each name, drop
/// blanks, dedupe case-insensitively (first spelling wins), sort ascending.
pub fn canonical_city_list(raw: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut cities: Vec<String> = raw
        .into_iter()
        .map(|c| title_case(c.trim()))
        .filter(|c| !c.is_empty())
        .filter(|c| seen.insert(c.to_lowercase()))
        .collect();
    cities.sort();
    cities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("chicago"), "Chicago");
        assert_eq!(title_case("NEW YORK"), "New York");
        assert_eq!(title_case("saN fRaNcIsCo"), "San Francisco");
    }

    #[test]
    fn test_title_case_collapses_whitespace() {
        assert_eq!(title_case("  new\t york  "), "New York");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }

    #[test]
    fn test_title_case_is_fixed_point() {
        let once = title_case("lake forest park");
        assert_eq!(title_case(&once), once);
    }

    #[test]
    fn test_canonical_city_list_dedupes_case_insensitively() {
        let raw = vec![
            "austin".to_string(),
            "AUSTIN".to_string(),
            " Austin ".to_string(),
            "Dallas".to_string(),
        ];
        assert_eq!(canonical_city_list(raw), vec!["Austin", "Dallas"]);
    }

    #[test]
    fn test_canonical_city_list_drops_blanks_and_sorts() {
        let raw = vec![
            "houston".to_string(),
            "".to_string(),
            "  ".to_string(),
            "el paso".to_string(),
        ];
        assert_eq!(canonical_city_list(raw), vec!["El Paso", "Houston"]);
    }
}
