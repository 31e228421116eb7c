//! Species name slugs.
//!
//! PokeAPI identifies species by slug (`mr-mime`, `flabebe`). Players type
//! display names (`Mr. Mime`, `Flabébé`). [`normalize_species_name`] maps
//! the latter onto the former; [`pretty_name`] goes the other way for
//! search results.

/// Strip a Latin diacritic from an already-lowercased letter.
const fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' | 'ő' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ś' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Combining diacritical marks block.
const fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Turn a typed species name into a PokeAPI slug.
///
/// Trims, lowercases, folds Latin diacritics, drops apostrophes and dots,
/// drops anything outside `[a-z0-9 -]`, then joins whitespace runs with
/// `-`.
///
/// ```
/// use pokerun_species::normalize_species_name;
///
/// assert_eq!(normalize_species_name("Mr. Mime"), "mr-mime");
/// assert_eq!(normalize_species_name("Flabébé"), "flabebe");
/// assert_eq!(normalize_species_name("Farfetch’d"), "farfetchd");
/// ```
pub fn normalize_species_name(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_diacritic)
        .filter(|c| !matches!(c, '\'' | '’' | '.'))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    let mut in_space = false;
    for c in cleaned.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

/// Turn a slug back into a display name: `iron-hands` becomes
/// `Iron Hands`.
pub fn pretty_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn examples() {
        assert_eq!(normalize_species_name("  Pikachu "), "pikachu");
        assert_eq!(normalize_species_name("Mr. Mime"), "mr-mime");
        assert_eq!(normalize_species_name("Flabébé"), "flabebe");
        assert_eq!(normalize_species_name("Type: Null"), "type-null");
        assert_eq!(normalize_species_name("Tapu   Koko"), "tapu-koko");
        assert_eq!(normalize_species_name("Porygon-Z"), "porygon-z");
        assert_eq!(normalize_species_name(""), "");
    }

    #[test]
    fn combining_marks_are_dropped() {
        assert_eq!(normalize_species_name("Flabe\u{301}be\u{301}"), "flabebe");
    }

    #[test]
    fn pretty_names() {
        assert_eq!(pretty_name("mr-mime"), "Mr Mime");
        assert_eq!(pretty_name("iron-hands"), "Iron Hands");
        assert_eq!(pretty_name("pikachu"), "Pikachu");
    }

    proptest! {
        #[test]
        fn slug_alphabet_is_restricted(raw in "\\PC{0,30}") {
            let slug = normalize_species_name(&raw);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn normalizing_a_slug_is_a_no_op(raw in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,2}") {
            prop_assert_eq!(normalize_species_name(&raw), raw);
        }
    }
}
