/// Builds a URL-safe slug from a display name.
///
/// Cyrillic letters are transliterated, everything that is not an ASCII
/// letter or digit collapses into single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars().flat_map(|c| c.to_lowercase()) {
        let piece = match ch {
            'a'..='z' | '0'..='9' => None,
            _ => Some(transliterate(ch)),
        };

        match piece {
            None => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            }
            Some(Some(latin)) => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push_str(latin);
            }
            Some(None) => pending_hyphen = true,
        }
    }

    slug
}

fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn ascii_names_are_lowercased_and_hyphenated() {
        assert_eq!(slugify("Cement M500  (50 kg)"), "cement-m500-50-kg");
    }

    #[test]
    fn cyrillic_names_are_transliterated() {
        assert_eq!(slugify("Цемент М500"), "tsement-m500");
        assert_eq!(slugify("Летняя распродажа!"), "letnyaya-rasprodazha");
    }

    #[test]
    fn leading_and_trailing_separators_are_dropped() {
        assert_eq!(slugify("  --Paint--  "), "paint");
        assert_eq!(slugify("!!!"), "");
    }
}
