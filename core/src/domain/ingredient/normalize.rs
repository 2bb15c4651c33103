//! Ingredient name canonicalization.
//!
//! `normalize_ingredient_name` is the dedupe contract for the ingredients
//! table: two spellings that mean the same ingredient must normalize to the
//! same key, and the function must be idempotent. The site's content is
//! predominantly Arabic with some Latin-script names, so folding covers
//! Arabic orthographic variants plus the common Latin accents.

/// Arabic combining marks that carry no lexical meaning for dedupe:
/// tashkeel (fathatan..sukun) and superscript alef.
fn is_arabic_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

/// Folds one character to its dedupe form, or `None` to drop it.
fn fold_char(c: char) -> Option<char> {
    if is_arabic_diacritic(c) || c == '\u{0640}' {
        // Tatweel (kashida) is purely typographic.
        return None;
    }

    let folded = match c {
        // Alef variants.
        'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
        // Taa marbuta is routinely typed as haa.
        'ة' => 'ه',
        // Alef maqsura vs yaa.
        'ى' => 'ي',
        // Common Latin accents seen in imported recipe names.
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    };

    Some(folded)
}

/// Canonical dedupe key for an ingredient display name: trim, collapse
/// internal whitespace to single spaces, Unicode lowercase, then fold
/// Arabic variants/diacritics and Latin accents. Idempotent.
pub fn normalize_ingredient_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for c in name.trim().chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        for lower in c.to_lowercase() {
            if let Some(folded) = fold_char(lower) {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(folded);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::normalize_ingredient_name;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(
            normalize_ingredient_name("  olive   oil "),
            "olive oil"
        );
    }

    #[test]
    fn lowercases_latin_and_folds_accents() {
        assert_eq!(normalize_ingredient_name("Crème Fraîche"), "creme fraiche");
    }

    #[test]
    fn folds_arabic_variants_to_one_key() {
        // Alef-with-hamza vs bare alef, with and without tashkeel.
        assert_eq!(
            normalize_ingredient_name("أرز"),
            normalize_ingredient_name("ارز")
        );
        assert_eq!(
            normalize_ingredient_name("بَصَل"),
            normalize_ingredient_name("بصل")
        );
        // Taa marbuta vs haa.
        assert_eq!(
            normalize_ingredient_name("طحينة"),
            normalize_ingredient_name("طحينه")
        );
    }

    #[test]
    fn drops_tatweel() {
        assert_eq!(
            normalize_ingredient_name("سـكـر"),
            normalize_ingredient_name("سكر")
        );
    }

    #[test]
    fn is_idempotent() {
        for raw in ["  Olive   Oil ", "بَصَلٌ أخضر", "Crème  Fraîche", ""] {
            let once = normalize_ingredient_name(raw);
            assert_eq!(normalize_ingredient_name(&once), once);
        }
    }
}
