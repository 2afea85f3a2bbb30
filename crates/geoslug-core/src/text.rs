// crates/geoslug-core/src/text.rs

//! Text utilities: the fixed Cyrillic transliteration table behind URL slugs,
//! plus `deunicode`-based folding for fuzzy name matching.
//!
//! The two serve different purposes and must not be mixed up. [`slugify`]
//! follows the exact per-character table the site URLs are built from, so its
//! output is stable across releases. [`fold_key`] is a best-effort ASCII
//! folding used only to *compare* human input against names.

/// Latin segment for a single Cyrillic letter.
///
/// One shared table covers the Ukrainian and Russian alphabets, following the
/// Ukrainian national romanization (so `г` is `h` and `и` is `y` regardless of
/// which language the word comes from). Soft and hard signs vanish.
///
/// Returns `None` for characters outside the table; [`slugify`] passes those
/// through unchanged.
fn translit(ch: char) -> Option<&'static str> {
    Some(match ch {
        'а' | 'А' => "a",
        'б' | 'Б' => "b",
        'в' | 'В' => "v",
        'г' | 'Г' => "h",
        'ґ' | 'Ґ' => "g",
        'д' | 'Д' => "d",
        'е' | 'Е' => "e",
        'є' | 'Є' => "ie",
        'ж' | 'Ж' => "zh",
        'з' | 'З' => "z",
        'и' | 'И' => "y",
        'і' | 'І' => "i",
        'ї' | 'Ї' => "i",
        'й' | 'Й' => "i",
        'к' | 'К' => "k",
        'л' | 'Л' => "l",
        'м' | 'М' => "m",
        'н' | 'Н' => "n",
        'о' | 'О' => "o",
        'п' | 'П' => "p",
        'р' | 'Р' => "r",
        'с' | 'С' => "s",
        'т' | 'Т' => "t",
        'у' | 'У' => "u",
        'ф' | 'Ф' => "f",
        'х' | 'Х' => "kh",
        'ц' | 'Ц' => "ts",
        'ч' | 'Ч' => "ch",
        'ш' | 'Ш' => "sh",
        'щ' | 'Щ' => "shch",
        'ь' | 'Ь' => "",
        'ю' | 'Ю' => "iu",
        'я' | 'Я' => "ia",
        'ъ' | 'Ъ' => "",
        'ы' | 'Ы' => "y",
        'э' | 'Э' => "e",
        'ё' | 'Ё' => "e",
        _ => return None,
    })
}

/// Converts a display name into a URL-safe slug.
///
/// The pipeline: whitespace runs become single hyphens, apostrophes are
/// dropped, each character goes through the transliteration table (unmapped
/// characters pass through), the result is lowercased, everything outside
/// `[a-z0-9-]` is stripped, repeated hyphens collapse to one, and leading or
/// trailing hyphens are trimmed.
///
/// Total over all inputs: never panics, may return an empty string for
/// degenerate input. Idempotent, since slug output maps to itself.
///
/// # Examples
///
/// ```rust
/// use geoslug_core::slugify;
///
/// assert_eq!(slugify("Запоріжжя"), "zaporizhzhia");
/// assert_eq!(slugify("Кривий Ріг"), "kryvyi-rih");
/// assert_eq!(slugify("Слов'янськ"), "sloviansk");
/// ```
pub fn slugify(input: &str) -> String {
    // Pass 1: whitespace runs -> "-", apostrophes removed.
    let mut replaced = String::with_capacity(input.len());
    let mut in_whitespace = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if matches!(ch, '\'' | '’' | 'ʼ') {
            continue;
        }
        if in_whitespace && !replaced.is_empty() {
            replaced.push('-');
        }
        in_whitespace = false;
        replaced.push(ch);
    }

    // Pass 2: per-character transliteration, lowercasing the pass-through.
    let mut mapped = String::with_capacity(replaced.len() * 2);
    for ch in replaced.chars() {
        match translit(ch) {
            Some(segment) => mapped.push_str(segment),
            None => mapped.extend(ch.to_lowercase()),
        }
    }

    // Pass 3: strip to [a-z0-9-] and collapse hyphen runs as we go.
    let mut slug = String::with_capacity(mapped.len());
    for ch in mapped.chars() {
        match ch {
            'a'..='z' | '0'..='9' => slug.push(ch),
            '-' => {
                if !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            }
            _ => {}
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Дніпро` -> `Dnipro`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII. Note that `deunicode` follows its
/// own tables, not the slug table above, so folded keys are for matching
/// only and must never end up inside a URL.
///
/// # Examples
///
/// ```rust
/// use geoslug_core::fold_key;
///
/// assert_eq!(fold_key("Дніпро"), "dnipro");
/// assert_eq!(fold_key("POLTAVA"), "poltava");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use geoslug_core::equals_folded;
///
/// assert!(equals_folded("Дніпро", "dnipro"));
/// assert!(equals_folded("ПОЛТАВА", "poltava"));
/// assert!(!equals_folded("Полтава", "Черкаси"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
