//! Slugification: turning a human-readable token into a URI-safe identifier.
//!
//! The builder only needs the [`Slugifier`] capability; [`AsciiSlugifier`] is
//! the default implementation used by the CLI.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Produces a URI-safe token from an arbitrary string.
///
/// Implementations must be deterministic: the same input always yields the
/// same slug, within and across runs. Minted terms rely on it.
pub trait Slugifier {
    /// Normalize `text` into a slug.
    fn slugify(&self, text: &str) -> String;
}

impl<F> Slugifier for F
where
    F: Fn(&str) -> String,
{
    fn slugify(&self, text: &str) -> String {
        self(text)
    }
}

/// Lower-case ASCII slugs joined by `-`.
///
/// Text is NFKD-decomposed with combining marks dropped (`ä` → `a`), then
/// every remaining non-ASCII character is transliterated (`ß` → `ss`,
/// `Музыка` → `Muzyka`). Commas between digits vanish; every other run of
/// non-alphanumeric characters, apostrophes included, becomes a single `-`.
/// Input with no alphanumeric content, including the empty string, slugifies
/// to `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiSlugifier;

impl Slugifier for AsciiSlugifier {
    fn slugify(&self, text: &str) -> String {
        slugify(text)
    }
}

/// Slugify with the default [`AsciiSlugifier`] rules.
pub fn slugify(text: &str) -> String {
    let folded = fold_to_ascii(text).to_ascii_lowercase();
    let chars: Vec<char> = folded.chars().collect();

    let mut slug = String::with_capacity(chars.len());
    let mut pending_dash = false;
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if !is_thousands_separator(&chars, i) {
            pending_dash = true;
        }
    }
    slug
}

/// "1,000" -> "1000".
fn is_thousands_separator(chars: &[char], i: usize) -> bool {
    chars[i] == ',' && i > 0 && is_digit_at(chars, i - 1) && is_digit_at(chars, i + 1)
}

fn is_digit_at(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(|c| c.is_ascii_digit())
}

/// NFKD-decompose, drop combining marks, transliterate the rest to ASCII.
fn fold_to_ascii(text: &str) -> String {
    let stripped: String = text.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    deunicode::deunicode(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("music"), "music");
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slugify("special!@#chars"), "special-chars");
    }

    #[test]
    fn slugify_folds_diacritics() {
        assert_eq!(slugify("C'est déjà l'été."), "c-est-deja-l-ete");
        assert_eq!(slugify("kansanmusiikki ja tanssi"), "kansanmusiikki-ja-tanssi");
        assert_eq!(slugify("elokuvat ja näytelmät"), "elokuvat-ja-naytelmat");
        assert_eq!(slugify("åland"), "aland");
        assert_eq!(slugify("straße"), "strasse");
        assert_eq!(slugify("øl"), "ol");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("rock & roll"), "rock-roll");
        assert_eq!(slugify("rock-roll"), "rock-roll");
        assert_eq!(slugify("--a--b--"), "a-b");
    }

    #[test]
    fn slugify_apostrophes_and_numbers() {
        assert_eq!(slugify("don't stop"), "don-t-stop");
        assert_eq!(slugify("rock\u{2019}n\u{2019}roll"), "rock-n-roll");
        assert_eq!(slugify("1,000 songs"), "1000-songs");
        assert_eq!(slugify("a, b"), "a-b");
    }

    #[test]
    fn slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("&/?"), "");
    }

    #[test]
    fn slugify_transliterates_other_scripts() {
        assert_eq!(slugify("Музыка"), "muzyka");
        assert_eq!(slugify("музыка"), "muzyka");

        let greek = slugify("Ελληνικά");
        let cjk = slugify("音楽");
        for slug in [&greek, &cjk] {
            assert!(!slug.is_empty());
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
        }
        assert_ne!(greek, cjk);
    }

    #[test]
    fn slugify_is_deterministic() {
        let input = "Kuvataide & Muotoilu";
        assert_eq!(slugify(input), slugify(input));
    }

    #[test]
    fn closures_are_slugifiers() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(upper.slugify("abc"), "ABC");
        assert_eq!(AsciiSlugifier.slugify("A B"), "a-b");
    }
}
