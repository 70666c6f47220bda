//! Japanese script classification of titles
//!
//! Kana follows wanakana's `isKana`: hiragana `U+3041..U+3096` and
//! full-width katakana `U+30A1..U+30FC`. Other kana-block forms count as
//! Japanese script but never as pure kana.
//!
//! Only three outcomes matter to the detector: the title is entirely kana,
//! the title contains some Japanese script (kanji, or kana mixed with other
//! characters), or it contains none.
//!
//! Japanese punctuation and full-width Latin letters are not counted as
//! Japanese script: `"Hello！"` is not a Japanese title.

use serde::Serialize;

/// Script detected in an original title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleScript {
    /// Every character is hiragana or katakana
    Kana,
    /// Some Japanese script, but not pure kana (kanji, mixed text)
    OtherJapanese,
}

/// Hiragana letters `ぁ`..`ゖ`
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}')
}

/// Full-width katakana `ァ`..`ー`, including the middle dot and the
/// prolonged sound mark
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30FC}')
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Kana-block characters outside the kana letters: voicing and iteration
/// marks, katakana phonetic extensions, half-width katakana
///
/// Japanese script, but a title using them is not pure kana.
pub fn is_kana_variant(c: char) -> bool {
    matches!(
        c,
        '\u{3097}'..='\u{30A0}'
            | '\u{30FD}'..='\u{30FF}'
            | '\u{31F0}'..='\u{31FF}'
            | '\u{FF66}'..='\u{FF9F}'
    )
}

/// CJK ideographs used in Japanese, plus the iteration mark `々`
pub fn is_kanji(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' | '\u{3005}'
    )
}

pub fn is_japanese_script(c: char) -> bool {
    is_kana(c) || is_kana_variant(c) || is_kanji(c)
}

/// True when `text` is non-empty and every character is kana
pub fn is_kana_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_kana)
}

/// True when `text` contains at least one kana or kanji character
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_script)
}

/// Classify the script of a title
///
/// Returns `None` for empty or non-Japanese titles.
pub fn classify_title(title: &str) -> Option<TitleScript> {
    if is_kana_text(title) {
        Some(TitleScript::Kana)
    } else if contains_japanese(title) {
        Some(TitleScript::OtherJapanese)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_is_kana() {
        assert_eq!(classify_title("あいうえお"), Some(TitleScript::Kana));
    }

    #[test]
    fn test_katakana_is_kana() {
        assert_eq!(classify_title("アイウエオ"), Some(TitleScript::Kana));
        assert_eq!(classify_title("ナルト"), Some(TitleScript::Kana));
        // Prolonged sound mark
        assert_eq!(classify_title("ワンピース"), Some(TitleScript::Kana));
    }

    #[test]
    fn test_kana_variants_are_other_japanese() {
        // Half-width katakana
        assert!(!is_kana('ﾅ'));
        assert_eq!(classify_title("ﾅﾙﾄ"), Some(TitleScript::OtherJapanese));
        // Phonetic extension and iteration mark
        assert_eq!(classify_title("ㇰ"), Some(TitleScript::OtherJapanese));
        assert_eq!(classify_title("こゝろ"), Some(TitleScript::OtherJapanese));
    }

    #[test]
    fn test_kanji_is_other_japanese() {
        assert!(!is_kana_text("漢字"));
        assert_eq!(classify_title("漢字"), Some(TitleScript::OtherJapanese));
    }

    #[test]
    fn test_mixed_japanese_is_other_japanese() {
        assert_eq!(classify_title("進撃の巨人"), Some(TitleScript::OtherJapanese));
        assert_eq!(classify_title("Naruto ナルト"), Some(TitleScript::OtherJapanese));
        // A space breaks pure kana
        assert_eq!(classify_title("ナルト ナルト"), Some(TitleScript::OtherJapanese));
    }

    #[test]
    fn test_latin_is_not_japanese() {
        assert_eq!(classify_title("Attack on Titan"), None);
        assert_eq!(classify_title("Naruto"), None);
        assert_eq!(classify_title(""), None);
    }

    #[test]
    fn test_punctuation_and_fullwidth_latin_ignored() {
        assert_eq!(classify_title("Hello！"), None);
        assert_eq!(classify_title("「ＡＢＣ」"), None);
    }

    #[test]
    fn test_iteration_mark_counts_as_kanji() {
        assert!(is_kanji('々'));
        assert_eq!(classify_title("時々"), Some(TitleScript::OtherJapanese));
    }
}
