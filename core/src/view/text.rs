//! Text operations on views of `u8` or `char`.
//!
//! Every `nocase_` method is the corresponding [`View`] `_by` method with
//! ASCII case folding as the transform. Quote-aware scanning treats
//! `"..."` spans as opaque; inside a span a backslash escapes the next
//! quote.

use core::cmp::Ordering;

use super::{ArrayConstRef, View};

/// A character unit that text views operate on.
pub trait TextChar: Copy + Eq {
    const QUOTE: Self;
    const ESCAPE: Self;

    /// ASCII lowercase.
    fn fold_case(self) -> Self;

    fn is_whitespace(self) -> bool;
}

impl TextChar for u8 {
    const QUOTE: Self = b'"';
    const ESCAPE: Self = b'\\';

    #[inline(always)]
    fn fold_case(self) -> Self {
        self.to_ascii_lowercase()
    }

    #[inline(always)]
    fn is_whitespace(self) -> bool {
        self.is_ascii_whitespace()
    }
}

impl TextChar for char {
    const QUOTE: Self = '"';
    const ESCAPE: Self = '\\';

    #[inline(always)]
    fn fold_case(self) -> Self {
        self.to_ascii_lowercase()
    }

    #[inline(always)]
    fn is_whitespace(self) -> bool {
        char::is_whitespace(self)
    }
}

#[inline(always)]
fn fold<C: TextChar>(c: &C) -> C {
    c.fold_case()
}

/// Case-insensitive and quote-aware operations on text views.
pub trait TextView<C: TextChar>: View<C> {
    fn nocase_is_equal_to(&self, other: &[C]) -> bool {
        self.is_equal_to_by(other, fold)
    }

    fn nocase_compare(&self, other: &[C]) -> Ordering
    where
        C: Ord,
    {
        self.compare_by(other, fold)
    }

    fn nocase_index_of_first(&self, c: C) -> Option<usize> {
        self.index_of_first_by(&c, fold)
    }

    fn nocase_index_of_last(&self, c: C) -> Option<usize> {
        self.index_of_last_by(&c, fold)
    }

    fn nocase_index_of_first_n(&self, needle: &[C]) -> Option<usize> {
        self.index_of_first_n_by(needle, fold)
    }

    fn nocase_index_of_last_n(&self, needle: &[C]) -> Option<usize> {
        self.index_of_last_n_by(needle, fold)
    }

    fn nocase_index_of_first_of(&self, set: &[C]) -> Option<usize> {
        self.index_of_first_of_by(set, fold)
    }

    fn nocase_prioritized_index_of_first_of(&self, set: &[C]) -> Option<usize> {
        self.prioritized_index_of_first_of_by(set, fold)
    }

    fn nocase_index_of_first_not_of(&self, set: &[C]) -> Option<usize> {
        self.index_of_first_not_of_by(set, fold)
    }

    fn nocase_index_of_last_of(&self, set: &[C]) -> Option<usize> {
        self.index_of_last_of_by(set, fold)
    }

    fn nocase_index_of_last_not_of(&self, set: &[C]) -> Option<usize> {
        self.index_of_last_not_of_by(set, fold)
    }

    fn nocase_count(&self, c: C) -> usize {
        self.count_by(&c, fold)
    }

    /// `needle` must not be empty.
    fn nocase_count_n(&self, needle: &[C]) -> usize {
        self.count_n_by(needle, fold)
    }

    fn nocase_contains(&self, c: C) -> bool {
        self.contains_by(&c, fold)
    }

    fn nocase_contains_n(&self, needle: &[C]) -> bool {
        self.contains_n_by(needle, fold)
    }

    fn nocase_begins_with(&self, c: C) -> bool {
        self.begins_with_by(&c, fold)
    }

    fn nocase_begins_with_n(&self, prefix: &[C]) -> bool {
        self.begins_with_n_by(prefix, fold)
    }

    fn nocase_ends_with(&self, c: C) -> bool {
        self.ends_with_by(&c, fold)
    }

    fn nocase_ends_with_n(&self, suffix: &[C]) -> bool {
        self.ends_with_n_by(suffix, fold)
    }

    fn nocase_trim_left(&self, set: &[C]) -> ArrayConstRef<'_, C> {
        self.trim_left_if(|c| set.iter().any(|s| s.fold_case() == c.fold_case()))
    }

    fn nocase_trim_right(&self, set: &[C]) -> ArrayConstRef<'_, C> {
        self.trim_right_if(|c| set.iter().any(|s| s.fold_case() == c.fold_case()))
    }

    fn nocase_trim(&self, set: &[C]) -> ArrayConstRef<'_, C> {
        self.trim_if(|c| set.iter().any(|s| s.fold_case() == c.fold_case()))
    }

    fn trim_whitespace_left(&self) -> ArrayConstRef<'_, C> {
        self.trim_left_if(|c| c.is_whitespace())
    }

    fn trim_whitespace_right(&self) -> ArrayConstRef<'_, C> {
        self.trim_right_if(|c| c.is_whitespace())
    }

    fn trim_whitespace(&self) -> ArrayConstRef<'_, C> {
        self.trim_if(|c| c.is_whitespace())
    }

    /// First `c` outside any double-quoted span.
    ///
    /// ```
    /// use ali_core::{ArrayConstRef, TextView};
    ///
    /// let text = ArrayConstRef::from(r#"a="x,\"y" , b"#);
    /// assert_eq!(text.index_of_first_unquoted(b','), Some(10));
    /// ```
    fn index_of_first_unquoted(&self, c: C) -> Option<usize> {
        first_unquoted(self.as_slice(), |x| x == c)
    }

    fn nocase_index_of_first_unquoted(&self, c: C) -> Option<usize> {
        let c = c.fold_case();
        first_unquoted(self.as_slice(), |x| x.fold_case() == c)
    }
}

impl<C: TextChar, V: View<C> + ?Sized> TextView<C> for V {}

fn first_unquoted<C: TextChar>(text: &[C], mut matches: impl FnMut(C) -> bool) -> Option<usize> {
    let mut quoted = false;
    for (i, &x) in text.iter().enumerate() {
        if !quoted && matches(x) {
            return Some(i);
        }
        // Inside a span `i > 0`, so the escape lookback is in bounds.
        quoted ^= x == C::QUOTE && !(quoted && text[i - 1] == C::ESCAPE);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> ArrayConstRef<'_, u8> {
        ArrayConstRef::from(s)
    }

    #[test]
    fn test_nocase_equality_and_order() {
        assert!(text("Content-Length").nocase_is_equal_to(b"content-length"));
        assert!(!text("Content-Length").is_equal_to(b"content-length"));
        assert_eq!(text("abc").nocase_compare(b"ABD"), Ordering::Less);
        assert_eq!(text("ABC").compare(b"abc"), Ordering::Less);
    }

    #[test]
    fn test_nocase_search() {
        let t = text("Via: SIP/2.0/UDP host;BRANCH=z9hG4bK");
        assert_eq!(t.nocase_index_of_first_n(b"branch"), Some(22));
        assert_eq!(t.index_of_first_n(b"branch"), None);
        assert_eq!(t.nocase_count(b's'), 2);
        assert!(t.nocase_begins_with_n(b"via:"));
        assert!(t.nocase_ends_with(b'K'));
        assert_eq!(t.nocase_index_of_last(b'h'), Some(31));
    }

    #[test]
    fn test_trim_whitespace() {
        let t = text(" \t value \r\n");
        assert_eq!(t.trim_whitespace().as_slice(), b"value");
        assert_eq!(t.trim_whitespace_left().as_slice(), b"value \r\n");
        assert_eq!(t.trim_whitespace_right().as_slice(), b" \t value");
        assert!(text("   ").trim_whitespace().is_empty());
    }

    #[test]
    fn test_nocase_trim_set() {
        let t = text("xXabcXx");
        assert_eq!(t.nocase_trim(b"x").as_slice(), b"abc");
        assert_eq!(t.trim(b"x").as_slice(), b"XabcX");
    }

    #[test]
    fn test_unquoted_skips_quoted_spans() {
        let t = text(r#""a;b";c"#);
        assert_eq!(t.index_of_first_unquoted(b';'), Some(5));
        assert_eq!(t.index_of_first(&b';'), Some(2));
        assert_eq!(text(r#""a;b"#).index_of_first_unquoted(b';'), None);
        assert_eq!(text(r#"Q"q"q"#).nocase_index_of_first_unquoted(b'q'), Some(0));
        assert_eq!(text(r#""q"Q"#).nocase_index_of_first_unquoted(b'q'), Some(3));
    }

    #[test]
    fn test_unquoted_finds_quote_characters() {
        assert_eq!(text(r#"a"b"#).index_of_first_unquoted(b'"'), Some(1));
        assert_eq!(text(r#""x""#).index_of_first_unquoted(b'"'), Some(0));
        // A backslash only escapes inside a span.
        assert_eq!(text(r#"x"y"#).index_of_first_unquoted(b'"'), Some(2));
        assert_eq!(text(r#""a";b";c"#).index_of_first_unquoted(b';'), Some(7));
        assert_eq!(text(r#"A"a"#).nocase_index_of_first_unquoted(b'"'), Some(1));
        assert_eq!(text(r#""A"a"#).nocase_index_of_first_unquoted(b'a'), Some(3));
    }

    #[test]
    fn test_nocase_prioritized_index_of_first_of() {
        // Both sides rank their first common option second: ours wins.
        assert_eq!(text("abc").nocase_prioritized_index_of_first_of(b"CB"), Some(1));
        assert_eq!(text("xAb").nocase_prioritized_index_of_first_of(b"BYA"), Some(2));
        assert_eq!(text("abc").prioritized_index_of_first_of(b"CB"), None);
    }

    #[test]
    fn test_chars() {
        let chars: [char; 5] = ['H', 'é', 'l', 'L', 'o'];
        let view = ArrayConstRef::new(&chars);
        assert_eq!(view.nocase_count('l'), 2);
        assert!(view.nocase_is_equal_to(&['h', 'é', 'L', 'l', 'O']));
    }
}
