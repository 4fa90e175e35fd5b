//! Selector tokenizer
//!
//! Splits strings like `pkg.Foo#bar[a,b#c],pkg.Baz` into selectors. Commas
//! and `#` only act as separators outside `[...]`.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Selector, SelectorList};

const LIST_SEPARATOR: char = ',';
const MEMBER_SEPARATOR: char = '#';
const OPEN_BRACKET: char = '[';
const CLOSE_BRACKET: char = ']';

static CLASS_OR_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([\p{L}_$][\p{L}\p{N}_$]*\.)*[\p{Lu}_$][\p{L}\p{N}_$]*(#[\p{L}_$][\p{L}\p{N}_$]*(\[\S*\])?)?$",
    )
    .expect("regex for class or method names")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ClassName,
    Member,
}

#[derive(Debug)]
struct Scanner {
    state: State,
    depth: usize,
    class_name: String,
    member: String,
    selectors: SelectorList,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::ClassName,
            depth: 0,
            class_name: String::new(),
            member: String::new(),
            selectors: Vec::new(),
        }
    }

    fn feed(&mut self, c: char) {
        match c {
            LIST_SEPARATOR if self.depth == 0 => self.finish_item(),
            MEMBER_SEPARATOR if self.depth == 0 && self.state == State::ClassName => {
                self.state = State::Member;
            }
            OPEN_BRACKET => {
                self.depth += 1;
                self.push(c);
            }
            CLOSE_BRACKET => {
                // A stray `]` is literal text; depth never goes negative
                self.depth = self.depth.saturating_sub(1);
                self.push(c);
            }
            _ => self.push(c),
        }
    }

    fn push(&mut self, c: char) {
        match self.state {
            State::ClassName => self.class_name.push(c),
            State::Member => self.member.push(c),
        }
    }

    fn finish_item(&mut self) {
        let class_name = std::mem::take(&mut self.class_name);
        let member = std::mem::take(&mut self.member);
        let state = std::mem::replace(&mut self.state, State::ClassName);
        self.depth = 0;

        if class_name.is_empty() && member.is_empty() {
            return;
        }

        let member = match state {
            State::Member if !member.is_empty() => Some(member),
            _ => None,
        };
        tracing::trace!("Tokenized selector: {:?}#{:?}", class_name, member);
        self.selectors.push(Selector {
            qualified_name: class_name,
            member,
        });
    }

    fn finish(mut self) -> SelectorList {
        if self.depth > 0 {
            tracing::debug!(
                "Unterminated '[' in selector {:?}, keeping the rest as member text",
                self.class_name
            );
        }
        self.finish_item();
        self.selectors
    }
}

/// Split a raw selector string into an ordered list of selectors.
///
/// Items are separated by `,` and a class is separated from its member by the
/// first `#`, both only at bracket depth 0. An unterminated `[` is tolerated:
/// everything after it belongs to the current member. Empty items are
/// skipped.
pub fn tokenize(raw: &str) -> SelectorList {
    let mut scanner = Scanner::new();
    for c in raw.chars() {
        scanner.feed(c);
    }
    scanner.finish()
}

/// Whether a line names a class (`pkg.Foo`) or a method (`pkg.Foo#bar`)
/// rather than a package (`pkg.foo`).
pub fn is_class_or_method(text: &str) -> bool {
    CLASS_OR_METHOD.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> Selector {
        Selector::class(name)
    }

    fn method(name: &str, member: &str) -> Selector {
        Selector::member(name, member)
    }

    #[test]
    fn test_single_class() {
        assert_eq!(tokenize("ClassName"), vec![class("ClassName")]);
    }

    #[test]
    fn test_multiple_classes() {
        assert_eq!(tokenize("A,B"), vec![class("A"), class("B")]);
    }

    #[test]
    fn test_class_and_method() {
        assert_eq!(tokenize("A#m"), vec![method("A", "m")]);
        assert_eq!(tokenize("A#m,B"), vec![method("A", "m"), class("B")]);
    }

    #[test]
    fn test_comma_inside_brackets_does_not_split() {
        assert_eq!(
            tokenize("A#m[foo,bar],B"),
            vec![method("A", "m[foo,bar]"), class("B")]
        );
    }

    #[test]
    fn test_hash_inside_brackets_belongs_to_member() {
        assert_eq!(
            tokenize("A#m[foo#bar],B#m2"),
            vec![method("A", "m[foo#bar]"), method("B", "m2")]
        );
    }

    #[test]
    fn test_comma_and_hash_in_one_bracket() {
        assert_eq!(
            tokenize("pkg.Foo#test[a#1,b#2],pkg.Bar"),
            vec![method("pkg.Foo", "test[a#1,b#2]"), class("pkg.Bar")]
        );
    }

    #[test]
    fn test_nested_brackets() {
        assert_eq!(
            tokenize("A#m[[1,2],[3]],B"),
            vec![method("A", "m[[1,2],[3]]"), class("B")]
        );
    }

    #[test]
    fn test_duplicates_are_preserved() {
        assert_eq!(
            tokenize("ClassName1#method,ClassName1,ClassName1#method"),
            vec![
                method("ClassName1", "method"),
                class("ClassName1"),
                method("ClassName1", "method"),
            ]
        );
    }

    #[test]
    fn test_unterminated_bracket_is_tolerated() {
        assert_eq!(
            tokenize("A#m[foo,bar,B"),
            vec![method("A", "m[foo,bar,B")]
        );
    }

    #[test]
    fn test_stray_closing_bracket_is_literal() {
        assert_eq!(tokenize("A#m],B"), vec![method("A", "m]"), class("B")]);
    }

    #[test]
    fn test_second_hash_stays_in_member() {
        assert_eq!(tokenize("A#m#n"), vec![method("A", "m#n")]);
    }

    #[test]
    fn test_empty_items_are_skipped() {
        assert!(tokenize("").is_empty());
        assert_eq!(tokenize("A,,B,"), vec![class("A"), class("B")]);
        assert_eq!(tokenize("A#"), vec![class("A")]);
    }

    #[test]
    fn test_is_class_or_method() {
        assert!(is_class_or_method("pkg.foo.Bar"));
        assert!(is_class_or_method("pkg.foo.Bar#method1"));
        assert!(is_class_or_method("Bar"));
        assert!(is_class_or_method("Bar#method_$1"));
        assert!(is_class_or_method("pkg.foo_1.foo$.Bar2#m"));
        assert!(is_class_or_method("pkg.foo.Bar#method[0]"));
    }

    #[test]
    fn test_packages_are_not_class_or_method() {
        assert!(!is_class_or_method("pkg.foo.bar"));
        assert!(!is_class_or_method("pkg"));
        assert!(!is_class_or_method("pkg1.foo_2.bar$3"));
        assert!(!is_class_or_method(""));
        assert!(!is_class_or_method("$^$%^"));
    }
}
