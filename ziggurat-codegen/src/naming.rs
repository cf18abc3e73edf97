//! The naming engine: word splitting, case styling, legalization, and
//! collision-free assignment inside a namespace.
//!
//! `styled_name` is pure and deterministic for a fixed `(original, style)`
//! pair; collision resolution lives in [`Namespace`] and depends on the
//! names assigned before it, so global determinism holds for a fixed graph.

use indexmap::IndexSet;

/// Substitute for inputs that legalize to nothing (empty string,
/// all-underscore, pure punctuation).
pub const SENTINEL: &str = "_underscore";

/// Identifier case style applied after word splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Every word lower-cased, joined with `_`.
    Snake,
    /// Every word capitalized, joined with no separator.
    Pascal,
}

/// Split an external identifier into word tokens at case boundaries,
/// punctuation, and digit/letter transitions. Characters outside
/// `[A-Za-z0-9]` act as separators and never survive into a token.
fn split_words(original: &str) -> Vec<String> {
    let chars: Vec<char> = original.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(prev) = current.chars().last() {
            let acronym_end = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && matches!(chars.get(i + 1), Some(n) if n.is_ascii_lowercase());
            let boundary = (prev.is_ascii_lowercase() && c.is_ascii_uppercase())
                || prev.is_ascii_digit() != c.is_ascii_digit()
                || acronym_end;
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
    }
}

/// Convert an arbitrary external identifier into a legal, case-styled
/// identifier candidate.
///
/// The result always matches `[A-Za-z_][A-Za-z0-9_]*`; pathological inputs
/// fall back to [`SENTINEL`] instead of failing. Keyword and sibling
/// collisions are resolved separately by [`Namespace::assign`].
pub fn styled_name(original: &str, style: CaseStyle) -> String {
    let words = split_words(original);
    let mut name = match style {
        CaseStyle::Snake => words
            .iter()
            .map(|w| w.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("_"),
        CaseStyle::Pascal => words.iter().map(|w| capitalize(w)).collect(),
    };
    if name.is_empty() || name.chars().all(|c| c == '_') {
        return SENTINEL.to_string();
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// One identifier namespace: the forbidden-word set it was seeded with plus
/// every name assigned so far.
///
/// Four namer roles exist per render (type names, properties, union members,
/// enum cases); each gets its own `Namespace` but all share this machinery.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    taken: IndexSet<String>,
}

impl Namespace {
    /// Create a namespace seeded with a forbidden-word set (keywords plus
    /// any extra forbidden words for the namespace kind).
    pub fn new<I, S>(forbidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: forbidden.into_iter().map(Into::into).collect(),
        }
    }

    /// Style `original` and claim a unique identifier for it.
    ///
    /// Collisions with keywords or previously assigned names resolve by
    /// numeric suffixing (`id`, `id2`, `id3`, ...), which terminates because
    /// the taken set is finite.
    pub fn assign(&mut self, original: &str, style: CaseStyle) -> String {
        let base = styled_name(original, style);
        let name = if self.taken.contains(&base) {
            let mut counter = 2usize;
            loop {
                let candidate = format!("{}{}", base, counter);
                if !self.taken.contains(&candidate) {
                    break candidate;
                }
                counter += 1;
            }
        } else {
            base
        };
        self.taken.insert(name.clone());
        name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.taken.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("user-name"), ["user", "name"]);
        assert_eq!(split_words("userName"), ["user", "Name"]);
        assert_eq!(split_words("JSONValue"), ["JSON", "Value"]);
        assert_eq!(split_words("top10Items"), ["top", "10", "Items"]);
        assert_eq!(split_words("__weird__key__"), ["weird", "key"]);
        assert!(split_words("!!!").is_empty());
    }

    #[test]
    fn test_snake_style() {
        assert_eq!(styled_name("user-name", CaseStyle::Snake), "user_name");
        assert_eq!(styled_name("UserName", CaseStyle::Snake), "user_name");
        assert_eq!(styled_name("HTTPPort", CaseStyle::Snake), "http_port");
        assert_eq!(styled_name("RED", CaseStyle::Snake), "red");
    }

    #[test]
    fn test_pascal_style() {
        assert_eq!(styled_name("user-name", CaseStyle::Pascal), "UserName");
        assert_eq!(styled_name("top_level", CaseStyle::Pascal), "TopLevel");
        assert_eq!(styled_name("JSONValue", CaseStyle::Pascal), "JsonValue");
    }

    #[test]
    fn test_leading_digit_gets_prefixed() {
        assert_eq!(styled_name("3dPoint", CaseStyle::Snake), "_3_d_point");
        assert_eq!(styled_name("123", CaseStyle::Pascal), "_123");
    }

    #[test]
    fn test_pathological_inputs_fall_back_to_sentinel() {
        assert_eq!(styled_name("", CaseStyle::Snake), SENTINEL);
        assert_eq!(styled_name("___", CaseStyle::Snake), SENTINEL);
        assert_eq!(styled_name("?!*", CaseStyle::Pascal), SENTINEL);
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        assert_eq!(styled_name("héllo", CaseStyle::Snake), "h_llo");
    }

    #[test]
    fn test_namespace_resolves_collisions() {
        let mut ns = Namespace::new(Vec::<String>::new());
        assert_eq!(ns.assign("id", CaseStyle::Snake), "id");
        assert_eq!(ns.assign("ID", CaseStyle::Snake), "id2");
        assert_eq!(ns.assign("Id", CaseStyle::Snake), "id3");
    }

    #[test]
    fn test_namespace_avoids_forbidden_words() {
        let mut ns = Namespace::new(["error", "const"]);
        assert_eq!(ns.assign("error", CaseStyle::Snake), "error2");
        assert_eq!(ns.assign("const", CaseStyle::Snake), "const2");
        assert_eq!(ns.assign("fine", CaseStyle::Snake), "fine");
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let run = || {
            let mut ns = Namespace::new(["while"]);
            ["while", "While", "user-name", "user_name"]
                .map(|n| ns.assign(n, CaseStyle::Snake))
        };
        assert_eq!(run(), run());
    }
}
