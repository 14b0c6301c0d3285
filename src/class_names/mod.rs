//! Conditional class-name merging
//!
//! [`merge_classes`] (and the [`cn!`](crate::cn) macro) combine conditional
//! class inputs in two passes:
//!
//! 1. flatten nested inputs, dropping falsy entries, into an ordered token list;
//! 2. resolve Tailwind conflicts, keeping the last class per CSS property.
//!
//! ```
//! use moviedb_display::cn;
//!
//! let selected = true;
//! let class = cn!("px-4 py-2 bg-gray-700", selected.then_some("bg-blue-600"), "px-6");
//! assert_eq!(class, "py-2 bg-blue-600 px-6");
//! ```

mod groups;

use std::borrow::Cow;
use std::collections::HashSet;

pub use groups::{classify, ClassGroup, Edge};

/// A conditionally included class value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassInput<'a> {
    /// Contributes nothing.
    Skip,
    /// One or more whitespace-separated classes.
    Classes(Cow<'a, str>),
    /// Nested inputs, flattened in order.
    List(Vec<ClassInput<'a>>),
}

impl<'a> From<&'a str> for ClassInput<'a> {
    fn from(classes: &'a str) -> Self {
        ClassInput::Classes(Cow::Borrowed(classes))
    }
}

impl<'a> From<&'a String> for ClassInput<'a> {
    fn from(classes: &'a String) -> Self {
        ClassInput::Classes(Cow::Borrowed(classes.as_str()))
    }
}

impl From<String> for ClassInput<'_> {
    fn from(classes: String) -> Self {
        ClassInput::Classes(Cow::Owned(classes))
    }
}

impl<'a> From<Cow<'a, str>> for ClassInput<'a> {
    fn from(classes: Cow<'a, str>) -> Self {
        ClassInput::Classes(classes)
    }
}

/// `(classes, condition)`: included only when `condition` holds.
impl<'a> From<(&'a str, bool)> for ClassInput<'a> {
    fn from((classes, condition): (&'a str, bool)) -> Self {
        if condition {
            classes.into()
        } else {
            ClassInput::Skip
        }
    }
}

impl<'a, T: Into<ClassInput<'a>>> From<Option<T>> for ClassInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassInput::Skip, Into::into)
    }
}

impl<'a, T: Into<ClassInput<'a>>> From<Vec<T>> for ClassInput<'a> {
    fn from(items: Vec<T>) -> Self {
        ClassInput::List(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<ClassInput<'a>>, const N: usize> From<[T; N]> for ClassInput<'a> {
    fn from(items: [T; N]) -> Self {
        ClassInput::List(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<ClassInput<'a>> + Clone> From<&[T]> for ClassInput<'a> {
    fn from(items: &[T]) -> Self {
        ClassInput::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<'a> ClassInput<'a> {
    fn collect_tokens<'s>(&'s self, tokens: &mut Vec<&'s str>) {
        match self {
            ClassInput::Skip => {}
            ClassInput::Classes(classes) => tokens.extend(classes.split_whitespace()),
            ClassInput::List(items) => {
                for item in items {
                    item.collect_tokens(tokens);
                }
            }
        }
    }
}

/// Flatten and filter `inputs`, handing the ordered token list to `f`.
fn with_tokens<'a, I, R>(inputs: I, f: impl FnOnce(&[&str]) -> R) -> R
where
    I: IntoIterator,
    I::Item: Into<ClassInput<'a>>,
{
    let inputs: Vec<ClassInput<'a>> = inputs.into_iter().map(Into::into).collect();
    let mut tokens = Vec::new();
    for input in &inputs {
        input.collect_tokens(&mut tokens);
    }
    f(&tokens)
}

/// Join conditional inputs into one class string without conflict resolution.
pub fn join_classes<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassInput<'a>>,
{
    with_tokens(inputs, |tokens| tokens.join(" "))
}

/// Merge conditional inputs into one class string, later conflicting
/// Tailwind utilities replacing earlier ones.
pub fn merge_classes<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassInput<'a>>,
{
    with_tokens(inputs, resolve_conflicts)
}

/// Class tokens split into variant scope and bare utility.
#[derive(Debug, PartialEq, Eq)]
struct ParsedClass<'t> {
    modifiers: Vec<&'t str>,
    important: bool,
    utility: &'t str,
}

impl<'t> ParsedClass<'t> {
    fn parse(token: &'t str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        let mut postfix_at = None;
        for (i, c) in token.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&token[start..i]);
                    start = i + 1;
                    postfix_at = None;
                }
                '/' if depth == 0 => postfix_at = Some(i),
                _ => {}
            }
        }

        let mut utility = match postfix_at {
            Some(end) => &token[start..end],
            None => &token[start..],
        };
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            utility = rest;
            important = true;
        } else if let Some(rest) = utility.strip_suffix('!') {
            utility = rest;
            important = true;
        }
        if let Some(positive) = utility.strip_prefix('-') {
            utility = positive;
        }

        Self {
            modifiers,
            important,
            utility,
        }
    }

    /// Variant scope; classes only conflict within the same scope.
    ///
    /// Plain variants are order-insensitive (`hover:focus:` == `focus:hover:`),
    /// arbitrary variants (`[&>*]:`) keep their position.
    fn scope(&self) -> String {
        let mut sorted: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();
        for &modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                sorted.append(&mut run);
                sorted.push(modifier);
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        sorted.append(&mut run);

        let mut scope = sorted.join(":");
        if self.important {
            scope.push('!');
        }
        scope
    }

    fn group(&self) -> Option<GroupKey<'t>> {
        if let Some(inner) = self.utility.strip_prefix('[').and_then(|u| u.strip_suffix(']')) {
            if let Some((property, _)) = inner.split_once(':') {
                return Some(GroupKey::Property(property));
            }
        }
        classify(self.utility).map(GroupKey::Utility)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey<'t> {
    Utility(ClassGroup),
    /// Arbitrary property class such as `[mask-type:alpha]`.
    Property(&'t str),
}

/// Keep the last class per (scope, group); keep the last of exact duplicates.
fn resolve_conflicts(tokens: &[&str]) -> String {
    let mut claimed: HashSet<(String, GroupKey<'_>)> = HashSet::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for &token in tokens.iter().rev() {
        if !seen.insert(token) {
            continue;
        }
        let parsed = ParsedClass::parse(token);
        if let Some(group) = parsed.group() {
            let scope = parsed.scope();
            if claimed.contains(&(scope.clone(), group.clone())) {
                log::trace!("Dropping class {token:?}, overridden by a later class");
                continue;
            }
            if let GroupKey::Utility(utility) = &group {
                for covered in utility.overridden() {
                    claimed.insert((scope.clone(), GroupKey::Utility(covered)));
                }
            }
            claimed.insert((scope, group));
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Merge any mix of class inputs: strings, `Option`s, `(class, condition)`
/// pairs, arrays and `Vec`s.
///
/// ```
/// use moviedb_display::cn;
///
/// let disabled = false;
/// assert_eq!(
///     cn!("rounded p-2", ("opacity-50", disabled), ["p-4", "text-sm"]),
///     "rounded p-4 text-sm"
/// );
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::class_names::merge_classes([
            $($crate::class_names::ClassInput::from($input)),+
        ])
    };
}
