//! Flattening of variadic-style clause arguments.

/// Anything a clause-appending method accepts: a single SQL fragment, a
/// collection of fragments, or a nested collection. Everything flattens into
/// an ordered `Vec<String>` preserving call order.
///
/// ```
/// use sqlforge::IntoFragments;
///
/// assert_eq!("id".into_fragments(), vec!["id"]);
/// assert_eq!(["id", "name"].into_fragments(), vec!["id", "name"]);
/// assert_eq!(vec![vec!["a"], vec!["b", "c"]].into_fragments(), vec!["a", "b", "c"]);
/// ```
pub trait IntoFragments {
    fn into_fragments(self) -> Vec<String>;
}

impl IntoFragments for &str {
    fn into_fragments(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoFragments for String {
    fn into_fragments(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoFragments for &String {
    fn into_fragments(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: IntoFragments> IntoFragments for Vec<T> {
    fn into_fragments(self) -> Vec<String> {
        self.into_iter()
            .flat_map(IntoFragments::into_fragments)
            .collect()
    }
}

impl<T: IntoFragments, const N: usize> IntoFragments for [T; N] {
    fn into_fragments(self) -> Vec<String> {
        self.into_iter()
            .flat_map(IntoFragments::into_fragments)
            .collect()
    }
}

impl IntoFragments for &[&str] {
    fn into_fragments(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<T: IntoFragments> IntoFragments for Option<T> {
    fn into_fragments(self) -> Vec<String> {
        self.map(IntoFragments::into_fragments).unwrap_or_default()
    }
}
