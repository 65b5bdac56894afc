// crates/strings_helper/src/predicates.rs

/// Returns true if `s` contains at least one of `values` as a substring.
pub fn contains_one_of<I>(s: &str, values: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values.into_iter().any(|value| s.contains(value.as_ref()))
}

/// Returns true if `s` is equal to one of `values`.
pub fn is_in<I>(values: I, s: &str) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values.into_iter().any(|value| value.as_ref() == s)
}
