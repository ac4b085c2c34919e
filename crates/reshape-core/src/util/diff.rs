/// Returns the elements of `left` that do not appear in `right`.
///
/// The result keeps the order of `left`; the order of `right` is irrelevant.
pub fn difference<T, U>(left: &[T], right: &[U]) -> Vec<T>
where
    T: PartialEq<U> + Clone,
{
    left.iter()
        .filter(|item| !right.iter().any(|other| *item == other))
        .cloned()
        .collect()
}
