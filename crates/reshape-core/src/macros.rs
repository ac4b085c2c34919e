/// Builds a [`ValueObject`](crate::ValueObject) from `key => value` pairs,
/// keeping the pairs in the order written.
///
/// ```
/// use reshape_core::{object, Value};
///
/// let author = object! {
///     "_id" => "4b6b6f2e-4c1d-4a6c-9a4e-0d3c2b1a0f9e",
///     "name" => "Gijs",
///     "initials" => Value::Null,
/// };
///
/// assert_eq!(author.keys().collect::<Vec<_>>(), ["_id", "name", "initials"]);
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::ValueObject::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut object = $crate::ValueObject::new();
        $(
            object.insert($key, $value);
        )+
        object
    }};
}
