/// Collects attribute errors so a single expansion reports all of them.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    /// Keeps the value of `result`, recording its error otherwise.
    pub(crate) fn check<T>(&mut self, result: syn::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// Returns `value` if no error was recorded, or all errors combined.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        }) {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
