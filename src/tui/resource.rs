/// Lifecycle of an async-loaded value.
///
/// `NotAsked` exists so initial state needs no sentinel values; the
/// runtime moves a resource through `Loading` into `Success`/`Failure`
/// when the corresponding message arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Resource<T, E = String> {
    #[default]
    NotAsked,
    Loading,
    Success(T),
    Failure(E),
}

impl<T, E> Resource<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Resource::Failure(_))
    }

    /// Get the success value if present
    pub fn value(&self) -> Option<&T> {
        match self {
            Resource::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Get the failure value if present
    pub fn error(&self) -> Option<&E> {
        match self {
            Resource::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Convert a `Result` into the terminal resource states
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Resource::Success(value),
            Err(err) => Resource::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_asked() {
        let resource: Resource<i32> = Resource::default();
        assert_eq!(resource, Resource::NotAsked);
    }

    #[test]
    fn from_result_maps_both_arms() {
        let ok: Resource<i32> = Resource::from_result(Ok(7));
        assert_eq!(ok.value(), Some(&7));
        let err: Resource<i32> = Resource::from_result(Err("nope".to_string()));
        assert_eq!(err.error().map(String::as_str), Some("nope"));
    }
}
