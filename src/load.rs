use crate::error::ApiError;

/// Outcome of a page's read request, as the view sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> From<Result<T, ApiError>> for LoadState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_map_onto_states() {
        let ok: LoadState<u32> = Ok(3).into();
        assert_eq!(ok, LoadState::Loaded(3));

        let failed: LoadState<u32> = Err(ApiError::Unauthorized).into();
        assert_eq!(failed, LoadState::Failed(ApiError::Unauthorized));

        assert_eq!(LoadState::<u32>::default(), LoadState::Loading);
    }
}
