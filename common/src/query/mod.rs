/// Progress of one fetch issued by a screen.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum QueryState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

/// Progress of one mutation. While `InFlight` the triggering button stays
/// disabled so the same request is not sent twice.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    InFlight,
    Failed(String),
}

impl MutationState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, MutationState::InFlight)
    }

    /// Moves to `InFlight` and reports whether the caller may send the request.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = MutationState::InFlight;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_while_in_flight() {
        let mut state = MutationState::default();
        assert!(state.begin());
        assert!(!state.begin());
        state = MutationState::Failed("boom".to_string());
        assert!(state.begin());
    }

    #[test]
    fn only_loading_counts_as_loading() {
        assert!(QueryState::<u8>::Loading.is_loading());
        assert!(!QueryState::Loaded(3u8).is_loading());
        assert!(!QueryState::<u8>::Failed("boom".to_string()).is_loading());
    }
}
