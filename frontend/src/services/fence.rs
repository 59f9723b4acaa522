use std::cell::Cell;

/// Monotonic generation counter guarding a fetch domain against out-of-order
/// responses. Each refresh takes a token before awaiting; the result is only
/// applied while that token is still the newest one issued.
#[derive(Debug, Default)]
pub struct FetchFence {
    current: Cell<u64>,
}

impl FetchFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating all earlier tokens.
    pub fn issue(&self) -> u64 {
        let token = self.current.get() + 1;
        self.current.set(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let fence = FetchFence::new();
        let first = fence.issue();
        let second = fence.issue();

        assert!(!fence.is_current(first));
        assert!(fence.is_current(second));
    }

    #[test]
    fn test_single_token_is_current() {
        let fence = FetchFence::new();
        let token = fence.issue();
        assert!(fence.is_current(token));
    }
}
