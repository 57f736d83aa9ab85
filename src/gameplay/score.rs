/// Points scored during the current round. Cleared when the projectile comes to rest.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ScoreTracker {
    value: u32,
}

impl ScoreTracker {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Decimal text shown by the HUD.
    pub fn current_text(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_clears() {
        let mut s = ScoreTracker::default();
        assert_eq!(s.current_text(), "0");
        s.increment();
        s.increment();
        s.increment();
        assert_eq!(s.value(), 3);
        assert_eq!(s.current_text(), "3");
        s.reset();
        assert_eq!(s.value(), 0);
        assert_eq!(s.current_text(), "0");
    }
}
