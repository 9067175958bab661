//! Parity counter driving `/info` alternation.

use super::types::Variant;

/// Default starting value of the counter.
pub const DEFAULT_COUNTER_START: i64 = 2;

/// Counter whose parity selects the next record shape.
///
/// Even selects [`Variant::Base`] and decrements; odd selects
/// [`Variant::Extended`] and increments. Either step flips parity, so
/// successive calls to [`InfoCounter::advance`] strictly alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCounter {
    value: i64,
}

impl InfoCounter {
    /// Create a counter starting at `start`.
    pub fn new(start: i64) -> Self {
        Self { value: start }
    }

    /// Current raw value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Variant the next call to [`advance`](Self::advance) will return.
    pub fn peek(&self) -> Variant {
        if self.value.rem_euclid(2) == 0 {
            Variant::Base
        } else {
            Variant::Extended
        }
    }

    /// Pick the variant for the current parity, then step the counter.
    ///
    /// Wraps at the `i64` bounds; wrapping by one still flips parity.
    pub fn advance(&mut self) -> Variant {
        self.step().variant
    }

    /// Like [`advance`](Self::advance), also reporting the values around the step.
    pub fn step(&mut self) -> CounterStep {
        let before = self.value;
        let variant = self.peek();
        self.value = match variant {
            Variant::Base => before.wrapping_sub(1),
            Variant::Extended => before.wrapping_add(1),
        };
        CounterStep {
            variant,
            before,
            after: self.value,
        }
    }
}

/// Outcome of one [`InfoCounter::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterStep {
    /// Variant selected by `before`.
    pub variant: Variant,
    /// Counter value the variant was chosen from.
    pub before: i64,
    /// Counter value after the step.
    pub after: i64,
}

impl Default for InfoCounter {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_START)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_counter_starts_with_base() {
        let mut counter = InfoCounter::default();

        assert_eq!(counter.advance(), Variant::Base);
        assert_eq!(counter.value(), 1);
        assert_eq!(counter.advance(), Variant::Extended);
        assert_eq!(counter.value(), 2);
        assert_eq!(counter.advance(), Variant::Base);
    }

    #[test]
    fn step_reports_values_around_the_change() {
        let mut counter = InfoCounter::new(2);

        assert_eq!(
            counter.step(),
            CounterStep {
                variant: Variant::Base,
                before: 2,
                after: 1
            }
        );
        assert_eq!(
            counter.step(),
            CounterStep {
                variant: Variant::Extended,
                before: 1,
                after: 2
            }
        );
    }

    #[test]
    fn odd_start_begins_with_extended() {
        let mut counter = InfoCounter::new(1);
        assert_eq!(counter.peek(), Variant::Extended);
        assert_eq!(counter.advance(), Variant::Extended);
        assert_eq!(counter.advance(), Variant::Base);
    }

    #[test]
    fn negative_values_use_euclidean_parity() {
        assert_eq!(InfoCounter::new(-3).peek(), Variant::Extended);
        assert_eq!(InfoCounter::new(-4).peek(), Variant::Base);
    }

    #[test]
    fn wraps_at_bounds() {
        let mut counter = InfoCounter::new(i64::MIN);
        assert_eq!(counter.advance(), Variant::Base);
        assert_eq!(counter.value(), i64::MAX);
        assert_eq!(counter.advance(), Variant::Extended);
        assert_eq!(counter.value(), i64::MIN);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn consecutive_calls_alternate(start in any::<i64>(), calls in 2usize..200) {
                let mut counter = InfoCounter::new(start);
                let mut previous = counter.advance();

                for _ in 1..calls {
                    let next = counter.advance();
                    prop_assert_ne!(next, previous);
                    previous = next;
                }
            }

            #[test]
            fn two_calls_restore_the_start_value(start in any::<i64>()) {
                let mut counter = InfoCounter::new(start);
                counter.advance();
                counter.advance();
                prop_assert_eq!(counter.value(), start);
            }
        }
    }
}
