/// Builds a counter closing over a private integer starting at 0.
///
/// Each call returns the current value and then increments the stored
/// value, in that order (post-increment). Two calls on a fresh counter
/// yield 0 then 1. The count is owned exclusively by the returned
/// closure; constructions are independent of each other.
pub fn make_counter() -> impl FnMut() -> u64 {
    let mut count = 0;

    move || {
        let current = count;
        count += 1;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_counter_yields_zero_then_one() {
        let mut counter = make_counter();

        assert_eq!(counter(), 0);
        assert_eq!(counter(), 1);
    }

    #[test]
    fn first_call_is_zero_regardless_of_prior_constructions() {
        let mut first = make_counter();
        first();
        first();
        first();

        let mut second = make_counter();
        assert_eq!(second(), 0);
    }

    #[test]
    fn independent_counters_do_not_share_state() {
        let mut a = make_counter();
        let mut b = make_counter();

        assert_eq!(a(), 0);
        assert_eq!(a(), 1);
        assert_eq!(b(), 0);
        assert_eq!(a(), 2);
        assert_eq!(b(), 1);
    }
}
