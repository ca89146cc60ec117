use crate::domain::model::ReducedNumber;

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeatedly digit-sums `sum` until it is a single digit or a master number.
///
/// A master number (11, 22, 33) stops the loop wherever it shows up, so
/// `38 -> 11` rather than `38 -> 11 -> 2`. Zero stays zero.
pub fn reduce(mut sum: u32) -> ReducedNumber {
    while sum > 9 && !ReducedNumber::MASTER_NUMBERS.contains(&sum) {
        sum = digit_sum(sum);
    }
    ReducedNumber::from_reduced(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_output(n: u32) -> bool {
        n <= 9 || ReducedNumber::MASTER_NUMBERS.contains(&n)
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(u32::MAX), 57);
    }

    #[test]
    fn test_master_numbers_are_kept() {
        assert_eq!(reduce(11).value(), 11);
        assert_eq!(reduce(22).value(), 22);
        assert_eq!(reduce(33).value(), 33);
    }

    #[test]
    fn test_reduction_stops_at_intermediate_master_number() {
        assert_eq!(reduce(38).value(), 11);
        assert_eq!(reduce(29).value(), 11);
        assert_eq!(reduce(9992).value(), 11); // 29 -> 11
        assert_eq!(reduce(499).value(), 22);
        assert_eq!(reduce(299).value(), 2); // 20 -> 2
    }

    #[test]
    fn test_plain_reduction() {
        assert_eq!(reduce(0).value(), 0);
        assert_eq!(reduce(9).value(), 9);
        assert_eq!(reduce(10).value(), 1);
        assert_eq!(reduce(21).value(), 3);
        assert_eq!(reduce(44).value(), 8);
        assert_eq!(reduce(99).value(), 9); // 18 -> 9
    }

    #[test]
    fn test_reduce_output_range_and_idempotence() {
        for n in 0..20_000u32 {
            let once = reduce(n);
            assert!(is_valid_output(once.value()), "reduce({}) = {}", n, once);
            assert_eq!(reduce(once.value()), once, "reduce is not idempotent for {}", n);
        }
        for n in [u32::MAX, u32::MAX - 1, 1_000_000_007] {
            assert!(is_valid_output(reduce(n).value()));
        }
    }
}
