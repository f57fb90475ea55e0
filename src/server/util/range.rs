/// Maps a coarse textual quantity range to its integer upper bound.
///
/// Application forms capture quantities as one of five closed ranges; the
/// schema stores the integer bound. Anything outside the recognised set,
/// including an absent value, maps to `0`.
pub fn range_to_integer(range: Option<&str>) -> i32 {
    match range {
        Some("upTo10") => 10,
        Some("upTo50") => 50,
        Some("upTo100") => 100,
        Some("upTo500") => 500,
        Some("upTo1000") => 1000,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::range_to_integer;

    #[test]
    fn maps_recognised_ranges() {
        assert_eq!(range_to_integer(Some("upTo10")), 10);
        assert_eq!(range_to_integer(Some("upTo50")), 50);
        assert_eq!(range_to_integer(Some("upTo100")), 100);
        assert_eq!(range_to_integer(Some("upTo500")), 500);
        assert_eq!(range_to_integer(Some("upTo1000")), 1000);
    }

    #[test]
    fn unrecognised_input_maps_to_zero() {
        assert_eq!(range_to_integer(None), 0);
        assert_eq!(range_to_integer(Some("")), 0);
        assert_eq!(range_to_integer(Some("upTo2000")), 0);
        assert_eq!(range_to_integer(Some("UPTO10")), 0);
    }

    #[test]
    fn mapping_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(range_to_integer(Some("upTo500")), 500);
        }
    }
}
