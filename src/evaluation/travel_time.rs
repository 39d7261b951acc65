use crate::error::{Result, TourError};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Travel time in hours.
///
/// - `distance`: metres between the two locations
/// - `different_regions`: 0 within a region, 1 across regions
/// - `locations_in_dest_region`: locations in the destination's region, destination included
/// - `speed`: metres per second
///
/// Crossing into another region costs an extra tenth of the base time per location in the
/// destination region. Trips inside one region carry no penalty however busy it is.
pub fn travel_time(
    distance: f64,
    different_regions: u8,
    locations_in_dest_region: usize,
    speed: f64,
) -> Result<f64> {
    if speed == 0.0 {
        return Err(TourError::ZeroSpeed);
    }

    let base_hours = (distance / speed) / SECONDS_PER_HOUR;
    let congestion = 1.0 + (different_regions as f64 * locations_in_dest_region as f64) / 10.0;

    Ok(base_hours * congestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn same_region_has_no_penalty() {
        assert_eq!(travel_time(36000.0, 0, 0, 10.0).unwrap(), 1.0);
        assert_eq!(travel_time(36000.0, 0, 25, 10.0).unwrap(), 1.0);
    }

    #[test]
    fn crossing_regions_scales_with_destination_density() {
        assert_eq!(travel_time(36000.0, 1, 1, 10.0).unwrap(), 1.1);
        assert_eq!(travel_time(36000.0, 1, 10, 10.0).unwrap(), 2.0);
    }

    #[test]
    fn zero_distance_takes_no_time() {
        assert_eq!(travel_time(0.0, 1, 1, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn zero_speed_is_rejected() {
        let err = travel_time(36000.0, 1, 10, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "speed must be non-zero");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    proptest! {
        #[test]
        fn non_negative_and_monotone_in_distance(
            d in 0.0f64..1e7, extra in 0.0f64..1e6,
            crossing in 0u8..=1, count in 0usize..100, speed in 0.1f64..50.0,
        ) {
            let near = travel_time(d, crossing, count, speed).unwrap();
            let far = travel_time(d + extra, crossing, count, speed).unwrap();
            prop_assert!(near >= 0.0);
            prop_assert!(far >= near);
        }

        #[test]
        fn monotone_in_destination_density_when_crossing(
            d in 0.0f64..1e7, count in 0usize..100, more in 0usize..100, speed in 0.1f64..50.0,
        ) {
            let quiet = travel_time(d, 1, count, speed).unwrap();
            let busy = travel_time(d, 1, count + more, speed).unwrap();
            prop_assert!(busy >= quiet);
        }

        #[test]
        fn zero_distance_is_always_zero(
            crossing in 0u8..=1, count in 0usize..100, speed in 0.1f64..50.0,
        ) {
            prop_assert_eq!(travel_time(0.0, crossing, count, speed).unwrap(), 0.0);
        }
    }
}
