//! Tests for the exponentially centred probability grid

#[cfg(test)]
mod tests {
    use percolation::PercolationError;
    use percolation::math::grid::exponential_centered_grid;

    // Grid starts at min, passes through center at index round(N/2) and ends at max
    #[test]
    fn test_grid_hits_min_center_and_max() {
        let grid = exponential_centered_grid(0.0, 1.0, 0.59, 120, 4.0, 0)
            .unwrap_or_default();

        assert_eq!(grid.len(), 120);
        assert!(grid.first().is_some_and(|&v| v.abs() < 1e-12));
        assert!(grid.get(60).is_some_and(|&v| (v - 0.59).abs() < 1e-12));
        assert!(grid.last().is_some_and(|&v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_grid_is_strictly_increasing() {
        let grid = exponential_centered_grid(0.0, 1.0, 0.3, 41, 2.5, 0).unwrap_or_default();

        assert_eq!(grid.len(), 41);
        assert!(grid.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Spacing shrinks towards the centre from both sides
    #[test]
    fn test_grid_is_densest_at_center() {
        let grid = exponential_centered_grid(0.0, 1.0, 0.5, 20, 4.0, 0).unwrap_or_default();
        let gaps: Vec<f64> = grid.windows(2).map(|pair| pair[1] - pair[0]).collect();

        let first_gap = gaps.first().copied().unwrap_or(0.0);
        let last_gap = gaps.last().copied().unwrap_or(0.0);
        let central_gap = gaps.get(9).copied().unwrap_or(f64::MAX);

        assert!(central_gap < first_gap);
        assert!(central_gap < last_gap);
    }

    #[test]
    fn test_round_digits_truncates() {
        let grid = exponential_centered_grid(0.0, 1.0, 0.59, 50, 4.0, 3).unwrap_or_default();

        assert_eq!(grid.len(), 50);
        for value in grid {
            let scaled = value * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{value} has more than 3 decimals");
        }
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let cases = [
            exponential_centered_grid(0.0, 1.0, 0.0, 10, 4.0, 0),
            exponential_centered_grid(0.0, 1.0, 1.0, 10, 4.0, 0),
            exponential_centered_grid(0.0, 1.0, 0.5, 3, 4.0, 0),
            exponential_centered_grid(0.0, 1.0, 0.5, 10, 0.0, 0),
            exponential_centered_grid(0.0, 1.0, 0.5, 10, f64::NAN, 0),
        ];

        for case in cases {
            assert!(matches!(
                case,
                Err(PercolationError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_smallest_valid_grid() {
        let grid = exponential_centered_grid(0.0, 1.0, 0.5, 4, 1.0, 0).unwrap_or_default();

        assert_eq!(grid.len(), 4);
        assert!(grid.get(2).is_some_and(|&v| (v - 0.5).abs() < 1e-12));
        assert!(grid.last().is_some_and(|&v| (v - 1.0).abs() < 1e-12));
    }
}
