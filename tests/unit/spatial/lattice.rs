//! Tests for lattice allocation, population and rendering

#[cfg(test)]
mod tests {
    use percolation::PercolationError;
    use percolation::io::configuration::{DEFAULT_STREAM, MAX_LATTICE_DIMENSION};
    use percolation::math::random::Pcg32;
    use percolation::spatial::Lattice;

    #[test]
    fn test_allocate_is_zero_filled() {
        let Ok(lattice) = Lattice::allocate(3, 5) else {
            unreachable!("3x5 is a valid lattice");
        };

        assert_eq!(lattice.rows(), 3);
        assert_eq!(lattice.columns(), 5);
        assert_eq!(lattice.len(), 15);
        assert!(lattice.as_slice().iter().all(|&cell| cell == 0));
        assert_eq!(lattice.occupied_count(), 0);
    }

    #[test]
    fn test_allocate_rejects_invalid_dimensions() {
        for (rows, columns) in [(0, 4), (4, 0), (MAX_LATTICE_DIMENSION + 1, 1)] {
            assert!(matches!(
                Lattice::allocate(rows, columns),
                Err(PercolationError::InvalidParameter { .. })
            ));
        }
    }

    // Flat storage is row-major: index = row * columns + column
    #[test]
    fn test_from_cells_is_row_major() {
        let Ok(lattice) = Lattice::from_cells(2, 3, vec![0, 1, 2, 3, 4, 5]) else {
            unreachable!("six cells fit a 2x3 lattice");
        };

        assert_eq!(lattice.get(0, 2), Some(2));
        assert_eq!(lattice.get(1, 0), Some(3));
        assert_eq!(lattice.get(2, 0), None);
        assert_eq!(lattice.row(1), &[3, 4, 5]);
        assert!(lattice.row(2).is_empty());
        assert_eq!(lattice.max_value(), 5);
    }

    #[test]
    fn test_from_cells_rejects_shape_mismatch() {
        assert!(matches!(
            Lattice::from_cells(2, 2, vec![0, 1, 0]),
            Err(PercolationError::InvalidParameter { .. })
        ));
    }

    // Labels never exceed the site count plus one, so larger values are rejected
    #[test]
    fn test_from_cells_bounds_cell_values() {
        assert!(Lattice::from_cells(2, 2, vec![0, 5, 0, 0]).is_ok());
        assert!(matches!(
            Lattice::from_cells(2, 2, vec![0, 6, 0, 0]),
            Err(PercolationError::InvalidParameter { .. })
        ));
        assert!(Lattice::from_cells(1, 1, vec![u32::MAX]).is_err());
    }

    #[test]
    fn test_populate_extreme_probabilities() {
        let Ok(mut lattice) = Lattice::allocate(6, 4) else {
            unreachable!("6x4 is a valid lattice");
        };
        let mut rng = Pcg32::from_seed_value(1);

        lattice.populate(1.0, &mut rng, 0);
        assert!(lattice.as_slice().iter().all(|&cell| cell == 1));

        lattice.populate(0.0, &mut rng, 0);
        assert!(lattice.as_slice().iter().all(|&cell| cell == 0));

        lattice.populate(7.5, &mut rng, 0);
        assert_eq!(lattice.occupied_count(), 24);

        lattice.populate(-0.5, &mut rng, 0);
        assert_eq!(lattice.occupied_count(), 0);
    }

    // Population overwrites previous labels rather than adding to them
    #[test]
    fn test_populate_overwrites_every_cell() {
        let Ok(mut lattice) = Lattice::from_cells(2, 2, vec![5, 5, 5, 5]) else {
            unreachable!("four cells fit a 2x2 lattice");
        };
        let mut rng = Pcg32::from_seed_value(1);

        lattice.populate(0.5, &mut rng, 0);

        assert!(lattice.as_slice().iter().all(|&cell| cell <= 1));
        assert!(!lattice.is_labeled() || lattice.occupied_count() == 0);
    }

    #[test]
    fn test_populate_with_same_seed_is_reproducible() {
        let (Ok(mut first), Ok(mut second)) = (Lattice::allocate(10, 10), Lattice::allocate(10, 10))
        else {
            unreachable!("10x10 is a valid lattice");
        };
        let mut rng_a = Pcg32::from_seed_value(5);
        let mut rng_b = Pcg32::new(999, 3);

        first.populate(0.5, &mut rng_a, 2024);
        second.populate(0.5, &mut rng_b, 2024);

        assert_eq!(first, second);
        assert_eq!(rng_a, rng_b);
    }

    // Seed 0 continues the stream; a non-zero seed reseeds on the default stream
    #[test]
    fn test_zero_seed_continues_stream() {
        let Ok(mut lattice) = Lattice::allocate(8, 8) else {
            unreachable!("8x8 is a valid lattice");
        };
        let mut rng = Pcg32::new(77, DEFAULT_STREAM);
        lattice.populate(0.5, &mut rng, 0);
        let first = lattice.clone();
        lattice.populate(0.5, &mut rng, 0);
        let second = lattice.clone();

        let mut reference = Pcg32::new(77, DEFAULT_STREAM);
        for _ in 0..64 {
            reference.next_random();
        }
        let Ok(mut expected) = Lattice::allocate(8, 8) else {
            unreachable!("8x8 is a valid lattice");
        };
        expected.populate(0.5, &mut reference, 0);

        assert_ne!(first, second);
        assert_eq!(second, expected);
    }

    // Each site consumes exactly one draw and compares it with <=
    #[test]
    fn test_populate_matches_manual_sampling() {
        let Ok(mut lattice) = Lattice::allocate(5, 7) else {
            unreachable!("5x7 is a valid lattice");
        };
        let mut rng = Pcg32::from_seed_value(10);
        lattice.populate(0.3, &mut rng, 0);

        let mut reference = Pcg32::from_seed_value(10);
        let expected: Vec<u32> = (0..35)
            .map(|_| u32::from(reference.uniform() <= 0.3))
            .collect();

        assert_eq!(lattice.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_is_labeled_detects_transient_marker() {
        let (Ok(unlabeled), Ok(labeled)) = (
            Lattice::from_cells(1, 3, vec![0, 1, 2]),
            Lattice::from_cells(1, 3, vec![0, 2, 2]),
        ) else {
            unreachable!("three cells fit a 1x3 lattice");
        };

        assert!(!unlabeled.is_labeled());
        assert!(labeled.is_labeled());
    }

    #[test]
    fn test_render_without_borders() {
        let Ok(lattice) = Lattice::from_cells(2, 2, vec![0, 1, 2, 0]) else {
            unreachable!("four cells fit a 2x2 lattice");
        };

        assert_eq!(lattice.render(false), ". #\n2 .\n");
        assert_eq!(lattice.to_string(), ". #\n2 .\n");
    }

    #[test]
    fn test_render_with_borders_aligns_labels() {
        let mut cells = vec![12];
        cells.extend([0; 10]);
        let Ok(lattice) = Lattice::from_cells(1, 11, cells) else {
            unreachable!("eleven cells fit a 1x11 lattice");
        };

        let border = format!("+{}", "----+".repeat(11));
        let expected = format!("{border}\n| 12 |{}\n{border}\n", "  . |".repeat(10));
        assert_eq!(lattice.render(true), expected);
    }
}
