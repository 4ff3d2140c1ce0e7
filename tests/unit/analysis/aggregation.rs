//! Tests for histogram aggregation across realizations

#[cfg(test)]
mod tests {
    use percolation::algorithm::labeling::label_clusters;
    use percolation::analysis::aggregation::{HistogramAccumulator, aggregate_statistics};
    use percolation::analysis::statistics::{ClusterHistogram, SizeBin, cluster_statistics};
    use percolation::math::random::Pcg32;
    use percolation::spatial::Lattice;

    fn histogram(entries: &[(usize, usize, usize)]) -> ClusterHistogram {
        let mut histogram = ClusterHistogram::new();
        for &(size, count, percolated) in entries {
            histogram.add(size, SizeBin { count, percolated });
        }
        histogram
    }

    #[test]
    fn test_aggregate_sums_shared_sizes_and_inserts_new_ones() {
        let mut into = histogram(&[(1, 4, 0), (5, 1, 1)]);
        let from = histogram(&[(1, 2, 0), (3, 1, 0), (5, 2, 1)]);

        aggregate_statistics(&mut into, &from);

        assert_eq!(into, histogram(&[(1, 6, 0), (3, 1, 0), (5, 3, 2)]));
    }

    #[test]
    fn test_aggregate_with_empty_histograms() {
        let data = histogram(&[(2, 1, 0), (7, 3, 1)]);

        let mut into = data.clone();
        aggregate_statistics(&mut into, &ClusterHistogram::new());
        assert_eq!(into, data);

        let mut empty = ClusterHistogram::new();
        aggregate_statistics(&mut empty, &data);
        assert_eq!(empty, data);
    }

    // Aggregation order does not change the result
    #[test]
    fn test_aggregate_is_order_independent() {
        let a = histogram(&[(1, 3, 0), (4, 1, 1)]);
        let b = histogram(&[(2, 2, 0), (4, 2, 0)]);
        let c = histogram(&[(1, 1, 0), (9, 1, 1)]);

        let mut forward = ClusterHistogram::new();
        for part in [&a, &b, &c] {
            aggregate_statistics(&mut forward, part);
        }

        let mut nested = c.clone();
        let mut ab = b.clone();
        aggregate_statistics(&mut ab, &a);
        aggregate_statistics(&mut nested, &ab);

        assert_eq!(forward, nested);
    }

    #[test]
    fn test_accumulator_counts_realizations() {
        let mut rng = Pcg32::from_seed_value(4);
        let mut accumulator = HistogramAccumulator::new();
        let mut expected = ClusterHistogram::new();
        let mut percolating = 0;

        for _ in 0..10 {
            let Ok(mut lattice) = Lattice::allocate(8, 8) else {
                unreachable!("8x8 is a valid lattice");
            };
            lattice.populate(0.6, &mut rng, 0);
            label_clusters(&mut lattice);
            let statistics = cluster_statistics(&lattice, false);

            if statistics.percolated() {
                percolating += 1;
            }
            aggregate_statistics(&mut expected, &statistics.histogram);
            accumulator.record(&statistics);
        }

        assert_eq!(accumulator.realizations(), 10);
        assert_eq!(accumulator.percolating_realizations(), percolating);
        assert_eq!(accumulator.histogram(), &expected);
    }

    #[test]
    fn test_accumulator_merge_and_reset() {
        let mut rng = Pcg32::from_seed_value(9);
        let mut whole = HistogramAccumulator::new();
        let mut left = HistogramAccumulator::new();
        let mut right = HistogramAccumulator::new();

        for index in 0..6 {
            let Ok(mut lattice) = Lattice::allocate(6, 6) else {
                unreachable!("6x6 is a valid lattice");
            };
            lattice.populate(0.55, &mut rng, 0);
            label_clusters(&mut lattice);
            let statistics = cluster_statistics(&lattice, false);

            whole.record(&statistics);
            if index % 2 == 0 {
                left.record(&statistics);
            } else {
                right.record(&statistics);
            }
        }

        left.merge(&right);
        assert_eq!(left.histogram(), whole.histogram());
        assert_eq!(left.realizations(), whole.realizations());
        assert_eq!(
            left.percolating_realizations(),
            whole.percolating_realizations()
        );

        left.reset();
        assert_eq!(left.realizations(), 0);
        assert!(left.into_histogram().is_empty());
    }
}
