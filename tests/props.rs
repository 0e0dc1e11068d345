use ndarray::Array2;
use proptest::prelude::*;
use rqa_border::RecurrencePlot;
use rqa_border::lines::{
    BorderClass, BorderMode, CorrectionPolicy, LineConfig, Traversal, Triangle, collect_lines,
    diagonal, diagonal_lines,
};

fn plot_from_bits(n: usize, bits: &[bool], symmetric: bool) -> RecurrencePlot {
    let matrix = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            true
        } else if symmetric {
            bits[i.min(j) * n + i.max(j)]
        } else {
            bits[i * n + j]
        }
    });
    RecurrencePlot::new(matrix).unwrap()
}

fn plot_strategy(symmetric: bool) -> impl Strategy<Value = RecurrencePlot> {
    (1usize..14).prop_flat_map(move |n| {
        proptest::collection::vec(proptest::bool::weighted(0.6), n * n)
            .prop_map(move |bits| plot_from_bits(n, &bits, symmetric))
    })
}

fn any_plot() -> impl Strategy<Value = RecurrencePlot> {
    prop_oneof![plot_strategy(true), plot_strategy(false)]
}

fn mode_strategy() -> impl Strategy<Value = BorderMode> {
    prop_oneof![Just(BorderMode::Normal), Just(BorderMode::Semi)]
}

proptest! {
    #[test]
    fn conventional_count_bounds_every_policy(rp in any_plot(), mode in mode_strategy(), width in 0usize..4) {
        let config = LineConfig::new().with_border_mode(mode);
        let conventional = diagonal_lines(&rp, CorrectionPolicy::Conventional, &config);
        for policy in CorrectionPolicy::all(width) {
            let lines = diagonal_lines(&rp, policy, &config);
            prop_assert!(lines.len() <= conventional.len(), "{} exceeded conventional", policy);
        }
    }

    #[test]
    fn dibo_normal_is_conventional_without_both_border(rp in any_plot()) {
        let config = LineConfig::new().with_traversal(Traversal::Full);
        let mut expected: Vec<usize> = [Triangle::Lower, Triangle::Upper]
            .into_iter()
            .flat_map(|t| collect_lines(&rp, t))
            .filter(|line| line.border_class() != BorderClass::BothBorder)
            .map(|line| line.length())
            .collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        let dibo = diagonal_lines(&rp, CorrectionPolicy::DiscardBorder, &config);
        prop_assert_eq!(dibo.as_slice(), expected.as_slice());
    }

    #[test]
    fn window_masking_bounds_line_length(rp in any_plot(), width in 1usize..4) {
        let n = rp.size();
        let config = LineConfig::default();
        let masked = diagonal_lines(&rp, CorrectionPolicy::WindowMasking { width }, &config);
        let conventional = diagonal_lines(&rp, CorrectionPolicy::Conventional, &config);
        if let Some(max) = masked.max() {
            prop_assert!(max <= n.saturating_sub(2 * width));
            if let Some(conv_max) = conventional.max() {
                if conv_max > n - 2 * width {
                    prop_assert!(max < conv_max);
                }
            }
        }
    }

    #[test]
    fn policies_are_deterministic(rp in any_plot(), mode in mode_strategy()) {
        let config = LineConfig::new().with_border_mode(mode);
        for policy in CorrectionPolicy::all(2) {
            prop_assert_eq!(diagonal_lines(&rp, policy, &config), diagonal_lines(&rp, policy, &config));
        }
    }

    #[test]
    fn mirrored_traversal_matches_full(rp in plot_strategy(true), mode in mode_strategy()) {
        let auto = LineConfig::new().with_border_mode(mode);
        let full = auto.clone().with_traversal(Traversal::Full);
        for policy in CorrectionPolicy::all(1) {
            prop_assert_eq!(diagonal_lines(&rp, policy, &auto), diagonal_lines(&rp, policy, &full));
        }
    }

    #[test]
    fn distribution_total_matches_accepted_lines(rp in any_plot(), mode in mode_strategy()) {
        let config = LineConfig::new().with_border_mode(mode);
        let runs = collect_lines(&rp, Triangle::Lower).len() + collect_lines(&rp, Triangle::Upper).len();
        for policy in CorrectionPolicy::all(1) {
            let lines = diagonal_lines(&rp, policy, &config);
            let dist = lines.distribution();
            prop_assert_eq!(dist.total(), lines.len());
            prop_assert!(dist.total() <= runs);
            prop_assert!(lines.as_slice().iter().all(|&l| l >= 1 && l <= rp.size()));
        }
    }

    #[test]
    fn direct_diagonal_view_matches_index_walk(rp in any_plot()) {
        let n = rp.size() as isize;
        for k in (1 - n)..n {
            prop_assert_eq!(rp.diagonal(k).unwrap().to_vec(), diagonal(&rp, k).unwrap());
        }
    }
}
