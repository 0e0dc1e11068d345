//! Edge case tests for boundary conditions and unusual inputs.
//!
//! Tests cover:
//! - Smallest plots
//! - Malformed matrices
//! - Masks wider than the plot

use ndarray::Array2;
use rqa_border::lines::{CorrectionPolicy, LineConfig, Traversal, diagonal_lines};
use rqa_border::{Error, RecurrencePlot};

#[test]
fn single_cell_plot_has_no_lines() {
    let rp = RecurrencePlot::new(Array2::from_elem((1, 1), true)).unwrap();
    for policy in CorrectionPolicy::all(0) {
        let lines = diagonal_lines(&rp, policy, &LineConfig::default());
        assert!(lines.is_empty());
        assert_eq!(lines.distribution().counts(), &[0]);
    }
}

#[test]
fn two_by_two_plot() {
    let rp = RecurrencePlot::new(Array2::from_elem((2, 2), true)).unwrap();
    let lines = diagonal_lines(&rp, CorrectionPolicy::Conventional, &LineConfig::default());
    assert_eq!(lines.as_slice(), &[1, 1]);
}

#[test]
fn non_square_matrix_rejected() {
    let err = RecurrencePlot::new(Array2::from_elem((3, 5), false)).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn non_binary_matrix_rejected() {
    let m = Array2::from_shape_vec((2, 2), vec![1.0f32, 2.0, 0.0, 1.0]).unwrap();
    assert!(matches!(
        RecurrencePlot::from_binary(&m),
        Err(Error::NonBinary { row: 0, col: 1, .. })
    ));
}

#[test]
fn diagonal_offset_out_of_range() {
    let rp = RecurrencePlot::new(Array2::from_elem((3, 3), true)).unwrap();
    assert!(matches!(
        rp.diagonal(-3),
        Err(Error::InvalidOffset { offset: -3, size: 3 })
    ));
}

#[test]
fn mask_wider_than_plot_accepts_nothing() {
    let rp = RecurrencePlot::new(Array2::from_elem((6, 6), true)).unwrap();
    for width in [3, 4, 100, usize::MAX] {
        let lines = diagonal_lines(
            &rp,
            CorrectionPolicy::WindowMasking { width },
            &LineConfig::default(),
        );
        assert!(lines.is_empty());
    }
}

#[test]
fn asymmetric_plot_is_not_mirrored() {
    let m = Array2::from_shape_fn((4, 4), |(i, j)| i >= j);
    let rp = RecurrencePlot::new(m).unwrap();
    let config = LineConfig::new().with_traversal(Traversal::Auto);
    let lines = diagonal_lines(&rp, CorrectionPolicy::Conventional, &config);
    assert_eq!(lines.as_slice(), &[3, 2, 1]);
}

#[test]
fn error_messages_are_descriptive() {
    let err = "sideways".parse::<rqa_border::lines::BorderMode>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("border_mode"));
    assert!(msg.contains("sideways"));
}
