use super::*;

#[test]
fn gaussian_divisor_equals_weight_sum() {
    let sum: i32 = GAUSSIAN_5X5
        .weights
        .iter()
        .flat_map(|row| row.iter())
        .sum();
    assert_eq!(sum, GAUSSIAN_5X5.divisor);
}

#[test]
fn sobel_weights_sum_to_zero() {
    for kernel in [SOBEL_X, SOBEL_Y] {
        let sum: i32 = kernel.weights.iter().flat_map(|row| row.iter()).sum();
        assert_eq!(sum, 0);
    }
}

#[test]
fn accumulate_full_window() {
    // 3x3 plane of ones under SOBEL_X: every weight sampled exactly once.
    let plane = [1u8; 9];
    let sum = SOBEL_X.accumulate(&plane, 3, 3, 1, 1);
    assert_eq!(sum, 0);

    // Column gradient: left column 0, right column 2.
    let plane = [0u8, 1, 2, 0, 1, 2, 0, 1, 2];
    let sum = SOBEL_X.accumulate(&plane, 3, 3, 1, 1);
    assert_eq!(sum, (1 + 2 + 1) * 2);
}

#[test]
fn accumulate_drops_out_of_range_neighbors() {
    // 1x1 plane: only the center weight contributes.
    let plane = [7u8];
    assert_eq!(GAUSSIAN_5X5.accumulate(&plane, 1, 1, 0, 0), 41 * 7);
    assert_eq!(SOBEL_X.accumulate(&plane, 1, 1, 0, 0), 0);

    // Top-left corner of a larger plane: only the bottom-right quadrant of
    // the window is in range.
    let plane = [1u8; 25];
    let expected: i32 = (0..=2)
        .flat_map(|s| (0..=2).map(move |t| GAUSSIAN_5X5.weights[s + 2][t + 2]))
        .sum();
    assert_eq!(GAUSSIAN_5X5.accumulate(&plane, 5, 5, 0, 0), expected);
}
