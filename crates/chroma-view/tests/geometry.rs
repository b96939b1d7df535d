// File: crates/chroma-view/tests/geometry.rs
// Purpose: Validate plot-rectangle insets and sample-to-pixel mapping.

use chroma_view::PlotRect;

#[test]
fn inset_by_padding_on_all_sides() {
    let rect = PlotRect::inset(1000.0, 800.0, 80.0);
    assert_eq!(rect.left, 80.0);
    assert_eq!(rect.top, 80.0);
    assert_eq!(rect.right, 920.0);
    assert_eq!(rect.bottom, 720.0);
    assert_eq!(rect.width(), 840.0);
    assert_eq!(rect.height(), 640.0);
}

#[test]
fn max_value_maps_to_top_edge_and_zero_to_bottom() {
    let rect = PlotRect::inset(1000.0, 800.0, 80.0);
    assert_eq!(rect.value_y(100.0, 100.0), rect.top);
    assert_eq!(rect.value_y(0.0, 100.0), rect.bottom);
    // Half the ceiling sits midway between top and bottom
    assert_eq!(rect.value_y(50.0, 100.0), (rect.top + rect.bottom) / 2.0);
}

#[test]
fn samples_divide_the_width_into_equal_segments() {
    let rect = PlotRect::inset(1000.0, 800.0, 80.0);
    assert_eq!(rect.sample_x(0, 3), 80.0);
    assert_eq!(rect.sample_x(1, 3), 500.0);
    assert_eq!(rect.sample_x(2, 3), 920.0);

    // First and last samples always land on the plot's edges
    assert_eq!(rect.sample_x(0, 7), rect.left);
    assert_eq!(rect.sample_x(6, 7), rect.right);
}

#[test]
fn origin_is_the_bottom_left_corner() {
    let rect = PlotRect::inset(1000.0, 800.0, 80.0);
    let origin = rect.origin();
    assert_eq!(origin.x, rect.left);
    assert_eq!(origin.y, rect.bottom);
}
