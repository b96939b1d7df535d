// File: crates/chroma-view/tests/paint_calls.rs
// Purpose: Validate which paint calls a render pass issues, per data length.

use chroma_view::{ChartView, Color, DrawCommand, RecordingCanvas};

const WIDTH: f32 = 1000.0;
const HEIGHT: f32 = 800.0;

fn lines(canvas: &RecordingCanvas) -> Vec<&DrawCommand> {
    canvas
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .collect()
}

fn circles(canvas: &RecordingCanvas) -> Vec<&DrawCommand> {
    canvas
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { .. }))
        .collect()
}

fn texts(canvas: &RecordingCanvas) -> Vec<&DrawCommand> {
    canvas
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Text { .. }))
        .collect()
}

#[test]
fn empty_data_paints_axes_and_grid_only() {
    let view = ChartView::new();
    let mut canvas = RecordingCanvas::new();
    view.paint(&mut canvas, WIDTH, HEIGHT);

    let step = view.style().grid_step as usize;
    // 2 axis lines + one grid line per division, no data layer
    assert_eq!(lines(&canvas).len(), 2 + step);
    assert_eq!(texts(&canvas).len(), step);
    assert!(circles(&canvas).is_empty());
}

#[test]
fn single_sample_draws_no_data_layer() {
    let mut view = ChartView::new();
    view.set_data(vec![42.0]);
    let mut canvas = RecordingCanvas::new();
    view.paint(&mut canvas, WIDTH, HEIGHT);

    let step = view.style().grid_step as usize;
    assert_eq!(lines(&canvas).len(), 2 + step);
    assert!(circles(&canvas).is_empty());
}

#[test]
fn n_samples_paint_n_markers_and_n_minus_1_segments() {
    for n in [2usize, 3, 7, 50] {
        let mut view = ChartView::new();
        view.set_data((0..n).map(|i| i as f32).collect());
        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas, WIDTH, HEIGHT);

        let step = view.style().grid_step as usize;
        assert_eq!(circles(&canvas).len(), n, "markers for n={n}");
        assert_eq!(
            lines(&canvas).len(),
            2 + step + (n - 1),
            "axes + grid + segments for n={n}"
        );
    }
}

#[test]
fn three_sample_ramp_lands_on_plot_corners_and_center() {
    // 1000x800 surface, padding 80, step 5, max 100, data [0, 50, 100]
    let mut view = ChartView::new();
    view.set_data(vec![0.0, 50.0, 100.0]);
    let mut canvas = RecordingCanvas::new();
    view.paint(&mut canvas, WIDTH, HEIGHT);

    let got: Vec<(f32, f32)> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { center, .. } => Some((center.x, center.y)),
            _ => None,
        })
        .collect();

    // Plot rect spans X:[80,920], Y:[80,720]; middle sample midway vertically
    assert_eq!(got, vec![(80.0, 720.0), (500.0, 400.0), (920.0, 80.0)]);
}

#[test]
fn changing_line_color_retargets_only_that_paint() {
    let mut view = ChartView::new();
    view.set_data(vec![0.0, 50.0, 100.0]);

    let mut before = RecordingCanvas::new();
    view.paint(&mut before, WIDTH, HEIGHT);

    view.set_line_color(Color::GREEN);
    assert_eq!(view.line_paint().color, Color::GREEN);
    assert_eq!(view.axis_paint().color, Color::BLACK);
    assert_eq!(view.point_paint().color, Color::RED);

    let mut after = RecordingCanvas::new();
    view.paint(&mut after, WIDTH, HEIGHT);

    assert_eq!(before.command_count(), after.command_count());
    for (a, b) in before.commands().iter().zip(after.commands()) {
        match (a, b) {
            (
                DrawCommand::Line {
                    from: f1,
                    to: t1,
                    paint: p1,
                },
                DrawCommand::Line {
                    from: f2,
                    to: t2,
                    paint: p2,
                },
            ) => {
                // Geometry never moves; only the data-line color differs
                assert_eq!(f1, f2);
                assert_eq!(t1, t2);
                if p1.color != p2.color {
                    assert_eq!(p1.color, Color::BLUE);
                    assert_eq!(p2.color, Color::GREEN);
                }
            }
            _ => assert_eq!(a, b),
        }
    }
}
