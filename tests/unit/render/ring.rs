use super::*;
use crate::foundation::core::{Bitmap, Point, Rgba8};
use crate::render::recording::{RecordingSurface, SurfaceCommand};
use crate::render::surface::Cap;
use std::f64::consts::{FRAC_PI_2, PI};

fn frame<'a>(weights: &'a [f64], colors: &'a [Rgba8]) -> RingFrame<'a> {
    RingFrame {
        weights,
        colors,
        center: Point::new(50.0, 50.0),
        outer_radius: 50.0,
        border_width: 10.0,
        stroke_width: 10.0,
        avatar: None,
    }
}

const RED: Rgba8 = Rgba8::rgb(255, 0, 0);
const GREEN: Rgba8 = Rgba8::rgb(0, 255, 0);
const BLUE: Rgba8 = Rgba8::rgb(0, 0, 255);
const YELLOW: Rgba8 = Rgba8::rgb(255, 255, 0);

#[test]
fn four_equal_segments_stroke_four_quarter_arcs() {
    let weights = [1.0, 1.0, 1.0, 1.0];
    let colors = [RED, GREEN, BLUE, YELLOW];
    let mut surface = RecordingSurface::new();
    render_ring(&frame(&weights, &colors), &mut surface).unwrap();

    let arcs: Vec<_> = surface.arcs().collect();
    assert_eq!(arcs.len(), 4);
    for (i, arc) in arcs.iter().enumerate() {
        assert_eq!(arc.center, Point::new(50.0, 50.0));
        assert_eq!(arc.radius, 45.0);
        assert_eq!(arc.width, 10.0);
        assert_eq!(arc.cap, Cap::Butt);
        assert_eq!(arc.color, colors[i]);
        assert!((arc.end_angle - arc.start_angle - FRAC_PI_2).abs() < 1e-12);
    }
    assert_eq!(arcs[0].start_angle, -FRAC_PI_2);
    assert_eq!(arcs[3].end_angle, -FRAC_PI_2 + 2.0 * PI);
}

#[test]
fn colors_wrap_around_with_modular_indexing() {
    let weights = [1.0, 1.0, 1.0, 1.0];
    let colors = [RED, BLUE];
    let mut surface = RecordingSurface::new();
    render_ring(&frame(&weights, &colors), &mut surface).unwrap();

    let got: Vec<_> = surface.arcs().map(|a| a.color).collect();
    assert_eq!(got, vec![RED, BLUE, RED, BLUE]);
}

#[test]
fn zero_length_spans_are_not_stroked() {
    let weights = [1.0, 0.0, 1.0];
    let colors = [RED, GREEN, BLUE];
    let mut surface = RecordingSurface::new();
    render_ring(&frame(&weights, &colors), &mut surface).unwrap();

    let got: Vec<_> = surface.arcs().map(|a| a.color).collect();
    assert_eq!(got, vec![RED, BLUE]);
}

#[test]
fn ring_is_skipped_without_colors_or_stroke_or_radius() {
    let weights = [1.0, 1.0];

    let mut surface = RecordingSurface::new();
    render_ring(&frame(&weights, &[]), &mut surface).unwrap();
    assert_eq!(surface.commands().len(), 0);

    let mut f = frame(&weights, &[RED]);
    f.stroke_width = 0.0;
    let mut surface = RecordingSurface::new();
    render_ring(&f, &mut surface).unwrap();
    assert_eq!(surface.commands().len(), 0);

    let mut f = frame(&weights, &[RED]);
    f.outer_radius = 5.0;
    let mut surface = RecordingSurface::new();
    render_ring(&f, &mut surface).unwrap();
    assert_eq!(surface.commands().len(), 0);
}

#[test]
fn zero_sum_weights_hide_the_ring() {
    let mut surface = RecordingSurface::new();
    render_ring(&frame(&[0.0, 0.0], &[RED]), &mut surface).unwrap();
    assert_eq!(surface.commands().len(), 0);
}

#[test]
fn avatar_is_clipped_inside_the_border() {
    let avatar = Bitmap::solid(80, 80, Rgba8::rgb(90, 90, 90));
    let weights = [1.0];
    let mut f = frame(&weights, &[RED]);
    f.avatar = Some(&avatar);

    let mut surface = RecordingSurface::new();
    render_ring(&f, &mut surface).unwrap();

    let clips: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            SurfaceCommand::DrawBitmapInCircle { center, radius, .. } => Some((*center, *radius)),
            SurfaceCommand::StrokeArc(_) => None,
        })
        .collect();
    assert_eq!(clips, vec![(Point::new(50.0, 50.0), 40.0)]);
}

#[test]
fn avatar_is_skipped_when_the_border_leaves_no_room() {
    let avatar = Bitmap::solid(8, 8, Rgba8::rgb(90, 90, 90));
    let weights = [1.0];
    let mut f = frame(&weights, &[RED]);
    f.outer_radius = 4.0;
    f.border_width = 4.0;
    f.avatar = Some(&avatar);

    let mut surface = RecordingSurface::new();
    render_ring(&f, &mut surface).unwrap();

    // Centerline radius 2 is still strokable; the clip disk has radius 0 and is dropped.
    assert_eq!(surface.arcs().count(), 1);
    assert_eq!(surface.commands().len(), 1);
}
