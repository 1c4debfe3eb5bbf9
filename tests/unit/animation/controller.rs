use super::*;

#[test]
fn snap_replaces_weights_and_goes_idle() {
    let mut anim = BorderAnimator::new();
    anim.animate_to_border_values(&[1.0, 1.0], 1.0, 0.0);
    anim.set_border_values(&[2.0, 3.0]);

    assert!(!anim.is_animating());
    assert_eq!(anim.border_values(), &[2.0, 3.0]);
    assert_eq!(anim.weights(0.5), vec![2.0, 3.0]);
}

#[test]
fn animate_with_zero_duration_equals_snap() {
    let mut snapped = BorderAnimator::new();
    snapped.set_border_values(&[1.0, 2.0]);

    let mut animated = BorderAnimator::new();
    animated.animate_to_border_values(&[1.0, 2.0], 0.0, 5.0);

    assert!(!animated.is_animating());
    assert_eq!(animated.border_values(), snapped.border_values());
    assert_eq!(animated.weights(5.0), snapped.weights(5.0));
}

#[test]
fn midpoint_of_shrinking_transition() {
    // From [1,1,1,1] toward [3,1]: the vanishing tail shrinks toward zero.
    let mut anim = BorderAnimator::new();
    anim.set_border_values(&[1.0, 1.0, 1.0, 1.0]);
    anim.animate_to_border_values(&[3.0, 1.0], 1.0, 0.0);

    assert_eq!(anim.weights(0.5), vec![2.0, 1.0, 0.5, 0.5]);
}

#[test]
fn appearing_segment_grows_from_zero() {
    let mut anim = BorderAnimator::new();
    anim.set_border_values(&[1.0, 1.0]);
    anim.animate_to_border_values(&[1.0, 1.0, 1.0], 1.0, 0.0);

    assert_eq!(anim.weights(0.0), vec![1.0, 1.0, 0.0]);
    assert_eq!(anim.weights(1.0), vec![1.0, 1.0, 1.0]);
}

#[test]
fn completed_transition_trims_to_target_length() {
    let mut anim = BorderAnimator::new();
    anim.set_border_values(&[1.0, 1.0, 1.0, 1.0]);
    anim.animate_to_border_values(&[3.0, 1.0], 1.0, 0.0);

    assert!(anim.tick(1.0));
    assert!(!anim.is_animating());
    assert_eq!(anim.border_values(), &[3.0, 1.0]);
    assert_eq!(anim.weights(1.0), vec![3.0, 1.0]);
    assert!(!anim.tick(1.1));
}

#[test]
fn replacement_renders_the_same_state_as_the_last_frame_before() {
    let mut anim = BorderAnimator::new();
    anim.set_border_values(&[1.0, 1.0, 1.0, 1.0]);
    anim.animate_to_border_values(&[3.0, 1.0], 1.0, 0.0);

    let before = anim.weights(0.25);
    anim.animate_to_border_values(&[0.0, 5.0, 5.0], 2.0, 0.25);
    assert_eq!(anim.weights(0.25), before);
}

#[test]
fn invalid_weights_are_coerced_to_zero() {
    let mut anim = BorderAnimator::new();
    anim.set_border_values(&[2.0, f64::NAN, -1.0, 3.0]);
    assert_eq!(anim.border_values(), &[2.0, 0.0, 0.0, 3.0]);

    let mut anim = BorderAnimator::new();
    anim.set_border_values(&[f64::INFINITY]);
    assert_eq!(anim.border_values(), &[0.0]);
}

#[test]
fn border_width_snaps_stroke_width() {
    let mut anim = BorderAnimator::new();
    anim.animate_to_stroke_width(20.0, 1.0, 0.0);
    anim.set_border_width(7.5);

    assert_eq!(anim.border_width(), 7.5);
    assert_eq!(anim.stroke_width(0.5), 7.5);
    assert!(!anim.is_animating());
}

#[test]
fn stroke_width_snap_leaves_border_width_alone() {
    let mut anim = BorderAnimator::new();
    anim.set_border_width(10.0);
    anim.set_border_stroke_width(2.0);

    assert_eq!(anim.border_width(), 10.0);
    assert_eq!(anim.stroke_width(0.0), 2.0);
}

#[test]
fn stroke_width_transition_completes_exactly() {
    let mut anim = BorderAnimator::new();
    anim.set_border_width(10.0);
    anim.animate_to_stroke_width(0.3, 1.0, 0.0);

    assert!((anim.stroke_width(0.5) - 5.15).abs() < 1e-12);
    assert!(anim.tick(1.0));
    // Completion lands on the target bitwise, not a lerp one rounding step away.
    assert_eq!(anim.stroke_width(1.0), 0.3);
}

#[test]
fn tracks_progress_independently() {
    let mut anim = BorderAnimator::new();
    anim.set_border_width(10.0);
    anim.set_border_values(&[1.0, 3.0]);
    anim.animate_to_border_values(&[3.0, 1.0], 0.5, 0.0);
    anim.animate_to_stroke_width(0.0, 0.5, 0.0);

    // Both tracks at their eased midpoint.
    assert_eq!(anim.weights(0.25), vec![2.0, 2.0]);
    assert_eq!(anim.stroke_width(0.25), 5.0);

    // Snapping one track does not disturb the other.
    anim.set_border_values(&[9.0]);
    assert!(anim.is_animating());
    assert_eq!(anim.stroke_width(0.25), 5.0);
}

#[test]
fn tick_reports_one_redraw_while_any_track_advances() {
    let mut anim = BorderAnimator::new();
    assert!(!anim.tick(0.0));

    anim.animate_to_border_values(&[1.0], 1.0, 0.0);
    anim.animate_to_stroke_width(5.0, 2.0, 0.0);
    assert!(anim.tick(0.5));
    assert!(anim.tick(1.0));
    // Weights done at 1.0; the stroke track still runs.
    assert!(anim.is_animating());
    assert!(anim.tick(2.0));
    assert!(!anim.tick(2.1));
}
