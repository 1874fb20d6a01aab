use super::*;

/// Deterministic "rng" cycling through a fixed sample list.
fn cycle(samples: &[f64]) -> impl FnMut() -> f64 + '_ {
    let mut i = 0;
    move || {
        let v = samples[i % samples.len()];
        i += 1;
        v
    }
}

fn field_with(samples: &[f64], width: f64, height: f64) -> ParticleField<()> {
    let mut field = ParticleField::new();
    let mut rng = cycle(samples);
    field.regenerate(width, height, &mut rng, |_, _, _| ());
    field
}

// --- particle_count ---

#[test]
fn count_scales_with_viewport_width() {
    assert_eq!(particle_count(300.0), 10);
    assert_eq!(particle_count(899.0), 29);
}

#[test]
fn count_is_capped() {
    assert_eq!(particle_count(3000.0), 50);
    assert_eq!(particle_count(1e9), 50);
}

#[test]
fn count_of_tiny_viewport_is_zero() {
    assert_eq!(particle_count(0.0), 0);
    assert_eq!(particle_count(29.0), 0);
}

// --- regenerate ---

#[test]
fn regenerate_discards_previous_batch() {
    let mut field = field_with(&[0.5], 900.0, 600.0);
    assert_eq!(field.len(), 30);

    let mut rng = cycle(&[0.5]);
    field.regenerate(300.0, 600.0, &mut rng, |_, _, _| ());
    assert_eq!(field.len(), 10);
}

#[test]
fn regenerate_samples_within_viewport_and_size_range() {
    let field = field_with(&[0.0, 0.25, 0.5, 0.75, 0.99], 1200.0, 800.0);
    assert!(!field.is_empty());
    for p in field.particles() {
        assert!((2.0..6.0).contains(&p.size));
        assert!((0.0..1200.0).contains(&p.x));
        assert!((0.0..800.0).contains(&p.y));
        assert!((-0.25..0.25).contains(&p.vx));
        assert!((-0.25..0.25).contains(&p.vy));
    }
}

#[test]
fn spawn_sees_sampled_size_and_position() {
    let mut field = ParticleField::new();
    let mut rng = cycle(&[0.5]);
    let mut spawned = Vec::new();
    field.regenerate(60.0, 100.0, &mut rng, |size, x, y| {
        spawned.push((size, x, y));
    });
    assert_eq!(spawned.len(), 2);
    for &(size, x, y) in &spawned {
        assert_eq!(size, 4.0);
        assert_eq!(x, 30.0);
        assert_eq!(y, 50.0);
    }
}

// --- step / wraparound ---

#[test]
fn step_advances_by_velocity() {
    let mut field = ParticleField::<()>::new();
    let mut rng = cycle(&[0.5, 0.3, 0.6, 0.9, 0.2]);
    field.regenerate(600.0, 400.0, &mut rng, |_, _, _| ());

    let before: Vec<(f64, f64, f64, f64)> =
        field.particles().iter().map(|p| (p.x, p.y, p.vx, p.vy)).collect();

    let mut after = Vec::new();
    field.step(|(), x, y| after.push((x, y)));

    for ((x0, y0, vx, vy), (x1, y1)) in before.into_iter().zip(after) {
        assert_eq!(x1, x0 + vx);
        assert_eq!(y1, y0 + vy);
    }
}

#[test]
fn positions_stay_in_wrap_range_over_many_steps() {
    let mut field = ParticleField::<()>::new();
    let mut rng = cycle(&[0.07, 0.93, 0.42, 0.88, 0.13]);
    field.regenerate(90.0, 90.0, &mut rng, |_, _, _| ());
    assert!(!field.is_empty());

    for _ in 0..10_000 {
        field.step(|(), _, _| {});
    }
    for p in field.particles() {
        assert!(p.x >= -p.size && p.x <= 90.0, "x out of range: {}", p.x);
        assert!(p.y >= -p.size && p.y <= 90.0, "y out of range: {}", p.y);
    }
}

#[test]
fn exceeding_the_right_edge_wraps_to_minus_size() {
    let mut field = ParticleField::<()>::new();
    // One particle (width 30..60 yields 1): size 4, placed at x = 0.99 * 30,
    // moving right at near-max speed.
    let samples = [0.5, 0.99, 0.5, 1.0 - f64::EPSILON, 0.5];
    let mut rng = cycle(&samples);
    field.regenerate(30.0, 30.0, &mut rng, |_, _, _| ());
    assert_eq!(field.len(), 1);

    let (vx, size) = {
        let p = &field.particles()[0];
        (p.vx, p.size)
    };
    assert!(vx > 0.0);

    // March until the particle crosses the right edge.
    let mut wrapped = false;
    let mut last_x = field.particles()[0].x;
    for _ in 0..1000 {
        field.step(|(), _, _| {});
        let p = &field.particles()[0];
        assert_eq!(p.vx, vx, "wrap must preserve velocity");
        if p.x < last_x {
            assert_eq!(p.x, -size);
            wrapped = true;
            break;
        }
        last_x = p.x;
    }
    assert!(wrapped, "particle never wrapped");
}

#[test]
fn exceeding_the_left_edge_wraps_to_bound() {
    let mut field = ParticleField::<()>::new();
    // One particle near the left edge moving left.
    let samples = [0.5, 0.001, 0.5, 0.0, 0.5];
    let mut rng = cycle(&samples);
    field.regenerate(30.0, 30.0, &mut rng, |_, _, _| ());
    assert_eq!(field.len(), 1);

    let vx = field.particles()[0].vx;
    assert!(vx < 0.0);

    let mut wrapped = false;
    let mut last_x = field.particles()[0].x;
    for _ in 0..1000 {
        field.step(|(), _, _| {});
        let p = &field.particles()[0];
        if p.x > last_x {
            assert_eq!(p.x, 30.0);
            wrapped = true;
            break;
        }
        last_x = p.x;
    }
    assert!(wrapped, "particle never wrapped");
}

#[test]
fn empty_field_steps_without_effect() {
    let mut field = ParticleField::<()>::new();
    let mut called = false;
    field.step(|(), _, _| called = true);
    assert!(!called);
}
