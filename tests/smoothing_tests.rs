use lanyard::{LanyardError, LinkSmoother, SmoothingConfig, Vec3};

const DT: f32 = 1.0 / 60.0;

#[test]
fn first_touch_snaps_to_target() {
    let mut smoother: LinkSmoother<f32> = LinkSmoother::new(SmoothingConfig::new());
    assert_eq!(smoother.smoothed(0), None);

    let target = Vec3::new(1.0, 2.0, 3.0);
    let out = smoother.update(0, target, DT);
    assert_eq!(out, target);
    assert_eq!(smoother.smoothed(0), Some(target));
}

#[test]
fn slots_are_independent() {
    let mut smoother: LinkSmoother<f32> = LinkSmoother::new(SmoothingConfig::new());
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 5.0, 0.0);
    smoother.update(0, a, DT);
    smoother.update(1, b, DT);
    assert_eq!(smoother.smoothed(0), Some(a));
    assert_eq!(smoother.smoothed(1), Some(b));
}

#[test]
fn converges_monotonically_to_fixed_target() {
    // Deterministic pseudo-random initial offsets within a couple of
    // units of the target; every run must close the gap strictly each
    // frame and converge within a bounded number of frames.
    let target = Vec3::new(0.5f32, 3.0, -0.2);
    let mut seed: u32 = 0x1234_5678;
    let mut next = || {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (seed >> 8) as f32 / (1u32 << 24) as f32 * 4.0 - 2.0
    };

    for _ in 0..20 {
        let start = target + Vec3::new(next(), next(), next());
        let mut smoother: LinkSmoother<f32> = LinkSmoother::new(SmoothingConfig::new());
        smoother.update(0, start, DT); // initialize at the offset position

        let mut dist = start.distance(target);
        let mut converged = false;
        for _ in 0..600 {
            let out = smoother.update(0, target, DT);
            let new_dist = out.distance(target);
            if dist > 1e-6 {
                assert!(
                    new_dist < dist,
                    "distance should strictly decrease: {} -> {}",
                    dist,
                    new_dist,
                );
            }
            dist = new_dist;
            if dist < 1e-3 {
                converged = true;
                break;
            }
        }
        assert!(converged, "did not converge within 600 frames (dist {})", dist);
    }
}

#[test]
fn blend_factor_is_clamped() {
    let config: SmoothingConfig<f32> = SmoothingConfig::new();
    let lo = config.min_speed * DT;
    let hi = config.max_speed * DT;

    // Zero distance clamps up to the 0.1 floor; huge distance clamps to 1.
    for distance in [0.0f32, 0.05, 0.1, 0.5, 1.0, 3.0, 1000.0] {
        let factor = config.blend_factor(distance, DT);
        assert!(
            factor >= lo - 1e-6 && factor <= hi + 1e-6,
            "factor {} outside [{}, {}] for distance {}",
            factor,
            lo,
            hi,
            distance,
        );
    }

    assert!(config.blend_factor(1000.0, DT) > config.blend_factor(0.0, DT));
}

#[test]
fn far_targets_close_faster_than_near_ones() {
    let config: SmoothingConfig<f32> = SmoothingConfig::new();
    let near = config.blend_factor(0.15, DT);
    let far = config.blend_factor(0.9, DT);
    assert!(far > near);
}

#[test]
fn reset_forgets_lagged_positions() {
    let mut smoother: LinkSmoother<f32> = LinkSmoother::new(SmoothingConfig::new());
    smoother.update(0, Vec3::new(1.0, 1.0, 1.0), DT);
    smoother.reset();
    assert_eq!(smoother.smoothed(0), None);

    // Next touch re-initializes rather than lerping from stale state.
    let fresh = Vec3::new(9.0, 9.0, 9.0);
    assert_eq!(smoother.update(0, fresh, DT), fresh);
}

#[test]
fn invalid_speed_ranges_are_rejected() {
    let swapped: SmoothingConfig<f32> = SmoothingConfig::new().with_speeds(50.0, 10.0);
    assert_eq!(swapped.validate(), Err(LanyardError::InvalidSmoothingSpeeds));

    let zero_min: SmoothingConfig<f32> = SmoothingConfig::new().with_speeds(0.0, 10.0);
    assert_eq!(zero_min.validate(), Err(LanyardError::InvalidSmoothingSpeeds));

    assert!(SmoothingConfig::<f32>::new().validate().is_ok());
}
