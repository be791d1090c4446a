use lanyard::{
    Band, BandConfig, Camera, FrameObserver, LanyardError, NoOpFrameObserver, PhysicsWorld,
    Vec3, WorldConfig,
};

const DT: f32 = 1.0 / 60.0;

#[derive(Default)]
struct PhaseRecorder {
    phases: Vec<&'static str>,
}

impl FrameObserver for PhaseRecorder {
    fn on_drag_applied(&mut self) {
        self.phases.push("drag");
    }
    fn on_links_smoothed(&mut self) {
        self.phases.push("smooth");
    }
    fn on_ribbon_rebuilt(&mut self) {
        self.phases.push("ribbon");
    }
    fn on_frame_complete(&mut self) {
        self.phases.push("complete");
    }
}

fn setup() -> (PhysicsWorld<f32>, Band<f32>, Camera<f32>) {
    let mut world = PhysicsWorld::new(WorldConfig::new());
    let band = Band::new(&mut world, BandConfig::new()).unwrap();
    let camera = Camera::new(Vec3::new(0.0, 0.0, 13.0), 1.0);
    (world, band, camera)
}

#[test]
fn frame_phases_run_in_order() {
    let (mut world, mut band, camera) = setup();

    let mut recorder = PhaseRecorder::default();
    band.update(&mut world, &camera, 0.0, 0.0, DT, &mut recorder);
    assert_eq!(recorder.phases, ["smooth", "ribbon", "complete"]);

    // With a drag active the target write comes first.
    let card_pos = world.body(band.chain().card).unwrap().position;
    band.pointer_down(card_pos, &mut world);
    let mut recorder = PhaseRecorder::default();
    band.update(&mut world, &camera, 0.0, 0.0, DT, &mut recorder);
    assert_eq!(recorder.phases, ["drag", "smooth", "ribbon", "complete"]);
}

#[test]
fn ribbon_spans_card_to_anchor() {
    let (mut world, mut band, camera) = setup();

    for _ in 0..60 {
        world.step(DT);
        band.update(&mut world, &camera, 0.0, 0.0, DT, &mut NoOpFrameObserver);
    }

    let ribbon = band.ribbon();
    assert_eq!(ribbon.len(), 32);

    let card_pos = world.body(band.chain().card).unwrap().position;
    let anchor_pos = world.body(band.chain().anchor).unwrap().position;
    assert!(ribbon[0].distance(card_pos) < 1e-4, "ribbon starts at the card");
    assert!(ribbon[31].distance(anchor_pos) < 1e-4, "ribbon ends at the anchor");

    for p in ribbon {
        assert!(p.is_finite());
    }
}

#[test]
fn unresolved_bodies_skip_the_frame() {
    // Handles minted in one world do not resolve in a fresh one; the
    // band must skip everything after the drag step and recover later.
    let (_world, mut band, camera) = setup();
    let mut empty: PhysicsWorld<f32> = PhysicsWorld::new(WorldConfig::new());

    let mut recorder = PhaseRecorder::default();
    band.update(&mut empty, &camera, 0.0, 0.0, DT, &mut recorder);
    assert_eq!(recorder.phases, ["complete"]);
    assert!(band.ribbon().is_empty());
}

#[test]
fn ribbon_sample_count_is_configurable() {
    let mut world = PhysicsWorld::new(WorldConfig::new());
    let mut band = Band::new(&mut world, BandConfig::new().with_ribbon_samples(8)).unwrap();
    let camera = Camera::new(Vec3::new(0.0, 0.0, 13.0), 1.0);

    band.update(&mut world, &camera, 0.0, 0.0, DT, &mut NoOpFrameObserver);
    assert_eq!(band.ribbon().len(), 8);
}

#[test]
fn invalid_configs_are_rejected() {
    let mut world = PhysicsWorld::new(WorldConfig::new());

    let err = Band::new(&mut world, BandConfig::<f32>::new().with_ribbon_samples(1));
    assert_eq!(err.err(), Some(LanyardError::InvalidSampleCount));

    let bad_smoothing = BandConfig::<f32>::new()
        .with_smoothing(lanyard::SmoothingConfig::new().with_speeds(5.0, 1.0));
    let err = Band::new(&mut world, bad_smoothing);
    assert_eq!(err.err(), Some(LanyardError::InvalidSmoothingSpeeds));
}

#[test]
fn dragging_moves_the_card_through_the_world() {
    let (mut world, mut band, camera) = setup();

    // Let the chain drop into a hanging rest first.
    for _ in 0..120 {
        world.step(DT);
        band.update(&mut world, &camera, 0.0, 0.0, DT, &mut NoOpFrameObserver);
    }

    let card_pos = world.body(band.chain().card).unwrap().position;
    band.pointer_down(card_pos, &mut world);

    // Drag toward the upper right of the screen for a second.
    for _ in 0..60 {
        band.update(&mut world, &camera, 0.6, 0.4, DT, &mut NoOpFrameObserver);
        world.step(DT);
    }

    let dragged_pos = world.body(band.chain().card).unwrap().position;
    assert!(dragged_pos.x > card_pos.x, "card should follow the pointer right");
    assert!(dragged_pos.y > card_pos.y, "card should follow the pointer up");

    band.pointer_up(&mut world);
    let mut recorder = PhaseRecorder::default();
    band.update(&mut world, &camera, 0.6, 0.4, DT, &mut recorder);
    assert_eq!(
        recorder.phases,
        ["smooth", "ribbon", "complete"],
        "no drag phase after release",
    );
}
