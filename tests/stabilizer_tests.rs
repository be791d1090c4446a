use lanyard::{
    Band, BandConfig, Camera, MotionMode, NoOpFrameObserver, PhysicsWorld, Quat, RigidBody,
    Stabilizer, Vec3, WorldConfig,
};

const DT: f32 = 1.0 / 60.0;

#[test]
fn yaw_spin_is_counteracted() {
    let mut card: RigidBody<f32> = RigidBody::new(MotionMode::Dynamic, Vec3::zero());
    card.rotation = Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.6);
    card.set_angvel(Vec3::new(0.0, 0.0, 0.0));

    let stabilizer: Stabilizer<f32> = Stabilizer::default();
    stabilizer.apply(&mut card);

    // Positive yaw rotation produces a negative restoring spin.
    assert!(card.angvel.y < 0.0);
    assert_eq!(card.angvel.y, -card.rotation.y * 0.25);
}

#[test]
fn other_axes_are_untouched() {
    let mut card: RigidBody<f32> = RigidBody::new(MotionMode::Dynamic, Vec3::zero());
    card.rotation = Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), -0.4);
    card.set_angvel(Vec3::new(1.5, 0.2, -0.7));

    let stabilizer: Stabilizer<f32> = Stabilizer::default();
    stabilizer.apply(&mut card);

    assert_eq!(card.angvel.x, 1.5);
    assert_eq!(card.angvel.z, -0.7);
    assert!(card.angvel.y > 0.2, "negative yaw must push the spin positive");
}

#[test]
fn forward_facing_card_is_left_alone() {
    let mut card: RigidBody<f32> = RigidBody::new(MotionMode::Dynamic, Vec3::zero());
    let angvel = Vec3::new(0.1, 0.0, -0.1);
    card.set_angvel(angvel);

    let stabilizer: Stabilizer<f32> = Stabilizer::default();
    stabilizer.apply(&mut card);

    assert_eq!(card.angvel, angvel);
}

#[test]
fn card_settles_facing_forward_in_the_world() {
    let mut world: PhysicsWorld<f32> = PhysicsWorld::new(WorldConfig::new());
    let mut band = Band::new(&mut world, BandConfig::new()).unwrap();
    let camera = Camera::new(Vec3::new(0.0, 0.0, 13.0), 1.0);

    // Start the card twisted half a radian away from the viewer.
    let card = band.chain().card;
    world.body_mut(card).unwrap().rotation =
        Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.5);
    let initial_y = world.body(card).unwrap().rotation.y.abs();

    for _ in 0..600 {
        band.update(&mut world, &camera, 0.0, 0.0, DT, &mut NoOpFrameObserver);
        world.step(DT);
    }

    let final_y = world.body(card).unwrap().rotation.y.abs();
    assert!(
        final_y < 0.05 && final_y < initial_y,
        "card should settle facing forward: |q.y| {} -> {}",
        initial_y,
        final_y,
    );
}
