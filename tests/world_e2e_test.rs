mod common;

use assert_approx_eq::assert_approx_eq;

use tui_raycaster::core::{Level, Lifecycle, Projectile, ProjectileEngine, TargetRegistry, TileMap, World};
use tui_raycaster::types::{Control, EngineConfig, Intents, Pose};

use common::{walled_map, world};

#[test]
fn fired_projectile_leaves_an_open_map() {
    let mut w = world(TileMap::open(4, 4), Pose::new(2.0, 2.0, 0.0), vec![]);

    let report = w.step(&Intents::none().with(Control::Fire), 0.016);
    assert!(report.fired);
    let p = *w.projectiles().iter().next().unwrap();
    assert_approx_eq!(p.x, 3.0);
    assert_approx_eq!(p.y, 2.0);
    assert_approx_eq!(p.vx, 1.0);
    assert_approx_eq!(p.vy, 0.0);

    // 5 tiles/s for a quarter second carries it past x = 4.
    let report = w.step(&Intents::none(), 0.25);
    assert_eq!(report.projectiles_retired, 1);
    assert_eq!(w.projectiles().iter().next().unwrap().state(), Lifecycle::Removed);
    assert_eq!(w.projectiles().alive().count(), 0);

    w.end_frame();
    assert!(w.projectiles().is_empty());
}

#[test]
fn projectile_spawned_inside_a_wall_retires_on_its_first_step() {
    let map = TileMap::parse("###\n#.#\n###").unwrap();
    let mut w = world(map, Pose::new(1.5, 1.5, 0.0), vec![]);

    w.step(&Intents::none().with(Control::Fire), 0.016);
    assert_eq!(w.projectiles().alive().count(), 1);

    let report = w.step(&Intents::none(), 0.016);
    assert_eq!(report.projectiles_retired, 1);
    assert_eq!(report.targets_hit, 0);
    w.end_frame();
    assert!(w.projectiles().is_empty());
}

#[test]
fn two_projectiles_reaching_one_target_remove_it_once() {
    let map = TileMap::open(10, 10);
    let mut targets = TargetRegistry::new(&[(5.0, 5.0)]);
    let mut engine = ProjectileEngine::new();
    engine.spawn(Projectile::new(4.9, 5.0, 1.0, 0.0));
    engine.spawn(Projectile::new(5.0, 4.9, 0.0, 1.0));

    let step = engine.step(&map, &mut targets, 1.0, 0.07, 0.1);
    assert_eq!(step.targets_hit, 1);
    assert_eq!(step.retired, 1);
    assert_eq!(targets.alive_count(), 0);
    // The second projectile found nothing left to hit and keeps flying.
    assert_eq!(engine.alive().count(), 1);
}

#[test]
fn player_walks_until_a_wall_blocks_the_move() {
    let map = TileMap::parse("####\n#..#\n####").unwrap();
    let mut w = world(map, Pose::new(1.5, 1.5, 0.0), vec![]);
    let forward = Intents::none().with(Control::MoveForward);

    let report = w.step(&forward, 0.25);
    assert!(report.motion.moved);
    assert_approx_eq!(w.pose().x, 2.5);

    let report = w.step(&forward, 0.25);
    assert!(report.motion.blocked);
    assert!(!report.motion.moved);
    assert_approx_eq!(w.pose().x, 2.5);
    assert_approx_eq!(w.pose().y, 1.5);
}

#[test]
fn rotation_then_forward_uses_the_new_heading() {
    let mut w = world(walled_map(16, 16, &[]), Pose::new(8.0, 8.0, 0.0), vec![]);
    let turn_and_walk = Intents::none()
        .with(Control::RotateLeft)
        .with(Control::MoveForward);

    // 0.3 * 4 * dt radians of turn, then 4 * dt tiles along the new heading.
    let dt = 0.1;
    w.step(&turn_and_walk, dt);
    let angle = 0.3 * 4.0 * dt;
    assert_approx_eq!(w.pose().angle, angle, 1e-5);
    assert_approx_eq!(w.pose().x, 8.0 + angle.cos() * 0.4, 1e-5);
    assert_approx_eq!(w.pose().y, 8.0 - angle.sin() * 0.4, 1e-5);
}

#[test]
fn shooting_west_from_the_default_start_removes_the_nearest_target() {
    let mut w = World::new(Level::builtin().unwrap(), EngineConfig::default());
    assert_eq!(w.targets().alive_count(), 2);

    w.step(&Intents::none().with(Control::Fire), 0.01);
    let mut hits = 0;
    for _ in 0..100 {
        hits += w.step(&Intents::none(), 0.01).targets_hit;
        w.end_frame();
        if w.projectiles().is_empty() {
            break;
        }
    }

    assert_eq!(hits, 1);
    assert!(w.projectiles().is_empty());
    let left: Vec<_> = w.targets().alive().map(|t| (t.x, t.y)).collect();
    assert_eq!(left, vec![(12.0, 13.0)]);
}

#[test]
fn fire_intent_spawns_one_projectile_per_step() {
    let mut w = world(walled_map(16, 16, &[]), Pose::new(2.5, 8.5, 0.0), vec![]);
    let fire = Intents::none().with(Control::Fire);
    for _ in 0..3 {
        w.step(&fire, 0.01);
    }
    assert_eq!(w.projectiles().alive().count(), 3);
    // Earlier shots have already moved on.
    let xs: Vec<f32> = w.projectiles().iter().map(|p| p.x).collect();
    assert!(xs[0] > xs[1] && xs[1] > xs[2]);
}
