use glam::Vec2;
use orbis_scene::body::{ATMOSPHERE_RATE, BODY_RATE};
use orbis_scene::camera::{MAX_POLAR, MIN_POLAR};
use orbis_scene::debris::DEBRIS_LAYOUT;
use orbis_scene::particles::PARTICLE_RATE;
use orbis_scene::{
    Geometry, PrimitiveKind, Scene, SceneError, ShellKind, Viewport, create_scene,
    create_scene_seeded,
};
use orbis_texture::{CRATER_COUNT, SURFACE_HEIGHT, SURFACE_WIDTH};

fn scene(seed: u64) -> Scene {
    create_scene_seeded(Viewport::new(1280, 720).unwrap(), seed).unwrap()
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn single_unit_tick_matches_documented_angles() {
    let mut s = scene(42);
    s.tick(1.0);

    assert_eq!(s.body().body().orientation(), 0.005);
    assert_eq!(s.body().atmosphere().orientation(), 0.003);
    assert_eq!(s.debris().bodies()[0].orientation(), (0.01, 0.015));
    assert_eq!(s.particles().orientation(), (0.0005, 0.0005));
}

#[test]
fn hundred_tick_step_turns_body_half_a_radian() {
    let mut s = scene(42);
    s.tick(100.0);
    assert_close(s.body().body().orientation(), 0.5, "body");
}

#[test]
fn constant_ticks_accumulate_linearly() {
    for &(n, dt) in &[(0u32, 1.0), (1, 0.5), (60, 1.0), (600, 1.0 / 3.0), (2000, 2.5)] {
        let mut s = scene(7);
        for _ in 0..n {
            s.tick(dt);
        }
        let total = f64::from(n) * dt;
        assert_close(s.body().body().orientation(), total * BODY_RATE, "body");
        assert_close(
            s.body().atmosphere().orientation(),
            total * ATMOSPHERE_RATE,
            "atmosphere",
        );
        assert_eq!(s.body().glow().orientation(), 0.0);
        for (rock, &(_, _, speed)) in s.debris().bodies().iter().zip(DEBRIS_LAYOUT.iter()) {
            let (x, y) = rock.orientation();
            assert_close(x, total * speed * 0.01, "debris x");
            assert_close(y, total * speed * 0.015, "debris y");
        }
        let (px, py) = s.particles().orientation();
        assert_close(px, total * PARTICLE_RATE, "particles x");
        assert_close(py, total * PARTICLE_RATE, "particles y");
    }
}

#[test]
fn zero_and_negative_ticks_change_nothing() {
    let mut s = scene(11);
    s.tick(3.0);
    let body = s.body().body().orientation();
    let atmosphere = s.body().atmosphere().orientation();
    let debris: Vec<(f64, f64)> = s.debris().bodies().iter().map(|b| b.orientation()).collect();
    let particles = s.particles().orientation();

    s.tick(0.0);
    s.tick(-1.0);
    s.tick(-1e9);

    assert_eq!(s.body().body().orientation(), body);
    assert_eq!(s.body().atmosphere().orientation(), atmosphere);
    let after: Vec<(f64, f64)> = s.debris().bodies().iter().map(|b| b.orientation()).collect();
    assert_eq!(after, debris);
    assert_eq!(s.particles().orientation(), particles);
}

#[test]
fn camera_polar_stays_in_band() {
    let mut s = scene(3);
    let drags = [
        Vec2::new(0.0, 5000.0),
        Vec2::new(120.0, -80.0),
        Vec2::new(-3.0, -90_000.0),
        Vec2::new(0.0, 1.0),
    ];
    for (i, drag) in drags.iter().cycle().take(40).enumerate() {
        s.camera_mut().drag(*drag);
        s.tick(1.0 + i as f64);
        let polar = s.camera().polar();
        assert!(
            (MIN_POLAR..=MAX_POLAR).contains(&polar),
            "polar {polar} escaped the band after step {i}"
        );
    }
}

#[test]
fn zoom_and_pan_are_rejected() {
    let mut s = scene(3);
    let before = s.camera().position();
    assert!(matches!(
        s.camera_mut().zoom(-3.0),
        Err(SceneError::ControlDisabled(_))
    ));
    assert!(matches!(
        s.camera_mut().pan(Vec2::ONE),
        Err(SceneError::ControlDisabled(_))
    ));
    assert_eq!(s.camera().position(), before);
}

#[test]
fn particles_never_move() {
    let mut s = scene(5);
    let initial = s.particles().positions().to_vec();
    assert_eq!(initial.len(), 1000);
    assert!(
        initial
            .iter()
            .flatten()
            .all(|c| (-25.0..=25.0).contains(c))
    );
    for _ in 0..1000 {
        s.tick(1.0);
    }
    assert_eq!(s.particles().positions(), initial.as_slice());
}

#[test]
fn surface_texture_has_fixed_shape() {
    let s = scene(99);
    let surface = s.body().surface();
    assert_eq!(surface.texture().width(), SURFACE_WIDTH);
    assert_eq!(surface.texture().height(), SURFACE_HEIGHT);
    assert_eq!(surface.craters().len(), CRATER_COUNT);
    assert!(
        surface
            .craters()
            .iter()
            .all(|c| (5.0..20.0).contains(&c.radius))
    );
}

#[test]
fn debris_keeps_documented_layout() {
    let mut s = scene(1);
    for _ in 0..300 {
        s.tick(1.7);
    }
    let bodies = s.debris().bodies();
    assert_eq!(bodies.len(), 5);
    for (rock, &(position, radius, speed)) in bodies.iter().zip(DEBRIS_LAYOUT.iter()) {
        assert_eq!(rock.position().to_array(), position);
        assert_eq!(rock.radius(), radius);
        assert_eq!(rock.speed(), speed);
    }
}

#[test]
fn same_seed_reproduces_layout() {
    let a = scene(2024);
    let b = scene(2024);
    assert_eq!(a.body().surface().craters(), b.body().surface().craters());
    assert_eq!(a.particles().positions(), b.particles().positions());
}

#[test]
fn unseeded_scene_reports_its_seed() {
    let s = create_scene(Viewport::new(320, 240).unwrap()).unwrap();
    let seed = s.seed().unwrap();
    let replay = scene(seed);
    assert_eq!(s.particles().positions(), replay.particles().positions());
}

#[test]
fn frame_binds_textures_to_the_right_primitives() {
    let mut s = scene(8);
    let frame = s.tick(1.0);
    let surface = frame
        .find(PrimitiveKind::Body(ShellKind::Surface))
        .unwrap();
    assert_eq!(surface.texture.unwrap().width(), SURFACE_WIDTH);
    let particles = frame.find(PrimitiveKind::Particles).unwrap();
    assert_eq!(particles.texture.unwrap().width(), 64);
    assert!(matches!(particles.geometry, Geometry::Points { .. }));
    assert!(frame.find(PrimitiveKind::Debris(0)).unwrap().texture.is_none());
}

#[test]
fn invalid_viewport_returns_no_scene() {
    let result = create_scene_seeded(
        Viewport {
            width: 640,
            height: 0,
        },
        1,
    );
    assert!(matches!(
        result,
        Err(SceneError::InvalidViewport {
            width: 640,
            height: 0
        })
    ));
}
