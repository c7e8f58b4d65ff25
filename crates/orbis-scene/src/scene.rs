//! Scene composition and the per-frame update.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use orbis_texture::generate_surface_texture;

use crate::body::CelestialBody;
use crate::camera::CameraRig;
use crate::debris::DebrisField;
use crate::error::SceneError;
use crate::frame::{CameraView, Geometry, Primitive, PrimitiveKind, RenderableFrame};
use crate::lighting::Lighting;
use crate::particles::ParticleField;
use crate::viewport::Viewport;

/// Owns every entity and advances them together.
///
/// Each entity only ever touches its own state; the scene is the single place
/// where they are stepped and assembled into a [`RenderableFrame`].
#[derive(Clone, Debug)]
pub struct Scene {
    seed: Option<u64>,
    viewport: Viewport,
    body: CelestialBody,
    debris: DebrisField,
    particles: ParticleField,
    camera: CameraRig,
    lighting: Lighting,
    tick_count: u64,
    elapsed_ticks: f64,
}

/// Build a scene seeded from the ambient generator. The chosen seed is logged
/// and available from [`Scene::seed`].
pub fn create_scene(viewport: Viewport) -> Result<Scene, SceneError> {
    Scene::new(viewport, rand::random())
}

/// Build a scene whose crater layout and particle cloud derive from `seed`.
pub fn create_scene_seeded(viewport: Viewport, seed: u64) -> Result<Scene, SceneError> {
    Scene::new(viewport, seed)
}

impl Scene {
    /// Build a scene from a seed.
    pub fn new(viewport: Viewport, seed: u64) -> Result<Self, SceneError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut scene = Self::with_rng(viewport, &mut rng)?;
        scene.seed = Some(seed);
        info!("Scene seed: {seed}");
        Ok(scene)
    }

    /// Build a scene drawing every random element from `rng`.
    ///
    /// The surface is generated first, then the particle cloud. The viewport
    /// is validated before anything is allocated.
    pub fn with_rng<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Result<Self, SceneError> {
        let viewport = Viewport::new(viewport.width, viewport.height)?;

        let surface = generate_surface_texture(rng)?;
        let body = CelestialBody::new(surface);
        let debris = DebrisField::new();
        let particles = ParticleField::generate(rng)?;
        let camera = CameraRig::new(viewport);

        info!(
            "Created scene: {}x{} viewport, {} craters, {} debris, {} particles",
            viewport.width,
            viewport.height,
            body.surface().craters().len(),
            debris.len(),
            particles.len()
        );

        Ok(Self {
            seed: None,
            viewport,
            body,
            debris,
            particles,
            camera,
            lighting: Lighting::DEFAULT,
            tick_count: 0,
            elapsed_ticks: 0.0,
        })
    }

    /// Advance every rotating entity by `dt_ticks` and return the new frame.
    ///
    /// Order within a tick: body, debris, particles, camera. A step that is
    /// zero, negative, or not finite changes nothing and returns the current
    /// frame.
    pub fn tick(&mut self, dt_ticks: f64) -> RenderableFrame<'_> {
        if !dt_ticks.is_finite() || dt_ticks <= 0.0 {
            debug!("Ignoring tick with dt={dt_ticks}");
            return self.frame();
        }

        self.body.advance(dt_ticks);
        self.debris.advance(dt_ticks);
        self.particles.advance(dt_ticks);
        self.camera.advance(dt_ticks);

        self.tick_count += 1;
        self.elapsed_ticks += dt_ticks;
        trace!(
            "Tick {} (dt={dt_ticks}, body={:.4} rad)",
            self.tick_count,
            self.body.body().orientation()
        );

        self.frame()
    }

    /// Assemble the current state into a frame without advancing.
    ///
    /// Textures and particle positions are borrowed; the frame itself lives on
    /// the stack.
    pub fn frame(&self) -> RenderableFrame<'_> {
        let shells = self.body.render_state();
        let rocks = self.debris.bodies();
        let debris_material = self.debris.material();

        let primitives = std::array::from_fn(|slot| {
            if let Some(shell) = shells.get(slot) {
                Primitive {
                    kind: PrimitiveKind::Body(shell.kind),
                    geometry: Geometry::Sphere {
                        radius: shell.radius,
                        segments: shell.segments,
                    },
                    transform: shell.transform,
                    material: shell.material,
                    texture: shell.texture,
                }
            } else if let Some(rock) = rocks.get(slot - shells.len()) {
                Primitive {
                    kind: PrimitiveKind::Debris(slot - shells.len()),
                    geometry: Geometry::Sphere {
                        radius: rock.radius(),
                        segments: DebrisField::SEGMENTS,
                    },
                    transform: rock.transform(),
                    material: debris_material,
                    texture: None,
                }
            } else {
                Primitive {
                    kind: PrimitiveKind::Particles,
                    geometry: Geometry::Points {
                        positions: self.particles.positions(),
                    },
                    transform: self.particles.transform(),
                    material: self.particles.material(),
                    texture: Some(self.particles.sprite()),
                }
            }
        });

        RenderableFrame {
            index: self.tick_count,
            camera: CameraView::from_rig(&self.camera),
            lighting: self.lighting,
            primitives,
        }
    }

    /// Adopt a new viewport. A zero-sized viewport is rejected and the scene
    /// keeps its previous one.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let viewport = Viewport::new(viewport.width, viewport.height)?;
        self.viewport = viewport;
        self.camera.set_viewport(viewport);
        debug!("Resized scene to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    /// Seed the random elements were drawn from, when known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The planet and its shells.
    pub fn body(&self) -> &CelestialBody {
        &self.body
    }

    /// The debris bodies.
    pub fn debris(&self) -> &DebrisField {
        &self.debris
    }

    /// The particle cloud.
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// The camera rig.
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Mutable camera access for an input handler (drag, zoom, pan).
    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    /// Static lights.
    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    /// Number of ticks that advanced state.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Sum of all accepted `dt` values.
    pub fn elapsed_ticks(&self) -> f64 {
        self.elapsed_ticks
    }
}
