use lanyard::{
    Band, BandConfig, Camera, CursorHint, NoOpFrameObserver, PhysicsWorld, Vec3, WorldConfig,
};
use wasm_bindgen::prelude::*;

// ---- Lanyard Demo ----

#[wasm_bindgen]
pub struct LanyardDemo {
    world: PhysicsWorld<f32>,
    band: Band<f32>,
    camera: Camera<f32>,
    pointer_ndc: (f32, f32),
    width: f32,
    height: f32,
}

#[wasm_bindgen]
impl LanyardDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        let mut world = PhysicsWorld::new(WorldConfig::new());
        let band = Band::new(&mut world, BandConfig::new())
            .expect("default band config is valid");
        let camera = Camera::new(Vec3::new(0.0f32, 0.0, 13.0), width / height);
        LanyardDemo {
            world,
            band,
            camera,
            pointer_ndc: (0.0, 0.0),
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.camera.aspect = width / height;
    }

    /// Pointer position in canvas pixels, origin top-left.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer_ndc = self.to_ndc(x, y);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer_ndc = self.to_ndc(x, y);
        let hit = self
            .camera
            .pointer_to_world(self.pointer_ndc.0, self.pointer_ndc.1);
        // Grab whenever the press lands near the card.
        if let Some(card) = self.world.body(self.band.chain().card) {
            if hit.distance(card.position) < 2.5 {
                self.band.pointer_down(hit, &mut self.world);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.band.pointer_up(&mut self.world);
    }

    pub fn pointer_enter(&mut self) {
        self.band.pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.band.pointer_leave();
        self.band.pointer_up(&mut self.world);
    }

    pub fn update(&mut self, dt: f32) {
        self.world.step(dt);
        self.band.update(
            &mut self.world,
            &self.camera,
            self.pointer_ndc.0,
            self.pointer_ndc.1,
            dt,
            &mut NoOpFrameObserver,
        );
    }

    /// Returns the ribbon strip as flat [x0, y0, z0, x1, y1, z1, ...],
    /// card end first.
    pub fn ribbon_positions(&self) -> Vec<f32> {
        let ribbon = self.band.ribbon();
        let mut out = Vec::with_capacity(ribbon.len() * 3);
        for p in ribbon {
            out.push(p.x);
            out.push(p.y);
            out.push(p.z);
        }
        out
    }

    /// Returns [x, y, z, qx, qy, qz, qw] for the card body.
    pub fn card_transform(&self) -> Vec<f32> {
        match self.world.body(self.band.chain().card) {
            Some(card) => vec![
                card.position.x,
                card.position.y,
                card.position.z,
                card.rotation.x,
                card.rotation.y,
                card.rotation.z,
                card.rotation.w,
            ],
            None => vec![0.0; 7],
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.band.is_dragging()
    }

    /// 0 = default, 1 = grab, 2 = grabbing.
    pub fn cursor_hint(&self) -> u32 {
        match self.band.cursor_hint() {
            CursorHint::Default => 0,
            CursorHint::Grab => 1,
            CursorHint::Grabbing => 2,
        }
    }

    fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        let nx = x / self.width * 2.0 - 1.0;
        let ny = 1.0 - y / self.height * 2.0;
        (nx, ny)
    }
}
