use reptile::{
    ChainConfig, Creature, LogStepObserver, PointerButton, PoseProjector, SegmentPose,
    SolverConfig,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reptile demo starting");
}

/// Browser-facing wrapper. The page forwards mouse events, calls `frame()`
/// from `requestAnimationFrame`, then reads the flat geometry buffers.
#[wasm_bindgen]
pub struct ReptileDemo {
    creature: Creature<f32>,
    observer: LogStepObserver,
}

#[wasm_bindgen]
impl ReptileDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Result<ReptileDemo, JsValue> {
        let chain_config = ChainConfig::default().with_seed(seed as u64);
        let creature = Creature::new(
            width,
            height,
            &chain_config,
            SolverConfig::new(),
            PoseProjector::default(),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("spawned {} segments on a {}x{} canvas", chain_config.segment_count, width, height);
        Ok(ReptileDemo {
            creature,
            observer: LogStepObserver::new(),
        })
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.creature.pointer_moved(x, y);
    }

    pub fn button_down(&mut self, button: i16) {
        if let Some(b) = PointerButton::from_dom_button(button) {
            self.creature.button_pressed(b);
        }
    }

    pub fn button_up(&mut self, button: i16) {
        if let Some(b) = PointerButton::from_dom_button(button) {
            self.creature.button_released(b);
        }
    }

    /// Advance one animation frame. Returns the number of segment poses.
    pub fn frame(&mut self) -> usize {
        self.creature.frame(&mut self.observer).len()
    }

    /// Returns flat [x0, y0, x1, y1, width, ...] body strokes, tail to head.
    pub fn body(&self) -> Vec<f32> {
        let poses = self.creature.poses();
        let mut out = Vec::with_capacity(poses.len() * 5);
        for p in poses {
            out.extend_from_slice(&[p.body.from.x, p.body.from.y, p.body.to.x, p.body.to.y, p.width]);
        }
        out
    }

    /// Returns flat [x0, y0, x1, y1, ...] spine ticks, tail to head.
    pub fn spine(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for s in self.creature.poses().iter().filter_map(|p| p.spine) {
            out.extend_from_slice(&[s.from.x, s.from.y, s.to.x, s.to.y]);
        }
        out
    }

    /// Returns flat line list [x0, y0, x1, y1, ...] covering every leg and
    /// both barbs at each foot.
    pub fn legs(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for p in self.creature.poses() {
            push_legs(p, &mut out);
        }
        out
    }

    pub fn frames(&self) -> f64 {
        self.observer.frames() as f64
    }
}

fn push_legs(pose: &SegmentPose<f32>, out: &mut Vec<f32>) {
    let Some(pair) = pose.legs else { return };
    for leg in [pair.left, pair.right] {
        out.extend_from_slice(&[leg.root.x, leg.root.y, leg.tip.x, leg.tip.y]);
        for barb in leg.barbs {
            out.extend_from_slice(&[barb.from.x, barb.from.y, barb.to.x, barb.to.y]);
        }
    }
}
