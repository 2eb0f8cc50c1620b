use boid_core::Flock;
use boid_shared::render::{
    agent_triangle, RenderStyle, Sprite, BACKGROUND_COLOR, BOID_COLOR, DEBUG_COLOR,
};
use boid_shared::{ensure_finite, AgentSnapshot, SimulationSettings};
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Canvas host for the flock
///
/// The page drives `update()` from a fixed-rate timer and `render()` from
/// `requestAnimationFrame`; both run on the JS thread, so a frame always sees
/// a finished tick.
#[wasm_bindgen]
pub struct BoidSimulation {
    flock: Flock,
    style: RenderStyle,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl BoidSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        width: f64,
        height: f64,
        boid_count: usize,
    ) -> Result<BoidSimulation, JsValue> {
        let settings = SimulationSettings {
            agent_count: boid_count,
            width: width as f32,
            height: height as f32,
            ..SimulationSettings::default()
        };
        Self::build(canvas_id, settings)
    }

    /// Builds a simulation from a JSON settings document.
    pub fn from_settings(canvas_id: &str, settings_json: &str) -> Result<BoidSimulation, JsValue> {
        let settings = SimulationSettings::from_json(settings_json)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Self::build(canvas_id, settings)
    }

    fn build(canvas_id: &str, settings: SimulationSettings) -> Result<BoidSimulation, JsValue> {
        settings
            .validate()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        canvas.set_width(settings.width as u32);
        canvas.set_height(settings.height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = settings
            .seed
            .unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);
        console_log!(
            "Initializing boid simulation with {} boids (seed {})",
            settings.agent_count,
            seed
        );

        let flock = Flock::seeded(
            settings.agent_count,
            settings.bounds(),
            settings.initial_speed,
            settings.spawn_margin,
            settings.to_boid_config(),
            seed,
        );

        Ok(BoidSimulation {
            flock,
            style: RenderStyle::for_settings(&settings),
            canvas,
            context,
        })
    }

    pub fn update(&mut self) {
        self.flock.update();
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        self.context.set_fill_style_str(BACKGROUND_COLOR);
        self.context.fill_rect(0.0, 0.0, width, height);

        for boid in self.flock.agents() {
            let agent = AgentSnapshot::from(boid);
            if self.style.debug_overlay {
                self.draw_ranges(&agent)?;
            }
            self.draw_boid(&agent)?;
        }

        Ok(())
    }

    fn draw_boid(&self, agent: &AgentSnapshot) -> Result<(), JsValue> {
        let size = self.style.boid_size as f64;

        self.context.begin_path();
        match self.style.sprite {
            Sprite::Disk => {
                self.context
                    .arc(agent.x as f64, agent.y as f64, size, 0.0, TAU)?;
            }
            Sprite::Triangle => {
                let [a, b, c] = agent_triangle(agent, self.style.boid_size);
                self.context.move_to(a.x as f64, a.y as f64);
                self.context.line_to(b.x as f64, b.y as f64);
                self.context.line_to(c.x as f64, c.y as f64);
                self.context.close_path();
            }
        }
        self.context.set_fill_style_str(BOID_COLOR);
        self.context.fill();

        Ok(())
    }

    fn draw_ranges(&self, agent: &AgentSnapshot) -> Result<(), JsValue> {
        self.context.set_stroke_style_str(DEBUG_COLOR);
        self.context.set_line_width(1.0);

        for radius in [self.style.protected_range, self.style.visual_range] {
            self.context.begin_path();
            self.context
                .arc(agent.x as f64, agent.y as f64, radius as f64, 0.0, TAU)?;
            self.context.stroke();
        }

        Ok(())
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.flock.resize(width as f32, height as f32);
        console_log!("Resized to {}x{}", width, height);
    }

    pub fn boid_count(&self) -> usize {
        self.flock.len()
    }

    pub fn set_triangle_sprite(&mut self, enabled: bool) {
        self.style.sprite = if enabled {
            Sprite::Triangle
        } else {
            Sprite::Disk
        };
    }

    pub fn set_debug_overlay(&mut self, enabled: bool) {
        self.style.debug_overlay = enabled;
    }

    pub fn set_avoid_factor(&mut self, factor: f32) -> Result<(), JsValue> {
        self.flock.config_mut().avoid_factor = finite("avoid_factor", factor)?;
        Ok(())
    }

    pub fn set_matching_factor(&mut self, factor: f32) -> Result<(), JsValue> {
        self.flock.config_mut().matching_factor = finite("matching_factor", factor)?;
        Ok(())
    }

    pub fn set_centering_factor(&mut self, factor: f32) -> Result<(), JsValue> {
        self.flock.config_mut().centering_factor = finite("centering_factor", factor)?;
        Ok(())
    }

    pub fn set_max_speed(&mut self, speed: f32) -> Result<(), JsValue> {
        self.flock.config_mut().max_speed = finite("max_speed", speed)?;
        Ok(())
    }

    pub fn set_turn_factor(&mut self, factor: f32) -> Result<(), JsValue> {
        self.flock.config_mut().turn_factor = finite("turn_factor", factor)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, JsValue> {
    ensure_finite(field, value).map_err(|err| JsValue::from_str(&err.to_string()))
}
