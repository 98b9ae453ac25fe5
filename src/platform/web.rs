//! Canvas 2D surface and DOM HUD

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

use crate::surface::{Color, Hud, Surface, SurfaceSize};
use crate::tuning::Tuning;

/// Failures acquiring browser handles
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` not found")]
    MissingElement(&'static str),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(&'static str),
    #[error("2D rendering context unavailable")]
    NoContext,
}

pub fn window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

pub fn document() -> Result<Document, PlatformError> {
    window()?.document().ok_or(PlatformError::NoDocument)
}

/// Find the page's canvas and size it to the window
pub fn fullscreen_canvas(selector: &'static str) -> Result<HtmlCanvasElement, PlatformError> {
    let window = window()?;
    let canvas: HtmlCanvasElement = document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or(PlatformError::MissingElement(selector))?
        .dyn_into()
        .map_err(|_| PlatformError::NotACanvas(selector))?;

    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);

    Ok(canvas)
}

/// Read tuning overrides from `<script id="tuning" type="application/json">`
///
/// Missing element means defaults; bad JSON is logged and ignored.
pub fn load_tuning() -> Tuning {
    let json = document()
        .ok()
        .and_then(|d| d.get_element_by_id("tuning"))
        .and_then(|el| el.text_content());

    let Some(json) = json else {
        return Tuning::default();
    };

    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning overrides");
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning overrides: {}", e);
            Tuning::default()
        }
    }
}

/// `Surface` over a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: SurfaceSize,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, PlatformError> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(PlatformError::NoContext)?
            .dyn_into()
            .map_err(|_| PlatformError::NoContext)?;

        Ok(Self {
            ctx,
            size: SurfaceSize::new(canvas.width() as f32, canvas.height() as f32),
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.width as f64, self.size.height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        // Negative radii throw; they cannot occur but skip rather than panic
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn with_alpha<F>(&mut self, alpha: f32, draw: F)
    where
        F: FnOnce(&mut Self),
    {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        draw(self);
        self.ctx.restore();
    }
}

/// `Hud` over the page's score and modal elements
pub struct DomHud {
    score: Option<HtmlElement>,
    final_score: Option<HtmlElement>,
    modal: Option<HtmlElement>,
}

impl DomHud {
    pub const SCORE_ID: &'static str = "scoreEl";
    pub const FINAL_SCORE_ID: &'static str = "finalScoreEl";
    pub const MODAL_ID: &'static str = "modalEl";

    /// Bind to the page; missing elements are logged and skipped
    pub fn bind(document: &Document) -> Self {
        let find = |id: &str| {
            let el = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if el.is_none() {
                log::warn!("HUD element #{} not found", id);
            }
            el
        };
        Self {
            score: find(Self::SCORE_ID),
            final_score: find(Self::FINAL_SCORE_ID),
            modal: find(Self::MODAL_ID),
        }
    }

    /// HUD for pages without one (firing range, Pong)
    pub fn detached() -> Self {
        Self {
            score: None,
            final_score: None,
            modal: None,
        }
    }

    fn set_modal_display(&self, display: &str) {
        if let Some(modal) = &self.modal {
            let _ = modal.style().set_property("display", display);
        }
    }
}

impl Hud for DomHud {
    fn set_score_display(&mut self, score: u64) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    fn set_final_score_display(&mut self, score: u64) {
        if let Some(el) = &self.final_score {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    fn show_game_over_modal(&mut self) {
        self.set_modal_display("flex");
    }

    fn hide_game_over_modal(&mut self) {
        self.set_modal_display("none");
    }
}
