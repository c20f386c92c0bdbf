use crate::constants::*;
use crate::style;
use banner_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One full-viewport canvas and its 2D context.
pub struct Layer {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    created: bool,
}

impl Layer {
    fn attach(document: &web::Document, id: &str, z_index: i32) -> anyhow::Result<Self> {
        let (canvas, created) = match document.get_element_by_id(id) {
            Some(el) => (
                el.dyn_into::<web::HtmlCanvasElement>()
                    .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))?,
                false,
            ),
            None => {
                let canvas: web::HtmlCanvasElement = document
                    .create_element("canvas")
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?
                    .dyn_into()
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                canvas.set_id(id);
                let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
                body.append_child(&canvas)
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                _ = canvas.set_attribute("style", &style::layer_style(z_index));
                (canvas, true)
            }
        };
        if !created {
            _ = canvas
                .style()
                .set_property("z-index", &z_index.to_string());
        }
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("#{} has no 2d context", id))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            created,
        })
    }

    /// Only touches the backing store when the size actually changed, since
    /// assigning width/height clears the canvas.
    fn resize(&self, viewport: Viewport) {
        let w = viewport.width.max(1.0) as u32;
        let h = viewport.height.max(1.0) as u32;
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn detach(&self) {
        if self.created {
            self.canvas.remove();
        }
    }
}

/// The three drawing surfaces, back to front.
pub struct Surfaces {
    pub stars: Layer,
    pub shooting: Layer,
    pub trail: Layer,
}

impl Surfaces {
    pub fn attach(document: &web::Document, viewport: Viewport) -> anyhow::Result<Self> {
        let surfaces = Self {
            stars: Layer::attach(document, STARS_CANVAS_ID, SKY_Z_INDEX)?,
            shooting: Layer::attach(document, SHOOTING_STAR_CANVAS_ID, SKY_Z_INDEX)?,
            trail: Layer::attach(document, TRAIL_CANVAS_ID, TRAIL_Z_INDEX)?,
        };
        surfaces.resize(viewport);
        Ok(surfaces)
    }

    pub fn resize(&self, viewport: Viewport) {
        for layer in self.layers() {
            layer.resize(viewport);
        }
    }

    pub fn detach(&self) {
        for layer in self.layers() {
            layer.detach();
        }
    }

    fn layers(&self) -> [&Layer; 3] {
        [&self.stars, &self.shooting, &self.trail]
    }
}
