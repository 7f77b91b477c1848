//! Canvas 2D rendering module
//!
//! Draws a `RenderSnapshot` onto a canvas. Images that are missing or still
//! loading are replaced by flat-colored boxes.

use std::f64::consts::{PI, TAU};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::assets::AssetManifest;
use crate::sim::{AssetId, Rect};
use crate::snapshot::RenderSnapshot;

const SKY_SUN_OFFSET: f64 = 80.0;
const SUN_RADIUS: f64 = 30.0;
const SUN_RAY_LENGTH: f64 = 15.0;

const GROUND_COLOR: &str = "#228B22";
const PIT_COLOR: &str = "#222";
const PLAYER_PLACEHOLDER: &str = "#FF6347";
const OBSTACLE_PLACEHOLDER: &str = "#888";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    player_img: HtmlImageElement,
    /// Indexed by `AssetId`
    obstacle_imgs: Vec<HtmlImageElement>,
}

impl CanvasRenderer {
    /// Grab the 2D context and start loading every image in the manifest
    pub fn new(canvas: &HtmlCanvasElement, manifest: &AssetManifest) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let player_img = load_image(&manifest.player)?;
        let obstacle_imgs = (0..manifest.obstacle_variants())
            .filter_map(|id| manifest.obstacle(AssetId(id)))
            .map(load_image)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            ctx,
            player_img,
            obstacle_imgs,
        })
    }

    /// Every image element, for load tracking
    pub fn images(&self) -> impl Iterator<Item = &HtmlImageElement> {
        std::iter::once(&self.player_img).chain(self.obstacle_imgs.iter())
    }

    pub fn draw(&self, snap: &RenderSnapshot) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, snap.world_width as f64, snap.world_height as f64);

        self.draw_sun(snap.world_width as f64);

        ctx.set_fill_style_str(GROUND_COLOR);
        fill(ctx, &snap.ground);

        ctx.set_fill_style_str(PIT_COLOR);
        for pit in &snap.pits {
            fill(ctx, pit);
        }

        self.draw_sprite(Some(&self.player_img), &snap.player, PLAYER_PLACEHOLDER);

        for ob in &snap.obstacles {
            let img = self.obstacle_imgs.get(ob.asset.0 as usize);
            self.draw_sprite(img, &ob.rect, OBSTACLE_PLACEHOLDER);
        }
    }

    /// Decorative sun in the top right corner
    fn draw_sun(&self, world_width: f64) {
        let ctx = &self.ctx;
        let cx = world_width - SKY_SUN_OFFSET;
        let cy = SKY_SUN_OFFSET;

        ctx.begin_path();
        if ctx.arc(cx, cy, SUN_RADIUS, 0.0, TAU).is_err() {
            return;
        }
        ctx.set_fill_style_str("yellow");
        ctx.fill();
        ctx.close_path();

        ctx.set_stroke_style_str("orange");
        ctx.set_line_width(3.0);
        for i in 0..8 {
            let angle = i as f64 * PI / 4.0;
            let (sin, cos) = angle.sin_cos();
            ctx.begin_path();
            ctx.move_to(cx + cos * SUN_RADIUS, cy + sin * SUN_RADIUS);
            ctx.line_to(
                cx + cos * (SUN_RADIUS + SUN_RAY_LENGTH),
                cy + sin * (SUN_RADIUS + SUN_RAY_LENGTH),
            );
            ctx.stroke();
        }
    }

    fn draw_sprite(&self, img: Option<&HtmlImageElement>, rect: &Rect, placeholder: &str) {
        let ctx = &self.ctx;
        let (x, y) = (rect.pos.x as f64, rect.pos.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);

        if let Some(img) = img.filter(|img| is_ready(img)) {
            if ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)
                .is_ok()
            {
                return;
            }
        }
        ctx.set_fill_style_str(placeholder);
        ctx.fill_rect(x, y, w, h);
    }
}

/// Loaded and decoded (a failed load is complete with zero width)
pub fn is_ready(img: &HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}

fn load_image(url: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(url);
    Ok(img)
}

fn fill(ctx: &CanvasRenderingContext2d, rect: &Rect) {
    ctx.fill_rect(
        rect.pos.x as f64,
        rect.pos.y as f64,
        rect.size.x as f64,
        rect.size.y as f64,
    );
}
