use crate::constants::{KNOB_IDLE_FILL, KNOB_TRACKING_FILL, PAD_FILL, WHEEL_VELOCITY_FILL};
use pad_core::{Pad, Rect, WheelGlyph};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn fill_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64, color: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.set_fill_style_str(color);
    ctx.arc(x, y, r, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

/// Pad disc with the knob drawn relative to the pad center.
pub fn draw_pad(ctx: &web::CanvasRenderingContext2d, pad: &Pad) -> Result<(), JsValue> {
    let size = pad.size() as f64;
    let center = size / 2.0;
    let geometry = pad.geometry();
    let knob = pad.knob();

    ctx.clear_rect(0.0, 0.0, size, size);
    fill_circle(ctx, center, center, geometry.pad_radius() as f64, PAD_FILL)?;

    ctx.save();
    ctx.translate(center, center)?;
    let color = if knob.tracking() {
        KNOB_TRACKING_FILL
    } else {
        KNOB_IDLE_FILL
    };
    let pos = knob.position();
    let drawn = fill_circle(ctx, pos.x as f64, pos.y as f64, geometry.knob_radius() as f64, color);
    ctx.restore();
    drawn
}

fn rect_args(r: &Rect) -> (f64, f64, f64, f64) {
    (
        r.origin.x as f64,
        r.origin.y as f64,
        r.size.x as f64,
        r.size.y as f64,
    )
}

/// One wheel: rotated outline plus the velocity bar.
pub fn draw_wheel(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, glyph: &WheelGlyph) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.save();
    let drawn = (|| -> Result<(), JsValue> {
        ctx.translate(glyph.center.x as f64, glyph.center.y as f64)?;
        ctx.rotate(glyph.rotation_rad as f64)?;
        let (x, y, w, h) = rect_args(&glyph.outline);
        ctx.stroke_rect(x, y, w, h);
        if let Some(bar) = &glyph.velocity_bar {
            ctx.set_fill_style_str(WHEEL_VELOCITY_FILL);
            let (x, y, w, h) = rect_args(bar);
            ctx.fill_rect(x, y, w, h);
        }
        Ok(())
    })();
    ctx.restore();
    drawn
}
