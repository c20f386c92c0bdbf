use crate::constants::{GLOW_SHADOW_BLUR, PARTICLE_SHADOW_BLUR};
use crate::style;
use crate::surfaces::Surfaces;
use banner_core::{GlowBlob, Particle, Scene, ShootingStar, Star};
use std::f64::consts::TAU;
use web_sys as web;

/// Redraw every layer from the current scene.
pub fn draw_scene(surfaces: &Surfaces, scene: &Scene) {
    let ambient = scene.ambient();

    surfaces.stars.clear();
    draw_stars(&surfaces.stars.ctx, ambient.stars());

    surfaces.shooting.clear();
    if let Some(star) = ambient.shooting_star() {
        draw_shooting_star(&surfaces.shooting.ctx, star);
    }

    surfaces.trail.clear();
    draw_glows(&surfaces.trail.ctx, ambient.glows());
    draw_particles(&surfaces.trail.ctx, scene.particles().as_slice());
}

#[inline]
fn fill_circle(ctx: &web::CanvasRenderingContext2d, x: f32, y: f32, radius: f32) {
    ctx.begin_path();
    _ = ctx.arc(x as f64, y as f64, radius.max(0.0) as f64, 0.0, TAU);
    ctx.fill();
}

pub fn draw_particles(ctx: &web::CanvasRenderingContext2d, particles: &[Particle]) {
    ctx.set_shadow_blur(PARTICLE_SHADOW_BLUR);
    for p in particles {
        ctx.set_fill_style_str(&style::rgba(p.color.rgb(), p.alpha));
        ctx.set_shadow_color(p.color.css_name());
        fill_circle(ctx, p.pos.x, p.pos.y, p.radius);
    }
}

pub fn draw_glows(ctx: &web::CanvasRenderingContext2d, glows: &[GlowBlob]) {
    ctx.set_shadow_blur(GLOW_SHADOW_BLUR);
    for g in glows {
        ctx.set_fill_style_str(&style::rgba(g.color.rgb(), g.alpha));
        ctx.set_shadow_color(g.color.css_name());
        fill_circle(ctx, g.pos.x, g.pos.y, g.radius);
    }
}

pub fn draw_stars(ctx: &web::CanvasRenderingContext2d, stars: &[Star]) {
    for s in stars {
        ctx.set_fill_style_str(&style::white(s.alpha));
        fill_circle(ctx, s.pos.x, s.pos.y, s.radius);
    }
}

pub fn draw_shooting_star(ctx: &web::CanvasRenderingContext2d, star: &ShootingStar) {
    let tail = star.tail_end();
    let gradient = ctx.create_linear_gradient(
        star.pos.x as f64,
        star.pos.y as f64,
        tail.x as f64,
        tail.y as f64,
    );
    _ = gradient.add_color_stop(0.0, &style::white(star.alpha));
    _ = gradient.add_color_stop(1.0, &style::white(0.0));

    ctx.begin_path();
    ctx.move_to(star.pos.x as f64, star.pos.y as f64);
    ctx.line_to(tail.x as f64, tail.y as f64);
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.set_line_width(star.radius as f64);
    ctx.stroke();

    ctx.set_fill_style_str(&style::white(star.alpha));
    fill_circle(ctx, star.pos.x, star.pos.y, star.radius);
}
