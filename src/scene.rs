use std::f32::consts::PI;

use raylib::prelude::*;

use crate::constants::*;
use crate::state::PresentationState;
use crate::tween::Tween;

const ROSE: Color = Color::new(244, 63, 94, 255);
const ROSE_DARK: Color = Color::new(225, 29, 72, 255);
const PANEL: Color = Color::new(0, 0, 0, 230);
const OVERLAY: Color = Color::new(0, 0, 0, 102);
const BACKGROUND_TINT: Color = Color::new(205, 205, 205, 255);

const CARD_MAX_WIDTH: f32 = 896.0;
const CONTROLS_HEIGHT: f32 = 88.0;
const BUTTON_WIDTH: f32 = 120.0;
const BUTTON_HEIGHT: f32 = 40.0;
const ENVELOPE_WIDTH: f32 = 320.0;
const ENVELOPE_HEIGHT: f32 = 300.0;
const PORTRAIT_SIZE: f32 = 256.0;
const TEXT_SIZE: i32 = 36;
const LINE_SPACING: i32 = 10;

pub fn contains(rec: &Rectangle, point: Vector2) -> bool {
    point.x >= rec.x
        && point.x <= rec.x + rec.width
        && point.y >= rec.y
        && point.y <= rec.y + rec.height
}

/// Screen regions for one window size.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub envelope: Rectangle,
    pub card: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32) -> Self {
        let envelope = Rectangle::new(
            (screen_width - ENVELOPE_WIDTH) * 0.5,
            (screen_height - ENVELOPE_HEIGHT) * 0.5,
            ENVELOPE_WIDTH,
            ENVELOPE_HEIGHT,
        );

        let card_width = (screen_width - 32.0).clamp(0.0, CARD_MAX_WIDTH);
        let card_height = screen_height * 0.65;
        let left = (screen_width - card_width) * 0.5;
        let top = (screen_height - card_height - CONTROLS_HEIGHT) * 0.5;
        let card = Rectangle::new(left, top, card_width, card_height);

        let buttons_y = top + card_height + (CONTROLS_HEIGHT - BUTTON_HEIGHT) * 0.5;
        let prev_button = Rectangle::new(left + 24.0, buttons_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next_button = Rectangle::new(
            left + card_width - 24.0 - BUTTON_WIDTH,
            buttons_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        Self { envelope, card, prev_button, next_button }
    }
}

/// Greedy word wrap. Words wider than `max_width` get a line of their own.
pub fn wrap_lines<F>(text: &str, max_width: i32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> i32,
{
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if measure(&candidate) <= max_width {
                line = candidate;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
        }
        lines.push(line);
    }
    lines
}

/// Crops the texture so it fills `dest` without stretching.
pub fn cover_source(tex_width: f32, tex_height: f32, dest_width: f32, dest_height: f32) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 || dest_width <= 0.0 || dest_height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_width, tex_height);
    }
    let tex_ratio = tex_width / tex_height;
    let dest_ratio = dest_width / dest_height;
    if tex_ratio > dest_ratio {
        let width = tex_height * dest_ratio;
        Rectangle::new((tex_width - width) * 0.5, 0.0, width, tex_height)
    } else {
        let height = tex_width / dest_ratio;
        Rectangle::new(0.0, (tex_height - height) * 0.5, tex_width, height)
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

fn scaled_about_center(rec: Rectangle, scale: f32) -> Rectangle {
    let width = rec.width * scale;
    let height = rec.height * scale;
    Rectangle::new(
        rec.x + (rec.width - width) * 0.5,
        rec.y + (rec.height - height) * 0.5,
        width,
        height,
    )
}

/// Everything `Scene::draw` needs from the presenter for one frame.
pub struct Frame<'a> {
    pub state: PresentationState,
    pub text: String,
    pub portrait: bool,
    pub image: Option<&'a Texture2D>,
    pub background: Option<&'a Texture2D>,
    pub can_prev: bool,
    pub can_next: bool,
    pub mouse: Vector2,
}

pub struct Scene {
    clock: f32,
    envelope_exit: Tween,
    content_enter: Tween,
    card_fade: Tween,
    card_opacity: f32,
    shown_index: Option<usize>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            clock: 0.0,
            envelope_exit: Tween::new(0.0, 1.0, ENVELOPE_EXIT_DURATION),
            content_enter: Tween::new(0.0, 1.0, CONTENT_ENTER_DURATION).with_delay(CONTENT_ENTER_DELAY),
            card_fade: Tween::new(0.0, 1.0, CARD_FADE_DURATION),
            card_opacity: 0.0,
            shown_index: None,
        }
    }

    pub fn update(&mut self, dt: f32, state: PresentationState) {
        self.clock += dt;
        let PresentationState::Open(index) = state else {
            return;
        };

        self.envelope_exit.advance(dt);
        self.content_enter.advance(dt);

        if self.shown_index != Some(index) {
            self.shown_index = Some(index);
            self.card_fade.reset();
        }
        self.card_opacity = self.card_fade.apply(dt);
    }

    /// Card opacity and scale for the per-card fade-in.
    pub fn card_fade(&self) -> (f32, f32) {
        let t = self.card_opacity;
        (t, raylib::core::math::lerp(CARD_FADE_START_SCALE, 1.0, t))
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &Layout, frame: &Frame) {
        let screen = Rectangle::new(0.0, 0.0, d.get_screen_width() as f32, d.get_screen_height() as f32);
        d.clear_background(Color::BLACK);
        if let Some(background) = frame.background {
            let source = cover_source(background.width() as f32, background.height() as f32, screen.width, screen.height);
            d.draw_texture_pro(background, source, screen, Vector2::zero(), 0.0, BACKGROUND_TINT);
        }

        match frame.state {
            PresentationState::Closed => self.draw_envelope(d, layout, frame),
            PresentationState::Open(_) => {
                if !self.envelope_exit.is_finished() {
                    self.draw_leaving_envelope(d, layout);
                }
                self.draw_card(d, layout, frame);
            }
        }
    }

    fn draw_envelope(&self, d: &mut RaylibDrawHandle, layout: &Layout, frame: &Frame) {
        let hover = contains(&layout.envelope, frame.mouse);
        let panel = scaled_about_center(layout.envelope, if hover { 1.05 } else { 1.0 });
        d.draw_rectangle_rounded(panel, 0.12, 16, PANEL);

        // Bouncing envelope glyph
        let bounce = (self.clock * PI / ENVELOPE_BOUNCE_PERIOD).sin().abs() * 18.0;
        let glyph = Rectangle::new(
            panel.x + panel.width * 0.5 - 64.0,
            panel.y + 56.0 - bounce,
            128.0,
            96.0,
        );
        d.draw_rectangle_lines_ex(glyph, 6.0, ROSE);
        d.draw_line_ex(
            Vector2::new(glyph.x, glyph.y),
            Vector2::new(glyph.x + glyph.width * 0.5, glyph.y + glyph.height * 0.55),
            6.0,
            ROSE,
        );
        d.draw_line_ex(
            Vector2::new(glyph.x + glyph.width * 0.5, glyph.y + glyph.height * 0.55),
            Vector2::new(glyph.x + glyph.width, glyph.y),
            6.0,
            ROSE,
        );

        let caption = "Click to Open";
        let width = d.measure_text(caption, 30);
        d.draw_text(
            caption,
            (panel.x + (panel.width - width as f32) * 0.5) as i32,
            (panel.y + panel.height - 72.0) as i32,
            30,
            ROSE_DARK,
        );
    }

    fn draw_leaving_envelope(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        let t = self.envelope_exit.value();
        let scale = 1.0 - t;
        if scale <= 0.0 {
            return;
        }
        let width = layout.envelope.width * scale;
        let height = layout.envelope.height * scale;
        let center = Vector2::new(
            layout.envelope.x + layout.envelope.width * 0.5,
            layout.envelope.y + layout.envelope.height * 0.5,
        );
        d.draw_rectangle_pro(
            Rectangle::new(center.x, center.y, width, height),
            Vector2::new(width * 0.5, height * 0.5),
            t * ENVELOPE_EXIT_TURNS,
            faded(PANEL, 1.0 - t),
        );
    }

    fn draw_card(&self, d: &mut RaylibDrawHandle, layout: &Layout, frame: &Frame) {
        let enter = self.content_enter.value();
        if enter <= 0.0 {
            return;
        }
        let (fade, zoom) = self.card_fade();
        let area = scaled_about_center(layout.card, enter);
        let alpha = enter * fade;

        d.draw_rectangle_rounded(area, 0.04, 12, faded(Color::BLACK, enter));

        let font_size = ((TEXT_SIZE as f32) * enter).round().max(1.0) as i32;
        let inner = scaled_about_center(area, zoom);

        if frame.portrait {
            let size = PORTRAIT_SIZE * enter * zoom;
            let portrait = Rectangle::new(
                inner.x + (inner.width - size) * 0.5,
                inner.y + inner.height * 0.12,
                size,
                size,
            );
            if let Some(image) = frame.image {
                let source = cover_source(image.width() as f32, image.height() as f32, size, size);
                d.draw_texture_pro(image, source, portrait, Vector2::zero(), 0.0, faded(Color::WHITE, alpha));
            }
            d.draw_rectangle_lines_ex(portrait, 4.0, faded(Color::WHITE, alpha));

            let text_top = portrait.y + portrait.height + 32.0;
            let text_area = Rectangle::new(inner.x, text_top, inner.width, inner.y + inner.height - text_top);
            draw_wrapped(d, &frame.text, text_area, font_size, faded(Color::WHITE, alpha));
        } else {
            if let Some(image) = frame.image {
                let source = cover_source(image.width() as f32, image.height() as f32, inner.width, inner.height);
                d.draw_texture_pro(image, source, inner, Vector2::zero(), 0.0, faded(Color::WHITE, alpha));
            }
            d.draw_rectangle_rec(inner, faded(OVERLAY, alpha));
            draw_wrapped(d, &frame.text, inner, font_size, faded(Color::WHITE, alpha));
        }

        let prev = scaled_about_center(layout.prev_button, enter);
        let next = scaled_about_center(layout.next_button, enter);
        draw_button(d, prev, "Previous", frame.can_prev, enter, frame.mouse);
        draw_button(d, next, "Next", frame.can_next, enter, frame.mouse);
    }
}

/// Wraps `text` and centres each line inside `area`, returning `(line, x, y)`.
pub fn place_lines<F>(text: &str, area: Rectangle, font_size: i32, measure: F) -> Vec<(String, i32, i32)>
where
    F: Fn(&str) -> i32,
{
    let max_width = (area.width - 64.0) as i32;
    let lines = wrap_lines(text, max_width, &measure);
    let line_height = font_size + LINE_SPACING;
    let block_height = line_height * lines.len() as i32 - LINE_SPACING;
    let mut y = (area.y + (area.height - block_height as f32) * 0.5) as i32;

    let mut placed = Vec::with_capacity(lines.len());
    for line in lines {
        let x = (area.x + (area.width - measure(&line) as f32) * 0.5) as i32;
        placed.push((line, x, y));
        y += line_height;
    }
    placed
}

fn draw_wrapped(d: &mut RaylibDrawHandle, text: &str, area: Rectangle, font_size: i32, color: Color) {
    let placed = place_lines(text, area, font_size, |line| d.measure_text(line, font_size));
    for (line, x, y) in &placed {
        d.draw_text(line, *x, *y, font_size, color);
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rec: Rectangle, label: &str, enabled: bool, alpha: f32, mouse: Vector2) {
    let base = if enabled && contains(&rec, mouse) { ROSE_DARK } else { ROSE };
    let alpha = if enabled { alpha } else { alpha * 0.5 };
    d.draw_rectangle_rounded(rec, 0.25, 8, faded(base, alpha));

    let font_size = 20;
    let width = d.measure_text(label, font_size);
    d.draw_text(
        label,
        (rec.x + (rec.width - width as f32) * 0.5) as i32,
        (rec.y + (rec.height - font_size as f32) * 0.5) as i32,
        font_size,
        faded(Color::WHITE, alpha),
    );
}
