//! Scene rendering
//!
//! Draws a [`Game`] through the pen API only. Nothing here touches game
//! state; [`render`] is called once per tick after the update.

pub mod framebuffer;
pub mod sprites;

use glam::IVec2;

pub use framebuffer::FrameBuffer;
pub use sprites::{ENEMY_ICON, GUN_ICON, Icon};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{Display, Pen};
use crate::sim::{BounceState, Building, GROUND_Y, Game, InvadersState, PongState, TankState};

/// Pens registered once at startup
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub black: Pen,
    pub white: Pen,
    pub red: Pen,
    pub blue: Pen,
    pub yellow: Pen,
    pub sky: Pen,
    pub ground: Pen,
    pub information: Pen,
    pub building: Pen,
    pub windows: Pen,
    pub tank: Pen,
    pub gun: Pen,
    pub bullet: Pen,
}

impl Palette {
    pub fn register(display: &mut impl Display) -> Self {
        Self {
            black: display.create_color(0, 0, 0),
            white: display.create_color(255, 255, 255),
            red: display.create_color(255, 0, 0),
            blue: display.create_color(0, 0, 255),
            yellow: display.create_color(255, 255, 0),
            sky: display.create_color(165, 182, 209),
            ground: display.create_color(9, 84, 5),
            information: display.create_color(50, 50, 50),
            building: display.create_color(45, 45, 45),
            windows: display.create_color(50, 250, 25),
            tank: display.create_color(150, 150, 150),
            gun: display.create_color(100, 100, 100),
            bullet: display.create_color(0, 0, 0),
        }
    }
}

/// Lives row on the invaders HUD
const LIVES_ICON_ORIGIN: IVec2 = IVec2::new(260, 6);
const LIVES_ICON_PITCH: i32 = 15;

/// Draw one full frame (without presenting it)
pub fn render(game: &Game, palette: &Palette, display: &mut impl Display) {
    match game {
        Game::Pong(s) => render_pong(s, palette, display),
        Game::Bounce(s) => render_bounce(s, palette, display),
        Game::Invaders(s) => render_invaders(s, palette, display),
        Game::Tank(s) => render_tank(s, palette, display),
    }
}

/// Final screen for games that can end
pub fn render_game_over(score: u32, palette: &Palette, display: &mut impl Display) {
    display.set_draw_color(palette.black);
    display.clear();
    display.set_draw_color(palette.white);
    display.draw_text("Game Over", 75, 80, 3);
    display.draw_text(&format!("Score {score}"), 100, 120, 1);
}

pub fn draw_icon(display: &mut impl Display, icon: &Icon, origin: IVec2) {
    for p in icon.pixels() {
        let p = origin + p;
        display.draw_pixel(p.x, p.y);
    }
}

fn render_pong(state: &PongState, palette: &Palette, display: &mut impl Display) {
    display.set_draw_color(palette.black);
    display.clear();

    let m = state.tuning.field_margin;
    let (right, bottom) = (SCREEN_WIDTH - m, SCREEN_HEIGHT - m);
    display.set_draw_color(palette.white);
    display.draw_text(&format!("Fails {}", state.fails), m, 15, 1);
    display.draw_line(m, m, right, m, 1);
    display.draw_line(right, m, right, bottom, 1);
    display.draw_line(m, bottom, right, bottom, 1);
    // Without respawn the ball never leaves: close the field
    if !state.tuning.respawn_on_miss {
        display.draw_line(m, m, m, bottom, 1);
    }

    let paddle = &state.paddle;
    display.set_draw_color(palette.red);
    display.draw_rect(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height);

    display.set_draw_color(palette.blue);
    display.draw_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius);
}

fn render_bounce(state: &BounceState, palette: &Palette, display: &mut impl Display) {
    display.set_draw_color(palette.black);
    display.clear();

    display.set_draw_color(palette.white);
    display.draw_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius);
    let paddle = &state.paddle;
    display.draw_rect(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height);
}

fn render_invaders(state: &InvadersState, palette: &Palette, display: &mut impl Display) {
    display.set_draw_color(palette.black);
    display.clear();

    display.set_draw_color(palette.white);
    display.draw_text(&format!("Score {}", state.interface.score), 5, 5, 1);
    display.draw_text("Lives", 230, 5, 1);

    display.set_draw_color(palette.yellow);
    for i in 0..state.interface.lives as i32 {
        let origin = LIVES_ICON_ORIGIN + IVec2::new(i * LIVES_ICON_PITCH, 0);
        draw_icon(display, &GUN_ICON, origin);
    }

    display.set_draw_color(palette.white);
    for enemy in &state.formation.enemies {
        draw_icon(display, &ENEMY_ICON, enemy.pos);
    }

    let bullet = &state.gun.bullet;
    if bullet.in_flight() {
        display.set_draw_color(palette.blue);
        display.draw_pixel(bullet.pos.x, bullet.pos.y);
    }

    display.set_draw_color(palette.yellow);
    draw_icon(display, &GUN_ICON, state.gun.pos);
}

fn render_tank(state: &TankState, palette: &Palette, display: &mut impl Display) {
    display.set_draw_color(palette.sky);
    display.clear();

    display.set_draw_color(palette.ground);
    display.draw_rect(0, GROUND_Y, SCREEN_WIDTH, SCREEN_HEIGHT);

    display.set_draw_color(palette.information);
    display.draw_text(&format!("Level: {}", state.level), 10, 10, 1);
    display.draw_text(&format!("Lives: {}", state.interface.lives), 120, 10, 1);
    display.draw_text(&format!("Score: {}", state.interface.score), 230, 10, 1);

    for building in &state.buildings {
        draw_building(building, palette, display);
    }

    let tank = &state.tank;
    if tank.bullet.in_flight() {
        display.set_draw_color(palette.bullet);
        display.draw_pixel(tank.bullet.pos.x, tank.bullet.pos.y);
    }

    let pivot = tank.pivot;
    let tip = tank.barrel_tip(state.tuning.gun_length);
    display.set_draw_color(palette.gun);
    display.draw_line(pivot.x, pivot.y, tip.x, tip.y, 3);

    display.set_draw_color(palette.tank);
    display.draw_circle(pivot.x, pivot.y, 5);
    display.draw_rect(pivot.x - 10, pivot.y, 20, 6);
}

fn draw_building(building: &Building, palette: &Palette, display: &mut impl Display) {
    display.set_draw_color(palette.building);
    let (pos, size) = building.body();
    display.draw_rect(pos.x, pos.y, size.x, size.y);
    for (pos, size) in building.roof_rect().into_iter().chain(building.foundation_rect()) {
        display.draw_rect(pos.x, pos.y, size.x, size.y);
    }

    display.set_draw_color(palette.windows);
    for (pos, size) in building.window_rows() {
        display.draw_rect(pos.x, pos.y, size.x, size.y);
    }

    let mullions = building.mullions();
    if !mullions.is_empty() {
        display.set_draw_color(palette.building);
        let (top, bottom) = (building.pos.y, building.pos.y + building.height);
        for x in mullions {
            display.draw_line(x, top, x, bottom, 1);
        }
    }
}
