#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod banner;
pub mod draw;
pub mod inputs;
pub mod session;
pub mod transition;
pub mod walker;

pub const SCREEN_WIDTH: i32 = 240;
pub const SCREEN_HEIGHT: i32 = 160;
pub const GRID_SIZE: i32 = 16;
pub const GRID_X_SIZE: i32 = SCREEN_WIDTH / GRID_SIZE;
pub const GRID_Y_SIZE: i32 = SCREEN_HEIGHT / GRID_SIZE;
