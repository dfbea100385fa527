// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board_layout;
pub mod dictionary;
pub mod display;
pub mod fash;
pub mod game_state;
pub mod grid;
pub mod matrix;
pub mod movegen;
pub mod scanner;
pub mod scoring;
