// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod cheat_config;
pub mod display;
pub mod fash;
pub mod filter;
pub mod lexicon;
pub mod logging;
pub mod pool;
pub mod typist;
