#![deny(rust_2018_idioms)]

#[macro_use]
extern crate bitflags;

pub mod commands;
pub mod config;
pub mod localization;
pub mod messages;
