#![allow(clippy::unreadable_literal)]

pub mod utils;

pub mod day_15;
