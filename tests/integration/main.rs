#[path = "../common/mod.rs"]
mod common;

mod drop_tests;
mod scenario_tests;
mod tumble_tests;
