//! egui application modules: controller, state and renderer.

pub mod controller;
pub mod state;
pub mod ui;
