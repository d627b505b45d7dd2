#![allow(dead_code)]

mod env;
mod mock_predict;

pub use env::ConfigHomeGuard;
pub use mock_predict::MockPredictServer;
