//! Prediction request types, client-side validation and the API client.

pub mod api;
pub mod validate;

pub use api::{PredictError, PredictionInput, PredictionResult};
pub use validate::{InputField, RangeViolation, validate};
