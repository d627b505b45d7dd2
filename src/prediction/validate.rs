//! Client-side range validation gating submission to the service.

use std::fmt;

use super::api::PredictionInput;

/// One of the seven input fields, in the order the validator checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Age,
    Height,
    Weight,
    Duration,
    HeartRate,
    BodyTemp,
    Gender,
}

impl InputField {
    /// User-facing label, matching the original form's language.
    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Usia",
            Self::Height => "Tinggi Badan",
            Self::Weight => "Berat Badan",
            Self::Duration => "Durasi",
            Self::HeartRate => "Detak Jantung",
            Self::BodyTemp => "Suhu Tubuh",
            Self::Gender => "Jenis Kelamin",
        }
    }

    /// Unit suffix shown next to the field label, if any.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::Age => Some("tahun"),
            Self::Height => Some("cm"),
            Self::Weight => Some("kg"),
            Self::Duration => Some("menit"),
            Self::HeartRate => Some("bpm"),
            Self::BodyTemp => Some("°C"),
            Self::Gender => None,
        }
    }

    fn value_in(self, input: &PredictionInput) -> f64 {
        match self {
            Self::Age => input.age,
            Self::Height => input.height,
            Self::Weight => input.weight,
            Self::Duration => input.duration,
            Self::HeartRate => input.heart_rate,
            Self::BodyTemp => input.body_temp,
            Self::Gender => input.gender,
        }
    }

    /// Drag range for the on-screen widget. Looser than the submission
    /// bounds on purpose; only [`validate`] is authoritative.
    pub fn widget_range(self) -> std::ops::RangeInclusive<f64> {
        match self {
            Self::Age => 10.0..=100.0,
            Self::Height => 100.0..=250.0,
            Self::Weight => 30.0..=200.0,
            Self::Duration => 1.0..=300.0,
            Self::HeartRate => 60.0..=220.0,
            Self::BodyTemp => 35.0..=42.0,
            Self::Gender => 0.0..=1.0,
        }
    }
}

/// Inclusive submission bounds, checked in this exact order.
pub const FIELD_BOUNDS: [(InputField, f64, f64); 7] = [
    (InputField::Age, 10.0, 80.0),
    (InputField::Height, 120.0, 220.0),
    (InputField::Weight, 40.0, 120.0),
    (InputField::Duration, 5.0, 180.0),
    (InputField::HeartRate, 60.0, 200.0),
    (InputField::BodyTemp, 36.0, 40.0),
    (InputField::Gender, 0.0, 1.0),
];

/// The first out-of-range field found by [`validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeViolation {
    pub field: InputField,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} harus di antara {} sampai {}",
            self.field.label(),
            self.min,
            self.max
        )
    }
}

/// Check every field against its inclusive bounds, stopping at the first
/// violation. `Ok(())` means the input may be submitted.
pub fn validate(input: &PredictionInput) -> Result<(), RangeViolation> {
    for (field, min, max) in FIELD_BOUNDS {
        let value = field.value_in(input);
        if value < min || value > max {
            return Err(RangeViolation {
                field,
                min,
                max,
                value,
            });
        }
    }
    Ok(())
}
