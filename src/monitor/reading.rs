//! reading.rs
//! Sensor reading variants and their text rendering.
//! - Classification: deterministic mapping from sensor id to reading type
//! - Rendering: one output line per reading, format fixed per variant

/// One sensor reading. Exactly one variant is active at a time; every
/// consumer matches exhaustively, so adding a variant breaks all call
/// sites until they handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorReading {
    /// Degrees Celsius.
    Temperature(f32),
    /// Pascal.
    Pressure(i32),
    /// Free-form state text ("OK" in the simulation).
    OperatingState(String),
}

impl SensorReading {
    /// Classify a sensor id into its synthetic reading. Pure; the only
    /// randomness in the system lives in the bulk data set.
    pub fn classify(id: u32) -> Self {
        match id % 3 {
            0 => SensorReading::Temperature(25.3),
            1 => SensorReading::Pressure(1013),
            _ => SensorReading::OperatingState("OK".to_string()),
        }
    }

    /// Render the active variant as one output line. Callers decide where
    /// the line goes; formatting stays pure.
    pub fn render(&self) -> String {
        match self {
            SensorReading::Temperature(v) => format!("Temperature: {v} °C"),
            SensorReading::Pressure(v) => format!("Pressure: {v} Pa"),
            SensorReading::OperatingState(s) => format!("Operating state: {s}"),
        }
    }
}
