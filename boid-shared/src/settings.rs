use boid_core::{BoidConfig, Bounds, SpeedClamp, INITIAL_SPEED};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating [`SimulationSettings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("`{field}` must be a finite number")]
    NonFinite { field: &'static str },
    #[error("`{field}` must not be negative")]
    Negative { field: &'static str },
    #[error("`{field}` must be greater than zero")]
    NotPositive { field: &'static str },
    #[cfg(feature = "std")]
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns `value` unchanged when it is finite.
pub fn ensure_finite(field: &'static str, value: f32) -> Result<f32, SettingsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SettingsError::NonFinite { field })
    }
}

/// Mirror of [`SpeedClamp`] for settings documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedClampMode {
    #[default]
    PerAxis,
    Magnitude,
}

impl From<SpeedClampMode> for SpeedClamp {
    fn from(mode: SpeedClampMode) -> Self {
        match mode {
            SpeedClampMode::PerAxis => SpeedClamp::PerAxis,
            SpeedClampMode::Magnitude => SpeedClamp::Magnitude,
        }
    }
}

/// Every knob of a simulation run
///
/// Missing fields in a settings document take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub agent_count: usize,
    pub protected_range: f32,
    pub visual_range: f32,
    pub avoid_factor: f32,
    pub matching_factor: f32,
    pub centering_factor: f32,
    pub max_speed: f32,
    pub speed_clamp: SpeedClampMode,
    pub border_margin: f32,
    pub turn_factor: f32,
    pub initial_speed: f32,
    /// Inset from the viewport edges used when placing the initial flock.
    pub spawn_margin: f32,
    pub width: f32,
    pub height: f32,
    /// Physics ticks per second.
    pub update_hz: f32,
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self::from_config(&BoidConfig::default())
    }
}

impl SimulationSettings {
    /// Separation-only flock without border turning.
    pub fn minimal() -> Self {
        Self::from_config(&BoidConfig::minimal())
    }

    fn from_config(config: &BoidConfig) -> Self {
        Self {
            agent_count: 50,
            protected_range: config.protected_range,
            visual_range: config.visual_range,
            avoid_factor: config.avoid_factor,
            matching_factor: config.matching_factor,
            centering_factor: config.centering_factor,
            max_speed: config.max_speed,
            speed_clamp: match config.speed_clamp {
                SpeedClamp::PerAxis => SpeedClampMode::PerAxis,
                SpeedClamp::Magnitude => SpeedClampMode::Magnitude,
            },
            border_margin: config.border_margin,
            turn_factor: config.turn_factor,
            initial_speed: INITIAL_SPEED,
            spawn_margin: 0.0,
            width: 800.0,
            height: 600.0,
            update_hz: 50.0,
            seed: None,
        }
    }

    /// Parses a JSON settings document and validates it.
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let floats = [
            ("protected_range", self.protected_range),
            ("visual_range", self.visual_range),
            ("avoid_factor", self.avoid_factor),
            ("matching_factor", self.matching_factor),
            ("centering_factor", self.centering_factor),
            ("max_speed", self.max_speed),
            ("border_margin", self.border_margin),
            ("turn_factor", self.turn_factor),
            ("initial_speed", self.initial_speed),
            ("spawn_margin", self.spawn_margin),
            ("width", self.width),
            ("height", self.height),
            ("update_hz", self.update_hz),
        ];
        for (field, value) in floats {
            ensure_finite(field, value)?;
        }

        let non_negative = [
            ("protected_range", self.protected_range),
            ("visual_range", self.visual_range),
            ("border_margin", self.border_margin),
            ("initial_speed", self.initial_speed),
            ("spawn_margin", self.spawn_margin),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(SettingsError::Negative { field });
            }
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("update_hz", self.update_hz),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(SettingsError::NotPositive { field });
            }
        }

        Ok(())
    }

    pub fn to_boid_config(&self) -> BoidConfig {
        BoidConfig {
            protected_range: self.protected_range,
            visual_range: self.visual_range,
            avoid_factor: self.avoid_factor,
            matching_factor: self.matching_factor,
            centering_factor: self.centering_factor,
            max_speed: self.max_speed,
            speed_clamp: self.speed_clamp.into(),
            border_margin: self.border_margin,
            turn_factor: self.turn_factor,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}
