//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! tuning file only needs the values it wants to change:
//!
//! ```json
//! { "gravity": 0.6, "foreground": { "base_gap": 180.0 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::sim::ObstacleKind;

/// Generation parameters for one scrolling building layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerTuning {
    /// Number of buildings kept alive in the layer
    pub count: usize,
    /// Distance between buildings when a run starts
    pub initial_spacing: f32,
    /// Minimum distance from one building's x to the next
    pub base_gap: f32,
    /// Random extra distance added to `base_gap`
    pub jitter: f32,
    pub width: (f32, f32),
    pub height: (f32, f32),
    /// Fraction of the scroll speed this layer moves at
    pub parallax: f32,
}

impl LayerTuning {
    pub fn foreground() -> Self {
        Self {
            count: FOREGROUND_COUNT,
            initial_spacing: FOREGROUND_SPACING,
            base_gap: FOREGROUND_GAP,
            jitter: FOREGROUND_JITTER,
            width: FOREGROUND_WIDTH,
            height: FOREGROUND_HEIGHT,
            parallax: 1.0,
        }
    }

    pub fn skyline() -> Self {
        Self {
            count: SKYLINE_COUNT,
            initial_spacing: SKYLINE_SPACING,
            base_gap: SKYLINE_GAP,
            jitter: SKYLINE_JITTER,
            width: SKYLINE_WIDTH,
            height: SKYLINE_HEIGHT,
            parallax: SKYLINE_PARALLAX,
        }
    }

    fn validate(&self, field: &'static str) -> SimResult<()> {
        if self.count == 0 {
            return Err(invalid(field, "count must be at least 1"));
        }
        check_range(field, self.width)?;
        check_range(field, self.height)?;
        if self.width.0 <= 0.0 {
            return Err(invalid(field, "building width must be positive"));
        }
        for value in [self.initial_spacing, self.base_gap, self.jitter, self.parallax] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(
                    field,
                    "spacing, gap, jitter and parallax must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Keys a tuning file sets on a layer; missing ones keep the layer's own defaults
#[derive(Debug, Deserialize)]
struct LayerOverrides {
    count: Option<usize>,
    initial_spacing: Option<f32>,
    base_gap: Option<f32>,
    jitter: Option<f32>,
    width: Option<(f32, f32)>,
    height: Option<(f32, f32)>,
    parallax: Option<f32>,
}

impl LayerOverrides {
    fn apply(self, base: LayerTuning) -> LayerTuning {
        LayerTuning {
            count: self.count.unwrap_or(base.count),
            initial_spacing: self.initial_spacing.unwrap_or(base.initial_spacing),
            base_gap: self.base_gap.unwrap_or(base.base_gap),
            jitter: self.jitter.unwrap_or(base.jitter),
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            parallax: self.parallax.unwrap_or(base.parallax),
        }
    }
}

fn foreground_layer<'de, D>(deserializer: D) -> Result<LayerTuning, D::Error>
where
    D: Deserializer<'de>,
{
    LayerOverrides::deserialize(deserializer).map(|o| o.apply(LayerTuning::foreground()))
}

fn skyline_layer<'de, D>(deserializer: D) -> Result<LayerTuning, D::Error>
where
    D: Deserializer<'de>,
{
    LayerOverrides::deserialize(deserializer).map(|o| o.apply(LayerTuning::skyline()))
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player & swing ===
    pub player_radius: f32,
    pub player_start_x: f32,
    pub gravity: f32,
    pub web_tension: f32,
    pub web_slack: f32,
    pub air_damping: f32,
    pub release_boost: f32,

    // === Web targeting ===
    pub anchor_reach: f32,
    pub anchor_aim_ahead: f32,
    pub fallback_anchor_ahead: f32,
    pub fallback_anchor_above: f32,

    // === Difficulty ramp ===
    pub initial_scroll_speed: f32,
    pub scroll_speed_step: f32,
    pub spawn_rate_start: f32,
    pub spawn_rate_step: f32,
    pub spawn_rate_max: f32,

    // === Obstacles ===
    pub obstacle_size: f32,
    pub spawn_margin_x: f32,
    pub spawn_margin_y: f32,
    pub obstacle_max_boost: f32,
    pub drone_hit_radius: f32,
    pub enemy_hit_radius: f32,
    pub sign_hit_radius: f32,
    pub sign_ground_offset: f32,

    // === World layers ===
    #[serde(deserialize_with = "foreground_layer")]
    pub foreground: LayerTuning,
    #[serde(deserialize_with = "skyline_layer")]
    pub skyline: LayerTuning,

    // === Game over ===
    pub restart_countdown_secs: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            player_start_x: PLAYER_START_X,
            gravity: GRAVITY,
            web_tension: WEB_TENSION,
            web_slack: WEB_SLACK,
            air_damping: AIR_DAMPING,
            release_boost: RELEASE_BOOST,

            anchor_reach: ANCHOR_REACH,
            anchor_aim_ahead: ANCHOR_AIM_AHEAD,
            fallback_anchor_ahead: FALLBACK_ANCHOR_AHEAD,
            fallback_anchor_above: FALLBACK_ANCHOR_ABOVE,

            initial_scroll_speed: INITIAL_SCROLL_SPEED,
            scroll_speed_step: SCROLL_SPEED_STEP,
            spawn_rate_start: SPAWN_RATE_START,
            spawn_rate_step: SPAWN_RATE_STEP,
            spawn_rate_max: SPAWN_RATE_MAX,

            obstacle_size: OBSTACLE_SIZE,
            spawn_margin_x: SPAWN_MARGIN_X,
            spawn_margin_y: SPAWN_MARGIN_Y,
            obstacle_max_boost: OBSTACLE_MAX_BOOST,
            drone_hit_radius: DRONE_HIT_RADIUS,
            enemy_hit_radius: ENEMY_HIT_RADIUS,
            sign_hit_radius: SIGN_HIT_RADIUS,
            sign_ground_offset: SIGN_GROUND_OFFSET,

            foreground: LayerTuning::foreground(),
            skyline: LayerTuning::skyline(),

            restart_countdown_secs: RESTART_COUNTDOWN_SECS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document and validate it
    pub fn from_json(json: &str) -> SimResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a tuning file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> SimResult<()> {
        let scalars = [
            ("player_radius", self.player_radius),
            ("player_start_x", self.player_start_x),
            ("gravity", self.gravity),
            ("web_tension", self.web_tension),
            ("web_slack", self.web_slack),
            ("release_boost", self.release_boost),
            ("anchor_reach", self.anchor_reach),
            ("anchor_aim_ahead", self.anchor_aim_ahead),
            ("fallback_anchor_ahead", self.fallback_anchor_ahead),
            ("fallback_anchor_above", self.fallback_anchor_above),
            ("initial_scroll_speed", self.initial_scroll_speed),
            ("scroll_speed_step", self.scroll_speed_step),
            ("spawn_rate_step", self.spawn_rate_step),
            ("spawn_margin_x", self.spawn_margin_x),
            ("spawn_margin_y", self.spawn_margin_y),
            ("obstacle_max_boost", self.obstacle_max_boost),
            ("sign_ground_offset", self.sign_ground_offset),
        ];
        for (field, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be finite and non-negative"));
            }
        }

        let radii = [
            ("player_radius", self.player_radius),
            ("obstacle_size", self.obstacle_size),
            ("drone_hit_radius", self.drone_hit_radius),
            ("enemy_hit_radius", self.enemy_hit_radius),
            ("sign_hit_radius", self.sign_hit_radius),
        ];
        for (field, value) in radii {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be finite and positive"));
            }
        }

        if !(self.air_damping > 0.0 && self.air_damping <= 1.0) {
            return Err(invalid("air_damping", "must be in (0, 1]"));
        }

        for (field, rate) in [
            ("spawn_rate_start", self.spawn_rate_start),
            ("spawn_rate_max", self.spawn_rate_max),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(invalid(field, "must be a probability in [0, 1]"));
            }
        }
        if self.spawn_rate_start > self.spawn_rate_max {
            return Err(invalid("spawn_rate_start", "must not exceed spawn_rate_max"));
        }

        if self.restart_countdown_secs == 0 {
            return Err(invalid("restart_countdown_secs", "must be at least 1"));
        }

        self.foreground.validate("foreground")?;
        self.skyline.validate("skyline")?;
        Ok(())
    }

    /// Collision radius for an obstacle variant
    pub fn hit_radius(&self, kind: ObstacleKind) -> f32 {
        match kind {
            ObstacleKind::Drone => self.drone_hit_radius,
            ObstacleKind::Enemy => self.enemy_hit_radius,
            ObstacleKind::Sign => self.sign_hit_radius,
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> SimError {
    SimError::InvalidTuning {
        field,
        reason: reason.to_string(),
    }
}

fn check_range(field: &'static str, (min, max): (f32, f32)) -> SimResult<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(invalid(field, "range bounds must be finite with min <= max"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.foreground.count, 10);
        assert_eq!(tuning.skyline.count, 20);
        assert_eq!(tuning.skyline.parallax, 0.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "skyline": { "count": 12 } }"#)
            .expect("partial tuning should parse");
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.web_tension, WEB_TENSION);
        assert_eq!(tuning.skyline.count, 12);
        assert_eq!(tuning.foreground, LayerTuning::foreground());
    }

    #[test]
    fn test_partial_layer_keeps_its_own_defaults() {
        let tuning = Tuning::from_json(r#"{ "skyline": { "count": 12 } }"#)
            .expect("partial skyline should parse");
        assert_eq!(tuning.skyline.count, 12);
        assert_eq!(tuning.skyline.parallax, 0.5);
        assert_eq!(tuning.skyline.width, SKYLINE_WIDTH);
        assert_eq!(tuning.skyline.height, SKYLINE_HEIGHT);
        assert_eq!(tuning.skyline.base_gap, SKYLINE_GAP);
        assert_eq!(tuning.skyline.jitter, SKYLINE_JITTER);
        assert_eq!(tuning.skyline.initial_spacing, SKYLINE_SPACING);

        let tuning = Tuning::from_json(r#"{ "foreground": { "base_gap": 180.0 } }"#)
            .expect("partial foreground should parse");
        assert_eq!(tuning.foreground.base_gap, 180.0);
        assert_eq!(tuning.foreground.width, FOREGROUND_WIDTH);
        assert_eq!(tuning.foreground.parallax, 1.0);
        assert_eq!(tuning.skyline, LayerTuning::skyline());
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "air_damping": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "air_damping", .. }));

        let err = Tuning::from_json(r#"{ "spawn_rate_start": 0.9 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "spawn_rate_start", .. }));

        let err = Tuning::from_json(r#"{ "foreground": { "count": 0 } }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "foreground", .. }));

        let err = Tuning::from_json(r#"{ "player_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "player_radius", .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(SimError::TuningParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Tuning::load("/nonexistent/web-swing-tuning.json"),
            Err(SimError::TuningIo(_))
        ));
    }
}
