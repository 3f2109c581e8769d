// core/src/training.rs
use crate::error::{TrainingError, TrainingResult};
use crate::message::InfoMessage;

pub const M_IN_KM: f64 = 1000.0; // m per km
pub const MIN_IN_H: f64 = 60.0; // min per h

/// Sensor fields shared by every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    action: u32,   // steps or strokes
    duration: f64, // h
    weight: f64,   // kg
}

impl TrainingBase {
    pub fn new(action: u32, duration: f64, weight: f64) -> TrainingResult<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TrainingError::InvalidDuration(duration));
        }
        Ok(Self { action, duration, weight })
    }

    #[inline]
    pub fn action(&self) -> u32 {
        self.action
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Common workout behaviour. Distance and mean speed have shared formulas;
/// calories do not, so every workout has to bring its own.
pub trait Training {
    /// Metres covered per step/stroke.
    const LEN_STEP: f64 = 0.65;
    /// Report name of the workout.
    const NAME: &'static str;

    fn base(&self) -> &TrainingBase;

    /// Distance in km.
    fn distance_km(&self) -> f64 {
        f64::from(self.base().action) * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration
    }

    /// Calories burned (kcal).
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            Self::NAME,
            self.base().duration,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}

// ----- Running -----

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration: f64, weight: f64) -> TrainingResult<Self> {
        Ok(Self { base: TrainingBase::new(action, duration, weight)? })
    }
}

impl Training for Running {
    const NAME: &'static str = "Running";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * (self.base.duration * MIN_IN_H)
    }
}

// ----- Sports walking -----

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height: f64, // cm
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> TrainingResult<Self> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            height,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    const NAME: &'static str = "SportsWalking";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        let height_m = self.height / Self::CM_IN_M;
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + (speed_ms.powi(2) / height_m)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.base.weight)
            * (self.base.duration * MIN_IN_H)
    }
}

// ----- Swimming -----

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool: f64, // m
    count_pool: u32,  // laps
}

impl Swimming {
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> TrainingResult<Self> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            length_pool,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    const LEN_STEP: f64 = 1.38;
    const NAME: &'static str = "Swimming";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Pool length × laps, not strokes.
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
            * self.base.duration
    }
}

// ----- Closed set -----

/// One constructed workout of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn name(&self) -> &'static str {
        match self {
            Workout::Running(_) => Running::NAME,
            Workout::SportsWalking(_) => SportsWalking::NAME,
            Workout::Swimming(_) => Swimming::NAME,
        }
    }

    pub fn base(&self) -> &TrainingBase {
        match self {
            Workout::Running(t) => t.base(),
            Workout::SportsWalking(t) => t.base(),
            Workout::Swimming(t) => t.base(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(t) => t.distance_km(),
            Workout::SportsWalking(t) => t.distance_km(),
            Workout::Swimming(t) => t.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(t) => t.mean_speed_kmh(),
            Workout::SportsWalking(t) => t.mean_speed_kmh(),
            Workout::Swimming(t) => t.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(t) => t.spent_calories(),
            Workout::SportsWalking(t) => t.spent_calories(),
            Workout::Swimming(t) => t.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        let info = match self {
            Workout::Running(t) => t.show_training_info(),
            Workout::SportsWalking(t) => t.show_training_info(),
            Workout::Swimming(t) => t.show_training_info(),
        };
        log::debug!(
            "{}: distance={:.3} km speed={:.3} km/h calories={:.3}",
            info.training_type,
            info.distance,
            info.speed,
            info.calories
        );
        info
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
