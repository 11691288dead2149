use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Extra {
  Running,
  Swimming { pool_length: f64, pool_count: u32 },
  Walking { height: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Workout {
  action: u32,
  duration: f64,
  extra: Extra,
  weight: f64,
}

impl Workout {
  const CM_IN_M: f64 = 100.0;
  const KMH_IN_MS: f64 = 0.278;
  const MIN_IN_HOUR: f64 = 60.0;
  const M_IN_KM: f64 = 1000.0;

  const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
  const RUNNING_SPEED_SHIFT: f64 = 1.79;

  const STEP_LENGTH: f64 = 0.65;
  const STROKE_LENGTH: f64 = 1.38;

  const SWIMMING_MULTIPLIER: f64 = 2.0;
  const SWIMMING_SPEED_SHIFT: f64 = 1.1;

  const WALKING_SPEED_COEFFICIENT: f64 = 0.029;
  const WALKING_WEIGHT_COEFFICIENT: f64 = 0.035;

  /// Readings are `action, duration, weight` followed by `height` for
  /// walking or `pool_length, pool_count` for swimming.
  pub(crate) fn from_readings(kind: WorkoutKind, readings: &[f64]) -> Result<Self, Error> {
    let expected = kind.reading_count();

    if readings.len() != expected {
      return Err(Error::ReadingCount {
        kind,
        expected,
        actual: readings.len(),
      });
    }

    let action = count("action", readings[0])?;
    let duration = positive("duration", readings[1])?;
    let weight = positive("weight", readings[2])?;

    let extra = match kind {
      WorkoutKind::Running => Extra::Running,
      WorkoutKind::Swimming => Extra::Swimming {
        pool_length: positive("pool length", readings[3])?,
        pool_count: count("pool count", readings[4])?,
      },
      WorkoutKind::Walking => Extra::Walking {
        height: positive("height", readings[3])?,
      },
    };

    let workout = Self {
      action,
      duration,
      extra,
      weight,
    };

    if !(workout.mean_speed().is_finite() && workout.calories().is_finite()) {
      return Err(Error::NonFinite { kind });
    }

    debug!(?workout, "constructed workout");

    Ok(workout)
  }

  pub(crate) fn kind(&self) -> WorkoutKind {
    match self.extra {
      Extra::Running => WorkoutKind::Running,
      Extra::Swimming { .. } => WorkoutKind::Swimming,
      Extra::Walking { .. } => WorkoutKind::Walking,
    }
  }

  pub(crate) fn distance(&self) -> f64 {
    let step = match self.extra {
      Extra::Swimming { .. } => Self::STROKE_LENGTH,
      Extra::Running | Extra::Walking { .. } => Self::STEP_LENGTH,
    };

    f64::from(self.action) * step / Self::M_IN_KM
  }

  // Swimming speed comes from pool laps, not strokes.
  pub(crate) fn mean_speed(&self) -> f64 {
    match self.extra {
      Extra::Swimming {
        pool_length,
        pool_count,
      } => pool_length * f64::from(pool_count) / Self::M_IN_KM / self.duration,
      Extra::Running | Extra::Walking { .. } => self.distance() / self.duration,
    }
  }

  pub(crate) fn calories(&self) -> f64 {
    let minutes = self.duration * Self::MIN_IN_HOUR;

    match self.extra {
      Extra::Running => {
        (Self::RUNNING_SPEED_MULTIPLIER * self.mean_speed() + Self::RUNNING_SPEED_SHIFT)
          * self.weight
          / Self::M_IN_KM
          * minutes
      }
      Extra::Swimming { .. } => {
        (self.mean_speed() + Self::SWIMMING_SPEED_SHIFT)
          * Self::SWIMMING_MULTIPLIER
          * self.weight
          * self.duration
      }
      Extra::Walking { height } => {
        let speed = self.mean_speed() * Self::KMH_IN_MS;
        let height = height / Self::CM_IN_M;

        self.weight
          * minutes
          * (Self::WALKING_WEIGHT_COEFFICIENT
            + Self::WALKING_SPEED_COEFFICIENT * (speed.powi(2) / height))
      }
    }
  }

  pub(crate) fn summary(&self) -> Summary {
    Summary {
      calories: self.calories(),
      distance: self.distance(),
      duration: self.duration,
      kind: self.kind(),
      speed: self.mean_speed(),
    }
  }
}

fn count(field: &'static str, value: f64) -> Result<u32, Error> {
  if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
    return Err(Error::NotCount { field, value });
  }

  Ok(value as u32)
}

fn positive(field: &'static str, value: f64) -> Result<f64, Error> {
  if !value.is_finite() || value <= 0.0 {
    return Err(Error::NonPositive { field, value });
  }

  Ok(value)
}
