use super::*;

#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum Error {
  #[error("{field} must be a non-negative whole number, got {value}")]
  NotCount { field: &'static str, value: f64 },

  #[error("{kind} readings produce non-finite metrics")]
  NonFinite { kind: WorkoutKind },

  #[error("{field} must be greater than zero, got {value}")]
  NonPositive { field: &'static str, value: f64 },

  #[error("package `{input}` is not of the form TAG:reading,reading,...")]
  Package { input: String },

  #[error("reading `{input}` is not a number")]
  Reading { input: String },

  #[error("{kind} ({tag}) expects {expected} readings, got {actual}", tag = .kind.tag())]
  ReadingCount {
    kind: WorkoutKind,
    expected: usize,
    actual: usize,
  },

  #[error("unknown workout type `{tag}`")]
  UnknownWorkoutType { tag: String },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(
      Error::UnknownWorkoutType { tag: "XYZ".into() }.to_string(),
      "unknown workout type `XYZ`"
    );

    assert_eq!(
      Error::ReadingCount {
        kind: WorkoutKind::Walking,
        expected: 4,
        actual: 3,
      }
      .to_string(),
      "SportsWalking (WLK) expects 4 readings, got 3"
    );

    assert_eq!(
      Error::NonPositive {
        field: "duration",
        value: 0.0,
      }
      .to_string(),
      "duration must be greater than zero, got 0"
    );
  }
}
