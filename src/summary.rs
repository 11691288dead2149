use super::*;

#[derive(Debug, Clone)]
pub(crate) struct Summary {
  pub(crate) calories: f64,
  pub(crate) distance: f64,
  pub(crate) duration: f64,
  pub(crate) kind: WorkoutKind,
  pub(crate) speed: f64,
}

impl Display for Summary {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
      self.kind, self.duration, self.distance, self.speed, self.calories
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    let summary = Summary {
      calories: 797.805,
      distance: 9.75,
      duration: 1.0,
      kind: WorkoutKind::Running,
      speed: 9.75,
    };

    assert_eq!(
      summary.to_string(),
      "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805."
    );
  }

  #[test]
  fn sample_reports() {
    let cases = [
      (
        WorkoutKind::Running,
        vec![15000.0, 1.0, 75.0],
        "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805.",
      ),
      (
        WorkoutKind::Swimming,
        vec![720.0, 1.0, 80.0, 25.0, 40.0],
        "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
      ),
      (
        WorkoutKind::Walking,
        vec![9000.0, 1.0, 75.0, 180.0],
        "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 349.252.",
      ),
    ];

    for (kind, readings, expected) in cases {
      assert_eq!(
        Workout::from_readings(kind, &readings)
          .unwrap()
          .summary()
          .to_string(),
        expected
      );
    }
  }
}
