use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum WorkoutKind {
  Running,
  Swimming,
  Walking,
}

impl WorkoutKind {
  pub(crate) fn reading_count(self) -> usize {
    match self {
      Self::Running => 3,
      Self::Swimming => 5,
      Self::Walking => 4,
    }
  }

  pub(crate) fn tag(self) -> &'static str {
    match self {
      Self::Running => "RUN",
      Self::Swimming => "SWM",
      Self::Walking => "WLK",
    }
  }
}

impl Display for WorkoutKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Running => "Running",
      Self::Swimming => "Swimming",
      Self::Walking => "SportsWalking",
    })
  }
}

impl FromStr for WorkoutKind {
  type Err = Error;

  fn from_str(tag: &str) -> Result<Self, Self::Err> {
    match tag {
      "RUN" => Ok(Self::Running),
      "SWM" => Ok(Self::Swimming),
      "WLK" => Ok(Self::Walking),
      _ => Err(Error::UnknownWorkoutType { tag: tag.into() }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_tag() {
    assert_eq!("RUN".parse::<WorkoutKind>(), Ok(WorkoutKind::Running));
    assert_eq!("SWM".parse::<WorkoutKind>(), Ok(WorkoutKind::Swimming));
    assert_eq!("WLK".parse::<WorkoutKind>(), Ok(WorkoutKind::Walking));
  }

  #[test]
  fn from_unknown_tag() {
    assert_eq!(
      "XYZ".parse::<WorkoutKind>(),
      Err(Error::UnknownWorkoutType { tag: "XYZ".into() })
    );
  }

  #[test]
  fn tags_are_case_sensitive() {
    assert!("run".parse::<WorkoutKind>().is_err());
  }

  #[test]
  fn tag_round_trip() {
    for kind in [WorkoutKind::Running, WorkoutKind::Swimming, WorkoutKind::Walking] {
      assert_eq!(kind.tag().parse::<WorkoutKind>(), Ok(kind));
    }
  }
}
