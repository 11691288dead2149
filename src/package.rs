use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Package {
  pub(crate) readings: Vec<f64>,
  pub(crate) tag: String,
}

impl Package {
  pub(crate) fn samples() -> Vec<Self> {
    vec![
      Self::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
      Self::new("RUN", &[15000.0, 1.0, 75.0]),
      Self::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
  }

  pub(crate) fn new(tag: &str, readings: &[f64]) -> Self {
    Self {
      readings: readings.to_vec(),
      tag: tag.into(),
    }
  }

  pub(crate) fn workout(&self) -> Result<Workout, Error> {
    Workout::from_readings(self.tag.parse()?, &self.readings)
  }
}

impl Display for Package {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}:", self.tag)?;

    for (i, reading) in self.readings.iter().enumerate() {
      if i > 0 {
        write!(f, ",")?;
      }

      write!(f, "{reading}")?;
    }

    Ok(())
  }
}

impl FromStr for Package {
  type Err = Error;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let (tag, readings) = input.split_once(':').ok_or_else(|| Error::Package {
      input: input.into(),
    })?;

    let readings = readings
      .split(',')
      .map(str::trim)
      .map(|reading| {
        reading.parse::<f64>().map_err(|_| Error::Reading {
          input: reading.into(),
        })
      })
      .collect::<Result<Vec<f64>, Error>>()?;

    Ok(Self {
      readings,
      tag: tag.trim().into(),
    })
  }
}
