use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Print distance, speed and calories for workout sensor packages")]
pub(crate) struct Arguments {
  /// Workout package as TAG:reading,reading,... (RUN, WLK or SWM). Repeatable.
  /// Without any, a built-in sample set is reported.
  #[clap(long, short)]
  package: Vec<Package>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let packages = if self.package.is_empty() {
      Package::samples()
    } else {
      self.package
    };

    report(&packages, &mut stdout().lock())
  }
}

fn report(packages: &[Package], out: &mut impl Write) -> Result {
  for package in packages {
    let workout = package.workout().map_err(|error| {
      warn!(%package, %error, "rejected package");
      error
    });

    let workout = workout.with_context(|| format!("invalid package `{package}`"))?;

    info!(%package, kind = %workout.kind(), "reporting workout");

    writeln!(out, "{}", workout.summary())?;
  }

  out.flush()?;

  Ok(())
}
