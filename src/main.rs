use {
  crate::{
    arguments::Arguments, error::Error, kind::WorkoutKind, package::Package, summary::Summary,
    workout::Workout,
  },
  anyhow::Context,
  clap::Parser,
  std::{
    fmt::{self, Display, Formatter},
    io::{Write, stdout},
    process,
    str::FromStr,
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
};

mod arguments;
mod error;
mod kind;
mod package;
mod summary;
mod workout;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn init_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();
}

fn main() {
  init_logging();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
