use {
  crate::{
    arguments::Arguments,
    error::Error,
    info_message::InfoMessage,
    package::{Package, WorkoutType},
    workout::{Running, SportsWalking, Swimming, Workout},
  },
  clap::Parser,
  std::{
    fmt::{self, Display, Formatter},
    io::{Write, stdout},
    process,
    str::FromStr,
  },
  tracing::{debug, warn},
  tracing_subscriber::EnvFilter,
};

mod arguments;
mod error;
mod info_message;
mod package;
mod workout;

const M_IN_KM: f64 = 1000.0;

const MIN_IN_HOUR: f64 = 60.0;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
    )
    .with_writer(std::io::stderr)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
