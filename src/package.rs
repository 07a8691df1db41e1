use super::*;

/// Sensor packages processed when none are given on the command line.
pub(crate) const SAMPLE_PACKAGES: &[(&str, &[f64])] = &[
  ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
  ("RUN", &[15000.0, 1.0, 75.0]),
  ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum WorkoutType {
  Running,
  SportsWalking,
  Swimming,
}

impl WorkoutType {
  fn arity(self) -> usize {
    match self {
      Self::Running => 3,
      Self::SportsWalking => 4,
      Self::Swimming => 5,
    }
  }

  fn code(self) -> &'static str {
    match self {
      Self::Running => "RUN",
      Self::SportsWalking => "WLK",
      Self::Swimming => "SWM",
    }
  }
}

impl Display for WorkoutType {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl FromStr for WorkoutType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "RUN" => Ok(Self::Running),
      "WLK" => Ok(Self::SportsWalking),
      "SWM" => Ok(Self::Swimming),
      _ => Err(Error::InvalidWorkoutType(s.into())),
    }
  }
}

/// Raw readings for one session: a workout type code followed by its
/// positional parameters.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Package {
  pub(crate) workout_type: String,
  pub(crate) data: Vec<f64>,
}

impl Package {
  pub(crate) fn samples() -> Vec<Self> {
    SAMPLE_PACKAGES
      .iter()
      .map(|(workout_type, data)| Self {
        workout_type: (*workout_type).into(),
        data: data.to_vec(),
      })
      .collect()
  }

  pub(crate) fn info_message(&self) -> Result<InfoMessage, Error> {
    read_package(&self.workout_type, &self.data)?.show_training_info()
  }
}

impl FromStr for Package {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let malformed = || Error::MalformedPackage(s.into());

    let (workout_type, data) = s.split_once(':').ok_or_else(malformed)?;

    let workout_type = workout_type.trim();

    if workout_type.is_empty() {
      return Err(malformed());
    }

    let data = data
      .split(',')
      .map(|value| value.trim().parse::<f64>().map_err(|_| malformed()))
      .collect::<Result<Vec<f64>, Error>>()?;

    Ok(Self {
      workout_type: workout_type.into(),
      data,
    })
  }
}

/// Build the workout matching `workout_type` from its positional readings.
pub(crate) fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, Error> {
  let workout_type = workout_type.parse::<WorkoutType>()?;

  if data.len() != workout_type.arity() {
    return Err(Error::WrongParameterCount {
      workout_type,
      expected: workout_type.arity(),
      actual: data.len(),
    });
  }

  debug!(%workout_type, ?data, "reading package");

  let action = action_count(data[0])?;

  Ok(match workout_type {
    WorkoutType::Running => Workout::Running(Running {
      action,
      duration: data[1],
      weight: data[2],
    }),
    WorkoutType::SportsWalking => Workout::SportsWalking(SportsWalking {
      action,
      duration: data[1],
      weight: data[2],
      height: data[3],
    }),
    WorkoutType::Swimming => Workout::Swimming(Swimming {
      action,
      duration: data[1],
      weight: data[2],
      length_pool: data[3],
      count_pool: data[4],
    }),
  })
}

fn action_count(value: f64) -> Result<u32, Error> {
  if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
    Ok(value as u32)
  } else {
    Err(Error::InvalidActionCount(value))
  }
}
