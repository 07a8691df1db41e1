use super::*;

/// Distance covered by a single step, in meters.
const LEN_STEP: f64 = 0.65;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Running {
  pub(crate) action: u32,
  pub(crate) duration: f64,
  pub(crate) weight: f64,
}

impl Running {
  const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
  const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

  fn spent_calories(&self, mean_speed: f64) -> f64 {
    (Self::CALORIES_MEAN_SPEED_MULTIPLIER * mean_speed - Self::CALORIES_MEAN_SPEED_SHIFT)
      * self.weight
      / M_IN_KM
      * (self.duration * MIN_IN_HOUR)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SportsWalking {
  pub(crate) action: u32,
  pub(crate) duration: f64,
  pub(crate) weight: f64,
  pub(crate) height: f64,
}

impl SportsWalking {
  const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
  const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

  // The speed/height ratio is floored before scaling, so it only
  // contributes once the squared speed reaches the height.
  fn spent_calories(&self, mean_speed: f64) -> f64 {
    (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
      + floor_div(mean_speed.powi(2), self.height)
        * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
        * self.weight)
      * (self.duration * MIN_IN_HOUR)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Swimming {
  pub(crate) action: u32,
  pub(crate) duration: f64,
  pub(crate) weight: f64,
  pub(crate) length_pool: f64,
  pub(crate) count_pool: f64,
}

impl Swimming {
  /// Distance covered by a single stroke, in meters.
  const LEN_STEP: f64 = 1.38;
  const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
  const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

  fn mean_speed(&self) -> f64 {
    self.length_pool * self.count_pool / M_IN_KM / self.duration
  }

  fn spent_calories(&self, mean_speed: f64) -> f64 {
    (mean_speed + Self::CALORIES_MEAN_SPEED_SHIFT) * Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
  }
}

/// A single training session built from sensor readings.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Workout {
  Running(Running),
  SportsWalking(SportsWalking),
  Swimming(Swimming),
}

impl Workout {
  fn action(&self) -> u32 {
    match self {
      Self::Running(running) => running.action,
      Self::SportsWalking(walking) => walking.action,
      Self::Swimming(swimming) => swimming.action,
    }
  }

  /// Distance in kilometers.
  pub(crate) fn distance(&self) -> f64 {
    f64::from(self.action()) * self.len_step() / M_IN_KM
  }

  pub(crate) fn duration(&self) -> f64 {
    match self {
      Self::Running(running) => running.duration,
      Self::SportsWalking(walking) => walking.duration,
      Self::Swimming(swimming) => swimming.duration,
    }
  }

  fn len_step(&self) -> f64 {
    match self {
      Self::Running(_) | Self::SportsWalking(_) => LEN_STEP,
      Self::Swimming(_) => Swimming::LEN_STEP,
    }
  }

  /// Mean speed in km/h. Swimming derives it from the pool geometry rather
  /// than from the stroke count.
  pub(crate) fn mean_speed(&self) -> Result<f64, Error> {
    let duration = self.duration();

    if duration.is_nan() || duration <= 0.0 {
      return Err(Error::NonPositiveDuration(duration));
    }

    let mean_speed = match self {
      Self::Running(_) | Self::SportsWalking(_) => self.distance() / duration,
      Self::Swimming(swimming) => swimming.mean_speed(),
    };

    finite("mean speed", mean_speed)
  }

  pub(crate) fn show_training_info(&self) -> Result<InfoMessage, Error> {
    let speed = self.mean_speed()?;

    Ok(InfoMessage {
      training_type: self.training_type(),
      duration: self.duration(),
      distance: finite("distance", self.distance())?,
      speed,
      calories: self.calories(speed)?,
    })
  }

  /// Energy spent in kilocalories.
  pub(crate) fn spent_calories(&self) -> Result<f64, Error> {
    self.calories(self.mean_speed()?)
  }

  fn calories(&self, mean_speed: f64) -> Result<f64, Error> {
    let calories = match self {
      Self::Running(running) => running.spent_calories(mean_speed),
      Self::SportsWalking(walking) => walking.spent_calories(mean_speed),
      Self::Swimming(swimming) => swimming.spent_calories(mean_speed),
    };

    debug!(training_type = self.training_type(), mean_speed, calories);

    finite("calories", calories)
  }

  pub(crate) fn training_type(&self) -> &'static str {
    match self {
      Self::Running(_) => "Running",
      Self::SportsWalking(_) => "SportsWalking",
      Self::Swimming(_) => "Swimming",
    }
  }
}

/// Floor division of the exact quotient, so a remainder just short of `b`
/// never rounds the result up to the next whole number.
fn floor_div(a: f64, b: f64) -> f64 {
  let remainder = a % b;

  let mut quotient = (a - remainder) / b;

  if remainder != 0.0 && (b < 0.0) != (remainder < 0.0) {
    quotient -= 1.0;
  }

  if quotient == 0.0 {
    return 0.0_f64.copysign(a / b);
  }

  let floor = quotient.floor();

  if quotient - floor > 0.5 {
    floor + 1.0
  } else {
    floor
  }
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, Error> {
  if value.is_finite() {
    Ok(value)
  } else {
    Err(Error::NonFiniteResult(quantity))
  }
}
