use super::*;

#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum Error {
  #[error("Неверный вид тренировки: {0}")]
  InvalidWorkoutType(String),
  #[error("{workout_type}: expected {expected} parameters, got {actual}")]
  WrongParameterCount {
    workout_type: WorkoutType,
    expected: usize,
    actual: usize,
  },
  #[error("action count must be a non-negative whole number, got {0}")]
  InvalidActionCount(f64),
  #[error("duration must be positive, got {0}")]
  NonPositiveDuration(f64),
  #[error("{0} calculation produced invalid result")]
  NonFiniteResult(&'static str),
  #[error("malformed package `{0}`, expected CODE:N,N,...")]
  MalformedPackage(String),
}
