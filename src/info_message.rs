use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InfoMessage {
  pub(crate) calories: f64,
  pub(crate) distance: f64,
  pub(crate) duration: f64,
  pub(crate) speed: f64,
  pub(crate) training_type: &'static str,
}

impl Display for InfoMessage {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
      self.training_type, self.duration, self.distance, self.speed, self.calories
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    let message = InfoMessage {
      calories: 699.75,
      distance: 9.75,
      duration: 1.0,
      speed: 9.75,
      training_type: "Running",
    };

    assert_eq!(
      message.to_string(),
      "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
  }

  #[test]
  fn display_fixed_precision() {
    let message = InfoMessage {
      calories: 1234567.891234,
      distance: 0.0004,
      duration: 0.5,
      speed: 12.3457,
      training_type: "Swimming",
    };

    assert_eq!(
      message.to_string(),
      "Тип тренировки: Swimming; Длительность: 0.500 ч.; Дистанция: 0.000 км; Ср. скорость: 12.346 км/ч; Потрачено ккал: 1234567.891."
    );
  }

  #[test]
  fn display_is_deterministic() {
    let message = InfoMessage {
      calories: 157.5,
      distance: 5.85,
      duration: 1.0,
      speed: 5.85,
      training_type: "SportsWalking",
    };

    assert_eq!(message.to_string(), message.to_string());
  }
}
