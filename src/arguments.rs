use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Compute distance, speed and calories for workout sensor packages")]
pub(crate) struct Arguments {
  /// Workout package to process, e.g. `RUN:15000,1,75`. Defaults to the
  /// built-in sample packages.
  #[clap(long = "package", short, value_name = "CODE:N,N,...")]
  packages: Vec<Package>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    self.run_with(&mut stdout().lock())
  }

  fn run_with(self, out: &mut impl Write) -> Result {
    let packages = if self.packages.is_empty() {
      Package::samples()
    } else {
      self.packages
    };

    for package in packages {
      match package.info_message() {
        Ok(message) => writeln!(out, "{message}")?,
        Err(error) => {
          warn!(workout_type = %package.workout_type, %error, "skipping package");
          writeln!(out, "{error}")?;
        }
      }
    }

    out.flush()?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::iter};

  fn output(args: &[&str]) -> String {
    let arguments =
      Arguments::try_parse_from(iter::once("fitness-tracker").chain(args.iter().copied()))
        .unwrap();

    let mut out = Vec::new();

    arguments.run_with(&mut out).unwrap();

    String::from_utf8(out).unwrap()
  }

  #[test]
  fn samples() {
    assert_eq!(
      output(&[]),
      concat!(
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.\n",
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.\n",
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.\n",
      )
    );
  }

  #[test]
  fn packages_replace_samples() {
    assert_eq!(
      output(&["-p", "RUN:15000,1,75"]),
      "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.\n"
    );
  }

  #[test]
  fn invalid_package_does_not_abort() {
    assert_eq!(
      output(&[
        "--package",
        "XYZ:1,2,3",
        "--package",
        "SWM:720,1,80,25,40",
        "--package",
        "RUN:15000,0,75",
      ]),
      concat!(
        "Неверный вид тренировки: XYZ\n",
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.\n",
        "duration must be positive, got 0\n",
      )
    );
  }

  #[test]
  fn wrong_parameter_count_does_not_abort() {
    assert_eq!(
      output(&["-p", "WLK:9000,1,75", "-p", "WLK:9000,1,75,180"]),
      concat!(
        "WLK: expected 4 parameters, got 3\n",
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.\n",
      )
    );
  }

  #[test]
  fn malformed_package_is_usage_error() {
    assert!(Arguments::try_parse_from(["fitness-tracker", "-p", "RUN"]).is_err());
  }

  #[test]
  fn output_is_deterministic() {
    assert_eq!(output(&[]), output(&[]));
  }
}
