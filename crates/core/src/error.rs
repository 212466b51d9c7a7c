use thiserror::Error;

use crate::model::{
    AppSettingsError, DifficultyError, OperandRangeError, TimeLimitError, TrainingRecordError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
    #[error(transparent)]
    OperandRange(#[from] OperandRangeError),
    #[error(transparent)]
    TimeLimit(#[from] TimeLimitError),
    #[error(transparent)]
    TrainingRecord(#[from] TrainingRecordError),
    #[error(transparent)]
    AppSettings(#[from] AppSettingsError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, TimeLimit};

    fn parse_pair(difficulty: &str, time: &str) -> Result<(Difficulty, TimeLimit), Error> {
        Ok((difficulty.parse()?, TimeLimit::parse_label(time)?))
    }

    #[test]
    fn model_errors_convert_into_crate_error() {
        assert!(parse_pair("Hard", "5 seconds").is_ok());
        assert!(matches!(
            parse_pair("Impossible", "5 seconds"),
            Err(Error::Difficulty(_))
        ));
        assert!(matches!(
            parse_pair("Easy", "soon"),
            Err(Error::TimeLimit(_))
        ));
    }
}
