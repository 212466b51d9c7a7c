use trainer_core::model::TrainingStats;

/// Pre-formatted lines for the overall statistics block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub sessions: String,
    pub questions: String,
    pub correct: String,
    pub accuracy: String,
    pub is_empty: bool,
}

impl From<&TrainingStats> for StatsVm {
    fn from(stats: &TrainingStats) -> Self {
        Self {
            sessions: format!("Total Sessions: {}", stats.sessions),
            questions: format!("Total Questions: {}", stats.total_questions),
            correct: format!("Correct Answers: {}", stats.correct_answers),
            accuracy: format!("Accuracy: {:.1}%", stats.accuracy()),
            is_empty: stats.sessions == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_example_totals() {
        let stats = TrainingStats {
            sessions: 4,
            total_questions: 57,
            correct_answers: 48,
        };
        let vm = StatsVm::from(&stats);
        assert_eq!(vm.sessions, "Total Sessions: 4");
        assert_eq!(vm.accuracy, "Accuracy: 84.2%");
        assert!(!vm.is_empty);
        assert!(StatsVm::from(&TrainingStats::default()).is_empty);
    }
}
