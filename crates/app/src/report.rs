use std::fmt::Write as _;

use services::StatsOverview;
use ui::vm::{StatsVm, map_session_cards};

/// Plain-text rendering of `stats` output.
#[must_use]
pub fn render_text(overview: &StatsOverview) -> String {
    let stats = StatsVm::from(&overview.stats);
    let mut out = String::new();
    let _ = writeln!(out, "{}", stats.sessions);
    let _ = writeln!(out, "{}", stats.questions);
    let _ = writeln!(out, "{}", stats.correct);
    let _ = writeln!(out, "{}", stats.accuracy);

    out.push('\n');
    if overview.recent.is_empty() {
        out.push_str("No training sessions yet.\n");
        return out;
    }
    out.push_str("Recent sessions:\n");
    for card in map_session_cards(&overview.recent) {
        let _ = writeln!(
            out,
            "  {}  {:<6}  {:>7}  {:>6}  {}",
            card.date_str, card.difficulty, card.score, card.accuracy, card.time_limit
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::SessionListItem;
    use trainer_core::model::{Difficulty, TimeLimit, TrainingSessionId, TrainingStats};
    use trainer_core::time::fixed_now;

    #[test]
    fn renders_totals_and_sessions() {
        let overview = StatsOverview {
            stats: TrainingStats {
                sessions: 1,
                total_questions: 10,
                correct_answers: 8,
            },
            accuracy: 80.0,
            recent: vec![SessionListItem {
                id: TrainingSessionId::new(1),
                difficulty: Difficulty::Easy,
                total_questions: 10,
                correct_answers: 8,
                time_limit: TimeLimit::Unlimited,
                accuracy: 80.0,
                created_at: fixed_now(),
            }],
        };

        let text = render_text(&overview);
        assert!(text.starts_with("Total Sessions: 1\n"));
        assert!(text.contains("Accuracy: 80.0%"));
        assert!(text.contains("2023-11-14 22:13"));
        assert!(text.contains("8/10"));
        assert!(text.contains("Unlimited"));
    }

    #[test]
    fn renders_empty_history() {
        let overview = StatsOverview {
            stats: TrainingStats::default(),
            accuracy: 0.0,
            recent: Vec::new(),
        };
        let text = render_text(&overview);
        assert!(text.contains("Accuracy: 0.0%"));
        assert!(text.ends_with("No training sessions yet.\n"));
    }
}
