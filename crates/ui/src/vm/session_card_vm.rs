use services::SessionListItem;
use trainer_core::model::TrainingSessionId;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCardVm {
    pub id: TrainingSessionId,
    pub date_str: String,
    pub difficulty: &'static str,
    pub score: String,
    pub accuracy: String,
    pub time_limit: String,
}

impl From<&SessionListItem> for SessionCardVm {
    fn from(item: &SessionListItem) -> Self {
        Self {
            id: item.id,
            date_str: format_datetime(item.created_at),
            difficulty: item.difficulty.label(),
            score: format!("{}/{}", item.correct_answers, item.total_questions),
            accuracy: format!("{:.1}%", item.accuracy),
            time_limit: item.time_limit.label(),
        }
    }
}

#[must_use]
pub fn map_session_cards(items: &[SessionListItem]) -> Vec<SessionCardVm> {
    items.iter().map(SessionCardVm::from).collect()
}
