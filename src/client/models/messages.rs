use crate::client::services::query_client::QueryOutcome;
use iced::widget::text_editor;

#[derive(Debug, Clone)]
pub enum Message {
    QuestionChanged(String),
    QuestionEdited(text_editor::Action),
    ToggleDetail(bool),
    Submit,
    QueryFinished(QueryOutcome),
    // Reset in due passi: Reset alza il flag, Rerender lo applica
    Reset,
    Rerender,
    // chiude l'avviso con quel seq, se è ancora quello mostrato
    ClearWarning(u64),
}
