use crate::client::models::messages::Message;
use crate::client::models::ui_state::{DetailView, PeriodView, Warning, MISSING_FIELD};
use crate::client::services::query_client::{QueryClient, QueryOutcome};
use crate::common::json_tree::is_truthy;
use crate::common::models::AnswerPayload;
use iced::Command;
use log::{debug, info};
use std::time::Duration;

pub const EMPTY_QUESTION_WARNING: &str = "Por favor, escribe una pregunta antes de consultar";
/// How long a warning stays in the alert bar.
pub const WARNING_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Querying,
    ClearPending,
}

/// Result of pressing "Consultar".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Dispatch { question: String, include_trace: bool },
    EmptyQuestion,
    AlreadyInFlight,
}

/// Stato di una sessione del form.
#[derive(Debug, Clone, Default)]
pub struct ConsultaState {
    pub question: String,
    pub answer_text: String,
    pub payload: Option<AnswerPayload>,
    pub show_detail: bool,
    pub pending_reset: bool,
    pub loading: bool,
    pub warning: Option<Warning>,
    pub warning_seq: u64,
}

impl ConsultaState {
    pub fn phase(&self) -> Phase {
        if self.pending_reset {
            Phase::ClearPending
        } else if self.loading {
            Phase::Querying
        } else {
            Phase::Idle
        }
    }

    /// Validates the question and moves to `Querying`. The caller sends the
    /// request only on `Dispatch`.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.loading {
            debug!("Submit ignorato: richiesta già in corso");
            return SubmitDecision::AlreadyInFlight;
        }
        self.warning = None;
        if self.question.trim().is_empty() {
            self.show_warning(EMPTY_QUESTION_WARNING);
            return SubmitDecision::EmptyQuestion;
        }
        self.loading = true;
        SubmitDecision::Dispatch {
            question: self.question.clone(),
            include_trace: self.show_detail,
        }
    }

    /// Stores the outcome of the in-flight query, replacing the previous one.
    pub fn finish_query(&mut self, outcome: QueryOutcome) {
        self.loading = false;
        self.answer_text = outcome.display_text;
        self.payload = outcome.payload;
    }

    /// Flags the session for clearing; the next pass applies it. Ignored while
    /// a query is in flight.
    pub fn request_reset(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.pending_reset = true;
        self.warning = None;
        true
    }

    /// Replaces the current warning and returns its sequence number.
    pub fn show_warning(&mut self, message: impl Into<String>) -> u64 {
        self.warning_seq += 1;
        self.warning = Some(Warning { message: message.into(), seq: self.warning_seq });
        self.warning_seq
    }

    /// Timed dismissal: a newer warning stays up.
    pub fn dismiss_warning(&mut self, seq: u64) {
        if self.warning.as_ref().is_some_and(|w| w.seq == seq) {
            self.warning = None;
        }
    }

    /// Applies a pending reset. Must run before the input widgets are built.
    pub fn apply_pending_reset(&mut self) -> bool {
        if !self.pending_reset {
            return false;
        }
        self.question.clear();
        self.answer_text.clear();
        self.payload = None;
        self.pending_reset = false;
        true
    }

    /// Sections to draw under the answer, or `None` when the detail toggle is
    /// off, there is no payload or nothing in it is worth showing.
    pub fn detail_view(&self) -> Option<DetailView<'_>> {
        if !self.show_detail || self.answer_text.is_empty() {
            return None;
        }
        let payload = self.payload.as_ref()?;

        let period = payload.periodo.as_ref().filter(|p| !p.is_empty()).map(|p| {
            let field = |v: &Option<String>| v.clone().unwrap_or_else(|| MISSING_FIELD.to_string());
            PeriodView {
                start: field(&p.start),
                end: field(&p.end),
                label: field(&p.label),
            }
        });
        let trace = payload.traza.as_ref().filter(|t| is_truthy(t));

        if period.is_none() && trace.is_none() {
            return None;
        }
        Some(DetailView { period, trace })
    }

    pub fn update(&mut self, message: Message, client: &QueryClient) -> Command<Message> {
        match message {
            // l'editor vive nella shell GUI, che lo traduce in QuestionChanged
            Message::Rerender | Message::QuestionEdited(_) => {}
            Message::QuestionChanged(question) => {
                self.question = question;
                self.warning = None;
            }
            Message::ToggleDetail(show) => {
                self.show_detail = show;
            }
            Message::Submit => match self.begin_submit() {
                SubmitDecision::Dispatch { question, include_trace } => {
                    info!("Invio domanda (dettaglio: {})", include_trace);
                    let client = client.clone();
                    return Command::perform(
                        async move { client.query(&question, include_trace).await },
                        Message::QueryFinished,
                    );
                }
                SubmitDecision::EmptyQuestion => {
                    let seq = self.warning_seq;
                    return Command::perform(
                        async move {
                            tokio::time::sleep(WARNING_TTL).await;
                        },
                        move |_| Message::ClearWarning(seq),
                    );
                }
                SubmitDecision::AlreadyInFlight => {}
            },
            Message::QueryFinished(outcome) => {
                self.finish_query(outcome);
            }
            Message::Reset => {
                if self.request_reset() {
                    // nuovo passaggio di update prima di ridisegnare gli input
                    return Command::perform(async {}, |_| Message::Rerender);
                }
            }
            Message::ClearWarning(seq) => {
                self.dismiss_warning(seq);
            }
        }
        Command::none()
    }
}
