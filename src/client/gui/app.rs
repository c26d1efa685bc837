use iced::widget::text_editor;
use iced::{Application, Command, Element, Theme};
use log::info;
use crate::client::gui::views;
use crate::client::models::app_state::ConsultaState;
use crate::client::models::messages::Message;
use crate::client::services::query_client::QueryClient;

pub struct ConsultaApp {
    pub state: ConsultaState,
    pub client: QueryClient,
    // contenuto dell'area di testo; state.question ne è la copia in chiaro
    pub editor: text_editor::Content,
}

impl Application for ConsultaApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = QueryClient;

    fn new(client: QueryClient) -> (Self, Command<Message>) {
        info!("Form pronto, endpoint {}", client.endpoint());
        (
            ConsultaApp {
                state: ConsultaState::default(),
                client,
                editor: text_editor::Content::new(),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Consultas de Ventas".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        // Il reset richiesto nel passaggio precedente va applicato prima che
        // la view ricostruisca il campo della domanda
        if self.state.apply_pending_reset() {
            self.editor = text_editor::Content::new();
            info!("Sessione ripulita");
        }

        match message {
            Message::QuestionEdited(action) => {
                let is_edit = action.is_edit();
                self.editor.perform(action);
                if !is_edit {
                    // cursore e selezione non cambiano la domanda
                    return Command::none();
                }
                let question = self.editor.text();
                // l'editor aggiunge sempre un a capo finale
                let question = question.strip_suffix('\n').unwrap_or(&question).to_string();
                self.state.update(Message::QuestionChanged(question), &self.client)
            }
            message => self.state.update(message, &self.client),
        }
    }

    fn view(&self) -> Element<Message> {
        views::consulta::view(&self.state, &self.editor)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
