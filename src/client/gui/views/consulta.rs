use iced::{Alignment, Element, Length};
use iced::widget::{text_editor, Button, Checkbox, Column, Container, Row, Scrollable, Space, Text, TextEditor};
use crate::client::gui::style::{
    bg_main_appearance, card_appearance, input_appearance, ACCENT_COLOR, BOLD_FONT, EMOJI_FONT,
    TEXT_PRIMARY, TEXT_SECONDARY, WINE_COLOR,
};
use crate::client::gui::widgets;
use crate::client::models::app_state::{ConsultaState, Phase};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::DetailView;

pub const TITLE: &str = "Exportación de Vinos";
pub const SUBTITLE: &str =
    "Haz una pregunta sobre ventas de exportación y obtén una respuesta basada en datos de ventas";
pub const QUESTION_LABEL: &str = "Escribe tu pregunta:";
pub const QUESTION_PLACEHOLDER: &str =
    "¿Qué vendedor ha cerrado más negocios de exportación de vinos de la marca Pionero en América Norte?";
pub const DETAIL_LABEL: &str = "Mostrar detalle";
pub const DETAIL_HELP: &str = "Muestra período y trazas si están disponibles";
pub const LOADING_TEXT: &str = "Obteniendo la respuesta...";

/// `editor` holds the question text; the shell keeps it in sync with `state.question`.
pub fn view<'a>(state: &'a ConsultaState, editor: &'a text_editor::Content) -> Element<'a, Message> {
    let busy = state.phase() == Phase::Querying;

    let warning_bar = if let Some(warning) = &state.warning {
        Container::new(widgets::warning_bar::view(warning))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
    } else {
        Container::new(Space::new(Length::Fill, Length::Fixed(0.0)))
            .width(Length::Fill)
    };

    let title = Row::new()
        .spacing(10)
        .align_items(Alignment::Center)
        .push(Text::new(TITLE).size(36).font(BOLD_FONT).style(TEXT_PRIMARY))
        .push(Text::new("🍷").font(EMOJI_FONT).size(32));

    let subtitle = Text::new(SUBTITLE).size(15).style(TEXT_SECONDARY);

    let question_field = Column::new()
        .spacing(8)
        .push(Text::new(QUESTION_LABEL).size(14).style(TEXT_SECONDARY))
        .push(
            // area multilinea: Invio va a capo, si consulta solo col bottone
            Container::new(
                TextEditor::new(editor)
                    .on_action(Message::QuestionEdited)
                    .height(Length::Fixed(110.0))
                    .padding(12)
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance)))
        );
    let question_field = if state.question.is_empty() {
        question_field.push(Text::new(QUESTION_PLACEHOLDER).size(13).style(TEXT_SECONDARY))
    } else {
        question_field
    };

    let detail_toggle = Column::new()
        .spacing(4)
        .push(
            Checkbox::new(DETAIL_LABEL, state.show_detail)
                .on_toggle(Message::ToggleDetail)
                .size(18)
                .text_size(14)
        )
        .push(Text::new(DETAIL_HELP).size(12).style(TEXT_SECONDARY));

    // una sola richiesta in volo: i bottoni restano disabilitati finché non arriva la risposta
    let submit_button = {
        let button = Button::new(
            Container::new(Text::new("Consultar").font(BOLD_FONT).size(16))
                .width(Length::Fill)
                .center_x()
        )
        .style(iced::theme::Button::Primary)
        .width(Length::FillPortion(1))
        .padding(12);
        if busy { button } else { button.on_press(Message::Submit) }
    };

    let reset_button = {
        let button = Button::new(
            Container::new(Text::new("Limpiar").size(16))
                .width(Length::Fill)
                .center_x()
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::FillPortion(1))
        .padding(12);
        if busy { button } else { button.on_press(Message::Reset) }
    };

    let actions = Row::new().spacing(12).push(submit_button).push(reset_button);

    let loading_element: Element<Message> = if busy {
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("⏳").font(EMOJI_FONT).size(16))
            .push(Text::new(LOADING_TEXT).size(14).style(ACCENT_COLOR))
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let mut card_content = Column::new()
        .spacing(20)
        .padding(28)
        .push(Column::new().spacing(8).push(title).push(subtitle))
        .push(question_field)
        .push(detail_toggle)
        .push(actions)
        .push(loading_element);

    if !state.answer_text.is_empty() {
        card_content = card_content.push(widgets::alert::view(&state.answer_text));
        if let Some(detail) = state.detail_view() {
            card_content = card_content.push(detail_section(detail));
        }
    }

    let card = Container::new(card_content)
        .width(Length::Fixed(760.0))
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let main_content = Column::new()
        .width(Length::Fill)
        .push(warning_bar)
        .push(
            Container::new(card)
                .width(Length::Fill)
                .padding([24, 20])
                .center_x()
        );

    Container::new(Scrollable::new(main_content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}

fn detail_section<'a>(detail: DetailView<'a>) -> Element<'a, Message> {
    let subheader = |text: &'static str| Text::new(text).size(20).font(BOLD_FONT).style(WINE_COLOR);

    let mut section = Column::new().spacing(12);
    if let Some(period) = detail.period {
        section = section
            .push(subheader("Periodo"))
            .push(widgets::period::view(period));
    }
    if let Some(trace) = detail.trace {
        section = section
            .push(subheader("Traza"))
            .push(widgets::trace_tree::view(trace));
    }
    section.into()
}
