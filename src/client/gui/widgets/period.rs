use iced::{Element, Length};
use iced::widget::{Row, Text};
use crate::client::gui::style::TEXT_PRIMARY;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::PeriodView;

pub fn view<'a>(period: PeriodView) -> Element<'a, Message> {
    let cell = |label: &str, value: &str, portion: u16| {
        Text::new(format!("• {}: {}", label, value))
            .size(14)
            .style(TEXT_PRIMARY)
            .width(Length::FillPortion(portion))
    };

    // l'etichetta prende il doppio dello spazio
    Row::new()
        .spacing(12)
        .push(cell("Inicio", &period.start, 1))
        .push(cell("Fin", &period.end, 1))
        .push(cell("Etiqueta", &period.label, 2))
        .into()
}
