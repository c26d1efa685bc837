// Blocco della risposta: banner di conferma e testo citato
use iced::{Element, Length};
use iced::widget::{Column, Container, Text};
use crate::client::gui::style::{quote_appearance, success_appearance, BOLD_FONT, TEXT_PRIMARY};
use crate::client::models::messages::Message;

pub const RECEIVED_BANNER: &str = "Respuesta recibida:";

pub fn view(answer: &str) -> Element<'_, Message> {
    let banner = Container::new(Text::new(RECEIVED_BANNER).font(BOLD_FONT).size(15))
        .width(Length::Fill)
        .padding([10, 14])
        .style(iced::theme::Container::Custom(Box::new(success_appearance)));

    let quote = Container::new(Text::new(format!("> {}", answer)).size(16).style(TEXT_PRIMARY))
        .width(Length::Fill)
        .padding([12, 16])
        .style(iced::theme::Container::Custom(Box::new(quote_appearance)));

    Column::new().spacing(10).push(banner).push(quote).into()
}
