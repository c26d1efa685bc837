// Barra gialla sopra la card, un solo avviso alla volta
use iced::{Alignment, Color, Element, Length};
use iced::widget::{Container, Row, Text};
use crate::client::gui::style::{warning_appearance, EMOJI_FONT};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{Warning, WARNING_ICON};

pub fn view(warning: &Warning) -> Element<'_, Message> {
    let content = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new(WARNING_ICON).font(EMOJI_FONT).size(20))
        .push(Text::new(&warning.message).size(16).style(Color::BLACK));

    Container::new(content)
        .width(Length::Fill)
        .padding([12, 16])
        .style(iced::theme::Container::Custom(Box::new(warning_appearance)))
        .into()
}
