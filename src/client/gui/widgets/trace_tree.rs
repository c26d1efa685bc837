// Vista ad albero della traza
use iced::{Element, Length};
use iced::widget::{Column, Container, Scrollable, Text};
use serde_json::Value;
use crate::client::gui::style::{input_appearance, MONO_FONT, TEXT_PRIMARY};
use crate::client::models::messages::Message;
use crate::common::json_tree::flatten;

const INDENT: f32 = 18.0;

pub fn view<'a>(trace: &Value) -> Element<'a, Message> {
    let items = flatten(trace)
        .into_iter()
        .map(|line| {
            Container::new(Text::new(line.text).font(MONO_FONT).size(13).style(TEXT_PRIMARY))
                .padding([0.0, 0.0, 0.0, INDENT * line.depth as f32])
                .into()
        })
        .collect::<Vec<Element<'a, Message>>>();

    Container::new(
        Scrollable::new(Column::with_children(items).spacing(2).padding(8))
            .height(Length::Fixed(260.0))
    )
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(input_appearance)))
    .into()
}
