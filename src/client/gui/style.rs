// Palette e stili condivisi dalle view
use iced::{Color, Font};

pub const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
pub const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
pub const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26); // Input background
pub const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3); // Green accent
pub const WINE_COLOR: Color = Color::from_rgb(0.55, 0.1, 0.2);
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub const MONO_FONT: Font = Font::MONOSPACE;

pub const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn flat(background: Color, radius: f32, border: Option<Color>) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(background)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: if border.is_some() { 1.0 } else { 0.0 },
            color: border.unwrap_or(Color::TRANSPARENT),
            radius: radius.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    flat(BG_MAIN, 0.0, None)
}

pub fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
        ..flat(CARD_BG, 16.0, None)
    }
}

pub fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    flat(INPUT_BG, 12.0, Some(Color::from_rgb(0.3, 0.3, 0.4)))
}

/// Blockquote look for the answer: left accent, darker body.
pub fn quote_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    flat(INPUT_BG, 4.0, Some(ACCENT_COLOR))
}

pub fn success_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    flat(Color::from_rgb(0.1, 0.35, 0.2), 8.0, Some(ACCENT_COLOR))
}

pub const WARNING_COLOR: Color = Color::from_rgb(1.0, 0.8, 0.0);

pub fn warning_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        text_color: Some(Color::BLACK),
        ..flat(WARNING_COLOR, 8.0, None)
    }
}
