//! Colours and widget styles

use iced::{
    theme::{self, Palette},
    widget::{button, container},
    Background, Border, Color, Theme, Vector,
};

pub fn background() -> Color {
    Color::from_rgb8(0x0f, 0x17, 0x2a)
}

pub fn card() -> Color {
    Color::from_rgb8(0x1e, 0x29, 0x3b)
}

pub fn accent() -> Color {
    Color::from_rgb8(0x3b, 0x82, 0xf6)
}

pub fn text() -> Color {
    Color::from_rgb8(0xf1, 0xf5, 0xf9)
}

pub fn muted() -> Color {
    Color::from_rgb8(0x94, 0xa3, 0xb8)
}

pub fn orbit() -> Color {
    Color::from_rgb8(0x1e, 0x3a, 0x8a)
}

pub fn wind() -> Color {
    Color::from_rgb8(0x10, 0xb9, 0x81)
}

pub fn forecast() -> Color {
    Color::from_rgb8(0xf5, 0x9e, 0x0b)
}

pub fn danger() -> Color {
    Color::from_rgb8(0xef, 0x44, 0x44)
}

pub fn warning() -> Color {
    Color::from_rgb8(0xfb, 0xbf, 0x24)
}

pub fn theme() -> Theme {
    Theme::custom(
        "Weather Pro".to_string(),
        Palette {
            background: background(),
            text: text(),
            primary: accent(),
            success: wind(),
            danger: danger(),
        },
    )
}

/// Flat filled panel
pub struct Card(pub Color);

impl container::StyleSheet for Card {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(self.0)),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

pub fn card_style(color: Color) -> theme::Container {
    theme::Container::Custom(Box::new(Card(color)))
}

/// Colours a button takes at rest and under the pointer
pub struct Hover {
    pub idle: Color,
    pub hovered: Color,
    pub idle_text: Color,
    pub hovered_text: Color,
}

impl Hover {
    fn appearance(&self, background: Color, text_color: Color) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

impl button::StyleSheet for Hover {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        self.appearance(self.idle, self.idle_text)
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        self.appearance(self.hovered, self.hovered_text)
    }

    fn pressed(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow_offset: Vector::new(0.0, 1.0),
            ..self.appearance(self.hovered, self.hovered_text)
        }
    }

    fn disabled(&self, _style: &Self::Style) -> button::Appearance {
        self.appearance(
            Color {
                a: 0.4,
                ..self.idle
            },
            Color {
                a: 0.6,
                ..self.idle_text
            },
        )
    }
}

fn hover(idle: Color, hovered: Color, idle_text: Color, hovered_text: Color) -> theme::Button {
    theme::Button::Custom(Box::new(Hover {
        idle,
        hovered,
        idle_text,
        hovered_text,
    }))
}

pub fn search_button() -> theme::Button {
    hover(accent(), Color::from_rgb8(0x25, 0x63, 0xeb), Color::WHITE, Color::WHITE)
}

pub fn minimize_button() -> theme::Button {
    hover(card(), Color::from_rgb8(0x37, 0x41, 0x51), warning(), warning())
}

pub fn close_button() -> theme::Button {
    hover(card(), danger(), danger(), Color::WHITE)
}

pub fn quit_button() -> theme::Button {
    hover(danger(), Color::from_rgb8(0xdc, 0x26, 0x26), Color::WHITE, Color::WHITE)
}

pub fn dialog_button() -> theme::Button {
    hover(card(), Color::from_rgb8(0x37, 0x41, 0x51), text(), Color::WHITE)
}
