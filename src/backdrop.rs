use crate::app::Message;
use crate::style;
use iced::{
    widget::canvas::{self, Frame, Path, Stroke, Text},
    Point, Rectangle, Theme,
};

const ORBITS: usize = 8;
const ORBIT_RADIUS: f32 = 10.0;
const CIRCLE_RADIUS: f32 = 30.0;
/// Degrees the orbits advance per animation tick
pub const STEP_DEGREES: f32 = 0.5;

/// Decorative band of outlined circles drifting on small circular paths.
///
/// Only the shared phase is animated; each circle starts 45° ahead of the
/// previous one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backdrop {
    phase: f32,
}

impl Backdrop {
    pub fn advance(&mut self) {
        self.phase = (self.phase + STEP_DEGREES) % 360.0;
    }

    /// Circle centres for a band of the given size, 4 per row, 2 rows
    pub fn centers(&self, width: f32, height: f32) -> [Point; ORBITS] {
        let column_width = width / 4.0;
        let row_height = height / 2.0;

        std::array::from_fn(|i| {
            let home_x = (i % 4) as f32 * column_width + column_width / 2.0;
            let home_y = (i / 4) as f32 * row_height + row_height / 2.0;
            let angle = (i as f32 * 45.0 + self.phase).to_radians();
            Point::new(
                home_x + angle.sin() * ORBIT_RADIUS,
                home_y + angle.cos() * ORBIT_RADIUS,
            )
        })
    }
}

impl canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), style::background());

        for center in self.centers(bounds.width, bounds.height) {
            frame.stroke(
                &Path::circle(center, CIRCLE_RADIUS),
                Stroke::default().with_width(2.0).with_color(style::orbit()),
            );
        }

        frame.fill_text(Text {
            content: "Get real-time weather for any location".to_string(),
            position: Point::new(bounds.width / 2.0, bounds.height / 2.0),
            size: 14.0.into(),
            color: style::muted(),
            font: iced::Font::default(),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            vertical_alignment: iced::alignment::Vertical::Center,
            line_height: iced::widget::text::LineHeight::default(),
            shaping: iced::widget::text::Shaping::default(),
        });

        vec![frame.into_geometry()]
    }
}
