use crate::app::Message;
use iced::{
    widget::canvas::{self, Frame, Path, Stroke},
    Color, Element, Length, Point, Rectangle, Size, Theme, Vector,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pictogram {
    Sun,
    Cloud,
    Rain,
    Snow,
    Storm,
    Fog,
    PartlyCloudy,
}

/// Maps a free-text description to a pictogram. First matching rule wins,
/// so "cloudy with rain" is a cloud.
pub fn icon_for(description: &str) -> Pictogram {
    let description = description.to_lowercase();
    let has = |needle: &str| description.contains(needle);

    if has("clear") || has("sunny") {
        Pictogram::Sun
    } else if has("cloud") {
        Pictogram::Cloud
    } else if has("rain") {
        Pictogram::Rain
    } else if has("snow") {
        Pictogram::Snow
    } else if has("thunder") || has("storm") {
        Pictogram::Storm
    } else if has("fog") || has("mist") {
        Pictogram::Fog
    } else {
        Pictogram::PartlyCloudy
    }
}

pub fn pictogram<'a>(pictogram: Pictogram, size: f32) -> Element<'a, Message> {
    canvas::Canvas::new(PictogramIcon { pictogram })
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}

pub struct PictogramIcon {
    pictogram: Pictogram,
}

const SUN: Color = Color {
    r: 0.98,
    g: 0.75,
    b: 0.14,
    a: 1.0,
};
const CLOUD: Color = Color {
    r: 0.95,
    g: 0.96,
    b: 0.98,
    a: 1.0,
};
const STORM_CLOUD: Color = Color {
    r: 0.58,
    g: 0.64,
    b: 0.72,
    a: 1.0,
};
const RAIN: Color = Color {
    r: 0.38,
    g: 0.65,
    b: 0.98,
    a: 1.0,
};
const FOG: Color = Color {
    r: 0.80,
    g: 0.84,
    b: 0.88,
    a: 1.0,
};

fn draw_sun(frame: &mut Frame, center: Point, unit: f32) {
    frame.fill(&Path::circle(center, unit * 0.42), SUN);

    let stroke = Stroke::default()
        .with_width((unit * 0.1).max(1.5))
        .with_color(SUN)
        .with_line_cap(canvas::LineCap::Round);
    for i in 0..8 {
        let angle = i as f32 * std::f32::consts::FRAC_PI_4;
        let (sin, cos) = angle.sin_cos();
        let inner = Point::new(center.x + cos * unit * 0.6, center.y + sin * unit * 0.6);
        let outer = Point::new(center.x + cos * unit * 0.88, center.y + sin * unit * 0.88);
        frame.stroke(&Path::line(inner, outer), stroke.clone());
    }
}

fn draw_cloud(frame: &mut Frame, center: Point, unit: f32, color: Color) {
    let puffs = [
        (Vector::new(-0.38, 0.08), 0.28),
        (Vector::new(0.0, -0.12), 0.38),
        (Vector::new(0.38, 0.1), 0.26),
    ];
    for (offset, radius) in puffs {
        frame.fill(&Path::circle(center + offset * unit, radius * unit), color);
    }
    frame.fill(
        &Path::rectangle(
            Point::new(center.x - 0.38 * unit, center.y + 0.05 * unit),
            Size::new(0.76 * unit, 0.31 * unit),
        ),
        color,
    );
}

fn draw_rain(frame: &mut Frame, center: Point, unit: f32) {
    let cloud_center = center + Vector::new(0.0, -0.25) * unit;
    draw_cloud(frame, cloud_center, unit * 0.9, CLOUD);

    let stroke = Stroke::default()
        .with_width((unit * 0.08).max(1.5))
        .with_color(RAIN)
        .with_line_cap(canvas::LineCap::Round);
    for dx in [-0.35, 0.0, 0.35] {
        let top = Point::new(center.x + dx * unit, center.y + 0.4 * unit);
        let bottom = Point::new(top.x - 0.12 * unit, top.y + 0.4 * unit);
        frame.stroke(&Path::line(top, bottom), stroke.clone());
    }
}

fn draw_snow(frame: &mut Frame, center: Point, unit: f32) {
    let cloud_center = center + Vector::new(0.0, -0.25) * unit;
    draw_cloud(frame, cloud_center, unit * 0.9, CLOUD);

    for (dx, dy) in [(-0.35, 0.5), (0.0, 0.7), (0.35, 0.5), (-0.18, 0.85), (0.18, 0.85)] {
        frame.fill(
            &Path::circle(
                Point::new(center.x + dx * unit, center.y + dy * unit),
                unit * 0.07,
            ),
            Color::WHITE,
        );
    }
}

fn draw_storm(frame: &mut Frame, center: Point, unit: f32) {
    let cloud_center = center + Vector::new(0.0, -0.25) * unit;
    draw_cloud(frame, cloud_center, unit * 0.9, STORM_CLOUD);

    let bolt = Path::new(|b| {
        b.move_to(Point::new(center.x + 0.05 * unit, center.y + 0.1 * unit));
        b.line_to(Point::new(center.x - 0.2 * unit, center.y + 0.55 * unit));
        b.line_to(Point::new(center.x, center.y + 0.55 * unit));
        b.line_to(Point::new(center.x - 0.12 * unit, center.y + 0.95 * unit));
        b.line_to(Point::new(center.x + 0.25 * unit, center.y + 0.42 * unit));
        b.line_to(Point::new(center.x + 0.05 * unit, center.y + 0.42 * unit));
        b.close();
    });
    frame.fill(&bolt, SUN);
}

fn draw_fog(frame: &mut Frame, center: Point, unit: f32) {
    let stroke = Stroke::default()
        .with_width((unit * 0.1).max(1.5))
        .with_color(FOG)
        .with_line_cap(canvas::LineCap::Round);
    for (i, half_width) in [0.7, 0.85, 0.6, 0.75].into_iter().enumerate() {
        let y = center.y + (i as f32 - 1.5) * 0.3 * unit;
        let shift = (if i % 2 == 0 { -0.1 } else { 0.1 }) * unit;
        frame.stroke(
            &Path::line(
                Point::new(center.x - half_width * unit + shift, y),
                Point::new(center.x + half_width * unit + shift, y),
            ),
            stroke.clone(),
        );
    }
}

impl canvas::Program<Message> for PictogramIcon {
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
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let unit = bounds.width.min(bounds.height) / 2.0;

        match self.pictogram {
            Pictogram::Sun => draw_sun(&mut frame, center, unit),
            Pictogram::Cloud => draw_cloud(&mut frame, center, unit, CLOUD),
            Pictogram::Rain => draw_rain(&mut frame, center, unit),
            Pictogram::Snow => draw_snow(&mut frame, center, unit),
            Pictogram::Storm => draw_storm(&mut frame, center, unit),
            Pictogram::Fog => draw_fog(&mut frame, center, unit),
            Pictogram::PartlyCloudy => {
                draw_sun(
                    &mut frame,
                    center + Vector::new(-0.3, -0.3) * unit,
                    unit * 0.6,
                );
                draw_cloud(
                    &mut frame,
                    center + Vector::new(0.1, 0.2) * unit,
                    unit * 0.75,
                    CLOUD,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
