use crate::app::Message;
use crate::icons;
use crate::report::{Detail, Highlight, Report, TomorrowBlock};
use crate::style;
use iced::{
    widget::{column, container, row, text, Space},
    Alignment, Color, Element, Length,
};

pub fn create_report_view(report: &Report) -> Element<Message> {
    let mut sections = column![
        create_location_card(report),
        create_current_card(report),
        create_highlight_row(report),
        create_detail_grid(&report.details),
    ]
    .spacing(12)
    .width(Length::Fill);

    // Forecast section is optional; a report can be mounted without it
    if let Some(tomorrow) = &report.tomorrow {
        sections = sections.push(create_tomorrow_section(tomorrow));
    }

    sections.into()
}

fn create_location_card(report: &Report) -> Element<Message> {
    container(text(&report.location).size(22).style(style::text()))
        .padding(15)
        .width(Length::Fill)
        .center_x()
        .style(style::card_style(style::card()))
        .into()
}

fn create_current_card(report: &Report) -> Element<Message> {
    let current = &report.current;

    container(
        column![
            icons::pictogram(current.pictogram, 96.0),
            text(&current.temperature).size(48),
            text(&current.feels_like).size(15),
            text(&current.description).size(18),
        ]
        .spacing(6)
        .align_items(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .center_x()
    .style(style::card_style(style::accent()))
    .into()
}

fn create_highlight_card(highlight: &Highlight, color: Color) -> Element<Message> {
    let mut content = column![
        text(highlight.label).size(13),
        text(&highlight.value).size(22),
    ]
    .spacing(4)
    .align_items(Alignment::Center);

    if let Some(caption) = &highlight.caption {
        content = content.push(text(caption).size(11));
    }

    container(content)
        .padding([15, 10])
        .width(Length::Fill)
        .center_x()
        .style(style::card_style(color))
        .into()
}

fn create_highlight_row(report: &Report) -> Element<Message> {
    row![
        create_highlight_card(&report.wind, style::wind()),
        create_highlight_card(&report.humidity, style::accent()),
    ]
    .spacing(10)
    .width(Length::Fill)
    .into()
}

fn create_detail_card(detail: &Detail) -> Element<Message> {
    container(
        column![
            text(detail.label).size(11).style(style::muted()),
            text(&detail.value).size(16).style(style::text()),
        ]
        .spacing(4)
        .align_items(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .center_x()
    .style(style::card_style(style::card()))
    .into()
}

fn create_detail_grid(details: &[Detail; 4]) -> Element<Message> {
    // Arrange cards in rows of 2
    let mut grid = column![].spacing(10);
    for pair in details.chunks(2) {
        let mut row_widget = row![].spacing(10);
        for detail in pair {
            row_widget = row_widget.push(create_detail_card(detail));
        }
        grid = grid.push(row_widget);
    }
    grid.into()
}

fn create_tomorrow_section(tomorrow: &TomorrowBlock) -> Element<Message> {
    let temps = row![
        text(&tomorrow.max_temp).size(17),
        Space::with_width(Length::Fixed(40.0)),
        text(&tomorrow.min_temp).size(17),
    ]
    .align_items(Alignment::Center);

    let sun_times = row![
        text(&tomorrow.sunrise).size(13),
        Space::with_width(Length::Fill),
        text(&tomorrow.sunset).size(13),
    ]
    .width(Length::Fill);

    let card = container(
        column![
            text(&tomorrow.date).size(15),
            icons::pictogram(tomorrow.pictogram, 64.0),
            text(&tomorrow.description).size(15),
            temps,
            sun_times,
            text(&tomorrow.chance_of_rain).size(13),
            text(&tomorrow.uv_index).size(13),
        ]
        .spacing(8)
        .align_items(Alignment::Center),
    )
    .padding([12, 20])
    .width(Length::Fill)
    .style(style::card_style(style::forecast()));

    column![
        text("Tomorrow's Forecast").size(20).style(style::text()),
        card,
    ]
    .spacing(10)
    .align_items(Alignment::Center)
    .into()
}
