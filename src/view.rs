use crate::app::{Dialog, Message, WeatherApp};
use crate::components;
use crate::icons::{self, Pictogram};
use crate::style;
use crate::weather::PLACEHOLDER;
use iced::{
    widget::{button, canvas, column, container, mouse_area, row, scrollable, text, text_input, Space},
    Alignment, Element, Length,
};

pub fn view(app: &WeatherApp) -> Element<Message> {
    let mut content = column![
        create_title_bar(),
        create_backdrop_band(app),
        create_search_bar(app),
        text(app.loading_text()).size(14).style(style::accent()),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    if let Some(dialog) = &app.dialog {
        content = content.push(create_dialog(dialog));
    }

    content = content
        .push(create_result_panel(app))
        .push(create_quit_button(app));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .style(style::card_style(style::background()))
        .into()
}

fn create_title_bar<'a>() -> Element<'a, Message> {
    // Pressing anywhere on the title drags the undecorated window
    let title = mouse_area(
        row![
            icons::pictogram(Pictogram::PartlyCloudy, 32.0),
            text("Weather Pro").size(24).style(style::text()),
            Space::with_width(Length::Fill),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    )
    .on_press(Message::DragWindow);

    let minimize = button(text("—").size(16))
        .on_press(Message::Minimize)
        .padding([4, 12])
        .style(style::minimize_button());

    let close = button(text("✕").size(16))
        .on_press(Message::QuitRequested)
        .padding([4, 12])
        .style(style::close_button());

    container(
        row![title, minimize, close]
            .spacing(4)
            .align_items(Alignment::Center),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(style::card_style(style::card()))
    .into()
}

fn create_backdrop_band(app: &WeatherApp) -> Element<Message> {
    canvas(app.backdrop)
        .width(Length::Fill)
        .height(Length::Fixed(120.0))
        .into()
}

fn create_search_bar(app: &WeatherApp) -> Element<Message> {
    let enabled = app.accepts_input();

    let mut input = text_input(PLACEHOLDER, &app.query).padding(10).size(16);
    let mut search = button(text("Search").size(15))
        .padding([10, 25])
        .style(style::search_button());

    // Without handlers both widgets render disabled
    if enabled {
        input = input
            .on_input(Message::QueryChanged)
            .on_submit(Message::Search);
        search = search.on_press(Message::Search);
    }

    container(
        row![input, search]
            .spacing(10)
            .align_items(Alignment::Center),
    )
    .padding(15)
    .width(Length::Fill)
    .style(style::card_style(style::card()))
    .into()
}

fn create_dialog(dialog: &Dialog) -> Element<Message> {
    let (title, title_color, body, actions) = match dialog {
        Dialog::Notice(error) => {
            let color = if error.is_warning() {
                style::warning()
            } else {
                style::danger()
            };
            let ok = button(text("OK").size(14))
                .on_press(Message::DismissDialog)
                .padding([6, 20])
                .style(style::dialog_button());
            (
                error.title(),
                color,
                error.user_message(),
                row![ok],
            )
        }
        Dialog::ConfirmQuit => {
            let cancel = button(text("Cancel").size(14))
                .on_press(Message::QuitCancelled)
                .padding([6, 20])
                .style(style::dialog_button());
            let quit = button(text("Quit").size(14))
                .on_press(Message::QuitConfirmed)
                .padding([6, 20])
                .style(style::quit_button());
            (
                "Quit",
                style::warning(),
                "Do you want to quit Weather Pro?".to_string(),
                row![cancel, quit].spacing(10),
            )
        }
    };

    container(
        column![
            text(title).size(18).style(title_color),
            text(body).size(14).style(style::text()),
            actions,
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .center_x()
    .style(style::card_style(style::card()))
    .into()
}

fn create_result_panel(app: &WeatherApp) -> Element<Message> {
    let body: Element<Message> = match &app.report {
        Some(report) => components::create_report_view(report),
        None => Space::with_height(Length::Fixed(0.0)).into(),
    };

    scrollable(container(body).width(Length::Fill).padding([0, 12, 0, 0]))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn create_quit_button(app: &WeatherApp) -> Element<Message> {
    let mut quit = button(
        text("Quit Application")
            .size(15)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(style::quit_button());

    if !app.closing {
        quit = quit.on_press(Message::QuitRequested);
    }

    quit.into()
}
