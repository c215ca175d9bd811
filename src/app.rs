use crate::backdrop::Backdrop;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::report::{self, Report};
use crate::style;
use crate::view;
use crate::weather::{self, RawWeatherDocument, SearchQuery, WeatherClient};
use iced::{event, time, window, Application, Command, Element, Event, Subscription, Theme};

/// Search lifecycle. Only one fetch is ever in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading { ticks: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Notice(AppError),
    ConfirmQuit,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Search,
    WeatherFetched(Result<RawWeatherDocument, AppError>),
    LoadingTick,
    AnimationTick,
    DismissDialog,
    QuitRequested,
    QuitConfirmed,
    QuitCancelled,
    Minimize,
    DragWindow,
}

pub struct Flags {
    pub config: AppConfig,
    pub client: WeatherClient,
}

pub struct WeatherApp {
    pub config: AppConfig,
    client: WeatherClient,
    pub query: String,
    pub fetch_state: FetchState,
    pub report: Option<Report>,
    pub dialog: Option<Dialog>,
    pub backdrop: Backdrop,
    pub closing: bool,
}

impl WeatherApp {
    pub fn new(config: AppConfig, client: WeatherClient) -> Self {
        Self {
            config,
            client,
            query: String::new(),
            fetch_state: FetchState::Idle,
            report: None,
            dialog: None,
            backdrop: Backdrop::default(),
            closing: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch_state, FetchState::Loading { .. })
    }

    /// Search controls accept input only when nothing else is going on
    pub fn accepts_input(&self) -> bool {
        !self.is_loading() && self.dialog.is_none() && !self.closing
    }

    pub fn loading_text(&self) -> String {
        match self.fetch_state {
            FetchState::Loading { ticks } => {
                format!("Fetching weather data{}", ".".repeat(ticks % 4))
            }
            FetchState::Idle => String::new(),
        }
    }

    fn start_search(&mut self) -> Command<Message> {
        if !self.accepts_input() {
            tracing::warn!("Ignoring search while another action is pending");
            return Command::none();
        }

        let query = match SearchQuery::parse(&self.query) {
            Ok(query) => query,
            Err(e) => {
                self.show_error(e);
                return Command::none();
            }
        };

        tracing::info!("Searching weather for {}", query);
        report::teardown(self.report.take());
        self.fetch_state = FetchState::Loading { ticks: 0 };

        Command::perform(
            weather::fetch_weather(self.client.clone(), query),
            Message::WeatherFetched,
        )
    }

    fn finish_search(&mut self, result: Result<RawWeatherDocument, AppError>) {
        self.fetch_state = FetchState::Idle;

        let rendered = result.and_then(|doc| {
            report::present(self.report.take(), &doc, self.config.forecast_hour_index)
        });

        match rendered {
            Ok(report) => {
                tracing::info!("Showing weather for {}", report.location);
                self.report = Some(report);
            }
            Err(e) => {
                tracing::error!("Search failed: {}", e);
                self.show_error(e);
            }
        }
    }

    fn show_error(&mut self, error: AppError) {
        if self.dialog == Some(Dialog::ConfirmQuit) {
            tracing::warn!("Not interrupting quit confirmation with: {}", error);
            return;
        }
        self.dialog = Some(Dialog::Notice(error));
    }
}

impl Application for WeatherApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Flags;

    fn new(flags: Flags) -> (WeatherApp, Command<Message>) {
        (WeatherApp::new(flags.config, flags.client), Command::none())
    }

    fn title(&self) -> String {
        String::from("Weather Pro - Your Weather Companion")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::QueryChanged(value) => {
                if self.accepts_input() {
                    self.query = value;
                }
                Command::none()
            }
            Message::Search => self.start_search(),
            Message::WeatherFetched(result) => {
                self.finish_search(result);
                Command::none()
            }
            Message::LoadingTick => {
                if let FetchState::Loading { ticks } = &mut self.fetch_state {
                    *ticks += 1;
                }
                Command::none()
            }
            Message::AnimationTick => {
                self.backdrop.advance();
                Command::none()
            }
            Message::DismissDialog => {
                if matches!(self.dialog, Some(Dialog::Notice(_))) {
                    self.dialog = None;
                }
                Command::none()
            }
            Message::QuitRequested => {
                if !self.closing {
                    self.dialog = Some(Dialog::ConfirmQuit);
                }
                Command::none()
            }
            Message::QuitCancelled => {
                if self.dialog == Some(Dialog::ConfirmQuit) {
                    self.dialog = None;
                }
                Command::none()
            }
            Message::QuitConfirmed => {
                tracing::info!("Closing Weather Pro");
                self.closing = true;
                self.dialog = None;
                window::close(window::Id::MAIN)
            }
            Message::Minimize => window::minimize(window::Id::MAIN, true),
            Message::DragWindow => window::drag(window::Id::MAIN),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Dropping the subscriptions is what stops the timers
        if self.closing {
            return Subscription::none();
        }

        let animation =
            time::every(self.config.animation_interval()).map(|_| Message::AnimationTick);

        let loading = if self.is_loading() {
            time::every(self.config.loading_interval()).map(|_| Message::LoadingTick)
        } else {
            Subscription::none()
        };

        let close_requests = event::listen_with(|event, _status| match event {
            Event::Window(_, window::Event::CloseRequested) => Some(Message::QuitRequested),
            _ => None,
        });

        Subscription::batch([animation, loading, close_requests])
    }

    fn theme(&self) -> Theme {
        style::theme()
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn app() -> WeatherApp {
        let config = AppConfig::default();
        let client = WeatherClient::new(config.provider.clone()).unwrap();
        WeatherApp::new(config, client)
    }

    fn type_query(app: &mut WeatherApp, query: &str) {
        let _ = app.update(Message::QueryChanged(query.to_string()));
    }

    /// Runs a search for London and feeds back `result` as if fetched
    fn search_with(app: &mut WeatherApp, result: Result<RawWeatherDocument, AppError>) {
        type_query(app, "London");
        let _ = app.update(Message::Search);
        assert!(app.is_loading());
        let _ = app.update(Message::WeatherFetched(result));
    }

    #[test]
    fn empty_or_placeholder_query_warns_without_fetching() {
        for input in ["", "   ", weather::PLACEHOLDER] {
            let mut app = app();
            type_query(&mut app, input);
            let _ = app.update(Message::Search);

            assert_eq!(app.fetch_state, FetchState::Idle);
            match &app.dialog {
                Some(Dialog::Notice(err)) => assert!(err.is_warning()),
                other => panic!("expected warning dialog, got {other:?}"),
            }
        }
    }

    #[test]
    fn search_clears_previous_result_before_loading() {
        let mut app = app();
        search_with(&mut app, Ok(fixtures::london()));
        assert!(app.report.is_some());

        type_query(&mut app, "Paris");
        let _ = app.update(Message::Search);

        assert!(app.report.is_none());
        assert_eq!(app.fetch_state, FetchState::Loading { ticks: 0 });
        assert_eq!(app.loading_text(), "Fetching weather data");
    }

    #[test]
    fn loading_label_cycles_ellipsis() {
        let mut app = app();
        type_query(&mut app, "London");
        let _ = app.update(Message::Search);

        let mut labels = Vec::new();
        for _ in 0..5 {
            let _ = app.update(Message::LoadingTick);
            labels.push(app.loading_text());
        }
        assert_eq!(
            labels,
            vec![
                "Fetching weather data.",
                "Fetching weather data..",
                "Fetching weather data...",
                "Fetching weather data",
                "Fetching weather data.",
            ]
        );
    }

    #[test]
    fn successful_fetch_renders_report() {
        let mut app = app();
        search_with(&mut app, Ok(fixtures::london()));

        assert_eq!(app.fetch_state, FetchState::Idle);
        assert_eq!(app.loading_text(), "");
        assert!(app.dialog.is_none());
        let report = app.report.as_ref().unwrap();
        assert_eq!(report.current.temperature, "15°C");
        assert!(report.tomorrow.is_some());
    }

    #[test]
    fn timeout_shows_fetch_error_and_clears_loading() {
        let mut app = app();
        search_with(
            &mut app,
            Err(AppError::fetch("Request timed out after 10 seconds")),
        );

        assert_eq!(app.fetch_state, FetchState::Idle);
        assert_eq!(app.loading_text(), "");
        assert!(app.report.is_none());
        match &app.dialog {
            Some(Dialog::Notice(err @ AppError::Fetch { .. })) => {
                assert!(err.user_message().contains("timed out"));
            }
            other => panic!("expected fetch error dialog, got {other:?}"),
        }
    }

    #[test]
    fn missing_current_condition_shows_parse_error() {
        let mut doc = fixtures::london();
        doc.0.as_object_mut().unwrap().remove("current_condition");

        let mut app = app();
        search_with(&mut app, Ok(doc));

        assert!(app.report.is_none());
        assert!(matches!(
            app.dialog,
            Some(Dialog::Notice(AppError::Parse { .. }))
        ));
    }

    #[test]
    fn single_day_forecast_renders_without_dialog() {
        let mut doc = fixtures::london();
        doc.0["weather"].as_array_mut().unwrap().truncate(1);

        let mut app = app();
        search_with(&mut app, Ok(doc));

        assert!(app.dialog.is_none());
        let report = app.report.as_ref().unwrap();
        assert_eq!(report.current.temperature, "15°C");
        assert!(report.tomorrow.is_none());
    }

    #[test]
    fn search_is_inert_while_loading() {
        let mut app = app();
        type_query(&mut app, "London");
        let _ = app.update(Message::Search);
        let _ = app.update(Message::LoadingTick);

        type_query(&mut app, "Paris");
        let _ = app.update(Message::Search);

        assert_eq!(app.query, "London");
        assert_eq!(app.fetch_state, FetchState::Loading { ticks: 1 });
    }

    #[test]
    fn dismissing_error_allows_next_search() {
        let mut app = app();
        let _ = app.update(Message::Search);
        assert!(app.dialog.is_some());

        let _ = app.update(Message::DismissDialog);
        assert!(app.dialog.is_none());

        type_query(&mut app, "London");
        let _ = app.update(Message::Search);
        assert!(app.is_loading());
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut app = app();
        let _ = app.update(Message::QuitRequested);
        assert_eq!(app.dialog, Some(Dialog::ConfirmQuit));

        let _ = app.update(Message::QuitCancelled);
        assert!(app.dialog.is_none());
        assert!(!app.closing);

        let _ = app.update(Message::QuitRequested);
        let _ = app.update(Message::QuitConfirmed);
        assert!(app.closing);
        assert!(!app.accepts_input());
    }

    #[test]
    fn fetch_result_does_not_hide_quit_confirmation() {
        let mut app = app();
        type_query(&mut app, "London");
        let _ = app.update(Message::Search);
        let _ = app.update(Message::QuitRequested);
        let _ = app.update(Message::WeatherFetched(Err(AppError::fetch("offline"))));

        assert_eq!(app.dialog, Some(Dialog::ConfirmQuit));
        assert_eq!(app.fetch_state, FetchState::Idle);
    }

    #[test]
    fn animation_tick_advances_backdrop() {
        let mut app = app();
        let before = app.backdrop.centers(600.0, 120.0);
        let _ = app.update(Message::AnimationTick);
        let _ = app.update(Message::AnimationTick);
        assert_ne!(app.backdrop.centers(600.0, 120.0), before);
    }
}
