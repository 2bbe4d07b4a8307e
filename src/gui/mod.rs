mod app;
mod message;
mod widgets;

pub use app::NpdApp;
pub use message::Message;

/// Launch the desktop window.
pub fn run() -> iced::Result {
    iced::application(NpdApp::new, NpdApp::update, NpdApp::view)
        .title(NpdApp::title)
        .run()
}
