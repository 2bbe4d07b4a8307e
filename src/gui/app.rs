use iced::widget::image::Handle;
use iced::widget::{button, column, container, image as image_view, row, text};
use iced::{ContentFit, Element, Length, Task};
use ::image::DynamicImage;
use rfd::AsyncFileDialog;

use super::Message;
use super::widgets::{parameter_control, toolbar};
use crate::Session;
use crate::params::{KERNEL_RANGE, THRESHOLD_RANGE};

pub struct NpdApp {
    session: Session,
    preview: Option<Handle>,
    status: String,
}

impl NpdApp {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            preview: None,
            status: "Open an image to start.".to_string(),
        }
    }

    pub fn title(&self) -> String {
        "Nanoparticle Detector".to_string()
    }

    /// Rebuild the preview and status line from the session's last output.
    fn sync(&mut self) {
        match self.session.detection() {
            Some(detection) => {
                let rgba = DynamicImage::ImageRgb8(detection.annotated.clone()).into_rgba8();
                let (width, height) = rgba.dimensions();
                self.preview = Some(Handle::from_rgba(width, height, rgba.into_raw()));
                self.status = detection.summary.status_message();
            }
            None => {
                self.preview = None;
                self.status = "No image loaded.".to_string();
            }
        }
    }

    fn apply(&mut self, result: crate::Result<()>) {
        match result {
            Ok(()) => self.sync(),
            Err(e) => log::warn!("rejected parameter: {}", e),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Open => Task::perform(
                AsyncFileDialog::new().set_title("Open").pick_file(),
                |handle| Message::Opened(handle.map(|h| h.path().to_path_buf())),
            ),
            Message::Opened(Some(path)) => {
                self.session.open(&path);
                self.sync();
                Task::none()
            }
            Message::Opened(None) => Task::none(),
            Message::Save => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Save Output Image")
                    .set_file_name("output.png")
                    .save_file(),
                |handle| Message::ImageTarget(handle.map(|h| h.path().to_path_buf())),
            ),
            Message::ImageTarget(target) => {
                if let Err(e) = self.session.save_image(target.as_deref()) {
                    log::error!("failed to save image: {}", e);
                    self.status = format!("Failed to save image: {}", e);
                }
                Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Save Histogram")
                        .set_file_name("histogram.csv")
                        .save_file(),
                    |handle| Message::HistogramTarget(handle.map(|h| h.path().to_path_buf())),
                )
            }
            Message::HistogramTarget(target) => {
                if let Err(e) = self.session.save_histogram(target.as_deref()) {
                    log::error!("failed to save histogram: {}", e);
                    self.status = format!("Failed to save histogram: {}", e);
                }
                Task::none()
            }
            Message::BlurChanged(value) => {
                let result = self.session.set_blur(value);
                self.apply(result);
                Task::none()
            }
            Message::TophatChanged(value) => {
                let result = self.session.set_tophat(value);
                self.apply(result);
                Task::none()
            }
            Message::ThresholdChanged(value) => {
                let result = self.session.set_threshold(value);
                self.apply(result);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let enabled = self.session.controls_enabled();
        let params = self.session.params();

        let bar = toolbar(row![
            button("Open").on_press(Message::Open),
            button("Save").on_press_maybe(self.session.detection().map(|_| Message::Save)),
            parameter_control(
                "Blur Kernel Size",
                params.blur(),
                KERNEL_RANGE,
                enabled,
                Message::BlurChanged
            ),
            parameter_control(
                "Top-Hat Kernel Size",
                params.tophat(),
                KERNEL_RANGE,
                enabled,
                Message::TophatChanged
            ),
            parameter_control(
                "Threshold",
                u32::from(params.threshold()),
                THRESHOLD_RANGE,
                enabled,
                Message::ThresholdChanged
            ),
        ]);

        let canvas: Element<'_, Message> = match &self.preview {
            Some(handle) => image_view(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text("No image").into(),
        };

        column![
            bar,
            container(canvas)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            container(text(self.status.as_str())).padding(5),
        ]
        .into()
    }
}

impl Default for NpdApp {
    fn default() -> Self {
        Self::new()
    }
}
