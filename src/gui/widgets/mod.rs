use std::ops::RangeInclusive;

use iced::{
    Alignment::Center, Element, border,
    widget::{container, row, slider, text},
};
use iced_widget::container::bordered_box;

/// Wrap toolbar content in a bordered strip.
pub fn toolbar<'a, Message>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message>
where
    Message: 'a,
{
    container(content.into())
        .style(|theme| bordered_box(theme).border(border::width(1)))
        .padding(8)
        .width(iced::Length::Fill)
        .into()
}

/// A labelled slider; rendered as plain text while `enabled` is false.
pub fn parameter_control<'a, Message>(
    label: &'a str,
    value: u32,
    range: RangeInclusive<u32>,
    enabled: bool,
    on_change: impl Fn(u32) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let control: Element<'a, Message> = if enabled {
        slider(range, value, on_change).width(150).into()
    } else {
        text("(disabled)").into()
    };

    container(
        row![text(label), control, text(value.to_string())]
            .spacing(8)
            .align_y(Center),
    )
    .padding([0, 12])
    .into()
}
