use serde::{Deserialize, Serialize};
use snapped_config::ResultsLayoutConfig;

use crate::channel::InterpolationChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    HeaderHeight,
    HeaderOpacity,
    ImageHeight,
    ImageOpacity,
    FilterHeight,
    FilterOpacity,
    CardWidth,
    CardHeight,
    CardOpacity,
    CardRadius,
}

impl Channel {
    pub const ALL: [Channel; 10] = [
        Channel::HeaderHeight,
        Channel::HeaderOpacity,
        Channel::ImageHeight,
        Channel::ImageOpacity,
        Channel::FilterHeight,
        Channel::FilterOpacity,
        Channel::CardWidth,
        Channel::CardHeight,
        Channel::CardOpacity,
        Channel::CardRadius,
    ];

    /// Collapsing channels shrink with the scroll offset, the card channels
    /// grow with the card progress.
    pub fn is_card(self) -> bool {
        matches!(
            self,
            Channel::CardWidth | Channel::CardHeight | Channel::CardOpacity | Channel::CardRadius
        )
    }
}

/// Every channel's value for one scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelValues {
    pub header_height: f32,
    pub header_opacity: f32,
    pub image_height: f32,
    pub image_opacity: f32,
    pub filter_height: f32,
    pub filter_opacity: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub card_opacity: f32,
    pub card_radius: f32,
}

impl ChannelValues {
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::HeaderHeight => self.header_height,
            Channel::HeaderOpacity => self.header_opacity,
            Channel::ImageHeight => self.image_height,
            Channel::ImageOpacity => self.image_opacity,
            Channel::FilterHeight => self.filter_height,
            Channel::FilterOpacity => self.filter_opacity,
            Channel::CardWidth => self.card_width,
            Channel::CardHeight => self.card_height,
            Channel::CardOpacity => self.card_opacity,
            Channel::CardRadius => self.card_radius,
        }
    }

    fn set(&mut self, channel: Channel, value: f32) {
        let slot = match channel {
            Channel::HeaderHeight => &mut self.header_height,
            Channel::HeaderOpacity => &mut self.header_opacity,
            Channel::ImageHeight => &mut self.image_height,
            Channel::ImageOpacity => &mut self.image_opacity,
            Channel::FilterHeight => &mut self.filter_height,
            Channel::FilterOpacity => &mut self.filter_opacity,
            Channel::CardWidth => &mut self.card_width,
            Channel::CardHeight => &mut self.card_height,
            Channel::CardOpacity => &mut self.card_opacity,
            Channel::CardRadius => &mut self.card_radius,
        };
        *slot = value;
    }
}

/// Evaluates the results-screen layout channels from a scroll offset.
///
/// The header, header image and filter bar collapse linearly over
/// `[0, collapse_distance]`. The summary card grows over a later sub-window,
/// so it starts after the collapse is underway and is complete before the
/// header is gone. Holds no state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollInterpolator {
    card_progress: InterpolationChannel,
    table: [(Channel, InterpolationChannel); 10],
}

impl ScrollInterpolator {
    pub fn new(layout: &ResultsLayoutConfig, screen_width: f32) -> Self {
        let collapse = (0.0, layout.collapse_distance);
        let unit = (0.0, 1.0);

        let card_progress =
            InterpolationChannel::new((layout.grow_start(), layout.grow_end()), unit);

        let table = [
            (
                Channel::HeaderHeight,
                InterpolationChannel::new(collapse, (layout.header_max_height, 0.0)),
            ),
            (
                Channel::HeaderOpacity,
                InterpolationChannel::new(collapse, (1.0, 0.0)),
            ),
            (
                Channel::ImageHeight,
                InterpolationChannel::new(collapse, (layout.image_max_height, 0.0)),
            ),
            (
                Channel::ImageOpacity,
                InterpolationChannel::new(collapse, (1.0, 0.0)),
            ),
            (
                Channel::FilterHeight,
                InterpolationChannel::new(collapse, (layout.filter_max_height, 0.0)),
            ),
            (
                Channel::FilterOpacity,
                InterpolationChannel::new(collapse, (1.0, 0.0)),
            ),
            (
                Channel::CardWidth,
                InterpolationChannel::new(unit, (0.0, layout.card_max_width(screen_width))),
            ),
            (
                Channel::CardHeight,
                InterpolationChannel::new(unit, (0.0, layout.card_max_height)),
            ),
            (Channel::CardOpacity, InterpolationChannel::new(unit, unit)),
            (
                Channel::CardRadius,
                InterpolationChannel::new(unit, (0.0, layout.card_border_radius)),
            ),
        ];

        tracing::debug!(
            "Scroll interpolator: collapse over {:?}, card grows over {:?}",
            collapse,
            card_progress.domain
        );

        Self {
            card_progress,
            table,
        }
    }

    /// The mapping used for `channel`. Card channels take card progress as input.
    pub fn channel(&self, channel: Channel) -> InterpolationChannel {
        self.table
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, curve)| *curve)
            .unwrap_or(self.card_progress)
    }

    /// 0 before the grow window, 1 after it.
    pub fn card_progress(&self, offset: f32) -> f32 {
        self.card_progress.evaluate(sanitize(offset))
    }

    pub fn compute_channels(&self, offset: f32) -> ChannelValues {
        let offset = sanitize(offset);
        let progress = self.card_progress.evaluate(offset);

        let mut values = ChannelValues::default();
        for (channel, curve) in &self.table {
            let input = if channel.is_card() { progress } else { offset };
            values.set(*channel, curve.evaluate(input));
        }

        tracing::trace!("offset {offset} -> {values:?}");
        values
    }
}

// NaN offsets behave like the resting position.
fn sanitize(offset: f32) -> f32 {
    if offset.is_nan() { 0.0 } else { offset }
}
