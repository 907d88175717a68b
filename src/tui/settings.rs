//! Behavioural settings for the widget.

use std::time::Duration;

use crate::catalog::settings::DEFAULT_IMAGE_BASE_URL;
use crate::sampler::DEFAULT_SAMPLE_SIZE;

use super::components::RemovalControl;
use super::state::RefetchPolicy;

/// Delay between flagging a movie and dropping it from the list.
pub const DEFAULT_REMOVAL_DELAY: Duration = Duration::from_millis(500);

/// Settings that shape the widget's behaviour, independent of the catalog
/// connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    /// Poster base URL.
    pub image_base: String,
    /// Movies kept per page.
    pub sample_size: usize,
    /// Exit delay before a flagged movie disappears.
    pub removal_delay: Duration,
    /// Control variant drawn on each card.
    pub control: RemovalControl,
    /// Bounds on the empty-list refetch rule.
    pub refetch: RefetchPolicy,
    /// Page requested on mount.
    pub start_page: u32,
    /// Optional sampler seed for reproducible draws.
    pub seed: Option<u64>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            image_base: DEFAULT_IMAGE_BASE_URL.to_owned(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            removal_delay: DEFAULT_REMOVAL_DELAY,
            control: RemovalControl::default(),
            refetch: RefetchPolicy::default(),
            start_page: 1,
            seed: None,
        }
    }
}
