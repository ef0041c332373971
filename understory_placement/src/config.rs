// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::side::SidePreference;
use crate::visibility::TriggerMode;

/// Tooltip configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct TooltipConfig {
    /// Requested side (default: auto).
    pub side: SidePreference,
    /// Gap between trigger and tooltip (default: 8).
    pub offset: f64,
    /// Delay in milliseconds before showing (default: 500).
    pub delay: u64,
    /// Delay in milliseconds before hiding (default: 200).
    pub hide_delay: u64,
    /// Which events drive visibility (default: hover).
    pub trigger: TriggerMode,
    /// Suppress every transition (default: false).
    pub disabled: bool,
    /// Widest the tooltip box may grow, in pixels (default: 300).
    pub max_width: f64,
    /// Draw a pointer from the box to the trigger (default: true).
    pub arrow: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            side: SidePreference::Auto,
            offset: 8.0,
            delay: 500,
            hide_delay: 200,
            trigger: TriggerMode::Hover,
            disabled: false,
            max_width: 300.0,
            arrow: true,
        }
    }
}

impl TooltipConfig {
    /// Set the requested side.
    #[must_use]
    pub fn side(mut self, side: SidePreference) -> Self {
        self.side = side;
        self
    }

    /// Set the offset.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the show delay in milliseconds.
    #[must_use]
    pub fn delay(mut self, ms: u64) -> Self {
        self.delay = ms;
        self
    }

    /// Set the hide delay in milliseconds.
    #[must_use]
    pub fn hide_delay(mut self, ms: u64) -> Self {
        self.hide_delay = ms;
        self
    }

    /// Set the trigger mode.
    #[must_use]
    pub fn trigger(mut self, trigger: TriggerMode) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set whether the tooltip is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set whether an arrow is drawn.
    #[must_use]
    pub fn arrow(mut self, arrow: bool) -> Self {
        self.arrow = arrow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TooltipConfig::default();
        assert_eq!(config.side, SidePreference::Auto);
        assert_eq!((config.delay, config.hide_delay), (500, 200));
        assert_eq!(config.offset, 8.0);
        assert_eq!(config.max_width, 300.0);
        assert!(config.arrow);
    }

    #[test]
    fn config_builder_chaining() {
        let config = TooltipConfig::default()
            .side(SidePreference::Auto)
            .offset(4.0)
            .delay(0)
            .hide_delay(50)
            .trigger(TriggerMode::Click)
            .disabled(true)
            .max_width(200.0)
            .arrow(false);
        assert_eq!(config.side, SidePreference::Auto);
        assert_eq!(config.offset, 4.0);
        assert_eq!(config.delay, 0);
        assert_eq!(config.hide_delay, 50);
        assert_eq!(config.trigger, TriggerMode::Click);
        assert!(config.disabled);
        assert_eq!(config.max_width, 200.0);
        assert!(!config.arrow);
    }
}
