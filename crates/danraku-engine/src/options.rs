//! Rule configuration.
//!
//! Options are plain `Copy` values. An inline scan takes its own snapshot, so
//! a rule can never observe a configuration change halfway through a
//! paragraph.

use serde::{Deserialize, Serialize};

/// Options for paragraph indentation (jisage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JisageOptions {
    /// Skip indentation when a paragraph opens with an ASCII letter or digit.
    pub ignore_alphabet: bool,
    /// Skip indentation when a paragraph opens with `―`.
    pub ignore_dash: bool,
}

impl Default for JisageOptions {
    fn default() -> Self {
        Self {
            ignore_alphabet: false,
            ignore_dash: true,
        }
    }
}

/// Options for spacing after `!`, `?`, `！` and `？` (yakumono).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YakumonoOptions {
    /// Master switch for punctuation spacing.
    #[serde(alias = "spacing_yakumono")]
    pub spacing_enabled: bool,
    /// Half-width marks get a half-width space, full-width marks a full-width
    /// one. When false every mark gets a full-width space.
    pub byte_sensitive: bool,
}

impl Default for YakumonoOptions {
    fn default() -> Self {
        Self {
            spacing_enabled: true,
            byte_sensitive: true,
        }
    }
}

/// All options understood by the danraku rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DanrakuOptions {
    pub jisage: JisageOptions,
    pub yakumono: YakumonoOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = DanrakuOptions::default();
        assert!(!options.jisage.ignore_alphabet);
        assert!(options.jisage.ignore_dash);
        assert!(options.yakumono.spacing_enabled);
        assert!(options.yakumono.byte_sensitive);
    }
}
