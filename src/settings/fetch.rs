// SPDX-License-Identifier: GPL-3.0-or-later
use std::time::Duration;

use serde::Deserialize;

/// A newtype wrapper for download timeouts in seconds.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Timeout(u64);

impl Timeout {
    pub(crate) fn from_secs(seconds: u64) -> Self {
        Self(seconds)
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs())
    }
}

impl From<Timeout> for Duration {
    fn from(timeout: Timeout) -> Self {
        Duration::from_secs(timeout.0)
    }
}

impl Default for Timeout {
    // Default timeout is 30 seconds
    fn default() -> Self {
        Self(30)
    }
}

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct FetchSettings {
    /// How long to wait for a remote image download.
    #[serde(default)]
    pub(crate) timeout: Timeout,

    /// The largest image, in bytes, that will be accepted from either source.
    #[serde(default = "FetchSettings::default_max_bytes")]
    pub(crate) max_bytes: usize,
}

impl FetchSettings {
    fn default_max_bytes() -> usize {
        // 16 MiB covers any plausible monochrome raster.
        16 * 1024 * 1024
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Timeout::default(),
            max_bytes: Self::default_max_bytes(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{FetchSettings, Timeout};

    #[test]
    fn duration_to_timeout() {
        const SECONDS: u64 = 75;
        assert_eq!(
            Timeout::from(Duration::from_secs(SECONDS)),
            Timeout::from_secs(SECONDS)
        )
    }

    #[test]
    fn timeout_to_duration() {
        const SECONDS: u64 = 45;
        assert_eq!(
            Duration::from(Timeout::from_secs(SECONDS)),
            Duration::from_secs(SECONDS)
        )
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let source = "";
        let config: FetchSettings = toml::from_str(source)?;
        let expected = FetchSettings {
            timeout: Timeout::from_secs(30),
            max_bytes: 16 * 1024 * 1024,
        };
        assert_eq!(config, expected);
        Ok(())
    }

    #[test]
    fn timeout_seconds() -> anyhow::Result<()> {
        let source = r#"
        timeout = 5
        "#;
        let config: FetchSettings = toml::from_str(source)?;
        let expected = FetchSettings {
            timeout: Timeout::from_secs(5),
            ..Default::default()
        };
        assert_eq!(config, expected);
        Ok(())
    }

    #[test]
    fn byte_limit() -> anyhow::Result<()> {
        let source = r#"
        max_bytes = 1024
        "#;
        let config: FetchSettings = toml::from_str(source)?;
        let expected = FetchSettings {
            max_bytes: 1024,
            ..Default::default()
        };
        assert_eq!(config, expected);
        Ok(())
    }

    #[test]
    fn string_timeout() {
        let parsed: Result<FetchSettings, _> = toml::from_str("timeout = \"forever\"");
        assert!(parsed.is_err(), "Incorrectly parsed string as timeout");
    }
}
