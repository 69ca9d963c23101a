//! Percentage tokens, viewport math, and the device-class signal.
//!
//! Sizing is declared with [`Pct`] tokens and resolved against the current
//! [`Viewport`], so the same token set yields different pixel values on a
//! phone and a tablet. The viewport itself comes from a pluggable detector;
//! tests and embedders can override it with [`set_viewport_detector`].

use std::str::FromStr;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::style::StyleError;

/// Minimum viewport width treated as a tablet, in points.
pub const TABLET_MIN_WIDTH: f32 = 768.0;

/// A declarative size-percentage token.
///
/// In-crate tokens are `const`-constructed; [`Pct::from_str`] exists for
/// external strings such as `"4%"` and fails fast on anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Pct(f32);

impl Pct {
    /// Creates a token from a percentage value (`Pct::new(4.0)` is `"4%"`).
    pub const fn new(value: f32) -> Self {
        Pct(value)
    }

    /// The percentage value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl FromStr for Pct {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || StyleError::MalformedToken {
            token: s.to_string(),
        };
        let number = s.strip_suffix('%').ok_or_else(malformed)?;
        let value: f32 = number.trim().parse().map_err(|_| malformed())?;
        if value < 0.0 {
            return Err(malformed());
        }
        Ok(Pct(value))
    }
}

/// Device viewport in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Reference phone viewport, used when no detector is installed.
    pub const PHONE: Viewport = Viewport::new(390.0, 844.0);
    /// Reference tablet viewport.
    pub const TABLET: Viewport = Viewport::new(834.0, 1194.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Viewport { width, height }
    }

    /// Resolves a token against the viewport width.
    pub fn width_pct(&self, token: Pct) -> f32 {
        self.width * token.value() / 100.0
    }

    /// Resolves a token against the viewport height.
    pub fn height_pct(&self, token: Pct) -> f32 {
        self.height * token.value() / 100.0
    }

    /// Classifies this viewport by the tablet breakpoint.
    pub fn device_class(&self) -> DeviceClass {
        if self.width >= TABLET_MIN_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Phone
        }
    }
}

/// Large-form-factor flag driving responsive scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Phone,
    Tablet,
}

impl DeviceClass {
    pub fn is_tablet(self) -> bool {
        matches!(self, DeviceClass::Tablet)
    }

    /// Picks the tablet or phone value for this class.
    ///
    /// Mirrors the `isTablet ? a : b` literals the size tables are written in.
    pub fn select<T>(self, tablet: T, phone: T) -> T {
        match self {
            DeviceClass::Tablet => tablet,
            DeviceClass::Phone => phone,
        }
    }
}

type ViewportDetector = fn() -> Viewport;

static VIEWPORT_DETECTOR: Lazy<Mutex<ViewportDetector>> =
    Lazy::new(|| Mutex::new(default_detector));

/// Overrides the source of viewport dimensions.
///
/// Dimension measurement lives outside this crate; the embedding toolkit
/// installs a detector backed by its window/dimension observer. Tests use it
/// to pin a deterministic viewport.
pub fn set_viewport_detector(detector: ViewportDetector) {
    let mut guard = VIEWPORT_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Reads the current viewport from the installed detector.
pub fn current_viewport() -> Viewport {
    let detector = VIEWPORT_DETECTOR.lock().unwrap();
    (*detector)()
}

/// Classifies the current viewport.
pub fn detect_device_class() -> DeviceClass {
    current_viewport().device_class()
}

fn default_detector() -> Viewport {
    Viewport::PHONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_pct_parse_plain() {
        assert_eq!("4%".parse::<Pct>().unwrap(), Pct::new(4.0));
        assert_eq!("1.5%".parse::<Pct>().unwrap(), Pct::new(1.5));
    }

    #[test]
    fn test_pct_parse_rejects_missing_suffix() {
        assert!(matches!(
            "4".parse::<Pct>(),
            Err(StyleError::MalformedToken { .. })
        ));
    }

    #[test]
    fn test_pct_parse_rejects_garbage() {
        assert!("px%".parse::<Pct>().is_err());
        assert!("%".parse::<Pct>().is_err());
        assert!("-2%".parse::<Pct>().is_err());
    }

    #[test]
    fn test_viewport_pct_math() {
        let vp = Viewport::new(400.0, 800.0);
        assert_eq!(vp.width_pct(Pct::new(5.0)), 20.0);
        assert_eq!(vp.height_pct(Pct::new(1.5)), 12.0);
    }

    #[test]
    fn test_device_class_breakpoint() {
        assert_eq!(Viewport::new(767.9, 1024.0).device_class(), DeviceClass::Phone);
        assert_eq!(Viewport::new(768.0, 1024.0).device_class(), DeviceClass::Tablet);
        assert_eq!(Viewport::PHONE.device_class(), DeviceClass::Phone);
        assert_eq!(Viewport::TABLET.device_class(), DeviceClass::Tablet);
    }

    #[test]
    fn test_select_picks_by_class() {
        assert_eq!(DeviceClass::Tablet.select(16.0, 12.0), 16.0);
        assert_eq!(DeviceClass::Phone.select(16.0, 12.0), 12.0);
    }

    #[test]
    #[serial]
    fn test_detector_override() {
        set_viewport_detector(|| Viewport::TABLET);
        assert_eq!(current_viewport(), Viewport::TABLET);
        assert_eq!(detect_device_class(), DeviceClass::Tablet);

        // Restore the default for other tests.
        set_viewport_detector(|| Viewport::PHONE);
        assert_eq!(detect_device_class(), DeviceClass::Phone);
    }
}
