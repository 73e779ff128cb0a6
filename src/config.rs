//! Display configuration types and builder

/// Panel width in pixels, fixed by the controller's segment count
pub const COLUMNS: usize = 128;

/// Supported panel heights
///
/// The controller drives 128x32 and 128x64 panels; the variant decides
/// the page count and the multiplex/COM-pins electrical parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplaySize {
    /// 128x32 panel (4 pages)
    Rows32,
    /// 128x64 panel (8 pages)
    #[default]
    Rows64,
}

impl DisplaySize {
    /// Panel height in pixels
    pub const fn height(self) -> usize {
        match self {
            Self::Rows32 => 32,
            Self::Rows64 => 64,
        }
    }

    /// Number of 8-pixel-tall pages
    pub const fn pages(self) -> usize {
        self.height() / 8
    }
}

/// Display supply mode
///
/// Decides whether the internal charge pump generates the panel voltage
/// or an external VCC rail provides it; pre-charge timing follows suit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VccMode {
    /// Panel voltage supplied externally
    #[default]
    External,
    /// Panel voltage generated by the internal charge pump
    Internal,
}

/// Display configuration
///
/// Holds the panel geometry and the electrical parameters derived from
/// it. Use [`Builder`] to create a `Config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Panel height variant
    pub size: DisplaySize,
    /// Supply mode
    pub vcc_mode: VccMode,
    /// Contrast register value sent during initialization
    pub contrast: u8,
}

impl Config {
    /// Charge pump setting for the configured supply mode
    pub const fn charge_pump(&self) -> u8 {
        match self.vcc_mode {
            VccMode::External => 0x10,
            VccMode::Internal => 0x14,
        }
    }

    /// Pre-charge period for the configured supply mode
    pub const fn precharge(&self) -> u8 {
        match self.vcc_mode {
            VccMode::External => 0x22,
            VccMode::Internal => 0xF1,
        }
    }

    /// Multiplex ratio for the configured panel height
    pub const fn multiplex_ratio(&self) -> u8 {
        match self.size {
            DisplaySize::Rows32 => 0x1F,
            DisplaySize::Rows64 => 0x3F,
        }
    }

    /// COM pins hardware configuration for the configured panel height
    pub const fn com_pins(&self) -> u8 {
        match self.size {
            DisplaySize::Rows32 => 0x02,
            DisplaySize::Rows64 => 0x12,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// Defaults to a 128x64 panel on external VCC with contrast 0x9F.
///
/// # Example
///
/// ```
/// use ssd1306_i2c::{Builder, DisplaySize, VccMode};
///
/// let config = Builder::new()
///     .size(DisplaySize::Rows32)
///     .vcc_mode(VccMode::Internal)
///     .contrast(0xCF)
///     .build();
/// assert_eq!(config.multiplex_ratio(), 0x1F);
/// ```
#[derive(Debug)]
#[must_use]
pub struct Builder {
    /// Panel height variant
    size: DisplaySize,
    /// Supply mode
    vcc_mode: VccMode,
    /// Contrast register value
    contrast: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            size: DisplaySize::Rows64,
            vcc_mode: VccMode::External,
            contrast: 0x9F,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel height variant
    pub fn size(mut self, size: DisplaySize) -> Self {
        self.size = size;
        self
    }

    /// Set the supply mode
    pub fn vcc_mode(mut self, vcc_mode: VccMode) -> Self {
        self.vcc_mode = vcc_mode;
        self
    }

    /// Set the contrast value sent during initialization
    pub fn contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            size: self.size,
            vcc_mode: self.vcc_mode,
            contrast: self.contrast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_geometry() {
        assert_eq!(DisplaySize::Rows32.height(), 32);
        assert_eq!(DisplaySize::Rows32.pages(), 4);
        assert_eq!(DisplaySize::Rows64.height(), 64);
        assert_eq!(DisplaySize::Rows64.pages(), 8);
    }

    #[test]
    fn test_external_vcc_parameters() {
        let config = Builder::new().vcc_mode(VccMode::External).build();
        assert_eq!(config.charge_pump(), 0x10);
        assert_eq!(config.precharge(), 0x22);
    }

    #[test]
    fn test_internal_vcc_parameters() {
        let config = Builder::new().vcc_mode(VccMode::Internal).build();
        assert_eq!(config.charge_pump(), 0x14);
        assert_eq!(config.precharge(), 0xF1);
    }

    #[test]
    fn test_height_parameters() {
        let small = Builder::new().size(DisplaySize::Rows32).build();
        assert_eq!(small.multiplex_ratio(), 0x1F);
        assert_eq!(small.com_pins(), 0x02);

        let large = Builder::new().size(DisplaySize::Rows64).build();
        assert_eq!(large.multiplex_ratio(), 0x3F);
        assert_eq!(large.com_pins(), 0x12);
    }

    #[test]
    fn test_default_contrast() {
        assert_eq!(Builder::new().build().contrast, 0x9F);
        assert_eq!(Builder::new().contrast(0xCF).build().contrast, 0xCF);
    }
}
