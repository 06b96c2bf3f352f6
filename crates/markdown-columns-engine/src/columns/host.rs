use markdown_columns_config::Settings;

/// The kind of environment the document is displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Desktop,
    /// A constrained environment, e.g. a phone.
    Mobile,
}

impl Platform {
    pub fn is_desktop(self) -> bool {
        matches!(self, Platform::Desktop)
    }
}

/// What the column transform needs from its host.
///
/// Both values are read on every call, so a host can change settings between
/// fragments without resetting the session.
pub trait Host {
    fn settings(&self) -> Settings;
    fn platform(&self) -> Platform;

    /// Column layout applies on desktop, and on mobile only when enabled.
    fn layout_enabled(&self) -> bool {
        self.platform().is_desktop() || self.settings().render_on_mobile
    }
}

/// A fixed set of settings and a platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderEnv {
    pub settings: Settings,
    pub platform: Platform,
}

impl RenderEnv {
    pub fn new(settings: Settings, platform: Platform) -> Self {
        Self { settings, platform }
    }
}

impl Host for RenderEnv {
    fn settings(&self) -> Settings {
        self.settings
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}
