//! Weather icon URLs on the OpenWeather icon CDN.

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Rendered icon size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    /// 50x50, used on forecast cards
    #[default]
    Standard,
    /// 100x100, used on the current-weather panel
    Large,
}

impl IconSize {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Large => "@2x",
        }
    }
}

/// Build the CDN URL for an icon code such as "10d".
pub fn icon_url(code: &str, size: IconSize) -> String {
    format!("{}/{}{}.png", ICON_BASE_URL, code, size.suffix())
}
