use crate::utils::error::{BookingError, Result};
use url::Url;

pub const DEFAULT_WIDGET_BASE: &str = "https://yandex.ru/map-widget/v1/";

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub widget_base: String,
    pub zoom: u32,
    pub width: String,
    pub height: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            widget_base: DEFAULT_WIDGET_BASE.to_string(),
            zoom: 14,
            width: "750px".to_string(),
            height: "500px".to_string(),
        }
    }
}

/// An embeddable map frame pointing at one place.
#[derive(Debug, Clone, PartialEq)]
pub struct MapWidget {
    pub iframe_src: String,
    pub width: String,
    pub height: String,
}

impl MapWidget {
    /// A search-mode map centered on `address`.
    pub fn for_address(address: &str, settings: &MapSettings) -> Result<Self> {
        let mut url = Url::parse(&settings.widget_base).map_err(|e| {
            BookingError::InvalidConfigValueError {
                field: "map.widget_base".to_string(),
                value: settings.widget_base.clone(),
                reason: e.to_string(),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("mode", "search")
            .append_pair("text", address)
            .append_pair("z", &settings.zoom.to_string());

        Ok(Self {
            iframe_src: url.into(),
            width: settings.width.clone(),
            height: settings.height.clone(),
        })
    }

    pub fn embed_html(&self) -> String {
        format!(
            r#"<iframe src="{}" width="{}" height="{}" frameborder="1" allowfullscreen="true"></iframe>"#,
            self.iframe_src, self.width, self.height
        )
    }
}
