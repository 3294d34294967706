use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Upstream media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Image,
    CarouselAlbum,
    Video,
    Other(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Image => "IMAGE",
            MediaType::CarouselAlbum => "CAROUSEL_ALBUM",
            MediaType::Video => "VIDEO",
            MediaType::Other(s) => s,
        }
    }

    /// Whether the item renders as a still photo on the site
    pub fn is_photo(&self) -> bool {
        matches!(self, MediaType::Image | MediaType::CarouselAlbum)
    }
}

impl From<&str> for MediaType {
    fn from(s: &str) -> Self {
        match s {
            "IMAGE" => MediaType::Image,
            "CAROUSEL_ALBUM" => MediaType::CarouselAlbum,
            "VIDEO" => MediaType::Video,
            other => MediaType::Other(other.to_string()),
        }
    }
}

impl Serialize for MediaType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MediaType::from(s.as_str()))
    }
}

/// Raw item from the `/me/media` listing. Every field is optional so a
/// partial item is dropped by the mapper instead of failing the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Listing envelope, `data` may be absent on an empty feed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaPage {
    #[serde(default)]
    pub data: Vec<MediaItem>,
}

/// Photo as served to the website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Response body of `GET /api/instagram`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoFeed {
    pub photos: Vec<Photo>,
    pub count: usize,
}

impl PhotoFeed {
    pub fn new(photos: Vec<Photo>) -> Self {
        let count = photos.len();
        Self { photos, count }
    }
}
