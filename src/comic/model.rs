use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MIME type written for the HLS playlist
pub const HLS_MIME: &str = "application/x-mpegURL";
/// MIME type written for the progressive mp4
pub const MP4_MIME: &str = "video/mp4";

/// One comic entry in comics.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: String,
    pub name: String,
    /// Number of panels when the entry was created; not kept in sync afterwards
    #[serde(default)]
    pub panels_count: usize,
    #[serde(default)]
    pub panels: Vec<Panel>,
    /// Empty, or the playlist followed by the mp4
    #[serde(default, with = "video_field")]
    pub video: Vec<VideoSource>,
    pub effect: Effect,
    pub credits: Credits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vtt: Option<String>,
}

/// A panel image plus its optional speech-bubble overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub image: String,
    /// Overlay filename from the text directory, empty when there is none
    #[serde(default)]
    pub text: String,
}

impl Panel {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            text: String::new(),
        }
    }
}

/// A playable video file and how the player should treat it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl VideoSource {
    pub fn hls(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: HLS_MIME.to_string(),
        }
    }

    pub fn mp4(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: MP4_MIME.to_string(),
        }
    }
}

/// Transition between panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Fade,
    Slide,
}

impl FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fade" => Ok(Effect::Fade),
            "slide" => Ok(Effect::Slide),
            other => Err(format!("unknown effect: {:?}", other)),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Fade => write!(f, "fade"),
            Effect::Slide => write!(f, "slide"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub artist: String,
    pub website: String,
}

/// The viewer treats `""` as "no video", so an empty list is written that way
mod video_field {
    use super::VideoSource;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Sources(Vec<VideoSource>),
        Empty(String),
    }

    pub fn serialize<S>(sources: &[VideoSource], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if sources.is_empty() {
            serializer.serialize_str("")
        } else {
            sources.serialize(serializer)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<VideoSource>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Sources(sources) => sources,
            Repr::Empty(_) => Vec::new(),
        })
    }
}
