use crate::error::StudioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "4:3")]
    StandardLandscape,
    #[serde(rename = "3:4")]
    StandardPortrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::StandardLandscape,
        AspectRatio::StandardPortrait,
    ];

    /// The token sent to the API, e.g. `"16:9"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::StandardLandscape => "4:3",
            AspectRatio::StandardPortrait => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == token)
            .ok_or_else(|| {
                StudioError::ConfigError(format!(
                    "Unknown aspect ratio '{}' (expected one of {})",
                    token,
                    AspectRatio::ALL.map(|r| r.as_str()).join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArtStyle {
    #[serde(rename = "No Style")]
    None,
    #[default]
    Photorealistic,
    Anime,
    Cinematic,
    Surreal,
    Watercolor,
    Moebius,
    #[serde(rename = "Hyper-realistic")]
    HyperRealistic,
    Cyberpunk,
    #[serde(rename = "Oil Painting")]
    OilPainting,
    #[serde(rename = "Pencil Sketch")]
    Sketch,
    #[serde(rename = "Pixel Art")]
    PixelArt,
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 12] = [
        ArtStyle::None,
        ArtStyle::Photorealistic,
        ArtStyle::Anime,
        ArtStyle::Cinematic,
        ArtStyle::Surreal,
        ArtStyle::Watercolor,
        ArtStyle::Moebius,
        ArtStyle::HyperRealistic,
        ArtStyle::Cyberpunk,
        ArtStyle::OilPainting,
        ArtStyle::Sketch,
        ArtStyle::PixelArt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArtStyle::None => "No Style",
            ArtStyle::Photorealistic => "Photorealistic",
            ArtStyle::Anime => "Anime",
            ArtStyle::Cinematic => "Cinematic",
            ArtStyle::Surreal => "Surreal",
            ArtStyle::Watercolor => "Watercolor",
            ArtStyle::Moebius => "Moebius",
            ArtStyle::HyperRealistic => "Hyper-realistic",
            ArtStyle::Cyberpunk => "Cyberpunk",
            ArtStyle::OilPainting => "Oil Painting",
            ArtStyle::Sketch => "Pencil Sketch",
            ArtStyle::PixelArt => "Pixel Art",
        }
    }

    /// `true` for the "No Style" sentinel, which suppresses the style clause.
    pub fn is_no_style(&self) -> bool {
        matches!(self, ArtStyle::None)
    }
}

impl fmt::Display for ArtStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArtStyle {
    type Err = StudioError;

    /// Case-insensitive match on the label; `-` and spaces are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |value: &str| value.trim().to_lowercase().replace('-', " ");
        let wanted = normalize(s);
        ArtStyle::ALL
            .into_iter()
            .find(|style| normalize(style.label()) == wanted)
            .ok_or_else(|| StudioError::ConfigError(format!("Unknown art style '{}'", s.trim())))
    }
}
