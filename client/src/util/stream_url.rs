//! HLS manifest URL construction.

#[cfg(test)]
#[path = "stream_url_test.rs"]
mod stream_url_test;

use std::fmt;
use std::str::FromStr;

use super::slug::stream_slug;

/// Renditions the media host encodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resolution {
    P480,
    #[default]
    P720,
    P1080,
}

impl Resolution {
    pub const ALL: [Self; 3] = [Self::P480, Self::P720, Self::P1080];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown resolution: {s}"))
    }
}

/// A video addressed by numeric id or by slug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoRef<'a> {
    Id(u64),
    Slug(&'a str),
}

impl From<u64> for VideoRef<'_> {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for VideoRef<'a> {
    fn from(slug: &'a str) -> Self {
        Self::Slug(slug)
    }
}

/// `{media_host}/media/videos/hls/{resolution}/{id or slug}/index.m3u8`
pub fn build_stream_url<'a>(media_host: &str, video: impl Into<VideoRef<'a>>, resolution: Resolution) -> String {
    let segment = match video.into() {
        VideoRef::Id(id) => id.to_string(),
        VideoRef::Slug(slug) => stream_slug(slug),
    };
    format!("{}/media/videos/hls/{resolution}/{segment}/index.m3u8", media_host.trim_end_matches('/'))
}
