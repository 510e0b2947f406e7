//! Video identifiers and the media addresses derived from them
//!
//! Extracts the YouTube content identifier from the URL shapes the catalog
//! uses and builds the thumbnail and embed addresses for it.

use std::fmt;

use url::Url;

/// Host of the short-link form (`https://youtu.be/{id}`).
pub const SHORT_LINK_HOST: &str = "youtu.be";

/// Query parameter carrying the identifier on watch pages.
pub const ID_QUERY_PARAM: &str = "v";

/// Path segment preceding the identifier on embed URLs.
pub const EMBED_MARKER: &str = "embed";

const THUMBNAIL_BASE: &str = "https://i.ytimg.com/vi";
const EMBED_BASE: &str = "https://www.youtube.com/embed";
const EMBED_PARAMS: &str = "rel=0&modestbranding=1&playsinline=1";

/// Platform-specific identifier of a hosted video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps a raw identifier, rejecting empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == raw.len() {
            Some(Self(raw))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Static preview image for this video.
    pub fn thumbnail_url(&self) -> String {
        format!("{THUMBNAIL_BASE}/{}/hqdefault.jpg", self.path_segment())
    }

    /// Embeddable interactive player for this video.
    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE}/{}?{EMBED_PARAMS}", self.path_segment())
    }

    /// Identifier encoded for use as a single URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extracts the video identifier from a YouTube URL.
///
/// Recognized shapes, first match wins:
/// 1. `https://youtu.be/{id}`: first path segment
/// 2. `...?v={id}`: the `v` query parameter
/// 3. `.../embed/{id}`: the segment after `embed`
///
/// Returns `None` for anything else, including strings that do not parse as
/// an absolute URL. The query parameter is checked before the embed marker,
/// so a URL carrying both resolves to the query value.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let parsed = Url::parse(url).ok()?;

    if parsed.host_str() == Some(SHORT_LINK_HOST) {
        return short_link_id(&parsed);
    }

    if let Some(id) = query_param_id(&parsed) {
        return Some(id);
    }

    embedded_path_id(&parsed)
}

fn short_link_id(url: &Url) -> Option<VideoId> {
    let first = url.path_segments()?.next()?;
    VideoId::new(decode_segment(first))
}

fn query_param_id(url: &Url) -> Option<VideoId> {
    url.query_pairs()
        .find(|(key, _)| key == ID_QUERY_PARAM)
        .filter(|(_, value)| !value.is_empty())
        .map(|(_, value)| VideoId(value.into_owned()))
}

fn embedded_path_id(url: &Url) -> Option<VideoId> {
    let segments: Vec<&str> = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .collect();

    let marker = segments.iter().position(|s| *s == EMBED_MARKER)?;
    let segment = segments.get(marker + 1)?;
    Some(VideoId(decode_segment(segment)))
}

/// Percent-decodes a path segment, keeping it as written when the escapes
/// do not decode to UTF-8.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
