use serde_json::Value;

use zeroone_types::models::{MAX_MEDIA, Media, MediaKind};

use crate::raw::{RawPost, non_blank};

/// Resolve the attachment list of a post.
///
/// Precedence: canonical `media` > `mediaUrls`/`mediaTypes` > legacy
/// `mediaUrl`/`mediaType` > `cloudinaryUrl`. A representation that yields
/// no usable URL falls through to the next one.
pub fn resolve_media(raw: &RawPost) -> Vec<Media> {
    let mut media = canonical(raw)
        .or_else(|| plural(raw))
        .or_else(|| singular(raw))
        .or_else(|| cloudinary(raw))
        .unwrap_or_default();

    if media.len() > MAX_MEDIA {
        tracing::debug!(
            count = media.len(),
            "Post carries more than {} attachments, truncating",
            MAX_MEDIA
        );
        media.truncate(MAX_MEDIA);
    }
    media
}

fn kind_or_image(kind: Option<&str>) -> MediaKind {
    kind.map(MediaKind::from_loose).unwrap_or_default()
}

fn non_empty(media: Vec<Media>) -> Option<Vec<Media>> {
    if media.is_empty() { None } else { Some(media) }
}

fn canonical(raw: &RawPost) -> Option<Vec<Media>> {
    let items = raw.media.as_ref()?;
    non_empty(
        items
            .iter()
            .filter_map(|item| {
                let url = non_blank(item.url.as_deref())?;
                let kind = item.kind.as_deref().or(item.type_name.as_deref());
                Some(Media {
                    url: url.to_string(),
                    kind: kind_or_image(kind),
                })
            })
            .collect(),
    )
}

fn plural(raw: &RawPost) -> Option<Vec<Media>> {
    let urls = raw.media_urls.as_ref()?;
    let kinds = raw.media_types.as_deref().unwrap_or_default();

    // Kinds are positional, so pair them up before dropping blank URLs.
    non_empty(
        urls.iter()
            .enumerate()
            .filter_map(|(i, url)| {
                let url = non_blank(url.as_str())?;
                let kind = kinds.get(i).and_then(Value::as_str);
                Some(Media {
                    url: url.to_string(),
                    kind: kind_or_image(kind),
                })
            })
            .collect(),
    )
}

fn singular(raw: &RawPost) -> Option<Vec<Media>> {
    let url = non_blank(raw.media_url.as_deref())?;
    Some(vec![Media {
        url: url.to_string(),
        kind: kind_or_image(raw.media_type.as_deref()),
    }])
}

fn cloudinary(raw: &RawPost) -> Option<Vec<Media>> {
    let url = non_blank(raw.cloudinary_url.as_deref())?;
    Some(vec![Media {
        url: url.to_string(),
        kind: kind_or_image(raw.media_type.as_deref()),
    }])
}
