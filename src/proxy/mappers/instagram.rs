// Instagram listing -> site photo feed

use crate::models::{MediaItem, MediaPage, MediaType, Photo, PhotoFeed};

/// Keep still photos only, at most `count` of them, in upstream order
pub fn to_photo_feed(page: MediaPage, count: usize) -> PhotoFeed {
    let photos = page.data.into_iter().filter_map(to_photo).take(count).collect();

    PhotoFeed::new(photos)
}

/// `None` for anything that is not an image or album, or has no id
pub fn to_photo(item: MediaItem) -> Option<Photo> {
    let media_type = item.media_type.filter(MediaType::is_photo)?;
    let id = item.id?;

    let thumbnail_url = item
        .thumbnail_url
        .filter(|u| !u.is_empty())
        .or_else(|| item.media_url.clone());

    Some(Photo {
        id,
        media_type,
        media_url: item.media_url,
        thumbnail_url,
        permalink: item.permalink,
        caption: item.caption.unwrap_or_default(),
        timestamp: item.timestamp,
    })
}
