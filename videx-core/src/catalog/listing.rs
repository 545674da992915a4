use std::cmp::Ordering;

use videx_model::VideoSummary;

/// Order used by every public video listing: most recently recorded first,
/// undated videos last, then by title (case-insensitive) and id.
pub fn compare_listing(a: &VideoSummary, b: &VideoSummary) -> Ordering {
    let by_recorded = match (a.recorded, b.recorded) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_recorded
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_listing(videos: &mut [VideoSummary]) {
    videos.sort_by(compare_listing);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use videx_model::{VideoId, VideoState};

    use super::*;

    fn summary(id: i64, title: &str, recorded: Option<(i32, u32, u32)>) -> VideoSummary {
        VideoSummary {
            id: VideoId(id),
            title: title.to_string(),
            slug: String::new(),
            summary: String::new(),
            state: VideoState::Live,
            recorded: recorded
                .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            thumbnail_url: None,
        }
    }

    #[test]
    fn newest_first_then_undated_by_title() {
        let mut videos = vec![
            summary(1, "zeta", None),
            summary(2, "old talk", Some((2011, 3, 9))),
            summary(3, "Alpha", None),
            summary(4, "new talk", Some((2012, 3, 9))),
        ];

        sort_listing(&mut videos);

        let ids: Vec<_> = videos.iter().map(|v| v.id.get()).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }
}
