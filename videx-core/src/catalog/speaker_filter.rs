//! Leading-character navigation for the speaker list.
//!
//! The list is always shown one character bucket at a time. A requested
//! bucket is honoured only when some speaker actually falls into it; anything
//! else (missing, blank, multi-character, unknown) lands on the lowest
//! available bucket instead of producing an error.

use tracing::debug;
use videx_model::{Speaker, speaker::upper_bucket};

use crate::database::ports::speakers::SpeakerRepository;
use crate::error::Result;

/// One page of the speaker list.
#[derive(Debug, Clone, Default)]
pub struct SpeakerIndex {
    /// Every bucket that has at least one speaker, ascending.
    pub initials: Vec<String>,
    /// Bucket being shown; `None` only when there are no speakers at all.
    pub current: Option<String>,
    pub speakers: Vec<Speaker>,
}

/// Pick the bucket to display for a raw `character` request value.
pub fn resolve_initial(
    requested: Option<&str>,
    available: &[String],
) -> Option<String> {
    if let Some(wanted) = requested
        .map(|raw| upper_bucket(raw.trim()))
        .filter(|raw| !raw.is_empty())
        && available.iter().any(|initial| *initial == wanted)
    {
        return Some(wanted);
    }

    available.first().cloned()
}

pub async fn load_speaker_index(
    speakers: &dyn SpeakerRepository,
    requested: Option<&str>,
) -> Result<SpeakerIndex> {
    let initials = speakers.initials().await?;
    let current = resolve_initial(requested, &initials);

    let wanted = requested.map(|raw| upper_bucket(raw.trim()));
    if wanted.is_some() && current != wanted {
        debug!(
            requested = ?requested,
            resolved = ?current,
            "speaker character fell back to lowest bucket"
        );
    }

    let listed = match current.as_deref() {
        Some(initial) => speakers.list_by_initial(initial).await?,
        None => Vec::new(),
    };

    Ok(SpeakerIndex {
        initials,
        current,
        speakers: listed,
    })
}

#[cfg(test)]
mod tests {
    use videx_model::NewSpeaker;

    use super::*;
    use crate::database::infrastructure::memory::InMemoryCatalog;

    fn buckets(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn honours_known_single_character_case_insensitively() {
        let available = buckets(&["A", "R"]);
        assert_eq!(resolve_initial(Some("r"), &available), Some("R".into()));
        assert_eq!(resolve_initial(Some(" R "), &available), Some("R".into()));
    }

    #[test]
    fn falls_back_to_lowest_bucket() {
        let available = buckets(&["A", "R"]);
        for requested in [None, Some(""), Some("richard"), Some("42"), Some("z")]
        {
            assert_eq!(
                resolve_initial(requested, &available),
                Some("A".into()),
                "requested {requested:?}"
            );
        }
    }

    #[test]
    fn no_speakers_means_no_bucket() {
        assert_eq!(resolve_initial(Some("a"), &[]), None);
    }

    #[test]
    fn digit_bucket_is_selectable_when_present() {
        let available = buckets(&["4", "A"]);
        assert_eq!(resolve_initial(Some("4"), &available), Some("4".into()));
        assert_eq!(resolve_initial(Some("42"), &available), Some("4".into()));
    }

    #[tokio::test]
    async fn sharp_s_bucket_is_reachable() {
        let catalog = InMemoryCatalog::new();
        for name in ["ßtefan", "Stefan"] {
            SpeakerRepository::create(&catalog, NewSpeaker::new(name))
                .await
                .expect("create speaker");
        }

        let index = load_speaker_index(&catalog, Some("ß")).await.expect("index");
        assert_eq!(index.initials, buckets(&["S", "ß"]));
        assert_eq!(index.current.as_deref(), Some("ß"));
        let names: Vec<_> =
            index.speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["ßtefan"]);
    }

    #[tokio::test]
    async fn index_lists_only_the_resolved_bucket() {
        let catalog = InMemoryCatalog::new();
        for name in ["Random Speaker", "Another Speaker", "alice"] {
            SpeakerRepository::create(&catalog, NewSpeaker::new(name))
                .await
                .expect("create speaker");
        }

        let index = load_speaker_index(&catalog, Some("richard"))
            .await
            .expect("index");

        assert_eq!(index.initials, buckets(&["A", "R"]));
        assert_eq!(index.current.as_deref(), Some("A"));
        let names: Vec<_> =
            index.speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "Another Speaker"]);
    }
}
