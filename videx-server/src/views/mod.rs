//! Askama page templates and the view data they render.

use askama::Template;
use axum::response::Html;
use videx_config::Config;
use videx_core::{
    api::routes::{site as pages, utils},
    search::SearchPage,
};
use videx_model::{
    Category, CategoryListing, MediaUrl, Speaker, Video, VideoSummary,
};

use crate::infra::errors::PageResult;

/// Site-wide values every page needs.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub title: String,
    pub url: String,
    pub suggestions_enabled: bool,
}

impl SiteContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.site.title.clone(),
            url: config.site.url.clone(),
            suggestions_enabled: config.search.enable_suggestions,
        }
    }

    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }

    pub fn search_path(&self) -> &'static str {
        pages::search::RESULTS
    }

    pub fn opensearch_path(&self) -> &'static str {
        pages::search::OPENSEARCH
    }
}

pub fn render<T: Template>(template: &T) -> PageResult<Html<String>> {
    Ok(Html(template.render()?))
}

#[derive(Template)]
#[template(path = "videos/category_list.html")]
pub struct CategoryListPage<'a> {
    pub site: &'a SiteContext,
    pub categories: &'a [CategoryListing],
}

#[derive(Template)]
#[template(path = "videos/category.html")]
pub struct CategoryPage<'a> {
    pub site: &'a SiteContext,
    pub category: &'a Category,
    pub videos: &'a [VideoSummary],
}

/// One entry of the leading-character navigation.
#[derive(Debug, Clone)]
pub struct InitialLink {
    pub label: String,
    pub href: String,
    pub current: bool,
}

impl InitialLink {
    pub fn build(initials: &[String], current: Option<&str>) -> Vec<Self> {
        initials
            .iter()
            .map(|initial| Self {
                label: initial.clone(),
                href: utils::with_query(
                    pages::speaker::LIST,
                    &[(
                        pages::speaker::CHARACTER_PARAM,
                        &encode_query_value(&initial.to_lowercase()),
                    )],
                ),
                current: Some(initial.as_str()) == current,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "videos/speaker_list.html")]
pub struct SpeakerListPage<'a> {
    pub site: &'a SiteContext,
    pub initials: Vec<InitialLink>,
    pub speakers: &'a [Speaker],
}

#[derive(Template)]
#[template(path = "videos/speaker.html")]
pub struct SpeakerPage<'a> {
    pub site: &'a SiteContext,
    pub speaker: &'a Speaker,
    pub videos: &'a [VideoSummary],
}

#[derive(Template)]
#[template(path = "videos/video.html")]
pub struct VideoPage<'a> {
    pub site: &'a SiteContext,
    pub video: &'a Video,
    pub category: Option<&'a Category>,
    pub speakers: &'a [Speaker],
    pub playable: Vec<&'a MediaUrl>,
    pub canonical_url: String,
}

impl<'a> VideoPage<'a> {
    pub fn new(
        site: &'a SiteContext,
        video: &'a Video,
        category: Option<&'a Category>,
        speakers: &'a [Speaker],
    ) -> Self {
        Self {
            site,
            video,
            category,
            speakers,
            playable: video.playable_media().collect(),
            canonical_url: site.absolute(&video.absolute_url()),
        }
    }
}

#[derive(Template)]
#[template(path = "videos/search.html")]
pub struct SearchResultsPage<'a> {
    pub site: &'a SiteContext,
    pub query: &'a str,
    pub results: &'a SearchPage,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

impl<'a> SearchResultsPage<'a> {
    pub fn new(site: &'a SiteContext, query: &'a str, results: &'a SearchPage) -> Self {
        let page_href = |page: usize| {
            let page = page.to_string();
            utils::with_query(
                pages::search::RESULTS,
                &[
                    (pages::search::QUERY_PARAM, &encode_query_value(query)),
                    ("page", &page),
                ],
            )
        };
        Self {
            site,
            query,
            results,
            previous_href: results.previous_page().map(page_href),
            next_href: results.next_page().map(page_href),
        }
    }
}

#[derive(Template)]
#[template(path = "videos/opensearch.xml")]
pub struct OpenSearchDescription<'a> {
    pub site: &'a SiteContext,
    pub search_template: String,
    pub suggestions_template: Option<String>,
}

impl<'a> OpenSearchDescription<'a> {
    pub fn new(site: &'a SiteContext) -> Self {
        let search_template = format!(
            "{}?{}={{searchTerms}}",
            site.absolute(pages::search::RESULTS),
            pages::search::QUERY_PARAM
        );
        let suggestions_template = site.suggestions_enabled.then(|| {
            format!(
                "{}?{}={{searchTerms}}",
                site.absolute(pages::search::SUGGESTIONS),
                pages::search::QUERY_PARAM
            )
        });
        Self {
            site,
            search_template,
            suggestions_template,
        }
    }
}

/// Percent-encode a query-string value.
pub fn encode_query_value(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(suggestions_enabled: bool) -> SiteContext {
        SiteContext {
            title: "Videx".into(),
            url: "http://videos.test".into(),
            suggestions_enabled,
        }
    }

    #[test]
    fn absolute_urls_join_without_double_slash() {
        let site = SiteContext {
            url: "https://videos.example.org/".into(),
            ..site(false)
        };
        assert_eq!(
            site.absolute("/opensearch/"),
            "https://videos.example.org/opensearch/"
        );
    }

    #[test]
    fn initial_links_mark_current_bucket() {
        let links = InitialLink::build(&["A".into(), "R".into()], Some("R"));
        assert_eq!(links[0].href, "/speaker/?character=a");
        assert!(!links[0].current);
        assert!(links[1].current);
    }

    #[test]
    fn opensearch_advertises_suggestions_only_when_enabled() {
        let site_off = site(false);
        let disabled = OpenSearchDescription::new(&site_off);
        assert!(disabled.suggestions_template.is_none());
        assert_eq!(
            disabled.search_template,
            "http://videos.test/search/?q={searchTerms}"
        );

        let site_on = site(true);
        let enabled = OpenSearchDescription::new(&site_on);
        assert_eq!(
            enabled.suggestions_template.as_deref(),
            Some("http://videos.test/opensearch/suggestions/?q={searchTerms}")
        );
    }

    #[test]
    fn query_values_are_percent_encoded() {
        assert_eq!(encode_query_value("large scale"), "large%20scale");
        assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_value("café"), "caf%C3%A9");
    }
}
