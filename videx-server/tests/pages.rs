use anyhow::Result;
use axum::http::StatusCode;
use videx_model::{MediaFormat, MediaUrl};

#[path = "support/mod.rs"]
mod support;

use support::{VideoFactory, build_test_app, create_category, create_speaker};

fn detail_variants(kind: &str, id: impl std::fmt::Display, slug: &str) -> [String; 4] {
    [
        format!("/{kind}/{id}"),
        format!("/{kind}/{id}/"),
        format!("/{kind}/{id}/{slug}"),
        format!("/{kind}/{id}/{slug}/"),
    ]
}

#[tokio::test]
async fn every_detail_url_shape_resolves() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "PyCon US 2012").await?;
    let speaker = create_speaker(app.store(), "Random Speaker").await?;
    let video = VideoFactory::new(category.id, "django testing")
        .speaker(&speaker)
        .create(app.store())
        .await?;

    let cases = [
        ("category", category.id.to_string(), category.slug.clone(), "category-detail"),
        ("speaker", speaker.id.to_string(), speaker.slug.clone(), "speaker-detail"),
        ("video", video.id.to_string(), video.slug.clone(), "video-detail"),
    ];

    for (kind, id, slug, section) in cases {
        for path in detail_variants(kind, &id, &slug) {
            let response = app.server.get(&path).await;
            response.assert_status_ok();
            assert!(
                response.text().contains(&format!("id=\"{section}\"")),
                "{path} did not render the {kind} template"
            );
        }
        // Slugs are never checked against the stored one.
        let mismatched = app.server.get(&format!("/{kind}/{id}/not-the-slug/")).await;
        mismatched.assert_status_ok();
    }

    Ok(())
}

#[tokio::test]
async fn unknown_or_malformed_ids_are_not_found() -> Result<()> {
    let app = build_test_app().await?;

    for path in ["/category/999/", "/category/999/missing/", "/speaker/42", "/video/7/x"] {
        app.server.get(path).await.assert_status(StatusCode::NOT_FOUND);
    }

    let response = app.server.get("/category/abc/").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Not Found"));

    Ok(())
}

#[tokio::test]
async fn only_live_videos_are_cross_referenced() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "EuroPython 2011").await?;
    let speaker = create_speaker(app.store(), "Another Speaker").await?;

    VideoFactory::new(category.id, "Live Talk")
        .speaker(&speaker)
        .create(app.store())
        .await?;
    let draft = VideoFactory::new(category.id, "Draft Talk")
        .speaker(&speaker)
        .draft()
        .create(app.store())
        .await?;

    for path in [category.absolute_url(), speaker.absolute_url()] {
        let body = app.server.get(&path).await.text();
        assert!(body.contains("Live Talk"), "{path} is missing the live video");
        assert!(!body.contains("Draft Talk"), "{path} lists a draft video");
    }

    // The draft itself stays reachable by id.
    app.server.get(&draft.absolute_url()).await.assert_status_ok();

    Ok(())
}

#[tokio::test]
async fn summary_is_escaped_in_meta_tags() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "PyCon").await?;
    let video = VideoFactory::new(category.id, "Quoting")
        .summary(r#"Quoted "video summary.""#)
        .create(app.store())
        .await?;

    let body = app.server.get(&video.absolute_url()).await.text();

    let escaped = r#"content="Quoted &quot;video summary.&quot;""#;
    assert_eq!(body.matches(escaped).count(), 2);
    assert!(!body.contains(r#"content="Quoted "video"#));

    Ok(())
}

#[tokio::test]
async fn related_links_are_listed() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "PyCon").await?;
    let video = VideoFactory::new(category.id, "Packaging")
        .related("http://example.com/slides", "Slides for the packaging talk")
        .create(app.store())
        .await?;

    let body = app.server.get(&video.absolute_url()).await.text();
    assert!(body.contains("Slides for the packaging talk"));

    Ok(())
}

#[tokio::test]
async fn playable_urls_feed_the_player_and_downloads() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "PyCon").await?;
    let video = VideoFactory::new(category.id, "Media")
        .media(MediaUrl::new(MediaFormat::Ogv, "http://media.test/keynote-2012.ogv"))
        .media(
            MediaUrl::new(MediaFormat::Mp4, "http://media.test/keynote-2012.mp4")
                .download_only(true),
        )
        .create(app.store())
        .await?;

    let body = app.server.get(&video.absolute_url()).await.text();

    assert_eq!(body.matches("keynote-2012.ogv").count(), 2);
    assert_eq!(body.matches("keynote-2012.mp4").count(), 1);
    assert!(body.contains("<video"));

    Ok(())
}

#[tokio::test]
async fn flash_video_feeds_the_player() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "PyCon").await?;
    let video = VideoFactory::new(category.id, "Flash only")
        .media(MediaUrl::new(MediaFormat::Flv, "http://media.test/old-talk.flv"))
        .create(app.store())
        .await?;

    let body = app.server.get(&video.absolute_url()).await.text();
    assert!(body.contains("<video"));
    assert!(body.contains("type=\"video/x-flv\""));
    assert_eq!(body.matches("old-talk.flv").count(), 2);

    Ok(())
}

#[tokio::test]
async fn player_sources_depend_only_on_download_only() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "PyCon").await?;

    for format in MediaFormat::ALL {
        for download_only in [false, true] {
            let mode = if download_only { "download" } else { "inline" };
            let file = format!("clip-{format}-{mode}.{format}");
            let video = VideoFactory::new(category.id, &format!("{format} {mode}"))
                .media(
                    MediaUrl::new(format, format!("http://media.test/{file}"))
                        .download_only(download_only),
                )
                .create(app.store())
                .await?;

            let body = app.server.get(&video.absolute_url()).await.text();
            let expected = if download_only { 1 } else { 2 };
            assert_eq!(body.matches(&file).count(), expected, "{file}");
            assert_eq!(body.contains("<video"), !download_only, "{file}");
        }
    }

    Ok(())
}

#[tokio::test]
async fn category_list_counts_live_videos() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "DjangoCon").await?;
    VideoFactory::new(category.id, "One").create(app.store()).await?;
    VideoFactory::new(category.id, "Two").draft().create(app.store()).await?;

    for path in ["/category/", "/category"] {
        let response = app.server.get(path).await;
        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("id=\"category-list\""));
        assert!(body.contains("DjangoCon"));
        assert!(body.contains("1 videos"));
    }

    let home = app.server.get("/").await;
    home.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(home.header("location"), "/category/");

    Ok(())
}
