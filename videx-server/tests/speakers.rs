use anyhow::Result;

#[path = "support/mod.rs"]
mod support;

use support::{TestApp, build_test_app, create_speaker};

async fn speaker_app() -> Result<TestApp> {
    let app = build_test_app().await?;
    create_speaker(app.store(), "Another").await?;
    create_speaker(app.store(), "Random").await?;
    create_speaker(app.store(), "rachel lowercase").await?;
    Ok(app)
}

async fn speaker_list(app: &TestApp, character: Option<&str>) -> String {
    let mut request = app.server.get("/speaker/");
    if let Some(character) = character {
        request = request.add_query_param("character", character);
    }
    let response = request.await;
    response.assert_status_ok();
    response.text()
}

#[tokio::test]
async fn unusable_character_falls_back_to_lowest_bucket() -> Result<()> {
    let app = speaker_app().await?;

    for character in [None, Some(""), Some("  "), Some("richard"), Some("42")] {
        let body = speaker_list(&app, character).await;
        assert!(body.contains("Another"), "{character:?} should show the A bucket");
        assert!(!body.contains("Random"), "{character:?} leaked the R bucket");
    }

    Ok(())
}

#[tokio::test]
async fn known_character_is_case_insensitive() -> Result<()> {
    let app = speaker_app().await?;

    for character in ["r", "R", " r "] {
        let body = speaker_list(&app, Some(character)).await;
        assert!(body.contains("Random"));
        assert!(body.contains("rachel lowercase"));
        assert!(!body.contains(">Another<"));
    }

    Ok(())
}

#[tokio::test]
async fn navigation_lists_every_bucket() -> Result<()> {
    let app = speaker_app().await?;
    let body = speaker_list(&app, Some("r")).await;

    assert!(body.contains("id=\"speaker-list\""));
    assert!(body.contains("character=a"));
    assert!(body.contains("<strong>R</strong>"));

    let without_slash = app.server.get("/speaker").await;
    without_slash.assert_status_ok();

    Ok(())
}

#[tokio::test]
async fn empty_catalog_renders_an_empty_list() -> Result<()> {
    let app = build_test_app().await?;
    let body = speaker_list(&app, Some("x")).await;
    assert!(body.contains("No speakers yet."));
    Ok(())
}
