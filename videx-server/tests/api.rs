use anyhow::Result;
use axum::http::StatusCode;
use serde_json::Value;
use videx_core::api::routes::{utils, v1};

#[path = "support/mod.rs"]
mod support;

use support::{VideoFactory, build_test_app, create_category, create_speaker};

fn item(route: &str, id: impl std::fmt::Display) -> String {
    utils::replace_param(route, "{id}", id.to_string())
}

#[tokio::test]
async fn health_reports_ok() -> Result<()> {
    let app = build_test_app().await?;

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");

    Ok(())
}

#[tokio::test]
async fn category_endpoints_expose_live_videos() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "PyCon US 2012").await?;
    VideoFactory::new(category.id, "Live Talk").create(app.store()).await?;
    VideoFactory::new(category.id, "Draft Talk").draft().create(app.store()).await?;

    let list = app.server.get(v1::category::COLLECTION).await;
    list.assert_status_ok();
    let body: Value = list.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"][0]["category"]["title"], "PyCon US 2012");
    assert_eq!(body["data"][0]["live_videos"], 1);

    let detail = app
        .server
        .get(&item(v1::category::ITEM, category.id))
        .await;
    detail.assert_status_ok();
    let body: Value = detail.json();
    let videos = body["data"]["videos"].as_array().expect("videos array");
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["title"], "Live Talk");

    Ok(())
}

#[tokio::test]
async fn video_endpoint_includes_speakers_and_media() -> Result<()> {
    let app = build_test_app().await?;
    let category = create_category(app.store(), "PyCon").await?;
    let speaker = create_speaker(app.store(), "Erik Rose").await?;
    let video = VideoFactory::new(category.id, "Speedily Practical Large-Scale Tests")
        .speaker(&speaker)
        .related("http://example.com/slides", "Slides")
        .create(app.store())
        .await?;

    let response = app.server.get(&item(v1::video::ITEM, video.id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["video"]["slug"], "speedily-practical-large-scale-tests");
    assert_eq!(body["data"]["category"]["title"], "PyCon");
    assert_eq!(body["data"]["speakers"][0]["name"], "Erik Rose");
    assert_eq!(body["data"]["video"]["related_urls"][0]["description"], "Slides");

    let speaker_response = app
        .server
        .get(&item(v1::speaker::ITEM, speaker.id))
        .await;
    speaker_response.assert_status_ok();
    let body: Value = speaker_response.json();
    assert_eq!(body["data"]["name"], "Erik Rose");

    let speakers: Value = app.server.get(v1::speaker::COLLECTION).await.json();
    assert_eq!(speakers["data"].as_array().map(Vec::len), Some(1));

    Ok(())
}

#[tokio::test]
async fn unknown_ids_use_the_json_error_envelope() -> Result<()> {
    let app = build_test_app().await?;

    for path in [
        item(v1::category::ITEM, 404),
        item(v1::speaker::ITEM, 404),
        item(v1::video::ITEM, "not-a-number"),
    ] {
        let response = app.server.get(&path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"]["status"], 404);
        assert!(body["error"]["message"].as_str().is_some());
    }

    Ok(())
}
