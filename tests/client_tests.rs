//! End-to-end tests driving `JustCmsClient` through a fake transport
//!
//! These cover URL construction, authorization, response decoding and error
//! propagation for every retrieval operation.

mod common;

use common::fake_transport::{BASE, FakeTransport, TEST_TOKEN};
use common::fixtures;
use justcms::{
  ContentBlock, Error, GetPagesParams, JustCmsApi, LayoutValue, PageFilters, get_first_image, get_large_image_variant,
  has_category, is_block_has_style,
};

#[tokio::test]
async fn test_get_categories_hits_project_root() {
  let (client, transport) = FakeTransport::new()
    .with_json("", fixtures::categories_response())
    .into_client();

  let categories = client.get_categories().await.unwrap();

  assert_eq!(categories.len(), 2);
  assert_eq!(categories[1].name, "Documentation");
  assert_eq!(transport.last_url(), BASE);
}

#[tokio::test]
async fn test_every_request_carries_bearer_token() {
  let (client, transport) = FakeTransport::new()
    .with_json("", fixtures::categories_response())
    .with_json("menus/main", fixtures::main_menu_response())
    .into_client();

  client.get_categories().await.unwrap();
  client.get_menu_by_id("main").await.unwrap();

  let expected = format!("Bearer {TEST_TOKEN}");
  for request in transport.requests() {
    assert_eq!(request.header("Authorization"), Some(expected.as_str()));
    assert_eq!(request.header("Accept"), Some("application/json"));
  }
}

#[tokio::test]
async fn test_get_pages_without_arguments_sends_no_query() {
  let (client, transport) = FakeTransport::new()
    .with_json("pages", fixtures::pages_response())
    .into_client();

  let pages = client.get_pages(&GetPagesParams::default()).await.unwrap();

  assert_eq!(pages.items.len(), 2);
  assert_eq!(pages.total, 42);
  assert_eq!(transport.last_url(), format!("{BASE}/pages"));
}

#[tokio::test]
async fn test_get_pages_with_category_filter() {
  let (client, transport) = FakeTransport::new()
    .with_json("pages", fixtures::pages_response())
    .into_client();

  let params = GetPagesParams::new().filters(PageFilters::category("blog"));
  client.get_pages(&params).await.unwrap();

  let url = transport.last_url();
  assert!(url.contains("filter.category.slug=blog"));
  assert!(!url.contains("start"));
  assert!(!url.contains("offset"));
}

#[tokio::test]
async fn test_get_pages_with_window() {
  let (client, transport) = FakeTransport::new()
    .with_json("pages", fixtures::pages_response())
    .into_client();

  let params = GetPagesParams::new().start(10).offset(5);
  client.get_pages(&params).await.unwrap();

  let url = transport.last_url();
  assert_eq!(url, format!("{BASE}/pages?start=10&offset=5"));
  assert!(!url.contains("filter.category.slug"));
}

#[tokio::test]
async fn test_get_page_by_slug_without_version() {
  let (client, transport) = FakeTransport::new()
    .with_json("pages/about-us", fixtures::about_page_response())
    .into_client();

  let page = client.get_page_by_slug("about-us", None).await.unwrap();

  assert_eq!(page.title(), "About us");
  assert_eq!(page.content.len(), 8);
  let url = transport.last_url();
  assert!(url.ends_with("pages/about-us"));
  assert!(!url.contains("v="));
}

#[tokio::test]
async fn test_get_page_by_slug_with_draft_version() {
  let (client, transport) = FakeTransport::new()
    .with_json("pages/about-us", fixtures::about_page_response())
    .into_client();

  client.get_page_by_slug("about-us", Some("draft")).await.unwrap();

  assert_eq!(transport.last_url(), format!("{BASE}/pages/about-us?v=draft"));
}

#[tokio::test]
async fn test_get_page_by_unknown_slug_surfaces_api_error() {
  let (client, _) = FakeTransport::new().into_client();

  let err = client.get_page_by_slug("missing", None).await.unwrap_err();

  assert_eq!(err.status(), Some(404));
  assert!(err.to_string().contains("Not found"));
}

#[tokio::test]
async fn test_get_menu_by_id_decodes_tree() {
  let (client, transport) = FakeTransport::new()
    .with_json("menus/main", fixtures::main_menu_response())
    .into_client();

  let menu = client.get_menu_by_id("main").await.unwrap();

  assert_eq!(menu.name, "Main navigation");
  assert_eq!(menu.items[1].children.len(), 2);
  assert_eq!(menu.items[1].subtitle.as_deref(), Some("What we sell"));
  assert!(menu.items[1].children[0].subtitle.is_none());
  assert_eq!(menu.walk().count(), 4);
  assert!(transport.last_url().ends_with("menus/main"));
}

#[tokio::test]
async fn test_get_layout_by_id() {
  let (client, transport) = FakeTransport::new()
    .with_json("layouts/footer", fixtures::layout("footer"))
    .into_client();

  let layout = client.get_layout_by_id("footer").await.unwrap();

  assert_eq!(layout.id, "footer");
  assert_eq!(layout.item("title").unwrap().value, LayoutValue::Text("footer title".to_string()));
  assert_eq!(layout.item("visible").unwrap().value.as_bool(), Some(true));
  assert_eq!(transport.last_url(), format!("{BASE}/layouts/footer"));
}

#[tokio::test]
async fn test_get_layouts_by_ids_joins_with_semicolons() {
  let (client, transport) = FakeTransport::new()
    .with_json(
      "layouts/a;b;c",
      serde_json::json!([fixtures::layout("a"), fixtures::layout("b"), fixtures::layout("c")]),
    )
    .into_client();

  let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
  let layouts = client.get_layouts_by_ids(&ids).await.unwrap();

  let names: Vec<_> = layouts.iter().map(|layout| layout.id.as_str()).collect();
  assert_eq!(names, ["a", "b", "c"]);
  assert!(transport.last_url().ends_with("layouts/a;b;c"));
  assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_non_success_statuses_surface_status_and_body() {
  for status in [400u16, 401, 404, 500] {
    let body = format!("failure body {status}");
    let (client, _) = FakeTransport::always(status, &body).into_client();

    let results = [
      client.get_categories().await.map(|_| ()),
      client.get_pages(&GetPagesParams::default()).await.map(|_| ()),
      client.get_page_by_slug("about-us", None).await.map(|_| ()),
      client.get_menu_by_id("main").await.map(|_| ()),
      client.get_layout_by_id("footer").await.map(|_| ()),
      client.get_layouts_by_ids(&["a".to_string()]).await.map(|_| ()),
    ];

    for result in results {
      match result {
        Err(Error::Api { status: got, body: got_body }) => {
          assert_eq!(got, status);
          assert_eq!(got_body, body);
        }
        other => panic!("expected API error for status {status}, got {other:?}"),
      }
    }
  }
}

#[tokio::test]
async fn test_transport_failures_pass_through_unchanged() {
  let (client, transport) = FakeTransport::failing("connection reset by peer").into_client();

  let results = [
    client.get_categories().await.map(|_| ()),
    client.get_pages(&GetPagesParams::default()).await.map(|_| ()),
    client.get_page_by_slug("about-us", Some("draft")).await.map(|_| ()),
    client.get_menu_by_id("main").await.map(|_| ()),
    client.get_layout_by_id("footer").await.map(|_| ()),
    client.get_layouts_by_ids(&["a".to_string(), "b".to_string()]).await.map(|_| ()),
  ];

  for result in results {
    match result {
      Err(Error::Transport(message)) => assert_eq!(message, "connection reset by peer"),
      other => panic!("expected transport error, got {other:?}"),
    }
  }
  assert_eq!(transport.requests().len(), 6);
}

#[tokio::test]
async fn test_transport_failure_has_no_status() {
  let (client, _) = FakeTransport::failing("dns lookup failed").into_client();

  let err = client.get_categories().await.unwrap_err();

  assert_eq!(err.status(), None);
  assert!(!err.is_config());
  assert!(err.to_string().contains("dns lookup failed"));
}

#[tokio::test]
async fn test_helpers_on_fetched_page() {
  let (client, _) = FakeTransport::new()
    .with_json("pages/about-us", fixtures::about_page_response())
    .into_client();

  let page = client.get_page_by_slug("about-us", None).await.unwrap();

  assert!(has_category(&page, "company"));
  assert!(!has_category(&page, "blog"));
  assert!(has_category(&page.summary, "company"));

  let header = &page.content[0];
  assert!(is_block_has_style(header, "highlight"));
  assert!(!is_block_has_style(header, "rounded"));

  let image_block = page.content.iter().find_map(ContentBlock::as_image).unwrap();
  let first = get_first_image(image_block).unwrap();
  assert_eq!(first.alt, "office image");
  let large = get_large_image_variant(first).unwrap();
  assert_eq!(large.url, "https://images.justcms.co/office-large.webp");
  assert_eq!(large.width, 1600);

  let cover = page.summary.cover_image.as_ref().unwrap();
  assert_eq!(get_large_image_variant(cover).unwrap().filename, "team-large.webp");

  let ContentBlock::Custom(custom) = &page.content[7] else {
    panic!("expected custom block");
  };
  assert_eq!(custom.block_id, "team-grid");
  assert_eq!(custom.field("columns"), Some(&serde_json::json!(3)));
  assert_eq!(custom.field("showRoles"), Some(&serde_json::json!(true)));
}

#[tokio::test]
async fn test_client_is_shareable_across_tasks() {
  let (client, transport) = FakeTransport::new()
    .with_json("menus/main", fixtures::main_menu_response())
    .with_json("layouts/footer", fixtures::layout("footer"))
    .into_client();

  let menu_client = client.clone();
  let menu = tokio::spawn(async move { menu_client.get_menu_by_id("main").await });
  let layout = tokio::spawn(async move { client.get_layout_by_id("footer").await });

  assert_eq!(menu.await.unwrap().unwrap().id, "main");
  assert_eq!(layout.await.unwrap().unwrap().id, "footer");
  assert_eq!(transport.requests().len(), 2);
}
