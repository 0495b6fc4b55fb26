//! Test fixtures for JustCMS API responses
//!
//! Sample bodies shaped like the public API's JSON.

#![allow(dead_code)]

use serde_json::json;

pub fn categories_response() -> serde_json::Value {
  json!({
    "categories": [
      { "name": "Blog", "slug": "blog" },
      { "name": "Documentation", "slug": "docs" }
    ]
  })
}

fn image(name: &str) -> serde_json::Value {
  json!({
    "alt": format!("{name} image"),
    "variants": [
      {
        "url": format!("https://images.justcms.co/{name}-thumb.webp"),
        "width": 300,
        "height": 200,
        "filename": format!("{name}-thumb.webp")
      },
      {
        "url": format!("https://images.justcms.co/{name}-large.webp"),
        "width": 1600,
        "height": 1066,
        "filename": format!("{name}-large.webp")
      }
    ]
  })
}

pub fn pages_response() -> serde_json::Value {
  json!({
    "items": [
      {
        "title": "Hello world",
        "subtitle": "Our first post",
        "coverImage": image("hello"),
        "slug": "hello-world",
        "categories": [{ "name": "Blog", "slug": "blog" }],
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-02T10:00:00.000Z"
      },
      {
        "title": "Getting started",
        "subtitle": "",
        "coverImage": null,
        "slug": "getting-started",
        "categories": [{ "name": "Documentation", "slug": "docs" }],
        "createdAt": "2024-04-01T10:00:00.000Z",
        "updatedAt": "2024-04-03T10:00:00.000Z"
      }
    ],
    "total": 42
  })
}

pub fn about_page_response() -> serde_json::Value {
  json!({
    "title": "About us",
    "subtitle": "The team behind the product",
    "coverImage": image("team"),
    "slug": "about-us",
    "categories": [{ "name": "Company", "slug": "company" }],
    "createdAt": "2024-01-10T09:00:00.000Z",
    "updatedAt": "2024-06-01T12:30:00.000Z",
    "meta": {
      "title": "About us | ACME",
      "description": "Learn who we are and what we build."
    },
    "content": [
      { "type": "header", "styles": ["Highlight"], "header": "Who we are", "subheader": null, "size": "h2" },
      { "type": "text", "styles": [], "text": "<p>We build things.</p>" },
      { "type": "image", "styles": ["Rounded"], "images": [image("office"), image("party")] },
      { "type": "list", "styles": [], "options": [
        { "title": "Quality", "subtitle": "Always" },
        { "title": "Speed", "subtitle": null }
      ] },
      { "type": "embed", "styles": [], "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" },
      { "type": "code", "styles": ["Dark"], "code": "npm install @justcms/client" },
      { "type": "cta", "styles": [], "text": "Join us", "url": "/careers", "description": "We are hiring" },
      { "type": "custom", "styles": [], "blockId": "team-grid", "columns": 3, "showRoles": true }
    ]
  })
}

pub fn main_menu_response() -> serde_json::Value {
  json!({
    "id": "main",
    "name": "Main navigation",
    "items": [
      { "title": "Home", "subtitle": null, "icon": "home", "url": "/", "styles": [], "children": [] },
      {
        "title": "Products",
        "subtitle": "What we sell",
        "icon": "",
        "url": "/products",
        "styles": ["Dropdown"],
        "children": [
          { "title": "Widgets", "icon": "", "url": "/products/widgets", "styles": [], "children": [] },
          { "title": "Gadgets", "icon": "", "url": "/products/gadgets", "styles": [], "children": [] }
        ]
      }
    ]
  })
}

pub fn layout(id: &str) -> serde_json::Value {
  json!({
    "id": id,
    "name": format!("{id} layout"),
    "items": [
      { "label": "Title", "description": "", "uid": "title", "type": "text", "value": format!("{id} title") },
      { "label": "Visible", "description": "Toggle visibility", "uid": "visible", "type": "boolean", "value": true },
      { "label": "Body", "description": "", "uid": "body", "type": "html", "value": "<p>Hi</p>" },
      { "label": "Logo", "description": "", "uid": "logo", "type": "svg", "value": "<svg></svg>" }
    ]
  })
}
