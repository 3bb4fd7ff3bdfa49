//! `[site]` metadata.
//!
//! These values belong to the rendering engine. They are parsed only far
//! enough to be passed through unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Site-wide metadata passed through to the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Site description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Theme name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Logo path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Source repository link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Extra `<head>` elements, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<HeadTag>,
    /// Any other keys, unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One `<head>` element.
///
/// Written either as `{ tag = "link", attrs = { rel = "icon" } }` or as the
/// pair `["link", { rel = "icon" }]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HeadTagRepr")]
pub struct HeadTag {
    /// Element name (e.g., "meta").
    pub tag: String,
    /// Attributes in key order.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HeadTagRepr {
    Pair(String, BTreeMap<String, String>),
    Table {
        tag: String,
        #[serde(default)]
        attrs: BTreeMap<String, String>,
    },
}

impl From<HeadTagRepr> for HeadTag {
    fn from(repr: HeadTagRepr) -> Self {
        match repr {
            HeadTagRepr::Pair(tag, attrs) | HeadTagRepr::Table { tag, attrs } => {
                Self { tag, attrs }
            }
        }
    }
}
