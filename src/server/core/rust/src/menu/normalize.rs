/* src/server/core/rust/src/menu/normalize.rs */

// The menu API grew loosely: labels are strings or {az,en}, hrefs are strings or {az,en},
// page links hide under `page` or `pageRef`, and children live in `subitems` (link nodes),
// `items` (listings) or `columns` (categories). Everything collapses into `MenuNode.children`.

use serde_json::{Map, Value};

use super::{Href, MenuLink, MenuNode, MenuTree, PageRef};
use crate::errors::FetchError;
use crate::localized::LocalizedString;

const LABEL_KEYS: [&str; 3] = ["title", "label", "name"];
const PAGE_KEYS: [&str; 2] = ["pageRef", "page"];
const CHILD_KEYS: [&str; 3] = ["columns", "subitems", "items"];

pub(super) fn menu_tree(value: &Value) -> Result<MenuTree, FetchError> {
  let categories = match value.get("data") {
    Some(Value::Object(map)) => map,
    Some(other) => {
      return Err(FetchError::Decode(format!("menu data is {}, expected an object", kind(other))));
    }
    None => value
      .as_object()
      .ok_or_else(|| FetchError::Decode(format!("menu is {}, expected an object", kind(value))))?,
  };

  let roots = categories
    .iter()
    .filter_map(|(key, category)| {
      let obj = category.as_object()?;
      Some(node(obj, key.clone()))
    })
    .collect();
  Ok(MenuTree { roots })
}

fn node(obj: &Map<String, Value>, fallback_id: String) -> MenuNode {
  let id = obj.get("id").and_then(id_string).unwrap_or(fallback_id);

  let mut children = Vec::new();
  for key in CHILD_KEYS {
    let Some(Value::Array(items)) = obj.get(key) else {
      continue;
    };
    for (i, item) in items.iter().enumerate() {
      match item.as_object() {
        Some(child) => children.push(node(child, format!("{id}/{key}/{i}"))),
        None => tracing::debug!(parent = %id, index = i, "skipping non-object menu entry"),
      }
    }
  }

  MenuNode { label: label(obj), link: link(obj), children, id }
}

fn label(obj: &Map<String, Value>) -> LocalizedString {
  LABEL_KEYS
    .iter()
    .find_map(|k| match obj.get(*k)? {
      Value::String(s) => Some(LocalizedString::uniform(s.clone())),
      v @ Value::Object(_) => serde_json::from_value(v.clone()).ok(),
      _ => None,
    })
    .unwrap_or_default()
}

fn link(obj: &Map<String, Value>) -> Option<MenuLink> {
  if let Some(href) = obj.get("href").and_then(href) {
    return Some(MenuLink::Href { href });
  }
  PAGE_KEYS.iter().find_map(|k| obj.get(*k).and_then(page_ref)).map(|page| MenuLink::Page { page })
}

fn href(value: &Value) -> Option<Href> {
  match value {
    Value::String(s) if !s.trim().is_empty() => Some(Href::Plain(s.trim().to_string())),
    Value::Object(map) => {
      let get = |k: &str| {
        map.get(k).and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty()).map(String::from)
      };
      let (az, en) = (get("az"), get("en"));
      if az.is_none() && en.is_none() { None } else { Some(Href::Localized { az, en }) }
    }
    _ => None,
  }
}

fn page_ref(value: &Value) -> Option<PageRef> {
  match value {
    Value::Object(map) => {
      let id = map.get("id").and_then(id_string)?;
      let slug = map.get("slug").and_then(|s| serde_json::from_value(s.clone()).ok());
      Some(PageRef { id, slug })
    }
    other => id_string(other).map(|id| PageRef { id, slug: None }),
  }
}

fn id_string(value: &Value) -> Option<String> {
  match value {
    Value::String(s) if !s.is_empty() => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
