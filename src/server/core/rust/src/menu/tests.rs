/* src/server/core/rust/src/menu/tests.rs */

use serde_json::json;

use super::*;

fn table() -> RoutingTable {
  RoutingTable::builtin()
}

fn find<'a>(items: &'a [NavItem], id: &str) -> Option<&'a NavItem> {
  items.iter().find_map(|i| if i.id == id { Some(i) } else { find(&i.children, id) })
}

#[test]
fn fallback_menu_keeps_category_order() {
  let tree = MenuTree::fallback();
  let ids: Vec<&str> = tree.roots.iter().map(|n| n.id.as_str()).collect();
  assert_eq!(ids, vec!["university", "academics", "admission", "media", "contact"]);
}

#[test]
fn children_lists_are_merged() {
  let tree = MenuTree::fallback();
  let university = &tree.roots[0];
  // category -> column header -> links
  assert_eq!(university.children.len(), 1);
  let column = &university.children[0];
  assert_eq!(column.id, "university/columns/0");
  assert!(column.link.is_none());
  let leadership = column.children.iter().find(|n| n.id == "leadership").unwrap();
  assert_eq!(leadership.children[0].id, "structure");
}

#[test]
fn walk_is_depth_first_preorder() {
  let tree = MenuTree::fallback();
  let ids: Vec<&str> = tree.walk().take(7).map(|n| n.id.as_str()).collect();
  assert_eq!(
    ids,
    vec!["university", "university/columns/0", "history", "mission", "leadership", "structure", "academics"]
  );
}

#[test]
fn accepts_bare_map_and_loose_labels() {
  let value = json!({
    "extra": {
      "label": "Portal",
      "subitems": [
        { "name": { "az": "Kitabxana", "en": null }, "href": "  /kitabxana  " },
        "garbage",
        { "id": 7, "title": "Page", "pageRef": 42 }
      ]
    }
  });
  let tree = MenuTree::from_value(&value).unwrap();
  let root = &tree.roots[0];
  assert_eq!(root.label, LocalizedString::uniform("Portal"));
  assert_eq!(root.children.len(), 2);

  let library = &root.children[0];
  assert_eq!(library.label.get(Locale::En), "Kitabxana");
  assert_eq!(library.href(), Some(&Href::Plain("/kitabxana".into())));

  let page = &root.children[1];
  assert_eq!(page.id, "7");
  assert_eq!(page.link, Some(MenuLink::Page { page: PageRef { id: "42".into(), slug: None } }));
}

#[test]
fn empty_href_is_no_link() {
  let value = json!({ "c": { "title": "C", "href": { "az": "", "en": "  " } } });
  let tree = MenuTree::from_value(&value).unwrap();
  assert!(tree.roots[0].link.is_none());
}

#[test]
fn non_object_menu_is_decode_error() {
  assert!(MenuTree::from_value(&json!([1, 2])).is_err());
  assert!(MenuTree::from_value(&json!({ "data": "nope" })).is_err());
}

#[test]
fn plain_href_translates_per_locale() {
  let nav = project_navigation(&MenuTree::fallback(), Locale::En, &table());
  assert_eq!(find(&nav, "history").unwrap().href.as_deref(), Some("/en/university/history"));
  assert_eq!(find(&nav, "contact").unwrap().href.as_deref(), Some("/en/contact"));
  assert_eq!(find(&nav, "contact").unwrap().label, "Contact");

  let nav = project_navigation(&MenuTree::fallback(), Locale::Az, &table());
  assert_eq!(find(&nav, "history").unwrap().href.as_deref(), Some("/universitet/tarix"));
  assert_eq!(find(&nav, "contact").unwrap().label, "Əlaqə");
}

#[test]
fn localized_href_missing_locale_is_derived() {
  let href = Href::Localized { az: None, en: Some("/en/university/history".into()) };
  assert_eq!(href.resolve(Locale::Az, &table()).as_deref(), Some("/universitet/tarix"));
  assert_eq!(href.resolve(Locale::En, &table()).as_deref(), Some("/en/university/history"));
}

#[test]
fn external_links_pass_through() {
  let href = Href::Plain("https://portal.example.az/login".into());
  assert_eq!(href.resolve(Locale::En, &table()).as_deref(), Some("https://portal.example.az/login"));
  assert_eq!(href.localized_pair(&table()), None);

  let tree = MenuTree {
    roots: vec![MenuNode {
      id: "portal".into(),
      label: LocalizedString::uniform("Portal"),
      link: Some(MenuLink::Href { href }),
      children: vec![],
    }],
  };
  let nav = project_navigation(&tree, Locale::Az, &table());
  assert!(nav[0].external);
}

#[test]
fn page_reference_uses_locale_slug() {
  let page = PageRef { id: "10".into(), slug: Some(LocalizedString::new("haqqimizda", "about-us")) };
  assert_eq!(page.resolve(Locale::Az, &table()).as_deref(), Some("/haqqimizda"));
  assert_eq!(page.resolve(Locale::En, &table()).as_deref(), Some("/en/about-us"));
  assert_eq!(PageRef { id: "11".into(), slug: None }.resolve(Locale::Az, &table()), None);
}

#[test]
fn localized_pair_drops_external_sides() {
  let href = Href::Localized { az: Some("/elaqe".into()), en: Some("mailto:info@example.az".into()) };
  assert_eq!(
    href.localized_pair(&table()),
    Some(LocalizedPair { az: Some("/elaqe".into()), en: None })
  );
}

#[test]
fn section_headers_have_no_href() {
  let nav = project_navigation(&MenuTree::fallback(), Locale::Az, &table());
  assert_eq!(nav[0].href, None);
  assert!(!nav[0].children.is_empty());
}
