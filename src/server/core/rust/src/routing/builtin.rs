/* src/server/core/rust/src/routing/builtin.rs */

use super::{ChangeFrequency, RouteSegmentMapping, StaticRoute};
use crate::content::EntityKind;

// (key, az, en)
const SEGMENTS: &[(&str, &str, &str)] = &[
  ("university", "universitet", "university"),
  ("history", "tarix", "history"),
  ("mission", "missiya", "mission"),
  ("leadership", "rehberlik", "leadership"),
  ("structure", "struktur", "structure"),
  ("faculties", "fakulteler", "faculties"),
  ("departments", "kafedralar", "departments"),
  ("news", "xeberler", "news"),
  ("events", "tedbirler", "events"),
  ("announcements", "elanlar", "announcements"),
  ("blogs", "bloq", "blog"),
  ("persons", "sexsler", "persons"),
  ("admission", "qebul", "admission"),
  ("bachelor", "bakalavr", "bachelor"),
  ("master", "magistratura", "master"),
  ("doctorate", "doktorantura", "doctorate"),
  ("students", "telebeler", "students"),
  ("international", "beynelxalq", "international"),
  ("research", "elm", "research"),
  ("library", "kitabxana", "library"),
  ("careers", "karyera", "careers"),
  ("contact", "elaqe", "contact"),
  ("search", "axtaris", "search"),
];

pub(super) fn mappings() -> Vec<RouteSegmentMapping> {
  SEGMENTS.iter().map(|&(key, az, en)| RouteSegmentMapping::new(key, az, en)).collect()
}

pub(super) fn static_routes() -> Vec<StaticRoute> {
  use ChangeFrequency::{Daily, Monthly, Weekly};

  vec![
    StaticRoute::new("home", &[], Daily, 1.0),
    StaticRoute::new("university", &["university"], Monthly, 0.8),
    StaticRoute::new("history", &["university", "history"], Monthly, 0.6),
    StaticRoute::new("mission", &["university", "mission"], Monthly, 0.6),
    StaticRoute::new("leadership", &["university", "leadership"], Monthly, 0.7)
      .listing(EntityKind::Person, Some("leadership")),
    StaticRoute::new("structure", &["university", "structure"], Monthly, 0.5),
    StaticRoute::new("faculties", &["faculties"], Weekly, 0.8).listing(EntityKind::Faculty, None),
    StaticRoute::new("news", &["news"], Daily, 0.9).listing(EntityKind::News, None),
    StaticRoute::new("events", &["events"], Daily, 0.8).listing(EntityKind::Event, None),
    StaticRoute::new("announcements", &["announcements"], Daily, 0.8)
      .listing(EntityKind::News, Some("announcement")),
    StaticRoute::new("blogs", &["blogs"], Weekly, 0.6).listing(EntityKind::Blog, None),
    StaticRoute::new("persons", &["persons"], Monthly, 0.5).listing(EntityKind::Person, None),
    StaticRoute::new("admission", &["admission"], Weekly, 0.8),
    StaticRoute::new("bachelor", &["admission", "bachelor"], Monthly, 0.7),
    StaticRoute::new("master", &["admission", "master"], Monthly, 0.7),
    StaticRoute::new("doctorate", &["admission", "doctorate"], Monthly, 0.6),
    StaticRoute::new("students", &["students"], Monthly, 0.6),
    StaticRoute::new("international", &["international"], Monthly, 0.6),
    StaticRoute::new("research", &["research"], Monthly, 0.6),
    StaticRoute::new("library", &["library"], Monthly, 0.5),
    StaticRoute::new("careers", &["careers"], Weekly, 0.5),
    StaticRoute::new("contact", &["contact"], Monthly, 0.7),
    StaticRoute::new("search", &["search"], Monthly, 0.3),
  ]
}
