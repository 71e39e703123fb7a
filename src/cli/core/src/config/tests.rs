/* src/cli/core/src/config/tests.rs */

use std::collections::HashMap;
use std::time::Duration;

use unisite_core::{ChangeFrequency, Locale};

use super::*;

const FULL: &str = r#"
[site]
base_url = "https://bdu.edu.az"

[server]
port = 8080

[content]
api_url = "https://cms.bdu.edu.az/api"
timeout_secs = 5
revalidate_secs = 60

[i18n]
default = "az"

[[routes]]
key = "alumni"
az = "mezunlar"
en = "alumni"

[[sitemap.pages]]
az = "/kampus"
en = "/en/campus"
change_frequency = "weekly"
priority = 0.7

[[sitemap.pages]]
az = "/arxiv"
"#;

#[test]
fn parses_full_config() {
  let config = parse_site_config(FULL).unwrap();
  assert_eq!(config.site.base_url, "https://bdu.edu.az");
  assert_eq!(config.server.port, 8080);
  assert_eq!(config.server.host, "0.0.0.0");
  assert_eq!(config.content.api_url.as_deref(), Some("https://cms.bdu.edu.az/api"));
  assert_eq!(config.content.timeout(), Duration::from_secs(5));
  assert_eq!(config.content.revalidate(), Duration::from_secs(60));
  assert_eq!(config.sitemap.pages.len(), 2);
  assert_eq!(config.sitemap.pages[0].change_frequency, ChangeFrequency::Weekly);
  assert_eq!(config.sitemap.pages[1].change_frequency, ChangeFrequency::Monthly);
  assert_eq!(config.sitemap.pages[1].en, None);

  let table = config.routing_table().unwrap();
  assert_eq!(table.translate_segment("mezunlar", Locale::En), "alumni");
}

#[test]
fn empty_config_uses_defaults() {
  let config = parse_site_config("").unwrap();
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.content.timeout_secs, 10);
  assert_eq!(config.content.revalidate_secs, 300);
  assert_eq!(config.i18n.default, "az");
  assert!(config.content.require_api_url().is_err());
}

#[test]
fn default_locale_must_be_az() {
  let err = parse_site_config("[i18n]\ndefault = \"en\"\n").unwrap_err();
  assert!(format!("{err:#}").contains("i18n.default must be \"az\""));
}

#[test]
fn unknown_locale_rejected() {
  assert!(parse_site_config("[i18n]\nlocales = [\"az\", \"en\", \"ru\"]\n").is_err());
  assert!(parse_site_config("[i18n]\nlocales = [\"az\"]\n").is_err());
}

#[test]
fn conflicting_route_rejected() {
  // "tarix" already belongs to the built-in "history" key
  let toml = "[[routes]]\nkey = \"heritage\"\naz = \"tarix\"\nen = \"heritage\"\n";
  let err = parse_site_config(toml).unwrap_err();
  assert!(format!("{err:#}").contains("tarix"));
}

#[test]
fn relative_base_url_rejected() {
  assert!(parse_site_config("[site]\nbase_url = \"bdu.edu.az\"\n").is_err());
}

#[test]
fn sitemap_page_needs_absolute_path() {
  assert!(parse_site_config("[[sitemap.pages]]\naz = \"kampus\"\n").is_err());
  assert!(parse_site_config("[[sitemap.pages]]\npriority = 0.3\n").is_err());
}

#[test]
fn env_overrides() {
  let mut config = parse_site_config(FULL).unwrap();
  let env: HashMap<&str, &str> =
    HashMap::from([("PORT", "9000"), ("UNISITE_API_URL", "http://127.0.0.1:4000")]);
  config.apply_env(|k| env.get(k).map(|v| (*v).to_string())).unwrap();
  assert_eq!(config.server.port, 9000);
  assert_eq!(config.content.require_api_url().unwrap(), "http://127.0.0.1:4000");

  assert!(config.apply_env(|k| (k == "PORT").then(|| "eighty".to_string())).is_err());
}

#[test]
fn finds_config_upward() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join(CONFIG_FILE), FULL).unwrap();
  let nested = tmp.path().join("a/b/c");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_site_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE));
  assert_eq!(load_site_config(&found).unwrap().server.port, 8080);
}

#[test]
fn missing_config_reports_start() {
  let tmp = tempfile::tempdir().unwrap();
  let err = find_site_config(tmp.path()).unwrap_err();
  assert!(err.to_string().contains("unisite.toml not found"));
}
