/* src/server/core/rust/src/escape.rs */

use std::borrow::Cow;

/// Escape the five XML special characters. Borrows when nothing needs escaping.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
  if !s.contains(['&', '<', '>', '"', '\'']) {
    return Cow::Borrowed(s);
  }
  let mut out = String::with_capacity(s.len() + 16);
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      c => out.push(c),
    }
  }
  Cow::Owned(out)
}

fn is_path_safe(b: u8) -> bool {
  b == b'/' || b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encode every segment of a site path, keeping the `/` separators.
/// Borrows when the path is already plain ASCII.
pub fn encode_path(path: &str) -> Cow<'_, str> {
  if path.bytes().all(is_path_safe) {
    return Cow::Borrowed(path);
  }
  let segments: Vec<Cow<'_, str>> = path.split('/').map(urlencoding::encode).collect();
  Cow::Owned(segments.join("/"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_text_is_borrowed() {
    assert!(matches!(escape_xml("/xeberler/yeni-bina"), Cow::Borrowed(_)));
  }

  #[test]
  fn escapes_specials() {
    assert_eq!(escape_xml("/axtaris?q=a&b=<c>"), "/axtaris?q=a&amp;b=&lt;c&gt;");
    assert_eq!(escape_xml(r#"'"'"#), "&apos;&quot;&apos;");
  }

  #[test]
  fn non_ascii_untouched() {
    assert_eq!(escape_xml("/xəbərlər"), "/xəbərlər");
  }

  #[test]
  fn ascii_path_is_borrowed() {
    assert!(matches!(encode_path("/en/news/new-building"), Cow::Borrowed(_)));
  }

  #[test]
  fn encodes_non_ascii_segments() {
    assert_eq!(encode_path("/məzunlar"), "/m%C9%99zunlar");
    assert_eq!(encode_path("/xeberler/əla qiymət/"), "/xeberler/%C9%99la%20qiym%C9%99t/");
    assert_eq!(encode_path("/"), "/");
  }
}
