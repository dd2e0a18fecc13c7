//! Matching navigation anchors to headings.
//!
//! An anchor belongs to a heading when its `href` ends with
//! `<pathname>/#<id>`, the same test as the attribute selector
//! `a[href$='<pathname>/#<id>']`. The path is used verbatim, so a path that
//! already ends in `/` yields a double slash.

use tocspy_traits::NavAnchor;

/// Build the `href` suffix identifying the anchor for heading `id`.
pub fn fragment_suffix(pathname: &str, id: &str) -> String {
    format!("{pathname}/#{id}")
}

/// First anchor, in document order, whose `href` ends with `suffix`.
pub fn find_link<'a>(links: &'a [NavAnchor], suffix: &str) -> Option<&'a NavAnchor> {
    links.iter().find(|link| link.href.ends_with(suffix))
}
