use tocspy::InMemoryDocument;

/// Describe the active links of a document for assertion messages
pub fn describe_active(doc: &InMemoryDocument) -> String {
    let active = doc.active_links();
    if active.is_empty() {
        "no active link".to_string()
    } else {
        format!("active link indices {:?}", active)
    }
}

/// Assert that exactly one link is active and its href is `$href`
#[macro_export]
macro_rules! assert_active_link {
    ($doc:expr, $href:expr) => {
        assert_eq!(
            $doc.active_href(),
            Some($href),
            "expected '{}' to be the only active link, found {}",
            $href,
            $crate::common::nav_assertions::describe_active(&$doc)
        );
    };
}

/// Assert that no link carries the active marker
#[macro_export]
macro_rules! assert_no_active_link {
    ($doc:expr) => {
        assert!(
            $doc.active_links().is_empty(),
            "expected no active link, found {}",
            $crate::common::nav_assertions::describe_active(&$doc)
        );
    };
}

/// Assert that at most one link is active
#[macro_export]
macro_rules! assert_at_most_one_active {
    ($doc:expr) => {
        assert!(
            $doc.active_links().len() <= 1,
            "at most one link may be active, found {}",
            $crate::common::nav_assertions::describe_active(&$doc)
        );
    };
}
