//! Property-based tests for file name resolution
//!
//! These tests verify that name resolution behaves consistently across a
//! wide range of identifiers without touching the filesystem.

use jsonfile_core::NameResolver;
use proptest::prelude::*;
use std::path::PathBuf;

fn base() -> PathBuf {
    std::env::temp_dir().join("jsonfile-props")
}

fn resolver() -> NameResolver {
    NameResolver::new(base(), "json").unwrap()
}

/// Strategy for a single path segment without dots or separators
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,16}"
}

/// Strategy for file extensions
fn extension_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,6}"
}

proptest! {
    #[test]
    fn extension_is_preserved(name in segment_strategy(), ext in extension_strategy()) {
        let id = format!("{}.{}", name, ext);
        let resolved = resolver().resolve(Some(id.as_str()), "Ignored").unwrap();
        prop_assert_eq!(resolved, base().join(&id));
    }

    #[test]
    fn json_appended_exactly_once(name in segment_strategy()) {
        let resolved = resolver().resolve(Some(name.as_str()), "Ignored").unwrap();
        prop_assert_eq!(&resolved, &base().join(format!("{}.json", name)));

        let file_name = resolved.file_name().unwrap().to_string_lossy().into_owned();
        prop_assert_eq!(file_name.matches(".json").count(), 1);
    }

    #[test]
    fn surrounding_separators_are_ignored(
        name in segment_strategy(),
        leading in "[\\\\]{0,3}",
        trailing in "[/\\\\]{0,3}",
    ) {
        let r = resolver();
        let decorated = format!("{}{}{}", leading, name, trailing);
        prop_assert_eq!(
            r.resolve(Some(decorated.as_str()), "Ignored").unwrap(),
            r.resolve(Some(name.as_str()), "Ignored").unwrap()
        );
    }

    #[test]
    fn separator_style_does_not_matter(
        segments in proptest::collection::vec(segment_strategy(), 1..5),
    ) {
        let r = resolver();
        let forward = segments.join("/");
        let backward = segments.join("\\");
        prop_assert_eq!(
            r.resolve(Some(forward.as_str()), "Ignored").unwrap(),
            r.resolve(Some(backward.as_str()), "Ignored").unwrap()
        );
    }

    #[test]
    fn resolution_is_idempotent(id in "[a-zA-Z0-9_./\\\\-]{0,24}") {
        let r = resolver();
        let first = r.resolve(Some(id.as_str()), "Fallback");
        let second = r.resolve(Some(id.as_str()), "Fallback");
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "diverging results: {:?} / {:?}", a, b),
        }
    }

    #[test]
    fn blank_identifier_uses_type_name(blank in "[ \t]{0,4}", type_name in segment_strategy()) {
        let resolved = resolver().resolve(Some(blank.as_str()), &type_name).unwrap();
        prop_assert_eq!(resolved, base().join(format!("{}.json", type_name)));
    }
}
