//! Integration tests for path classification and resolution.

use std::path::PathBuf;

use fsjson_path::{
    MapEnv, PathResolver, ResolverConfig, abs_path, is_path_exists, is_relative_path,
};
use proptest::prelude::*;

#[test]
fn test_relative_and_absolute_classification() {
    assert!(is_relative_path("./rel").unwrap());
    assert!(!is_relative_path("/abs").unwrap());
    assert!(!is_relative_path("$THISENVDOESNTEXIST/some").unwrap());
    assert!(is_relative_path("rel").unwrap());
}

#[test]
fn test_path_existence() {
    assert!(!is_path_exists("this/should/not/exist").unwrap());
    assert!(is_path_exists(".").unwrap());
    assert!(is_path_exists("").is_err());
}

#[test]
fn test_abs_path_expansion() {
    let curr_dir = std::env::current_dir().unwrap();
    let resolver = PathResolver::with_env(MapEnv::new().with_var("HOME", "/path/home/test-user"));
    let expected = PathBuf::from("/path/home/test-user/some/file.ext");

    let err = resolver.abs_path("").unwrap_err();
    assert!(err.is_invalid_argument());

    assert_eq!(resolver.abs_path(".").unwrap(), curr_dir);
    assert_eq!(resolver.abs_path("$HOME/some/file.ext").unwrap(), expected);
    assert_eq!(resolver.abs_path("~/some/file.ext").unwrap(), expected);
}

#[test]
fn test_process_abs_path_matches_current_dir() {
    let curr_dir = std::env::current_dir().unwrap();
    assert_eq!(abs_path(".").unwrap(), curr_dir);
    assert_eq!(abs_path("./").unwrap(), curr_dir);
    assert_eq!(abs_path("src/..").unwrap(), curr_dir);
    assert_eq!(abs_path("src").unwrap(), curr_dir.join("src"));
}

#[test]
fn test_abs_path_of_existing_file_exists() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::write(temp.path().join("data.json"), "{}").unwrap();

    let resolver =
        PathResolver::with_env(MapEnv::new().with_current_dir(temp.path().to_path_buf()));
    let resolved = resolver.abs_path("./nested/../data.json").unwrap();

    assert!(resolved.is_absolute());
    assert!(is_path_exists(&resolved).unwrap());
}

#[test]
fn test_strict_resolver_rejects_unset_variable() {
    let resolver = PathResolver::with_env(MapEnv::new()).with_config(ResolverConfig::strict());
    let err = resolver.abs_path("$DATA_DIR/file.json").unwrap_err();
    assert_eq!(err.code(), "UNDEFINED_VARIABLE");
    assert!(err.to_string().contains("DATA_DIR"));
}

proptest! {
    #[test]
    fn prop_leading_slash_is_absolute(rest in "[a-zA-Z0-9_./-]{0,24}") {
        let path = format!("/{rest}");
        prop_assert!(!is_relative_path(&path).unwrap());
    }

    #[test]
    fn prop_leading_dollar_is_absolute(rest in "[a-zA-Z0-9_{}/.-]{0,24}") {
        let path = format!("${rest}");
        prop_assert!(!is_relative_path(&path).unwrap());
    }

    #[test]
    fn prop_other_paths_are_relative(path in "[a-zA-Z0-9_.~-][a-zA-Z0-9_./-]{0,24}") {
        prop_assert!(is_relative_path(&path).unwrap());
    }

    #[test]
    fn prop_abs_path_is_absolute_and_stable(path in "[a-z.][a-z./]{0,24}") {
        let resolver = PathResolver::with_env(MapEnv::new().with_current_dir("/base"));
        let resolved = resolver.abs_path(&path).unwrap();
        prop_assert!(resolved.is_absolute());

        let again = resolver.abs_path(&resolved.to_string_lossy()).unwrap();
        prop_assert_eq!(again, resolved);
    }
}
