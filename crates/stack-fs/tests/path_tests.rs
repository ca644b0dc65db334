use proptest::prelude::*;
use rstest::rstest;
use stack_fs::NormalizedPath;

#[rstest]
#[case("a/../b", "b")]
#[case("../a", "../a")]
#[case("../../a/b", "../../a/b")]
#[case("a/../../b", "../b")]
#[case("/../a", "/a")]
#[case("/a/b/../../c", "/c")]
#[case("a\\..\\b", "b")]
#[case("a/./b//c", "a/b/c")]
#[case("//server/share/./ctx.json", "//server/share/ctx.json")]
fn test_normalization(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[rstest]
#[case("env", "prd.json", "env/prd.json")]
#[case("env/", "prd.json", "env/prd.json")]
#[case("env", "/prd.json", "env/prd.json")]
#[case("env", "../prd.json", "prd.json")]
#[case("env", "../../prd.json", "../prd.json")]
#[case("/srv/proj", "../shared/common.json", "/srv/shared/common.json")]
#[case("../proj", "a.json", "../proj/a.json")]
#[case("env", ".", "env")]
fn test_join(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(base).join(segment).as_str(), expected);
}

#[test]
fn test_file_name_and_extension() {
    let path = NormalizedPath::new("config/env/staging.yml");
    assert_eq!(path.file_name(), Some("staging.yml"));
    assert_eq!(path.extension(), Some("yml"));
}

proptest! {
    #[test]
    fn normalization_is_idempotent(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
        prop_assert_eq!(NormalizedPath::new(path.to_native()), path);
    }

    #[test]
    fn join_without_parent_segments_stays_under_base(segment in "[a-z./]{0,24}") {
        prop_assume!(!segment.split('/').any(|c| c == ".."));
        let base = NormalizedPath::new("/root/project");
        let joined = base.join(&segment);
        prop_assert!(joined.as_str().starts_with("/root/project"));
    }

    #[test]
    fn join_matches_normalizing_the_concatenation(
        base in "(\\.\\./)?[a-z]{1,4}(/[a-z]{1,4}){0,2}",
        segment in "((\\.\\.|[a-z]{1,4})/){0,3}[a-z]{1,4}\\.json",
    ) {
        let joined = NormalizedPath::new(&base).join(&segment);
        prop_assert_eq!(joined, NormalizedPath::new(format!("{base}/{segment}")));
    }
}
