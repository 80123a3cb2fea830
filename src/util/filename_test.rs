use super::*;

#[test]
fn split_name_separates_stem_and_suffix() {
    assert_eq!(split_name("design1.sp"), ("design1", ".sp"));
    assert_eq!(split_name("foo.spice"), ("foo", ".spice"));
}

#[test]
fn split_name_keeps_only_last_extension() {
    assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
}

#[test]
fn split_name_handles_missing_extension() {
    assert_eq!(split_name("README"), ("README", ""));
}

#[test]
fn split_name_treats_dotfile_as_all_stem() {
    assert_eq!(split_name(".env"), (".env", ""));
}

#[test]
fn with_extension_of_reappends_original_suffix() {
    assert_eq!(with_extension_of("foo.spice", "bar"), "bar.spice");
    assert_eq!(with_extension_of("tech01.tech", "tech02"), "tech02.tech");
}

#[test]
fn with_extension_of_without_suffix_keeps_stem_only() {
    assert_eq!(with_extension_of("README", "NOTES"), "NOTES");
}

#[test]
fn stem_strips_extension() {
    assert_eq!(stem("foo.spice"), "foo");
    assert_eq!(stem("plain"), "plain");
}
