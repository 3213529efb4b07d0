use crate::kernel::language::LanguageId;

#[test]
fn from_extension_maps_known_extensions() {
    let cases = [
        (Some("ts"), LanguageId::TypeScript),
        (Some("tsx"), LanguageId::TypeScript),
        (Some("js"), LanguageId::JavaScript),
        (Some("css"), LanguageId::Css),
        (Some("json"), LanguageId::Json),
        (Some("html"), LanguageId::Html),
        (Some("md"), LanguageId::Markdown),
        (Some("TSX"), LanguageId::TypeScript),
    ];
    for (ext, expected) in cases {
        assert_eq!(LanguageId::from_extension(ext), expected, "ext={ext:?}");
    }
}

#[test]
fn unknown_or_missing_extension_falls_back_to_typescript() {
    assert_eq!(LanguageId::from_extension(Some("rs")), LanguageId::TypeScript);
    assert_eq!(LanguageId::from_extension(Some("")), LanguageId::TypeScript);
    assert_eq!(LanguageId::from_extension(None), LanguageId::TypeScript);
}

#[test]
fn from_file_name_uses_last_segment() {
    assert_eq!(
        LanguageId::from_file_name("tailwind.config.ts"),
        LanguageId::TypeScript
    );
    assert_eq!(LanguageId::from_file_name("globals.css"), LanguageId::Css);
    assert_eq!(LanguageId::from_file_name("README"), LanguageId::TypeScript);
}

#[test]
fn language_id_strings() {
    assert_eq!(LanguageId::TypeScript.language_id(), "typescript");
    assert_eq!(LanguageId::JavaScript.language_id(), "javascript");
    assert_eq!(LanguageId::Css.language_id(), "css");
    assert_eq!(LanguageId::Json.language_id(), "json");
    assert_eq!(LanguageId::Html.language_id(), "html");
    assert_eq!(LanguageId::Markdown.language_id(), "markdown");
}
