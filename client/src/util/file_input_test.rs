use super::*;

#[test]
fn accepts_common_image_extensions_case_insensitively() {
    assert!(is_supported_image("me.png"));
    assert!(is_supported_image("ME.JPG"));
    assert!(is_supported_image("photo.final.webp"));
}

#[test]
fn rejects_other_files() {
    assert!(!is_supported_image("notes.txt"));
    assert!(!is_supported_image("png"));
    assert!(!is_supported_image(".png"));
}
