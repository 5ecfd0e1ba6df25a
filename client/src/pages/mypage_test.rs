use super::*;

fn member(image_url: Option<&str>) -> MemberInfo {
    MemberInfo {
        member_id: 1,
        email: "a@b.com".to_owned(),
        username: "user1".to_owned(),
        image_url: image_url.map(str::to_owned),
    }
}

#[test]
fn avatar_falls_back_to_default_image() {
    assert_eq!(avatar_src(None), DEFAULT_AVATAR);
    assert_eq!(avatar_src(Some(&member(None))), DEFAULT_AVATAR);
    assert_eq!(avatar_src(Some(&member(Some(" ")))), DEFAULT_AVATAR);
    assert_eq!(avatar_src(Some(&member(Some("https://cdn/a.png")))), "https://cdn/a.png");
}

#[test]
fn only_image_files_are_uploaded() {
    assert_eq!(avatar_rejection("me.JPG"), None);
    assert_eq!(avatar_rejection("notes.txt"), Some(UNSUPPORTED_IMAGE));
    assert_eq!(avatar_rejection("noext"), Some(UNSUPPORTED_IMAGE));
}
