use super::*;

#[test]
fn perfume_paths_embed_id() {
    assert_eq!(perfume_path(42), "perfumes/42");
    assert_eq!(like_path(42), "auth/perfumes/likes/42");
}

#[test]
fn perfume_image_url_drops_storage_prefix() {
    assert_eq!(perfume_image_url("o.12345.jpg"), "https://fimgs.net/mdimg/perfume/375x500.12345.jpg");
    assert_eq!(perfume_image_url("o"), "https://fimgs.net/mdimg/perfume/375x500.");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn catalogue_calls_report_unavailable_off_browser() {
    use crate::net::error::ApiError;
    use futures::executor::block_on;

    let client = HttpClient::new("/api/");
    assert_eq!(block_on(list_perfumes(&client, 1, 10)), Err(ApiError::Unavailable));
    assert_eq!(block_on(get_perfume(&client, 1)), Err(ApiError::Unavailable));
    let cred = Credential::new("jwt", i64::MAX);
    assert_eq!(block_on(set_liked(&client, &cred, 1, true)), Err(ApiError::Unavailable));
}
