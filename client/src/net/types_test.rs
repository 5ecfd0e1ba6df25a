use super::*;

#[test]
fn perfume_detail_decodes_backend_payload_with_nulls() {
    let raw = r#"{
        "perfume_id": 1,
        "perfume_name": "Bleu",
        "brand": { "brand_id": 4, "brand_name": "Chanel" },
        "image": "o.12345.jpg",
        "launch_year": 2010,
        "average_grade": 4.5,
        "top_notes": "citrus",
        "middle_notes": null,
        "base_notes": null,
        "total_survey": 12,
        "longevity": "long",
        "sillage": "moderate",
        "accords": [{ "accord_id": 1, "kor_name": "시트러스", "eng_name": "citrus" }],
        "similar_perfume": []
    }"#;
    let detail: PerfumeDetail = serde_json::from_str(raw).unwrap();
    assert_eq!(detail.brand.brand_name, "Chanel");
    assert_eq!(detail.middle_notes, None);
    assert_eq!(detail.accords.len(), 1);
    assert!(detail.similar_perfume.is_empty());
}

#[test]
fn article_list_accepts_camel_case_aliases() {
    let raw = r#"{
        "articleList": [{
            "article_id": 1,
            "member_id": 1,
            "member_name": "우사앙주운",
            "subject": "TALK",
            "title": "제목입니다",
            "createAt": "2022-3-13 14:59:51"
        }],
        "total_page_count": 2,
        "current_page_count": 1
    }"#;
    let list: ArticleListResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(list.article_list[0].subject, ArticleSubject::Talk);
    assert_eq!(list.article_list[0].created_at, "2022-3-13 14:59:51");
    assert_eq!(list.article_list[0].views, 0);
    assert_eq!(list.total_page_count, 2);
}

#[test]
fn article_subject_parse_is_case_insensitive() {
    assert_eq!(ArticleSubject::parse("talk"), Some(ArticleSubject::Talk));
    assert_eq!(ArticleSubject::parse(" REVIEW "), Some(ArticleSubject::Review));
    assert_eq!(ArticleSubject::parse("news"), None);
}

#[test]
fn token_response_tolerates_missing_optional_fields() {
    let token: TokenResponse = serde_json::from_str(r#"{"access_token":"jwt"}"#).unwrap();
    assert_eq!(token.index, None);
    assert_eq!(token.expires_in, None);
}

#[test]
fn signup_request_serializes_expected_keys() {
    let body = serde_json::to_value(SignupRequest {
        email: "a@b.com".to_owned(),
        password: "Aa1!aaaa".to_owned(),
        username: "user1".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "Aa1!aaaa", "username": "user1" }));
}
