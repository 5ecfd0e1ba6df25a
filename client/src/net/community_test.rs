use super::*;

#[test]
fn articles_path_without_subject() {
    assert_eq!(articles_path(1, 10, None), "articles?page=0&size=10");
}

#[test]
fn articles_path_with_subject_filter() {
    assert_eq!(
        articles_path(2, 10, Some(ArticleSubject::Review)),
        "articles?page=1&size=10&subject=REVIEW"
    );
}
