use super::*;

#[test]
fn survey_path_lists_all_answers_in_order() {
    let answers = SurveyAnswers::new([1, 2, 3, 4, 5]);
    assert_eq!(survey_path(&answers), "recommend/survey?a1=1&a2=2&a3=3&a4=4&a5=5");
}

#[test]
fn like_based_path_embeds_member_id() {
    assert_eq!(like_based_path(9), "recommend/likes/9");
}
