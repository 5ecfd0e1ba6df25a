//! One survey question per `?page=N`; answers accumulate in the query string.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::state::recommend::{QUESTION_COUNT, SURVEY_QUESTIONS, next_survey_location, survey_page};

#[component]
pub fn SurveyPage() -> impl IntoView {
    let query = use_query_map();
    let page = Memo::new(move |_| query.with(|q| survey_page(q.get("page").as_deref())));
    let next_href =
        move |page: usize, choice: i32| query.with(|q| next_survey_location(|key: &str| q.get(key), page, choice));

    view! {
        <div class="survey-page">
            {move || match page.get() {
                None => {
                    view! {
                        <div class="survey-page__intro">
                            <h1>"나에게 맞는 향수 찾기"</h1>
                            <p>{format!("{QUESTION_COUNT}개의 질문에 답해주세요.")}</p>
                            <A href="/survey?page=1">"시작하기"</A>
                        </div>
                    }
                        .into_any()
                }
                Some(number) => {
                    let question = &SURVEY_QUESTIONS[number - 1];
                    view! {
                        <div class="survey-page__question">
                            <p class="survey-page__progress">{format!("{number} / {QUESTION_COUNT}")}</p>
                            <h2>{question.title}</h2>
                            <ul class="survey-page__options">
                                {question
                                    .options
                                    .iter()
                                    .zip(1..)
                                    .map(|(label, choice)| {
                                        view! {
                                            <li class="survey-page__option">
                                                <A href=next_href(number, choice)>{*label}</A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
