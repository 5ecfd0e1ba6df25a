//! Last recommendation: matched accords and perfumes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::perfume_list::PerfumeList;
use crate::state::recommend::RecommendState;

#[component]
pub fn RecommendResultPage() -> impl IntoView {
    let recommend = expect_context::<RwSignal<RecommendState>>();
    let perfumes = Signal::derive(move || {
        recommend.with(|r| r.result.as_ref().map(|res| res.perfume_list.clone()).unwrap_or_default())
    });
    let accords = move || {
        recommend.with(|r| {
            r.result
                .as_ref()
                .map(|res| res.accords.iter().map(|a| a.kor_name.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="recommend-result">
            <h1>"추천 결과"</h1>
            {move || {
                let state = recommend.get();
                if state.loading {
                    view! { <p class="page-loading">"추천을 불러오는 중..."</p> }.into_any()
                } else if let Some(message) = state.error {
                    view! { <p class="page-error">{message}</p> }.into_any()
                } else if state.result.is_none() {
                    view! {
                        <p class="recommend-result__empty">
                            "아직 추천 결과가 없습니다. "
                            <A href="/survey?page=1">"설문 시작하기"</A>
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="recommend-result__accords">
                            {accords().into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                        </ul>
                        <PerfumeList perfumes=perfumes />
                    }
                        .into_any()
                }
            }}
            <A href="/survey?page=1">"다시 하기"</A>
        </div>
    }
}
