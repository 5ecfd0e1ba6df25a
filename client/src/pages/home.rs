//! Landing page: survey entry point and a first page of the catalogue.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::perfume_list::PerfumeList;
use crate::config::ClientConfig;
use crate::net::http::HttpClient;
use crate::net::perfume;
use crate::net::types::PerfumeSummary;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let page_size = expect_context::<ClientConfig>().page_size;
    let featured = RwSignal::new(Vec::<PerfumeSummary>::new());

    Effect::new(move || {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match perfume::list_perfumes(&client, 1, page_size).await {
                Ok(resp) => featured.set(resp.perfume_list),
                Err(e) => leptos::logging::warn!("featured perfumes failed: {e}"),
            }
        });
    });

    let greeting = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map_or_else(|| "나에게 어울리는 향수를 찾아보세요.".to_owned(), |u| format!("{}님, 오늘은 어떤 향이 끌리나요?", u.username))
        })
    };

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Perfumism"</h1>
                <p>{greeting}</p>
                <A href="/survey?page=1">"향수 추천 받기"</A>
                <Show when=move || session.with(SessionState::is_signed_in)>
                    <A href="/survey/loading">"좋아요 기반 추천"</A>
                </Show>
            </section>
            <section class="home-page__featured">
                <h2>"향수 둘러보기"</h2>
                <PerfumeList perfumes=featured />
                <A href="/perfumes">"더 많은 향수 보기"</A>
            </section>
        </div>
    }
}
