//! Perfume detail: notes, accords, similar perfumes, and the like toggle.

#[cfg(test)]
#[path = "perfume_detail_test.rs"]
mod perfume_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::perfume_list::PerfumeList;
use crate::net::http::HttpClient;
use crate::net::perfume;
use crate::net::types::PerfumeDetail;
use crate::state::paging::LatestRequest;
use crate::state::recommend::RecommendState;
use crate::state::session::SessionState;
use crate::util::auth::{current_credential, handle_auth_failure};

/// Perfume id from the `:id` route segment.
pub fn parse_perfume_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|id| id.trim().parse::<i64>().ok()).filter(|id| *id > 0)
}

/// Comma-separated note list as individual note names.
pub fn split_notes(notes: Option<&str>) -> Vec<String> {
    notes
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|note| !note.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
enum DetailLoad {
    #[default]
    Loading,
    Loaded(Box<PerfumeDetail>),
    Failed(String),
}

#[component]
pub fn PerfumeDetailPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let recommend = expect_context::<RwSignal<RecommendState>>();
    let params = use_params_map();
    let perfume_id = Memo::new(move |_| params.with(|p| parse_perfume_id(p.get("id").as_deref())));

    let detail = RwSignal::new(DetailLoad::Loading);
    let liked = RwSignal::new(false);
    let like_pending = RwSignal::new(false);
    let detail_request = RwSignal::new(LatestRequest::default());
    let like_request = RwSignal::new(LatestRequest::default());

    let detail_client = client.clone();
    Effect::new(move || {
        let id = perfume_id.get();
        let Some(request) = detail_request.try_update(LatestRequest::begin) else {
            return;
        };
        let Some(id) = id else {
            detail.set(DetailLoad::Failed("존재하지 않는 향수입니다.".to_owned()));
            return;
        };
        detail.set(DetailLoad::Loading);
        let client = detail_client.clone();
        leptos::task::spawn_local(async move {
            let outcome = perfume::get_perfume(&client, id).await;
            if !detail_request.with_untracked(|r| r.is_current(request)) {
                return;
            }
            match outcome {
                Ok(found) => detail.set(DetailLoad::Loaded(Box::new(found))),
                Err(e) => {
                    leptos::logging::warn!("perfume {id} load failed: {e}");
                    detail.set(DetailLoad::Failed(e.user_message()));
                }
            }
        });
    });

    let like_client = client.clone();
    Effect::new(move || {
        let id = perfume_id.get();
        let signed_in = session.with(SessionState::is_signed_in);
        let Some(request) = like_request.try_update(LatestRequest::begin) else {
            return;
        };
        liked.set(false);
        let (Some(id), true) = (id, signed_in) else {
            return;
        };
        let Some(credential) = current_credential(session) else {
            return;
        };
        let client = like_client.clone();
        leptos::task::spawn_local(async move {
            let outcome = perfume::is_liked(&client, &credential, id).await;
            if !like_request.with_untracked(|r| r.is_current(request)) {
                return;
            }
            match outcome {
                Ok(state) => liked.set(state),
                Err(e) => {
                    leptos::logging::warn!("like state for {id} failed: {e}");
                    handle_auth_failure(&e, session, recommend);
                }
            }
        });
    });

    let on_like = move |_| {
        if like_pending.get_untracked() {
            return;
        }
        let (Some(id), Some(credential)) = (perfume_id.get_untracked(), current_credential(session)) else {
            return;
        };
        let want = !liked.get_untracked();
        like_pending.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match perfume::set_liked(&client, &credential, id, want).await {
                Ok(()) if perfume_id.get_untracked() == Some(id) => liked.set(want),
                Ok(()) => {}
                Err(e) => {
                    leptos::logging::warn!("like toggle for {id} failed: {e}");
                    handle_auth_failure(&e, session, recommend);
                }
            }
            like_pending.set(false);
        });
    };

    view! {
        <div class="perfume-detail">
            {move || match detail.get() {
                DetailLoad::Loading => view! { <p class="page-loading">"불러오는 중..."</p> }.into_any(),
                DetailLoad::Failed(message) => view! { <p class="page-error">{message}</p> }.into_any(),
                DetailLoad::Loaded(found) => view! { <DetailBody detail=*found /> }.into_any(),
            }}
            <Show when=move || session.with(SessionState::is_signed_in)>
                <button
                    class=move || {
                        if liked.get() { "btn perfume-detail__like perfume-detail__like--on" } else { "btn perfume-detail__like" }
                    }
                    disabled=move || like_pending.get()
                    on:click=on_like.clone()
                >
                    {move || if liked.get() { "♥ 좋아요 취소" } else { "♡ 좋아요" }}
                </button>
            </Show>
        </div>
    }
}

#[component]
fn DetailBody(detail: PerfumeDetail) -> impl IntoView {
    let image = perfume::perfume_image_url(&detail.image);
    let notes = [
        ("탑 노트", split_notes(detail.top_notes.as_deref())),
        ("미들 노트", split_notes(detail.middle_notes.as_deref())),
        ("베이스 노트", split_notes(detail.base_notes.as_deref())),
    ];
    let similar = Signal::stored(detail.similar_perfume);

    view! {
        <section class="perfume-detail__summary">
            <img class="perfume-detail__image" src=image alt=detail.perfume_name.clone() />
            <p class="perfume-detail__brand">{detail.brand.brand_name}</p>
            <h1 class="perfume-detail__name">{detail.perfume_name}</h1>
            <p class="perfume-detail__grade">{format!("{:.1}", detail.average_grade)}</p>
            {detail.launch_year.map(|year| view! { <p class="perfume-detail__year">{format!("{year}년 출시")}</p> })}
        </section>
        <section class="perfume-detail__notes">
            {notes
                .into_iter()
                .filter(|(_, names)| !names.is_empty())
                .map(|(label, names)| {
                    view! {
                        <div class="perfume-detail__note">
                            <h3>{label}</h3>
                            <p>{names.join(", ")}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
        <section class="perfume-detail__accords">
            {detail
                .accords
                .into_iter()
                .map(|accord| view! { <span class="perfume-detail__accord">{accord.kor_name}</span> })
                .collect_view()}
        </section>
        <section class="perfume-detail__survey">
            <p>{format!("지속력: {}", detail.longevity.unwrap_or_else(|| "-".to_owned()))}</p>
            <p>{format!("잔향: {}", detail.sillage.unwrap_or_else(|| "-".to_owned()))}</p>
            <p>{format!("{}명 참여", detail.total_survey)}</p>
        </section>
        <section class="perfume-detail__similar">
            <h2>"비슷한 향수"</h2>
            <PerfumeList perfumes=similar />
        </section>
    }
}
