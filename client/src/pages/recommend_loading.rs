//! Resolves the recommendation source, fetches it, then shows the result page.

#[cfg(test)]
#[path = "recommend_loading_test.rs"]
mod recommend_loading_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::error::{ApiError, ApiResult};
use crate::net::http::HttpClient;
use crate::net::recommend;
use crate::net::types::RecommendResponse;
use crate::state::recommend::{RecommendError, RecommendSource, RecommendState};
use crate::state::session::{Credential, SessionState};
use crate::util::auth::{current_credential, handle_auth_failure};

pub const RESULT_ROUTE: &str = "/survey/result";

/// Source to fetch from, or `None` while the session or profile is still loading.
///
/// A survey query never waits; a like-based request waits for the member id.
pub fn resolve_when_ready<L>(lookup: L, session: &SessionState) -> Option<Result<RecommendSource, RecommendError>>
where
    L: Fn(&str) -> Option<String>,
{
    let has_answers = lookup("a1").is_some();
    let waiting = session.loading || (session.is_signed_in() && session.user.is_none());
    if !has_answers && waiting {
        return None;
    }
    Some(RecommendSource::resolve(lookup, session.member_id()))
}

async fn fetch(
    client: &HttpClient,
    source: RecommendSource,
    credential: Option<Credential>,
) -> ApiResult<RecommendResponse> {
    match (source, credential) {
        (RecommendSource::Survey(answers), _) => recommend::survey_recommend(client, &answers).await,
        (RecommendSource::LikeBased { member_id }, Some(credential)) => {
            recommend::like_based_recommend(client, &credential, member_id).await
        }
        (RecommendSource::LikeBased { .. }, None) => Err(ApiError::Unauthorized),
    }
}

#[component]
pub fn RecommendLoadingPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let recommend = expect_context::<RwSignal<RecommendState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let started = RwSignal::new(false);

    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        let resolved = session.with(|s| query.with(|q| resolve_when_ready(|key: &str| q.get(key), s)));
        let Some(resolved) = resolved else {
            return;
        };
        started.set(true);
        let source = match resolved {
            Ok(source) => source,
            Err(e) => {
                recommend.set(RecommendState { result: None, error: Some(e.to_string()), loading: false });
                navigate(RESULT_ROUTE, NavigateOptions::default());
                return;
            }
        };
        recommend.set(RecommendState { result: None, error: None, loading: true });
        let credential = current_credential(session);
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = fetch(&client, source, credential).await;
            let state = match outcome {
                Ok(result) => RecommendState { result: Some(result), error: None, loading: false },
                Err(e) => {
                    leptos::logging::warn!("recommendation failed: {e}");
                    handle_auth_failure(&e, session, recommend);
                    RecommendState { result: None, error: Some(e.user_message()), loading: false }
                }
            };
            recommend.set(state);
            navigate(RESULT_ROUTE, NavigateOptions::default());
        });
    });

    view! {
        <div class="recommend-loading">
            <p>"당신에게 어울리는 향수를 찾고 있어요..."</p>
        </div>
    }
}
