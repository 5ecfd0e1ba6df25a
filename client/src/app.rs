//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::ClientConfig;
use crate::net::http::HttpClient;
use crate::pages::{
    community::CommunityPage, find_password::FindPasswordPage, home::HomePage, mypage::MyPage,
    perfume_detail::PerfumeDetailPage, perfumes::PerfumesPage, recommend_loading::RecommendLoadingPage,
    recommend_result::RecommendResultPage, signin::SignInPage, signup::SignUpPage, survey::SurveyPage,
};
use crate::state::recommend::RecommendState;
use crate::state::session::SessionState;
use crate::util::auth::{load_profile, restore_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, recommendation, config, and HTTP client contexts and
/// restores a stored session once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::resolve();
    let client = HttpClient::from_config(&config);
    let session = RwSignal::new(SessionState { loading: true, ..SessionState::default() });
    let recommend = RwSignal::new(RecommendState::default());

    provide_context(config.clone());
    provide_context(client.clone());
    provide_context(session);
    provide_context(recommend);

    let ttl = config.credential_ttl_secs;
    Effect::new(move || {
        restore_session(session);
        load_profile(session, recommend, client.clone(), ttl);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/perfumism.css"/>
        <Title text="Perfumism"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("find-password") view=FindPasswordPage/>
                    <Route path=StaticSegment("perfumes") view=PerfumesPage/>
                    <Route path=(StaticSegment("perfumes"), ParamSegment("id")) view=PerfumeDetailPage/>
                    <Route path=StaticSegment("survey") view=SurveyPage/>
                    <Route path=(StaticSegment("survey"), StaticSegment("loading")) view=RecommendLoadingPage/>
                    <Route path=(StaticSegment("survey"), StaticSegment("result")) view=RecommendResultPage/>
                    <Route path=StaticSegment("community") view=CommunityPage/>
                    <Route path=StaticSegment("mypage") view=MyPage/>
                </Routes>
            </main>
        </Router>
    }
}
