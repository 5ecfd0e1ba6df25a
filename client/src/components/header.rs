//! Site header with navigation and the signed-in member's actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::recommend::RecommendState;
use crate::state::session::SessionState;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let recommend = expect_context::<RwSignal<RecommendState>>();

    let member_name = move || {
        session
            .get()
            .user
            .map_or_else(|| "마이페이지".to_owned(), |u| u.username)
    };

    view! {
        <header class="site-header">
            <A href="/">"Perfumism"</A>
            <nav class="site-header__nav">
                <A href="/perfumes">"향수"</A>
                <A href="/survey?page=1">"추천"</A>
                <A href="/community">"커뮤니티"</A>
            </nav>
            <Show
                when=move || session.get().is_signed_in()
                fallback=|| {
                    view! {
                        <div class="site-header__account">
                            <A href="/signin">"로그인"</A>
                            <A href="/signup">"회원가입"</A>
                        </div>
                    }
                }
            >
                <div class="site-header__account">
                    <A href="/mypage">{member_name}</A>
                    <button
                        class="btn site-header__logout"
                        on:click=move |_| crate::util::auth::logout(session, recommend)
                    >
                        "로그아웃"
                    </button>
                </div>
            </Show>
        </header>
    }
}
