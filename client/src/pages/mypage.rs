//! Signed-in member page: profile, avatar upload, favorites, account actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Visitors without a session are sent to `/signin` once the
//! stored cookie has been checked.

#[cfg(test)]
#[path = "mypage_test.rs"]
mod mypage_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::pagination::Pagination;
use crate::components::perfume_list::PerfumeList;
use crate::config::ClientConfig;
use crate::net::http::HttpClient;
use crate::net::types::{MemberInfo, PerfumeSummary};
use crate::net::{auth, profile};
use crate::state::paging::PageView;
use crate::state::recommend::RecommendState;
use crate::state::session::SessionState;
use crate::util::auth::{current_credential, handle_auth_failure, install_unauth_redirect, logout};
#[cfg(feature = "hydrate")]
use crate::util::auth::load_profile;
use crate::util::file_input::is_supported_image;

pub const DEFAULT_AVATAR: &str = "/img/default-avatar.png";
pub const UNSUPPORTED_IMAGE: &str = "png, jpg, gif, webp 이미지만 올릴 수 있습니다.";

pub fn avatar_src(user: Option<&MemberInfo>) -> String {
    user.and_then(|u| u.image_url.as_deref())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_AVATAR)
        .to_owned()
}

/// Message to show instead of uploading `file_name`, if any.
pub fn avatar_rejection(file_name: &str) -> Option<&'static str> {
    (!is_supported_image(file_name)).then_some(UNSUPPORTED_IMAGE)
}

fn load_favorites(
    favorites: RwSignal<PageView<PerfumeSummary>>,
    session: RwSignal<SessionState>,
    recommend: RwSignal<RecommendState>,
    client: HttpClient,
    page: u32,
    size: u32,
) {
    let Some(credential) = current_credential(session) else {
        return;
    };
    let Some(ticket) = favorites.try_update(|f| f.begin_load(page)).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match profile::get_favorites(&client, &credential, page, size).await {
            Ok(resp) => {
                favorites.update(|f| {
                    f.apply_page(ticket, resp.perfume_list, resp.current_page_count, resp.total_page_count);
                });
            }
            Err(e) => {
                leptos::logging::warn!("favorites page {page} failed: {e}");
                favorites.update(|f| f.fail(ticket, e.user_message()));
                handle_auth_failure(&e, session, recommend);
            }
        }
    });
}

#[component]
pub fn MyPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let recommend = expect_context::<RwSignal<RecommendState>>();
    install_unauth_redirect(session, use_navigate());

    let page_size = config.page_size;
    let ttl = config.credential_ttl_secs;
    let favorites = RwSignal::new(PageView::<PerfumeSummary>::default());
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let signed_in = Memo::new(move |_| session.with(SessionState::is_signed_in));
    let favorites_client = client.clone();
    Effect::new(move || {
        if signed_in.get() {
            load_favorites(favorites, session, recommend, favorites_client.clone(), 1, page_size);
        } else {
            favorites.update(PageView::reset);
        }
    });

    let select_client = client.clone();
    let on_select = Callback::new(move |page: u32| {
        load_favorites(favorites, session, recommend, select_client.clone(), page, page_size);
    });

    let avatar_client = client.clone();
    let on_avatar = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::file_input::first_file(&ev) else {
                return;
            };
            if let Some(message) = avatar_rejection(&file.name()) {
                notice.set(Some(message.to_owned()));
                return;
            }
            let Some(credential) = current_credential(session) else {
                return;
            };
            busy.set(true);
            let client = avatar_client.clone();
            leptos::task::spawn_local(async move {
                match profile::set_user_image(&client, &credential, profile::avatar_part(file)).await {
                    Ok(()) => {
                        notice.set(None);
                        load_profile(session, recommend, client, ttl);
                    }
                    Err(e) => {
                        leptos::logging::warn!("avatar upload failed: {e}");
                        notice.set(Some(e.user_message()));
                        handle_auth_failure(&e, session, recommend);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &avatar_client, ttl);
        }
    };

    let on_delete = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(credential) = current_credential(session) else {
            return;
        };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match auth::delete_account(&client, &credential).await {
                Ok(()) => logout(session, recommend),
                Err(e) => {
                    leptos::logging::warn!("account deletion failed: {e}");
                    notice.set(Some(e.user_message()));
                    handle_auth_failure(&e, session, recommend);
                }
            }
            busy.set(false);
        });
    };

    let user = move || session.with(|s| s.user.clone());
    let current = Signal::derive(move || favorites.with(|f| f.page));
    let total = Signal::derive(move || favorites.with(|f| f.total_pages));
    let favorite_items = Signal::derive(move || favorites.with(|f| f.items.clone()));

    view! {
        <div class="mypage">
            <section class="mypage__profile">
                <img class="mypage__avatar" src=move || avatar_src(user().as_ref()) alt="프로필 이미지" />
                <label class="btn mypage__avatar-upload">
                    "프로필 사진 변경"
                    <input type="file" accept="image/*" hidden disabled=move || busy.get() on:change=on_avatar />
                </label>
                <p class="mypage__username">{move || user().map(|u| u.username).unwrap_or_default()}</p>
                <p class="mypage__email">{move || user().map(|u| u.email).unwrap_or_default()}</p>
                <Show when=move || notice.with(Option::is_some)>
                    <p class="page-error">{move || notice.get().unwrap_or_default()}</p>
                </Show>
            </section>
            <section class="mypage__favorites">
                <h2>"좋아요한 향수"</h2>
                <Show when=move || favorites.with(|f| f.error.is_some())>
                    <p class="page-error">{move || favorites.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>
                <PerfumeList perfumes=favorite_items />
                <Pagination current=current total=total on_select=on_select />
            </section>
            <section class="mypage__account">
                <button class="btn" on:click=move |_| logout(session, recommend)>
                    "로그아웃"
                </button>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=on_delete>
                    "회원 탈퇴"
                </button>
            </section>
        </div>
    }
}
