//! Community board listing with a subject filter and numbered pages.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::config::ClientConfig;
use crate::net::community;
use crate::net::http::HttpClient;
use crate::net::types::{ArticleSubject, ArticleSummary};
use crate::state::paging::PageView;
use crate::state::session::SessionState;
use crate::util::auth::current_credential;

/// Calendar date part of a backend timestamp such as `2023-01-05T12:30:00`.
pub fn article_date(created_at: &str) -> &str {
    created_at.split_once('T').map_or(created_at, |(date, _)| date)
}

fn load_page(
    board: RwSignal<PageView<ArticleSummary>>,
    session: RwSignal<SessionState>,
    client: HttpClient,
    page: u32,
    size: u32,
    subject: Option<ArticleSubject>,
) {
    let Some(ticket) = board.try_update(|b| b.begin_load(page)).flatten() else {
        return;
    };
    let credential = current_credential(session);
    leptos::task::spawn_local(async move {
        match community::list_articles(&client, credential.as_ref(), page, size, subject).await {
            Ok(resp) => {
                board.update(|b| b.apply_page(ticket, resp.article_list, resp.current_page_count, resp.total_page_count));
            }
            Err(e) => {
                leptos::logging::warn!("article page {page} failed: {e}");
                board.update(|b| b.fail(ticket, e.user_message()));
            }
        }
    });
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let page_size = expect_context::<ClientConfig>().page_size;
    let board = RwSignal::new(PageView::<ArticleSummary>::default());
    let subject = RwSignal::new(None::<ArticleSubject>);

    let filter_client = client.clone();
    Effect::new(move || {
        let subject = subject.get();
        board.update(PageView::reset);
        load_page(board, session, filter_client.clone(), 1, page_size, subject);
    });

    let on_select = Callback::new(move |page: u32| {
        load_page(board, session, client.clone(), page, page_size, subject.get_untracked());
    });
    let current = Signal::derive(move || board.with(|b| b.page));
    let total = Signal::derive(move || board.with(|b| b.total_pages));

    let subject_button = move |choice: Option<ArticleSubject>| {
        let label = choice.map_or("전체", ArticleSubject::label);
        let class = move || {
            if subject.get() == choice {
                "community-page__subject community-page__subject--active"
            } else {
                "community-page__subject"
            }
        };
        view! {
            <button class=class on:click=move |_| subject.set(choice)>
                {label}
            </button>
        }
    };

    view! {
        <div class="community-page">
            <h1 class="community-page__header">"커뮤니티"</h1>
            <nav class="community-page__subjects">
                {subject_button(None)}
                {ArticleSubject::ALL.into_iter().map(|s| subject_button(Some(s))).collect_view()}
            </nav>
            <Show when=move || board.with(|b| b.error.is_some())>
                <p class="page-error">{move || board.with(|b| b.error.clone().unwrap_or_default())}</p>
            </Show>
            <table class="community-page__articles">
                <thead>
                    <tr>
                        <th>"말머리"</th>
                        <th>"제목"</th>
                        <th>"작성자"</th>
                        <th>"작성일"</th>
                        <th>"조회"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        board
                            .get()
                            .items
                            .into_iter()
                            .map(|article| {
                                view! {
                                    <tr>
                                        <td>{article.subject.label()}</td>
                                        <td>{article.title}</td>
                                        <td>{article.member_name}</td>
                                        <td>{article_date(&article.created_at).to_owned()}</td>
                                        <td>{article.views}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Pagination current=current total=total on_select=on_select />
        </div>
    }
}
