//! Perfume catalogue with "load more" paging.

use leptos::prelude::*;

use crate::components::perfume_list::PerfumeList;
use crate::config::ClientConfig;
use crate::net::http::HttpClient;
use crate::net::perfume;
use crate::net::types::PerfumeSummary;
use crate::state::paging::LoadMoreList;

/// Fetch the next catalogue page into `list`. No-op while a fetch is pending
/// or once every page is loaded.
fn load_next(list: RwSignal<LoadMoreList<PerfumeSummary>>, client: HttpClient, page_size: u32) {
    let Some(page) = list.try_update(LoadMoreList::begin_fetch).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match perfume::list_perfumes(&client, page, page_size).await {
            Ok(resp) => list.update(|l| l.apply_page(resp.perfume_list, resp.current_page_count, resp.total_page_count)),
            Err(e) => {
                leptos::logging::warn!("perfume list page {page} failed: {e}");
                list.update(|l| l.fail(e.user_message()));
            }
        }
    });
}

#[component]
pub fn PerfumesPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let page_size = expect_context::<ClientConfig>().page_size;
    let list = RwSignal::new(LoadMoreList::<PerfumeSummary>::default());

    let initial_client = client.clone();
    Effect::new(move || load_next(list, initial_client.clone(), page_size));

    let perfumes = Signal::derive(move || list.with(|l| l.items.clone()));

    view! {
        <div class="perfumes-page">
            <h1 class="perfumes-page__header">"향수"</h1>
            <PerfumeList perfumes=perfumes />
            <Show when=move || list.with(|l| l.error.is_some())>
                <p class="page-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || !list.with(LoadMoreList::is_exhausted)>
                <button
                    class="btn perfumes-page__more"
                    disabled=move || list.with(|l| l.loading)
                    on:click={
                        let client = client.clone();
                        move |_| load_next(list, client.clone(), page_size)
                    }
                >
                    "더 보기"
                </button>
            </Show>
        </div>
    }
}
