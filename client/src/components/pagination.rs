//! Numbered page links.

use leptos::prelude::*;

use crate::state::paging::page_window;

const WINDOW: u32 = 5;

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="pagination__step"
                disabled=move || current.get() <= 1
                on:click=move |_| on_select.run(current.get_untracked().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                page_window(current.get(), total.get(), WINDOW)
                    .into_iter()
                    .map(|page| {
                        let class = move || {
                            if current.get() == page {
                                "pagination__page pagination__page--active"
                            } else {
                                "pagination__page"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| on_select.run(page)>
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination__step"
                disabled=move || current.get() >= total.get()
                on:click=move |_| on_select.run(current.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}
