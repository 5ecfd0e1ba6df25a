//! Perfume cards and the grid that lays them out.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::perfume::perfume_image_url;
use crate::net::types::PerfumeSummary;

#[component]
pub fn PerfumeCard(perfume: PerfumeSummary) -> impl IntoView {
    let href = format!("/perfumes/{}", perfume.perfume_id);
    let image = perfume_image_url(&perfume.image);
    let grade = format!("{:.1}", perfume.average_grade);
    let alt = perfume.perfume_name.clone();

    view! {
        <div class="perfume-card">
            <A href=href>
                <img class="perfume-card__image" src=image alt=alt/>
                <h3 class="perfume-card__name">{perfume.perfume_name}</h3>
            </A>
            <p class="perfume-card__brand">{perfume.brand_name.unwrap_or_default()}</p>
            <p class="perfume-card__grade">{grade}</p>
        </div>
    }
}

#[component]
pub fn PerfumeList(#[prop(into)] perfumes: Signal<Vec<PerfumeSummary>>) -> impl IntoView {
    view! {
        <ul class="perfume-list">
            {move || {
                perfumes
                    .get()
                    .into_iter()
                    .map(|perfume| view! { <li><PerfumeCard perfume=perfume/></li> })
                    .collect_view()
            }}
        </ul>
    }
}
