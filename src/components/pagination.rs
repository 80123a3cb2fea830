//! Pager controls shared by the grid views.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Default page size for every grid.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const PAGE_SIZES: [u32; 3] = [10, 25, 50];

/// Previous/next controls plus a page-size select.
///
/// Writing `page` or `page_size` is what triggers the owning view's fetch
/// effect; this component performs no requests itself.
#[component]
pub fn Pager(
    page: RwSignal<u32>,
    page_size: RwSignal<u32>,
    #[prop(into)] total: Signal<i64>,
) -> impl IntoView {
    let pages = move || page_count(total.get(), page_size.get());

    let on_prev = move |_| {
        page.update(|current| *current = current.saturating_sub(1).max(1));
    };
    let on_next = move |_| {
        let last = pages();
        page.update(|current| *current = (*current + 1).min(last));
    };
    let on_size = move |ev| {
        let next = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
        page_size.set(next);
        if page.get_untracked() != 1 {
            page.set(1);
        }
    };

    view! {
        <div class="pager">
            <button class="btn" disabled=move || page.get() <= 1 on:click=on_prev>
                "Prev"
            </button>
            <span class="pager__status">
                {move || format!("Page {} of {}", page.get(), pages())}
            </span>
            <button class="btn" disabled=move || page.get() >= pages() on:click=on_next>
                "Next"
            </button>
            <select class="pager__size" on:change=on_size>
                {PAGE_SIZES
                    .iter()
                    .copied()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{size} / page")}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

/// Number of pages needed for `total` rows, never less than one.
pub fn page_count(total: i64, page_size: u32) -> u32 {
    if total <= 0 || page_size == 0 {
        return 1;
    }
    let pages = (total + i64::from(page_size) - 1) / i64::from(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
