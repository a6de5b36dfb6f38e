use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::application::{CatalogController, FetchRequest, dispatch_fetch};
use crate::domain::catalog::{Product, SearchTerm};
use crate::domain::logging::{LogComponent, get_logger};
use crate::global_state::{controller, search_input};
use crate::infrastructure::http::DummyJsonClient;
use crate::infrastructure::rendering::BarChartRenderer;

/// Keystrokes younger than this are coalesced into one fetch.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Resolve one issued ticket against the live catalog API and fold the
/// outcome back into the controller. The controller discards the outcome
/// when a newer ticket has been issued in the meantime.
fn run_fetch(request: FetchRequest) {
    spawn_local(async move {
        let client = DummyJsonClient::new();
        let outcome = dispatch_fetch(&client, &request).await;
        controller().update(|c| match outcome {
            Ok(page) => c.apply_success(request.seq, page),
            Err(error) => c.apply_failure(request.seq, error),
        });
    });
}

/// Apply a state transition and start the fetch it issued, if any.
fn mutate_and_fetch(transition: impl FnOnce(&mut CatalogController) -> Option<FetchRequest>) {
    let mut issued = None;
    controller().update(|c| issued = transition(c));
    if let Some(request) = issued {
        run_fetch(request);
    }
}

/// 🦀 Root component: searchable product table plus selection chart
#[component]
pub fn App() -> impl IntoView {
    // first fetch: empty match-all query, page 1
    mutate_and_fetch(|c| Some(c.initial_request()));

    view! {
        <style>
            {r#"
            .catalog-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .search-bar {
                display: flex;
                justify-content: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .search-bar input {
                border: 1px solid #4a5d73;
                border-radius: 6px;
                padding: 8px 12px;
                width: 320px;
                background: rgba(0, 0, 0, 0.3);
                color: white;
            }

            .layout {
                display: flex;
                gap: 30px;
                align-items: flex-start;
                justify-content: center;
            }

            .product-table {
                border-collapse: collapse;
            }

            .product-table th, .product-table td {
                border: 1px solid #4a5d73;
                padding: 6px 10px;
            }

            .product-table th {
                background: rgba(0, 0, 0, 0.4);
            }

            .placeholder {
                text-align: center;
                color: #a0a0a0;
                padding: 30px;
            }

            .pagination {
                display: flex;
                justify-content: center;
                margin-top: 12px;
                gap: 4px;
            }

            .pagination button {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
            }

            .pagination button:disabled {
                opacity: 0.4;
                cursor: default;
            }

            .pagination button.active {
                background: #72c685;
            }

            .status {
                color: #72c685;
                font-size: 14px;
                text-align: center;
                margin-top: 10px;
            }
            "#}
        </style>
        <div class="catalog-app">
            <div class="header">
                <h1>"🛒 Product Catalog"</h1>
                <p>"Search • Paginate • Compare prices"</p>
            </div>
            <SearchBar />
            <div class="layout">
                <div>
                    <ProductTable />
                    <PaginationControls />
                    <StatusLine />
                </div>
                <ChartPanel />
            </div>
        </div>
    }
}

/// 🔎 Debounced search input
#[component]
fn SearchBar() -> impl IntoView {
    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        search_input().set(value.clone());
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // a newer keystroke supersedes this one
            if search_input().get_untracked() != value {
                return;
            }
            mutate_and_fetch(|c| c.set_search_term(SearchTerm::new(value)));
        });
    };

    view! {
        <div class="search-bar">
            <label>"Search:"</label>
            <input
                type="text"
                placeholder="Search..."
                prop:value=move || search_input().get()
                on:input=on_search_input
            />
        </div>
    }
}

/// 📋 Product rows with selection checkboxes
#[component]
fn ProductTable() -> impl IntoView {
    let ctrl = controller();

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    <th></th>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Brand"</th>
                    <th>"Price"</th>
                    <th>"Rating"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let (loading, empty) = ctrl.with(|c| (c.loading(), c.rows().is_empty()));
                    if loading {
                        view! {
                            <tr><td colspan="6" class="placeholder">"Loading..."</td></tr>
                        }
                        .into_view()
                    } else if empty {
                        view! {
                            <tr><td colspan="6" class="placeholder">"No Data Found"</td></tr>
                        }
                        .into_view()
                    } else {
                        view! {
                            <For
                                each=move || ctrl.with(|c| c.rows().to_vec())
                                key=|product| product.id
                                children=move |product: Product| {
                                    let id = product.id;
                                    let row = product.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        ctrl.with(|c| c.is_selected(id))
                                                    }
                                                    on:change=move |_| {
                                                        ctrl.update(|c| c.toggle_selection(&row))
                                                    }
                                                />
                                            </td>
                                            <td>{id.value()}</td>
                                            <td>{product.title.clone()}</td>
                                            <td>{product.brand.clone()}</td>
                                            <td>{format!("${:.2}", product.price)}</td>
                                            <td>{format!("{:.2}", product.rating)}</td>
                                        </tr>
                                    }
                                }
                            />
                        }
                        .into_view()
                    }
                }}
            </tbody>
        </table>
    }
}

/// ⏮️ Previous / numbered pages / next
#[component]
fn PaginationControls() -> impl IntoView {
    let ctrl = controller();

    view! {
        <div class="pagination">
            <button
                disabled=move || ctrl.with(|c| c.current_page() <= 1)
                on:click=move |_| mutate_and_fetch(|c| c.previous_page())
            >
                "Previous"
            </button>
            {move || {
                let (current, pages) = ctrl.with(|c| (c.current_page(), c.total_pages()));
                (1..=pages)
                    .map(|page| {
                        view! {
                            <button
                                class:active=move || page == current
                                on:click=move |_| mutate_and_fetch(move |c| c.go_to_page(page))
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                disabled=move || ctrl.with(|c| c.current_page() >= c.total_pages())
                on:click=move |_| mutate_and_fetch(|c| c.next_page())
            >
                "Next"
            </button>
        </div>
    }
}

/// 📊 Bar chart of the selected rows, redrawn on every selection change
#[component]
fn ChartPanel() -> impl IntoView {
    let ctrl = controller();
    let renderer = BarChartRenderer::new("selection-chart".to_string(), 800, 400);

    create_effect(move |_| {
        let series = ctrl.with(|c| c.chart_series());
        if let Err(e) = renderer.render(&series) {
            get_logger().error(
                LogComponent::Presentation("ChartPanel"),
                &format!("❌ Chart render failed: {e:?}"),
            );
        }
    });

    view! {
        <div class="chart-container">
            <canvas
                id="selection-chart"
                width="800"
                height="400"
                style="border: 2px solid #4a5d73; border-radius: 10px; background: #2c3e50;"
            />
        </div>
    }
}

/// Loading / error / item-count line under the table
#[component]
fn StatusLine() -> impl IntoView {
    let ctrl = controller();

    view! {
        <div class="status">
            {move || {
                ctrl.with(|c| match c.last_error() {
                    Some(error) => format!("⚠️ {error}"),
                    None if c.loading() => "Loading...".to_string(),
                    None => format!(
                        "{} items • page {} of {}",
                        c.total_items(),
                        c.current_page(),
                        c.total_pages().max(1)
                    ),
                })
            }}
        </div>
    }
}
