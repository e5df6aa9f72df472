//! Application shell: router, layout chrome, and shared context.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::pages::{CatalogPage, ProductDetailPage, PromotionPage};
use shopfront_data::ApiClient;

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_window();
    provide_context(ApiClient::new(config.api_base));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Shopfront - storefront and promotion tools"/>
        <Title text="Shopfront"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=CatalogPage/>
                    <Route path=path!("/product/:id") view=ProductDetailPage/>
                    <Route path=path!("/promotions/new") view=PromotionPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <h1>"Shopfront"</h1>
            <nav>
                <a href="/">"Home"</a>
                <a href="/promotions/new">"New Promotion"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Shopfront demo storefront"</p>
        </footer>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
