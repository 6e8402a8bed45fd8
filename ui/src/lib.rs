use payloads::ProductId;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod product_form;
pub mod state;
pub mod storage;

pub use state::State;

use components::layout::MainLayout;
use pages::{EditProductPage, HomePage, NewProductPage, NotFoundPage};

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products/new")]
    NewProduct,
    #[at("/products/:id/edit")]
    EditProduct { id: ProductId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::NewProduct => html! { <NewProductPage /> },
        Route::EditProduct { id } => html! { <EditProductPage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
