use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_products};

#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_products();

    if !state.loaded {
        return html! {
            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                {"Loading products..."}
            </p>
        };
    }

    if state.products.is_empty() {
        return html! {
            <div class="text-center py-12 space-y-4">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No products yet."}
                </p>
                <Link<Route>
                    to={Route::NewProduct}
                    classes="inline-block px-4 py-2 rounded-md text-sm font-medium
                             text-white bg-neutral-900 hover:bg-neutral-800
                             dark:bg-neutral-100 dark:text-neutral-900
                             dark:hover:bg-neutral-200"
                >
                    {"Add your first product"}
                </Link<Route>>
            </div>
        };
    }

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
            {state.products.iter().map(|product| {
                let id = product.id;

                html! {
                    <div
                        key={id.to_string()}
                        class="border border-neutral-200 dark:border-neutral-700
                               rounded-lg p-4 space-y-3"
                    >
                        {match product.image.as_deref() {
                            Some(image) if !image.is_empty() => html! {
                                <img
                                    src={image.to_string()}
                                    alt={product.name.clone()}
                                    class="w-full h-40 rounded-md object-cover
                                           bg-neutral-100 dark:bg-neutral-700"
                                />
                            },
                            _ => html! {
                                <div class="w-full h-40 rounded-md flex items-center
                                            justify-center bg-neutral-100
                                            dark:bg-neutral-700">
                                    <span class="text-sm text-neutral-500
                                                 dark:text-neutral-400">
                                        {"No image"}
                                    </span>
                                </div>
                            },
                        }}

                        <div class="flex items-start justify-between gap-2">
                            <div>
                                <h2 class="font-medium text-neutral-900 dark:text-neutral-100">
                                    {&product.name}
                                </h2>
                                {if let Some(value) = product.value {
                                    html! {
                                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                            {format!("$ {value}")}
                                        </p>
                                    }
                                } else {
                                    html! {}
                                }}
                            </div>
                            <Link<Route>
                                to={Route::EditProduct { id }}
                                classes="px-3 py-1.5 rounded-md text-sm font-medium
                                         text-neutral-700 dark:text-neutral-300
                                         border border-neutral-300 dark:border-neutral-600
                                         hover:bg-neutral-50 dark:hover:bg-neutral-700"
                            >
                                {"Edit"}
                            </Link<Route>>
                        </div>

                        {if product.category.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div class="flex flex-wrap gap-1">
                                    {product.category.iter().map(|tag| html! {
                                        <span
                                            key={tag.clone()}
                                            class="px-2 py-0.5 rounded text-xs
                                                   bg-neutral-100 dark:bg-neutral-600
                                                   text-neutral-700 dark:text-neutral-200"
                                        >
                                            {tag}
                                        </span>
                                    }).collect::<Html>()}
                                </div>
                            }
                        }}
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}
