use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Home}>
                            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                                {"Inventory"}
                            </h1>
                        </Link<Route>>
                    </div>
                    <div class="flex items-center space-x-4">
                        <Link<Route>
                            to={Route::NewProduct}
                            classes="px-3 py-2 rounded-md text-sm font-medium text-white
                                     bg-neutral-900 hover:bg-neutral-800
                                     dark:bg-neutral-100 dark:text-neutral-900
                                     dark:hover:bg-neutral-200"
                        >
                            {"Add product"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </header>
    }
}
