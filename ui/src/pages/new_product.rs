use jiff::Zoned;
use payloads::ProductId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    components::{ProductFields, ProductImageInput},
    hooks::{use_products, use_push_route},
    product_form::{Field, FormErrors, ProductFormValues},
    storage,
};

/// Create a new product: the same form as the edit view, seeded with
/// blank defaults.
#[function_component]
pub fn NewProductPage() -> Html {
    let (_, dispatch) = use_products();
    let push_route = use_push_route();

    let values = use_state(ProductFormValues::default);
    let tags = use_state(Vec::<String>::new);
    let rendered_image = use_state(|| None::<String>);
    let errors = use_state(FormErrors::default);

    let on_field_change = {
        let values = values.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*values).clone();
            next.set(field, value);
            values.set(next);
        })
    };

    let on_tags_change = {
        let tags = tags.clone();
        Callback::from(move |next: Vec<String>| tags.set(next))
    };

    let on_image_change = {
        let rendered_image = rendered_image.clone();
        Callback::from(move |url: String| rendered_image.set(Some(url)))
    };

    let on_submit = {
        let values = values.clone();
        let tags = tags.clone();
        let rendered_image = rendered_image.clone();
        let errors = errors.clone();
        let dispatch = dispatch.clone();
        let push_route = push_route.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let today = Zoned::now().date();
            let validated = match values.validate(today) {
                Ok(validated) => validated,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            let product = validated.into_product(
                ProductId::new(),
                (*rendered_image).clone(),
                (*tags).clone(),
            );

            dispatch.reduce_mut(|s| s.add_product(product));
            if let Err(e) = storage::store_products(&dispatch.get().products) {
                tracing::warn!("failed to persist products: {e}");
            }

            push_route.emit(Route::Home);
        })
    };

    let today = Zoned::now().date();

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            <header class="flex items-center justify-between">
                <Link<Route>
                    to={Route::Home}
                    classes="text-sm font-medium text-neutral-600 dark:text-neutral-400
                             hover:text-neutral-900 dark:hover:text-neutral-100"
                >
                    {"← Back"}
                </Link<Route>>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900
                           dark:hover:bg-neutral-200"
                >
                    {"Save"}
                </button>
            </header>

            <ProductImageInput
                image={(*rendered_image).clone()}
                on_image_change={on_image_change}
            />

            <ProductFields
                values={(*values).clone()}
                errors={(*errors).clone()}
                on_change={on_field_change}
                tags={(*tags).clone()}
                on_tags_change={on_tags_change}
                acquisition_note={format!("No later than {today}")}
            />
        </form>
    }
}
