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

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: ProductId,
}

/// Edit an existing product.
///
/// Local editable state (form values, tags, rendered image) is
/// re-derived from the shared collection whenever it changes: the store
/// is the source of truth, so a late store update replaces in-progress
/// edits rather than merging with them. An id with no matching record
/// renders blank defaults.
#[function_component]
pub fn EditProductPage(props: &Props) -> Html {
    let (state, dispatch) = use_products();
    let push_route = use_push_route();

    let values = use_state(ProductFormValues::default);
    let tags = use_state(Vec::<String>::new);
    let rendered_image = use_state(|| None::<String>);
    let errors = use_state(FormErrors::default);

    {
        let values = values.clone();
        let tags = tags.clone();
        let rendered_image = rendered_image.clone();
        let errors = errors.clone();

        use_effect_with((state.clone(), props.id), move |(state, id)| {
            let product = state.get_product(*id);
            values.set(ProductFormValues::from_product(product));
            tags.set(product.map(|p| p.category.clone()).unwrap_or_default());
            rendered_image.set(product.and_then(|p| p.image.clone()));
            errors.set(FormErrors::default());
        });
    }

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
        let id = props.id;

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

            let updated = validated.into_product(
                id,
                (*rendered_image).clone(),
                (*tags).clone(),
            );

            dispatch.reduce_mut(|s| {
                if !s.update_product(updated.clone()) {
                    tracing::warn!(%id, "dropping update for unknown product");
                }
            });
            if let Err(e) = storage::store_products(&dispatch.get().products) {
                tracing::warn!("failed to persist products: {e}");
            }

            // Fire-and-forget: navigate home regardless of outcome.
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
