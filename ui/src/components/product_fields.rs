use yew::prelude::*;

use crate::{
    components::{TagInput, TextInput},
    product_form::{Field, FormErrors, ProductFormValues},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub values: ProductFormValues,
    pub errors: FormErrors,
    pub on_change: Callback<(Field, String)>,
    pub tags: Vec<String>,
    pub on_tags_change: Callback<Vec<String>>,
    /// Help text under the acquisition date, stating the upper bound.
    pub acquisition_note: String,
}

/// The scalar inputs and the category tag editor, in display order.
/// Image handling and submission live with the owning page.
#[function_component]
pub fn ProductFields(props: &Props) -> Html {
    let input = |field: Field,
                 label: &str,
                 input_type: &str,
                 note: Option<&str>| {
        html! {
            <TextInput
                {field}
                label={label.to_string()}
                input_type={input_type.to_string()}
                note={note.map(|n| n.to_string())}
                value={props.values.get(field).to_string()}
                error={props.errors.get(field)}
                on_change={props.on_change.clone()}
            />
        }
    };

    html! {
        <div class="space-y-4">
            {input(Field::Name, "Name", "text", None)}

            <TextInput
                field={Field::Description}
                label="Description"
                textarea=true
                value={props.values.get(Field::Description).to_string()}
                on_change={props.on_change.clone()}
            />

            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                    {"Category"}
                </label>
                <TagInput
                    tags={props.tags.clone()}
                    on_change={props.on_tags_change.clone()}
                />
            </div>

            {input(Field::Value, "Value", "number", Some("Dollars"))}

            <h3 class="text-lg font-medium text-neutral-900 dark:text-neutral-100 pt-2">
                {"Measurements"}
            </h3>

            {input(Field::Height, "Height", "number", Some("Centimeters"))}
            {input(Field::Width, "Width", "number", Some("Centimeters"))}
            {input(Field::Length, "Length", "number", Some("Centimeters"))}
            {input(Field::Weight, "Weight", "number", Some("Kilograms"))}
            {input(Field::Code, "Barcode", "number", Some("Numeric"))}
            {input(
                Field::Acquisition,
                "Acquisition date",
                "date",
                Some(props.acquisition_note.as_str()),
            )}
        </div>
    }
}
