use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::product_form::Field;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub field: Field,
    pub label: String,
    /// HTML input type: "text", "number", "date".
    #[prop_or("text".to_string())]
    pub input_type: String,
    /// Optional help text under the input, e.g. a unit.
    #[prop_or_default]
    pub note: Option<String>,
    /// Render a textarea instead of a single-line input.
    #[prop_or_default]
    pub textarea: bool,
    pub value: String,
    /// Inline validation error from the last submit attempt.
    #[prop_or_default]
    pub error: Option<&'static str>,
    pub on_change: Callback<(Field, String)>,
}

/// Presentational input: label + typed input + optional note, bound by
/// field name. Values propagate on input; validation only happens at
/// submit time, so typing is never interrupted.
#[function_component]
pub fn TextInput(props: &Props) -> Html {
    let field = props.field;
    let name = field.html_name();

    let oninput = {
        let on_change = props.on_change.clone();
        let textarea = props.textarea;
        Callback::from(move |e: InputEvent| {
            let value = if textarea {
                e.target_unchecked_into::<HtmlTextAreaElement>().value()
            } else {
                e.target_unchecked_into::<HtmlInputElement>().value()
            };
            on_change.emit((field, value));
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                       dark:focus:ring-neutral-400 dark:focus:border-neutral-400";

    html! {
        <div>
            <label
                for={name}
                class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
            >
                {&props.label}
            </label>
            {if props.textarea {
                html! {
                    <textarea
                        id={name}
                        name={name}
                        value={props.value.clone()}
                        {oninput}
                        rows="3"
                        class={input_class}
                    />
                }
            } else {
                html! {
                    <input
                        id={name}
                        name={name}
                        type={props.input_type.clone()}
                        value={props.value.clone()}
                        {oninput}
                        class={input_class}
                    />
                }
            }}
            {if let Some(note) = &props.note {
                html! {
                    <p class="text-xs text-neutral-500 dark:text-neutral-400 mt-1">
                        {note}
                    </p>
                }
            } else {
                html! {}
            }}
            {if let Some(error) = props.error {
                html! {
                    <p class="text-sm text-red-700 dark:text-red-400 mt-1">
                        {error}
                    </p>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
