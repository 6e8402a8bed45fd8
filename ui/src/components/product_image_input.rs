//! Image selection and preview for the product form.
//!
//! A hidden native file input is opened from the visible affordances:
//! an "Add image" button when no image is set, or the preview itself to
//! replace an existing one. Selected files are read fully and converted
//! to a `data:` URL. Reads are single-shot and not cancellable, so each
//! one carries a monotonically increasing request token and a stale
//! completion never overwrites a newer selection.

use base64::{Engine as _, engine::general_purpose};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The currently rendered image: the record's own image until a
    /// fresh upload finishes converting.
    pub image: Option<String>,
    /// Called with the data URL once a selected file has been read.
    pub on_image_change: Callback<String>,
}

/// Encode file bytes as a data URL using the file's own MIME type.
fn data_url(mime: &str, data: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(data))
}

#[function_component]
pub fn ProductImageInput(props: &Props) -> Html {
    let file_input_ref = use_node_ref();
    let read_token = use_mut_ref(|| 0u64);

    let on_file_select = {
        let on_image_change = props.on_image_change.clone();
        let read_token = read_token.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = match input.files().and_then(|files| files.get(0)) {
                Some(f) => f,
                None => return,
            };
            // Clear the input so re-selecting the identical file still
            // fires a change event next time.
            input.set_value("");

            *read_token.borrow_mut() += 1;
            let token = *read_token.borrow();
            let mime = file.type_();

            let reader = FileReader::new().unwrap();
            let reader_clone = reader.clone();
            let on_image_change = on_image_change.clone();
            let read_token = read_token.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                if *read_token.borrow() != token {
                    // A newer selection superseded this read.
                    return;
                }
                let result = reader_clone.result().unwrap();
                let data = js_sys::Uint8Array::new(&result).to_vec();
                on_image_change.emit(data_url(&mime, &data));
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.read_as_array_buffer(&file).unwrap();
            onload.forget();
        })
    };

    let open_picker = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    html! {
        <div>
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                onchange={on_file_select}
                class="hidden"
            />

            {match props.image.as_deref() {
                Some(image) if !image.is_empty() => html! {
                    <img
                        src={image.to_string()}
                        alt="Product"
                        title="Click to replace the image"
                        onclick={open_picker}
                        class="w-40 h-40 rounded-md object-cover cursor-pointer
                               bg-neutral-100 dark:bg-neutral-700"
                    />
                },
                _ => html! {
                    <button
                        type="button"
                        onclick={open_picker}
                        class="w-40 h-40 border-2 border-dashed
                               border-neutral-300 dark:border-neutral-600
                               rounded-md text-center hover:border-neutral-400
                               dark:hover:border-neutral-500 transition-colors
                               cursor-pointer"
                    >
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {"Add image"}
                        </p>
                    </button>
                },
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::data_url;

    #[test]
    fn test_data_url_carries_mime_and_base64_payload() {
        let url = data_url("image/png", &[0, 1, 2, 255]);
        assert_eq!(url, "data:image/png;base64,AAEC/w==");
    }

    #[test]
    fn test_data_url_falls_back_when_mime_is_unknown() {
        let url = data_url("", b"x");
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }
}
