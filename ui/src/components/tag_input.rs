use payloads::MAX_CATEGORY_TAGS;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Append a tag to the working list, enforcing the cap and ignoring
/// blank or duplicate entries. Returns `None` when nothing changes.
pub fn push_tag(tags: &[String], raw: &str) -> Option<Vec<String>> {
    let tag = raw.trim();
    if tag.is_empty()
        || tags.len() >= MAX_CATEGORY_TAGS
        || tags.iter().any(|t| t == tag)
    {
        return None;
    }
    let mut next = tags.to_vec();
    next.push(tag.to_string());
    Some(next)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tags: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

/// Bounded tag editor: chips with remove buttons plus an entry field.
/// Enter adds the entry as a tag, up to [`MAX_CATEGORY_TAGS`].
#[function_component]
pub fn TagInput(props: &Props) -> Html {
    let entry_ref = use_node_ref();

    let on_keydown = {
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        let entry_ref = entry_ref.clone();

        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            // Keep Enter from submitting the surrounding form.
            e.prevent_default();

            let input: HtmlInputElement = entry_ref.cast().unwrap();
            if let Some(next) = push_tag(&tags, &input.value()) {
                input.set_value("");
                on_change.emit(next);
            }
        })
    };

    html! {
        <div>
            <div class="flex flex-wrap items-center gap-2 px-3 py-2 border
                        border-neutral-300 dark:border-neutral-600 rounded-md
                        shadow-sm bg-white dark:bg-neutral-700">
                {props.tags.iter().enumerate().map(|(idx, tag)| {
                    let on_remove = {
                        let tags = props.tags.clone();
                        let on_change = props.on_change.clone();
                        Callback::from(move |_| {
                            let mut next = tags.clone();
                            next.remove(idx);
                            on_change.emit(next);
                        })
                    };

                    html! {
                        <span
                            key={tag.clone()}
                            class="inline-flex items-center gap-1 px-2 py-1 rounded
                                   text-sm bg-neutral-100 dark:bg-neutral-600
                                   text-neutral-800 dark:text-neutral-100"
                        >
                            {tag}
                            <button
                                type="button"
                                onclick={on_remove}
                                title="Remove tag"
                                class="text-neutral-500 hover:text-neutral-700
                                       dark:text-neutral-300 dark:hover:text-neutral-100"
                            >
                                {"×"}
                            </button>
                        </span>
                    }
                }).collect::<Html>()}
                <input
                    ref={entry_ref}
                    type="text"
                    onkeydown={on_keydown}
                    placeholder="Press enter to add..."
                    disabled={props.tags.len() >= MAX_CATEGORY_TAGS}
                    class="flex-1 min-w-[8rem] bg-transparent text-sm
                           text-neutral-900 dark:text-neutral-100
                           focus:outline-none disabled:opacity-50"
                />
            </div>
            <p class="text-xs text-neutral-500 dark:text-neutral-400 mt-1">
                {format!("{}/{} tags", props.tags.len(), MAX_CATEGORY_TAGS)}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_push_tag_appends_in_order() {
        let current = tags(&["tools"]);
        let next = push_tag(&current, "workshop").unwrap();
        assert_eq!(next, tags(&["tools", "workshop"]));
    }

    #[test]
    fn test_push_tag_trims_and_ignores_blank() {
        assert_eq!(push_tag(&[], "  garage "), Some(tags(&["garage"])));
        assert_eq!(push_tag(&[], "   "), None);
    }

    #[test]
    fn test_push_tag_ignores_duplicates() {
        let current = tags(&["tools"]);
        assert_eq!(push_tag(&current, "tools"), None);
    }

    #[test]
    fn test_seventh_tag_is_rejected() {
        let current = tags(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(current.len(), MAX_CATEGORY_TAGS);
        assert_eq!(push_tag(&current, "g"), None);
    }
}
