use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, storage};

/// Hook to access the shared product collection, seeding it from
/// storage once on first mount.
///
/// The seed lands in a later render than the first one, so views
/// holding local editable copies must re-derive them whenever the
/// returned snapshot changes.
#[hook]
pub fn use_products() -> (Rc<State>, Dispatch<State>) {
    let (state, dispatch) = use_store::<State>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            if dispatch.get().loaded {
                return;
            }
            let products = match storage::load_products() {
                Ok(products) => products.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!("failed to load stored products: {e}");
                    Vec::new()
                }
            };
            dispatch.reduce_mut(|s| s.set_products(products));
        });
    }

    (state, dispatch)
}
