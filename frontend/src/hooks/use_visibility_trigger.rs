use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fires `on_visible` whenever the sentinel node crosses into the viewport
/// of `root` (or the window when `root` is `None`) while `armed` is true.
///
/// The observer is torn down on every dependency change and on unmount, so
/// no callback can fire after the owning component is gone. When the
/// IntersectionObserver API is unavailable (non-browser contexts) the hook
/// is a no-op.
#[hook]
pub fn use_visibility_trigger(
    sentinel: NodeRef,
    root: Option<NodeRef>,
    threshold: f64,
    armed: bool,
    on_visible: Callback<()>,
) {
    use_effect_with((sentinel, root, armed), move |(sentinel, root, armed)| {
        let mut teardown: Option<(IntersectionObserver, Element, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)> = None;

        if *armed && observer_supported() {
            if let Some(target) = sentinel.cast::<Element>() {
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, _observer: IntersectionObserver| {
                        let intersecting = entries
                            .get(0)
                            .dyn_into::<IntersectionObserverEntry>()
                            .map(|entry| entry.is_intersecting())
                            .unwrap_or(false);
                        if intersecting {
                            on_visible.emit(());
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(threshold));
                if let Some(root_element) = root.as_ref().and_then(|node| node.cast::<Element>()) {
                    options.set_root(Some(&root_element));
                }

                if let Ok(observer) =
                    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                {
                    observer.observe(&target);
                    teardown = Some((observer, target, callback));
                }
            }
        }

        move || {
            if let Some((observer, target, callback)) = teardown {
                observer.unobserve(&target);
                observer.disconnect();
                drop(callback);
            }
        }
    });
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
