//! Fade/slide-in wrapper for content blocks, driven by a viewport
//! intersection watch.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::reveal::RevealController;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Fraction of the block that must be visible before it fades in.
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    /// Transition delay in milliseconds, for staggering card grids.
    #[prop_or_default]
    pub delay_ms: u32,
}

fn observation_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Wraps its children in a `.reveal` block that transitions to
/// `.reveal.visible` the first time enough of it scrolls into the viewport.
/// The transition runs once per mount: the underlying latch never resets,
/// and the watch is dropped as soon as it fires. If the environment has no
/// `IntersectionObserver`, the block renders visible from the start.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        let threshold = props.threshold;
        use_effect_with_deps(
            move |_| -> Box<dyn FnOnce()> {
                if !observation_supported() {
                    warn!("viewport observation unavailable, revealing content immediately");
                    let mut controller = RevealController::degraded();
                    let handle = controller.register(threshold);
                    if controller.is_revealed(handle) {
                        visible.set(true);
                    }
                    return Box::new(|| ());
                }

                let element = match node.cast::<Element>() {
                    Some(element) => element,
                    None => return Box::new(|| ()),
                };

                let controller = Rc::new(RefCell::new(RevealController::new()));
                let handle = controller.borrow_mut().register(threshold);
                let observer: Rc<RefCell<Option<IntersectionObserver>>> =
                    Rc::new(RefCell::new(None));

                let callback = {
                    let controller = controller.clone();
                    let observer = observer.clone();
                    let visible = visible.clone();
                    Closure::wrap(Box::new(
                        move |entries: js_sys::Array, _: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                // is_intersecting is the browser's own crossing
                                // test; at the crossing instant the reported
                                // ratio can still round to just under the
                                // configured threshold.
                                let ratio = if entry.is_intersecting() {
                                    entry.intersection_ratio().max(threshold)
                                } else {
                                    entry.intersection_ratio()
                                };
                                if controller.borrow_mut().update(handle, ratio) {
                                    visible.set(true);
                                    if let Some(observer) = observer.borrow().as_ref() {
                                        observer.disconnect();
                                    }
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
                };

                let mut options = IntersectionObserverInit::new();
                options.threshold(&JsValue::from_f64(threshold));
                match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(created) => {
                        created.observe(&element);
                        *observer.borrow_mut() = Some(created);
                    }
                    Err(err) => {
                        warn!("failed to install viewport watch: {:?}", err);
                        visible.set(true);
                    }
                }

                Box::new(move || {
                    controller.borrow_mut().unregister(handle);
                    if let Some(observer) = observer.borrow().as_ref() {
                        observer.disconnect();
                    }
                    drop(callback);
                })
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));
    html! {
        <div ref={node} class={classes!("reveal", (*visible).then(|| "visible"))} style={style}>
            { for props.children.iter() }
        </div>
    }
}
