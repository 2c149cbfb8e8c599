use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod reveal;
mod components {
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

fn nav_scrolled(offset_px: f64) -> bool {
    offset_px > config::NAV_SCROLL_THRESHOLD_PX
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
struct MenuState {
    open: bool,
}

impl MenuState {
    fn is_open(self) -> bool {
        self.open
    }

    fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Closes the drawer. The flag reports whether this call did the
    /// closing, so selecting a link while already closed changes nothing.
    fn close(self) -> (Self, bool) {
        (Self { open: false }, self.open)
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let scroll_window = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(nav_scrolled(offset));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Lock background scrolling while the drawer is open.
    use_effect_with_deps(
        move |open: &bool| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let _ = if *open {
                    body.style().set_property("overflow", "hidden")
                } else {
                    body.style().remove_property("overflow").map(|_| ())
                };
            }
            || ()
        },
        menu.is_open(),
    );

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set((*menu).toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let (next, closed) = (*menu).close();
            if closed {
                menu.set(next);
            }
        })
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-inner">
                <div class="logo">{"⚡ Fit Physics"}</div>
                <ul class="nav-links">
                    { for content::NAV_LINKS.iter().map(|link| html! {
                        <li key={link.href}><a href={link.href}>{link.label}</a></li>
                    }) }
                </ul>
                <button class="nav-cta">{"Start Free"}</button>
                <button
                    class={classes!("burger-menu", menu.is_open().then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle navigation"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div
                class={classes!("drawer-backdrop", menu.is_open().then(|| "open"))}
                onclick={close_menu.clone()}
            ></div>
            <div class={classes!("mobile-drawer", menu.is_open().then(|| "open"))}>
                <ul class="drawer-links">
                    { for content::NAV_LINKS.iter().map(|link| html! {
                        <li key={link.href}>
                            <a href={link.href} onclick={close_menu.clone()}>{link.label}</a>
                        </li>
                    }) }
                </ul>
                <button class="drawer-cta" onclick={close_menu.clone()}>{"Start Free"}</button>
            </div>
            <style>
                {r#"
.navbar {
    position: fixed; top: 0; width: 100%; z-index: 1000;
    background: rgba(10,14,26,0.75);
    backdrop-filter: blur(18px);
    border-bottom: 1px solid rgba(0,212,255,0.08);
    transition: background 0.4s;
}
.navbar.scrolled { background: rgba(10,14,26,0.95); }

.nav-inner {
    padding: 18px 40px;
    display: flex; align-items: center; justify-content: space-between;
}

.logo {
    font-family: 'Syne', sans-serif;
    font-weight: 800; font-size: 1.45rem;
    background: linear-gradient(135deg, var(--accent), var(--accent2));
    -webkit-background-clip: text; -webkit-text-fill-color: transparent;
    letter-spacing: -0.5px;
}

.nav-links { display: flex; gap: 28px; list-style: none; }
.nav-links a {
    color: var(--text-dim); text-decoration: none; font-size: 0.85rem;
    font-weight: 500; letter-spacing: 0.3px; transition: color 0.3s;
}
.nav-links a:hover { color: var(--accent); }

.nav-cta {
    background: var(--accent); color: #0a0e1a;
    border: none; padding: 9px 22px; border-radius: 50px;
    font-weight: 600; font-size: 0.82rem; cursor: pointer;
    letter-spacing: 0.4px; transition: box-shadow 0.3s, transform 0.2s;
}
.nav-cta:hover { box-shadow: 0 0 18px var(--glow); transform: scale(1.04); }

.burger-menu {
    display: none;
    flex-direction: column; gap: 5px;
    background: none; border: none; cursor: pointer; padding: 6px;
}
.burger-menu span {
    width: 24px; height: 2px; border-radius: 2px;
    background: var(--text); transition: transform 0.3s, opacity 0.3s;
}
.burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.burger-menu.open span:nth-child(2) { opacity: 0; }
.burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.drawer-backdrop {
    display: none;
    position: fixed; inset: 0; z-index: -1;
    background: rgba(10,14,26,0.6);
    opacity: 0; pointer-events: none; transition: opacity 0.3s;
}
.drawer-backdrop.open { opacity: 1; pointer-events: auto; }

.mobile-drawer {
    display: none;
    position: fixed; top: 0; right: 0; height: 100vh; width: min(78vw, 320px);
    background: var(--bg2); border-left: 1px solid rgba(0,212,255,0.1);
    padding: 96px 32px 32px;
    transform: translateX(100%); transition: transform 0.35s ease;
    flex-direction: column; gap: 8px;
}
.mobile-drawer.open { transform: translateX(0); }

.drawer-links { list-style: none; display: flex; flex-direction: column; gap: 4px; }
.drawer-links a {
    display: block; padding: 12px 0;
    color: var(--text); text-decoration: none;
    font-family: 'Syne', sans-serif; font-weight: 600; font-size: 1.05rem;
    border-bottom: 1px solid rgba(255,255,255,0.05);
    transition: color 0.3s;
}
.drawer-links a:hover { color: var(--accent); }

.drawer-cta {
    margin-top: 24px;
    background: var(--accent); color: #0a0e1a;
    border: none; padding: 13px 22px; border-radius: 50px;
    font-weight: 700; font-size: 0.9rem; cursor: pointer;
}

@media (max-width: 900px) {
    .nav-inner { padding: 16px 24px; }
    .nav-links { display: none; }
    .nav-cta { display: none; }
    .burger-menu { display: flex; }
    .drawer-backdrop { display: block; z-index: 1; }
    .mobile-drawer { display: flex; z-index: 2; }
}
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_swaps_background_past_threshold() {
        assert!(!nav_scrolled(0.0));
        assert!(!nav_scrolled(config::NAV_SCROLL_THRESHOLD_PX));
        assert!(nav_scrolled(config::NAV_SCROLL_THRESHOLD_PX + 0.5));
    }

    #[test]
    fn selecting_a_link_closes_the_drawer_exactly_once() {
        let menu = MenuState::default().toggled();
        assert!(menu.is_open());

        let (menu, closed) = menu.close();
        assert!(closed);
        assert!(!menu.is_open());

        // A second link selection is a no-op.
        let (menu, closed) = menu.close();
        assert!(!closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_flips_the_drawer_both_ways() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
    }
}
