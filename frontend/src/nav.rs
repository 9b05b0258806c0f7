use gloo_console::log;
use shared_data::nav::{self, Section};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProps {
	pub on_book: Callback<()>
}

// where each section starts, relative to the top of the page
fn section_tops(window: &Window) -> Vec<(Section, f64)> {
	let Some(doc) = window.document() else {
		return Vec::new();
	};

	Section::ALL.into_iter()
		.filter_map(|section| doc.get_element_by_id(section.anchor())
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
			.map(|el| (section, f64::from(el.offset_top())))
		)
		.collect()
}

#[function_component(Navigation)]
pub fn navigation(props: &NavProps) -> Html {
	// the _eq versions so that every single scroll event doesn't cause a re-render
	let scrolled = use_state_eq(|| false);
	let active = use_state_eq(|| Section::Home);
	let menu_open = use_state(|| false);

	{
		let scrolled = scrolled.clone();
		let active = active.clone();
		use_effect_with((), move |_| {
			let listener = web_sys::window().map(|window| {
				let win = window.clone();
				let on_scroll = Closure::<dyn Fn()>::new(move || {
					let offset = win.scroll_y().unwrap_or_default();
					scrolled.set(nav::is_scrolled(offset));
					active.set(nav::active_section(offset, &section_tops(&win)));
				});

				if let Err(e) = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
					log!("Couldn't listen for scrolling: ", e);
				}

				(window, on_scroll)
			});

			move || if let Some((window, on_scroll)) = listener {
				// the closure gets dropped right after this, so it had better not be called again
				if let Err(e) = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
					log!("Couldn't stop listening for scrolling: ", e);
				}
			}
		});
	}

	let close_menu = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(false))
	};

	let toggle_menu = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
	};

	let book = {
		let on_book = props.on_book.clone();
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| {
			menu_open.set(false);
			on_book.emit(());
		})
	};

	let links = Section::ALL.into_iter().map(|section| html! {
		<a
			href={ format!("#{}", section.anchor()) }
			class={ classes!("nav-link", (*active == section).then_some("active")) }
			onclick={ close_menu.clone() }
		>{ section.label() }</a>
	}).collect::<Html>();

	html! {
		<>
			<style>
			{
				"
				nav {
					position: fixed;
					top: 0;
					width: 100%;
					z-index: 50;
					transition: background-color 0.3s, box-shadow 0.3s;
				}
				nav.scrolled {
					background-color: rgba(255, 255, 255, 0.95);
					box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
				}
				#nav-bar {
					display: flex;
					align-items: center;
					justify-content: space-between;
					height: 80px;
				}
				#brand {
					font-family: \"Playfair Display\", Georgia, serif;
					font-size: 1.6rem;
					font-weight: 600;
					color: var(--spa-primary);
					text-decoration: none;
				}
				#nav-links {
					display: flex;
					align-items: center;
					gap: 28px;
				}
				.nav-link {
					text-decoration: none;
					font-weight: 500;
					color: var(--main-text);
					transition: color 0.3s;
				}
				.nav-link:hover, .nav-link.active {
					color: var(--spa-primary);
				}
				.nav-link.active {
					border-bottom: 2px solid var(--spa-gold);
				}
				#menu-toggle {
					display: none;
					background: none;
					border: none;
					color: var(--spa-primary);
					font-size: 1.5rem;
				}
				@media (max-width: 800px) {
					#menu-toggle {
						display: block;
					}
					#nav-links {
						display: none;
					}
					#nav-links.open {
						display: flex;
						flex-direction: column;
						position: absolute;
						top: 80px;
						left: 0;
						right: 0;
						padding: 16px;
						background-color: white;
						box-shadow: 0 8px 12px rgba(0, 0, 0, 0.08);
					}
				}
				"
			}
			</style>
			<nav class={ classes!(scrolled.then_some("scrolled")) }>
				<div id="nav-bar" class="container">
					<a id="brand" href="#home" onclick={ close_menu.clone() }>{ "Serenity Spa" }</a>
					<button id="menu-toggle" aria-label="Toggle menu" onclick={ toggle_menu }>
						{ if *menu_open { "✕" } else { "☰" } }
					</button>
					<div id="nav-links" class={ classes!(menu_open.then_some("open")) }>
						{ links }
						<button onclick={ book }>{ "Book Now" }</button>
					</div>
				</div>
			</nav>
		</>
	}
}
