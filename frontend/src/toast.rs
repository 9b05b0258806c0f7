use gloo_timers::future::TimeoutFuture;
use shared_data::Notice;
use uuid::Uuid;
use yew::prelude::*;

// how long a notice stays up if nobody dismisses it
pub const SHOW_FOR_MS: u32 = 5_000;

/// The notice currently showing, and ways to replace or hide it. Only one is ever up at a time.
#[derive(Clone, PartialEq)]
pub struct Notices {
	pub current: Option<Notice>,
	pub show: Callback<Notice>,
	pub dismiss: Callback<()>
}

#[hook]
pub fn use_notices() -> Notices {
	let current = use_state(|| Option::<Notice>::None);
	// each notice gets a new id, so that the timer of one that's already been replaced doesn't
	// hide its replacement early
	let shown_id = use_mut_ref(Uuid::nil);

	let show_current = current.clone();
	let show = Callback::from(move |notice: Notice| {
		let id = Uuid::new_v4();
		*shown_id.borrow_mut() = id;
		show_current.set(Some(notice));

		let shown_id = shown_id.clone();
		let current = show_current.clone();
		wasm_bindgen_futures::spawn_local(async move {
			TimeoutFuture::new(SHOW_FOR_MS).await;

			if *shown_id.borrow() == id {
				current.set(None);
			}
		});
	});

	let dismiss_current = current.clone();
	let dismiss = Callback::from(move |()| dismiss_current.set(None));

	Notices {
		current: (*current).clone(),
		show,
		dismiss
	}
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
	pub notice: Option<Notice>,
	pub on_dismiss: Callback<()>
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
	let Some(notice) = &props.notice else {
		return html! {};
	};

	let on_dismiss = props.on_dismiss.clone();

	html! {
		<>
			<style>
			{
				"
				#toast {
					position: fixed;
					bottom: 24px;
					right: 24px;
					z-index: 100;
					max-width: 380px;
					padding: 16px 44px 16px 20px;
					border-radius: 12px;
					background-color: white;
					border: 1px solid var(--spa-beige);
					box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
				}
				#toast.destructive {
					background-color: var(--error);
					border-color: var(--error);
				}
				#toast.destructive * {
					color: white;
				}
				#toast h4 {
					margin: 0 0 4px 0;
				}
				#toast p {
					margin: 0;
					font-size: 0.9rem;
				}
				#toast button {
					position: absolute;
					top: 8px;
					right: 8px;
					background: none;
					border: none;
					padding: 4px 8px;
					color: var(--secondary-text);
				}
				"
			}
			</style>
			<div id="toast" role="status" class={ classes!(notice.destructive.then_some("destructive")) }>
				<h4>{ notice.title }</h4>
				<p>{ &notice.description }</p>
				<button aria-label="Dismiss" onclick={ move |_| on_dismiss.emit(()) }>{ "✕" }</button>
			</div>
		</>
	}
}
