use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;

mod booking_modal;
mod contact;
mod fields;
mod footer;
mod home;
mod nav;
mod sections;
mod toast;
mod transport;

// everything lives on the one page, anything else just goes back to it
#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[not_found]
	#[at("/")]
	Home
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> }
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	console_error_panic_hook::set_once();
	yew::Renderer::<Frontend>::new().render();
}
