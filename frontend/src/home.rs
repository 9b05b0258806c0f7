use yew::prelude::*;

use crate::{
	booking_modal::BookingModal,
	contact::ContactSection,
	footer::Footer,
	nav::Navigation,
	sections::{About, Gallery, Hero, Services, Testimonials},
	toast::{use_notices, Toast},
};

#[function_component(Home)]
pub fn home() -> Html {
	let booking_open = use_state(|| false);
	let notices = use_notices();

	let open_booking = {
		let booking_open = booking_open.clone();
		Callback::from(move |()| booking_open.set(true))
	};

	let close_booking = {
		let booking_open = booking_open.clone();
		Callback::from(move |()| booking_open.set(false))
	};

	html! {
		<>
			<style>{ shared_data::BASE_STYLE }</style>
			<Navigation on_book={ open_booking.clone() } />
			<main>
				<Hero on_book={ open_booking } />
				<Services />
				<About />
				<Gallery />
				<Testimonials />
				<ContactSection on_notice={ notices.show.clone() } />
			</main>
			<Footer />
			<BookingModal open={ *booking_open } on_close={ close_booking } on_notice={ notices.show } />
			<Toast notice={ notices.current } on_dismiss={ notices.dismiss } />
		</>
	}
}
