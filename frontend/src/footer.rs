use shared_data::{nav::Section, Service};
use yew::prelude::*;

use crate::transport::current_year;

const SOCIALS: [&str; 4] = ["Facebook", "Instagram", "Twitter", "YouTube"];

#[function_component(Footer)]
pub fn footer() -> Html {
	html! {
		<>
			<style>
			{
				"
				footer {
					background-color: var(--spa-primary);
					padding: 64px 0 32px 0;
				}
				footer * {
					color: white;
				}
				#footer-columns {
					display: grid;
					grid-template-columns: 2fr 1fr 1fr;
					gap: 32px;
				}
				@media (max-width: 800px) {
					#footer-columns {
						grid-template-columns: 1fr;
					}
				}
				#footer-brand {
					font-family: \"Playfair Display\", Georgia, serif;
					font-size: 1.6rem;
					font-weight: 600;
				}
				footer p, footer li a {
					color: rgba(255, 255, 255, 0.8);
				}
				footer ul {
					list-style: none;
					padding: 0;
				}
				footer li {
					margin-bottom: 8px;
				}
				footer a {
					text-decoration: none;
				}
				#socials {
					display: flex;
					gap: 16px;
				}
				#copyright {
					border-top: 1px solid rgba(255, 255, 255, 0.2);
					margin-top: 32px;
					padding-top: 32px;
					text-align: center;
				}
				#copyright p {
					color: rgba(255, 255, 255, 0.6);
				}
				"
			}
			</style>
			<footer>
				<div class="container">
					<div id="footer-columns">
						<div>
							<span id="footer-brand">{ "Serenity Spa" }</span>
							<p>{ "Your sanctuary for wellness, beauty, and inner peace. Experience the ultimate in luxury spa treatments and holistic wellness." }</p>
							<div id="socials">
							{
								SOCIALS.into_iter().map(|name| html! {
									<a href="#" aria-label={ name }>{ name }</a>
								}).collect::<Html>()
							}
							</div>
						</div>
						<div>
							<h4>{ "Quick Links" }</h4>
							<ul>
							{
								Section::ALL.into_iter().map(|section| html! {
									<li><a href={ format!("#{}", section.anchor()) }>{ section.label() }</a></li>
								}).collect::<Html>()
							}
							</ul>
						</div>
						<div>
							<h4>{ "Services" }</h4>
							<ul>
							{
								Service::ALL.into_iter().map(|service| html! {
									<li><a href="#services">{ service.name() }</a></li>
								}).collect::<Html>()
							}
							</ul>
						</div>
					</div>
					<div id="copyright">
						<p>{ format!("© {} Serenity Spa. All rights reserved. | Privacy Policy | Terms of Service", current_year()) }</p>
					</div>
				</div>
			</footer>
		</>
	}
}
