use shared_data::Service;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
	pub on_book: Callback<()>
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
	let on_book = props.on_book.clone();

	html! {
		<>
			<style>
			{
				"
				#home {
					position: relative;
					min-height: 100vh;
					display: flex;
					align-items: center;
					justify-content: center;
					text-align: center;
					background-image: linear-gradient(135deg, rgba(91, 112, 101, 0.55), rgba(143, 169, 152, 0.3), transparent),
						url('https://images.unsplash.com/photo-1540555700478-4be289fbecef?auto=format&fit=crop&w=1920&h=1080');
					background-size: cover;
					background-position: center;
				}
				#home h1 {
					color: white;
					font-size: 4rem;
					margin: 0 0 24px 0;
				}
				#home h1 span {
					display: block;
					color: var(--spa-beige);
				}
				#home p {
					color: rgba(255, 255, 255, 0.9);
					font-size: 1.4rem;
					max-width: 640px;
					margin: 0 auto 32px auto;
				}
				#hero-buttons {
					display: flex;
					flex-wrap: wrap;
					gap: 16px;
					justify-content: center;
				}
				#hero-buttons .button {
					padding: 14px 32px;
					font-size: 1.1rem;
					text-decoration: none;
				}
				#hero-buttons .outline {
					border: 2px solid white;
					background: none;
					color: white;
				}
				"
			}
			</style>
			<section id="home">
				<div class="container">
					<h1>{ "Discover Your" }<span>{ "Inner Peace" }</span></h1>
					<p>{ "Escape the ordinary and immerse yourself in a sanctuary of tranquility where wellness meets luxury." }</p>
					<div id="hero-buttons">
						<button class="button" onclick={ move |_| on_book.emit(()) }>{ "Book Your Experience" }</button>
						<a class="button outline" href="#services">{ "Explore Services" }</a>
					</div>
				</div>
			</section>
		</>
	}
}

#[function_component(Services)]
pub fn services() -> Html {
	html! {
		<>
			<style>
			{
				"
				.service-card img {
					width: 100%;
					height: 240px;
					object-fit: cover;
				}
				.service-details {
					padding: 24px;
				}
				.service-details h3 {
					margin: 0 0 12px 0;
				}
				.service-details p {
					color: var(--secondary-text);
				}
				.service-footer {
					display: flex;
					justify-content: space-between;
				}
				.service-price {
					color: var(--spa-gold);
					font-weight: 600;
					font-size: 1.1rem;
				}
				"
			}
			</style>
			<section id="services">
				<div class="container">
					<div class="section-title">
						<h2>{ "Our Signature Services" }</h2>
						<p>{ "Indulge in our carefully curated treatments designed to restore balance, rejuvenate your spirit, and awaken your senses." }</p>
					</div>
					<div class="grid">
					{
						Service::ALL.into_iter().map(|service| html! {
							<div class="card service-card" id={ format!("service-{}", service.id()) }>
								<img src={ service.image() } alt={ service.name() } />
								<div class="service-details">
									<h3>{ service.name() }</h3>
									<p>{ service.description() }</p>
									<div class="service-footer">
										<span class="service-price">{ format!("${}", service.price()) }</span>
										<span class="service-duration">{ format!("{} min", service.minutes()) }</span>
									</div>
								</div>
							</div>
						}).collect::<Html>()
					}
					</div>
				</div>
			</section>
		</>
	}
}

const STATS: [(&str, &str); 4] = [
	("10+", "Years Experience"),
	("5000+", "Happy Clients"),
	("50+", "Treatments"),
	("15+", "Awards Won"),
];

#[function_component(About)]
pub fn about() -> Html {
	html! {
		<>
			<style>
			{
				"
				#about {
					background-color: var(--spa-beige);
				}
				#about-content {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
					gap: 48px;
					align-items: center;
				}
				#about h2 {
					font-size: 2.8rem;
					margin-top: 0;
				}
				#about p {
					font-size: 1.1rem;
					line-height: 1.7;
				}
				#stats {
					display: grid;
					grid-template-columns: 1fr 1fr;
					gap: 24px;
					text-align: center;
				}
				.stat-value {
					font-size: 2rem;
					font-weight: 700;
					color: var(--spa-primary);
				}
				#about img {
					width: 100%;
					border-radius: 16px;
					box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
				}
				"
			}
			</style>
			<section id="about">
				<div id="about-content" class="container">
					<div>
						<h2>{ "Where Wellness Meets Luxury" }</h2>
						<p>{ "For over a decade, Serenity Spa has been a haven of tranquility, offering world-class treatments in an atmosphere of pure serenity. Our expert therapists combine ancient healing traditions with modern wellness techniques." }</p>
						<p>{ "Every detail has been carefully crafted to ensure your journey to wellness is both transformative and memorable. From our sustainably sourced products to our award-winning team, we're committed to your complete well-being." }</p>
						<div id="stats">
						{
							STATS.iter().map(|&(value, label)| html! {
								<div>
									<div class="stat-value">{ value }</div>
									<div>{ label }</div>
								</div>
							}).collect::<Html>()
						}
						</div>
					</div>
					<img
						src="https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?auto=format&fit=crop&w=800&h=600"
						alt="Our Professional Spa Team"
					/>
				</div>
			</section>
		</>
	}
}

const GALLERY: [(&str, &str); 6] = [
	("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?auto=format&fit=crop&w=600&h=400", "Spa Reception Area"),
	("https://images.unsplash.com/photo-1600334129128-685c5582fd35?auto=format&fit=crop&w=600&h=400", "Treatment Room"),
	("https://images.unsplash.com/photo-1516975080664-ed2fc6a32937?auto=format&fit=crop&w=600&h=400", "Relaxation Lounge"),
	("https://images.unsplash.com/photo-1596462502278-27bfdc403348?auto=format&fit=crop&w=600&h=400", "Spa Products"),
	("https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=600&h=400", "Meditation Garden"),
	("https://images.unsplash.com/photo-1571902943202-507ec2618e8f?auto=format&fit=crop&w=600&h=400", "Hydrotherapy Pool"),
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
	html! {
		<>
			<style>
			{
				"
				#gallery {
					background-color: white;
				}
				.gallery-image {
					overflow: hidden;
					border-radius: 12px;
					box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
				}
				.gallery-image img {
					width: 100%;
					height: 256px;
					object-fit: cover;
					display: block;
					transition: transform 0.3s;
				}
				.gallery-image:hover img {
					transform: scale(1.1);
				}
				"
			}
			</style>
			<section id="gallery">
				<div class="container">
					<div class="section-title">
						<h2>{ "Our Sanctuary" }</h2>
						<p>{ "Step inside our peaceful oasis and discover the elegant spaces designed for your ultimate relaxation." }</p>
					</div>
					<div class="grid">
					{
						GALLERY.iter().map(|&(src, alt)| html! {
							<div class="gallery-image">
								<img src={ src } alt={ alt } />
							</div>
						}).collect::<Html>()
					}
					</div>
				</div>
			</section>
		</>
	}
}

struct Testimonial {
	content: &'static str,
	name: &'static str,
	location: &'static str
}

const TESTIMONIALS: [Testimonial; 3] = [
	Testimonial {
		content: "The hot stone massage was absolutely divine. The ambiance, the skilled therapists, and the attention to detail made this the most relaxing experience I've ever had.",
		name: "Sarah Johnson",
		location: "Los Angeles, CA"
	},
	Testimonial {
		content: "My couples massage with my partner was the perfect anniversary gift. The private suite was beautiful and the synchronized massage was incredibly relaxing.",
		name: "Michael Chen",
		location: "San Francisco, CA"
	},
	Testimonial {
		content: "The facial treatment was transformative! My skin has never looked better. The products they use are top-quality and the results speak for themselves.",
		name: "Emma Rodriguez",
		location: "Miami, FL"
	},
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
	html! {
		<>
			<style>
			{
				"
				.testimonial {
					padding: 32px;
				}
				.stars {
					color: var(--spa-gold);
					letter-spacing: 2px;
				}
				.testimonial blockquote {
					font-style: italic;
					line-height: 1.6;
					margin: 16px 0 24px 0;
				}
				.testimonial-name {
					font-weight: 600;
					color: var(--spa-primary);
				}
				.testimonial-location {
					font-size: 0.875rem;
					color: var(--secondary-text);
				}
				"
			}
			</style>
			<section id="testimonials">
				<div class="container">
					<div class="section-title">
						<h2>{ "What Our Guests Say" }</h2>
						<p>{ "Discover why thousands of guests choose Serenity Spa for their wellness journey." }</p>
					</div>
					<div class="grid">
					{
						TESTIMONIALS.iter().map(|t| html! {
							<div class="card testimonial">
								<div class="stars">{ "★★★★★" }</div>
								<blockquote>{ format!("\"{}\"", t.content) }</blockquote>
								<div class="testimonial-name">{ t.name }</div>
								<div class="testimonial-location">{ t.location }</div>
							</div>
						}).collect::<Html>()
					}
					</div>
				</div>
			</section>
		</>
	}
}
