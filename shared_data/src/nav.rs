/// The sections the navigation bar can jump to, in page order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
	Home,
	Services,
	About,
	Gallery,
	Contact
}

impl Section {
	pub const ALL: [Self; 5] = [
		Self::Home,
		Self::Services,
		Self::About,
		Self::Gallery,
		Self::Contact
	];

	/// The id of the section's element
	#[must_use]
	pub fn anchor(self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::Services => "services",
			Self::About => "about",
			Self::Gallery => "gallery",
			Self::Contact => "contact"
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Home => "Home",
			Self::Services => "Services",
			Self::About => "About",
			Self::Gallery => "Gallery",
			Self::Contact => "Contact"
		}
	}
}

// past this many pixels, the nav bar goes opaque
pub const SCROLLED_AFTER: f64 = 100.0;
// roughly how tall the fixed nav bar is, so a section counts as active once its top slides under it
pub const NAV_HEIGHT: f64 = 80.0;

#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
	offset > SCROLLED_AFTER
}

/// Which section the page is currently scrolled to, given how far down the page is scrolled and
/// where each section starts. It's whichever section started last above the bottom of the nav bar,
/// or `Home` if none have yet.
#[must_use]
pub fn active_section(offset: f64, anchors: &[(Section, f64)]) -> Section {
	let line = offset + NAV_HEIGHT;

	anchors.iter()
		.filter(|(_, top)| *top <= line)
		.max_by(|(_, a), (_, b)| a.total_cmp(b))
		.map_or(Section::Home, |(section, _)| *section)
}
