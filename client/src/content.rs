//! Static studio copy: services, artists, contact details, and hours.
//!
//! Kept as data so the home page, footer, and booking form's artist picker
//! render from one source.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::net::types::ServiceKind;

pub const STUDIO_NAME: &str = "Ink Over Matter";
pub const TAGLINE: &str = "Premium custom tattoos and illustrations by award-winning artists";
pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "info@inkovermatter.com";
pub const ADDRESS_LINES: [&str; 3] =
    ["Vruddhi Complex, 25, 6th Cross Rd", "HAL 3rd Stage, Kodihalli", "Bengaluru, Karnataka 560008"];
pub const SHORT_ADDRESS: &str = "Kodihalli, Bengaluru, Karnataka 560008";

pub const HOURS: [(&str, &str); 6] = [
    ("Tuesday", "11AM-8PM"),
    ("Wednesday", "11AM-8PM"),
    ("Thursday", "11AM-8PM"),
    ("Friday", "11AM-8PM"),
    ("Saturday", "11AM-8PM"),
    ("Sunday-Monday", "Closed"),
];

pub const SOCIAL_LINKS: [(&str, &str); 2] = [
    ("Facebook", "https://www.facebook.com/InkOverMatter"),
    ("Instagram", "https://www.instagram.com/inkovermatter"),
];

/// Home-page section anchors, in page order.
pub const SECTIONS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Services", "#services"),
    ("Artists", "#artists"),
    ("Gallery", "#gallery"),
    ("Booking", "#booking"),
];

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub kind: ServiceKind,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        kind: ServiceKind::Custom,
        icon: "✒",
        description: "Personalized designs created specifically for you, tailored to your vision and preferences.",
    },
    Service {
        kind: ServiceKind::Coverup,
        icon: "↻",
        description: "Transform existing tattoos into new designs, hiding the old while creating something beautiful.",
    },
    Service {
        kind: ServiceKind::Blackgrey,
        icon: "◐",
        description: "Stunning monochromatic pieces with depth and detail, from subtle shading to dramatic contrasts.",
    },
    Service {
        kind: ServiceKind::Color,
        icon: "🎨",
        description: "Vibrant, long-lasting color tattoos that pop, using premium inks for the most vivid results.",
    },
    Service {
        kind: ServiceKind::Traditional,
        icon: "⚓",
        description: "Bold lines, bright colors, and classic imagery in the time-honored American traditional style.",
    },
    Service {
        kind: ServiceKind::Art,
        icon: "🖼",
        description: "Commission our artists to create unique illustrations and designs for non-tattoo purposes.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Artist {
    /// Value sent as `artist` in a booking.
    pub slug: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub image: &'static str,
    pub experience: &'static str,
    pub instagram: &'static str,
}

impl Artist {
    #[must_use]
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    #[must_use]
    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram.trim_start_matches('@'))
    }
}

pub static ARTISTS: [Artist; 3] = [
    Artist {
        slug: "anurag",
        name: "Anurag Pradhan",
        specialty: "Neo-Traditional",
        image: "/images/artist1.jpg",
        experience: "12 years",
        instagram: "@anuragpradhan",
    },
    Artist {
        slug: "youn",
        name: "Youn Pradhan",
        specialty: "Neo-Traditional",
        image: "/images/artist2.jpg",
        experience: "8 years",
        instagram: "@younpradhan29851",
    },
    Artist {
        slug: "jamie",
        name: "Jamie Wilson",
        specialty: "Japanese",
        image: "/images/artist3.jpg",
        experience: "15 years",
        instagram: "@jamie_irezumi",
    },
];

/// Look up an artist by booking slug.
#[must_use]
pub fn artist_by_slug(slug: &str) -> Option<&'static Artist> {
    ARTISTS.iter().find(|artist| artist.slug == slug)
}
