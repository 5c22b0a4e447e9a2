//! Landing page: parallax hero, studio sections, featured work, booking.

use leptos::prelude::*;

use crate::components::artist_card::ArtistCard;
use crate::components::booking_form::BookingForm;
use crate::components::footer::Footer;
use crate::components::gallery_grid::GalleryGrid;
use crate::components::navbar::Navbar;
use crate::components::service_card::ServiceCard;
use crate::content::{ARTISTS, SERVICES, SHORT_ADDRESS, STUDIO_NAME, TAGLINE};
use crate::state::gallery::{GalleryState, featured_work};
use crate::state::scroll::HeroParallax;
use crate::util::dom::{track_scroll, window_height};

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = RwSignal::new(GalleryState::with_items(featured_work()));
    let scroll_y = RwSignal::new(0.0_f64);

    track_scroll(move |y| scroll_y.set(y));

    let hero = move || HeroParallax::at(scroll_y.get(), window_height());

    view! {
        <Navbar/>
        <main class="home">
            <section class="hero">
                <div class="hero__background" style=move || hero().background_style()></div>
                <div class="hero__content">
                    <h1 class="sr-only">"Ink Over Matter - Skin Art & Illustrations"</h1>
                    <img class="hero__logo" src="/images/logo.png" alt=STUDIO_NAME style=move || hero().logo_style()/>
                    <p class="hero__tagline">{TAGLINE}</p>
                    <div class="hero__actions">
                        <a class="btn btn--primary" href="#booking">"Book Appointment"</a>
                        <a class="btn btn--ghost" href="#gallery">"View Our Work"</a>
                    </div>
                </div>
            </section>

            <div class="marquee" aria-hidden="true">
                <span>"SKIN ART • CUSTOM DESIGNS • TATTOOS • ILLUSTRATIONS • "</span>
                <span>"SKIN ART • CUSTOM DESIGNS • TATTOOS • ILLUSTRATIONS • "</span>
            </div>

            <section id="about" class="section section--alt">
                <h2>"About The Studio"</h2>
                <div class="about">
                    <div>
                        <p>
                            "Founded in 2010, Ink Over Matter has established itself as a premier destination for custom tattoos and fine art. Our team of skilled artists specializes in various styles, from traditional to contemporary, ensuring that each piece is a unique work of art."
                        </p>
                        <p>
                            "We pride ourselves on maintaining the highest standards of hygiene and safety, using only premium equipment and inks to deliver exceptional results that stand the test of time."
                        </p>
                        <ul class="about__facts">
                            <li>{SHORT_ADDRESS}</li>
                            <li>"Tue-Sat: 11AM-8PM"</li>
                        </ul>
                    </div>
                    <img class="about__image" src="/images/studio.jpg" alt="Ink Over Matter studio interior" loading="lazy"/>
                </div>
            </section>

            <section id="services" class="section">
                <h2>"Our Services"</h2>
                <p class="section__lead">"We offer a wide range of tattoo styles and services to bring your vision to life"</p>
                <div class="card-grid">
                    {SERVICES.into_iter().map(|service| view! { <ServiceCard service/> }).collect_view()}
                </div>
            </section>

            <section id="artists" class="section section--alt">
                <h2>"Meet Our Artists"</h2>
                <p class="section__lead">"Our team of talented professionals brings years of experience and passion to every piece"</p>
                <div class="card-grid">
                    {ARTISTS.iter().map(|artist| view! { <ArtistCard artist/> }).collect_view()}
                </div>
            </section>

            <section id="gallery" class="section">
                <h2>"Our Work"</h2>
                <p class="section__lead">"Browse our portfolio of custom tattoos and illustrations"</p>
                <GalleryGrid state=featured/>
                <div class="section__more">
                    <a class="btn btn--ghost" href="/gallery">"View Full Gallery"</a>
                </div>
            </section>

            <section id="booking" class="section section--alt">
                <h2>"Book Your Appointment"</h2>
                <p class="section__lead">"Start your tattoo journey with a consultation"</p>
                <div class="booking">
                    <BookingForm/>
                </div>
            </section>
        </main>
        <Footer/>
    }
}
