//! Artist profile card linking to Instagram and the booking form.

use leptos::prelude::*;

use crate::content::Artist;

#[component]
pub fn ArtistCard(artist: &'static Artist) -> impl IntoView {
    view! {
        <article class="card artist-card">
            <div class="artist-card__portrait">
                <img src=artist.image alt=artist.name loading="lazy"/>
                <div class="artist-card__heading">
                    <h3>{artist.name}</h3>
                    <p>{artist.specialty}</p>
                </div>
            </div>
            <div class="artist-card__body">
                <div class="artist-card__meta">
                    <span>{artist.experience} " experience"</span>
                    <a href=artist.instagram_url() target="_blank" rel="noopener noreferrer">
                        {artist.instagram}
                    </a>
                </div>
                <a class="btn btn--primary artist-card__book" href="#booking">
                    "Book with " {artist.first_name()}
                </a>
            </div>
        </article>
    }
}
