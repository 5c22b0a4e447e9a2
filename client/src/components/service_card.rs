use leptos::prelude::*;

use crate::content::Service;

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <article class="card service-card">
            <header class="service-card__header">
                <span class="service-card__icon" aria-hidden="true">{service.icon}</span>
                <h3>{service.kind.label()}</h3>
            </header>
            <p class="service-card__description">{service.description}</p>
        </article>
    }
}
