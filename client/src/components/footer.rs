//! Site footer: contact details, hours, and social links.

use leptos::prelude::*;

use crate::content::{ADDRESS_LINES, EMAIL, HOURS, PHONE, SOCIAL_LINKS, STUDIO_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <section>
                    <h4>{STUDIO_NAME}</h4>
                    <address>
                        {ADDRESS_LINES.iter().map(|line| view! { <span>{*line}</span><br/> }).collect_view()}
                    </address>
                    <p><a href=format!("tel:{PHONE}")>{PHONE}</a></p>
                    <p><a href=format!("mailto:{EMAIL}")>{EMAIL}</a></p>
                </section>
                <section>
                    <h4>"Hours"</h4>
                    <dl class="footer__hours">
                        {HOURS
                            .iter()
                            .map(|(day, hours)| view! { <dt>{*day}</dt><dd>{*hours}</dd> })
                            .collect_view()}
                    </dl>
                </section>
                <section>
                    <h4>"Follow"</h4>
                    <ul class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(name, url)| {
                                view! {
                                    <li>
                                        <a href=*url target="_blank" rel="noopener noreferrer">{*name}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
            <p class="footer__copy">"© " {STUDIO_NAME} ". All rights reserved."</p>
        </footer>
    }
}
