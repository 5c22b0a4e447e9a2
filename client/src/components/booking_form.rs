//! Appointment request form with inline validation and automatic retry.

use leptos::prelude::*;

use crate::content::ARTISTS;
use crate::net::types::{BookingRequest, ServiceKind, format_calendar_date};
use crate::state::booking::{BookingField, BookingPhase, BookingState, SubmitRefused, SubmitTicket};
use crate::util::date::today;

/// Booking form. Shows a confirmation panel once the studio accepts the
/// request.
#[component]
pub fn BookingForm() -> impl IntoView {
    let state = RwSignal::new(BookingState::default());

    let submitted = move || state.with(|s| s.phase == BookingPhase::Submitted);

    view! {
        <Show when=submitted fallback=move || view! { <BookingFields state/> }>
            <div class="booking-confirmation" role="status">
                <div class="booking-confirmation__icon">"✓"</div>
                <h3>"Booking Request Received"</h3>
                <p>
                    {move || {
                        state
                            .with(|s| s.receipt.as_ref().and_then(|r| r.message.clone()))
                            .unwrap_or_else(|| {
                                "Thank you for your booking request. We'll contact you within 24-48 hours to confirm your appointment."
                                    .to_owned()
                            })
                    }}
                </p>
                <button class="btn btn--primary" on:click=move |_| state.update(BookingState::reset)>
                    "Submit Another Request"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn BookingFields(state: RwSignal<BookingState>) -> impl IntoView {
    let error_ref = NodeRef::<leptos::html::Div>::new();

    // Refocus the alert on every failed attempt, including a retry failing
    // while the region is already mounted.
    let alert = Memo::new(move |_| state.with(|s| (s.failures(), s.error.is_some())));
    Effect::new(move || {
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let (_, shown) = alert.get();
        #[cfg(feature = "hydrate")]
        {
            if let (true, Some(el)) = (shown, error_ref.get()) {
                crate::util::dom::focus(&el);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match state.try_update(|s| s.begin_submit(today())) {
            Some(Ok((ticket, request))) => run_submission(state, ticket, request),
            Some(Err(SubmitRefused::Invalid(errors))) => {
                leptos::logging::log!("booking form has {} invalid field(s)", errors.len());
            }
            Some(Err(_)) | None => {}
        }
    };

    let busy = move || state.with(BookingState::is_busy);
    let min_date = format_calendar_date(today());

    view! {
        <form class="booking-form" novalidate=true on:submit=on_submit>
            <Show when=move || state.with(|s| s.error.is_some())>
                <div
                    class="booking-form__error"
                    role="alert"
                    aria-live="assertive"
                    tabindex="-1"
                    node_ref=error_ref
                >
                    <span>{move || state.with(|s| s.error.clone().unwrap_or_default())}</span>
                    <button
                        type="button"
                        class="booking-form__dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| state.update(BookingState::dismiss_error)
                    >
                        "×"
                    </button>
                </div>
            </Show>

            <div class="booking-form__grid">
                <TextField state field=BookingField::Name kind="text" placeholder="Your full name"/>
                <TextField state field=BookingField::Email kind="email" placeholder="Your email address"/>
                <TextField state field=BookingField::Phone kind="tel" placeholder="Your phone number"/>

                <FieldShell state field=BookingField::Service>
                    <select
                        id=field_id(BookingField::Service)
                        prop:value=move || state.with(|s| s.draft.service.clone())
                        on:change=move |ev| state.update(|s| s.set_field(BookingField::Service, event_target_value(&ev)))
                    >
                        <option value="">"Select a service"</option>
                        {ServiceKind::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </FieldShell>

                <FieldShell state field=BookingField::Artist>
                    <select
                        id=field_id(BookingField::Artist)
                        prop:value=move || state.with(|s| s.draft.artist.clone())
                        on:change=move |ev| state.update(|s| s.set_field(BookingField::Artist, event_target_value(&ev)))
                    >
                        <option value="">"Any artist"</option>
                        {ARTISTS
                            .iter()
                            .map(|artist| view! { <option value=artist.slug>{artist.name}</option> })
                            .collect_view()}
                    </select>
                </FieldShell>

                <FieldShell state field=BookingField::Date>
                    <input
                        id=field_id(BookingField::Date)
                        type="date"
                        min=min_date
                        prop:value=move || state.with(|s| s.draft.date.clone())
                        on:input=move |ev| state.update(|s| s.set_field(BookingField::Date, event_target_value(&ev)))
                    />
                </FieldShell>
            </div>

            <FieldShell state field=BookingField::Description>
                <textarea
                    id=field_id(BookingField::Description)
                    rows="5"
                    placeholder="Please describe your tattoo idea, including size, placement, and any reference images you have."
                    prop:value=move || state.with(|s| s.draft.description.clone())
                    on:input=move |ev| state.update(|s| s.set_field(BookingField::Description, event_target_value(&ev)))
                ></textarea>
            </FieldShell>

            <p class="booking-form__retry" aria-live="polite">
                {move || state.with(BookingState::retry_status)}
            </p>

            <button type="submit" class="btn btn--primary booking-form__submit" disabled=busy>
                {move || if busy() { "Submitting..." } else { "Submit Booking Request" }}
            </button>
        </form>
    }
}

/// Label, control slot, and inline message for one field.
#[component]
fn FieldShell(state: RwSignal<BookingState>, field: BookingField, children: Children) -> impl IntoView {
    let message = move || state.with(|s| s.field_error(field));
    let class = move || {
        if message().is_some() { "booking-form__field booking-form__field--invalid" } else { "booking-form__field" }
    };

    view! {
        <div class=class>
            <label for=field_id(field)>{field.label()}</label>
            {children()}
            {move || message().map(|m| view! { <p class="booking-form__message">{m}</p> })}
        </div>
    }
}

#[component]
fn TextField(
    state: RwSignal<BookingState>,
    field: BookingField,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <FieldShell state field>
            <input
                id=field_id(field)
                type=kind
                placeholder=placeholder
                prop:value=move || state.with(|s| s.draft.get(field).to_owned())
                on:input=move |ev| state.update(|s| s.set_field(field, event_target_value(&ev)))
            />
        </FieldShell>
    }
}

fn field_id(field: BookingField) -> String {
    format!("booking-{}", field.key())
}

/// Post `request`, then keep resubmitting on the schedule `finish_submit`
/// returns until it settles or the form moves on.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn run_submission(state: RwSignal<BookingState>, ticket: SubmitTicket, request: BookingRequest) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            use crate::config::RETRY_BUDGET;
            use crate::state::booking::SubmitFollowUp;

            let mut ticket = ticket;
            let mut request = request;
            loop {
                let outcome = crate::net::api::submit_booking(&request).await;
                if let Err(e) = &outcome {
                    leptos::logging::warn!("booking attempt {} failed: {e}", ticket.attempt());
                }
                let Some(SubmitFollowUp::RetryAfter { delay_ms, ticket: next }) =
                    state.try_update(|s| s.finish_submit(ticket, outcome))
                else {
                    break;
                };

                leptos::logging::log!("retrying booking ({} of {RETRY_BUDGET}) in {delay_ms}ms", next.attempt());
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;

                let Some(Some(next_request)) = state.try_update(|s| s.resume_retry(next)) else {
                    break;
                };
                ticket = next;
                request = next_request;
            }
        });
    }
}
