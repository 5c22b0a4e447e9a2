//! Booking form state: draft fields, validation errors, and submit lifecycle.
//!
//! DESIGN
//! ======
//! The draft holds raw input text. `begin_submit` validates the whole draft
//! against [`BOOKING_SCHEMA`]; only a fully valid draft produces a
//! [`BookingRequest`] and a [`SubmitTicket`], so an invalid form never
//! reaches the network. Outcomes are applied through `finish_submit`, which
//! decides between success, an automatic retry (transient failures, within
//! [`RETRY_BUDGET`]), or a terminal inline error.
//!
//! Tickets carry the form generation. `reset` bumps it, so a response that
//! lands after the visitor started over is dropped.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::collections::BTreeMap;

use time::Date;

use crate::config::{BOOKING_RETRY_DELAY_MS, RETRY_BUDGET};
use crate::content::artist_by_slug;
use crate::net::error::ApiError;
use crate::net::types::{BookingReceipt, BookingRequest, ServiceKind};
use crate::util::date::{is_studio_open, parse_calendar_date};
use crate::util::validate::{FieldSchema, Rule, has_min_chars, is_email_shaped, validate};

/// Generic failure text for transient submission errors.
pub const SUBMIT_FAILED_MESSAGE: &str = "There was a problem submitting your booking. Please try again.";

/// Booking form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Service,
    Artist,
    Date,
    Description,
}

impl BookingField {
    /// Stable identifier, used for element ids.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Artist => "artist",
            Self::Date => "date",
            Self::Description => "description",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Service => "Service",
            Self::Artist => "Preferred Artist (Optional)",
            Self::Date => "Preferred Date",
            Self::Description => "Tattoo Description",
        }
    }
}

/// Per-field validation messages. Empty when the draft is valid.
pub type FieldErrors = BTreeMap<BookingField, &'static str>;

/// Raw form input, exactly as typed or picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub artist: String,
    pub date: String,
    pub description: String,
}

impl BookingDraft {
    #[must_use]
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::Service => &self.service,
            BookingField::Artist => &self.artist,
            BookingField::Date => &self.date,
            BookingField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::Service => &mut self.service,
            BookingField::Artist => &mut self.artist,
            BookingField::Date => &mut self.date,
            BookingField::Description => &mut self.description,
        };
        *slot = value;
    }
}

// =============================================================================
// SCHEMA
// =============================================================================

fn name_long_enough(d: &BookingDraft, _: &Date) -> bool {
    has_min_chars(&d.name, 2)
}

fn email_valid(d: &BookingDraft, _: &Date) -> bool {
    is_email_shaped(&d.email)
}

fn phone_long_enough(d: &BookingDraft, _: &Date) -> bool {
    has_min_chars(&d.phone, 10)
}

fn service_chosen(d: &BookingDraft, _: &Date) -> bool {
    ServiceKind::parse(&d.service).is_some()
}

fn artist_known_or_any(d: &BookingDraft, _: &Date) -> bool {
    let slug = d.artist.trim();
    slug.is_empty() || artist_by_slug(slug).is_some()
}

fn date_present(d: &BookingDraft, _: &Date) -> bool {
    parse_calendar_date(&d.date).is_some()
}

fn date_not_past(d: &BookingDraft, today: &Date) -> bool {
    parse_calendar_date(&d.date).is_some_and(|date| date >= *today)
}

fn date_studio_open(d: &BookingDraft, _: &Date) -> bool {
    parse_calendar_date(&d.date).is_some_and(is_studio_open)
}

fn description_long_enough(d: &BookingDraft, _: &Date) -> bool {
    has_min_chars(&d.description, 10)
}

/// Field constraints, checked against "today" as context.
pub static BOOKING_SCHEMA: &[FieldSchema<BookingField, BookingDraft, Date>] = &[
    FieldSchema {
        field: BookingField::Name,
        rules: &[Rule { check: name_long_enough, message: "Name must be at least 2 characters." }],
    },
    FieldSchema {
        field: BookingField::Email,
        rules: &[Rule { check: email_valid, message: "Please enter a valid email address." }],
    },
    FieldSchema {
        field: BookingField::Phone,
        rules: &[Rule { check: phone_long_enough, message: "Please enter a valid phone number." }],
    },
    FieldSchema {
        field: BookingField::Service,
        rules: &[Rule { check: service_chosen, message: "Please select a service." }],
    },
    FieldSchema {
        field: BookingField::Artist,
        rules: &[Rule { check: artist_known_or_any, message: "Please choose an artist from the list." }],
    },
    FieldSchema {
        field: BookingField::Date,
        rules: &[
            Rule { check: date_present, message: "Please select a date." },
            Rule { check: date_not_past, message: "Please choose today or a later date." },
            Rule { check: date_studio_open, message: "The studio is closed on Sundays and Mondays." },
        ],
    },
    FieldSchema {
        field: BookingField::Description,
        rules: &[Rule {
            check: description_long_enough,
            message: "Please provide more details about your tattoo idea.",
        }],
    },
];

/// Validate a draft and build the request it describes.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate_draft(draft: &BookingDraft, today: Date) -> Result<BookingRequest, FieldErrors> {
    let errors = validate(BOOKING_SCHEMA, draft, &today);
    if !errors.is_empty() {
        return Err(errors);
    }

    let service = ServiceKind::parse(&draft.service).ok_or_else(|| single_error(BookingField::Service))?;
    let date = parse_calendar_date(&draft.date).ok_or_else(|| single_error(BookingField::Date))?;
    let artist = Some(draft.artist.trim().to_owned()).filter(|a| !a.is_empty());

    Ok(BookingRequest {
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        phone: draft.phone.trim().to_owned(),
        artist,
        service,
        date,
        description: draft.description.trim().to_owned(),
    })
}

fn single_error(field: BookingField) -> FieldErrors {
    let message = BOOKING_SCHEMA
        .iter()
        .find(|entry| entry.field == field)
        .and_then(|entry| entry.rules.first())
        .map_or("Invalid value.", |rule| rule.message);
    BTreeMap::from([(field, message)])
}

// =============================================================================
// SUBMIT LIFECYCLE
// =============================================================================

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    /// Editable; the submit button is enabled.
    #[default]
    Editing,
    /// A request is in flight.
    Submitting,
    /// A transient failure occurred; waiting to resubmit.
    RetryPending,
    /// Terminal success view.
    Submitted,
}

/// Identifies one network attempt of one submit action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    attempt: u32,
}

impl SubmitTicket {
    /// 0 for the visitor's own submit, then 1..=`RETRY_BUDGET` for retries.
    #[must_use]
    pub fn attempt(self) -> u32 {
        self.attempt
    }
}

/// Why `begin_submit` did not start a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRefused {
    /// A request or retry is already outstanding.
    Busy,
    /// The form is showing its success view.
    AlreadySubmitted,
    /// One or more fields failed validation.
    Invalid(FieldErrors),
}

/// What the caller should do after `finish_submit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitFollowUp {
    /// Nothing more to do.
    Done,
    /// Wait `delay_ms`, then call `resume_retry` with `ticket`.
    RetryAfter { delay_ms: u32, ticket: SubmitTicket },
    /// The outcome belonged to an abandoned form and was dropped.
    Stale,
}

/// State behind one booking form.
#[derive(Clone, Debug, Default)]
pub struct BookingState {
    pub draft: BookingDraft,
    pub field_errors: FieldErrors,
    pub phase: BookingPhase,
    /// Dismissible inline submit error.
    pub error: Option<String>,
    pub receipt: Option<BookingReceipt>,
    retries: u32,
    failures: u32,
    generation: u64,
    request: Option<BookingRequest>,
}

impl BookingState {
    /// Update one input. Clears that field's validation message.
    pub fn set_field(&mut self, field: BookingField, value: String) {
        self.draft.set(field, value);
        self.field_errors.remove(&field);
    }

    #[must_use]
    pub fn field_error(&self, field: BookingField) -> Option<&'static str> {
        self.field_errors.get(&field).copied()
    }

    /// `true` while the submit control must stay disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, BookingPhase::Submitting | BookingPhase::RetryPending)
    }

    /// Automatic resubmissions made for the current submit action.
    #[must_use]
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Failed attempts since the form was last reset, retries included.
    /// Bumps even when the message text repeats.
    #[must_use]
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Validate and, when valid, start a submission.
    ///
    /// # Errors
    ///
    /// Refuses while busy, after success, or when any field is invalid; in
    /// the invalid case `field_errors` is populated and the draft is kept.
    pub fn begin_submit(&mut self, today: Date) -> Result<(SubmitTicket, BookingRequest), SubmitRefused> {
        match self.phase {
            BookingPhase::Submitting | BookingPhase::RetryPending => return Err(SubmitRefused::Busy),
            BookingPhase::Submitted => return Err(SubmitRefused::AlreadySubmitted),
            BookingPhase::Editing => {}
        }

        let request = match validate_draft(&self.draft, today) {
            Ok(request) => request,
            Err(errors) => {
                self.field_errors.clone_from(&errors);
                return Err(SubmitRefused::Invalid(errors));
            }
        };

        self.field_errors.clear();
        self.error = None;
        self.retries = 0;
        self.phase = BookingPhase::Submitting;
        self.request = Some(request.clone());
        Ok((SubmitTicket { generation: self.generation, attempt: 0 }, request))
    }

    /// Apply the outcome of the attempt identified by `ticket`.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, outcome: Result<BookingReceipt, ApiError>) -> SubmitFollowUp {
        if ticket.generation != self.generation || self.phase != BookingPhase::Submitting {
            return SubmitFollowUp::Stale;
        }

        match outcome {
            Ok(receipt) => {
                self.phase = BookingPhase::Submitted;
                self.receipt = Some(receipt);
                self.error = None;
                self.request = None;
                SubmitFollowUp::Done
            }
            Err(err) => {
                self.failures += 1;
                self.error = Some(err.explicit_message().unwrap_or(SUBMIT_FAILED_MESSAGE).to_owned());
                if err.is_transient() && self.retries < RETRY_BUDGET {
                    self.retries += 1;
                    self.phase = BookingPhase::RetryPending;
                    let next = SubmitTicket { generation: self.generation, attempt: self.retries };
                    SubmitFollowUp::RetryAfter { delay_ms: BOOKING_RETRY_DELAY_MS, ticket: next }
                } else {
                    self.phase = BookingPhase::Editing;
                    self.request = None;
                    SubmitFollowUp::Done
                }
            }
        }
    }

    /// Start the retry scheduled by `finish_submit`. Returns `None` when the
    /// form moved on while the retry was waiting.
    pub fn resume_retry(&mut self, ticket: SubmitTicket) -> Option<BookingRequest> {
        if ticket.generation != self.generation
            || ticket.attempt != self.retries
            || self.phase != BookingPhase::RetryPending
        {
            return None;
        }
        let request = self.request.clone()?;
        self.phase = BookingPhase::Submitting;
        Some(request)
    }

    /// Progress text shown while a retry is pending.
    #[must_use]
    pub fn retry_status(&self) -> Option<String> {
        (self.phase == BookingPhase::RetryPending)
            .then(|| format!("Retrying automatically ({} of {RETRY_BUDGET})…", self.retries))
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Return to a blank editable form. Outstanding requests become stale.
    pub fn reset(&mut self) {
        *self = Self { generation: self.generation + 1, ..Self::default() };
    }
}
