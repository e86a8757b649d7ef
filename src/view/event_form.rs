//! New event form markup
//!
//! Renders the edit form of a single trip point from the form state and the
//! catalog it is bound to. Markup lives in `templates/event_form/`; askama
//! escapes every interpolated value unless the template marks it `safe`.

use std::collections::BTreeSet;

use askama::Template;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{Destination, EventType, Offer, Picture};
use crate::form::{DatePickerSettings, EventForm};
use crate::utilities::DateFormat;

#[derive(Template, Debug)]
#[template(path = "event_form/form.html")]
struct EventFormTemplate {
    type_list: String,
    destination_group: String,
    time_group: String,
    price_group: String,
    offers_section: String,
    destination_section: String,
}

/// One radio of the type selector
#[derive(Debug)]
struct TypeItem {
    value: &'static str,
    label: &'static str,
    checked: bool,
}

#[derive(Template, Debug)]
#[template(path = "event_form/type_list.html")]
struct TypeListTemplate {
    icon: &'static str,
    items: Vec<TypeItem>,
}

#[derive(Template, Debug)]
#[template(path = "event_form/destination_group.html")]
struct DestinationGroupTemplate<'a> {
    label: &'static str,
    name: &'a str,
    destinations: &'a [Destination],
}

/// Picker settings as markup attribute values
#[derive(Debug)]
struct PickerAttributes {
    date_format: &'static str,
    enable_time: bool,
    time_24hr: bool,
    default_date: Option<String>,
    min_date: Option<String>,
}

impl From<&DatePickerSettings> for PickerAttributes {
    fn from(settings: &DatePickerSettings) -> Self {
        let rfc3339 = |date: DateTime<Utc>| date.to_rfc3339_opts(SecondsFormat::Secs, true);
        Self {
            date_format: settings.date_format,
            enable_time: settings.enable_time,
            time_24hr: settings.time_24hr,
            default_date: settings.default_date.map(rfc3339),
            min_date: settings.min_date.map(rfc3339),
        }
    }
}

#[derive(Template, Debug)]
#[template(path = "event_form/time_group.html")]
struct TimeGroupTemplate {
    from: String,
    to: String,
    from_picker: PickerAttributes,
    to_picker: PickerAttributes,
}

#[derive(Template, Debug)]
#[template(path = "event_form/price_group.html")]
struct PriceGroupTemplate {
    base_price: i64,
}

/// One offer checkbox
#[derive(Debug)]
struct OfferSelector<'a> {
    slug: String,
    id: &'a str,
    title: &'a str,
    price: i64,
    checked: bool,
}

#[derive(Template, Debug)]
#[template(path = "event_form/offers_section.html")]
struct OffersSectionTemplate<'a> {
    offers: Vec<OfferSelector<'a>>,
}

#[derive(Template, Debug)]
#[template(path = "event_form/destination_section.html")]
struct DestinationSectionTemplate<'a> {
    description: &'a str,
    pictures: &'a [Picture],
}

/// Render the whole form as a `trip-events__item` list entry
pub fn render_event_form(form: &EventForm) -> askama::Result<String> {
    let state = form.state();
    let destination = form.destination();
    let destination_name = destination.map(|d| d.name.as_str()).unwrap_or_default();

    let template = EventFormTemplate {
        type_list: render_type_list(state.event_type)?,
        destination_group: render_destination_group(
            state.event_type,
            destination_name,
            &form.catalog().destinations,
        )?,
        time_group: render_time_group(
            state.date_from.as_ref(),
            state.date_to.as_ref(),
            &form.date_from_picker(),
            &form.date_to_picker(),
        )?,
        price_group: render_price_group(state.base_price)?,
        offers_section: render_offers_section(form.type_offers(), &state.offers)?,
        destination_section: match destination {
            Some(destination) => render_destination_section(destination)?,
            None => String::new(),
        },
    };

    let html = template.render().map_err(|e| {
        tracing::error!("Failed to render event form template: {:?}", e);
        e
    })?;

    tracing::trace!(bytes = html.len(), "Rendered event form");
    Ok(html)
}

/// Type selector: current type icon plus one radio per type
pub fn render_type_list(current: EventType) -> askama::Result<String> {
    let items = EventType::ALL
        .iter()
        .map(|event_type| TypeItem {
            value: event_type.as_str(),
            label: event_type.label(),
            checked: *event_type == current,
        })
        .collect();

    TypeListTemplate {
        icon: current.as_str(),
        items,
    }
    .render()
}

/// Destination input with a datalist of every known name
pub fn render_destination_group(
    event_type: EventType,
    name: &str,
    destinations: &[Destination],
) -> askama::Result<String> {
    DestinationGroupTemplate {
        label: event_type.label(),
        name,
        destinations,
    }
    .render()
}

/// Start and end inputs; unset dates render empty
pub fn render_time_group(
    date_from: Option<&DateTime<Utc>>,
    date_to: Option<&DateTime<Utc>>,
    from_picker: &DatePickerSettings,
    to_picker: &DatePickerSettings,
) -> askama::Result<String> {
    TimeGroupTemplate {
        from: date_from.map(|d| DateFormat::FullDate.format(d)).unwrap_or_default(),
        to: date_to.map(|d| DateFormat::FullDate.format(d)).unwrap_or_default(),
        from_picker: from_picker.into(),
        to_picker: to_picker.into(),
    }
    .render()
}

pub fn render_price_group(base_price: i64) -> askama::Result<String> {
    PriceGroupTemplate { base_price }.render()
}

/// Offer checkboxes; empty when the type has no offers
pub fn render_offers_section(
    type_offers: &[Offer],
    selected: &BTreeSet<String>,
) -> askama::Result<String> {
    if type_offers.is_empty() {
        return Ok(String::new());
    }

    let offers = type_offers
        .iter()
        .map(|offer| OfferSelector {
            slug: offer.slug(),
            id: &offer.id,
            title: &offer.title,
            price: offer.price,
            checked: selected.contains(&offer.id),
        })
        .collect();

    OffersSectionTemplate { offers }.render()
}

/// Description and photo tape; empty when there is no description
pub fn render_destination_section(destination: &Destination) -> askama::Result<String> {
    if destination.description.is_empty() {
        return Ok(String::new());
    }

    DestinationSectionTemplate {
        description: &destination.description,
        pictures: &destination.pictures,
    }
    .render()
}
