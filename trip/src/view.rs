//! Stateless view templates for the trip page.
//!
//! Each view is a plain value holding exactly what its template needs and
//! implements [`View`]. Views never touch the document; presenters render,
//! replace and remove them.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use time::formatting::Formattable;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};
use tracing::warn;

use crate::consts::{FilterType, SortType};
use crate::dom::View;
use crate::point::{Destination, Offer, Point, PointType};

// ── Page chrome ─────────────────────────────────────────────────

/// Root of the trip page; everything else renders into it.
pub struct TripEventsView;

impl View for TripEventsView {
    fn template(&self) -> String {
        r#"<section class="trip-events"><h2 class="visually-hidden">Trip events</h2></section>"#.to_string()
    }
}

/// Sort control. Event and offers columns are always disabled.
pub struct SortView {
    pub current: SortType,
}

impl View for SortView {
    fn template(&self) -> String {
        let mut out = String::from(r#"<form class="trip-events__trip-sort  trip-sort" action="" method="get">"#);
        for (name, sort_type) in [
            ("day", Some(SortType::Day)),
            ("event", None),
            ("time", Some(SortType::Time)),
            ("price", Some(SortType::Price)),
            ("offers", None),
        ] {
            let state = match sort_type {
                Some(sort_type) if sort_type == self.current => " checked",
                Some(_) => "",
                None => " disabled",
            };
            out.push_str(&format!(
                r#"<div class="trip-sort__item  trip-sort__item--{name}"><input id="sort-{name}" class="trip-sort__input  visually-hidden" type="radio" name="trip-sort" value="sort-{name}" data-sort-type="{name}"{state}><label class="trip-sort__btn" for="sort-{name}">{name}</label></div>"#
            ));
        }
        out.push_str("</form>");
        out
    }
}

/// List container the item presenters render into.
pub struct TripView;

impl View for TripView {
    fn template(&self) -> String {
        r#"<ul class="trip-events__list"></ul>"#.to_string()
    }
}

/// Empty-state message, chosen by the active filter.
pub struct NoPointsView {
    pub filter: FilterType,
}

impl View for NoPointsView {
    fn template(&self) -> String {
        format!(r#"<p class="trip-events__msg">{}</p>"#, self.filter.empty_message())
    }
}

// ── Point views ─────────────────────────────────────────────────

/// A point card in display mode.
pub struct PointView {
    pub point: Point,
    pub destination: Option<Destination>,
    pub offers: Vec<Offer>,
}

impl View for PointView {
    fn template(&self) -> String {
        let point = &self.point;
        let kind = point.kind.as_str();
        let name = self.destination.as_ref().map_or("", |d| d.name.as_str());
        let favorite = if point.is_favorite { " event__favorite-btn--active" } else { "" };

        let mut offers = String::new();
        for offer in &self.offers {
            offers.push_str(&format!(
                r#"<li class="event__offer"><span class="event__offer-title">{}</span>&plus;&euro;&nbsp;<span class="event__offer-price">{}</span></li>"#,
                escape(&offer.title),
                offer.price
            ));
        }

        format!(
            concat!(
                r#"<li class="trip-events__item" data-point-id="{id}"><div class="event">"#,
                r#"<time class="event__date" datetime="{date_attr}">{date}</time>"#,
                r#"<div class="event__type"><img class="event__type-icon" width="42" height="42" src="img/icons/{kind}.png" alt="Event type icon"></div>"#,
                r#"<h3 class="event__title">{label} {name}</h3>"#,
                r#"<div class="event__schedule"><p class="event__time">"#,
                r#"<time class="event__start-time">{start}</time> &mdash; <time class="event__end-time">{end}</time></p>"#,
                r#"<p class="event__duration">{duration}</p></div>"#,
                r#"<p class="event__price">&euro;&nbsp;<span class="event__price-value">{price}</span></p>"#,
                r#"<h4 class="visually-hidden">Offers:</h4><ul class="event__selected-offers">{offers}</ul>"#,
                r#"<button class="event__favorite-btn{favorite}" type="button"><span class="visually-hidden">Add to favorite</span></button>"#,
                r#"<button class="event__rollup-btn" type="button"><span class="visually-hidden">Open event</span></button>"#,
                r#"</div></li>"#,
            ),
            id = escape(point.id.as_str()),
            date_attr = format_date_attr(point.date_from),
            date = format_day(point.date_from),
            kind = kind,
            label = point.kind.label(),
            name = escape(name),
            start = format_time(point.date_from),
            end = format_time(point.date_to),
            duration = format_duration(point.duration()),
            price = point.base_price,
            offers = offers,
            favorite = favorite,
        )
    }
}

/// A point in edit mode.
pub struct EditPointView {
    pub point: Point,
    pub destination: Option<Destination>,
    pub available_offers: Vec<Offer>,
    pub destinations: Vec<Destination>,
}

impl View for EditPointView {
    fn template(&self) -> String {
        let point = &self.point;
        let name = self.destination.as_ref().map_or("", |d| d.name.as_str());

        let mut types = String::new();
        for kind in PointType::ALL {
            let checked = if kind == point.kind { " checked" } else { "" };
            types.push_str(&format!(
                r#"<div class="event__type-item"><input id="event-type-{k}" class="event__type-input  visually-hidden" type="radio" name="event-type" value="{k}"{checked}><label class="event__type-label  event__type-label--{k}" for="event-type-{k}">{label}</label></div>"#,
                k = kind.as_str(),
                label = kind.label(),
            ));
        }

        let mut options = String::new();
        for destination in &self.destinations {
            options.push_str(&format!(r#"<option value="{}"></option>"#, escape(&destination.name)));
        }

        let mut offers = String::new();
        for offer in &self.available_offers {
            let checked = if point.offers.contains(&offer.id) { " checked" } else { "" };
            offers.push_str(&format!(
                r#"<div class="event__offer-selector"><input class="event__offer-checkbox  visually-hidden" id="event-offer-{id}" type="checkbox" name="event-offer-{id}"{checked}><label for="event-offer-{id}"><span class="event__offer-title">{title}</span>&plus;&euro;&nbsp;<span class="event__offer-price">{price}</span></label></div>"#,
                id = escape(&offer.id),
                title = escape(&offer.title),
                price = offer.price,
            ));
        }

        let description = self.destination.as_ref().map_or(String::new(), |d| escape(&d.description));

        format!(
            concat!(
                r##"<li class="trip-events__item" data-point-id="{id}"><form class="event event--edit" action="#" method="post">"##,
                r#"<header class="event__header"><div class="event__type-wrapper"><fieldset class="event__type-group">{types}</fieldset></div>"#,
                r#"<div class="event__field-group  event__field-group--destination"><label class="event__label  event__type-output">{label}</label>"#,
                r#"<input class="event__input  event__input--destination" type="text" name="event-destination" value="{name}" list="destination-list">"#,
                r#"<datalist id="destination-list">{options}</datalist></div>"#,
                r#"<div class="event__field-group  event__field-group--time">"#,
                r#"<input class="event__input  event__input--time" type="text" name="event-start-time" value="{start}"> &mdash; "#,
                r#"<input class="event__input  event__input--time" type="text" name="event-end-time" value="{end}"></div>"#,
                r#"<div class="event__field-group  event__field-group--price"><input class="event__input  event__input--price" type="text" name="event-price" value="{price}"></div>"#,
                r#"<button class="event__save-btn  btn  btn--blue" type="submit">Save</button>"#,
                r#"<button class="event__reset-btn" type="reset">Delete</button>"#,
                r#"<button class="event__rollup-btn" type="button"><span class="visually-hidden">Close event</span></button></header>"#,
                r#"<section class="event__details"><section class="event__section  event__section--offers"><div class="event__available-offers">{offers}</div></section>"#,
                r#"<section class="event__section  event__section--destination"><p class="event__destination-description">{description}</p></section></section>"#,
                r#"</form></li>"#,
            ),
            id = escape(point.id.as_str()),
            types = types,
            label = point.kind.label(),
            name = escape(name),
            options = options,
            start = format_input_date(point.date_from),
            end = format_input_date(point.date_to),
            price = point.base_price,
            offers = offers,
            description = description,
        )
    }
}

// ── Formatting ──────────────────────────────────────────────────

/// Human duration: `30M`, `02H 05M`, `01D 02H 05M`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.whole_minutes().max(0);
    let days = total / (24 * 60);
    let hours = (total / 60) % 24;
    let minutes = total % 60;
    if days > 0 {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    } else if hours > 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{minutes:02}M")
    }
}

/// Format `at`, logging and rendering an empty string if the description
/// does not fit the value.
fn format_with(at: OffsetDateTime, format: &(impl Formattable + ?Sized)) -> String {
    match at.format(format) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, %at, "date formatting failed");
            String::new()
        }
    }
}

fn format_day(at: OffsetDateTime) -> String {
    format_with(at, format_description!("[month repr:short] [day]"))
}

fn format_date_attr(at: OffsetDateTime) -> String {
    format_with(at, format_description!("[year]-[month]-[day]"))
}

fn format_time(at: OffsetDateTime) -> String {
    format_with(at, format_description!("[hour]:[minute]"))
}

fn format_input_date(at: OffsetDateTime) -> String {
    format_with(at, format_description!("[day]/[month]/[year repr:last_two] [hour]:[minute]"))
}

/// Escape text for inclusion in markup.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
