use std::rc::Rc;

use practice_core::{Announcements, UpcomingEntry};
use yew::prelude::*;

use crate::i18n;

pub const UPCOMING_ID: &str = "upcomingList";

#[derive(Properties, PartialEq, Clone)]
pub struct UpcomingListProps {
    pub announcements: Rc<Announcements>,
    #[prop_or_default]
    pub on_open: Callback<usize>,
}

/// Nearest future events, rendered into `#upcomingList`. Empty when nothing is scheduled.
#[function_component(UpcomingList)]
pub fn upcoming_list(props: &UpcomingListProps) -> Html {
    let entries = props.announcements.upcoming();
    if entries.is_empty() {
        return Html::default();
    }
    html! {
        <>
            <h3 class="announcements-upcoming__title">{ i18n::t("calendar.upcoming_title") }</h3>
            { for entries.iter().enumerate().map(|(position, entry)| {
                render_card(position, entry, &props.announcements, &props.on_open)
            }) }
        </>
    }
}

fn render_card(
    position: usize,
    entry: &UpcomingEntry,
    announcements: &Announcements,
    on_open: &Callback<usize>,
) -> Html {
    let Some(record) = announcements.record(entry.index) else {
        return Html::default();
    };
    let onclick = {
        let on_open = on_open.clone();
        let index = entry.index;
        Callback::from(move |_: MouseEvent| on_open.emit(index))
    };
    html! {
        <div class="ann-upcoming-card" data-ann-upcoming={position.to_string()} {onclick}>
            <div class="ann-upcoming-card__date">
                <span class="ann-upcoming-card__date-day">{ entry.day() }</span>
                <span class="ann-upcoming-card__date-month">{ i18n::month_short(entry.month0()) }</span>
            </div>
            <div class="ann-upcoming-card__body">
                <div class="ann-upcoming-card__title">{ record.title.clone() }</div>
                <div class="ann-upcoming-card__meta">
                    { record.time().map(|time| meta_item(clock_icon(), time)).unwrap_or_default() }
                    { record.location().map(|place| meta_item(pin_icon(), place)).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}

fn meta_item(icon: Html, text: &str) -> Html {
    html! {
        <span class="ann-upcoming-card__meta-item">
            { icon }
            { text.to_string() }
        </span>
    }
}

fn clock_icon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" width="14" height="14" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="12" cy="12" r="10" />
            <polyline points="12 6 12 12 16 14" />
        </svg>
    }
}

fn pin_icon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" width="14" height="14" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0118 0z" />
            <circle cx="12" cy="10" r="3" />
        </svg>
    }
}
