use std::rc::Rc;

use practice_core::{Announcements, DayCell, GridCell, MonthCursor, MonthStep};
use yew::prelude::*;

pub const GRID_ID: &str = "calGrid";
pub const MONTH_LABEL_ID: &str = "calMonth";
pub const PREV_ID: &str = "calPrev";
pub const NEXT_ID: &str = "calNext";

/// Displayed month, the only state that changes after initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub cursor: MonthCursor,
}

impl Reducible for CalendarView {
    type Action = MonthStep;

    fn reduce(self: Rc<Self>, step: Self::Action) -> Rc<Self> {
        Rc::new(Self {
            cursor: self.cursor.step(step),
        })
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CalendarWidgetProps {
    pub announcements: Rc<Announcements>,
    /// Month shown first; defaults to the one containing today.
    #[prop_or_default]
    pub initial: Option<MonthCursor>,
    /// Receives the index of the record to show.
    #[prop_or_default]
    pub on_open: Callback<usize>,
}

/// Month grid rendered into `#calGrid`.
///
/// The previous/next controls and the month label live outside the grid
/// container; the widget binds them while mounted.
#[function_component(CalendarWidget)]
pub fn calendar_widget(props: &CalendarWidgetProps) -> Html {
    let initial = props
        .initial
        .unwrap_or_else(|| props.announcements.initial_month());
    let view = use_reducer(move || CalendarView { cursor: initial });

    #[cfg(target_arch = "wasm32")]
    {
        let dispatcher = view.dispatcher();
        use_effect_with((), move |()| {
            let listeners = bind_month_controls(&dispatcher);
            move || drop(listeners)
        });
    }
    #[cfg(target_arch = "wasm32")]
    {
        use_effect_with(view.cursor, |cursor| {
            set_month_label(*cursor);
            || {}
        });
    }

    let grid = props.announcements.grid(view.cursor);
    html! {
        <>
            { for grid.cells.iter().map(|cell| render_cell(cell, &props.announcements, &props.on_open)) }
        </>
    }
}

fn render_cell(cell: &GridCell, announcements: &Announcements, on_open: &Callback<usize>) -> Html {
    match cell {
        GridCell::Filler { day, .. } => html! {
            <div class="calendar__day calendar__day--other">
                <span class="calendar__day-num">{ *day }</span>
            </div>
        },
        GridCell::Day(day) => render_day(day, announcements, on_open),
    }
}

fn render_day(cell: &DayCell, announcements: &Announcements, on_open: &Callback<usize>) -> Html {
    let class = classes!(
        "calendar__day",
        cell.is_today.then_some("calendar__day--today"),
        cell.has_event().then_some("calendar__day--has-event"),
    );
    let onclick = cell.primary_event().map(|index| {
        let on_open = on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(index))
    });
    let markers = cell.has_event().then(|| {
        html! {
            <div class="calendar__events">
                { for cell.events.iter().map(|&index| render_marker(index, announcements, on_open)) }
            </div>
        }
    });
    html! {
        <div class={class} data-day={cell.day.to_string()} data-date={cell.iso_date.clone()} {onclick}>
            <span class="calendar__day-num">{ cell.day }</span>
            { markers.unwrap_or_default() }
        </div>
    }
}

fn render_marker(index: usize, announcements: &Announcements, on_open: &Callback<usize>) -> Html {
    let Some(record) = announcements.record(index) else {
        return Html::default();
    };
    let onclick = {
        let on_open = on_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_open.emit(index);
        })
    };
    let slug = record.slug().map(|slug| AttrValue::from(slug.to_owned()));
    html! {
        <span class="calendar__event-dot" data-ann-idx={index.to_string()} data-ann-slug={slug} {onclick}>
            { record.title.clone() }
        </span>
    }
}

#[cfg(target_arch = "wasm32")]
fn bind_month_controls(
    dispatcher: &UseReducerDispatcher<CalendarView>,
) -> Vec<gloo::events::EventListener> {
    use gloo::events::EventListener;

    let Some(document) = crate::dom::document() else {
        return Vec::new();
    };
    [(PREV_ID, MonthStep::Previous), (NEXT_ID, MonthStep::Next)]
        .into_iter()
        .filter_map(|(id, step)| {
            let Some(control) = document.get_element_by_id(id) else {
                log::debug!("element {id} not found; month navigation partly disabled");
                return None;
            };
            let dispatcher = dispatcher.clone();
            Some(EventListener::new(&control, "click", move |_| {
                dispatcher.dispatch(step);
            }))
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn set_month_label(cursor: MonthCursor) {
    let label = crate::dom::document().and_then(|doc| doc.get_element_by_id(MONTH_LABEL_ID));
    if let Some(label) = label {
        let text = practice_core::month_label(cursor, &crate::i18n::month_name(cursor.month));
        label.set_text_content(Some(&text));
    }
}
