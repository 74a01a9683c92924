use std::rc::Rc;

use chrono::NaiveDate;
use futures::executor::block_on;
use practice_core::{Announcements, EventRecord, MonthCursor};
use practice_web::calendar::{
    CalendarWidget, CalendarWidgetProps, UpcomingList, UpcomingListProps,
};
use yew::{Callback, LocalServerRenderer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn february_records() -> Vec<EventRecord> {
    let mut talk = EventRecord::new("2024-02-10", "Лекция о стрессе")
        .with_time("18:00")
        .with_location("Онлайн");
    talk.slug = Some("stress-talk".to_string());
    vec![
        talk,
        EventRecord::new("2024-02-10", "Группа поддержки"),
        EventRecord::new("2024-02-04", "Прошедшая встреча"),
        EventRecord::new("2024-03-01", "Весенний семинар").with_location("Москва"),
    ]
}

fn render_grid(today: NaiveDate, cursor: MonthCursor) -> String {
    let props = CalendarWidgetProps {
        announcements: Rc::new(Announcements::new(february_records(), today, 5)),
        initial: Some(cursor),
        on_open: Callback::noop(),
    };
    block_on(LocalServerRenderer::<CalendarWidget>::with_props(props).render())
}

fn render_upcoming(records: Vec<EventRecord>, today: NaiveDate) -> String {
    practice_web::i18n::set_lang("ru");
    let props = UpcomingListProps {
        announcements: Rc::new(Announcements::new(records, today, 5)),
        on_open: Callback::noop(),
    };
    block_on(LocalServerRenderer::<UpcomingList>::with_props(props).render())
}

#[test]
fn february_2024_renders_thirty_six_cells() {
    let html = render_grid(date(2024, 2, 5), MonthCursor { year: 2024, month: 1 });
    assert_eq!(html.matches("calendar__day-num").count(), 36);
    assert_eq!(html.matches("calendar__day--other").count(), 7);
    assert_eq!(html.matches("calendar__day--today").count(), 1);
    assert!(html.contains(r#"data-date="2024-02-29""#));
}

#[test]
fn shared_date_renders_every_marker() {
    let html = render_grid(date(2024, 2, 5), MonthCursor { year: 2024, month: 1 });
    assert_eq!(html.matches("calendar__event-dot").count(), 3);
    assert_eq!(html.matches("calendar__day--has-event").count(), 2);
    assert!(html.contains(r#"data-ann-idx="0""#));
    assert!(html.contains(r#"data-ann-idx="1""#));
    assert!(html.contains(r#"data-ann-slug="stress-talk""#));
    assert!(html.contains("Группа поддержки"));
}

#[test]
fn other_months_have_no_today_cell() {
    let html = render_grid(date(2024, 2, 5), MonthCursor { year: 2024, month: 2 });
    assert!(!html.contains("calendar__day--today"));
    assert_eq!(html.matches("calendar__event-dot").count(), 1);
    assert_eq!(html.matches("calendar__day-num").count() % 7, 0);
}

#[test]
fn upcoming_list_shows_future_events_with_meta() {
    let html = render_upcoming(february_records(), date(2024, 2, 5));
    assert!(html.contains("Ближайшие события"));
    assert_eq!(html.matches(r#"class="ann-upcoming-card""#).count(), 3);
    assert!(html.contains("фев"));
    assert!(html.contains("мар"));
    assert!(html.contains("18:00"));
    assert!(html.contains("Москва"));
    assert!(!html.contains("Прошедшая встреча"));
}

#[test]
fn upcoming_list_is_empty_when_everything_is_past() {
    let html = render_upcoming(february_records(), date(2025, 1, 1));
    assert!(!html.contains("announcements-upcoming__title"));
    assert!(!html.contains("ann-upcoming-card"));
}
