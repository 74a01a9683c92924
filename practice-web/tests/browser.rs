#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;
use practice_core::{Announcements, EventRecord, MonthCursor, Settings};
use practice_web::calendar::{self, AnnouncementModal, CalendarWidget, CalendarWidgetProps};
use practice_web::controllers::{navigation, scroll, sections, theme};
use practice_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::Callback;
use yew::platform::time::sleep;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(markup: &str) -> Element {
    let doc = dom::document().expect("document");
    let root = doc.create_element("div").expect("create fixture");
    root.set_inner_html(markup);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append fixture");
    root
}

fn click(id: &str) {
    dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("clickable element")
        .click();
}

fn click_selector(selector: &str) {
    dom::document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("clickable element")
        .click();
}

async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

const MODAL_MARKUP: &str = r#"<div id="annModalOverlay">
    <div class="ann-modal" id="annModalBox">
        <button id="annModalClose">×</button>
        <h3 id="annModalTitle"></h3>
        <div id="annModalDate"><span></span></div>
        <div id="annModalTime"><span></span></div>
        <div id="annModalLocation"><span></span></div>
        <div id="annModalDesc"></div>
        <div id="annModalImage"></div>
    </div>
</div>"#;

fn element(id: &str) -> Element {
    dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .expect("element exists")
}

#[wasm_bindgen_test]
fn theme_choice_survives_reinstall() {
    let key = "theme-browser-test";
    let storage = dom::local_storage().expect("localStorage");
    storage.set_item(key, "dark").expect("seed preference");
    let fixture = mount(r#"<button id="themeToggle">theme</button>"#);
    let window = dom::window().expect("window");
    let doc = dom::document().expect("document");
    let root = doc.document_element().expect("html element");

    theme::install(&window, &doc, key).expect("theme installs");
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

    click("themeToggle");
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(storage.get_item(key).expect("read"), Some("light".to_string()));

    let _ = root.remove_attribute("data-theme");
    fixture.remove();
    theme::install(&window, &doc, key).expect("theme reinstalls");
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    storage.remove_item(key).expect("cleanup");
}

#[wasm_bindgen_test]
fn mobile_menu_locks_scroll_while_open() {
    let fixture = mount(
        r##"<button id="burger"></button>
        <nav id="mobileMenu"><a class="mobile-menu__link" id="menuLink" href="#about">About</a></nav>"##,
    );
    let doc = dom::document().expect("document");
    let nav = navigation::install(&doc).expect("menu installs");

    click("burger");
    assert!(nav.is_open());
    assert!(dom::has_class(&element("mobileMenu"), navigation::MENU_OPEN_CLASS));
    assert!(dom::scroll_locked(&doc));

    click("menuLink");
    assert!(!nav.is_open());
    assert!(!dom::has_class(&element("burger"), navigation::BURGER_ACTIVE_CLASS));
    assert!(!dom::scroll_locked(&doc));
    fixture.remove();
}

#[wasm_bindgen_test]
fn help_toggle_swaps_label_and_aria() {
    practice_web::i18n::set_lang("ru");
    let fixture = mount(
        r#"<button id="helpToggle" aria-expanded="false"><span class="help-toggle__text">Ещё</span></button>
        <ul id="helpList"></ul>"#,
    );
    let doc = dom::document().expect("document");
    sections::install_help_toggle(&doc).expect("help toggle installs");

    click("helpToggle");
    assert!(dom::has_class(&element("helpList"), sections::HELP_LIST_OPEN_CLASS));
    assert!(practice_web::a11y::is_expanded(&element("helpToggle")));
    let label = doc
        .query_selector(".help-toggle__text")
        .expect("query label")
        .expect("label exists");
    assert_eq!(label.text_content().as_deref(), Some("Скрыть"));

    click("helpToggle");
    assert!(!practice_web::a11y::is_expanded(&element("helpToggle")));
    assert_eq!(label.text_content().as_deref(), Some("Ещё"));
    fixture.remove();
}

#[wasm_bindgen_test]
fn modal_fills_rows_and_releases_scroll() {
    practice_web::i18n::set_lang("ru");
    let fixture = mount(
        r#"<div id="annModalOverlay">
            <h3 id="annModalTitle"></h3>
            <div id="annModalDate"><span></span></div>
            <div id="annModalTime"><span></span></div>
            <div id="annModalLocation"><span></span></div>
            <div id="annModalDesc"></div>
            <div id="annModalImage"></div>
        </div>"#,
    );
    let doc = dom::document().expect("document");
    let today = NaiveDate::from_ymd_opt(2024, 2, 5).expect("valid date");
    let records = vec![
        EventRecord::new("2024-02-10", "Лекция")
            .with_time("18:00")
            .with_description("<p>Подробности</p>")
            .with_image("uploads/announcements/talk.jpg"),
        EventRecord::new("2024-02-11", "Встреча"),
    ];
    let announcements = Rc::new(Announcements::new(records, today, 5));
    let modal =
        AnnouncementModal::locate(&doc, announcements, "static").expect("modal markup present");

    modal.open(0);
    assert!(modal.is_open());
    assert!(dom::scroll_locked(&doc));
    assert_eq!(
        element("annModalDate").text_content().as_deref(),
        Some("10 февраль 2024")
    );
    let image = element("annModalImage");
    assert!(dom::has_class(&image, "ann-modal__image--visible"));
    assert_eq!(image.child_element_count(), 1);
    let location: HtmlElement = element("annModalLocation").dyn_into().expect("html element");
    assert_eq!(location.style().get_property_value("display").ok().as_deref(), Some("none"));

    modal.open(1);
    assert_eq!(modal.shown(), Some(1));
    assert!(!dom::has_class(&element("annModalImage"), "ann-modal__image--visible"));
    assert_eq!(element("annModalImage").child_element_count(), 0);

    modal.close();
    assert!(!modal.is_open());
    assert!(!dom::scroll_locked(&doc));
    fixture.remove();
}

#[wasm_bindgen_test]
fn modal_dismisses_by_escape_backdrop_and_close_button() {
    practice_web::i18n::set_lang("ru");
    let fixture = mount(MODAL_MARKUP);
    let doc = dom::document().expect("document");
    let today = NaiveDate::from_ymd_opt(2024, 2, 5).expect("valid date");
    let announcements = Rc::new(Announcements::new(
        vec![EventRecord::new("2024-02-10", "Лекция")],
        today,
        5,
    ));
    let modal = Rc::new(
        AnnouncementModal::locate(&doc, announcements, "static").expect("modal markup present"),
    );
    calendar::install_dismiss(&modal);

    modal.open(0);
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event");
    doc.dispatch_event(&escape).expect("dispatch keydown");
    assert!(!modal.is_open());
    assert!(!dom::scroll_locked(&doc));

    modal.open(0);
    click("annModalTitle");
    click("annModalBox");
    assert!(modal.is_open(), "clicks inside the dialog keep it open");
    click("annModalOverlay");
    assert!(!modal.is_open());

    modal.open(0);
    click("annModalClose");
    assert!(!modal.is_open());
    assert!(!dom::scroll_locked(&doc));
    fixture.remove();
}

#[wasm_bindgen_test]
async fn month_controls_wrap_across_new_year() {
    practice_web::i18n::set_lang("ru");
    let fixture = mount(
        r#"<button id="calPrev">‹</button><span id="calMonth"></span><button id="calNext">›</button>
        <div id="calGrid"></div>"#,
    );
    let today = NaiveDate::from_ymd_opt(2024, 12, 5).expect("valid date");
    let announcements = Rc::new(Announcements::new(
        vec![EventRecord::new("2025-01-15", "Группа")],
        today,
        5,
    ));
    let props = CalendarWidgetProps {
        announcements,
        initial: Some(MonthCursor { year: 2024, month: 11 }),
        on_open: Callback::noop(),
    };
    let handle =
        yew::Renderer::<CalendarWidget>::with_root_and_props(element("calGrid"), props).render();
    settle().await;

    let grid = element("calGrid");
    assert_eq!(element("calMonth").text_content().as_deref(), Some("Декабрь 2024"));
    assert!(grid.query_selector(r#"[data-date="2024-12-31"]"#).ok().flatten().is_some());

    click("calNext");
    settle().await;
    assert_eq!(element("calMonth").text_content().as_deref(), Some("Январь 2025"));
    assert!(grid.query_selector(r#"[data-date="2025-01-01"]"#).ok().flatten().is_some());
    assert!(grid.query_selector(r#"[data-date="2024-12-31"]"#).ok().flatten().is_none());
    let marked = grid
        .query_selector(r#"[data-date="2025-01-15"]"#)
        .ok()
        .flatten()
        .expect("event day rendered");
    assert!(dom::has_class(&marked, "calendar__day--has-event"));

    click("calPrev");
    settle().await;
    assert_eq!(element("calMonth").text_content().as_deref(), Some("Декабрь 2024"));
    assert!(grid.query_selector(r#"[data-date="2025-01-01"]"#).ok().flatten().is_none());

    handle.destroy();
    fixture.remove();
}

#[wasm_bindgen_test]
async fn marker_click_opens_its_own_record() {
    let fixture = mount(r#"<div id="calGrid"></div>"#);
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let announcements = Rc::new(Announcements::new(
        vec![
            EventRecord::new("2024-03-20", "Первая"),
            EventRecord::new("2024-03-20", "Вторая"),
        ],
        today,
        5,
    ));
    let opened = Rc::new(RefCell::new(Vec::new()));
    let on_open = {
        let opened = Rc::clone(&opened);
        Callback::from(move |index: usize| opened.borrow_mut().push(index))
    };
    let props = CalendarWidgetProps {
        announcements,
        initial: Some(MonthCursor { year: 2024, month: 2 }),
        on_open,
    };
    let handle =
        yew::Renderer::<CalendarWidget>::with_root_and_props(element("calGrid"), props).render();
    settle().await;

    click_selector(r#"#calGrid .calendar__event-dot[data-ann-idx="1"]"#);
    settle().await;
    assert_eq!(*opened.borrow(), vec![1]);

    click_selector(r#"#calGrid [data-date="2024-03-20"]"#);
    settle().await;
    assert_eq!(*opened.borrow(), vec![1, 0]);

    handle.destroy();
    fixture.remove();
}

#[wasm_bindgen_test]
fn deep_link_opens_service_card() {
    let fixture = mount(
        r#"<div class="svc-card" id="svc-couples">
            <button class="svc-card__header" aria-expanded="false">Пары</button>
            <div class="svc-card__body"></div>
        </div>"#,
    );
    let window = dom::window().expect("window");
    let doc = dom::document().expect("document");
    window.location().set_hash("svc-couples").expect("set hash");

    let card = sections::open_deep_linked_card(&window, &doc, 0).expect("card opened");
    assert_eq!(card.id(), "svc-couples");
    assert!(dom::has_class(&card, sections::CARD_OPEN_CLASS));
    let header = card
        .query_selector(sections::CARD_HEADER_SELECTOR)
        .ok()
        .flatten()
        .expect("header exists");
    assert!(practice_web::a11y::is_expanded(&header));

    window.location().set_hash("").expect("reset hash");
    fixture.remove();
}

#[wasm_bindgen_test]
async fn fade_in_reveals_once_visible() {
    let window = dom::window().expect("window");
    let doc = dom::document().expect("document");
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let target = doc.create_element("div").expect("create target");
    target.set_class_name("fade-in");
    target.set_attribute("style", "height: 100px").expect("style");
    doc.body()
        .expect("document body")
        .prepend_with_node_1(&target)
        .expect("prepend target");

    let observed = scroll::install_reveal(&doc, &Settings::default()).expect("observer available");
    assert!(observed >= 1);
    sleep(Duration::from_millis(200)).await;
    assert!(dom::has_class(&target, scroll::REVEALED_CLASS));

    target.remove();
}
