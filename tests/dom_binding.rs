#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use sessvision_web::dom::{get_element_by_id, on_delegated};
use sessvision_web::models::{AdminAction, CardRecord, Estado};
use sessvision_web::utils::constants::{MARK_READ_SELECTOR, STATUS_SELECT_SELECTOR};
use sessvision_web::views::admin_panel::{action_id, card_record, AdminPanel};
use sessvision_web::views::layout_report;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_fixture(html: &str) -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let root = document.create_element("div").expect("create test root");
    root.set_inner_html(html);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("attach test root");
    root
}

fn by_id(id: &str) -> Element {
    get_element_by_id(id).unwrap_or_else(|| panic!("#{} in fixture", id))
}

#[wasm_bindgen_test]
fn action_id_falls_back_to_solicitud_id() {
    let root = mount_fixture(
        r#"<button id="ctl-a" data-id="12"></button>
           <button id="ctl-b" data-solicitud-id="34"></button>
           <button id="ctl-c" data-id="abc"></button>
           <button id="ctl-d"></button>"#,
    );

    assert_eq!(action_id(&by_id("ctl-a")), Some(12));
    assert_eq!(action_id(&by_id("ctl-b")), Some(34));
    assert_eq!(action_id(&by_id("ctl-c")), None);
    assert_eq!(action_id(&by_id("ctl-d")), None);

    root.remove();
}

#[wasm_bindgen_test]
fn card_record_reads_estado_from_select_or_status_class() {
    let root = mount_fixture(
        r#"<div id="solicitud-501" class="solicitud-card unread">
             <select class="status-select" data-id="501">
               <option value="pendiente">Pendiente</option>
               <option value="contactado" selected>Contactado</option>
             </select>
           </div>
           <div id="solicitud-502" class="solicitud-card">
             <span class="status status-cerrado">Cerrado</span>
           </div>
           <div id="solicitud-503" class="solicitud-card"></div>
           <div id="solicitud-x" class="solicitud-card"></div>"#,
    );

    assert_eq!(
        card_record(&by_id("solicitud-501")),
        Some(CardRecord::new(501, true, Estado::Contactado))
    );
    assert_eq!(
        card_record(&by_id("solicitud-502")),
        Some(CardRecord::new(502, false, Estado::Cerrado))
    );
    assert_eq!(
        card_record(&by_id("solicitud-503")),
        Some(CardRecord::new(503, false, Estado::Pendiente))
    );
    assert_eq!(card_record(&by_id("solicitud-x")), None);

    root.remove();
}

#[wasm_bindgen_test]
fn click_on_nested_icon_reaches_the_button() {
    let root = mount_fixture(
        r#"<div id="solicitud-610">
             <button class="mark-read-btn" data-id="610"><i id="icon-610" class="icon-check"></i></button>
           </div>"#,
    );
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = seen.clone();
        on_delegated(&root, "click", MARK_READ_SELECTOR, move |control, event| {
            event.stop_propagation();
            seen.borrow_mut().push(action_id(&control));
        })
        .expect("listener");
    }

    by_id("icon-610")
        .dyn_into::<HtmlElement>()
        .expect("icon is an HtmlElement")
        .click();

    assert_eq!(*seen.borrow(), vec![Some(610)]);
    root.remove();
}

#[wasm_bindgen_test]
fn status_change_is_delegated_with_selected_value() {
    let root = mount_fixture(
        r#"<div id="solicitud-620">
             <select id="select-620" class="status-select" data-id="620">
               <option value="pendiente" selected>Pendiente</option>
               <option value="cerrado">Cerrado</option>
             </select>
           </div>"#,
    );
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = seen.clone();
        on_delegated(&root, "change", STATUS_SELECT_SELECTOR, move |control, event| {
            event.stop_propagation();
            let value = control
                .dyn_ref::<HtmlSelectElement>()
                .map(HtmlSelectElement::value)
                .unwrap_or_default();
            seen.borrow_mut().push((action_id(&control), value));
        })
        .expect("listener");
    }

    let select: HtmlSelectElement = by_id("select-620").dyn_into().expect("select");
    select.set_value("cerrado");
    let init = EventInit::new();
    init.set_bubbles(true);
    let change = Event::new_with_event_init_dict("change", &init).expect("change event");
    select.dispatch_event(&change).expect("dispatch");

    assert_eq!(*seen.borrow(), vec![(Some(620), "cerrado".to_string())]);
    root.remove();
}

#[wasm_bindgen_test]
fn cancelled_delete_leaves_card_untouched() {
    let root = mount_fixture(
        r#"<div class="solicitudes-list">
             <div id="solicitud-630" class="solicitud-card unread">
               <button class="delete-btn" data-id="630">Eliminar</button>
             </div>
           </div>"#,
    );

    let window = web_sys::window().expect("window");
    let original_confirm = js_sys::Reflect::get(&window, &JsValue::from_str("confirm")).expect("confirm");
    let decline = js_sys::Function::new_no_args("return false;");
    js_sys::Reflect::set(&window, &JsValue::from_str("confirm"), &decline).expect("stub confirm");

    let panel = AdminPanel::mount().expect("panel mounts");
    panel.dispatch(AdminAction::Delete(630));

    js_sys::Reflect::set(&window, &JsValue::from_str("confirm"), &original_confirm).expect("restore confirm");

    let card = by_id("solicitud-630");
    assert!(!card.class_list().contains("is-busy"));
    let button = card.query_selector(".delete-btn").unwrap().expect("button");
    assert!(!button.has_attribute("disabled"));

    root.remove();
}

#[wasm_bindgen_test]
fn layout_report_lists_blocks_and_navbar_colour() {
    let root = mount_fixture(
        r#"<nav class="navbar" style="background-color: rgb(1, 2, 3); display: flex"></nav>
           <section class="hero"></section>"#,
    );

    let report = layout_report();
    assert!(report.contains(&".navbar encontrado".to_string()));
    assert!(report.contains(&".nav-menu NO encontrado".to_string()));
    assert!(report.contains(&".hero encontrado".to_string()));
    assert!(report.contains(&"navbar background-color=rgb(1, 2, 3) display=flex".to_string()));

    root.remove();
}
