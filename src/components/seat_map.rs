use crate::constants::{ROW_INDEX_ATTR, SELECTED_ROW_CLASS};
use crate::dom;
use crate::models::PageSeatData;
use crate::seat_map::{CarriageCard, SeatGroup, SeatMapLayout, SelectionChange, SelectionState};
use leptos::{
    component, create_effect, create_memo, create_rw_signal, create_signal, view, IntoView,
    SignalGet, SignalUpdate, SignalWith,
};
use std::rc::Rc;
use web_sys::{Element, HtmlElement};

/// Seat cards for the selected row, with its diagrams written into
/// `svg_panel`
///
/// Clicking a result row selects it; clicking it again collapses it. Row
/// highlighting and the diagram toggle button follow the selection.
#[component]
pub fn SeatMap(
    data: Rc<PageSeatData>,
    rows: Vec<Element>,
    svg_panel: Element,
    toggle_button: Option<HtmlElement>,
) -> impl IntoView {
    let selection = create_rw_signal(SelectionState::default());

    for row in &rows {
        let Some(index) = row.get_attribute(ROW_INDEX_ATTR) else {
            continue;
        };
        dom::listen(row, "click", move |_: web_sys::MouseEvent| {
            let mut change = None;
            selection.update(|s| change = Some(s.toggle(&index)));
            match change {
                Some(SelectionChange::Selected { row, previous }) => {
                    crate::log!("Seat map: row {} selected (was {:?})", row, previous);
                }
                Some(SelectionChange::Cleared { row }) => {
                    crate::log!("Seat map: row {} collapsed", row);
                }
                None => {}
            }
        });
    }

    let layout = create_memo(move |_| {
        selection.with(|s| s.selected().map(|row| SeatMapLayout::for_row(&data, row)))
    });

    create_effect(move |_| {
        let selected = selection.with(|s| s.selected().map(str::to_owned));
        for row in &rows {
            let is_selected = selected.is_some() && row.get_attribute(ROW_INDEX_ATTR) == selected;
            dom::set_class(row, SELECTED_ROW_CLASS, is_selected);
        }
        if let Some(button) = &toggle_button {
            let display = if selected.is_some() { "block" } else { "none" };
            let _ = button.style().set_property("display", display);
        }
    });

    create_effect(move |_| {
        let markup = layout.with(|l| l.as_ref().map(SeatMapLayout::diagram_markup));
        svg_panel.set_inner_html(&markup.unwrap_or_default());
    });

    view! {
        {move || layout.get().map(|layout| view! { <CarriageColumns columns=layout.columns/> })}
    }
}

#[component]
fn CarriageColumns(columns: Vec<Vec<CarriageCard>>) -> impl IntoView {
    view! {
        <div class="row">
            {columns.into_iter().map(|column| view! {
                <div class="col-12 col-md-3">
                    {column.into_iter()
                        .map(|card| view! { <SeatCard card=card/> })
                        .collect::<Vec<_>>()}
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn SeatCard(card: CarriageCard) -> impl IntoView {
    view! {
        <div class="seat-card">
            <div class="seat-header">"Wagon " {card.carriage}</div>
            {card.groups.into_iter()
                .map(|group| view! { <SeatTypeBadge group=group/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Badge with the count of one seat type; clicking it reveals the seat numbers
#[component]
fn SeatTypeBadge(group: SeatGroup) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);
    let badge_class = format!("seat-badge {}", group.seat_type.badge_class());
    let summary = format!("{}: {}", group.seat_type.label(), group.count());

    view! {
        <div class=badge_class on:click=move |_| set_expanded.update(|open| *open = !*open)>
            {summary}
        </div>
        <div class="seat-list fw-bold" class:show=move || expanded.get()>
            {group.seat_list()}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::constants::SHOW_CLASS;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::Document;

    wasm_bindgen_test_configure!(run_in_browser);

    struct Page {
        seat_panel: HtmlElement,
        svg_panel: Element,
        rows: Vec<Element>,
        button: HtmlElement,
    }

    async fn next_tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .expect("window")
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
                .expect("set timeout");
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.expect("timeout fired");
    }

    fn html(document: &Document, tag: &str) -> HtmlElement {
        let element: HtmlElement = document
            .create_element(tag)
            .expect("create element")
            .dyn_into()
            .expect("html element");
        document.body().expect("body").append_child(&element).expect("append");
        element
    }

    fn mount_seat_map(seats: &str, diagrams: &str, row_count: usize) -> Page {
        let document = dom::document().expect("document");
        let data = Rc::new(PageSeatData::from_json(seats, diagrams).expect("valid page data"));
        let seat_panel = html(&document, "div");
        let svg_panel: Element = html(&document, "div").into();
        let button = html(&document, "button");
        let rows: Vec<Element> = (0..row_count)
            .map(|i| {
                let row = html(&document, "tr");
                row.set_attribute(ROW_INDEX_ATTR, &i.to_string()).expect("set data-index");
                Element::from(row)
            })
            .collect();

        let (svg, row_list, toggle) = (svg_panel.clone(), rows.clone(), button.clone());
        leptos::mount_to(seat_panel.clone(), move || {
            view! { <SeatMap data=data rows=row_list svg_panel=svg toggle_button=Some(toggle)/> }
        });

        Page { seat_panel, svg_panel, rows, button }
    }

    fn click(element: &Element) {
        element.dyn_ref::<HtmlElement>().expect("html element").click();
    }

    fn texts(root: &Element, selector: &str) -> Vec<String> {
        let list = root.query_selector_all(selector).expect("query");
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.text_content())
            .map(|text| text.trim().to_string())
            .collect()
    }

    fn is_highlighted(row: &Element) -> bool {
        row.class_list().contains(SELECTED_ROW_CLASS)
    }

    fn button_display(button: &HtmlElement) -> String {
        button.style().get_property_value("display").expect("display")
    }

    const SEATS: &str = r#"{
        "0": {"A": {"1": "normal_seat", "2": "bike_seat"}},
        "1": {"B": {"7": "quiet_zone_seat", "8": "quiet_zone_seat"}, "C": {}}
    }"#;
    const DIAGRAMS: &str = r#"{
        "0": {"A": "<svg id='diagram-a'></svg>"},
        "1": {"C": "<svg id='diagram-c'></svg>", "B": "<svg id='diagram-b'></svg>"}
    }"#;

    #[wasm_bindgen_test]
    async fn test_selecting_row_renders_cards_and_diagrams() {
        let page = mount_seat_map(SEATS, DIAGRAMS, 2);
        next_tick().await;
        assert_eq!(button_display(&page.button), "none");

        click(&page.rows[0]);
        next_tick().await;

        assert!(is_highlighted(&page.rows[0]));
        assert!(!is_highlighted(&page.rows[1]));
        assert_eq!(button_display(&page.button), "block");

        assert_eq!(page.seat_panel.query_selector_all(".seat-card").expect("query").length(), 1);
        assert_eq!(texts(&page.seat_panel, ".seat-header"), vec!["Wagon A"]);
        assert_eq!(texts(&page.seat_panel, ".seat-badge"), vec!["Normalne: 1", "Rowerowe: 1"]);
        assert_eq!(texts(&page.seat_panel, ".seat-list"), vec!["1", "2"]);

        assert_eq!(page.svg_panel.child_element_count(), 1);
        let block = page.svg_panel.first_element_child().expect("diagram block");
        assert_eq!(block.class_name(), "mt-5");
        assert_eq!(texts(&page.svg_panel, "h3"), vec!["Wagon A"]);
        assert!(block.query_selector("h3 + svg#diagram-a").expect("query").is_some());
    }

    #[wasm_bindgen_test]
    async fn test_badge_click_toggles_seat_list() {
        let page = mount_seat_map(SEATS, DIAGRAMS, 2);
        click(&page.rows[0]);
        next_tick().await;

        let badges = page.seat_panel.query_selector_all(".seat-badge").expect("query");
        let lists = page.seat_panel.query_selector_all(".seat-list").expect("query");
        let badge: Element = badges.item(1).expect("bike badge").dyn_into().expect("element");
        let list = |i| -> Element { lists.item(i).expect("seat list").dyn_into().expect("element") };
        assert!(!list(0).class_list().contains(SHOW_CLASS));
        assert!(!list(1).class_list().contains(SHOW_CLASS));

        click(&badge);
        next_tick().await;
        assert!(list(1).class_list().contains(SHOW_CLASS));
        assert!(!list(0).class_list().contains(SHOW_CLASS));

        click(&badge);
        next_tick().await;
        assert!(!list(1).class_list().contains(SHOW_CLASS));
    }

    #[wasm_bindgen_test]
    async fn test_switching_and_collapsing_rows() {
        let page = mount_seat_map(SEATS, DIAGRAMS, 2);
        click(&page.rows[0]);
        next_tick().await;

        click(&page.rows[1]);
        next_tick().await;
        assert!(!is_highlighted(&page.rows[0]));
        assert!(is_highlighted(&page.rows[1]));
        assert_eq!(texts(&page.seat_panel, ".seat-header"), vec!["Wagon B"]);
        assert_eq!(texts(&page.seat_panel, ".seat-badge"), vec!["W strefie ciszy: 2"]);
        assert_eq!(texts(&page.svg_panel, "h3"), vec!["Wagon B"]);

        click(&page.rows[1]);
        next_tick().await;
        assert!(!is_highlighted(&page.rows[0]));
        assert!(!is_highlighted(&page.rows[1]));
        assert_eq!(button_display(&page.button), "none");
        assert_eq!(page.seat_panel.child_element_count(), 0);
        assert_eq!(page.svg_panel.inner_html(), "");
    }
}
