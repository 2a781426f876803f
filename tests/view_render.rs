mod common;

use common::{content_row, render};
use counter_tui::ui::counter::{counter_view, CounterIntent, DECREMENT_LABEL, INCREMENT_LABEL};
use counter_tui::ui::tree::Node;

#[test]
fn view_is_text_then_plus_then_minus() {
    let tree = counter_view(0);
    let leaves = tree.leaves();

    assert_eq!(leaves.len(), 3);
    assert_eq!(leaves[0], &Node::Text("0".to_string()));
    assert_eq!(
        tree.buttons(),
        vec![
            (INCREMENT_LABEL, &CounterIntent::Increment),
            (DECREMENT_LABEL, &CounterIntent::Decrement),
        ]
    );
}

#[test]
fn view_text_is_raw_base_ten() {
    assert_eq!(counter_view(-42).text_content(), "-42");
    assert_eq!(counter_view(1_000_000).text_content(), "1000000");
    assert_eq!(counter_view(i64::MIN).text_content(), i64::MIN.to_string());
}

#[test]
fn view_is_pure() {
    assert_eq!(counter_view(5), counter_view(5));
}

#[test]
fn initial_render_shows_zero_and_both_buttons() {
    let (lines, hits) = render(&counter_view(0), Some(0), 40, 5);
    let row = content_row(&lines, &hits);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].button, 0);
    assert_eq!(hits[1].button, 1);
    let cells: Vec<&str> = row.split('│').map(str::trim).filter(|c| !c.is_empty()).collect();
    assert_eq!(cells, vec!["0", "+", "-"]);
}

#[test]
fn render_shows_negative_value() {
    let (lines, hits) = render(&counter_view(-17), None, 40, 5);
    let row = content_row(&lines, &hits);
    let cells: Vec<&str> = row.split('│').map(str::trim).filter(|c| !c.is_empty()).collect();
    assert_eq!(cells, vec!["-17", "+", "-"]);
}

#[test]
fn hit_areas_do_not_overlap_and_sit_on_one_row() {
    let (_, hits) = render(&counter_view(123), None, 60, 9);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].area.y, hits[1].area.y);
    assert!(hits[0].area.right() <= hits[1].area.x);
    assert_eq!(hits[0].area.height, 3);
}

#[test]
fn wide_values_still_leave_room_for_both_buttons() {
    let (lines, hits) = render(&counter_view(i64::MAX), None, 60, 5);
    let row = content_row(&lines, &hits);
    assert_eq!(hits.len(), 2);
    assert!(row.contains(&i64::MAX.to_string()));
}
