use crate::ui::tree::Node;

use super::intent::CounterIntent;

pub const INCREMENT_LABEL: &str = "+";
pub const DECREMENT_LABEL: &str = "-";

/// Describe the counter for `value`: the value as plain base-10 text,
/// then the `+` and `-` buttons.
pub fn counter_view(value: i64) -> Node<CounterIntent> {
    Node::fragment([
        Node::text(value.to_string()),
        Node::button(INCREMENT_LABEL, CounterIntent::Increment),
        Node::button(DECREMENT_LABEL, CounterIntent::Decrement),
    ])
}
