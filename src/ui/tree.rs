//! Declarative description of what a view wants on screen.
//!
//! A view returns a [`Node`] tree; the renderer lays it out and the app
//! routes activations back through the action stored on each button.

/// One element of a view tree. `A` is the action a button dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<A> {
    /// Groups children without adding anything visible.
    Fragment(Vec<Node<A>>),
    /// Plain text, shown verbatim.
    Text(String),
    /// An actionable element.
    Button { label: String, on_activate: A },
}

impl<A> Node<A> {
    pub fn fragment(children: impl IntoIterator<Item = Node<A>>) -> Self {
        Node::Fragment(children.into_iter().collect())
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn button(label: impl Into<String>, on_activate: A) -> Self {
        Node::Button {
            label: label.into(),
            on_activate,
        }
    }

    /// Text and button nodes in document order, fragments flattened away.
    pub fn leaves(&self) -> Vec<&Node<A>> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Node<A>>) {
        match self {
            Node::Fragment(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            leaf => out.push(leaf),
        }
    }

    /// Buttons in document order. The position in this list is the
    /// button's activation index.
    pub fn buttons(&self) -> Vec<(&str, &A)> {
        self.leaves()
            .into_iter()
            .filter_map(|node| match node {
                Node::Button { label, on_activate } => Some((label.as_str(), on_activate)),
                _ => None,
            })
            .collect()
    }

    /// All text nodes concatenated, which is what the user reads.
    pub fn text_content(&self) -> String {
        self.leaves()
            .into_iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Index and action of the first button labelled `label`.
    pub fn find_button(&self, label: &str) -> Option<(usize, &A)> {
        self.buttons()
            .into_iter()
            .enumerate()
            .find(|(_, (l, _))| *l == label)
            .map(|(idx, (_, action))| (idx, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_fragments_flatten_in_order() {
        let tree = Node::fragment([
            Node::text("a"),
            Node::fragment([Node::button("x", 1), Node::text("b")]),
            Node::button("y", 2),
        ]);

        assert_eq!(tree.text_content(), "ab");
        assert_eq!(tree.buttons(), vec![("x", &1), ("y", &2)]);
        assert_eq!(tree.find_button("y"), Some((1, &2)));
        assert_eq!(tree.find_button("z"), None);
    }
}
