use ego_tree::NodeId;
use scraper::{Html, Node};

/// Strip a feed item's embedded HTML down to readable plain text.
///
/// Script and style subtrees are dropped with their contents, `class` and
/// `style` attributes are stripped from every remaining element, and a
/// single document-order pass detaches any element whose subtree carries no
/// text. The pass is deliberately not a fixpoint: an element emptied only
/// by a later sibling's removal is not revisited. html5ever's recovery
/// parsing means this never fails; plain text comes back unchanged.
pub fn clean(fragment: &str) -> String {
    let mut html = Html::parse_fragment(fragment);

    let noise: Vec<NodeId> = html
        .tree
        .root()
        .descendants()
        .filter(|node| match node.value() {
            Node::Element(el) => el.name() == "script" || el.name() == "style",
            _ => false,
        })
        .map(|node| node.id())
        .collect();
    for id in noise {
        if let Some(mut node) = html.tree.get_mut(id) {
            node.detach();
        }
    }

    let elements: Vec<NodeId> = html
        .tree
        .root()
        .descendants()
        .filter(|node| node.value().is_element())
        .map(|node| node.id())
        .collect();

    for id in &elements {
        if let Some(mut node) = html.tree.get_mut(*id) {
            if let Node::Element(el) = node.value() {
                el.attrs.retain(|name, _| {
                    name.local.as_ref() != "class" && name.local.as_ref() != "style"
                });
            }
        }
    }

    // Same document-order list, one pass.
    for id in &elements {
        if subtree_text_is_empty(&html, *id) {
            if let Some(mut node) = html.tree.get_mut(*id) {
                node.detach();
            }
        }
    }

    visible_text(&html)
}

fn subtree_text_is_empty(html: &Html, id: NodeId) -> bool {
    match html.tree.get(id) {
        Some(node) => node.descendants().all(|n| match n.value() {
            Node::Text(text) => text.is_empty(),
            _ => true,
        }),
        None => false,
    }
}

fn visible_text(html: &Html) -> String {
    html.tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(clean("Hello there"), "Hello there");
    }

    #[test]
    fn scripts_go_including_their_text() {
        assert_eq!(clean("<script>evil()</script><p>Hi</p>"), "Hi");
    }

    #[test]
    fn styles_go_including_their_text() {
        assert_eq!(clean("<style>p { color: red }</style><p>Hi</p>"), "Hi");
    }

    #[test]
    fn class_and_style_attributes_do_not_leak() {
        assert_eq!(clean(r#"<p class="big" style="color:red">Hi</p>"#), "Hi");
    }

    #[test]
    fn text_empty_elements_are_dropped() {
        assert_eq!(clean("<div><span></span>Hi<br/></div>"), "Hi");
        assert_eq!(clean("<div></div>"), "");
    }

    #[test]
    fn nested_markup_flattens_to_visible_text() {
        assert_eq!(clean("<div><p>A</p><p><b>B</b></p></div>"), "AB");
    }

    #[test]
    fn clean_is_stable_on_its_own_output() {
        let once = clean("<p>Hello <b>world</b></p>");
        assert_eq!(once, "Hello world");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn whitespace_only_elements_survive() {
        // goquery-style emptiness means the empty string, not blank text.
        assert_eq!(clean("<p> </p><p>Hi</p>"), " Hi");
    }
}
