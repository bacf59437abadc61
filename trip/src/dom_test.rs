use super::*;

struct Markup(&'static str);

impl View for Markup {
    fn template(&self) -> String {
        self.0.to_string()
    }
}

fn doc() -> Document {
    Document::new(&Markup("<main></main>"))
}

// =============================================================
// render
// =============================================================

#[test]
fn new_document_has_only_root() {
    let doc = doc();
    assert_eq!(doc.node_count(), 1);
    assert_eq!(doc.to_html(), "<main></main>");
}

#[test]
fn render_appends_before_end() {
    let doc = doc();
    let root = doc.root();
    let a = doc.render(&Markup("<a></a>"), root, RenderPosition::BeforeEnd).unwrap();
    let b = doc.render(&Markup("<b></b>"), root, RenderPosition::BeforeEnd).unwrap();
    assert_eq!(doc.children(root).unwrap(), vec![a, b]);
    assert_eq!(doc.to_html(), "<main><a></a><b></b></main>");
}

#[test]
fn render_after_begin_prepends() {
    let doc = doc();
    let root = doc.root();
    doc.render(&Markup("<a></a>"), root, RenderPosition::BeforeEnd).unwrap();
    doc.render(&Markup("<b></b>"), root, RenderPosition::AfterBegin).unwrap();
    assert_eq!(doc.to_html(), "<main><b></b><a></a></main>");
}

#[test]
fn render_nests_inside_closing_tag() {
    let doc = doc();
    let list = doc.render(&Markup("<ul class=\"list\"></ul>"), doc.root(), RenderPosition::BeforeEnd).unwrap();
    doc.render(&Markup("<li>1</li>"), list, RenderPosition::BeforeEnd).unwrap();
    assert_eq!(doc.html(list).unwrap(), "<ul class=\"list\"><li>1</li></ul>");
}

#[test]
fn render_into_missing_container_fails() {
    let doc = doc();
    let node = doc.render(&Markup("<a></a>"), doc.root(), RenderPosition::BeforeEnd).unwrap();
    doc.remove(node).unwrap();
    let err = doc.render(&Markup("<b></b>"), node, RenderPosition::BeforeEnd).unwrap_err();
    assert_eq!(err, DomError::NodeNotFound(node));
}

// =============================================================
// replace / remove
// =============================================================

#[test]
fn replace_keeps_position() {
    let doc = doc();
    let root = doc.root();
    doc.render(&Markup("<a></a>"), root, RenderPosition::BeforeEnd).unwrap();
    let b = doc.render(&Markup("<b></b>"), root, RenderPosition::BeforeEnd).unwrap();
    doc.render(&Markup("<c></c>"), root, RenderPosition::BeforeEnd).unwrap();

    let x = doc.replace(&Markup("<x></x>"), b).unwrap();
    assert!(!doc.contains(b));
    assert!(doc.contains(x));
    assert_eq!(doc.to_html(), "<main><a></a><x></x><c></c></main>");
}

#[test]
fn replace_root_is_detached() {
    let doc = doc();
    let root = doc.root();
    assert_eq!(doc.replace(&Markup("<x></x>"), root).unwrap_err(), DomError::Detached(root));
}

#[test]
fn remove_drops_subtree() {
    let doc = doc();
    let list = doc.render(&Markup("<ul></ul>"), doc.root(), RenderPosition::BeforeEnd).unwrap();
    let item = doc.render(&Markup("<li></li>"), list, RenderPosition::BeforeEnd).unwrap();
    assert_eq!(doc.node_count(), 3);

    doc.remove(list).unwrap();
    assert_eq!(doc.node_count(), 1);
    assert!(!doc.contains(item));
    assert_eq!(doc.to_html(), "<main></main>");
}

#[test]
fn remove_twice_fails() {
    let doc = doc();
    let node = doc.render(&Markup("<a></a>"), doc.root(), RenderPosition::BeforeEnd).unwrap();
    doc.remove(node).unwrap();
    assert_eq!(doc.remove(node).unwrap_err(), DomError::NodeNotFound(node));
}

#[test]
fn clones_share_the_tree() {
    let doc = doc();
    let other = doc.clone();
    other.render(&Markup("<a></a>"), other.root(), RenderPosition::BeforeEnd).unwrap();
    assert_eq!(doc.node_count(), 2);
}
