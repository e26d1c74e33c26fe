//! Owned tree of tagged elements.
//!
//! Page fetchers parse raw markup with whatever library they like and hand the
//! pipeline a [`Document`]. Everything downstream only sees [`NodeRef`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Element {
                    tag: "#document".to_string(),
                    attrs: Vec::new(),
                },
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.node(self.root_id())
    }

    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { doc: self, id }
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.push(
            parent,
            NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
                attrs,
            },
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn find_by_class(&self, class: &str) -> Vec<NodeRef<'_>> {
        self.root().find_by_class(class)
    }

    pub fn find_by_tag_class(&self, tag: &str, class: &str) -> Vec<NodeRef<'_>> {
        self.root().find_by_tag_class(tag, class)
    }

    pub fn find_by_id(&self, prefix: &str) -> Vec<NodeRef<'_>> {
        self.root().find_by_id(prefix)
    }
}

/// Borrowed handle to one node of a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data().kind, NodeKind::Element { .. })
    }

    /// Lowercase tag name, None for text nodes
    pub fn tag(&self) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &'a str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|id| self.doc.node(id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> {
        let doc = self.doc;
        self.data().children.iter().map(move |&id| doc.node(id))
    }

    /// Next element sibling; text in between is skipped
    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        let parent = self.parent()?;
        parent
            .children()
            .skip_while(|c| c.id != self.id)
            .skip(1)
            .find(|c| c.is_element())
    }

    /// All nodes below this one in document order
    pub fn descendants(&self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.data().children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.doc.node(id);
            stack.extend(node.data().children.iter().rev().copied());
            out.push(node);
        }
        out
    }

    pub fn text(&self) -> String {
        self.text_excluding(&[])
    }

    /// Concatenated descendant text, skipping subtrees whose element carries
    /// any of `skip_classes`
    pub fn text_excluding(&self, skip_classes: &[String]) -> String {
        let mut out = String::new();
        self.collect_text(skip_classes, &mut out);
        out
    }

    fn collect_text(&self, skip_classes: &[String], out: &mut String) {
        match &self.data().kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                if self.classes().any(|c| skip_classes.iter().any(|s| s == c)) {
                    return;
                }
                for child in self.children() {
                    child.collect_text(skip_classes, out);
                }
            }
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<NodeRef<'a>> {
        self.descendants()
            .into_iter()
            .filter(|n| n.has_class(class))
            .collect()
    }

    pub fn find_by_tag_class(&self, tag: &str, class: &str) -> Vec<NodeRef<'a>> {
        self.descendants()
            .into_iter()
            .filter(|n| n.tag() == Some(tag) && n.has_class(class))
            .collect()
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeRef<'a>> {
        self.descendants()
            .into_iter()
            .filter(|n| n.tag() == Some(tag))
            .collect()
    }

    /// Elements whose id starts with `prefix`
    pub fn find_by_id(&self, prefix: &str) -> Vec<NodeRef<'a>> {
        self.descendants()
            .into_iter()
            .filter(|n| n.attr("id").is_some_and(|id| id.starts_with(prefix)))
            .collect()
    }
}
