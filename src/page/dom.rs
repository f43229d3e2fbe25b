use std::collections::{BTreeMap, BTreeSet};

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// The slice of an element the page behaviors care about: tag, id, class
/// list, attributes, tree position and a vertical box for scroll geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    dom_id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    content: String,
    parent: Option<ElementId>,
    attached: bool,
    offset_top: f64,
    height: f64,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            dom_id: None,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            content: String::new(),
            parent: None,
            attached: true,
            offset_top: 0.0,
            height: 0.0,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.dom_id = Some(id.to_string());
        self
    }

    /// Add one or more space-separated classes.
    pub fn with_class(mut self, classes: &str) -> Self {
        for c in classes.split_whitespace() {
            self.classes.insert(c.to_string());
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Place the element's box at `offset_top` with the given height.
    pub fn at(mut self, offset_top: f64, height: f64) -> Self {
        self.offset_top = offset_top;
        self.height = height;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn dom_id(&self) -> Option<&str> {
        self.dom_id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Returns `true` if the class was not present before.
    pub fn add_class(&mut self, class: &str) -> bool {
        self.classes.insert(class.to_string())
    }

    /// Returns `true` if the class was present before.
    pub fn remove_class(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    /// Flip a class and return whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    /// Add the class when `on`, remove it otherwise.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn offset_top(&self) -> f64 {
        self.offset_top
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A programmatic scroll the page asked the host to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    last_request: Option<ScrollRequest>,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            height,
            last_request: None,
        }
    }

    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.last_request = Some(ScrollRequest { top, behavior });
    }

    pub fn last_scroll_request(&self) -> Option<ScrollRequest> {
        self.last_request
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0)
    }
}

/// Flat element arena plus the viewport.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    pub viewport: Viewport,
}

impl Document {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            elements: Vec::new(),
            viewport,
        }
    }

    pub fn append(&mut self, parent: Option<ElementId>, mut element: Element) -> ElementId {
        element.parent = parent;
        element.attached = parent.map_or(true, |p| self.elements.get(p.0).is_some_and(|e| e.attached));
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Mutable access to two distinct elements at once.
    pub fn pair_mut(&mut self, a: ElementId, b: ElementId) -> Option<(&mut Element, &mut Element)> {
        if a == b || a.0 >= self.elements.len() || b.0 >= self.elements.len() {
            return None;
        }
        if a.0 < b.0 {
            let (left, right) = self.elements.split_at_mut(b.0);
            Some((&mut left[a.0], &mut right[0]))
        } else {
            let (left, right) = self.elements.split_at_mut(a.0);
            Some((&mut right[0], &mut left[b.0]))
        }
    }

    /// Attached element carrying the given DOM id.
    pub fn by_id(&self, dom_id: &str) -> Option<ElementId> {
        if dom_id.is_empty() {
            return None;
        }
        self.elements
            .iter()
            .position(|e| e.attached && e.dom_id.as_deref() == Some(dom_id))
            .map(ElementId)
    }

    /// First attached element matching `selector`, in document order.
    pub fn query(&self, selector: &Selector) -> Option<ElementId> {
        self.ids().find(|id| selector.matches(self, Some(*id)))
    }

    /// All attached elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.ids().filter(|id| selector.matches(self, Some(*id))).collect()
    }

    pub fn children(&self, parent: ElementId) -> Vec<ElementId> {
        self.ids()
            .filter(|id| self.elements[id.0].parent == Some(parent))
            .collect()
    }

    /// Detach every descendant of `parent`; detached elements no longer
    /// match queries.
    pub fn clear_children(&mut self, parent: ElementId) {
        for i in 0..self.elements.len() {
            if self.is_descendant_of(ElementId(i), parent) {
                self.elements[i].attached = false;
            }
        }
    }

    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.get(id).and_then(|e| e.parent), move |p| {
            self.get(*p).and_then(|e| e.parent)
        })
    }

    fn is_descendant_of(&self, id: ElementId, ancestor: ElementId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attached)
            .map(|(i, _)| ElementId(i))
    }

    pub fn len(&self) -> usize {
        self.elements.iter().filter(|e| e.attached).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The subset of CSS selectors the page wiring uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The window itself (scroll events carry no element target).
    Window,
    Id(String),
    Class(String),
    Tag(String),
    /// `a[href^="#"]`: in-page links.
    HashLink,
    /// One element bound at wiring time.
    Element(ElementId),
    /// `ancestor subject`
    Descendant {
        ancestor: Box<Selector>,
        subject: Box<Selector>,
    },
}

impl Selector {
    /// Parse a whitespace-separated descendant chain such as `nav ul`,
    /// `.social-icons a`, `#header` or `a[href^="#"]`.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split_whitespace().map(Self::parse_simple);
        let first = parts.next().unwrap_or(Selector::Window);
        parts.fold(first, |ancestor, subject| Selector::Descendant {
            ancestor: Box::new(ancestor),
            subject: Box::new(subject),
        })
    }

    fn parse_simple(part: &str) -> Self {
        if let Some(id) = part.strip_prefix('#') {
            Selector::Id(id.to_string())
        } else if let Some(class) = part.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else if part.replace('\'', "\"") == "a[href^=\"#\"]" {
            Selector::HashLink
        } else {
            Selector::Tag(part.to_lowercase())
        }
    }

    pub fn matches(&self, doc: &Document, target: Option<ElementId>) -> bool {
        let element = match (self, target) {
            (Selector::Window, None) => return true,
            (_, None) => return false,
            (_, Some(id)) => match doc.get(id) {
                Some(e) if e.attached => e,
                _ => return false,
            },
        };
        match self {
            Selector::Window => false,
            Selector::Element(bound) => target == Some(*bound),
            Selector::Id(id) => element.dom_id() == Some(id.as_str()),
            Selector::Class(class) => element.has_class(class),
            Selector::Tag(tag) => element.tag() == tag,
            Selector::HashLink => {
                element.tag() == "a" && element.attr("href").is_some_and(|h| h.starts_with('#'))
            }
            Selector::Descendant { ancestor, subject } => {
                subject.matches(doc, target)
                    && target.is_some_and(|id| doc.ancestors(id).any(|a| ancestor.matches(doc, Some(a))))
            }
        }
    }

    /// The target itself or its nearest ancestor that matches, the way a
    /// listener on a link still sees clicks on the icon inside it.
    pub fn closest(&self, doc: &Document, target: ElementId) -> Option<ElementId> {
        std::iter::once(target)
            .chain(doc.ancestors(target))
            .find(|id| self.matches(doc, Some(*id)))
    }
}
