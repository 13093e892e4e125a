//! Widget tree and spatial focus traversal
//!
//! The tree is a plain tagged enum: fields are leaves, groups translate
//! their children. Traversal walks it depth-first looking for the next
//! eligible field in reading order (top to bottom, then left to right, with
//! y growing downward).

use crate::field::{FieldId, TextField};
use crate::view::geometry::Point;

/// A node in the stage's widget tree
#[derive(Debug)]
pub enum Widget {
    TextField(Box<TextField>),
    Group(Group),
}

impl From<TextField> for Widget {
    fn from(field: TextField) -> Self {
        Widget::TextField(Box::new(field))
    }
}

impl From<Group> for Widget {
    fn from(group: Group) -> Self {
        Widget::Group(group)
    }
}

/// A container that offsets its children by `origin`
#[derive(Debug, Default)]
pub struct Group {
    pub origin: Point,
    pub children: Vec<Widget>,
}

impl Group {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            children: Vec::new(),
        }
    }

    pub fn with(mut self, child: impl Into<Widget>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push(&mut self, child: impl Into<Widget>) {
        self.children.push(child.into());
    }

    pub fn find_field(&self, id: FieldId) -> Option<&TextField> {
        self.children.iter().find_map(|child| match child {
            Widget::TextField(field) if field.id() == id => Some(field.as_ref()),
            Widget::TextField(_) => None,
            Widget::Group(group) => group.find_field(id),
        })
    }

    pub fn find_field_mut(&mut self, id: FieldId) -> Option<&mut TextField> {
        self.children.iter_mut().find_map(|child| match child {
            Widget::TextField(field) if field.id() == id => Some(field.as_mut()),
            Widget::TextField(_) => None,
            Widget::Group(group) => group.find_field_mut(id),
        })
    }

    /// Stage position of the group that directly contains `id`, given this
    /// group's parent sits at `parent`
    pub fn parent_origin_of(&self, id: FieldId, parent: Point) -> Option<Point> {
        let here = parent.offset(self.origin);
        self.children.iter().find_map(|child| match child {
            Widget::TextField(field) if field.id() == id => Some(here),
            Widget::TextField(_) => None,
            Widget::Group(group) => group.parent_origin_of(id, here),
        })
    }

    /// Stage position of a field's top-left corner
    pub fn stage_position_of(&self, id: FieldId, parent: Point) -> Option<Point> {
        let origin = self.parent_origin_of(id, parent)?;
        let field = self.find_field(id)?;
        Some(field.bounds().origin().offset(origin))
    }

    /// Topmost field whose bounds contain `p` (later children draw on top),
    /// together with the stage origin of its parent
    pub fn field_at(&self, p: Point, parent: Point) -> Option<(FieldId, Point)> {
        let here = parent.offset(self.origin);
        self.children.iter().rev().find_map(|child| match child {
            Widget::TextField(field) => {
                let bounds = field.bounds().translated(here);
                bounds.contains(p.x, p.y).then(|| (field.id(), here))
            }
            Widget::Group(group) => group.field_at(p, here),
        })
    }

    /// Visit every field in tree order with its parent's stage origin
    pub fn for_each_field_mut(&mut self, parent: Point, f: &mut impl FnMut(&mut TextField, Point)) {
        let here = parent.offset(self.origin);
        for child in &mut self.children {
            match child {
                Widget::TextField(field) => f(field, here),
                Widget::Group(group) => group.for_each_field_mut(here, f),
            }
        }
    }

    /// Visit every field in tree order with its parent's stage origin
    pub fn for_each_field(&self, parent: Point, f: &mut impl FnMut(&TextField, Point)) {
        let here = parent.offset(self.origin);
        for child in &self.children {
            match child {
                Widget::TextField(field) => f(field, here),
                Widget::Group(group) => group.for_each_field(here, f),
            }
        }
    }
}

// =============================================================================
// Traversal
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Candidate {
    id: FieldId,
    at: Point,
}

/// Next field after `from` in reading order (previous when `backward`),
/// wrapping around to the first (last) field. Returns `None` when no other
/// field is eligible.
pub fn next_field(root: &Group, from: FieldId, backward: bool) -> Option<FieldId> {
    let current = root.stage_position_of(from, Point::default())?;

    let found = find_next(root, Point::default(), from, current, backward, None).or_else(|| {
        let sentinel = if backward {
            Point::new(f32::MAX, f32::MAX)
        } else {
            Point::new(f32::MIN, f32::MIN)
        };
        find_next(root, Point::default(), from, sentinel, backward, None)
    });

    tracing::debug!(target: "focus", ?from, backward, to = ?found.map(|c| c.id), "traversal");
    found.map(|c| c.id)
}

fn find_next(
    group: &Group,
    parent: Point,
    from: FieldId,
    current: Point,
    backward: bool,
    mut best: Option<Candidate>,
) -> Option<Candidate> {
    let here = parent.offset(group.origin);

    for child in &group.children {
        match child {
            Widget::TextField(field) => {
                if field.id() == from || !field.is_traversable() {
                    continue;
                }
                let at = field.bounds().origin().offset(here);
                if !follows(at, current, backward) {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some(b) => follows(b.at, at, backward),
                };
                if better {
                    best = Some(Candidate { id: field.id(), at });
                }
            }
            Widget::Group(inner) => {
                best = find_next(inner, here, from, current, backward, best);
            }
        }
    }

    best
}

/// Whether `p` comes after `reference` in reading order (before, when
/// `backward`). Equal positions never follow each other.
fn follows(p: Point, reference: Point, backward: bool) -> bool {
    let after = p.y > reference.y || (p.y == reference.y && p.x > reference.x);
    let before = p.y < reference.y || (p.y == reference.y && p.x < reference.x);
    if backward { before } else { after }
}
