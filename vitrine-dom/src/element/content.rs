#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable access to the child list, turning leaf content into an empty list first.
    pub fn children_mut(&mut self) -> &mut Vec<super::Element> {
        if !matches!(self, Self::Children(_)) {
            *self = Self::Children(Vec::new());
        }
        match self {
            Self::Children(children) => children,
            _ => unreachable!("content was just replaced with children"),
        }
    }
}
