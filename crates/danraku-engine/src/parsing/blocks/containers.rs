use super::{kinds::ListMarker, types::ContainerFrame};

/// The container frames the builder is currently inside.
#[derive(Debug, Default, Clone)]
pub struct ContainerPath(pub Vec<ContainerFrame>);

impl ContainerPath {
    pub fn quote_depth(&self) -> u8 {
        self.0
            .iter()
            .find_map(|f| match f {
                ContainerFrame::BlockQuote { depth } => Some(*depth),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Moves to a new blockquote depth. Lists never survive a change of quote
    /// depth, so every other frame is dropped as well.
    pub fn set_blockquote_depth(&mut self, depth: u8) {
        if depth == self.quote_depth() {
            return;
        }
        self.0.clear();
        if depth > 0 {
            self.0.push(ContainerFrame::BlockQuote { depth });
        }
    }

    pub fn in_list(&self) -> bool {
        self.0
            .iter()
            .any(|f| matches!(f, ContainerFrame::List { .. }))
    }

    /// Opens a new list item. The enclosing list frame is reused when the
    /// marker family matches, otherwise a new list starts.
    pub fn open_list_item(&mut self, marker: ListMarker, item: ContainerFrame) {
        let same_list = self
            .0
            .iter()
            .any(|f| matches!(f, ContainerFrame::List { marker: m } if *m == marker));
        if same_list {
            self.0
                .retain(|f| !matches!(f, ContainerFrame::ListItem { .. }));
        } else {
            self.close_list();
            self.0.push(ContainerFrame::List { marker });
        }
        self.0.push(item);
    }

    pub fn close_list(&mut self) {
        self.0.retain(|f| {
            !matches!(
                f,
                ContainerFrame::List { .. } | ContainerFrame::ListItem { .. }
            )
        });
    }
}
