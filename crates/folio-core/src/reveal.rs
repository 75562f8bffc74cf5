//! One-way "scrolled into view" flags for project cards.

use crate::scroll::SectionExtent;

#[derive(Debug, Clone)]
struct Card {
    id: String,
    extent: SectionExtent,
    revealed: bool,
}

/// Tracks which cards have entered the (margin-expanded) viewport.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    /// Visible fraction of a card's height needed to reveal it.
    threshold: f32,
    /// Pixels added above and below the viewport.
    root_margin: i32,
    cards: Vec<Card>,
}

impl RevealTracker {
    pub fn new(threshold: f32, root_margin: i32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin,
            cards: Vec::new(),
        }
    }

    /// Record a card's extent. Re-measuring never hides a revealed card.
    pub fn measure(&mut self, id: &str, top: i32, height: i32) {
        let extent = SectionExtent {
            top,
            height: height.max(0),
        };
        match self.cards.iter_mut().find(|c| c.id == id) {
            Some(card) => card.extent = extent,
            None => self.cards.push(Card {
                id: id.to_string(),
                extent,
                revealed: false,
            }),
        }
    }

    /// Check every hidden card against the viewport at `scroll_y`.
    /// Returns ids revealed by this call, in registration order.
    pub fn update(&mut self, scroll_y: i32, viewport_height: i32) -> Vec<String> {
        let view_top = scroll_y.saturating_sub(self.root_margin);
        let view_bottom = scroll_y
            .saturating_add(viewport_height.max(0))
            .saturating_add(self.root_margin);
        let threshold = self.threshold;

        let mut newly = Vec::new();
        for card in self.cards.iter_mut().filter(|c| !c.revealed) {
            if visible(card.extent, view_top, view_bottom, threshold) {
                card.revealed = true;
                log::debug!("Card '{}' revealed", card.id);
                newly.push(card.id.clone());
            }
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.cards.iter().any(|c| c.id == id && c.revealed)
    }

    pub fn revealed(&self) -> impl Iterator<Item = &str> {
        self.cards
            .iter()
            .filter(|c| c.revealed)
            .map(|c| c.id.as_str())
    }
}

fn visible(extent: SectionExtent, view_top: i32, view_bottom: i32, threshold: f32) -> bool {
    if extent.height == 0 {
        return extent.top >= view_top && extent.top < view_bottom;
    }
    let overlap =
        i64::from(extent.bottom().min(view_bottom)) - i64::from(extent.top.max(view_top));
    if overlap <= 0 {
        return false;
    }
    overlap as f32 / extent.height as f32 >= threshold
}
