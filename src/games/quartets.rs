//! Quartets ("happy families"): sets of four themed cards.
//!
//! Every card of a quartet shows the quartet title, its own picture, and
//! the labels of all four cards with its own highlighted, so players know
//! which cards to ask for.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

pub const CARDS_PER_QUARTET: usize = 4;

/// A card being filled in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft<T> {
    pub image: Option<T>,
    pub label: String,
}

impl<T> Default for CardDraft<T> {
    fn default() -> Self {
        Self {
            image: None,
            label: String::new(),
        }
    }
}

/// A quartet being filled in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuartetDraft<T> {
    pub title: String,
    pub cards: [CardDraft<T>; CARDS_PER_QUARTET],
}

impl<T> Default for QuartetDraft<T> {
    fn default() -> Self {
        Self {
            title: String::new(),
            cards: std::array::from_fn(|_| CardDraft::default()),
        }
    }
}

impl<T> QuartetDraft<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Fill in card `index` (0..4). Out-of-range indices are ignored.
    #[must_use]
    pub fn with_card(mut self, index: usize, image: T, label: impl Into<String>) -> Self {
        if let Some(card) = self.cards.get_mut(index) {
            card.image = Some(image);
            card.label = label.into();
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuartetCard<T> {
    pub image: T,
    pub label: String,
}

/// A complete quartet: non-empty title, four cards with image and label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Quartet<T> {
    title: String,
    cards: Vec<QuartetCard<T>>,
}

/// One printable card face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuartetFace<'a, T> {
    pub title: &'a str,
    pub image: &'a T,
    /// Labels of all four cards, in quartet order.
    pub labels: Vec<&'a str>,
    /// Position of this card's own label.
    pub highlighted: usize,
}

impl<T> Quartet<T> {
    /// Validate a draft. Titles and labels are trimmed.
    pub fn from_draft(draft: QuartetDraft<T>) -> Result<Self, GameError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(GameError::EmptyQuartetTitle);
        }

        let mut cards = Vec::with_capacity(CARDS_PER_QUARTET);
        for (card, draft_card) in draft.cards.into_iter().enumerate() {
            let label = draft_card.label.trim().to_string();
            match draft_card.image {
                Some(image) if !label.is_empty() => cards.push(QuartetCard { image, label }),
                _ => return Err(GameError::IncompleteQuartetCard { card }),
            }
        }

        Ok(Self { title, cards })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn cards(&self) -> &[QuartetCard<T>] {
        &self.cards
    }

    /// The four printable faces.
    #[must_use]
    pub fn faces(&self) -> Vec<QuartetFace<'_, T>> {
        let labels: Vec<&str> = self.cards.iter().map(|c| c.label.as_str()).collect();
        self.cards
            .iter()
            .enumerate()
            .map(|(highlighted, card)| QuartetFace {
                title: &self.title,
                image: &card.image,
                labels: labels.clone(),
                highlighted,
            })
            .collect()
    }

    /// Back to an editable draft.
    #[must_use]
    pub fn to_draft(&self) -> QuartetDraft<T>
    where
        T: Clone,
    {
        let mut draft = QuartetDraft::new(self.title.clone());
        for (slot, card) in draft.cards.iter_mut().zip(&self.cards) {
            slot.image = Some(card.image.clone());
            slot.label = card.label.clone();
        }
        draft
    }
}

/// The quartets of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuartetSet<T> {
    quartets: Vec<Quartet<T>>,
}

impl<T> Default for QuartetSet<T> {
    fn default() -> Self {
        Self { quartets: Vec::new() }
    }
}

impl<T> QuartetSet<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a quartet, returning its index.
    pub fn save(&mut self, draft: QuartetDraft<T>) -> Result<usize, GameError> {
        let quartet = Quartet::from_draft(draft)?;
        self.quartets.push(quartet);
        Ok(self.quartets.len() - 1)
    }

    /// Validate and replace the quartet at `index`.
    pub fn replace(&mut self, index: usize, draft: QuartetDraft<T>) -> Result<(), GameError> {
        self.check_index(index)?;
        self.quartets[index] = Quartet::from_draft(draft)?;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Quartet<T>, GameError> {
        self.check_index(index)?;
        Ok(self.quartets.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Quartet<T>> {
        self.quartets.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quartets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quartets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quartet<T>> {
        self.quartets.iter()
    }

    /// Every printable face of every quartet, quartet by quartet.
    #[must_use]
    pub fn faces(&self) -> Vec<QuartetFace<'_, T>> {
        self.quartets.iter().flat_map(Quartet::faces).collect()
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index < self.quartets.len() {
            Ok(())
        } else {
            Err(GameError::QuartetOutOfRange {
                index,
                len: self.quartets.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> QuartetDraft<&'static str> {
        QuartetDraft::new("Fruit")
            .with_card(0, "apple.png", "Apple")
            .with_card(1, "pear.png", "Pear")
            .with_card(2, "plum.png", "Plum")
            .with_card(3, "fig.png", "Fig")
    }

    #[test]
    fn test_complete_draft() {
        let quartet = Quartet::from_draft(fruit()).unwrap();
        assert_eq!(quartet.title(), "Fruit");
        assert_eq!(quartet.cards().len(), 4);
        assert_eq!(quartet.cards()[2].label, "Plum");
    }

    #[test]
    fn test_empty_title() {
        let mut draft = fruit();
        draft.title = "   ".to_string();
        assert_eq!(Quartet::from_draft(draft), Err(GameError::EmptyQuartetTitle));
    }

    #[test]
    fn test_incomplete_card() {
        let mut draft = fruit();
        draft.cards[1].label = " ".to_string();
        assert_eq!(Quartet::from_draft(draft), Err(GameError::IncompleteQuartetCard { card: 1 }));

        let mut draft = fruit();
        draft.cards[3].image = None;
        assert_eq!(Quartet::from_draft(draft), Err(GameError::IncompleteQuartetCard { card: 3 }));
    }

    #[test]
    fn test_faces() {
        let quartet = Quartet::from_draft(fruit()).unwrap();
        let faces = quartet.faces();

        assert_eq!(faces.len(), 4);
        for (i, face) in faces.iter().enumerate() {
            assert_eq!(face.title, "Fruit");
            assert_eq!(face.highlighted, i);
            assert_eq!(face.labels, vec!["Apple", "Pear", "Plum", "Fig"]);
        }
        assert_eq!(*faces[3].image, "fig.png");
    }

    #[test]
    fn test_draft_round_trip() {
        let quartet = Quartet::from_draft(fruit()).unwrap();
        assert_eq!(quartet.to_draft(), fruit());
    }

    #[test]
    fn test_set_editing() {
        let mut set = QuartetSet::new();
        assert_eq!(set.save(fruit()), Ok(0));

        let animals = QuartetDraft::new("Animals")
            .with_card(0, "cat.png", "Cat")
            .with_card(1, "dog.png", "Dog")
            .with_card(2, "owl.png", "Owl")
            .with_card(3, "cow.png", "Cow");
        assert_eq!(set.save(animals.clone()), Ok(1));
        assert_eq!(set.faces().len(), 8);

        assert_eq!(set.replace(0, animals), Ok(()));
        assert_eq!(set.get(0).map(Quartet::title), Some("Animals"));

        assert_eq!(set.replace(5, fruit()), Err(GameError::QuartetOutOfRange { index: 5, len: 2 }));
        assert!(set.save(QuartetDraft::default()).is_err());
        assert_eq!(set.len(), 2);

        let removed = set.remove(1).unwrap();
        assert_eq!(removed.title(), "Animals");
        assert_eq!(set.len(), 1);
        assert!(set.remove(1).is_err());
    }
}
