//! Box definitions and the content table
//!
//! This module defines the immutable content table the game is played over:
//! an ordered list of box definitions, each carrying a kind-specific payload
//! (question, bonus, or zonk). The table is assembled once at startup,
//! validated, and injected into the state machine as a read-only dependency
//! so content can be swapped without touching the game logic.

use std::collections::HashMap;

use enum_map::Enum;
use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::constants::catalog::{
    MAX_BOX_COUNT, MAX_DESCRIPTION_LENGTH, MAX_HINT_LENGTH, MAX_TITLE_LENGTH,
};

use super::{answer::AnswerKey, id::BoxId};

/// Validates that a point value is a positive reward
fn validate_reward(points: &i32, _ctx: &()) -> garde::Result {
    if *points > 0 {
        Ok(())
    } else {
        Err(garde::Error::new("reward must be positive"))
    }
}

/// Validates that a point value is a non-positive penalty
fn validate_penalty(points: &i32, _ctx: &()) -> garde::Result {
    if *points <= 0 {
        Ok(())
    } else {
        Err(garde::Error::new("penalty cannot be positive"))
    }
}

/// Content carried by a question box
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuestionBox {
    /// The answer a submission must match
    #[garde(skip)]
    pub expected_answer: AnswerKey,
    /// Reward when answered correctly; a wrong answer awards nothing
    #[garde(custom(validate_reward))]
    pub points: i32,
    /// Optional hint shown alongside the question
    #[garde(inner(length(chars, max = MAX_HINT_LENGTH)))]
    pub hint: Option<String>,
}

/// Content carried by a bonus box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BonusBox {
    /// Fixed award applied on resolution, no answer required
    #[garde(custom(validate_reward))]
    pub points: i32,
}

/// Content carried by a zonk box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ZonkBox {
    /// Fixed non-positive delta applied on resolution
    #[garde(custom(validate_penalty))]
    pub points: i32,
}

/// The kind-specific payload of a box
///
/// Fields that only make sense for one kind live on that kind's case, so a
/// zonk carrying an expected answer is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub enum BoxContent {
    /// A math question with a reward for the correct answer
    Question(#[garde(dive)] QuestionBox),
    /// A free award
    Bonus(#[garde(dive)] BonusBox),
    /// A penalty
    Zonk(#[garde(dive)] ZonkBox),
}

/// The kind of a box without its payload
///
/// Useful for filtering and tallying boxes by type without needing the
/// payload data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum BoxKind {
    /// A math question
    Question,
    /// A free award
    Bonus,
    /// A penalty
    Zonk,
}

impl BoxContent {
    /// Returns the kind of this content without the payload
    pub fn kind(&self) -> BoxKind {
        match self {
            Self::Question(_) => BoxKind::Question,
            Self::Bonus(_) => BoxKind::Bonus,
            Self::Zonk(_) => BoxKind::Zonk,
        }
    }

    /// Returns the fixed point value carried by the box
    ///
    /// For questions this is the reward for a correct answer; for bonuses
    /// and zonks it is the delta applied unconditionally on resolution.
    pub fn points(&self) -> i32 {
        match self {
            Self::Question(question) => question.points,
            Self::Bonus(bonus) => bonus.points,
            Self::Zonk(zonk) => zonk.points,
        }
    }
}

/// A single selectable unit of content from the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BoxDefinition {
    /// Stable identity of the box within the catalog
    #[garde(skip)]
    pub id: BoxId,
    /// Short display label shown on the closed box and result screens
    #[garde(length(chars, min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,
    /// Full prompt or flavor text shown when the box is opened
    #[garde(length(chars, min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,
    /// Kind-specific payload
    #[garde(dive)]
    pub content: BoxContent,
}

impl BoxDefinition {
    /// Returns the kind of this box
    pub fn kind(&self) -> BoxKind {
        self.content.kind()
    }

    /// Returns the fixed point value carried by this box
    pub fn points(&self) -> i32 {
        self.content.points()
    }
}

/// Errors reported while assembling a catalog
#[derive(Error, Debug)]
pub enum Error {
    /// The table contains no boxes
    #[error("catalog contains no boxes")]
    Empty,
    /// The table is larger than the supported maximum
    #[error("catalog exceeds {MAX_BOX_COUNT} boxes")]
    TooManyBoxes,
    /// Box ids start at 1; zero is reserved as invalid
    #[error("box ids must be positive")]
    ZeroId,
    /// The same id appears on two definitions
    #[error("duplicate box id {0}")]
    DuplicateId(BoxId),
    /// A definition failed content validation
    #[error("invalid box {id}: {report}")]
    Invalid {
        /// Id of the offending definition
        id: BoxId,
        /// The validation failures
        report: garde::Report,
    },
}

/// Serialization helper for `BoxCatalog`
#[derive(Deserialize)]
struct CatalogSerde {
    boxes: Vec<BoxDefinition>,
}

/// An immutable, ordered table of box definitions
///
/// The catalog is the read-only content dependency of a game: the state
/// machine only ever looks up the clicked box's definition by id. The
/// id index is rebuilt when a catalog is deserialized, since it is derived
/// data and not part of the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogSerde")]
pub struct BoxCatalog {
    /// Definitions in table order
    boxes: Vec<BoxDefinition>,

    /// Index from id to position in `boxes` (not serialized)
    #[serde(skip)]
    by_id: HashMap<BoxId, usize>,
}

impl TryFrom<CatalogSerde> for BoxCatalog {
    type Error = Error;

    /// Revalidates a deserialized table and rebuilds the id index
    fn try_from(serde: CatalogSerde) -> Result<Self, Error> {
        Self::new(serde.boxes)
    }
}

impl BoxCatalog {
    /// Builds a catalog after validating every definition
    ///
    /// # Arguments
    ///
    /// * `boxes` - The definitions in display order
    ///
    /// # Errors
    ///
    /// * `Error::Empty` - The list contains no definitions
    /// * `Error::TooManyBoxes` - The list exceeds the supported maximum
    /// * `Error::ZeroId` - A definition uses the reserved id zero
    /// * `Error::DuplicateId` - Two definitions share an id
    /// * `Error::Invalid` - A definition failed content validation
    pub fn new(boxes: Vec<BoxDefinition>) -> Result<Self, Error> {
        if boxes.is_empty() {
            return Err(Error::Empty);
        }
        if boxes.len() > MAX_BOX_COUNT {
            return Err(Error::TooManyBoxes);
        }

        let mut by_id = HashMap::with_capacity(boxes.len());
        for (position, definition) in boxes.iter().enumerate() {
            if definition.id.value() == 0 {
                return Err(Error::ZeroId);
            }
            if let Err(report) = definition.validate() {
                return Err(Error::Invalid {
                    id: definition.id,
                    report,
                });
            }
            if by_id.insert(definition.id, position).is_some() {
                return Err(Error::DuplicateId(definition.id));
            }
        }

        Ok(Self { boxes, by_id })
    }

    /// Looks up a definition by id
    ///
    /// # Returns
    ///
    /// The definition if the id exists in the table, otherwise `None`
    pub fn get(&self, id: BoxId) -> Option<&BoxDefinition> {
        self.by_id.get(&id).map(|&position| &self.boxes[position])
    }

    /// Whether the id exists in the table
    pub fn contains(&self, id: BoxId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Returns the number of boxes in the table
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Checks whether the table contains any boxes
    ///
    /// Always `false` for a constructed catalog, which rejects empty
    /// tables.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterates over the definitions in table order
    pub fn iter(&self) -> impl Iterator<Item = &BoxDefinition> {
        self.boxes.iter()
    }
}
