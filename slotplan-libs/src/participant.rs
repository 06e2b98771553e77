use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Participant {
    pub name: String,
    /// `None` when the caller sent no `preferredSlots` at all (or `null`),
    /// which is rejected by the optimizer. An empty list is allowed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_slots: Option<Vec<String>>,
}

impl Participant {
    /// Constructs a new Participant who would like to meet at any of
    /// `preferred_slots`.
    pub fn new(name: &str, preferred_slots: Vec<String>) -> Participant {
        Participant {
            name: name.to_string(),
            preferred_slots: Some(preferred_slots),
        }
    }

    /// The participant's slots with repeats removed, in the order they were
    /// first listed. Voting for a slot twice is still a single vote.
    ///
    /// # Examples
    /// ```
    /// use slotplan_libs::participant::Participant;
    ///
    /// let participant = Participant::new(
    ///     "A",
    ///     vec![
    ///         "2025-01-01T10:00".to_string(),
    ///         "2025-01-01T09:00".to_string(),
    ///         "2025-01-01T10:00".to_string(),
    ///     ],
    /// );
    ///
    /// assert_eq!(
    ///     participant.distinct_slots(),
    ///     Some(vec!["2025-01-01T10:00", "2025-01-01T09:00"])
    /// );
    /// ```
    pub fn distinct_slots(&self) -> Option<Vec<&str>> {
        self.preferred_slots
            .as_ref()
            .map(|slots| slots.iter().map(String::as_str).unique().collect_vec())
    }
}
