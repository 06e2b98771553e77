use crate::participant::Participant;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A meeting that still needs a time, along with everyone's preferred slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizeRequest {
    #[cfg_attr(feature = "serde", serde(default))]
    pub meeting_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub participants: Vec<Participant>,
}

impl OptimizeRequest {
    pub fn new(meeting_name: &str, participants: Vec<Participant>) -> OptimizeRequest {
        OptimizeRequest {
            meeting_name: meeting_name.to_string(),
            participants,
        }
    }
}

// Slots are drawn from a small grid so that fuzzed participants actually
// overlap; random strings would almost always fail validation.
#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for OptimizeRequest {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        const NAMES: [&str; 6] = ["Alice", "Bob", "Carol", "Dan", "alice", "Zoë"];

        let len = u.int_in_range::<usize>(1..=16)?;
        let mut participants = Vec::with_capacity(len);
        for _ in 0..len {
            let name = u.choose(&NAMES)?;
            let slot_count = u.int_in_range::<usize>(0..=8)?;
            let mut slots = Vec::with_capacity(slot_count);
            for _ in 0..slot_count {
                let day = u.int_in_range::<u8>(1..=3)?;
                let hour = u.int_in_range::<u8>(8..=11)?;
                let minute = u.choose(&[0_u8, 30])?;
                slots.push(format!("2025-01-{:02}T{:02}:{:02}", day, hour, minute));
            }
            participants.push(Participant::new(name, slots));
        }

        Ok(OptimizeRequest::new(&u.arbitrary::<String>()?, participants))
    }
}

/// A winning slot and the (sorted) names of everyone who voted for it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimalSlot {
    pub slot: String,
    pub participants: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizeResponse {
    pub meeting_name: String,
    pub max_participants: usize,
    /// Every slot tied for `max_participants`, ordered by slot.
    pub optimal_slots: Vec<OptimalSlot>,
}
