use crate::limits::Limits;
use crate::meeting::{OptimalSlot, OptimizeRequest, OptimizeResponse};
use crate::slot::is_valid_slot;
use itertools::Itertools;
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Everything that can be wrong with a request. All of these are caused by
/// the caller's input; the optimizer has no other way to fail.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ValidationError {
    #[error("Invalid input: Participants list cannot be empty.")]
    EmptyParticipants,
    #[error("Invalid input: {location} has {found} entries, at most {expected} are supported.")]
    UnsupportedLength {
        location: String,
        expected: usize,
        found: usize,
    },
    #[error("Invalid input: Participant \"{name}\" has no preferredSlots.")]
    MissingPreferredSlots { name: String },
    #[error("Invalid input: Slot '{slot}' is not in ISO 8601 format (YYYY-MM-DDTHH:mm).")]
    InvalidSlot { slot: String },
    #[error("No time slots provided by any participant.")]
    NoSlots,
}

/// Slot -> names of the participants voting for it, in input order.
/// Keyed by a `BTreeMap` so slots come out already sorted.
type Tally<'a> = BTreeMap<&'a str, Vec<&'a str>>;

/// Finds the slots that the most participants can attend. Requests of any
/// size are accepted; see [`optimize_with_limits`] to cap them.
///
/// # Examples
/// ```
/// use slotplan_libs::{optimize, OptimizeRequest, Participant};
///
/// let request = OptimizeRequest::new(
///     "Standup",
///     vec![
///         Participant::new("B", vec!["2025-01-01T10:00".to_string()]),
///         Participant::new("A", vec!["2025-01-01T10:00".to_string()]),
///         Participant::new("C", vec!["2025-01-01T12:00".to_string()]),
///     ],
/// );
///
/// let response = optimize(&request).unwrap();
///
/// assert_eq!(response.meeting_name, "Standup");
/// assert_eq!(response.max_participants, 2);
/// assert_eq!(response.optimal_slots.len(), 1);
/// assert_eq!(response.optimal_slots[0].slot, "2025-01-01T10:00");
/// assert_eq!(response.optimal_slots[0].participants, vec!["A", "B"]);
/// ```
pub fn optimize(request: &OptimizeRequest) -> Result<OptimizeResponse, ValidationError> {
    optimize_with_limits(request, &Limits::unbounded())
}

/// Finds the slots that the most participants can attend, rejecting
/// requests larger than `limits`.
///
/// Ties are never broken: every slot sharing the highest tally is returned,
/// ordered by slot, each with its voters sorted by name.
///
/// # Errors
/// Input is checked in this order, and the first problem found is returned:
///
/// 1. `ValidationError::EmptyParticipants` if there is nobody to meet with.
/// 2. `ValidationError::UnsupportedLength` if there are more participants
///    than `limits` allow.
/// 3. Then for each participant, in order:
///     - `ValidationError::MissingPreferredSlots` if their slots are missing,
///     - `ValidationError::UnsupportedLength` if they list too many distinct
///       slots,
///     - `ValidationError::InvalidSlot` for the first slot not starting with
///       `YYYY-MM-DDTHH:mm`.
/// 4. `ValidationError::NoSlots` if nobody listed a single slot.
///
/// ```
/// use slotplan_libs::{optimize_with_limits, Limits, OptimizeRequest, Participant, ValidationError};
///
/// let request = OptimizeRequest::new(
///     "Retro",
///     vec![
///         Participant::new("A", vec![]),
///         Participant::new("B", vec!["next tuesday".to_string()]),
///     ],
/// );
///
/// assert_eq!(
///     optimize_with_limits(&request, &Limits::default()),
///     Err(ValidationError::InvalidSlot {
///         slot: "next tuesday".to_string()
///     })
/// );
///
/// assert!(matches!(
///     optimize_with_limits(&request, &Limits::new(1, 10)),
///     Err(ValidationError::UnsupportedLength {
///         expected: 1,
///         found: 2,
///         ..
///     })
/// ));
/// ```
pub fn optimize_with_limits(
    request: &OptimizeRequest,
    limits: &Limits,
) -> Result<OptimizeResponse, ValidationError> {
    debug!(
        "Optimizing slots for meeting {:?} with {} participants",
        request.meeting_name,
        request.participants.len()
    );

    if request.participants.is_empty() {
        return Err(ValidationError::EmptyParticipants);
    }

    if request.participants.len() > limits.max_participants {
        return Err(ValidationError::UnsupportedLength {
            location: "Participants list".to_string(),
            expected: limits.max_participants,
            found: request.participants.len(),
        });
    }

    let tally = tally(request, limits)?;

    let max_participants = tally
        .values()
        .map(Vec::len)
        .max()
        .ok_or(ValidationError::NoSlots)?;

    let optimal_slots = tally
        .into_iter()
        .filter(|(_, voters)| voters.len() == max_participants)
        .map(|(slot, voters)| OptimalSlot {
            slot: slot.to_string(),
            participants: voters.into_iter().sorted().map(str::to_string).collect(),
        })
        .collect_vec();

    debug!(
        "Found {} optimal slots with {} participants each",
        optimal_slots.len(),
        max_participants
    );

    Ok(OptimizeResponse {
        meeting_name: request.meeting_name.clone(),
        max_participants,
        optimal_slots,
    })
}

fn tally<'a>(request: &'a OptimizeRequest, limits: &Limits) -> Result<Tally<'a>, ValidationError> {
    let mut tally = Tally::new();

    for participant in request.participants.iter() {
        let slots = participant.distinct_slots().ok_or_else(|| {
            ValidationError::MissingPreferredSlots {
                name: participant.name.clone(),
            }
        })?;

        if slots.len() > limits.max_slots_per_participant {
            return Err(ValidationError::UnsupportedLength {
                location: format!("Participant \"{}\"", participant.name),
                expected: limits.max_slots_per_participant,
                found: slots.len(),
            });
        }

        if let Some(slot) = slots.iter().find(|slot| !is_valid_slot(slot)) {
            return Err(ValidationError::InvalidSlot {
                slot: slot.to_string(),
            });
        }

        trace!("Tallying {} votes of {:?}", slots.len(), participant.name);

        for slot in slots {
            tally.entry(slot).or_default().push(participant.name.as_str());
        }
    }

    Ok(tally)
}
