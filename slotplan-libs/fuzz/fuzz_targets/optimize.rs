#![no_main]
use libfuzzer_sys::fuzz_target;
use std::collections::{HashMap, HashSet};
use slotplan_libs::{optimize, OptimizeRequest, ValidationError};

fuzz_target!(|request: OptimizeRequest| {
    #[cfg(feature = "log")]
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply();

    let mut tally: HashMap<&str, usize> = HashMap::new();
    for participant in request.participants.iter() {
        if let Some(slots) = participant.preferred_slots.as_ref() {
            for slot in slots.iter().collect::<HashSet<_>>() {
                *tally.entry(slot.as_str()).or_default() += 1;
            }
        }
    }

    let response = match optimize(&request) {
        Ok(response) => response,
        Err(ValidationError::NoSlots) => {
            assert!(tally.is_empty(), "NoSlots returned with {:?}", tally);
            return;
        }
        Err(e) => panic!("Generated request was rejected: {}", e),
    };

    assert_eq!(response.meeting_name, request.meeting_name);
    assert_eq!(
        Some(&response.max_participants),
        tally.values().max(),
        "maxParticipants is not the highest tally"
    );

    let winners: HashSet<&str> = response
        .optimal_slots
        .iter()
        .map(|s| s.slot.as_str())
        .collect();
    for (slot, count) in tally.iter() {
        assert_eq!(
            winners.contains(slot),
            *count == response.max_participants,
            "Slot {} with tally {} was misplaced",
            slot,
            count
        );
    }

    assert!(
        response
            .optimal_slots
            .windows(2)
            .all(|pair| pair[0].slot < pair[1].slot),
        "Optimal slots are not in ascending order"
    );
    assert!(
        response
            .optimal_slots
            .iter()
            .all(|s| s.participants.windows(2).all(|pair| pair[0] <= pair[1])),
        "Participants are not sorted"
    );

    assert_eq!(optimize(&request), Ok(response));
});
