#![no_main]
use libfuzzer_sys::fuzz_target;
use slotplan_libs::slot::is_valid_slot;

fuzz_target!(|slot: &str| {
    if is_valid_slot(slot) {
        let bytes = slot.as_bytes();
        assert!(bytes.len() >= 16, "Too short to be a slot: {:?}", slot);
        for (i, b) in bytes[..16].iter().enumerate() {
            match i {
                4 | 7 => assert_eq!(*b, b'-', "Expected '-' in {:?}", slot),
                10 => assert_eq!(*b, b'T', "Expected 'T' in {:?}", slot),
                13 => assert_eq!(*b, b':', "Expected ':' in {:?}", slot),
                _ => assert!(b.is_ascii_digit(), "Expected a digit in {:?}", slot),
            }
        }
    }
});
