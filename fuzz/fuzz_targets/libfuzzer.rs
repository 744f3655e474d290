#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    nbt_inventory_fuzz::test_round_trip(data);
    nbt_inventory_fuzz::test_region(data);
});
