#![no_main]

use libfuzzer_sys::fuzz_target;
use tweakunits::codec::command;

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary bytes as a pasted lobby command
    // Decode errors are expected; crashes and panics are not
    if let Ok(s) = std::str::from_utf8(data) {
        let _result = command::decode(s);
    }
});
