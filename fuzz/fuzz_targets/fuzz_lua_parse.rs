#![no_main]

use libfuzzer_sys::fuzz_target;
use tweakunits::codec::lua;

fuzz_target!(|data: &[u8]| {
    // Parse arbitrary bytes as ConfigText
    // The parser is lenient by contract and must never panic
    if let Ok(s) = std::str::from_utf8(data) {
        let _disabled = lua::parse(s);
    }
});
