#![no_main]

use libfuzzer_sys::fuzz_target;
use tweakunits::config::Settings;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as JSON into Settings
    // This tests for crashes, panics, and undefined behavior
    if let Ok(s) = std::str::from_utf8(data) {
        let _result: Result<Settings, _> = serde_json::from_str(s);
    }
});
