#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok((key, value)) = keel::infrastructure::answers::parse_override(content) {
            let mut raw = keel::RawAnswers::new();
            raw.insert(key, value);
            let _ = keel::blueprint::resolver().resolve(&raw);
        }
    }
});
