#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any answers text either fails to parse or resolves without panicking
        for name in ["answers.yml", "answers.toml", "answers.json"] {
            if let Ok(raw) = keel::infrastructure::answers::parse(Path::new(name), content) {
                let _ = keel::blueprint::resolver().resolve(&raw);
            }
        }
    }
});
