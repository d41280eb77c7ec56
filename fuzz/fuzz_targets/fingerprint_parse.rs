#![no_main]

use hazzy::Fingerprint;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    // Anything that parses must print back unchanged
    if let Ok(fp) = input.parse::<Fingerprint>() {
        assert_eq!(fp.to_string(), input);
        assert_eq!(fp.coarse().len(), 2);
        assert_eq!(fp.fine().len() % 2, 0);
    }
});
