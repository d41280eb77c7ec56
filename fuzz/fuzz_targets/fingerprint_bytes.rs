#![no_main]

use hazzy::{FingerprintConfig, FingerprintError, Fingerprinter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Test with various block/segment configurations
    let configs = vec![
        // Tiny blocks
        FingerprintConfig::new(16, 4).unwrap(),
        // Medium blocks
        FingerprintConfig::new(4096, 256).unwrap(),
        // Default config
        FingerprintConfig::default(),
    ];

    for config in configs {
        let fingerprinter = Fingerprinter::new(config).unwrap();
        let result = fingerprinter.fingerprint_bytes(data.clone());

        if data.is_empty() {
            assert!(matches!(result, Err(FingerprintError::EmptyInput)));
            continue;
        }

        let fp = result.unwrap();

        // Verify: field shapes
        assert_eq!(fp.coarse().len(), 2);
        assert_eq!(
            fp.segment_count(),
            data.len().div_ceil(config.segment_size())
        );
        assert!(fp.ratio() <= 1000);

        // Verify: the string form parses back
        let parsed: hazzy::Fingerprint = fp.to_string().parse().unwrap();
        assert_eq!(parsed, fp);

        // Verify: update granularity does not matter
        let mut engine = fingerprinter.engine();
        for piece in data.chunks(7) {
            engine.update(piece).unwrap();
        }
        assert_eq!(engine.finish().unwrap(), fp);
    }
});
