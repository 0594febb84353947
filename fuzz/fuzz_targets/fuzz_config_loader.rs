#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary text must never panic the config loader: either it parses
    // into a Config or it is rejected with an error. Validation after a
    // successful parse must hold to the same rule.
    if let Ok(cfg) = toml::from_str::<beeper_config::Config>(data) {
        let _ = cfg.validate();
    }
});
