#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Anything that validates must also parse.
        if let Ok(true) = cpf::validate(s) {
            assert!(s.parse::<cpf::Cpf>().is_ok());
        }
    }
});
