#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Whatever gets accepted must validate afterwards.
        if let Ok(full) = cpf::compute_check_digits(s) {
            assert_eq!(cpf::validate(&full), Ok(true));
        }
    }
});
