#![no_main]
use bigsigned::BigSigned;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(x) = BigSigned::from_decimal_digits(s) {
            assert_eq!(x.is_zero(), x.limbs().is_empty());
        }
    }
});
